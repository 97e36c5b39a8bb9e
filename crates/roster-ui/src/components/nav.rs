use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav-sidebar">
            <div class="nav-brand">
                <div class="brand-icon">"R"</div>
                <span class="brand-text">"Roster Console"</span>
            </div>
            <ul class="nav-links">
                <li class="nav-item">
                    <a href="/">
                        <span class="nav-icon">"\u{2630}"</span>
                        <span>"Members"</span>
                    </a>
                </li>
                <li class="nav-item">
                    <a href="/members/new">
                        <span class="nav-icon">"\u{002B}"</span>
                        <span>"Add member"</span>
                    </a>
                </li>
                <li class="nav-item">
                    <a href="/register">
                        <span class="nav-icon">"\u{270E}"</span>
                        <span>"Registration"</span>
                    </a>
                </li>
            </ul>
            <div class="nav-footer">
                <a href="/api/session/logout" rel="external">
                    <span class="nav-icon">"\u{21A9}"</span>
                    <span>"Sign out"</span>
                </a>
            </div>
        </nav>
    }
}
