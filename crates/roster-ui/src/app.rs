use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};

use crate::components::nav::Nav;
use crate::components::toast::ToastProvider;
use crate::pages::login::LoginPage;
use crate::pages::member_detail::MemberDetailPage;
use crate::pages::member_form::MemberFormPage;
use crate::pages::members::MembersPage;
use crate::pages::register::RegisterPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/roster-console.css" />
        <Title text="Roster Console" />
        <ToastProvider>
            <Router>
                <Routes fallback=|| view! { <p>"Page not found."</p> }.into_any()>
                    <Route path=StaticSegment("login") view=LoginPage />
                    <Route path=StaticSegment("register") view=RegisterPage />
                    <Route path=StaticSegment("") view=MembersView />
                    <Route
                        path=(StaticSegment("members"), StaticSegment("new"))
                        view=MemberNewView
                    />
                    <Route
                        path=(StaticSegment("members"), ParamSegment("id"))
                        view=MemberDetailView
                    />
                    <Route
                        path=(StaticSegment("members"), ParamSegment("id"), StaticSegment("edit"))
                        view=MemberEditView
                    />
                </Routes>
            </Router>
        </ToastProvider>
    }
}

#[component]
fn MembersView() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                <MembersPage />
            </main>
        </div>
    }
}

#[component]
fn MemberDetailView() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                <MemberDetailPage />
            </main>
        </div>
    }
}

#[component]
fn MemberNewView() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                <MemberFormPage />
            </main>
        </div>
    }
}

#[component]
fn MemberEditView() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                <MemberFormPage />
            </main>
        </div>
    }
}
