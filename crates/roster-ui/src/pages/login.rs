use leptos::prelude::*;

#[server]
async fn login(email: String, password: String) -> Result<(), ServerFnError> {
    use roster_client::ApiError;

    let request = crate::server::request_client().await?;

    match request.client.login(&email, &password).await {
        Ok(session) => {
            crate::server::store_session_cookie(&session);
            leptos_axum::redirect("/");
            Ok(())
        }
        // A rejected login is a 401 with nowhere to redirect to: this is
        // already the login view. Surface it inline instead.
        Err(ApiError::Unauthorized) => Err(ServerFnError::new("Invalid email or password")),
        Err(e) => Err(ServerFnError::new(e.message())),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let loginAction = ServerAction::<Login>::new();
    let loginValue = loginAction.value();

    let hasError = move || loginValue.get().is_some_and(|result| result.is_err());

    let errorMessage = move || {
        loginValue
            .get()
            .and_then(|result| result.err())
            .map(|e| e.to_string())
            .unwrap_or_default()
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"R"</div>
                    <h1>"Roster Console"</h1>
                    <p>"Sign in to manage the member roster"</p>
                </div>

                {move || {
                    hasError()
                        .then(|| {
                            view! { <div class="login-error">{errorMessage()}</div> }
                        })
                }}

                <ActionForm action=loginAction>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="you@example.org"
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Enter your password"
                            required
                        />
                    </div>
                    <button type="submit" class="btn btn-primary">
                        "Sign In"
                    </button>
                </ActionForm>

                <p class="login-footer">
                    "Not a member yet? " <a href="/register">"Request membership"</a>
                </p>
            </div>
        </div>
    }
}
