use leptos::prelude::*;

#[server]
async fn submit_registration(
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    message: Option<String>,
) -> Result<(), ServerFnError> {
    use roster_types::RegistrationRequest;

    for (label, value) in [
        ("First name", &first_name),
        ("Last name", &last_name),
        ("Email", &email),
    ] {
        if value.trim().is_empty() {
            return Err(ServerFnError::new(format!("{label} is required")));
        }
    }

    let registration = RegistrationRequest {
        first_name,
        last_name,
        email,
        phone: phone.filter(|p| !p.trim().is_empty()),
        message: message.filter(|m| !m.trim().is_empty()),
    };

    // Registration is public: the client simply carries no credential here.
    let request = crate::server::request_client().await?;
    request
        .client
        .register(&registration)
        .await
        .map_err(|e| request.fail(e))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let submitAction = ServerAction::<SubmitRegistration>::new();
    let submitValue = submitAction.value();

    let submitted = move || submitValue.get().is_some_and(|result| result.is_ok());

    let errorMessage = move || {
        submitValue
            .get()
            .and_then(|result| result.err())
            .map(|e| e.to_string())
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"R"</div>
                    <h1>"Request membership"</h1>
                    <p>"The board reviews every request"</p>
                </div>

                {move || {
                    if submitted() {
                        view! {
                            <div class="register-done">
                                <p>"Request received. You will hear from us by email."</p>
                                <a class="btn btn-ghost" href="/login">
                                    "Back to sign in"
                                </a>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="register-form">
                                {move || {
                                    errorMessage()
                                        .map(|message| {
                                            view! { <div class="login-error">{message}</div> }
                                        })
                                }}
                                <ActionForm action=submitAction>
                                    <div class="form-row">
                                        <div class="form-group">
                                            <label for="first_name">"First name"</label>
                                            <input id="first_name" name="first_name" required />
                                        </div>
                                        <div class="form-group">
                                            <label for="last_name">"Last name"</label>
                                            <input id="last_name" name="last_name" required />
                                        </div>
                                    </div>
                                    <div class="form-group">
                                        <label for="email">"Email"</label>
                                        <input type="email" id="email" name="email" required />
                                    </div>
                                    <div class="form-group">
                                        <label for="phone">"Phone (optional)"</label>
                                        <input id="phone" name="phone" />
                                    </div>
                                    <div class="form-group">
                                        <label for="message">"Message (optional)"</label>
                                        <textarea id="message" name="message" rows="3"></textarea>
                                    </div>
                                    <button type="submit" class="btn btn-primary">
                                        "Send request"
                                    </button>
                                </ActionForm>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
