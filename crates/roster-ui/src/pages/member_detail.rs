use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use roster_types::Member;

use crate::components::toast::ToastContext;
use crate::pages::members::status_class;

#[server]
pub async fn fetch_member(id: i64) -> Result<Member, ServerFnError> {
    let request = crate::server::request_client().await?;
    request
        .client
        .get_member(id)
        .await
        .map_err(|e| request.fail(e))
}

#[server]
async fn upload_photo(
    id: i64,
    file_name: String,
    content_type: String,
    data_base64: String,
) -> Result<Member, ServerFnError> {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use roster_client::PhotoUpload;

    let bytes = STANDARD
        .decode(data_base64.as_bytes())
        .map_err(|e| ServerFnError::new(format!("photo transfer corrupted: {e}")))?;

    let request = crate::server::request_client().await?;
    request
        .client
        .upload_member_photo(
            id,
            PhotoUpload {
                file_name,
                content_type,
                bytes,
            },
        )
        .await
        .map_err(|e| request.fail(e))
}

fn initials(member: &Member) -> String {
    let mut out = String::new();
    for part in [&member.first_name, &member.last_name] {
        if let Some(c) = part.chars().next() {
            out.push(c.to_ascii_uppercase());
        }
    }
    out
}

#[component]
pub fn MemberDetailPage() -> impl IntoView {
    let params = use_params_map();
    #[allow(unused_variables)]
    let memberId = move || {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    #[allow(unused_variables)]
    let (member, setMember) = signal(Option::<Result<Member, String>>::None);
    #[allow(unused_variables)]
    let (uploading, setUploading) = signal(false);
    #[allow(unused_variables)]
    let toast = expect_context::<ToastContext>();

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        match memberId() {
            Some(id) => spawn_local(async move {
                let result = fetch_member(id).await.map_err(|e| e.to_string());
                setMember.set(Some(result));
            }),
            None => setMember.set(Some(Err("invalid member id".into()))),
        }
    }

    let handlePhoto = move |ev| {
        #[cfg(feature = "hydrate")]
        {
            use base64::engine::general_purpose::STANDARD;
            use base64::Engine as _;
            use roster_types::photo::validate_photo;
            use wasm_bindgen::JsCast;
            use wasm_bindgen_futures::{spawn_local, JsFuture};

            let Some(id) = memberId() else {
                return;
            };
            let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            // Declared type and size checks; a rejected file never produces
            // an upload call.
            if let Err(reason) = validate_photo(&file.type_(), file.size() as u64) {
                toast.error(reason);
                input.set_value("");
                return;
            }

            let fileName = file.name();
            let contentType = file.type_();
            setUploading.set(true);
            spawn_local(async move {
                match JsFuture::from(file.array_buffer()).await {
                    Ok(buffer) => {
                        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
                        let encoded = STANDARD.encode(bytes);
                        match upload_photo(id, fileName, contentType, encoded).await {
                            Ok(updated) => {
                                toast.success("Photo updated.");
                                setMember.set(Some(Ok(updated)));
                            }
                            Err(e) => toast.error(e.to_string()),
                        }
                    }
                    Err(_) => toast.error("Could not read the selected file."),
                }
                setUploading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div class="dashboard-header">
            <h1>"Member"</h1>
            <p class="subtitle">"Profile and membership details"</p>
        </div>
        {move || {
            match member.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading member..."
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(m)) => {
                    let editHref = format!("/members/{}/edit", m.id);
                    let photo = match m.photo_url.clone() {
                        Some(url) => {
                            view! { <img class="member-photo" src=url alt=m.full_name() /> }
                                .into_any()
                        }
                        None => {
                            view! { <div class="photo-placeholder">{initials(&m)}</div> }
                                .into_any()
                        }
                    };
                    view! {
                        <div class="card member-detail">
                            <div class="member-photo-column">
                                {photo}
                                <label class="btn btn-ghost btn-sm upload-label">
                                    {move || if uploading.get() { "Uploading..." } else { "Change photo" }}
                                    <input
                                        type="file"
                                        accept="image/*"
                                        disabled=move || uploading.get()
                                        on:change=handlePhoto
                                    />
                                </label>
                            </div>
                            <div class="member-fields">
                                <h2>{m.full_name()}</h2>
                                <div class="field-row">
                                    <span class="field-label">"Email"</span>
                                    <span class="field-value">{m.email.clone()}</span>
                                </div>
                                <div class="field-row">
                                    <span class="field-label">"Phone"</span>
                                    <span class="field-value">{m.phone.clone()}</span>
                                </div>
                                <div class="field-row">
                                    <span class="field-label">"Role"</span>
                                    <span class="field-value">{m.role.label()}</span>
                                </div>
                                <div class="field-row">
                                    <span class="field-label">"Status"</span>
                                    <span class=format!(
                                        "status-badge {}",
                                        status_class(&m.status),
                                    )>{m.status.label()}</span>
                                </div>
                                <div class="field-row">
                                    <span class="field-label">"Member since"</span>
                                    <span class="field-value">{m.member_since.clone()}</span>
                                </div>
                                <div class="member-actions">
                                    <a class="btn btn-primary" href=editHref>
                                        "Edit"
                                    </a>
                                    <a class="btn btn-ghost" href="/">
                                        "Back to roster"
                                    </a>
                                </div>
                            </div>
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"Failed to load member: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
            }
        }}
    }
}
