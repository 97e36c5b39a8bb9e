use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use roster_types::{Member, MemberRole, MemberStatus};

#[server]
async fn save_member(
    id: Option<i64>,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    role: String,
    status: String,
    member_since: String,
) -> Result<Member, ServerFnError> {
    use roster_types::MemberDraft;

    // Required-field presence is the only invariant enforced on this side;
    // uniqueness and the rest are the backend's authority.
    for (label, value) in [
        ("First name", &first_name),
        ("Last name", &last_name),
        ("Email", &email),
    ] {
        if value.trim().is_empty() {
            return Err(ServerFnError::new(format!("{label} is required")));
        }
    }

    let role = MemberRole::parse(&role).ok_or_else(|| ServerFnError::new("Unknown role"))?;
    let status =
        MemberStatus::parse(&status).ok_or_else(|| ServerFnError::new("Unknown status"))?;

    let draft = MemberDraft {
        first_name,
        last_name,
        email,
        phone,
        role,
        status,
        member_since,
    };

    let request = crate::server::request_client().await?;
    let saved = match id {
        Some(id) => request.client.update_member(id, &draft).await,
        None => request.client.create_member(&draft).await,
    };

    match saved {
        Ok(member) => {
            leptos_axum::redirect(&format!("/members/{}", member.id));
            Ok(member)
        }
        Err(e) => Err(request.fail(e)),
    }
}

const ROLES: [MemberRole; 4] = [
    MemberRole::Member,
    MemberRole::Treasurer,
    MemberRole::Secretary,
    MemberRole::Admin,
];

const STATUSES: [MemberStatus; 4] = [
    MemberStatus::Active,
    MemberStatus::Inactive,
    MemberStatus::Suspended,
    MemberStatus::Regular,
];

#[component]
pub fn MemberFormPage() -> impl IntoView {
    let params = use_params_map();
    let editId = move || {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    // Edit mode loads the current record first; create mode starts blank.
    #[allow(unused_variables)]
    let (draft, setDraft) = signal(Option::<Result<Member, String>>::None);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        use crate::pages::member_detail::fetch_member;

        match editId() {
            Some(id) => spawn_local(async move {
                let result = fetch_member(id).await.map_err(|e| e.to_string());
                setDraft.set(Some(result));
            }),
            None => setDraft.set(Some(Ok(Member::default()))),
        }
    }

    let saveAction = ServerAction::<SaveMember>::new();
    let saveValue = saveAction.value();

    let saveError = move || {
        saveValue
            .get()
            .and_then(|result| result.err())
            .map(|e| e.to_string())
    };

    view! {
        <div class="dashboard-header">
            <h1>{move || if editId().is_some() { "Edit member" } else { "Add member" }}</h1>
            <p class="subtitle">"Names and email are required"</p>
        </div>
        {move || {
            match draft.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading..."
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(m)) => {
                    let isEdit = m.id != 0;
                    view! {
                        <div class="card form-card">
                            {move || {
                                saveError()
                                    .map(|message| {
                                        view! { <div class="login-error">{message}</div> }
                                    })
                            }}
                            <ActionForm action=saveAction>
                                {isEdit
                                    .then(|| {
                                        view! {
                                            <input type="hidden" name="id" value=m.id.to_string() />
                                        }
                                    })}
                                <div class="form-row">
                                    <div class="form-group">
                                        <label for="first_name">"First name"</label>
                                        <input
                                            id="first_name"
                                            name="first_name"
                                            value=m.first_name.clone()
                                            required
                                        />
                                    </div>
                                    <div class="form-group">
                                        <label for="last_name">"Last name"</label>
                                        <input
                                            id="last_name"
                                            name="last_name"
                                            value=m.last_name.clone()
                                            required
                                        />
                                    </div>
                                </div>
                                <div class="form-group">
                                    <label for="email">"Email"</label>
                                    <input
                                        type="email"
                                        id="email"
                                        name="email"
                                        value=m.email.clone()
                                        required
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="phone">"Phone"</label>
                                    <input id="phone" name="phone" value=m.phone.clone() />
                                </div>
                                <div class="form-row">
                                    <div class="form-group">
                                        <label for="role">"Role"</label>
                                        <select id="role" name="role">
                                            {ROLES
                                                .into_iter()
                                                .map(|role| {
                                                    view! {
                                                        <option value=role.as_str() selected={m.role == role}>
                                                            {role.label()}
                                                        </option>
                                                    }
                                                })
                                                .collect_view()}
                                        </select>
                                    </div>
                                    <div class="form-group">
                                        <label for="status">"Status"</label>
                                        <select id="status" name="status">
                                            {STATUSES
                                                .into_iter()
                                                .map(|status| {
                                                    view! {
                                                        <option value=status.as_str() selected={m.status == status}>
                                                            {status.label()}
                                                        </option>
                                                    }
                                                })
                                                .collect_view()}
                                        </select>
                                    </div>
                                </div>
                                <div class="form-group">
                                    <label for="member_since">"Member since"</label>
                                    <input
                                        type="date"
                                        id="member_since"
                                        name="member_since"
                                        value=m.member_since.clone()
                                    />
                                </div>
                                <button type="submit" class="btn btn-primary">
                                    {if isEdit { "Save changes" } else { "Create member" }}
                                </button>
                            </ActionForm>
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
