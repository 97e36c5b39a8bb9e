use leptos::prelude::*;
use roster_types::{Member, MemberStatus};

use crate::components::toast::ToastContext;

#[server]
pub async fn fetch_members(query: String) -> Result<Vec<Member>, ServerFnError> {
    let request = crate::server::request_client().await?;
    let trimmed = query.trim();
    let result = if trimmed.is_empty() {
        request.client.list_members().await
    } else {
        request.client.search_members(trimmed).await
    };
    result.map_err(|e| request.fail(e))
}

#[server]
pub async fn remove_member(id: i64) -> Result<(), ServerFnError> {
    let request = crate::server::request_client().await?;
    request
        .client
        .delete_member(id)
        .await
        .map_err(|e| request.fail(e))
}

pub(crate) fn status_class(status: &MemberStatus) -> &'static str {
    match status {
        MemberStatus::Active => "status-active",
        MemberStatus::Inactive => "status-inactive",
        MemberStatus::Suspended => "status-suspended",
        MemberStatus::Regular => "status-regular",
    }
}

#[component]
pub fn MembersPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (members, setMembers) = signal(Option::<Result<Vec<Member>, String>>::None);
    let (query, setQuery) = signal(String::new());
    #[allow(unused_variables)]
    let (deleting, setDeleting) = signal(Option::<i64>::None);
    #[allow(unused_variables)]
    let toast = expect_context::<ToastContext>();

    let runSearch = move |q: String| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;
            spawn_local(async move {
                let result = fetch_members(q).await.map_err(|e| e.to_string());
                setMembers.set(Some(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = q;
        }
    };

    // Initial fetch on mount
    #[cfg(feature = "hydrate")]
    runSearch(String::new());

    let handleDelete = move |memberId: i64| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;
            setDeleting.set(Some(memberId));
            spawn_local(async move {
                match remove_member(memberId).await {
                    Ok(()) => toast.success("Member removed."),
                    Err(e) => toast.error(e.to_string()),
                }
                setDeleting.set(None);
                // Refetch the current view
                let result = fetch_members(query.get_untracked())
                    .await
                    .map_err(|e| e.to_string());
                setMembers.set(Some(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = memberId;
        }
    };

    view! {
        <div class="dashboard-header">
            <h1>"Members"</h1>
            <p class="subtitle">"Association member roster"</p>
            <a class="btn btn-primary" href="/members/new">
                "Add member"
            </a>
        </div>

        <form
            class="search-bar"
            on:submit=move |ev| {
                ev.prevent_default();
                runSearch(query.get());
            }
        >
            <input
                type="search"
                placeholder="Search by name or email"
                prop:value=query
                on:input=move |ev| setQuery.set(event_target_value(&ev))
            />
            <button type="submit" class="btn btn-ghost">
                "Search"
            </button>
        </form>

        {move || {
            match members.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading members..."
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(list)) => {
                    if list.is_empty() {
                        view! {
                            <div class="member-empty">
                                <p>"No members found"</p>
                            </div>
                        }
                            .into_any()
                    } else {
                        let currentDelete = deleting.get();
                        view! {
                            <div class="card">
                                <table class="member-table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Email"</th>
                                            <th>"Role"</th>
                                            <th>"Status"</th>
                                            <th>"Member since"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|member| {
                                                let memberId = member.id;
                                                let isDeleting = currentDelete == Some(memberId);
                                                view! {
                                                    <tr>
                                                        <td>
                                                            <a href=format!(
                                                                "/members/{memberId}",
                                                            )>{member.full_name()}</a>
                                                        </td>
                                                        <td>{member.email.clone()}</td>
                                                        <td>{member.role.label()}</td>
                                                        <td>
                                                            <span class=format!(
                                                                "status-badge {}",
                                                                status_class(&member.status),
                                                            )>{member.status.label()}</span>
                                                        </td>
                                                        <td>{member.member_since.clone()}</td>
                                                        <td class="row-actions">
                                                            <a
                                                                class="btn btn-ghost btn-sm"
                                                                href=format!("/members/{memberId}/edit")
                                                            >
                                                                "Edit"
                                                            </a>
                                                            <button
                                                                class="btn btn-ghost btn-sm btn-danger"
                                                                disabled=isDeleting
                                                                on:click=move |_| handleDelete(memberId)
                                                            >
                                                                {if isDeleting { "Removing..." } else { "Remove" }}
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }
                            .into_any()
                    }
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"Failed to load members: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
            }
        }}
    }
}
