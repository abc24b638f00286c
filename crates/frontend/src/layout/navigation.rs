use leptos::prelude::*;
use thaw::*;

use super::Page;
use crate::system::auth::context::{do_logout, use_auth, use_session};

#[component]
pub fn Navigation(page: RwSignal<Page>) -> impl IntoView {
    let auth_state = use_auth();
    let session = StoredValue::new(use_session());

    let username = move || {
        auth_state
            .with(|s| s.user_info.as_ref().map(|u| u.username.clone()))
            .unwrap_or_else(|| "User".to_string())
    };
    let email = move || {
        auth_state
            .with(|s| s.user_info.as_ref().map(|u| u.email.clone()))
            .unwrap_or_default()
    };

    let page_links = Page::ALL
        .into_iter()
        .map(|target| {
            view! {
                <button
                    class=move || {
                        if page.get() == target {
                            "top-nav__link top-nav__link--active"
                        } else {
                            "top-nav__link"
                        }
                    }
                    on:click=move |_| page.set(target)
                >
                    {target.title()}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="top-nav">
            <span class="top-nav__brand">"Inventory Analytics"</span>
            <div class="top-nav__pages">{page_links}</div>
            <div class="top-nav__user">
                <span class="top-nav__username" title=email>{username}</span>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| do_logout(&session.get_value(), auth_state)
                >
                    "Log out"
                </Button>
            </div>
        </nav>
    }
}
