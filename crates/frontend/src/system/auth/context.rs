use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::session::Session;
use super::{api, storage};
use crate::shared::error::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    /// A stored credential is being validated with `GET /me`
    pub restoring: bool,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user_info.is_some()
    }
}

/// Auth context provider component
///
/// Owns the [`Session`]; a 401 anywhere clears the stored credential and
/// resets [`AuthState`], which sends the user back to the login page.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let stored_token = storage::get_access_token();
    let auth_state = RwSignal::new(AuthState {
        restoring: stored_token.is_some(),
        user_info: None,
    });

    let session = Session::new(stored_token, move || {
        storage::clear_tokens();
        auth_state.set(AuthState::default());
    });

    // Try to restore session from localStorage on mount
    let restore_session = session.clone();
    Effect::new(move |_| {
        let session = restore_session.clone();
        spawn_local(async move {
            if !session.is_authenticated() {
                return;
            }
            match api::get_current_user(&session).await {
                Ok(user_info) => {
                    auth_state.set(AuthState {
                        restoring: false,
                        user_info: Some(user_info),
                    });
                }
                Err(err) => {
                    log::warn!("Stored credential rejected: {}", err);
                    session.clear();
                    storage::clear_tokens();
                    auth_state.set(AuthState::default());
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(session);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthProvider not found in component tree")
}

/// Hook to access the session passed to API calls
pub fn use_session() -> Session {
    use_context::<Session>().expect("AuthProvider not found in component tree")
}

/// Log in, confirm the user with `GET /me`, then persist the token
pub async fn do_login(
    session: &Session,
    auth_state: RwSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), ApiError> {
    let response = api::login(username, password).await?;

    session.attach(response.access_token.clone());
    let user_info = confirm_login(session, api::get_current_user(session).await)?;
    storage::save_access_token(&response.access_token);

    auth_state.set(AuthState {
        restoring: false,
        user_info: Some(user_info),
    });

    Ok(())
}

/// Keep the freshly attached credential only if `GET /me` accepted it.
///
/// Nothing is persisted before this succeeds, so a failed login leaves
/// neither the session nor `localStorage` holding the token.
fn confirm_login(
    session: &Session,
    current_user: Result<UserInfo, ApiError>,
) -> Result<UserInfo, ApiError> {
    current_user.map_err(|err| {
        log::warn!("Login rolled back: {}", err);
        session.clear();
        err
    })
}

/// Log out without signalling expiry
pub fn do_logout(session: &Session, auth_state: RwSignal<AuthState>) {
    session.clear();
    storage::clear_tokens();
    auth_state.set(AuthState::default());
}
