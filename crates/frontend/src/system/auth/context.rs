use contracts::system::auth::AuthUser;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api_utils::FetchError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<AuthUser>,
}

impl AuthState {
    /// Whatever the browser remembers from the last login.
    pub fn from_storage() -> Self {
        match storage::get_user() {
            Some(user) => Self {
                token: storage::get_session_token(),
                user: Some(user),
            },
            None => Self::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn can_manage_allocations(&self) -> bool {
        self.user
            .as_ref()
            .map(|u| u.role.can_manage_allocations())
            .unwrap_or(false)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::from_storage());

    // Refresh the stored user from the server; a rejected token signs out,
    // an unreachable server keeps the stored user.
    Effect::new(move |_| {
        let Some(token) = auth_state.with_untracked(|s| s.token.clone()) else {
            return;
        };
        spawn_local(async move {
            match api::get_session().await {
                Ok(user) => {
                    storage::save_user(&user);
                    set_auth_state.set(AuthState {
                        token: Some(token),
                        user: Some(user),
                    });
                }
                Err(FetchError::Status { status: 401, .. }) => {
                    log::info!("Stored session is no longer valid");
                    storage::clear_session();
                    set_auth_state.set(AuthState::default());
                }
                Err(e) => log::warn!("Could not verify session: {}", e),
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    email: String,
    password: String,
) -> Result<(), String> {
    let response = api::login(email, password).await?;

    storage::save_session_token(&response.token);
    storage::save_user(&response.user);

    set_auth_state.set(AuthState {
        token: Some(response.token),
        user: Some(response.user),
    });

    Ok(())
}

/// Helper: Perform logout
///
/// The local session is cleared even when the sign-out call fails.
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if storage::get_session_token().is_some() {
        if let Err(e) = api::signout().await {
            log::warn!("Sign-out request failed: {}", e);
        }
    }

    storage::clear_session();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::UserRole;

    fn user(role: UserRole) -> AuthUser {
        AuthUser {
            name: "Test User".into(),
            email: "test@fleet.example".into(),
            role,
            engineer_id: None,
            managed_engineer_ids: None,
        }
    }

    #[test]
    fn allocation_rights_follow_role() {
        let signed_out = AuthState::default();
        assert!(!signed_out.is_authenticated());
        assert!(!signed_out.can_manage_allocations());

        let engineer = AuthState {
            token: Some("t".into()),
            user: Some(user(UserRole::Engineer)),
        };
        assert!(engineer.is_authenticated());
        assert!(!engineer.can_manage_allocations());

        let fsm = AuthState {
            token: Some("t".into()),
            user: Some(user(UserRole::Fsm)),
        };
        assert!(fsm.can_manage_allocations());
    }
}
