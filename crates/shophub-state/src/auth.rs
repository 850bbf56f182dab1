//! # Auth Store
//!
//! Who is signed in. There is no credential check: `login` is a direct state
//! set with caller-supplied data.
//!
//! The authenticated flag is not stored. It is `user.is_some()`, so a login or
//! logout can never leave the two out of step.

use serde::Serialize;
use shophub_core::types::initial_of;
use shophub_core::{User, UserPatch, GUEST_NAME};
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStore {
    user: Option<User>,
    loading: bool,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signs `user` in and clears the loading flag.
    pub fn login(&mut self, user: User) {
        debug!(user_id = %user.id, "login");
        self.user = Some(user);
        self.loading = false;
    }

    /// Signs out. The loading flag is left untouched.
    pub fn logout(&mut self) {
        debug!(was_authenticated = self.user.is_some(), "logout");
        self.user = None;
    }

    pub fn set_loading(&mut self, loading: bool) {
        debug!(loading, "set_loading");
        self.loading = loading;
    }

    /// Merges `patch` into the current user. No-op when signed out.
    pub fn update_user(&mut self, patch: UserPatch) {
        if patch.is_empty() {
            debug!("update_user ignored, empty patch");
            return;
        }

        match self.user.as_mut() {
            Some(user) => {
                debug!(user_id = %user.id, "update_user");
                patch.apply_to(user);
            }
            None => debug!("update_user ignored, nobody signed in"),
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// The signed-in user's name, or "Guest".
    pub fn user_name(&self) -> &str {
        self.user.as_ref().map_or(GUEST_NAME, |u| u.name.as_str())
    }

    /// The signed-in user's email, or an empty string.
    pub fn user_email(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.email.as_str())
    }

    /// Avatar initial for the navigation bar and profile header.
    pub fn user_initial(&self) -> char {
        self.user
            .as_ref()
            .map_or_else(|| initial_of(GUEST_NAME), User::initial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_user() -> User {
        User {
            id: "1".to_string(),
            email: "demo@example.com".to_string(),
            name: "Demo User".to_string(),
            avatar: None,
        }
    }

    #[test]
    fn test_starts_as_guest() {
        let auth = AuthStore::new();
        assert!(!auth.is_authenticated());
        assert!(!auth.loading());
        assert_eq!(auth.user_name(), "Guest");
        assert_eq!(auth.user_email(), "");
        assert_eq!(auth.user_initial(), 'G');
    }

    #[test]
    fn test_login_sets_user_and_clears_loading() {
        let mut auth = AuthStore::new();
        auth.set_loading(true);
        auth.login(demo_user());

        assert!(auth.is_authenticated());
        assert!(!auth.loading());
        assert_eq!(auth.user_name(), "Demo User");
        assert_eq!(auth.user_email(), "demo@example.com");
        assert_eq!(auth.user_initial(), 'D');
    }

    #[test]
    fn test_logout_resets_to_guest() {
        let mut auth = AuthStore::new();
        auth.login(demo_user());
        auth.logout();

        assert!(!auth.is_authenticated());
        assert!(auth.user().is_none());
        assert_eq!(auth.user_name(), "Guest");
    }

    #[test]
    fn test_logout_leaves_loading_untouched() {
        let mut auth = AuthStore::new();
        auth.login(demo_user());
        auth.set_loading(true);
        auth.logout();

        assert!(auth.loading());
    }

    #[test]
    fn test_update_user_merges_fields() {
        let mut auth = AuthStore::new();
        auth.login(demo_user());
        auth.update_user(UserPatch {
            email: Some("new@example.com".to_string()),
            avatar: Some("me.png".to_string()),
            ..UserPatch::default()
        });

        let user = auth.user().unwrap();
        assert_eq!(user.email, "new@example.com");
        assert_eq!(user.name, "Demo User");
        assert_eq!(user.avatar.as_deref(), Some("me.png"));
    }

    #[test]
    fn test_update_user_when_signed_out_is_noop() {
        let mut auth = AuthStore::new();
        auth.update_user(UserPatch {
            name: Some("Ghost".to_string()),
            ..UserPatch::default()
        });

        assert!(!auth.is_authenticated());
        assert_eq!(auth.user_name(), "Guest");
    }

    #[test]
    fn test_update_user_with_empty_patch_keeps_user() {
        let mut auth = AuthStore::new();
        auth.login(demo_user());
        auth.update_user(UserPatch::default());

        assert_eq!(auth.user(), Some(&demo_user()));
    }

    #[test]
    fn test_user_initial_is_uppercased() {
        let mut auth = AuthStore::new();
        auth.login(User {
            name: "zoë".to_string(),
            ..demo_user()
        });
        assert_eq!(auth.user_initial(), 'Z');
    }
}
