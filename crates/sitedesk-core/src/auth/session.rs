//! Auth session - mocked login against the user collection.

use crate::models::User;
use crate::storage::SessionStorage;
use crate::store::MockStore;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};

/// Holds the current session subject and mirrors it to durable storage.
///
/// Authorization is role-based and purely additive: an admin subject unlocks
/// the admin panel and nothing else is gated. The stored access level is
/// carried on the record but enforced nowhere.
pub struct SessionManager {
    store: Arc<MockStore>,
    snapshots: SessionStorage,
    current: RwLock<Option<User>>,
}

impl SessionManager {
    /// Build a manager, restoring a persisted snapshot when one exists.
    ///
    /// The snapshot is NOT re-validated against the store: a user deleted
    /// since the last login stays logged in until explicit logout.
    pub fn restore(store: Arc<MockStore>, snapshots: SessionStorage) -> Self {
        let current = match snapshots.load_current_user() {
            Ok(user) => user,
            Err(err) => {
                warn!("failed to restore session snapshot: {err:#}");
                None
            }
        };
        if let Some(user) = &current {
            info!(user_id = %user.id, "restored session");
        }
        Self {
            store,
            snapshots,
            current: RwLock::new(current),
        }
    }

    /// Log in by exact email match.
    ///
    /// An unknown email silently falls back to the first user in the store
    /// instead of failing - a demo shortcut kept on purpose. Returns `None`
    /// only when the store holds no users at all.
    pub fn login(&self, email: &str) -> Option<User> {
        let subject = match self.store.find_user_by_email(email) {
            Some(user) => user,
            None => {
                let fallback = self.store.first_user()?;
                warn!(%email, fallback_id = %fallback.id, "unknown login email, using default user");
                fallback
            }
        };

        if let Err(err) = self.snapshots.save_current_user(&subject) {
            warn!("failed to persist session snapshot: {err:#}");
        }
        info!(user_id = %subject.id, "logged in");
        *self.current.write() = Some(subject.clone());
        Some(subject)
    }

    /// Clear the session and drop the persisted snapshot.
    pub fn logout(&self) {
        if let Err(err) = self.snapshots.clear_current_user() {
            warn!("failed to clear session snapshot: {err:#}");
        }
        *self.current.write() = None;
    }

    pub fn current_user(&self) -> Option<User> {
        self.current.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }

    /// Role gate for the admin panel.
    pub fn is_admin(&self) -> bool {
        self.current.read().as_ref().is_some_and(User::is_admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccessLevel, NewUser, UserRole};
    use tempfile::tempdir;

    fn manager_at(path: &std::path::Path) -> SessionManager {
        let store = Arc::new(MockStore::seeded());
        let snapshots = SessionStorage::open(path).unwrap();
        SessionManager::restore(store, snapshots)
    }

    #[test]
    fn login_known_email_returns_that_user() {
        let temp_dir = tempdir().unwrap();
        let manager = manager_at(&temp_dir.path().join("s.db"));

        let subject = manager.login("manager@sitedesk.dev").unwrap();
        assert_eq!(subject.email, "manager@sitedesk.dev");
        assert_eq!(manager.current_user().unwrap().id, subject.id);
        assert!(manager.is_authenticated());
    }

    #[test]
    fn login_unknown_email_falls_back_to_first_user() {
        let temp_dir = tempdir().unwrap();
        let store = Arc::new(MockStore::seeded());
        let first = store.first_user().unwrap();
        let snapshots = SessionStorage::open(temp_dir.path().join("s.db")).unwrap();
        let manager = SessionManager::restore(store, snapshots);

        let subject = manager.login("nobody@nowhere.dev").unwrap();
        assert_eq!(subject.id, first.id);
    }

    #[test]
    fn login_scenario_two_users() {
        let temp_dir = tempdir().unwrap();
        let store = Arc::new(MockStore::new(Vec::new(), Vec::new()));
        store.add_user(NewUser {
            name: "First".into(),
            email: "a@x.com".into(),
            mobile: None,
            role: UserRole::Admin,
            access: AccessLevel::ReadWrite,
            specialty: None,
        });
        let second = store.add_user(NewUser {
            name: "Second".into(),
            email: "b@x.com".into(),
            mobile: None,
            role: UserRole::Member,
            access: AccessLevel::ReadWrite,
            specialty: None,
        });
        let snapshots = SessionStorage::open(temp_dir.path().join("s.db")).unwrap();
        let manager = SessionManager::restore(store.clone(), snapshots);

        assert_eq!(manager.login("b@x.com").unwrap().id, second.id);
        let fallback = manager.login("c@x.com").unwrap();
        assert_eq!(fallback.id, store.first_user().unwrap().id);
    }

    #[test]
    fn login_empty_store_yields_none() {
        let temp_dir = tempdir().unwrap();
        let store = Arc::new(MockStore::new(Vec::new(), Vec::new()));
        let snapshots = SessionStorage::open(temp_dir.path().join("s.db")).unwrap();
        let manager = SessionManager::restore(store, snapshots);

        assert!(manager.login("anyone@x.com").is_none());
        assert!(!manager.is_authenticated());
    }

    #[test]
    fn session_survives_restart_without_revalidation() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("s.db");

        let subject = {
            let manager = manager_at(&path);
            manager.login("architect@sitedesk.dev").unwrap()
        };

        // New manager over a store that no longer contains the subject.
        let store = Arc::new(MockStore::seeded());
        store.delete_user(&subject.id).unwrap();
        let snapshots = SessionStorage::open(&path).unwrap();
        let manager = SessionManager::restore(store, snapshots);

        // Deleted user remains "logged in" until explicit logout.
        assert_eq!(manager.current_user().unwrap().id, subject.id);

        manager.logout();
        assert!(manager.current_user().is_none());
        drop(manager);

        let snapshots = SessionStorage::open(&path).unwrap();
        assert!(snapshots.load_current_user().unwrap().is_none());
    }

    #[test]
    fn admin_gate_is_role_based() {
        let temp_dir = tempdir().unwrap();
        let manager = manager_at(&temp_dir.path().join("s.db"));

        manager.login("vendor@sitedesk.dev");
        assert!(!manager.is_admin());

        manager.login("admin@sitedesk.dev");
        assert!(manager.is_admin());
    }
}
