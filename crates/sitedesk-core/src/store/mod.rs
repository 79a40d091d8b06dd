//! In-memory mock data store - the session-lived system of record.
//!
//! The store stands in for a remote backend: it owns the user and project
//! collections for the process lifetime and resets on restart. Mutations are
//! synchronous under the lock and last-write-wins; there are no transactions
//! and no optimistic-concurrency tokens.

pub mod seed;

use crate::error::{StoreError, StoreResult};
use crate::models::{NewUser, Project, TimelineEvent, User};
use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Session-lived collection of seeded entities.
///
/// Handed around as `Arc<MockStore>`; views and services hold the reference
/// explicitly rather than reaching for ambient module state.
pub struct MockStore {
    users: RwLock<Vec<User>>,
    projects: RwLock<Vec<Project>>,
}

impl MockStore {
    /// Build a store over explicit collections.
    pub fn new(users: Vec<User>, projects: Vec<Project>) -> Self {
        Self {
            users: RwLock::new(users),
            projects: RwLock::new(projects),
        }
    }

    /// Build a store populated with the demo corpus.
    pub fn seeded() -> Self {
        Self::new(seed::users(), seed::projects())
    }

    pub fn list_projects(&self) -> Vec<Project> {
        self.projects.read().clone()
    }

    pub fn get_project(&self, id: &str) -> Option<Project> {
        self.projects.read().iter().find(|p| p.id == id).cloned()
    }

    pub fn list_users(&self) -> Vec<User> {
        self.users.read().clone()
    }

    /// The fallback login subject.
    pub fn first_user(&self) -> Option<User> {
        self.users.read().first().cloned()
    }

    /// Exact-match email lookup used by login.
    pub fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.users.read().iter().find(|u| u.email == email).cloned()
    }

    /// Append a new user with a freshly generated id and a derived avatar
    /// URL. Accepts any shape with the minimum required fields; the store
    /// performs no format validation.
    pub fn add_user(&self, new_user: NewUser) -> User {
        let id = Uuid::new_v4().to_string();
        let user = User {
            avatar: format!("https://i.pravatar.cc/150?u={id}"),
            id,
            name: new_user.name,
            email: new_user.email,
            mobile: new_user.mobile,
            role: new_user.role,
            access: new_user.access,
            specialty: new_user.specialty,
        };
        debug!(user_id = %user.id, "adding user");
        self.users.write().push(user.clone());
        user
    }

    /// Replace a user record by id. The store is left unchanged when the id
    /// is unknown.
    pub fn update_user(&self, user: User) -> StoreResult<User> {
        let mut users = self.users.write();
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user.clone();
                Ok(user)
            }
            None => Err(StoreError::UserNotFound(user.id)),
        }
    }

    /// Remove exactly one user by id; a repeat delete of the same id fails.
    pub fn delete_user(&self, id: &str) -> StoreResult<()> {
        let mut users = self.users.write();
        match users.iter().position(|u| u.id == id) {
            Some(index) => {
                users.remove(index);
                debug!(user_id = %id, "deleted user");
                Ok(())
            }
            None => Err(StoreError::UserNotFound(id.to_string())),
        }
    }

    /// Replace a timeline event within a project, stamping edit provenance.
    ///
    /// The event is located by project id then event id; the stamped copy is
    /// both written back and returned so callers can splice their local
    /// mirrors.
    pub fn update_timeline_event(
        &self,
        project_id: &str,
        mut event: TimelineEvent,
        editor_id: &str,
    ) -> StoreResult<TimelineEvent> {
        let mut projects = self.projects.write();
        let project = projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(|| StoreError::ProjectNotFound(project_id.to_string()))?;
        let slot = project
            .timeline
            .iter_mut()
            .find(|e| e.id == event.id)
            .ok_or_else(|| StoreError::EventNotFound(event.id.clone()))?;

        event.last_modified_by_user_id = Some(editor_id.to_string());
        event.last_modified_at = Some(Utc::now());
        *slot = event.clone();
        Ok(event)
    }
}
