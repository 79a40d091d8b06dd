//! Admin panel view - user management table.
//!
//! Every mutation goes through the facade first, then splices the local
//! mirror with the returned record.

use crate::error::StoreResult;
use crate::models::{AccessLevel, NewUser, User, UserRole};
use crate::services;
use crate::AppCore;
use std::sync::Arc;

pub struct AdminPanel {
    users: Vec<User>,
}

impl AdminPanel {
    pub async fn load(core: &Arc<AppCore>) -> Self {
        Self {
            users: services::user::list_users(core).await,
        }
    }

    pub async fn reload(&mut self, core: &Arc<AppCore>) {
        self.users = services::user::list_users(core).await;
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Add-user modal flow; unlike the directory form this one carries the
    /// full field set.
    pub async fn add_user(&mut self, core: &Arc<AppCore>, new_user: NewUser) -> User {
        let created = services::user::add_user(core, new_user).await;
        self.users.push(created.clone());
        created
    }

    /// Full-record save from the edit modal.
    pub async fn save_user(&mut self, core: &Arc<AppCore>, user: User) -> StoreResult<User> {
        let updated = services::user::update_user(core, user).await?;
        self.splice(&updated);
        Ok(updated)
    }

    /// Inline role select on the table row.
    pub async fn set_role(
        &mut self,
        core: &Arc<AppCore>,
        user_id: &str,
        role: UserRole,
    ) -> StoreResult<()> {
        if let Some(mut user) = self.users.iter().find(|u| u.id == user_id).cloned() {
            user.role = role;
            let updated = services::user::update_user(core, user).await?;
            self.splice(&updated);
        }
        Ok(())
    }

    /// Inline access select on the table row.
    pub async fn set_access(
        &mut self,
        core: &Arc<AppCore>,
        user_id: &str,
        access: AccessLevel,
    ) -> StoreResult<()> {
        if let Some(mut user) = self.users.iter().find(|u| u.id == user_id).cloned() {
            user.access = access;
            let updated = services::user::update_user(core, user).await?;
            self.splice(&updated);
        }
        Ok(())
    }

    pub async fn delete_user(&mut self, core: &Arc<AppCore>, user_id: &str) -> StoreResult<()> {
        services::user::delete_user(core, user_id).await?;
        self.users.retain(|u| u.id != user_id);
        Ok(())
    }

    fn splice(&mut self, updated: &User) {
        if let Some(slot) = self.users.iter_mut().find(|u| u.id == updated.id) {
            *slot = updated.clone();
        }
    }
}
