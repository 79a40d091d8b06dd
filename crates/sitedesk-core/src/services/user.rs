use crate::error::StoreResult;
use crate::models::{NewUser, User};
use crate::AppCore;
use std::sync::Arc;

pub async fn list_users(core: &Arc<AppCore>) -> Vec<User> {
    core.store.list_users()
}

pub async fn add_user(core: &Arc<AppCore>, new_user: NewUser) -> User {
    core.store.add_user(new_user)
}

pub async fn update_user(core: &Arc<AppCore>, user: User) -> StoreResult<User> {
    core.store.update_user(user)
}

pub async fn delete_user(core: &Arc<AppCore>, id: &str) -> StoreResult<()> {
    core.store.delete_user(id)
}
