//! Contact directory view - searchable user cards with a detail pane and
//! per-session invoice attachments.

use crate::models::{AccessLevel, NewUser, Project, Specialty, User, UserRole};
use crate::services;
use crate::views::matches;
use crate::AppCore;
use std::collections::HashMap;
use std::sync::Arc;

/// An uploaded file handle held only in view state.
///
/// Invoices never travel through the facade: they live in this controller's
/// map and are lost when the view is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

pub struct DirectoryView {
    users: Vec<User>,
    projects: Vec<Project>,
    pub search: String,
    selected: Option<String>,
    invoices: HashMap<String, Vec<InvoiceFile>>,
}

impl DirectoryView {
    pub async fn load(core: &Arc<AppCore>) -> Self {
        Self {
            users: services::user::list_users(core).await,
            projects: services::project::list_projects(core).await,
            search: String::new(),
            selected: None,
            invoices: HashMap::new(),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Users matching the search term over name, email, or role.
    pub fn filtered_users(&self) -> Vec<&User> {
        self.users
            .iter()
            .filter(|u| {
                self.search.is_empty()
                    || matches(&u.name, &self.search)
                    || matches(&u.email, &self.search)
                    || matches(u.role.as_str(), &self.search)
            })
            .collect()
    }

    /// Open the detail pane for a user; unknown ids clear the selection.
    pub fn select(&mut self, user_id: &str) {
        self.selected = self
            .users
            .iter()
            .any(|u| u.id == user_id)
            .then(|| user_id.to_string());
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn selected_user(&self) -> Option<&User> {
        let id = self.selected.as_deref()?;
        self.users.iter().find(|u| u.id == id)
    }

    /// Projects whose team includes the selected user.
    pub fn projects_for_selected(&self) -> Vec<&Project> {
        match self.selected.as_deref() {
            Some(id) => self
                .projects
                .iter()
                .filter(|p| p.has_team_member(id))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Add-member flow. The form has no access field: new contacts default
    /// to read-only. The mirror is appended and re-sorted by name.
    pub async fn add_member(
        &mut self,
        core: &Arc<AppCore>,
        name: String,
        email: String,
        mobile: Option<String>,
        role: UserRole,
        specialty: Option<Specialty>,
    ) -> User {
        let created = services::user::add_user(
            core,
            NewUser {
                name,
                email,
                mobile,
                role,
                access: AccessLevel::ReadOnly,
                specialty,
            },
        )
        .await;
        self.users.push(created.clone());
        self.users.sort_by(|a, b| a.name.cmp(&b.name));
        created
    }

    /// Attach an uploaded file to a user, in memory only.
    pub fn attach_invoice(&mut self, user_id: &str, file: InvoiceFile) {
        self.invoices
            .entry(user_id.to_string())
            .or_default()
            .push(file);
    }

    pub fn invoices_for(&self, user_id: &str) -> &[InvoiceFile] {
        self.invoices
            .get(user_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Look up an attachment for download.
    pub fn find_invoice(&self, user_id: &str, name: &str) -> Option<&InvoiceFile> {
        self.invoices_for(user_id).iter().find(|f| f.name == name)
    }
}
