//! Dashboard view - project list with search and status filter.

use crate::models::{Project, ProjectStatus};
use crate::services;
use crate::views::matches;
use crate::AppCore;
use std::sync::Arc;

pub struct DashboardView {
    projects: Vec<Project>,
    pub search: String,
    /// `None` renders as "All Statuses".
    pub status_filter: Option<ProjectStatus>,
}

impl DashboardView {
    pub async fn load(core: &Arc<AppCore>) -> Self {
        Self {
            projects: services::project::list_projects(core).await,
            search: String::new(),
            status_filter: None,
        }
    }

    /// Re-fetch the mirror; filters are kept.
    pub async fn reload(&mut self, core: &Arc<AppCore>) {
        self.projects = services::project::list_projects(core).await;
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Projects matching the search term (name or client) and the status
    /// filter, in mirror order.
    pub fn visible_projects(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| {
                let matches_search = self.search.is_empty()
                    || matches(&p.name, &self.search)
                    || matches(&p.client, &self.search);
                let matches_status = self
                    .status_filter
                    .is_none_or(|status| p.status == status);
                matches_search && matches_status
            })
            .collect()
    }
}
