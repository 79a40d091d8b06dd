//! Project detail view - progress chart rows, editable timeline, and team
//! sub-lists.

use crate::error::{StoreError, StoreResult};
use crate::models::{Project, Specialty, TimelineEvent, User, UserRole};
use crate::services;
use crate::AppCore;
use chrono::NaiveDate;
use std::sync::Arc;

/// One row of chart-ready data for the external charting collaborator:
/// both series merged on the ideal series' date axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub date: NaiveDate,
    pub ideal: u8,
    pub actual: Option<u8>,
}

#[derive(Debug)]
pub struct ProjectDetailView {
    project: Project,
    team: Vec<User>,
    all_users: Vec<User>,
}

impl ProjectDetailView {
    /// Fetch the project and resolve its team member references.
    pub async fn load(core: &Arc<AppCore>, project_id: &str) -> StoreResult<Self> {
        let project = services::project::get_project(core, project_id)
            .await
            .ok_or_else(|| StoreError::ProjectNotFound(project_id.to_string()))?;
        let all_users = services::user::list_users(core).await;
        let team = all_users
            .iter()
            .filter(|u| project.has_team_member(&u.id))
            .cloned()
            .collect();

        Ok(Self {
            project,
            team,
            all_users,
        })
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn team(&self) -> &[User] {
        &self.team
    }

    /// Team members tagged as architects.
    pub fn architects(&self) -> Vec<&User> {
        self.team
            .iter()
            .filter(|u| u.specialty == Some(Specialty::Architect))
            .collect()
    }

    /// Team members with the vendor role.
    pub fn vendors(&self) -> Vec<&User> {
        self.team
            .iter()
            .filter(|u| u.role == UserRole::Vendor)
            .collect()
    }

    /// Merge the two progress series on the ideal axis.
    pub fn chart_rows(&self) -> Vec<ChartRow> {
        self.project
            .ideal_progress
            .iter()
            .map(|ideal| ChartRow {
                date: ideal.date,
                ideal: ideal.value,
                actual: self
                    .project
                    .actual_progress
                    .iter()
                    .find(|a| a.date == ideal.date)
                    .map(|a| a.value),
            })
            .collect()
    }

    /// Resolve an event's provenance to a display name. Events never
    /// modified resolve to `None`; a modifier id that no longer matches a
    /// user renders as "Unknown User".
    pub fn modifier_name(&self, event: &TimelineEvent) -> Option<String> {
        let id = event.last_modified_by_user_id.as_deref()?;
        Some(
            self.all_users
                .iter()
                .find(|u| u.id == id)
                .map(|u| u.name.clone())
                .unwrap_or_else(|| "Unknown User".to_string()),
        )
    }

    /// Toggle an event's completion as `actor`, then splice the stamped
    /// event returned by the facade into the local timeline.
    pub async fn toggle_event(
        &mut self,
        core: &Arc<AppCore>,
        event_id: &str,
        actor: &User,
    ) -> StoreResult<TimelineEvent> {
        let mut event = self
            .project
            .timeline
            .iter()
            .find(|e| e.id == event_id)
            .cloned()
            .ok_or_else(|| StoreError::EventNotFound(event_id.to_string()))?;
        event.completed = !event.completed;

        let updated =
            services::project::update_timeline_event(core, &self.project.id, event, &actor.id)
                .await?;

        if let Some(slot) = self
            .project
            .timeline
            .iter_mut()
            .find(|e| e.id == updated.id)
        {
            *slot = updated.clone();
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockStore;
    use chrono::Utc;
    use tempfile::tempdir;

    async fn test_core() -> Arc<AppCore> {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        Arc::new(
            AppCore::with_store(MockStore::seeded(), db_path.to_str().unwrap())
                .await
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn load_unknown_project_fails() {
        let core = test_core().await;
        let err = ProjectDetailView::load(&core, "no-such-project")
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::ProjectNotFound("no-such-project".into()));
    }

    #[tokio::test]
    async fn team_sublists_derive_from_attributes() {
        let core = test_core().await;
        let view = ProjectDetailView::load(&core, "proj-1").await.unwrap();

        assert_eq!(view.team().len(), 4);

        let architects: Vec<&str> =
            view.architects().iter().map(|u| u.id.as_str()).collect();
        assert_eq!(architects, vec!["3"]);

        let vendors: Vec<&str> = view.vendors().iter().map(|u| u.id.as_str()).collect();
        assert_eq!(vendors, vec!["5"]);
    }

    #[tokio::test]
    async fn chart_rows_merge_on_ideal_axis() {
        let core = test_core().await;
        let view = ProjectDetailView::load(&core, "proj-1").await.unwrap();
        let rows = view.chart_rows();

        assert_eq!(rows.len(), view.project().ideal_progress.len());
        assert_eq!(rows[0].date, view.project().start_date);

        // Every recorded actual point surfaces on its matching row.
        for point in &view.project().actual_progress {
            if let Some(row) = rows.iter().find(|r| r.date == point.date) {
                assert_eq!(row.actual, Some(point.value));
            }
        }
    }

    #[tokio::test]
    async fn toggle_event_stamps_actor_and_splices() {
        let core = test_core().await;
        let mut view = ProjectDetailView::load(&core, "proj-1").await.unwrap();
        let actor = core.store.list_users()[1].clone();

        let before = Utc::now();
        let updated = view.toggle_event(&core, "t1-3", &actor).await.unwrap();

        assert!(updated.completed);
        assert_eq!(updated.last_modified_by_user_id.as_deref(), Some(actor.id.as_str()));
        assert!(updated.last_modified_at.unwrap() >= before);

        // The local timeline was spliced in place.
        let local = view
            .project()
            .timeline
            .iter()
            .find(|e| e.id == "t1-3")
            .unwrap();
        assert_eq!(local, &updated);

        // Toggling back restores the flag.
        let reverted = view.toggle_event(&core, "t1-3", &actor).await.unwrap();
        assert!(!reverted.completed);
    }

    #[tokio::test]
    async fn modifier_resolution_handles_deleted_users() {
        let core = test_core().await;
        let mut view = ProjectDetailView::load(&core, "proj-1").await.unwrap();
        let actor = core.store.list_users()[0].clone();

        let updated = view.toggle_event(&core, "t1-4", &actor).await.unwrap();
        assert_eq!(view.modifier_name(&updated), Some(actor.name.clone()));

        // Untouched events carry no provenance.
        let untouched = view
            .project()
            .timeline
            .iter()
            .find(|e| e.id == "t1-3")
            .cloned()
            .unwrap();
        assert_eq!(view.modifier_name(&untouched), None);

        // A stale modifier id degrades to the placeholder name.
        let mut orphaned = updated.clone();
        orphaned.last_modified_by_user_id = Some("long-gone".to_string());
        assert_eq!(
            view.modifier_name(&orphaned),
            Some("Unknown User".to_string())
        );
    }
}
