use crate::error::StoreResult;
use crate::models::{Project, TimelineEvent};
use crate::AppCore;
use std::sync::Arc;

pub async fn list_projects(core: &Arc<AppCore>) -> Vec<Project> {
    core.store.list_projects()
}

/// Fetch a project by id; absent ids resolve to `None` rather than an error,
/// matching the lookup contract of the mocked backend.
pub async fn get_project(core: &Arc<AppCore>, id: &str) -> Option<Project> {
    core.store.get_project(id)
}

/// Replace a timeline event, stamping the acting user and the current time.
pub async fn update_timeline_event(
    core: &Arc<AppCore>,
    project_id: &str,
    event: TimelineEvent,
    editor_id: &str,
) -> StoreResult<TimelineEvent> {
    core.store.update_timeline_event(project_id, event, editor_id)
}
