use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Project health as shown on the dashboard filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export)]
pub enum ProjectStatus {
    #[serde(rename = "On Track")]
    OnTrack,
    #[serde(rename = "At Risk")]
    AtRisk,
    #[serde(rename = "Off Track")]
    OffTrack,
    #[serde(rename = "On Hold")]
    OnHold,
    #[serde(rename = "Completed")]
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::OnTrack,
        ProjectStatus::AtRisk,
        ProjectStatus::OffTrack,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::OnTrack => "On Track",
            ProjectStatus::AtRisk => "At Risk",
            ProjectStatus::OffTrack => "Off Track",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One point of a progress series: percentage complete on a given date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export)]
pub struct ProgressPoint {
    pub date: NaiveDate,
    pub value: u8,
}

/// A dated milestone with a completion flag and edit provenance.
///
/// Provenance is a weak reference: the modifier id is stamped on toggle and
/// never re-validated, so it may point at a since-deleted user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// Read-only gallery entry; seeded only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct MediaAsset {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client: String,
    pub description: String,
    pub status: ProjectStatus,
    pub completion_percentage: u8,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Linear schedule baseline, one point per week across the project span.
    pub ideal_progress: Vec<ProgressPoint>,
    /// Recorded progress, only up to the present day.
    pub actual_progress: Vec<ProgressPoint>,
    pub timeline: Vec<TimelineEvent>,
    pub media_assets: Vec<MediaAsset>,
    /// Weak references into the user collection, not an ownership relation.
    pub team_member_ids: Vec<String>,
}

impl Project {
    pub fn has_team_member(&self, user_id: &str) -> bool {
        self.team_member_ids.iter().any(|id| id == user_id)
    }

    /// Timeline events already marked complete, in timeline order.
    pub fn completed_events(&self) -> impl Iterator<Item = &TimelineEvent> {
        self.timeline.iter().filter(|e| e.completed)
    }

    /// Timeline events still open, in timeline order.
    pub fn upcoming_events(&self) -> impl Iterator<Item = &TimelineEvent> {
        self.timeline.iter().filter(|e| !e.completed)
    }
}
