//! AI status-report generation.

use crate::error::{StoreError, StoreResult};
use crate::models::Project;
use crate::AppCore;
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::warn;

/// Shown when no API key is configured.
pub const UNCONFIGURED_SUMMARY: &str =
    "Gemini API key is not configured. Could not generate summary.";

/// Shown when the generation request fails.
pub const FAILED_SUMMARY: &str =
    "An error occurred while generating the summary. Please try again.";

/// Build the client-update prompt from the project's summary fields.
pub fn build_report_prompt(project: &Project) -> String {
    let completed: Vec<&str> = project
        .completed_events()
        .map(|e| e.title.as_str())
        .collect();
    let upcoming: Vec<String> = project
        .upcoming_events()
        .map(|e| format!("{} (due {})", e.title, e.date))
        .collect();

    let mut prompt = String::from(
        "Generate a concise, professional project status report summary based on \
         the following data. The tone should be suitable for a client update. \
         Analyze the progress data and timeline to identify key achievements and \
         potential risks.\n\nProject Data:\n",
    );
    let _ = writeln!(prompt, "- Name: {}", project.name);
    let _ = writeln!(prompt, "- Client: {}", project.client);
    let _ = writeln!(prompt, "- Description: {}", project.description);
    let _ = writeln!(prompt, "- Current Status: {}", project.status);
    let _ = writeln!(
        prompt,
        "- Completion Percentage: {}%",
        project.completion_percentage
    );
    let _ = writeln!(prompt, "- Start Date: {}", project.start_date);
    let _ = writeln!(prompt, "- Target End Date: {}", project.end_date);
    let _ = writeln!(
        prompt,
        "- Completed Timeline Events: {}",
        if completed.is_empty() {
            "None".to_string()
        } else {
            completed.join(", ")
        }
    );
    let _ = writeln!(
        prompt,
        "- Upcoming Timeline Events: {}",
        if upcoming.is_empty() {
            "None".to_string()
        } else {
            upcoming.join(", ")
        }
    );
    prompt.push_str(
        "\nGenerate a summary covering:\n\
         1. An overall status overview.\n\
         2. Key accomplishments to date.\n\
         3. Next steps and upcoming milestones.\n\
         4. A brief risk assessment based on the current status.\n",
    );
    prompt
}

/// Generate a prose status report for a project.
///
/// Degrades to fixed placeholder text when the generator is unconfigured or
/// the request fails; only an unknown project id is an error.
pub async fn generate_project_summary(
    core: &Arc<AppCore>,
    project_id: &str,
) -> StoreResult<String> {
    let project = core
        .store
        .get_project(project_id)
        .ok_or_else(|| StoreError::ProjectNotFound(project_id.to_string()))?;

    if !core.generator.is_configured() {
        return Ok(UNCONFIGURED_SUMMARY.to_string());
    }

    match core.generator.generate(&build_report_prompt(&project)).await {
        Ok(summary) => Ok(summary),
        Err(err) => {
            warn!(project_id, "report generation failed: {err}");
            Ok(FAILED_SUMMARY.to_string())
        }
    }
}
