//! Demo corpus loaded into the mock store on startup.

use crate::models::{
    AccessLevel, MediaAsset, MediaKind, ProgressPoint, Project, ProjectStatus, Specialty,
    TimelineEvent, User, UserRole,
};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn stamp(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("valid seed timestamp")
        .with_timezone(&Utc)
}

fn avatar(id: &str) -> String {
    format!("https://i.pravatar.cc/150?u={id}")
}

/// Generate the two progress series for a project span.
///
/// The ideal series interpolates linearly from 0 to 100 in weekly steps; the
/// actual series follows it with a little noise up to the present day,
/// clamped so it never exceeds the recorded completion percentage, and its
/// final point is pinned to that percentage.
pub fn progress_series(
    start: NaiveDate,
    end: NaiveDate,
    completion: u8,
) -> (Vec<ProgressPoint>, Vec<ProgressPoint>) {
    let today = Utc::now().date_naive();
    let total_days = (end - start).num_days().max(1);
    let mut rng = rand::rng();

    let mut ideal = Vec::new();
    let mut actual = Vec::new();
    let mut day = start;
    while day <= end {
        let elapsed = (day - start).num_days();
        let ideal_value = ((elapsed * 100) / total_days).min(100) as u8;
        ideal.push(ProgressPoint {
            date: day,
            value: ideal_value,
        });

        if day <= today {
            let noise: f64 = rng.random_range(-5.0..5.0);
            let value = (f64::from(ideal_value) + noise).clamp(0.0, f64::from(completion));
            actual.push(ProgressPoint {
                date: day,
                value: value.round() as u8,
            });
        }
        day += Duration::days(7);
    }

    // Pin the latest recorded point to the completion percentage.
    if !actual.is_empty() {
        if today < end {
            actual.push(ProgressPoint {
                date: today,
                value: completion,
            });
        } else if let Some(last) = actual.last_mut() {
            last.value = completion;
        }
    }

    (ideal, actual)
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "1".into(),
            name: "Alice Mehta".into(),
            email: "admin@sitedesk.dev".into(),
            mobile: Some("9876543210".into()),
            role: UserRole::Admin,
            access: AccessLevel::ReadWrite,
            avatar: avatar("1"),
            specialty: None,
        },
        User {
            id: "2".into(),
            name: "Bob Okafor".into(),
            email: "manager@sitedesk.dev".into(),
            mobile: Some("9876543211".into()),
            role: UserRole::Manager,
            access: AccessLevel::ReadWrite,
            avatar: avatar("2"),
            specialty: None,
        },
        User {
            id: "3".into(),
            name: "Charlie Lin".into(),
            email: "architect@sitedesk.dev".into(),
            mobile: Some("9876543212".into()),
            role: UserRole::Member,
            access: AccessLevel::ReadWrite,
            avatar: avatar("3"),
            specialty: Some(Specialty::Architect),
        },
        User {
            id: "4".into(),
            name: "Diana Torres".into(),
            email: "builder@sitedesk.dev".into(),
            mobile: Some("9876543213".into()),
            role: UserRole::Member,
            access: AccessLevel::ReadWrite,
            avatar: avatar("4"),
            specialty: Some(Specialty::Builder),
        },
        User {
            id: "5".into(),
            name: "Victor Rao".into(),
            email: "vendor@sitedesk.dev".into(),
            mobile: Some("9876543214".into()),
            role: UserRole::Vendor,
            access: AccessLevel::ReadOnly,
            avatar: avatar("5"),
            specialty: None,
        },
    ]
}

struct ProjectSpec {
    id: &'static str,
    name: &'static str,
    client: &'static str,
    description: &'static str,
    status: ProjectStatus,
    completion: u8,
    start: NaiveDate,
    end: NaiveDate,
    timeline: Vec<TimelineEvent>,
    media: Vec<MediaAsset>,
    team: &'static [&'static str],
}

fn build(spec: ProjectSpec) -> Project {
    let (ideal_progress, actual_progress) =
        progress_series(spec.start, spec.end, spec.completion);
    Project {
        id: spec.id.into(),
        name: spec.name.into(),
        client: spec.client.into(),
        description: spec.description.into(),
        status: spec.status,
        completion_percentage: spec.completion,
        start_date: spec.start,
        end_date: spec.end,
        ideal_progress,
        actual_progress,
        timeline: spec.timeline,
        media_assets: spec.media,
        team_member_ids: spec.team.iter().map(|id| (*id).to_string()).collect(),
    }
}

fn event(
    id: &str,
    title: &str,
    when: NaiveDate,
    description: &str,
    completed: bool,
    provenance: Option<(&str, &str)>,
) -> TimelineEvent {
    let (modifier, modified_at) = match provenance {
        Some((user_id, at)) => (Some(user_id.to_string()), Some(stamp(at))),
        None => (None, None),
    };
    TimelineEvent {
        id: id.into(),
        title: title.into(),
        date: when,
        description: description.into(),
        completed,
        last_modified_by_user_id: modifier,
        last_modified_at: modified_at,
    }
}

fn image(id: &str, seed_name: &str, title: &str) -> MediaAsset {
    MediaAsset {
        id: id.into(),
        kind: MediaKind::Image,
        url: format!("https://picsum.photos/seed/{seed_name}/800/600"),
        title: title.into(),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        build(ProjectSpec {
            id: "proj-1",
            name: "Riverside Flagship Store",
            client: "Meridian Retail",
            description: "Ground-up construction of a 20,000 sq. ft. flagship retail \
                location: site preparation, foundation, structural work, and full \
                interior fit-out.",
            status: ProjectStatus::OnTrack,
            completion: 65,
            start: date(2024, 5, 1),
            end: date(2024, 11, 30),
            timeline: vec![
                event(
                    "t1-1",
                    "Site Survey & Permitting",
                    date(2024, 5, 15),
                    "All municipal permits approved.",
                    true,
                    Some(("2", "2024-05-16T10:00:00Z")),
                ),
                event(
                    "t1-2",
                    "Foundation Pour",
                    date(2024, 6, 20),
                    "Concrete foundation and slab completed.",
                    true,
                    Some(("4", "2024-06-21T14:30:00Z")),
                ),
                event(
                    "t1-3",
                    "Structural Steel Erection",
                    date(2024, 8, 25),
                    "Main steel frame to be assembled on-site.",
                    false,
                    None,
                ),
                event(
                    "t1-4",
                    "Client Handover",
                    date(2024, 11, 25),
                    "Final walkthrough and key handover.",
                    false,
                    None,
                ),
            ],
            media: vec![
                image("m1-1", "proj1-1", "Architectural Blueprints"),
                image("m1-2", "proj1-2", "Site Photos - Week 5"),
            ],
            team: &["2", "3", "4", "5"],
        }),
        build(ProjectSpec {
            id: "proj-2",
            name: "Crescent Mall Fit-out",
            client: "Crescent Properties",
            description: "Complete interior fit-out for a 5,000 sq. ft. store inside an \
                existing mall, covering MEP, drywall, flooring, and fixtures.",
            status: ProjectStatus::AtRisk,
            completion: 35,
            start: date(2024, 6, 15),
            end: date(2025, 1, 15),
            timeline: vec![
                event(
                    "t2-1",
                    "Design Approval",
                    date(2024, 6, 30),
                    "Final interior designs signed off by client.",
                    true,
                    Some(("3", "2024-07-01T09:00:00Z")),
                ),
                event(
                    "t2-2",
                    "MEP Rough-in",
                    date(2024, 8, 15),
                    "Mechanical, electrical, and plumbing rough-in complete.",
                    true,
                    Some(("4", "2024-08-16T11:00:00Z")),
                ),
                event(
                    "t2-3",
                    "HVAC Unit Delivery",
                    date(2024, 9, 10),
                    "Main HVAC unit delivery delayed by vendor.",
                    false,
                    None,
                ),
            ],
            media: vec![image("m2-1", "proj2-1", "Rendered Interior Views")],
            team: &["2", "3", "5"],
        }),
        build(ProjectSpec {
            id: "proj-3",
            name: "Plaza Kiosk Pod",
            client: "Northgate Plaza",
            description: "Design and build of a semi-permanent kiosk pod in the central \
                plaza, fast-tracked for the holiday season opening.",
            status: ProjectStatus::Completed,
            completion: 100,
            start: date(2024, 7, 1),
            end: date(2024, 8, 15),
            timeline: vec![
                event(
                    "t3-1",
                    "Fabrication",
                    date(2024, 7, 15),
                    "Off-site fabrication of kiosk components.",
                    true,
                    Some(("5", "2024-07-16T11:00:00Z")),
                ),
                event(
                    "t3-2",
                    "On-site Assembly",
                    date(2024, 8, 10),
                    "Final assembly and utility hookup.",
                    true,
                    Some(("4", "2024-08-11T16:45:00Z")),
                ),
                event(
                    "t3-3",
                    "Go-live",
                    date(2024, 8, 14),
                    "Kiosk operational and open to the public.",
                    true,
                    Some(("1", "2024-08-14T10:00:00Z")),
                ),
            ],
            media: vec![],
            team: &["1", "2", "4", "5"],
        }),
        build(ProjectSpec {
            id: "proj-4",
            name: "Headquarters Lobby Renovation",
            client: "Meridian Corporate",
            description: "Complete renovation of the main headquarters lobby with \
                high-end finishes and custom millwork.",
            status: ProjectStatus::OffTrack,
            completion: 40,
            start: date(2024, 6, 1),
            end: date(2024, 10, 15),
            timeline: vec![
                event(
                    "t4-1",
                    "Demolition",
                    date(2024, 6, 10),
                    "Existing lobby fixtures and finishes removed.",
                    true,
                    Some(("4", "2024-06-11T12:00:00Z")),
                ),
                event(
                    "t4-2",
                    "Custom Millwork Delivery",
                    date(2024, 8, 20),
                    "Reception desk and paneling delayed by supply chain issues.",
                    false,
                    None,
                ),
                event(
                    "t4-3",
                    "Final Installation",
                    date(2024, 10, 10),
                    "Installation of all fixtures and finishes.",
                    false,
                    None,
                ),
            ],
            media: vec![image("m4-1", "proj4-1", "Lobby Design Mockup")],
            team: &["2", "3"],
        }),
        build(ProjectSpec {
            id: "proj-5",
            name: "Distribution Warehouse Expansion",
            client: "Meridian Logistics",
            description: "Phase 1 of a warehouse expansion adding 100,000 sq. ft. of \
                storage; on hold pending final budget approval.",
            status: ProjectStatus::OnHold,
            completion: 15,
            start: date(2024, 8, 1),
            end: date(2025, 5, 1),
            timeline: vec![
                event(
                    "t5-1",
                    "Geotechnical Survey",
                    date(2024, 8, 10),
                    "Soil and site analysis completed.",
                    true,
                    Some(("3", "2024-08-11T15:00:00Z")),
                ),
                event(
                    "t5-2",
                    "Budgetary Review",
                    date(2024, 8, 30),
                    "On hold awaiting Q4 budget allocation.",
                    false,
                    None,
                ),
            ],
            media: vec![],
            team: &["1", "2"],
        }),
        build(ProjectSpec {
            id: "proj-6",
            name: "Harbor Street Car Park",
            client: "Harbor City Council",
            description: "Construction of a 5-level precast concrete parking structure \
                for 500 vehicles.",
            status: ProjectStatus::OnTrack,
            completion: 25,
            start: date(2024, 7, 15),
            end: date(2025, 3, 31),
            timeline: vec![
                event(
                    "t6-1",
                    "Excavation & Shoring",
                    date(2024, 8, 5),
                    "Site excavation completed.",
                    true,
                    Some(("4", "2024-08-06T18:00:00Z")),
                ),
                event(
                    "t6-2",
                    "Precast Component Delivery",
                    date(2024, 9, 1),
                    "First batch of precast panels to arrive on schedule.",
                    false,
                    None,
                ),
            ],
            media: vec![image("m6-1", "proj6-1", "Structural Plans")],
            team: &["2", "4", "5"],
        }),
    ]
}
