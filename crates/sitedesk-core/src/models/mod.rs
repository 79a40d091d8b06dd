pub mod project;
pub mod user;

pub use project::{
    MediaAsset, MediaKind, ProgressPoint, Project, ProjectStatus, TimelineEvent,
};
pub use user::{AccessLevel, NewUser, Specialty, User, UserRole};
