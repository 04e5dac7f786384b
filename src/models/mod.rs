//! Typed rows of the remote collections
//!
//! Columns the store may leave empty are `Option`s, so a missing value is a
//! checked branch rather than an implicit null.

pub mod macros;

pub mod admin;
pub mod event;
pub mod job;
pub mod memory;
pub mod mentorship;
pub mod profile;
pub mod story;

pub use admin::{AdminAction, AdminLog, PlatformStats};
pub use event::{Event, EventRsvp};
pub use job::Job;
pub use memory::Memory;
pub use mentorship::{MentorshipSession, SessionStatus};
pub use profile::{ApprovalStatus, NewProfile, Profile};
pub use story::{Story, StoryAuthor};
