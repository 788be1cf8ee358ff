//! Static site content: community profile and achievements.

pub mod data;
pub mod types;

pub use data::{ACHIEVEMENTS, SITE_CONTENT};
pub use types::{AchievementRecord, Profile, SiteContent, Tingkat};
