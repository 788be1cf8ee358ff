//! Site content types.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Community profile and goals shown on the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SiteContent {
    pub title: String,
    pub tagline: String,
    /// Short introduction paragraph.
    pub info: String,
    pub profil: Profile,
    /// Goals.
    pub tujuan: Vec<String>,
    /// Vision statement.
    pub visi: String,
    /// Mission statements.
    pub misi: Vec<String>,
}

/// History and regular activities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub sejarah: String,
    pub kegiatan: Vec<String>,
}

/// Competition level of an achievement.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
pub enum Tingkat {
    /// Regency.
    Kabupaten,
    /// Province.
    Provinsi,
    /// National.
    Nasional,
}

/// A single competition result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AchievementRecord {
    /// Year of the competition.
    #[schema(example = 2024)]
    pub tahun: u16,
    /// Field or competition name.
    pub bidang: String,
    pub tingkat: Tingkat,
    /// Placement.
    pub prestasi: String,
}

impl AchievementRecord {
    pub fn new(tahun: u16, bidang: &str, tingkat: Tingkat, prestasi: &str) -> Self {
        Self {
            tahun,
            bidang: bidang.to_string(),
            tingkat,
            prestasi: prestasi.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn tingkat_serializes_as_plain_name() {
        assert_eq!(serde_json::to_string(&Tingkat::Provinsi).unwrap(), "\"Provinsi\"");
        assert_eq!(Tingkat::from_str("Nasional").unwrap(), Tingkat::Nasional);
        assert_eq!(Tingkat::Kabupaten.to_string(), "Kabupaten");
    }
}
