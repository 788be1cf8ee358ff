//! Frozen content tables, built once on first use.

use once_cell::sync::Lazy;

use super::types::{AchievementRecord, Profile, SiteContent, Tingkat};

/// Community profile served by `/api/site`.
pub static SITE_CONTENT: Lazy<SiteContent> = Lazy::new(|| SiteContent {
    title: "Komunitas Karya Ilmiah Remaja MAN 1 HST".to_string(),
    tagline: "Eksplorasi Sains, Menembus Galaksi Pengetahuan".to_string(),
    info: "Komunitas KIR MAN 1 Hulu Sungai Tengah (HST) adalah wadah bagi pelajar untuk \
           bereksperimen, meneliti, dan mempublikasikan karya ilmiah. Kami berfokus pada \
           pengembangan rasa ingin tahu, berpikir kritis, dan kolaborasi riset lintas bidang."
        .to_string(),
    profil: Profile {
        sejarah: "Didirikan oleh para pendidik dan siswa pecinta sains, KIR MAN 1 HST rutin \
                  mengikuti kompetisi, mengadakan kelas riset, dan proyek laboratorium."
            .to_string(),
        kegiatan: strings(&[
            "Kelas Metodologi Penelitian",
            "Eksperimen Laboratorium (Biologi, Kimia, Fisika)",
            "Pelatihan Presentasi Ilmiah",
            "Publikasi Ringkas (popular science)",
            "Pembinaan Olimpiade Sains",
        ]),
    },
    tujuan: strings(&[
        "Menumbuhkan budaya riset di kalangan pelajar",
        "Mendorong publikasi dan kompetisi ilmiah",
        "Membentuk jejaring dengan komunitas sains lainnya",
    ]),
    visi: "Menjadi komunitas pelajar yang unggul dalam riset ilmiah dan berdaya saing \
           tingkat nasional."
        .to_string(),
    misi: strings(&[
        "Menyelenggarakan program riset terstruktur",
        "Menyediakan fasilitas pembelajaran dan bimbingan",
        "Membangun kultur kolaboratif dan etika ilmiah",
        "Berpartisipasi aktif di kompetisi dan konferensi",
        "Mengomunikasikan sains secara inklusif",
    ]),
});

/// Achievements served by `/api/achievements`, newest first.
pub static ACHIEVEMENTS: Lazy<Vec<AchievementRecord>> = Lazy::new(|| {
    vec![
        AchievementRecord::new(2024, "Biologi (KSN-K)", Tingkat::Kabupaten, "Juara 1"),
        AchievementRecord::new(2024, "Fisika (KSN-K)", Tingkat::Kabupaten, "Juara 2"),
        AchievementRecord::new(2023, "Kimia (KSN-P)", Tingkat::Provinsi, "Finalis"),
        AchievementRecord::new(2023, "Karya Tulis Ilmiah", Tingkat::Nasional, "Harapan"),
    ]
});

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_content_shape() {
        assert_eq!(SITE_CONTENT.tujuan.len(), 3);
        assert_eq!(SITE_CONTENT.misi.len(), 5);
        assert_eq!(SITE_CONTENT.profil.kegiatan.len(), 5);
        assert!(SITE_CONTENT.info.starts_with("Komunitas KIR MAN 1 Hulu Sungai Tengah (HST)"));
        assert!(!SITE_CONTENT.info.contains("  "));
    }

    #[test]
    fn achievements_in_fixed_order() {
        assert_eq!(ACHIEVEMENTS.len(), 4);
        assert_eq!(ACHIEVEMENTS[0].bidang, "Biologi (KSN-K)");
        assert_eq!(ACHIEVEMENTS[3].tingkat, Tingkat::Nasional);
        assert!(ACHIEVEMENTS.windows(2).all(|w| w[0].tahun >= w[1].tahun));
    }
}
