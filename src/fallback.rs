//! Static fallback data served when the catalog provider is unavailable.
//!
//! Hand-curated, read-only, built once at first use and shared process-wide.
//! There is no write path: handlers clone what they need per request.

use once_cell::sync::Lazy;

use crate::models::catalog::{Category, ChartEntry, Section, SectionItem, SectionType, Track};
use crate::providers::ytmusic::thumbnail_url;

fn item(id: &str, title: &str, artist: &str) -> SectionItem {
    SectionItem {
        id: id.to_string(),
        title: title.to_string(),
        artist: Some(artist.to_string()),
        kind: None,
        thumbnail: thumbnail_url(id),
    }
}

fn artist_entry(id: &str, title: &str) -> SectionItem {
    SectionItem {
        id: id.to_string(),
        title: title.to_string(),
        artist: None,
        kind: Some("Artis".to_string()),
        thumbnail: thumbnail_url(id),
    }
}

fn section(id: &str, title: &str, section_type: SectionType, items: Vec<SectionItem>) -> Section {
    Section {
        id: id.to_string(),
        title: title.to_string(),
        section_type,
        items,
    }
}

fn track(id: &str, title: &str, artist: &str) -> Track {
    Track {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        thumbnail: thumbnail_url(id),
        duration: None,
        album: None,
    }
}

fn category(id: &str, name: &str, color: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
    }
}

fn chart_entry(id: &str, title: &str, artist: &str) -> ChartEntry {
    ChartEntry {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
    }
}

/// Full home page, in display order.
pub static HOME_SECTIONS: Lazy<Vec<Section>> = Lazy::new(|| {
    vec![
        section(
            "sering_dengarkan",
            "Sering kamu dengarkan",
            SectionType::Horizontal,
            vec![
                item("6nJ1C1kN3sE", "Satu Rasa Cinta", "Arief"),
                item("7Jz9vG8k5sQ", "TABOLA BALE", "SILET OPEN UP"),
                item("8Kz9vG8k5sQ", "KUMPULAN LAGU POP KARO", "Narta Siregar"),
                item("9Lz9vG8k5sQ", "Bahagia Lagi", "Piche Kota"),
            ],
        ),
        section(
            "rilis_anyar",
            "Rilis Anyar (Baru Rilis)",
            SectionType::Grid,
            vec![
                item("MPJ4x1wY4n0", "Tanpa Cinta", "Yovie Widianto"),
                item("QQJ4x1wY4n0", "Merayu Tuhan", "Tri Suaka"),
                item("RRJ4x1wY4n0", "Kita Usahakan Lagi", "Batas Senja"),
                item("SRJ4x1wY4n0", "LET ME DEFEAT", "Teras Entertaiment"),
                item("TRJ4x1wY4n0", "Tunggal Eka", "Denny Caknan"),
                item("URJ4x1wY4n0", "Dan...", "Sheila On 7"),
                item("VRJ4x1wY4n0", "Goodbye Lover", "Teras Entertaiment"),
                item("WRJ4x1wY4n0", "Tunggu Saja", "Radja"),
            ],
        ),
        section(
            "gembira_semangat",
            "Gembira & Semangat",
            SectionType::Grid,
            vec![
                item("XSJ4x1wY4n0", "Tetap Semangat", "Bondan Prakoso"),
                item("YSJ4x1wY4n0", "Ayo Semangat", "Nada Swara Gembira"),
                item("ZSJ4x1wY4n0", "Hati Gembira", "Tentang Anak"),
                item("aTJ4x1wY4n0", "Gembira Adalah Obat", "Tony Q Rastafara"),
            ],
        ),
        section(
            "tangga_lagu",
            "Tangga Lagu Populer",
            SectionType::Grid,
            vec![
                item("fTJ4x1wY4n0", "Zen Meditation Music", "Nature Sounds"),
                item("gTJ4x1wY4n0", "Hours Relaxing Guitar", "Nature Sounds"),
                item("hTJ4x1wY4n0", "Coffee Shop Music", "Relaxing Piano Life"),
                item("iTJ4x1wY4n0", "BEST GUITAR ROMANTIC", "Acoustic Guitar Music"),
            ],
        ),
        section(
            "galau_terpopuler",
            "Galau Terpopuler",
            SectionType::Grid,
            vec![
                item("nTJ4x1wY4n0", "Bertahan Sakit Pergi Sulit", "Syahriyadi"),
                item("oTJ4x1wY4n0", "Lumpuhkan Ingatanku", "Geisha"),
                item("pTJ4x1wY4n0", "Kenangan Terindah", "SAMSONS"),
                item("qTJ4x1wY4n0", "Jiwa Yang Bersedih", "Ghea Indrawari"),
            ],
        ),
        section(
            "baru_diputar",
            "Baru diputar",
            SectionType::Grid,
            vec![
                item("vTJ4x1wY4n0", "Cinta Merah Jambu", "LEK PANG"),
                item("wTJ4x1wY4n0", "Aku Dah Lupa", "Maman Fvndy"),
                item("xTJ4x1wY4n0", "Asmara Kerinduan", "Meyda Rahma"),
                item("yTJ4x1wY4n0", "KUAN SOE LEKONES", "AITINA MUSIK"),
            ],
        ),
        section(
            "viral_tiktok",
            "Viral TikTok",
            SectionType::Grid,
            vec![
                item("DTJ4x1wY4n0", "Rindu Aku Rindu Kamu", "Maman Fvndy"),
                item("ETJ4x1wY4n0", "SOUND JJ PRESET", "ARUL PCM"),
                item("FTJ4x1wY4n0", "DJ PALING ENAK", "Kristiwa Napu"),
                item("GTJ4x1wY4n0", "Jedag Jedug Preman", "Afrian Af"),
            ],
        ),
        section(
            "artis_populer",
            "Artis Terpopuler Saat Ini",
            SectionType::Artist,
            vec![
                artist_entry("LTJ4x1wY4n0", "Hati Yang Luka"),
                artist_entry("MTJ4x1wY4n0", "Tentang Rasa"),
                artist_entry("NTJ4x1wY4n0", "Bila Cinta Di Dusta"),
                artist_entry("OTJ4x1wY4n0", "Mencari Alasan"),
            ],
        ),
        section(
            "hit_hari_ini",
            "Hit terpopuler hari ini",
            SectionType::Grid,
            vec![
                item("TTJ4x1wY4n0", "Anugerah Terindah", "Andmesh"),
                item("UTJ4x1wY4n0", "Rahasia Hati", "NIDJI"),
                item("VTJ4x1wY4n0", "Kehadiranmu", "Vagetoz"),
                item("WTJ4x1wY4n0", "Tujh Mein Rab Dikhta Hai", "Roop Kumar Rathod"),
            ],
        ),
        section(
            "album_populer",
            "Album dan single populer",
            SectionType::Grid,
            vec![
                item("kffacxfA7G4", "Baby (feat. Ludacris)", "Justin Bieber"),
                item("BciS5krYL80", "Hotel California", "Eagles"),
                item("TUVcZfQe-Kw", "Levitating", "Dua Lipa"),
                item("JGwWNGJdvx8", "Shape of You", "Ed Sheeran"),
            ],
        ),
    ]
});

/// Catalog searched when the provider is down.
pub static SEARCH_CATALOG: Lazy<Vec<Track>> = Lazy::new(|| {
    vec![
        track("kffacxfA7G4", "Baby", "Justin Bieber ft. Ludacris"),
        track("JGwWNGJdvx8", "Shape of You", "Ed Sheeran"),
        track("TUVcZfQe-Kw", "Levitating", "Dua Lipa"),
        track("BciS5krYL80", "Hotel California", "Eagles"),
        track("eH3giaIzONA", "I Wanna Dance With Somebody", "Whitney Houston"),
        track("6nJ1C1kN3sE", "Satu Rasa Cinta", "Arief"),
        track("MPJ4x1wY4n0", "Tanpa Cinta", "Yovie Widianto"),
        track("TRJ4x1wY4n0", "Tunggal Eka", "Denny Caknan"),
        track("wTJ4x1wY4n0", "Aku Dah Lupa", "Maman Fvndy"),
    ]
});

/// Browse categories. These never come from the provider.
pub static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        category("made-for-you", "Dibuat Untuk Kamu", "#8B5CF6"),
        category("upcoming", "Rilis Mendatang", "#10B981"),
        category("new-releases", "Rilis Baru", "#84CC16"),
        category("ramadan", "Ramadan", "#10B981"),
        category("pop", "Pop", "#3B82F6"),
        category("indie", "Indie", "#EC4899"),
        category("indonesian", "Musik Indonesia", "#EF4444"),
        category("charts", "Tangga Lagu", "#8B5CF6"),
        category("podcast", "Peringkat Podcast", "#1E3A8A"),
        category("kpop", "K-pop", "#EC4899"),
    ]
});

/// Short top-songs list substituted for a failed charts lookup.
pub static TOP_SONGS: Lazy<Vec<ChartEntry>> = Lazy::new(|| {
    vec![
        chart_entry("kffacxfA7G4", "Baby", "Justin Bieber"),
        chart_entry("JGwWNGJdvx8", "Shape of You", "Ed Sheeran"),
        chart_entry("TUVcZfQe-Kw", "Levitating", "Dua Lipa"),
    ]
});

/// Case-insensitive substring match over the fallback catalog, against both
/// title and artist. Preserves catalog order; an empty result is valid.
pub fn search_catalog(query: &str) -> Vec<Track> {
    let query = query.to_lowercase();
    SEARCH_CATALOG
        .iter()
        .filter(|track| {
            track.title.to_lowercase().contains(&query)
                || track.artist.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_sections_are_nonempty_and_start_with_listening_history() {
        assert!(!HOME_SECTIONS.is_empty());
        assert_eq!(HOME_SECTIONS[0].id, "sering_dengarkan");
        assert!(HOME_SECTIONS.iter().all(|s| !s.items.is_empty()));
    }

    #[test]
    fn artist_section_items_have_type_not_artist() {
        let artists = HOME_SECTIONS
            .iter()
            .find(|s| s.section_type == SectionType::Artist)
            .unwrap();
        for entry in &artists.items {
            assert_eq!(entry.kind.as_deref(), Some("Artis"));
            assert!(entry.artist.is_none());
        }
    }

    #[test]
    fn catalog_matches_are_case_insensitive_on_title_and_artist() {
        let by_artist = search_catalog("MAMAN");
        assert_eq!(by_artist.len(), 1);
        assert_eq!(by_artist[0].title, "Aku Dah Lupa");
        assert_eq!(by_artist[0].artist, "Maman Fvndy");

        let by_title = search_catalog("hotel");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "BciS5krYL80");
    }

    #[test]
    fn catalog_match_can_be_empty() {
        assert!(search_catalog("no such song").is_empty());
    }

    #[test]
    fn ten_categories_in_fixed_order() {
        assert_eq!(CATEGORIES.len(), 10);
        assert_eq!(CATEGORIES[0].id, "made-for-you");
        assert_eq!(CATEGORIES[9].id, "kpop");
    }

    #[test]
    fn top_songs_list_is_smaller_than_the_home_page() {
        let home_items: usize = HOME_SECTIONS.iter().map(|s| s.items.len()).sum();
        assert!(TOP_SONGS.len() < home_items);
    }
}
