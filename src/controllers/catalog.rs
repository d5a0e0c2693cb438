//! Catalog gateway: routes each operation to the provider and substitutes
//! fallback data per endpoint when the provider fails.
//!
//! Fallback policy:
//! home → fixed HomePage; search → substring match over the fallback
//! catalog; song → stub record; stream → deterministic URL without format
//! metadata; charts → fixed top-songs list; artist and playlist have no
//! fallback and propagate the provider error.

use std::sync::Arc;

use serde_json::{Value, json};
use tracing::warn;

use crate::fallback;
use crate::models::catalog::{
    CategoriesResponse, HomeResponse, SearchResponse, Section, SectionItem, SectionType,
    StreamFormat, StreamResponse, Track,
};
use crate::providers::ytmusic::{CatalogProvider, ProviderError, thumbnail_url, watch_url};

/// Result cap for song search, applied on top of the provider-side limit.
pub const SEARCH_LIMIT: usize = 20;

/// Country whose charts seed the home page.
const HOME_CHARTS_COUNTRY: &str = "ID";

/// Shared gateway handle. Cheap to clone; the provider is used read-only.
#[derive(Clone)]
pub struct CatalogController {
    provider: Arc<dyn CatalogProvider>,
}

impl CatalogController {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self { provider }
    }

    /// Home page content. Charts lookup first; the fixed dataset whenever
    /// the lookup fails or yields nothing usable.
    pub async fn home(&self) -> HomeResponse {
        let sections = match self.provider.get_charts(HOME_CHARTS_COUNTRY).await {
            Ok(charts) => sections_from_charts(&charts),
            Err(err) => {
                warn!("charts lookup for home failed: {err}");
                None
            }
        };
        HomeResponse {
            sections: sections.unwrap_or_else(|| fallback::HOME_SECTIONS.clone()),
        }
    }

    /// Song search. The query is already validated as non-empty.
    pub async fn search(&self, query: &str) -> SearchResponse {
        let results = match self.provider.search(query, "songs", SEARCH_LIMIT).await {
            Ok(items) => normalize_search_results(&items),
            Err(err) => {
                warn!("search for {query:?} failed: {err}");
                fallback::search_catalog(query)
            }
        };
        SearchResponse { results }
    }

    /// Browse categories: fixed list, no provider round-trip.
    pub fn categories(&self) -> CategoriesResponse {
        CategoriesResponse {
            categories: fallback::CATEGORIES.clone(),
        }
    }

    /// Song lookup. Degrades to a stub record instead of erroring so that
    /// playback UIs always have something to render.
    pub async fn song(&self, video_id: &str) -> Value {
        match self.provider.get_song(video_id).await {
            Ok(song) => song,
            Err(err) => {
                warn!("song lookup for {video_id} failed: {err}");
                json!({
                    "videoId": video_id,
                    "title": "Unknown Song",
                    "artist": "Unknown Artist",
                    "thumbnail": thumbnail_url(video_id),
                })
            }
        }
    }

    /// Playable URL for a video id. The URL itself is deterministic; the
    /// provider lookup only decides whether format metadata is attached.
    pub async fn stream(&self, video_id: &str) -> StreamResponse {
        let stream_url = watch_url(video_id);
        let formats = match self.provider.get_song(video_id).await {
            Ok(_) => Some(vec![StreamFormat {
                url: stream_url.clone(),
                quality: "high".to_string(),
            }]),
            Err(err) => {
                warn!("song lookup for stream {video_id} failed: {err}");
                None
            }
        };
        StreamResponse {
            stream_url,
            video_id: video_id.to_string(),
            formats,
        }
    }

    /// Artist page, passed through. No fallback data exists for artists.
    pub async fn artist(&self, channel_id: &str) -> Result<Value, ProviderError> {
        self.provider.get_artist(channel_id).await
    }

    /// Playlist, passed through. No fallback data exists for playlists.
    pub async fn playlist(&self, playlist_id: &str) -> Result<Value, ProviderError> {
        self.provider.get_playlist(playlist_id).await
    }

    /// Charts for a country, with the short fixed top-songs substitute.
    pub async fn charts(&self, country: &str) -> Value {
        match self.provider.get_charts(country).await {
            Ok(charts) => charts,
            Err(err) => {
                warn!("charts lookup for {country:?} failed: {err}");
                json!({ "songs": &*fallback::TOP_SONGS })
            }
        }
    }
}

/// Normalize raw provider search records into [`Track`]s, keeping songs only
/// and capping the list.
fn normalize_search_results(items: &[Value]) -> Vec<Track> {
    items
        .iter()
        .filter(|item| item["resultType"] == "song")
        .take(SEARCH_LIMIT)
        .map(normalize_track)
        .collect()
}

fn normalize_track(item: &Value) -> Track {
    Track {
        id: item["videoId"].as_str().unwrap_or_default().to_string(),
        title: item["title"].as_str().unwrap_or_default().to_string(),
        artist: item["artists"][0]["name"]
            .as_str()
            .unwrap_or("Unknown")
            .to_string(),
        thumbnail: best_thumbnail(item).unwrap_or_default(),
        duration: item["duration"].as_str().map(str::to_string),
        album: item["album"]["name"].as_str().map(str::to_string),
    }
}

/// Providers list thumbnails in ascending resolution; take the largest.
fn best_thumbnail(item: &Value) -> Option<String> {
    item["thumbnails"]
        .as_array()?
        .last()?
        .get("url")?
        .as_str()
        .map(str::to_string)
}

/// Build home sections out of a charts payload. `None` when the payload has
/// nothing renderable, which sends the caller to the fixed dataset.
fn sections_from_charts(charts: &Value) -> Option<Vec<Section>> {
    let mut sections = Vec::new();

    if let Some(items) = charts["videos"]["items"].as_array() {
        let items: Vec<SectionItem> = items.iter().filter_map(video_item).collect();
        if !items.is_empty() {
            sections.push(Section {
                id: "sedang_tren".to_string(),
                title: "Sedang Tren".to_string(),
                section_type: SectionType::Horizontal,
                items,
            });
        }
    }

    if let Some(items) = charts["songs"]["items"].as_array() {
        let items: Vec<SectionItem> = items.iter().filter_map(video_item).collect();
        if !items.is_empty() {
            sections.push(Section {
                id: "lagu_teratas".to_string(),
                title: "Lagu Teratas".to_string(),
                section_type: SectionType::Grid,
                items,
            });
        }
    }

    if let Some(items) = charts["artists"]["items"].as_array() {
        let items: Vec<SectionItem> = items.iter().filter_map(artist_item).collect();
        if !items.is_empty() {
            sections.push(Section {
                id: "artis_teratas".to_string(),
                title: "Artis Teratas".to_string(),
                section_type: SectionType::Artist,
                items,
            });
        }
    }

    if sections.is_empty() { None } else { Some(sections) }
}

fn video_item(item: &Value) -> Option<SectionItem> {
    let id = item["videoId"].as_str()?;
    let title = item["title"].as_str()?;
    let artist = item["artists"][0]["name"].as_str().unwrap_or("Unknown");
    Some(SectionItem {
        id: id.to_string(),
        title: title.to_string(),
        artist: Some(artist.to_string()),
        kind: None,
        thumbnail: best_thumbnail(item).unwrap_or_else(|| thumbnail_url(id)),
    })
}

fn artist_item(item: &Value) -> Option<SectionItem> {
    let id = item["browseId"].as_str()?;
    let title = item["title"].as_str()?;
    Some(SectionItem {
        id: id.to_string(),
        title: title.to_string(),
        artist: None,
        kind: Some("Artis".to_string()),
        thumbnail: best_thumbnail(item).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song_record(video_id: &str) -> Value {
        json!({
            "resultType": "song",
            "videoId": video_id,
            "title": "Dandelions",
            "artists": [{"name": "Ruth B.", "id": "UC0VH"}],
            "thumbnails": [
                {"url": "https://img.example/small.jpg", "width": 60},
                {"url": "https://img.example/large.jpg", "width": 544},
            ],
            "duration": "3:54",
            "album": {"name": "Safe Haven", "id": "MPRE"},
        })
    }

    #[test]
    fn tracks_take_the_largest_thumbnail_and_album_name() {
        let track = normalize_track(&song_record("lTJ4x1wY4n0"));
        assert_eq!(track.id, "lTJ4x1wY4n0");
        assert_eq!(track.thumbnail, "https://img.example/large.jpg");
        assert_eq!(track.album.as_deref(), Some("Safe Haven"));
        assert_eq!(track.duration.as_deref(), Some("3:54"));
    }

    #[test]
    fn missing_artist_defaults_to_unknown() {
        let track = normalize_track(&json!({
            "resultType": "song",
            "videoId": "abc",
            "title": "Untitled",
        }));
        assert_eq!(track.artist, "Unknown");
        assert_eq!(track.thumbnail, "");
        assert!(track.album.is_none());
    }

    #[test]
    fn non_song_records_are_dropped_and_results_are_capped() {
        let mut items = vec![json!({"resultType": "video", "videoId": "v0", "title": "t"})];
        for i in 0..SEARCH_LIMIT + 5 {
            items.push(song_record(&format!("id{i}")));
        }
        let tracks = normalize_search_results(&items);
        assert_eq!(tracks.len(), SEARCH_LIMIT);
        assert_eq!(tracks[0].id, "id0");
    }

    #[test]
    fn empty_charts_payload_yields_no_sections() {
        assert!(sections_from_charts(&json!({})).is_none());
        assert!(sections_from_charts(&json!({"videos": {"items": []}})).is_none());
    }

    #[test]
    fn charts_videos_and_artists_become_sections() {
        let charts = json!({
            "videos": {"items": [
                {"videoId": "DTJ4x1wY4n0", "title": "Rindu Aku Rindu Kamu",
                 "artists": [{"name": "Maman Fvndy"}]},
            ]},
            "artists": {"items": [
                {"browseId": "UCxyz", "title": "Arief",
                 "thumbnails": [{"url": "https://img.example/a.jpg"}]},
            ]},
        });
        let sections = sections_from_charts(&charts).unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].section_type, SectionType::Horizontal);
        assert_eq!(sections[0].items[0].artist.as_deref(), Some("Maman Fvndy"));
        assert_eq!(sections[1].section_type, SectionType::Artist);
        assert_eq!(sections[1].items[0].kind.as_deref(), Some("Artis"));
    }
}
