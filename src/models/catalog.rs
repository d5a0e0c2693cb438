use serde::{Deserialize, Serialize};

/// Normalized song record: search results and the fallback catalog both use
/// this shape.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub thumbnail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
}

/// Home-page entry. Artist sections carry `type` in place of `artist`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SectionItem {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub thumbnail: String,
}

/// Display style of a home-page section.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Horizontal,
    Grid,
    Artist,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub items: Vec<SectionItem>,
}

/// Browse category shown on the search page.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// Entry in the fixed top-songs chart list.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ChartEntry {
    pub id: String,
    pub title: String,
    pub artist: String,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct HomeResponse {
    pub sections: Vec<Section>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct SearchResponse {
    pub results: Vec<Track>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct StreamFormat {
    pub url: String,
    pub quality: String,
}

/// Playable URL descriptor. `formats` is present only when the provider
/// lookup for the id succeeded.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct StreamResponse {
    pub stream_url: String,
    pub video_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formats: Option<Vec<StreamFormat>>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Uniform error envelope for 4xx/5xx responses.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ErrorMessage {
    pub message: String,
}
