//! Integration tests for the YouTube Music catalog client against a mock
//! HTTP server.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use webmusic_api::providers::ytmusic::{CatalogProvider, ProviderError, YtMusicClient};

#[tokio::test]
async fn search_sends_query_filter_and_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("query", "dandelions"))
        .and(query_param("filter", "songs"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"resultType": "song", "videoId": "lTJ4x1wY4n0", "title": "Dandelions"},
        ])))
        .mount(&mock_server)
        .await;

    let client = YtMusicClient::new(mock_server.uri()).unwrap();
    let results = client.search("dandelions", "songs", 20).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["videoId"], "lTJ4x1wY4n0");
}

#[tokio::test]
async fn song_lookup_hits_the_songs_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/songs/6nJ1C1kN3sE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "videoId": "6nJ1C1kN3sE",
            "videoDetails": {"title": "Satu Rasa Cinta"},
        })))
        .mount(&mock_server)
        .await;

    let client = YtMusicClient::new(mock_server.uri()).unwrap();
    let song = client.get_song("6nJ1C1kN3sE").await.unwrap();

    assert_eq!(song["videoDetails"]["title"], "Satu Rasa Cinta");
}

#[tokio::test]
async fn charts_lookup_passes_the_country() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/charts"))
        .and(query_param("country", "ID"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"videos": {"items": []}})),
        )
        .mount(&mock_server)
        .await;

    let client = YtMusicClient::new(mock_server.uri()).unwrap();
    let charts = client.get_charts("ID").await.unwrap();

    assert!(charts["videos"]["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artists/UCxyz"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let client = YtMusicClient::new(mock_server.uri()).unwrap();
    let err = client.get_artist("UCxyz").await.unwrap_err();

    assert!(matches!(err, ProviderError::Status(status) if status.as_u16() == 502));
}

#[tokio::test]
async fn non_json_payload_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlists/PLxyz"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = YtMusicClient::new(mock_server.uri()).unwrap();
    let err = client.get_playlist("PLxyz").await.unwrap_err();

    assert!(matches!(err, ProviderError::Http(_)));
}

#[tokio::test]
async fn search_payload_that_is_not_an_array_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&mock_server)
        .await;

    let client = YtMusicClient::new(mock_server.uri()).unwrap();
    let err = client.search("dandelions", "songs", 20).await.unwrap_err();

    assert!(matches!(err, ProviderError::Malformed(_)));
}
