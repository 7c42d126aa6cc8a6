use mockito::Matcher;

use medsweep_core::model::MediaKind;
use medsweep_core::tmdb::{MediaDetails, MetadataProvider, TmdbClient};
use medsweep_core::AppConfig;

fn client_config() -> AppConfig {
    AppConfig {
        movie_path: None,
        tv_path: None,
        tmdb_api_key: Some("test-token".to_string()),
        use_proxy: false,
        proxy_url: None,
        data_dir: "./data".to_string(),
        language: "en-US".to_string(),
    }
}

fn client_for(server: &mockito::ServerGuard) -> TmdbClient {
    TmdbClient::new(&client_config())
        .unwrap()
        .with_base_url(&server.url())
}

#[test]
fn test_movie_lookup_uses_search_then_details() {
    let mut server = mockito::Server::new();

    let search = server
        .mock("GET", "/search/movie")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "Inception".into()),
            Matcher::UrlEncoded("language".into(), "en-US".into()),
            Matcher::UrlEncoded("year".into(), "2010".into()),
        ]))
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results":[{"id":27205},{"id":999}]}"#)
        .create();

    let details = server
        .mock("GET", "/movie/27205")
        .match_query(Matcher::UrlEncoded("language".into(), "en-US".into()))
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "title": "Inception",
                "vote_average": 8.4,
                "release_date": "2010-07-15",
                "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
                "runtime": 148,
                "production_countries": [{"iso_3166_1": "US", "name": "United States of America"}],
                "overview": "A thief who steals corporate secrets."
            }"#,
        )
        .create();

    let client = client_for(&server);
    let result = client.lookup("Inception", Some("2010"), MediaKind::Movie);

    search.assert();
    details.assert();

    match result {
        Some(MediaDetails::Movie(movie)) => {
            assert_eq!(movie.title.as_deref(), Some("Inception"));
            assert_eq!(movie.vote_average, Some(8.4));
            assert_eq!(movie.runtime, Some(148));
            assert_eq!(movie.genres.len(), 2);
            assert_eq!(movie.production_countries.len(), 1);
        }
        other => panic!("expected movie details, got {:?}", other),
    }
}

#[test]
fn test_tv_lookup_uses_tv_year_param() {
    let mut server = mockito::Server::new();

    let search = server
        .mock("GET", "/search/tv")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "Breaking Bad".into()),
            Matcher::UrlEncoded("first_air_date_year".into(), "2008".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results":[{"id":1396}]}"#)
        .create();

    let details = server
        .mock("GET", "/tv/1396")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "name": "Breaking Bad",
                "vote_average": 8.9,
                "first_air_date": "2008-01-20",
                "genres": [{"id": 18, "name": "Drama"}],
                "number_of_seasons": 5,
                "number_of_episodes": 62,
                "overview": "A chemistry teacher turns to crime."
            }"#,
        )
        .create();

    let client = client_for(&server);
    let result = client.lookup("Breaking Bad", Some("2008"), MediaKind::Tv);

    search.assert();
    details.assert();

    match result {
        Some(MediaDetails::Tv(tv)) => {
            assert_eq!(tv.name.as_deref(), Some("Breaking Bad"));
            assert_eq!(tv.number_of_seasons, Some(5));
            assert_eq!(tv.number_of_episodes, Some(62));
        }
        other => panic!("expected tv details, got {:?}", other),
    }
}

#[test]
fn test_lookup_without_year_omits_filter() {
    let mut server = mockito::Server::new();

    let search = server
        .mock("GET", "/search/movie")
        .match_query(Matcher::Exact("query=Firefly&language=en-US".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results":[]}"#)
        .create();

    let client = client_for(&server);
    let result = client.lookup("Firefly", None, MediaKind::Movie);

    search.assert();
    assert!(result.is_none());
}

#[test]
fn test_server_error_degrades_to_no_match() {
    let mut server = mockito::Server::new();

    server
        .mock("GET", "/search/movie")
        .match_query(Matcher::Any)
        .with_status(500)
        .create();

    let client = client_for(&server);
    assert!(client.lookup("Anything", None, MediaKind::Movie).is_none());
}

#[test]
fn test_details_failure_degrades_to_no_match() {
    let mut server = mockito::Server::new();

    server
        .mock("GET", "/search/movie")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results":[{"id":42}]}"#)
        .create();
    server
        .mock("GET", "/movie/42")
        .match_query(Matcher::Any)
        .with_status(404)
        .create();

    let client = client_for(&server);
    assert!(client.lookup("Anything", None, MediaKind::Movie).is_none());
}
