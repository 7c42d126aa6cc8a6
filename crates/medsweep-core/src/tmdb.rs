use crate::config::AppConfig;
use crate::error::Error;
use crate::model::MediaKind;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error};

const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Best-match catalog details for one title.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaDetails {
    Movie(MovieDetails),
    Tv(TvDetails),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MovieDetails {
    pub title: Option<String>,
    pub vote_average: Option<f64>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub runtime: Option<u32>,
    #[serde(default)]
    pub production_countries: Vec<ProductionCountry>,
    pub overview: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TvDetails {
    pub name: Option<String>,
    pub vote_average: Option<f64>,
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub number_of_seasons: Option<u32>,
    pub number_of_episodes: Option<u32>,
    pub overview: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Genre {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductionCountry {
    pub name: String,
}

/// Comma-join a list of names the way the ledger columns expect.
pub fn join_names<'a, I: IntoIterator<Item = &'a str>>(names: I) -> String {
    names.into_iter().collect::<Vec<_>>().join(", ")
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    id: u64,
}

/// Seam between the enricher and the remote catalog, so tests can count
/// and stub lookups without network access.
pub trait MetadataProvider {
    /// Find the best match for a title. `None` covers both "no results"
    /// and any transport failure; enrichment never fails a row.
    fn lookup(&self, title: &str, year: Option<&str>, kind: MediaKind) -> Option<MediaDetails>;
}

pub struct TmdbClient {
    base_url: String,
    api_key: String,
    language: String,
    client: reqwest::blocking::Client,
}

impl TmdbClient {
    pub fn new(config: &AppConfig) -> Result<Self, Error> {
        let mut builder = reqwest::blocking::Client::builder().timeout(HTTP_TIMEOUT);

        if config.use_proxy {
            if let Some(proxy_url) = &config.proxy_url {
                // One forward proxy for both plain and secure traffic.
                builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
            }
        }

        Ok(Self {
            base_url: TMDB_BASE_URL.to_string(),
            api_key: config.api_key().unwrap_or_default().to_string(),
            language: config.language.clone(),
            client: builder.build()?,
        })
    }

    /// Point the client at a different API root (used by tests).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T, Error> {
        let response = self
            .client
            .get(url)
            .query(query)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()?
            .error_for_status()?;
        Ok(response.json::<T>()?)
    }

    fn lookup_inner(
        &self,
        title: &str,
        year: Option<&str>,
        kind: MediaKind,
    ) -> Result<Option<MediaDetails>, Error> {
        let search_url = format!("{}/search/{}", self.base_url, kind.api_path());
        let mut query: Vec<(&str, &str)> =
            vec![("query", title), ("language", self.language.as_str())];
        if let Some(year) = year {
            query.push((kind.year_param(), year));
        }

        let search: SearchResponse = self.get_json(&search_url, &query)?;
        let hit = match search.results.first() {
            Some(hit) => hit,
            None => {
                debug!("No TMDb {} results for '{}'", kind.label(), title);
                return Ok(None);
            }
        };

        // Second request for the full detail record of the single best match.
        let details_url = format!("{}/{}/{}", self.base_url, kind.api_path(), hit.id);
        let language_query = [("language", self.language.as_str())];
        let details = match kind {
            MediaKind::Movie => {
                MediaDetails::Movie(self.get_json::<MovieDetails>(&details_url, &language_query)?)
            }
            MediaKind::Tv => {
                MediaDetails::Tv(self.get_json::<TvDetails>(&details_url, &language_query)?)
            }
        };
        Ok(Some(details))
    }
}

impl MetadataProvider for TmdbClient {
    fn lookup(&self, title: &str, year: Option<&str>, kind: MediaKind) -> Option<MediaDetails> {
        match self.lookup_inner(title, year, kind) {
            Ok(details) => details,
            Err(err) => {
                error!("TMDb request failed for '{}': {}", title, err);
                None
            }
        }
    }
}
