use serde::{Deserialize, Serialize};

/// File extensions treated as video content (compared case-insensitively).
pub const VIDEO_EXTENSIONS: &[&str] = &["mkv", "mp4", "avi", "ts", "rmvb", "mov"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    /// Path segment used by the TMDb search and details endpoints.
    pub fn api_path(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }

    /// Name of the year filter parameter on the search endpoint.
    pub fn year_param(&self) -> &'static str {
        match self {
            MediaKind::Movie => "year",
            MediaKind::Tv => "first_air_date_year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }
}

/// One row per discovered video file. Never deduplicated at this stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    #[serde(rename = "SearchTitle")]
    pub search_title: String,
    #[serde(rename = "SearchYear")]
    pub search_year: Option<String>,
    #[serde(rename = "FilePath")]
    pub file_path: String,
    #[serde(rename = "FileName")]
    pub file_name: String,
    #[serde(rename = "FileSizeGB")]
    pub file_size_gb: f64,
    #[serde(rename = "FolderPath")]
    pub folder_path: String,
}

impl InventoryRecord {
    /// Deduplication key used by the enricher's lookup cache.
    pub fn title_key(&self) -> (String, Option<String>) {
        (self.search_title.clone(), self.search_year.clone())
    }
}

/// An inventory row extended with TMDb movie metadata.
/// Failed or empty lookups leave every metadata column unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(rename = "SearchTitle")]
    pub search_title: String,
    #[serde(rename = "SearchYear")]
    pub search_year: Option<String>,
    #[serde(rename = "FilePath")]
    pub file_path: String,
    #[serde(rename = "FileName")]
    pub file_name: String,
    #[serde(rename = "FileSizeGB")]
    pub file_size_gb: f64,
    #[serde(rename = "FolderPath")]
    pub folder_path: String,
    #[serde(rename = "TMDb_Title")]
    pub tmdb_title: Option<String>,
    #[serde(rename = "TMDb_Rating")]
    pub tmdb_rating: Option<f64>,
    #[serde(rename = "ReleaseDate")]
    pub release_date: Option<String>,
    #[serde(rename = "Genres")]
    pub genres: Option<String>,
    #[serde(rename = "Runtime_Minutes")]
    pub runtime_minutes: Option<u32>,
    #[serde(rename = "ProductionCountries")]
    pub production_countries: Option<String>,
    #[serde(rename = "Overview")]
    pub overview: Option<String>,
}

impl MovieRecord {
    pub fn from_inventory(inv: InventoryRecord) -> Self {
        Self {
            search_title: inv.search_title,
            search_year: inv.search_year,
            file_path: inv.file_path,
            file_name: inv.file_name,
            file_size_gb: inv.file_size_gb,
            folder_path: inv.folder_path,
            tmdb_title: None,
            tmdb_rating: None,
            release_date: None,
            genres: None,
            runtime_minutes: None,
            production_countries: None,
            overview: None,
        }
    }

    /// Column rename table for the master ledger:
    /// TMDb_Title → TMDb_Name, ReleaseDate → AirDate, Runtime_Minutes → Runtime.
    pub fn into_master(self) -> MasterRecord {
        MasterRecord {
            search_title: self.search_title,
            search_year: self.search_year,
            file_path: self.file_path,
            file_name: self.file_name,
            file_size_gb: self.file_size_gb,
            folder_path: self.folder_path,
            media_type: MEDIA_TYPE_MOVIE.to_string(),
            tmdb_name: self.tmdb_title,
            tmdb_rating: self.tmdb_rating,
            air_date: self.release_date,
            genres: self.genres,
            runtime: self.runtime_minutes,
            production_countries: self.production_countries,
            seasons_count: None,
            episodes_count: None,
            overview: self.overview,
        }
    }
}

/// An inventory row extended with TMDb series metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvRecord {
    #[serde(rename = "SearchTitle")]
    pub search_title: String,
    #[serde(rename = "SearchYear")]
    pub search_year: Option<String>,
    #[serde(rename = "FilePath")]
    pub file_path: String,
    #[serde(rename = "FileName")]
    pub file_name: String,
    #[serde(rename = "FileSizeGB")]
    pub file_size_gb: f64,
    #[serde(rename = "FolderPath")]
    pub folder_path: String,
    #[serde(rename = "TMDb_Name")]
    pub tmdb_name: Option<String>,
    #[serde(rename = "TMDb_Rating")]
    pub tmdb_rating: Option<f64>,
    #[serde(rename = "FirstAirDate")]
    pub first_air_date: Option<String>,
    #[serde(rename = "Genres")]
    pub genres: Option<String>,
    #[serde(rename = "SeasonsCount")]
    pub seasons_count: Option<u32>,
    #[serde(rename = "EpisodesCount")]
    pub episodes_count: Option<u32>,
    #[serde(rename = "Overview")]
    pub overview: Option<String>,
}

impl TvRecord {
    pub fn from_inventory(inv: InventoryRecord) -> Self {
        Self {
            search_title: inv.search_title,
            search_year: inv.search_year,
            file_path: inv.file_path,
            file_name: inv.file_name,
            file_size_gb: inv.file_size_gb,
            folder_path: inv.folder_path,
            tmdb_name: None,
            tmdb_rating: None,
            first_air_date: None,
            genres: None,
            seasons_count: None,
            episodes_count: None,
            overview: None,
        }
    }

    /// Column rename table for the master ledger: FirstAirDate → AirDate.
    pub fn into_master(self) -> MasterRecord {
        MasterRecord {
            search_title: self.search_title,
            search_year: self.search_year,
            file_path: self.file_path,
            file_name: self.file_name,
            file_size_gb: self.file_size_gb,
            folder_path: self.folder_path,
            media_type: MEDIA_TYPE_TV.to_string(),
            tmdb_name: self.tmdb_name,
            tmdb_rating: self.tmdb_rating,
            air_date: self.first_air_date,
            genres: self.genres,
            runtime: None,
            production_countries: None,
            seasons_count: self.seasons_count,
            episodes_count: self.episodes_count,
            overview: self.overview,
        }
    }
}

pub const MEDIA_TYPE_MOVIE: &str = "Movie";
pub const MEDIA_TYPE_TV: &str = "TV Show";

/// Union schema of both enriched record kinds. Columns that only apply to
/// one kind stay empty on rows of the other kind. The human-reviewed
/// `Action` column is added to the ledger out-of-band, never written here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterRecord {
    #[serde(rename = "SearchTitle")]
    pub search_title: String,
    #[serde(rename = "SearchYear")]
    pub search_year: Option<String>,
    #[serde(rename = "FilePath")]
    pub file_path: String,
    #[serde(rename = "FileName")]
    pub file_name: String,
    #[serde(rename = "FileSizeGB")]
    pub file_size_gb: f64,
    #[serde(rename = "FolderPath")]
    pub folder_path: String,
    #[serde(rename = "Type")]
    pub media_type: String,
    #[serde(rename = "TMDb_Name")]
    pub tmdb_name: Option<String>,
    #[serde(rename = "TMDb_Rating")]
    pub tmdb_rating: Option<f64>,
    #[serde(rename = "AirDate")]
    pub air_date: Option<String>,
    #[serde(rename = "Genres")]
    pub genres: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<u32>,
    #[serde(rename = "ProductionCountries")]
    pub production_countries: Option<String>,
    #[serde(rename = "SeasonsCount")]
    pub seasons_count: Option<u32>,
    #[serde(rename = "EpisodesCount")]
    pub episodes_count: Option<u32>,
    #[serde(rename = "Overview")]
    pub overview: Option<String>,
}
