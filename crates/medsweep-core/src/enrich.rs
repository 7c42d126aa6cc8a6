use crate::model::{InventoryRecord, MediaKind, MovieRecord, TvRecord};
use crate::tmdb::{join_names, MediaDetails, MetadataProvider, MovieDetails, TvDetails};
use std::collections::{HashMap, HashSet};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// Fixed pause between distinct remote lookups. Throttling, not a rate
/// limiter: the remote service is simply never hit back-to-back.
pub const LOOKUP_DELAY: Duration = Duration::from_millis(100);

type TitleKey = (String, Option<String>);

/// Deduplicates inventory rows by (title, year), performs one catalog
/// lookup per distinct key, and fans the cached result back out to every
/// row. Output cardinality always equals input cardinality.
pub struct Enricher<'a> {
    provider: &'a dyn MetadataProvider,
    delay: Duration,
}

impl<'a> Enricher<'a> {
    pub fn new(provider: &'a dyn MetadataProvider) -> Self {
        Self {
            provider,
            delay: LOOKUP_DELAY,
        }
    }

    /// Override the inter-lookup pause (used by tests).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// One provider call per distinct key; every result, including a miss,
    /// is cached so a key is never looked up twice in a run.
    fn build_cache(
        &self,
        records: &[InventoryRecord],
        kind: MediaKind,
    ) -> HashMap<TitleKey, Option<MediaDetails>> {
        let mut distinct: Vec<(TitleKey, &InventoryRecord)> = Vec::new();
        let mut seen: HashSet<TitleKey> = HashSet::new();
        for record in records {
            let key = record.title_key();
            if seen.insert(key.clone()) {
                distinct.push((key, record));
            }
        }

        info!(
            "{} distinct {} title(s) to look up across {} file row(s)",
            distinct.len(),
            kind.label(),
            records.len()
        );

        let mut cache = HashMap::with_capacity(distinct.len());
        for (index, (key, record)) in distinct.iter().enumerate() {
            if index > 0 {
                thread::sleep(self.delay);
            }
            info!(
                "Looking up ({}/{}): {}",
                index + 1,
                distinct.len(),
                record.search_title
            );
            let details =
                self.provider
                    .lookup(&record.search_title, record.search_year.as_deref(), kind);
            if details.is_none() {
                debug!("No catalog match for '{}'", record.search_title);
            }
            cache.insert(key.clone(), details);
        }
        cache
    }

    pub fn enrich_movies(&self, records: Vec<InventoryRecord>) -> Vec<MovieRecord> {
        let cache = self.build_cache(&records, MediaKind::Movie);
        records
            .into_iter()
            .map(|record| {
                let key = record.title_key();
                let mut row = MovieRecord::from_inventory(record);
                if let Some(Some(MediaDetails::Movie(details))) = cache.get(&key) {
                    apply_movie_details(&mut row, details);
                }
                row
            })
            .collect()
    }

    pub fn enrich_tv(&self, records: Vec<InventoryRecord>) -> Vec<TvRecord> {
        let cache = self.build_cache(&records, MediaKind::Tv);
        records
            .into_iter()
            .map(|record| {
                let key = record.title_key();
                let mut row = TvRecord::from_inventory(record);
                if let Some(Some(MediaDetails::Tv(details))) = cache.get(&key) {
                    apply_tv_details(&mut row, details);
                }
                row
            })
            .collect()
    }
}

fn apply_movie_details(row: &mut MovieRecord, details: &MovieDetails) {
    row.tmdb_title = details.title.clone();
    row.tmdb_rating = details.vote_average;
    row.release_date = details.release_date.clone();
    row.genres = Some(join_names(details.genres.iter().map(|g| g.name.as_str())));
    row.runtime_minutes = details.runtime;
    row.production_countries = Some(join_names(
        details.production_countries.iter().map(|c| c.name.as_str()),
    ));
    row.overview = details.overview.clone();
}

fn apply_tv_details(row: &mut TvRecord, details: &TvDetails) {
    row.tmdb_name = details.name.clone();
    row.tmdb_rating = details.vote_average;
    row.first_air_date = details.first_air_date.clone();
    row.genres = Some(join_names(details.genres.iter().map(|g| g.name.as_str())));
    row.seasons_count = details.number_of_seasons;
    row.episodes_count = details.number_of_episodes;
    row.overview = details.overview.clone();
}
