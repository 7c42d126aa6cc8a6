use crate::model::{MasterRecord, MovieRecord, TvRecord};
use tracing::info;

/// Union the enriched movie and TV sets into the master ledger schema.
///
/// Movie rows come first, then TV rows; no row is dropped or merged across
/// kinds. Both inputs absent yields an empty ledger, which the caller
/// treats as "nothing to merge".
pub fn merge(movies: Option<Vec<MovieRecord>>, tv: Option<Vec<TvRecord>>) -> Vec<MasterRecord> {
    let movie_count = movies.as_ref().map(Vec::len).unwrap_or(0);
    let tv_count = tv.as_ref().map(Vec::len).unwrap_or(0);

    let mut master: Vec<MasterRecord> = Vec::with_capacity(movie_count + tv_count);
    if let Some(movies) = movies {
        master.extend(movies.into_iter().map(MovieRecord::into_master));
    }
    if let Some(tv) = tv {
        master.extend(tv.into_iter().map(TvRecord::into_master));
    }

    info!(
        "Merged {} movie row(s) and {} TV row(s) into {} master row(s)",
        movie_count,
        tv_count,
        master.len()
    );
    master
}
