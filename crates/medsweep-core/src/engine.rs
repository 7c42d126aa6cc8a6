use crate::config::AppConfig;
use crate::enrich::Enricher;
use crate::error::Error;
use crate::execute;
use crate::merge;
use crate::model::{InventoryRecord, MediaKind, MovieRecord, TvRecord};
use crate::plan;
use crate::scanner;
use crate::store::ArtifactStore;
use crate::tmdb::{MetadataProvider, TmdbClient};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Orchestrates the two entry points: the scan pipeline
/// (scanner → enricher → merger) and the delete pipeline
/// (planner → executor). Deletion is never reachable from the scan path.
pub struct Engine {
    config: AppConfig,
    store: ArtifactStore,
}

impl Engine {
    pub fn new(config: AppConfig) -> Result<Self, Error> {
        let store = ArtifactStore::open(Path::new(&config.data_dir))?;
        Ok(Self { config, store })
    }

    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    /// Scan, enrich, and merge. Stops before any destructive action;
    /// the result is the master ledger for the human review pass.
    ///
    /// Aborts immediately, touching neither filesystem roots nor the
    /// network, when no TMDb API key is configured.
    pub fn run_scan(&self) -> Result<String, Error> {
        if self.config.api_key().is_none() {
            error!("TMDb API key is not configured; scan aborted");
            return Ok("TMDb API key is not configured; scan aborted.".to_string());
        }
        let client = TmdbClient::new(&self.config)?;
        self.run_scan_with(&client)
    }

    /// Scan pipeline against an explicit metadata provider. The public
    /// `run_scan` wires in the TMDb client; tests substitute a stub.
    pub fn run_scan_with(&self, provider: &dyn MetadataProvider) -> Result<String, Error> {
        info!("Starting scan and analysis run");
        let enricher = Enricher::new(provider);

        let scan_start = Instant::now();
        let movies: Option<Vec<MovieRecord>> = self
            .inventory_for(MediaKind::Movie, self.config.movie_path.as_deref())?
            .map(|records| {
                let enriched = enricher.enrich_movies(records);
                self.store
                    .write_records(&self.store.enriched_path(MediaKind::Movie), &enriched)
                    .map(|()| enriched)
            })
            .transpose()?;
        let tv: Option<Vec<TvRecord>> = self
            .inventory_for(MediaKind::Tv, self.config.tv_path.as_deref())?
            .map(|records| {
                let enriched = enricher.enrich_tv(records);
                self.store
                    .write_records(&self.store.enriched_path(MediaKind::Tv), &enriched)
                    .map(|()| enriched)
            })
            .transpose()?;
        debug!(
            "Scan and enrichment completed in {:.2}s",
            scan_start.elapsed().as_secs_f64()
        );

        if movies.is_none() && tv.is_none() {
            warn!("No movie or TV inventory was produced; merge skipped");
            return Ok("Scan complete, but no video files were found; master ledger not written."
                .to_string());
        }

        let master = merge::merge(movies, tv);
        let master_path = self.store.master_path();
        self.store.write_records(&master_path, &master)?;
        info!(
            "Master ledger written to {}; review it and mark rows for deletion",
            master_path.display()
        );

        Ok(format!(
            "Scan complete. {} row(s) written to {}.",
            master.len(),
            master_path.display()
        ))
    }

    /// Scan one library root, persist its inventory, and return the rows.
    /// `None` means the kind produced nothing to enrich: the root is not
    /// configured, cannot be scanned (logged and skipped), or is empty.
    fn inventory_for(
        &self,
        kind: MediaKind,
        root: Option<&str>,
    ) -> Result<Option<Vec<InventoryRecord>>, Error> {
        let Some(root) = root else {
            debug!("No {} root configured; skipping", kind.label());
            return Ok(None);
        };

        info!("Scanning {} root: {}", kind.label(), root);
        let records = match scanner::scan(Path::new(root), kind) {
            Ok(records) => records,
            Err(err) => {
                // Recoverable: one missing root must not kill the other kind.
                error!("{} scan skipped: {}", kind.label(), err);
                return Ok(None);
            }
        };
        if records.is_empty() {
            return Ok(None);
        }

        self.store
            .write_records(&self.store.inventory_path(kind), &records)?;
        Ok(Some(records))
    }

    /// Plan and execute deletions against the hand-edited master ledger.
    pub fn run_delete(&self) -> Result<String, Error> {
        warn!("Destructive operation: starting delete run");

        let master_path = self.store.master_path();
        if !master_path.exists() {
            error!(
                "Master ledger not found at {}; run a scan first",
                master_path.display()
            );
            return Ok("Master ledger not found; run a scan first.".to_string());
        }

        let paths = plan::build_plan(&master_path)?;
        if paths.is_empty() {
            return Ok("No rows are marked DELETE; nothing to do.".to_string());
        }
        self.store.write_plan(&paths)?;

        let Some(planned) = self.store.read_plan()? else {
            return Ok("No deletion plan found; nothing to do.".to_string());
        };
        if planned.is_empty() {
            if let Err(err) = self.store.remove_plan() {
                error!("Failed to remove empty deletion plan: {}", err);
            }
            return Ok("Deletion plan is empty; nothing to do.".to_string());
        }

        let summary = execute::execute_plan(&planned);

        // The plan is cleared even after partial failure so a stale plan
        // can never be re-executed silently.
        if let Err(err) = self.store.remove_plan() {
            error!("Failed to remove deletion plan artifact: {}", err);
        }

        info!("{}", summary.to_message());
        Ok(summary.to_message())
    }
}
