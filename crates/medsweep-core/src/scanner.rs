use crate::error::Error;
use crate::model::{InventoryRecord, MediaKind, VIDEO_EXTENSIONS};
use crate::normalizer;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

const BYTES_PER_GB: f64 = (1u64 << 30) as f64;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lower = ext.to_ascii_lowercase();
            VIDEO_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

/// Walk `root` and build one inventory row per video file found.
///
/// The search title and year come from the file's immediate parent folder
/// name, not the file name. Entries are visited in sorted order so repeated
/// scans of an unchanged tree produce identical row sequences. Unreadable
/// entries are logged and skipped rather than aborting the walk.
pub fn scan(root: &Path, kind: MediaKind) -> Result<Vec<InventoryRecord>, Error> {
    if !root.is_dir() {
        return Err(Error::DirectoryNotFound(root.to_path_buf()));
    }

    let mut records = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), err);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !is_video_file(path) {
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!("Skipping {}: metadata unavailable: {}", path.display(), err);
                continue;
            }
        };

        let folder_path = path.parent().unwrap_or(root);
        let folder_name = folder_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();

        let (search_title, search_year) = match kind {
            MediaKind::Movie => normalizer::normalize_movie_name(folder_name),
            MediaKind::Tv => normalizer::normalize_tv_name(folder_name),
        };

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();

        records.push(InventoryRecord {
            search_title,
            search_year,
            file_path: path.to_string_lossy().into_owned(),
            file_name,
            file_size_gb: round2(metadata.len() as f64 / BYTES_PER_GB),
            folder_path: folder_path.to_string_lossy().into_owned(),
        });
    }

    if records.is_empty() {
        warn!(
            "{} scan of {} completed, but no video files were found",
            kind.label(),
            root.display()
        );
    } else {
        debug!(
            "{} scan of {} found {} video file(s)",
            kind.label(),
            root.display(),
            records.len()
        );
    }

    Ok(records)
}
