use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionSummary {
    pub deleted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl ExecutionSummary {
    pub fn to_message(&self) -> String {
        format!(
            "Done. {} file(s) deleted, {} skipped, {} failed.",
            self.deleted, self.skipped, self.failed
        )
    }
}

/// Delete every file in the plan with per-file fault isolation.
///
/// A path that no longer exists (or is not a regular file) is a logged
/// skip; a deletion fault is logged and counted but never aborts the
/// batch. Removing the plan artifact afterwards is the caller's job.
pub fn execute_plan(paths: &[String]) -> ExecutionSummary {
    let mut summary = ExecutionSummary::default();

    for path_str in paths {
        let path = Path::new(path_str);
        if !path.is_file() {
            warn!("[skipped] file no longer exists: {}", path_str);
            summary.skipped += 1;
            continue;
        }
        match fs::remove_file(path) {
            Ok(()) => {
                info!("[deleted] {}", path_str);
                summary.deleted += 1;
            }
            Err(err) => {
                error!("[failed] {} -> {}", path_str, err);
                summary.failed += 1;
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_isolates_missing_paths() {
        let tmp = tempfile::tempdir().unwrap();
        let existing = tmp.path().join("real.mkv");
        fs::write(&existing, "data").unwrap();
        let missing = tmp.path().join("gone.mkv");

        let plan = vec![
            missing.to_string_lossy().into_owned(),
            existing.to_string_lossy().into_owned(),
        ];
        let summary = execute_plan(&plan);

        assert_eq!(summary.deleted, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 0);
        assert!(!existing.exists());
    }

    #[test]
    fn test_execute_skips_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("a_folder");
        fs::create_dir(&dir).unwrap();

        let plan = vec![dir.to_string_lossy().into_owned()];
        let summary = execute_plan(&plan);

        assert_eq!(summary.deleted, 0);
        assert_eq!(summary.skipped, 1);
        assert!(dir.exists());
    }

    #[test]
    fn test_execute_empty_plan() {
        assert_eq!(execute_plan(&[]), ExecutionSummary::default());
    }
}
