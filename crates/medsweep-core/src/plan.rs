use crate::error::Error;
use std::path::Path;
use tracing::info;

const ACTION_COLUMN: &str = "Action";
const FILE_PATH_COLUMN: &str = "FilePath";
const DELETE_DIRECTIVE: &str = "DELETE";

/// Extract the deletion plan from the hand-edited master ledger.
///
/// The ledger is read by header name rather than as a typed record, so
/// reviewer-added columns (including `Action` itself) survive. Rows whose
/// `Action` value case-insensitively equals `DELETE` contribute their
/// `FilePath`, in ledger row order. Any other value, or an empty cell,
/// excludes the row; only a missing column is an error.
pub fn build_plan(ledger_path: &Path) -> Result<Vec<String>, Error> {
    let mut reader = csv::Reader::from_path(ledger_path)?;
    let headers = reader.headers()?.clone();

    let action_idx = headers
        .iter()
        .position(|header| header == ACTION_COLUMN)
        .ok_or_else(|| Error::MissingColumn(ACTION_COLUMN.to_string()))?;
    let path_idx = headers
        .iter()
        .position(|header| header == FILE_PATH_COLUMN)
        .ok_or_else(|| Error::MissingColumn(FILE_PATH_COLUMN.to_string()))?;

    let mut paths = Vec::new();
    for record in reader.records() {
        let record = record?;
        let action = record.get(action_idx).unwrap_or("").trim();
        if !action.eq_ignore_ascii_case(DELETE_DIRECTIVE) {
            continue;
        }
        if let Some(path) = record.get(path_idx) {
            if !path.is_empty() {
                paths.push(path.to_string());
            }
        }
    }

    if paths.is_empty() {
        info!("No rows marked '{}' in the ledger", DELETE_DIRECTIVE);
    } else {
        info!("{} file(s) marked for deletion", paths.len());
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_ledger(dir: &Path, contents: &str) -> std::path::PathBuf {
        let path = dir.join("_MASTER_inventory.csv");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_plan_selects_marked_rows_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        let ledger = write_ledger(
            tmp.path(),
            "FilePath,Type,Action\n\
             /m/a.mkv,Movie,delete\n\
             /m/b.mkv,Movie,\n\
             /t/c.mkv,TV Show,DELETE\n\
             /t/d.mkv,TV Show,keep\n\
             /t/e.mkv,TV Show, Delete \n",
        );

        let plan = build_plan(&ledger).unwrap();
        assert_eq!(plan, vec!["/m/a.mkv", "/t/c.mkv", "/t/e.mkv"]);
    }

    #[test]
    fn test_plan_missing_action_column() {
        let tmp = tempfile::tempdir().unwrap();
        let ledger = write_ledger(tmp.path(), "FilePath,Type\n/m/a.mkv,Movie\n");

        match build_plan(&ledger) {
            Err(Error::MissingColumn(column)) => assert_eq!(column, "Action"),
            other => panic!("expected MissingColumn error, got {:?}", other.map(|p| p.len())),
        }
    }

    #[test]
    fn test_plan_empty_when_nothing_marked() {
        let tmp = tempfile::tempdir().unwrap();
        let ledger = write_ledger(
            tmp.path(),
            "FilePath,Action\n/m/a.mkv,\n/m/b.mkv,archive\n",
        );
        assert!(build_plan(&ledger).unwrap().is_empty());
    }
}
