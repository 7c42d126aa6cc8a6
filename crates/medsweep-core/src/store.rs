use crate::error::Error;
use crate::model::MediaKind;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Owns the private data directory holding every pipeline artifact:
/// the per-kind inventories, the enriched sets, the master ledger, and
/// the line-delimited deletion plan. Artifacts are read and rewritten
/// wholesale, never incrementally.
pub struct ArtifactStore {
    data_dir: PathBuf,
}

impl ArtifactStore {
    pub fn open(data_dir: &Path) -> Result<Self, Error> {
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            data_dir: data_dir.to_path_buf(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn inventory_path(&self, kind: MediaKind) -> PathBuf {
        match kind {
            MediaKind::Movie => self.data_dir.join("inventory_movies.csv"),
            MediaKind::Tv => self.data_dir.join("inventory_tv.csv"),
        }
    }

    pub fn enriched_path(&self, kind: MediaKind) -> PathBuf {
        match kind {
            MediaKind::Movie => self.data_dir.join("enriched_movies.csv"),
            MediaKind::Tv => self.data_dir.join("enriched_tv.csv"),
        }
    }

    pub fn master_path(&self) -> PathBuf {
        self.data_dir.join("_MASTER_inventory.csv")
    }

    pub fn plan_path(&self) -> PathBuf {
        self.data_dir.join("files_to_delete.txt")
    }

    pub fn write_records<T: Serialize>(&self, path: &Path, records: &[T]) -> Result<(), Error> {
        let mut writer = csv::Writer::from_path(path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        debug!("Wrote {} record(s) to {}", records.len(), path.display());
        Ok(())
    }

    pub fn read_records<T: DeserializeOwned>(&self, path: &Path) -> Result<Vec<T>, Error> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut records = Vec::new();
        for record in reader.deserialize::<T>() {
            records.push(record?);
        }
        Ok(records)
    }

    /// Persist the deletion plan, one path per line, UTF-8.
    pub fn write_plan(&self, paths: &[String]) -> Result<(), Error> {
        let mut contents = paths.join("\n");
        contents.push('\n');
        fs::write(self.plan_path(), contents)?;
        debug!("Wrote deletion plan with {} path(s)", paths.len());
        Ok(())
    }

    /// Read the deletion plan; `None` means no plan artifact exists.
    /// Blank lines are ignored.
    pub fn read_plan(&self) -> Result<Option<Vec<String>>, Error> {
        let path = self.plan_path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        let paths = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Ok(Some(paths))
    }

    pub fn remove_plan(&self) -> Result<(), Error> {
        fs::remove_file(self.plan_path())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InventoryRecord;

    #[test]
    fn test_csv_round_trip_preserves_rows_and_order() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ArtifactStore::open(tmp.path()).unwrap();

        let records = vec![
            InventoryRecord {
                search_title: "B Title".to_string(),
                search_year: None,
                file_path: "/media/b/b.mkv".to_string(),
                file_name: "b.mkv".to_string(),
                file_size_gb: 0.5,
                folder_path: "/media/b".to_string(),
            },
            InventoryRecord {
                search_title: "A Title".to_string(),
                search_year: Some("2001".to_string()),
                file_path: "/media/a/a.mkv".to_string(),
                file_name: "a.mkv".to_string(),
                file_size_gb: 12.34,
                folder_path: "/media/a".to_string(),
            },
        ];

        let path = store.inventory_path(MediaKind::Movie);
        store.write_records(&path, &records).unwrap();
        let read: Vec<InventoryRecord> = store.read_records(&path).unwrap();
        assert_eq!(read, records);
    }

    #[test]
    fn test_plan_round_trip_and_removal() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ArtifactStore::open(tmp.path()).unwrap();

        assert!(store.read_plan().unwrap().is_none());

        let paths = vec!["/a/b.mkv".to_string(), "/c/d.mp4".to_string()];
        store.write_plan(&paths).unwrap();
        assert_eq!(store.read_plan().unwrap(), Some(paths));

        store.remove_plan().unwrap();
        assert!(store.read_plan().unwrap().is_none());
    }
}
