use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use log::warn;
use serde_json;

use crate::model::task::Task;
use crate::repository::traits::TaskStore;

const DEFAULT_FILE_NAME: &str = "tasks.json";

#[derive(Clone)]
pub struct FileTaskStore {
    file_path: PathBuf,
}

impl FileTaskStore {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                // Default data directory is .tickli in the home directory
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".tickli")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(DEFAULT_FILE_NAME);

        // Ensure the file itself exists; initialize with an empty JSON array
        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Vec::<Task>::new())?;
            writer.flush()?;
        }

        Ok(FileTaskStore { file_path: path })
    }

    pub fn file_path(&self) -> &PathBuf {
        &self.file_path
    }

    fn read_tasks(&self) -> Result<Vec<Task>> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let tasks = serde_json::from_reader(reader)?;
        Ok(tasks)
    }
}

impl TaskStore for FileTaskStore {
    fn load(&self) -> Vec<Task> {
        match self.read_tasks() {
            Ok(tasks) => tasks,
            Err(e) => {
                // Missing or malformed content degrades to an empty list;
                // nothing is surfaced to the user.
                warn!("could not read {}: {e}", self.file_path.display());
                Vec::new()
            }
        }
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, tasks)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;
    use uuid::Uuid;

    fn task_at(text: &str, completed: bool, millis: i64) -> Task {
        Task {
            id: Uuid::new_v4(),
            text: text.to_string(),
            completed,
            created_at: Utc.timestamp_millis_opt(millis).unwrap(),
        }
    }

    #[test]
    fn test_new_store_loads_empty() {
        let dir = tempdir().unwrap();
        let store = FileTaskStore::new(Some(dir.path().to_path_buf())).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_round_trip_preserves_content_and_order() {
        let dir = tempdir().unwrap();
        let store = FileTaskStore::new(Some(dir.path().to_path_buf())).unwrap();

        let tasks = vec![
            task_at("Walk dog", false, 1_700_000_001_000),
            task_at("Buy milk", true, 1_700_000_000_000),
        ];
        store.save(&tasks).unwrap();

        assert_eq!(store.load(), tasks);
    }

    #[test]
    fn test_persisted_layout_is_camel_case_with_millis() {
        let dir = tempdir().unwrap();
        let store = FileTaskStore::new(Some(dir.path().to_path_buf())).unwrap();

        let tasks = vec![task_at("Buy milk", false, 1_700_000_000_000)];
        store.save(&tasks).unwrap();

        let raw = fs::read_to_string(store.file_path()).unwrap();
        assert!(raw.contains("\"createdAt\": 1700000000000"));
        assert!(raw.contains("\"completed\": false"));
        assert!(raw.contains("\"text\": \"Buy milk\""));
    }

    #[test]
    fn test_malformed_content_loads_empty() {
        let dir = tempdir().unwrap();
        let store = FileTaskStore::new(Some(dir.path().to_path_buf())).unwrap();

        fs::write(store.file_path(), "not json at all").unwrap();
        assert!(store.load().is_empty());

        // Valid JSON of the wrong shape counts as absent data too
        fs::write(store.file_path(), "{\"tasks\": []}").unwrap();
        assert!(store.load().is_empty());

        fs::write(store.file_path(), "[{\"id\": 42}]").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = FileTaskStore::new(Some(dir.path().to_path_buf())).unwrap();

        fs::remove_file(store.file_path()).unwrap();
        assert!(store.load().is_empty());
    }
}
