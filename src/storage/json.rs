//! JSON file source: `graph.json` and `rooms.json` in a data directory

use super::traits::{FloorPlanSource, StorageError, StorageResult};
use crate::graph::{GraphDocument, RoomCatalog};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

pub const DEFAULT_GRAPH_FILE: &str = "graph.json";
pub const DEFAULT_ROOMS_FILE: &str = "rooms.json";

/// Reads building data from JSON files on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    data_dir: PathBuf,
    graph_file: String,
    rooms_file: String,
}

impl JsonFileSource {
    /// Source reading the default file names from `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            graph_file: DEFAULT_GRAPH_FILE.to_string(),
            rooms_file: DEFAULT_ROOMS_FILE.to_string(),
        }
    }

    /// Override the graph file name
    pub fn with_graph_file(mut self, name: impl Into<String>) -> Self {
        self.graph_file = name.into();
        self
    }

    /// Override the rooms file name
    pub fn with_rooms_file(mut self, name: impl Into<String>) -> Self {
        self.rooms_file = name.into();
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn graph_path(&self) -> PathBuf {
        self.data_dir.join(&self.graph_file)
    }

    pub fn rooms_path(&self) -> PathBuf {
        self.data_dir.join(&self.rooms_file)
    }

    fn read_json<T: DeserializeOwned>(path: PathBuf) -> StorageResult<T> {
        let raw = std::fs::read_to_string(&path).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| StorageError::Parse { path, source })
    }
}

impl FloorPlanSource for JsonFileSource {
    fn load_graph(&self) -> StorageResult<GraphDocument> {
        Self::read_json(self.graph_path())
    }

    fn load_rooms(&self) -> StorageResult<RoomCatalog> {
        Self::read_json(self.rooms_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) {
        std::fs::write(dir.path().join(name), contents).unwrap();
    }

    #[test]
    fn test_reads_both_files() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "graph.json",
            r#"{"nodes":[{"id":"a","floor":1,"x":0,"y":0,"type":"room"}],"edges":[]}"#,
        );
        write(&dir, "rooms.json", r#"{"rooms":[]}"#);

        let source = JsonFileSource::new(dir.path());
        assert_eq!(source.load_graph().unwrap().nodes.len(), 1);
        assert!(source.load_rooms().unwrap().is_empty());
    }

    #[test]
    fn test_custom_file_names() {
        let dir = TempDir::new().unwrap();
        write(&dir, "nav.json", r#"{"nodes":[],"edges":[]}"#);

        let source = JsonFileSource::new(dir.path()).with_graph_file("nav.json");
        assert_eq!(source.graph_path(), dir.path().join("nav.json"));
        assert!(source.load_graph().is_ok());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = JsonFileSource::new(dir.path()).load_rooms().unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "graph.json", "{ not json");
        let err = JsonFileSource::new(dir.path()).load_graph().unwrap_err();
        assert!(matches!(err, StorageError::Parse { .. }));
        assert!(err.to_string().contains("graph.json"));
    }
}
