// src/storage/index_store.rs
// =============================================================================
// This module stores index snapshots as JSON files.
//
// One snapshot = one file named "<owner>__<repo>.json" under the store
// root. Saving a repository that was indexed before overwrites the old
// snapshot completely - each run is a full re-crawl, so there is nothing
// to merge.
//
// Rust concepts:
// - PathBuf: Owned filesystem paths
// - serde: The snapshot (de)serializes to/from pretty JSON
// - chrono: Timestamps the snapshot with the indexing time
// =============================================================================

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::parser::Section;

// Directory under the home directory used when no override is given
const DEFAULT_STORE_DIR: &str = ".doc-index";

// The complete persisted index for one repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocIndex {
    pub owner: String,
    pub repo: String,
    /// Every documentation file that was discovered
    pub files: Vec<String>,
    /// All extracted sections, summaries included
    pub sections: Vec<Section>,
    /// Raw content keyed by file path; files that failed to fetch are absent
    pub raw_files: HashMap<String, String>,
    /// When this snapshot was created
    pub indexed_at: DateTime<Utc>,
}

// A directory of index snapshots
pub struct IndexStore {
    root: PathBuf,
}

impl IndexStore {
    // Opens (and creates, if needed) the store at the given location
    //
    // Parameters:
    //   storage_path: explicit root directory, or None for ~/.doc-index
    pub fn new(storage_path: Option<PathBuf>) -> Result<Self> {
        let root = match storage_path {
            Some(path) => path,
            None => dirs::home_dir()
                .ok_or_else(|| anyhow!("Could not determine home directory for index store"))?
                .join(DEFAULT_STORE_DIR),
        };

        fs::create_dir_all(&root)?;

        Ok(Self { root })
    }

    // Where the snapshot for one repository lives
    fn index_path(&self, owner: &str, repo: &str) -> PathBuf {
        self.root.join(format!("{}__{}.json", owner, repo))
    }

    // Saves a snapshot, replacing any previous one for this repository
    //
    // Stamps the snapshot with the current time and returns it so the
    // caller can report indexed_at without re-reading the file.
    pub fn save_index(
        &self,
        owner: &str,
        repo: &str,
        files: Vec<String>,
        sections: Vec<Section>,
        raw_files: HashMap<String, String>,
    ) -> Result<DocIndex> {
        let index = DocIndex {
            owner: owner.to_string(),
            repo: repo.to_string(),
            files,
            sections,
            raw_files,
            indexed_at: Utc::now(),
        };

        let json = serde_json::to_string_pretty(&index)?;
        fs::write(self.index_path(owner, repo), json)?;

        Ok(index)
    }

    // Loads the snapshot for one repository, if any exists
    pub fn load_index(&self, owner: &str, repo: &str) -> Result<Option<DocIndex>> {
        let path = self.index_path(owner, repo);

        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path)?;
        let index = serde_json::from_str(&json)?;
        Ok(Some(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_section() -> Section {
        Section {
            file_path: "README.md".to_string(),
            title: "Intro".to_string(),
            level: 1,
            content: "Welcome.".to_string(),
            summary: Some("Welcome.".to_string()),
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = IndexStore::new(Some(dir.path().to_path_buf())).unwrap();

        let mut raw_files = HashMap::new();
        raw_files.insert("README.md".to_string(), "# Intro\n\nWelcome.".to_string());

        let saved = store
            .save_index(
                "octocat",
                "Hello-World",
                vec!["README.md".to_string()],
                vec![sample_section()],
                raw_files,
            )
            .unwrap();

        let loaded = store.load_index("octocat", "Hello-World").unwrap().unwrap();
        assert_eq!(loaded.owner, "octocat");
        assert_eq!(loaded.repo, "Hello-World");
        assert_eq!(loaded.files, vec!["README.md"]);
        assert_eq!(loaded.sections.len(), 1);
        assert_eq!(loaded.indexed_at, saved.indexed_at);
        assert!(loaded.raw_files.contains_key("README.md"));
    }

    #[test]
    fn test_load_missing_index_returns_none() {
        let dir = tempdir().unwrap();
        let store = IndexStore::new(Some(dir.path().to_path_buf())).unwrap();
        assert!(store.load_index("nobody", "nothing").unwrap().is_none());
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let dir = tempdir().unwrap();
        let store = IndexStore::new(Some(dir.path().to_path_buf())).unwrap();

        store
            .save_index(
                "octocat",
                "Hello-World",
                vec!["README.md".to_string(), "docs/old.md".to_string()],
                vec![sample_section()],
                HashMap::new(),
            )
            .unwrap();

        // Second run discovers a different file set; the snapshot is
        // replaced wholesale, not merged
        store
            .save_index(
                "octocat",
                "Hello-World",
                vec!["README.md".to_string()],
                vec![sample_section()],
                HashMap::new(),
            )
            .unwrap();

        let loaded = store.load_index("octocat", "Hello-World").unwrap().unwrap();
        assert_eq!(loaded.files, vec!["README.md"]);
    }

    #[test]
    fn test_store_creates_missing_root() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = IndexStore::new(Some(nested.clone()));
        assert!(store.is_ok());
        assert!(nested.exists());
    }
}
