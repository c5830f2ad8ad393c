// src/storage.rs
//
// Local key-value store: a flat string map persisted as JSON under the
// platform config dir.
// Used by the surrounding UI glue (leaderboard, session resume, tutorial
// flag) - never by the layout/projection core.

use directories::ProjectDirs;
use log::{info, warn};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

pub struct Storage {
  path: PathBuf,
  map: HashMap<String, String>,
}

impl Storage {
  /// Opens the store at the standard OS location
  /// (e.g. ~/.config/atomlab/storage.json), starting empty if absent.
  pub fn open() -> Self {
    Self::with_path(Self::default_path())
  }

  pub fn with_path(path: PathBuf) -> Self {
    let map = if path.exists() {
      match File::open(&path) {
        Ok(file) => match serde_json::from_reader(BufReader::new(file)) {
          Ok(map) => {
            info!("Storage loaded from {:?}", path);
            map
          }
          Err(e) => {
            warn!("Error parsing storage, starting fresh: {}", e);
            HashMap::new()
          }
        },
        Err(e) => {
          warn!("Error opening storage, starting fresh: {}", e);
          HashMap::new()
        }
      }
    } else {
      HashMap::new()
    };

    Self { path, map }
  }

  pub fn get(&self, key: &str) -> Option<&str> {
    self.map.get(key).map(String::as_str)
  }

  pub fn set(&mut self, key: &str, value: impl Into<String>) {
    self.map.insert(key.to_string(), value.into());
    self.flush();
  }

  pub fn remove(&mut self, key: &str) {
    if self.map.remove(key).is_some() {
      self.flush();
    }
  }

  fn flush(&self) {
    if let Some(parent) = self.path.parent() {
      let _ = fs::create_dir_all(parent);
    }
    match File::create(&self.path) {
      Ok(file) => {
        if let Err(e) = serde_json::to_writer_pretty(BufWriter::new(file), &self.map) {
          warn!("Failed to write storage: {}", e);
        }
      }
      Err(e) => warn!("Could not create storage file: {}", e),
    }
  }

  fn default_path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("com", "example", "atomlab") {
      proj.config_dir().join("storage.json")
    } else {
      PathBuf::from("storage.json")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn temp_store(name: &str) -> Storage {
    let path = std::env::temp_dir().join(format!("atomlab_test_{}_{}.json", name, std::process::id()));
    let _ = fs::remove_file(&path);
    Storage::with_path(path)
  }

  #[test]
  fn test_set_get_remove() {
    let mut store = temp_store("roundtrip");
    assert_eq!(store.get("tutorial_seen"), None);

    store.set("tutorial_seen", "true");
    assert_eq!(store.get("tutorial_seen"), Some("true"));

    store.remove("tutorial_seen");
    assert_eq!(store.get("tutorial_seen"), None);

    let _ = fs::remove_file(&store.path);
  }

  #[test]
  fn test_values_survive_reopen() {
    let mut store = temp_store("reopen");
    store.set("k", "v");
    let path = store.path.clone();
    drop(store);

    let reopened = Storage::with_path(path.clone());
    assert_eq!(reopened.get("k"), Some("v"));

    let _ = fs::remove_file(&path);
  }
}
