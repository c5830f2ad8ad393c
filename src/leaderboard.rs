// src/leaderboard.rs

use crate::storage::Storage;
use log::warn;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "atom_leaderboard";
pub const MAX_ENTRIES: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
  pub student_name: String,
  pub team: String,
  pub element_name: String,
  pub protons: u32,
  pub neutrons: u32,
  pub electrons: u32,
  pub score: u32,
  pub time_taken: u64,
  pub date: String,
}

/// Local top-10, ranked by score (desc) then time (asc). Newer entries win
/// exact ties because submission prepends before the stable sort.
pub struct Leaderboard {
  entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
  pub fn load(storage: &Storage) -> Self {
    let entries = match storage.get(STORAGE_KEY) {
      Some(raw) => match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
          warn!("Could not parse saved leaderboard: {}", e);
          Vec::new()
        }
      },
      None => Vec::new(),
    };
    Self { entries }
  }

  pub fn entries(&self) -> &[LeaderboardEntry] {
    &self.entries
  }

  pub fn submit(&mut self, entry: LeaderboardEntry) {
    self.entries.insert(0, entry);
    self.entries.sort_by(|a, b| {
      b.score
        .cmp(&a.score)
        .then(a.time_taken.cmp(&b.time_taken))
    });
    self.entries.truncate(MAX_ENTRIES);
  }

  pub fn save(&self, storage: &mut Storage) {
    match serde_json::to_string(&self.entries) {
      Ok(json) => storage.set(STORAGE_KEY, json),
      Err(e) => warn!("Could not serialize leaderboard: {}", e),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn entry(name: &str, score: u32, time_taken: u64) -> LeaderboardEntry {
    LeaderboardEntry {
      student_name: name.to_string(),
      team: "Team Carbon".to_string(),
      element_name: "Carbon".to_string(),
      protons: 6,
      neutrons: 6,
      electrons: 6,
      score,
      time_taken,
      date: "01/09/2026".to_string(),
    }
  }

  #[test]
  fn test_ranked_by_score_then_time() {
    let mut board = Leaderboard { entries: Vec::new() };
    board.submit(entry("slow-perfect", 100, 90));
    board.submit(entry("fast-partial", 67, 20));
    board.submit(entry("fast-perfect", 100, 30));

    let names: Vec<&str> = board.entries().iter().map(|e| e.student_name.as_str()).collect();
    assert_eq!(names, vec!["fast-perfect", "slow-perfect", "fast-partial"]);
  }

  #[test]
  fn test_truncates_to_max() {
    let mut board = Leaderboard { entries: Vec::new() };
    for i in 0..25 {
      board.submit(entry(&format!("s{}", i), i as u32, 60));
    }
    assert_eq!(board.entries().len(), MAX_ENTRIES);
    // the lowest scores fell off
    assert!(board.entries().iter().all(|e| e.score >= 15));
  }

  #[test]
  fn test_roundtrip_through_storage() {
    let path = std::env::temp_dir().join(format!("atomlab_lb_{}.json", std::process::id()));
    let _ = std::fs::remove_file(&path);
    let mut storage = Storage::with_path(path.clone());

    let mut board = Leaderboard { entries: Vec::new() };
    board.submit(entry("keeper", 100, 42));
    board.save(&mut storage);

    let reloaded = Leaderboard::load(&storage);
    assert_eq!(reloaded.entries().len(), 1);
    assert_eq!(reloaded.entries()[0].student_name, "keeper");

    let _ = std::fs::remove_file(&path);
  }
}
