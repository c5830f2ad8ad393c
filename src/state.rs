// src/state.rs

use crate::leaderboard::Leaderboard;
use crate::model::elements::{self, ElementData};
use crate::model::particles::ParticleKind;
use crate::storage::Storage;
use log::warn;
use serde::{Deserialize, Serialize};
use std::time::Instant;

pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 2.0;
/// Fixed per-tick auto-rotation step. Known limitation: rotation speed
/// tracks the host's callback rate, not wall-clock time.
pub const AUTO_ROTATION_STEP: f64 = 0.005;

const DRAG_SENSITIVITY: f64 = 0.01;
const WHEEL_ZOOM_STEP: f64 = 0.1;

/// User-controlled view of the 3D scene plus the monotonically increasing
/// auto-rotation phase. Owned by the viewer, passed by reference into the
/// projector; never a module-level global.
#[derive(Debug, Clone, Copy)]
pub struct ViewTransform {
  pub rot_x: f64,
  pub rot_y: f64,
  pub zoom: f64,
  pub auto_phase: f64,
}

impl ViewTransform {
  pub fn new() -> Self {
    Self {
      rot_x: 0.0,
      rot_y: 0.0,
      zoom: 1.0,
      auto_phase: 0.0,
    }
  }

  pub fn drag(&mut self, dx: f64, dy: f64) {
    self.rot_y += dx * DRAG_SENSITIVITY;
    self.rot_x += dy * DRAG_SENSITIVITY;
  }

  /// Scroll: positive dy zooms out, one notch per WHEEL_ZOOM_STEP.
  pub fn wheel(&mut self, dy: f64) {
    self.zoom_by(-dy * WHEEL_ZOOM_STEP);
  }

  pub fn zoom_by(&mut self, delta: f64) {
    self.zoom = (self.zoom + delta).clamp(ZOOM_MIN, ZOOM_MAX);
  }

  /// One animation tick.
  pub fn advance(&mut self) {
    self.auto_phase += AUTO_ROTATION_STEP;
  }

  /// Back to the home view. Counts and auto-rotation phase are untouched.
  pub fn reset(&mut self) {
    self.rot_x = 0.0;
    self.rot_y = 0.0;
    self.zoom = 1.0;
  }
}

impl Default for ViewTransform {
  fn default() -> Self {
    Self::new()
  }
}

/// Who is signed in.
#[derive(Debug, Clone)]
pub struct Student {
  pub id: String,
  pub name: String,
  pub team: String,
}

/// The atom under construction plus the chosen target element.
pub struct BuildState {
  pub element_z: u32,
  pub protons: u32,
  pub neutrons: u32,
  pub electrons: u32,
  started: Instant,
}

impl BuildState {
  pub fn new() -> Self {
    Self {
      element_z: elements::ELEMENTS[0].z,
      protons: 0,
      neutrons: 0,
      electrons: 0,
      started: Instant::now(),
    }
  }

  pub fn target(&self) -> &'static ElementData {
    // element_z only ever comes from the table itself
    elements::by_atomic_number(self.element_z).unwrap_or(&elements::ELEMENTS[0])
  }

  pub fn add(&mut self, kind: ParticleKind) {
    match kind {
      ParticleKind::Proton => self.protons += 1,
      ParticleKind::Neutron => self.neutrons += 1,
      ParticleKind::Electron => self.electrons += 1,
    }
  }

  /// Decrements clamp at zero.
  pub fn remove(&mut self, kind: ParticleKind) {
    match kind {
      ParticleKind::Proton => self.protons = self.protons.saturating_sub(1),
      ParticleKind::Neutron => self.neutrons = self.neutrons.saturating_sub(1),
      ParticleKind::Electron => self.electrons = self.electrons.saturating_sub(1),
    }
  }

  pub fn reset_counts(&mut self) {
    self.protons = 0;
    self.neutrons = 0;
    self.electrons = 0;
  }

  /// How many of the three counts match the target, 0..=3.
  pub fn matches(&self) -> u32 {
    let t = self.target();
    (self.protons == t.z) as u32
      + (self.neutrons == t.neutrons) as u32
      + (self.electrons == t.z) as u32
  }

  /// Exact-match scoring: a third of the total per correct count,
  /// rounded to an integer percent.
  pub fn score(&self) -> u32 {
    let t = self.target();
    let p: f64 = if self.protons == t.z { 33.33 } else { 0.0 };
    let n = if self.neutrons == t.neutrons { 33.33 } else { 0.0 };
    let e = if self.electrons == t.z { 33.34 } else { 0.0 };
    (p + n + e).round() as u32
  }

  pub fn elapsed_secs(&self) -> u64 {
    self.started.elapsed().as_secs()
  }
}

impl Default for BuildState {
  fn default() -> Self {
    Self::new()
  }
}

/// Snapshot of a finished attempt, shown on the results view.
#[derive(Debug, Clone)]
pub struct BuildResult {
  pub element_name: String,
  pub protons: u32,
  pub neutrons: u32,
  pub electrons: u32,
  pub score: u32,
  pub time_taken: u64,
}

/// Builder configuration persisted per student so an interrupted session
/// resumes where it left off.
#[derive(Debug, Serialize, Deserialize)]
struct SavedBuild {
  element_z: u32,
  protons: u32,
  neutrons: u32,
  electrons: u32,
}

pub struct AppState {
  pub storage: Storage,
  pub leaderboard: Leaderboard,
  pub student: Option<Student>,
  pub build: BuildState,
  pub last_result: Option<BuildResult>,
}

impl AppState {
  pub fn new(storage: Storage) -> Self {
    let leaderboard = Leaderboard::load(&storage);
    Self {
      storage,
      leaderboard,
      student: None,
      build: BuildState::new(),
      last_result: None,
    }
  }

  fn session_key(&self) -> Option<String> {
    self
      .student
      .as_ref()
      .map(|s| format!("atom_builder_state_{}", s.id))
  }

  pub fn save_session(&mut self) {
    let Some(key) = self.session_key() else { return };
    let saved = SavedBuild {
      element_z: self.build.element_z,
      protons: self.build.protons,
      neutrons: self.build.neutrons,
      electrons: self.build.electrons,
    };
    match serde_json::to_string(&saved) {
      Ok(json) => self.storage.set(&key, json),
      Err(e) => warn!("Could not serialize builder session: {}", e),
    }
  }

  /// Restores a saved builder session, if one exists for this student.
  pub fn restore_session(&mut self) {
    let Some(key) = self.session_key() else { return };
    let Some(raw) = self.storage.get(&key) else { return };
    match serde_json::from_str::<SavedBuild>(raw) {
      Ok(saved) => {
        if elements::by_atomic_number(saved.element_z).is_some() {
          self.build.element_z = saved.element_z;
        }
        self.build.protons = saved.protons;
        self.build.neutrons = saved.neutrons;
        self.build.electrons = saved.electrons;
      }
      Err(e) => warn!("Could not parse saved builder session: {}", e),
    }
  }

  pub fn clear_session(&mut self) {
    if let Some(key) = self.session_key() {
      self.storage.remove(&key);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_zoom_clamps_low() {
    let mut view = ViewTransform::new();
    for _ in 0..1000 {
      view.wheel(1.0); // zoom out
    }
    assert_eq!(view.zoom, ZOOM_MIN);
  }

  #[test]
  fn test_zoom_clamps_high() {
    let mut view = ViewTransform::new();
    for _ in 0..1000 {
      view.zoom_by(0.1);
    }
    assert_eq!(view.zoom, ZOOM_MAX);
  }

  #[test]
  fn test_reset_is_idempotent() {
    let mut view = ViewTransform::new();
    view.drag(140.0, -35.0);
    view.wheel(3.0);
    view.advance();
    let phase = view.auto_phase;

    view.reset();
    assert_eq!((view.rot_x, view.rot_y, view.zoom), (0.0, 0.0, 1.0));
    assert_eq!(view.auto_phase, phase);

    view.reset();
    assert_eq!((view.rot_x, view.rot_y, view.zoom), (0.0, 0.0, 1.0));
  }

  #[test]
  fn test_auto_phase_is_monotonic() {
    let mut view = ViewTransform::new();
    let mut last = view.auto_phase;
    for _ in 0..50 {
      view.advance();
      assert!(view.auto_phase > last);
      last = view.auto_phase;
    }
  }

  #[test]
  fn test_remove_clamps_at_zero() {
    let mut build = BuildState::new();
    build.remove(ParticleKind::Proton);
    build.remove(ParticleKind::Electron);
    assert_eq!(build.protons, 0);
    assert_eq!(build.electrons, 0);

    build.add(ParticleKind::Neutron);
    build.remove(ParticleKind::Neutron);
    build.remove(ParticleKind::Neutron);
    assert_eq!(build.neutrons, 0);
  }

  #[test]
  fn test_score_perfect_carbon() {
    let mut build = BuildState::new();
    build.element_z = 6;
    build.protons = 6;
    build.neutrons = 6;
    build.electrons = 6;
    assert_eq!(build.score(), 100);
    assert_eq!(build.matches(), 3);
  }

  #[test]
  fn test_score_partial_and_zero() {
    let mut build = BuildState::new();
    build.element_z = 6;
    assert_eq!(build.score(), 0);

    build.protons = 6;
    assert_eq!(build.score(), 33);

    build.electrons = 6;
    assert_eq!(build.score(), 67);
  }
}
