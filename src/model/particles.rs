// src/model/particles.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
  Proton,
  Neutron,
  Electron,
}

/// A nucleon placed inside the nucleus cluster. Positions are regenerated
/// wholesale whenever the owning counts change; no identity survives that.
#[derive(Debug, Clone, Copy)]
pub struct NucleusParticle {
  pub kind: ParticleKind,
  pub position: [f64; 3],
}

/// An electron pinned to a discrete shell.
#[derive(Debug, Clone, Copy)]
pub struct ShellElectron {
  pub position: [f64; 3],
  pub shell_index: usize,
  pub angle: f64,
}

/// Unified particle fed to the projector.
#[derive(Debug, Clone, Copy)]
pub struct Particle3D {
  pub kind: ParticleKind,
  pub position: [f64; 3],
}

/// Screen-space output of the projector. The projector emits these sorted
/// back-to-front so the painter never needs a depth buffer.
#[derive(Debug, Clone, Copy)]
pub struct ProjectedParticle {
  pub kind: ParticleKind,
  pub x: f64,
  pub y: f64,
  pub depth: f64,
  pub size: f64,
  pub opacity: f64,
}

/// Flat particle for the 2D schematic canvas (500x500 viewbox coordinates).
#[derive(Debug, Clone, Copy)]
pub struct FlatParticle {
  pub kind: ParticleKind,
  pub x: f64,
  pub y: f64,
}
