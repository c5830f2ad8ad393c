// src/rendering/layout.rs
//
// Particle layout engine. Pure geometry: given counts, hand back positions.
// The 3D layout feeds the projector (scene.rs); the flat layout feeds the
// 2D schematic canvas (painter.rs). Exact nucleus coordinates are not
// contractual - only the bounding radius and the even spherical spread are.

use crate::model::particles::{
  FlatParticle, NucleusParticle, Particle3D, ParticleKind, ShellElectron,
};
use rand::Rng;
use std::f64::consts::PI;

/// Nucleons sit on a jittered sphere: base radius plus up to JITTER.
pub const NUCLEUS_BASE_RADIUS: f64 = 15.0;
pub const NUCLEUS_JITTER: f64 = 5.0;
/// Hard bound every nucleon stays inside.
pub const NUCLEUS_RADIUS: f64 = NUCLEUS_BASE_RADIUS + NUCLEUS_JITTER;

/// Bohr-style shell occupancies, filled strictly left to right.
pub const SHELL_CAPACITIES: [usize; 4] = [2, 8, 18, 32];
/// 60 = sum of SHELL_CAPACITIES; electrons past that are not placed.
pub const MAX_PLACED_ELECTRONS: usize = 60;

/// Shell radii for the 3D viewer.
pub const SHELL_RADII_3D: [f64; 4] = [60.0, 100.0, 150.0, 210.0];
/// Shell radii for the flat schematic canvas.
pub const SHELL_RADII_2D: [f64; 4] = [60.0, 100.0, 140.0, 180.0];

/// Flat canvas viewbox is 500x500 with the atom anchored at its center.
pub const CANVAS_SIZE: f64 = 500.0;
pub const CANVAS_CENTER: f64 = 250.0;

// Fermat spiral constants for the flat nucleus: angle step and radial
// spacing tuned so Z=36 still fits inside the innermost shell ring.
const FERMAT_ANGLE_STEP: f64 = 2.4;
const FERMAT_SPACING: f64 = 5.2;

/// Distribute `protons + neutrons` nucleons approximately evenly over a
/// sphere surface. Polar angle comes from an even slicing of cos(phi),
/// azimuth from a spiral sweep, radius gets random jitter so the cluster
/// does not band into perfect shells. The first `protons` indices are
/// tagged proton; the order has no other meaning.
pub fn layout_nucleus(protons: u32, neutrons: u32) -> Vec<NucleusParticle> {
  let total = protons + neutrons;
  let mut rng = rand::thread_rng();
  let mut out = Vec::with_capacity(total as usize);

  for i in 0..total {
    let phi = (-1.0 + 2.0 * i as f64 / total as f64).acos();
    let theta = (total as f64 * PI).sqrt() * phi;
    let radius = NUCLEUS_BASE_RADIUS + rng.gen::<f64>() * NUCLEUS_JITTER;

    let kind = if i < protons {
      ParticleKind::Proton
    } else {
      ParticleKind::Neutron
    };

    out.push(NucleusParticle {
      kind,
      position: [
        radius * theta.cos() * phi.sin(),
        radius * theta.sin() * phi.sin(),
        radius * phi.cos(),
      ],
    });
  }

  out
}

/// Per-shell electron counts: shell i receives min(remaining, capacity[i])
/// before shell i+1 receives any. Trailing empty shells are omitted.
pub fn shell_distribution(electrons: u32) -> Vec<usize> {
  let mut remaining = electrons as usize;
  let mut dist = Vec::new();
  for cap in SHELL_CAPACITIES {
    if remaining == 0 {
      break;
    }
    let count = remaining.min(cap);
    dist.push(count);
    remaining -= count;
  }
  dist
}

/// Place electrons on tilted shell rings for the 3D viewer. Each shell is
/// a circle of evenly spaced electrons, rotated by a distinct per-shell
/// offset so the shells never lie in a single plane. At most 60 electrons
/// (the summed capacities) are placed; the rest are silently dropped.
pub fn layout_shells(electrons: u32) -> Vec<ShellElectron> {
  let mut out = Vec::new();

  for (shell, count) in shell_distribution(electrons).into_iter().enumerate() {
    let radius = SHELL_RADII_3D[shell];
    let (sin_tx, cos_tx) = (PI / 4.0 * shell as f64).sin_cos();
    let (sin_tz, cos_tz) = (PI / 6.0 * shell as f64).sin_cos();

    for i in 0..count {
      let angle = i as f64 / count as f64 * 2.0 * PI;
      let x = radius * angle.cos();
      let y = radius * angle.sin();

      // Ring starts in the xy-plane; tilt about X, then about Z.
      let y1 = y * cos_tx;
      let z1 = y * sin_tx;
      let x2 = x * cos_tz - y1 * sin_tz;
      let y2 = x * sin_tz + y1 * cos_tz;

      out.push(ShellElectron {
        position: [x2, y2, z1],
        shell_index: shell,
        angle,
      });
    }
  }

  out
}

/// Full particle set for the 3D viewer, nucleons first.
pub fn assemble(protons: u32, neutrons: u32, electrons: u32) -> Vec<Particle3D> {
  let mut particles: Vec<Particle3D> = layout_nucleus(protons, neutrons)
    .into_iter()
    .map(|p| Particle3D {
      kind: p.kind,
      position: p.position,
    })
    .collect();

  particles.extend(layout_shells(electrons).into_iter().map(|e| Particle3D {
    kind: ParticleKind::Electron,
    position: e.position,
  }));

  particles
}

/// Flat Fermat-spiral nucleus for the 2D canvas: point i at angle i*2.4,
/// distance sqrt(i)*5.2 from the canvas center. Visually even density
/// without matching the 3D coordinates.
pub fn layout_nucleus_flat(protons: u32, neutrons: u32) -> Vec<FlatParticle> {
  let total = protons + neutrons;
  (0..total)
    .map(|i| {
      let angle = i as f64 * FERMAT_ANGLE_STEP;
      let dist = (i as f64).sqrt() * FERMAT_SPACING;
      let kind = if i < protons {
        ParticleKind::Proton
      } else {
        ParticleKind::Neutron
      };
      FlatParticle {
        kind,
        x: CANVAS_CENTER + dist * angle.cos(),
        y: CANVAS_CENTER + dist * angle.sin(),
      }
    })
    .collect()
}

/// Flat coplanar electrons for the 2D canvas, one ring per occupied shell.
pub fn layout_shells_flat(electrons: u32) -> Vec<FlatParticle> {
  let mut out = Vec::new();
  for (shell, count) in shell_distribution(electrons).into_iter().enumerate() {
    let radius = SHELL_RADII_2D[shell];
    for i in 0..count {
      let angle = i as f64 / count as f64 * 2.0 * PI;
      out.push(FlatParticle {
        kind: ParticleKind::Electron,
        x: CANVAS_CENTER + radius * angle.cos(),
        y: CANVAS_CENTER + radius * angle.sin(),
      });
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  fn norm(p: [f64; 3]) -> f64 {
    (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt()
  }

  #[test]
  fn test_nucleus_counts_and_tags() {
    let particles = layout_nucleus(6, 6);
    assert_eq!(particles.len(), 12);
    let protons = particles
      .iter()
      .filter(|p| p.kind == ParticleKind::Proton)
      .count();
    assert_eq!(protons, 6);
    // first p indices are protons, rest neutrons
    assert_eq!(particles[0].kind, ParticleKind::Proton);
    assert_eq!(particles[11].kind, ParticleKind::Neutron);
  }

  #[test]
  fn test_nucleus_within_bounding_radius() {
    for p in layout_nucleus(50, 68) {
      let r = norm(p.position);
      assert!(r <= NUCLEUS_RADIUS + 1e-9, "nucleon escaped: r = {}", r);
    }
  }

  #[test]
  fn test_nucleus_empty_and_single() {
    assert!(layout_nucleus(0, 0).is_empty());
    assert_eq!(layout_nucleus(1, 0).len(), 1);
  }

  #[test]
  fn test_carbon12_no_coincident_nucleons() {
    let particles = layout_nucleus(6, 6);
    for i in 0..particles.len() {
      for j in (i + 1)..particles.len() {
        let a = particles[i].position;
        let b = particles[j].position;
        let d = ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)).sqrt();
        assert!(d > 1e-6, "nucleons {} and {} coincide", i, j);
      }
    }
  }

  #[test]
  fn test_shell_distribution_fill_order() {
    assert_eq!(shell_distribution(0), Vec::<usize>::new());
    assert_eq!(shell_distribution(1), vec![1]);
    assert_eq!(shell_distribution(6), vec![2, 4]);
    assert_eq!(shell_distribution(10), vec![2, 8]);
    assert_eq!(shell_distribution(20), vec![2, 8, 10]);
    assert_eq!(shell_distribution(60), vec![2, 8, 18, 32]);
  }

  #[test]
  fn test_shells_cap_at_sixty() {
    assert_eq!(layout_shells(60).len(), MAX_PLACED_ELECTRONS);
    assert_eq!(layout_shells(118).len(), MAX_PLACED_ELECTRONS);
  }

  #[test]
  fn test_shells_placed_count_and_index() {
    let shells = layout_shells(11);
    assert_eq!(shells.len(), 11);
    assert_eq!(shells.iter().filter(|e| e.shell_index == 0).count(), 2);
    assert_eq!(shells.iter().filter(|e| e.shell_index == 1).count(), 8);
    assert_eq!(shells.iter().filter(|e| e.shell_index == 2).count(), 1);
  }

  #[test]
  fn test_shells_keep_their_radius() {
    // The tilt is a rotation, so every electron stays at its shell radius.
    for e in layout_shells(20) {
      let r = norm(e.position);
      let expected = SHELL_RADII_3D[e.shell_index];
      assert!((r - expected).abs() < 1e-9, "shell {} radius {}", e.shell_index, r);
    }
  }

  #[test]
  fn test_assemble_combines_everything() {
    let particles = assemble(6, 6, 6);
    assert_eq!(particles.len(), 18);
    let electrons = particles
      .iter()
      .filter(|p| p.kind == ParticleKind::Electron)
      .count();
    assert_eq!(electrons, 6);
  }

  #[test]
  fn test_flat_nucleus_anchored_at_center() {
    let flat = layout_nucleus_flat(1, 0);
    assert_eq!(flat.len(), 1);
    assert!((flat[0].x - CANVAS_CENTER).abs() < 1e-9);
    assert!((flat[0].y - CANVAS_CENTER).abs() < 1e-9);
  }

  #[test]
  fn test_flat_shells_match_distribution() {
    let flat = layout_shells_flat(10);
    assert_eq!(flat.len(), 10);
  }
}
