// src/rendering/scene.rs
//
// 3D -> 2D projection for the viewer. Called once per animation tick; no
// side effects, no error paths. Output order is the paint order.

use crate::model::particles::{Particle3D, ParticleKind, ProjectedParticle};
use crate::state::ViewTransform;
use std::cmp::Ordering;

/// Perspective camera constant.
pub const FOCAL_LENGTH: f64 = 600.0;

const NUCLEON_SIZE: f64 = 6.0;
const ELECTRON_SIZE: f64 = 4.0;
/// Far particles fade but never fully vanish.
const OPACITY_FLOOR: f64 = 0.2;

/// Rotate, perspective-project and depth-sort the particle set.
///
/// Per particle: yaw about the vertical axis by (rot_y + auto_phase),
/// pitch about the horizontal axis by rot_x, then divide by depth:
/// scale = focal / (focal - z). Depth is clamped below the focal length
/// so the division stays finite for any input. Output is sorted by
/// ascending depth so the painter draws back-to-front.
pub fn project_frame(
  particles: &[Particle3D],
  view: &ViewTransform,
  center_x: f64,
  center_y: f64,
) -> Vec<ProjectedParticle> {
  let (sin_y, cos_y) = (view.rot_y + view.auto_phase).sin_cos();
  let (sin_x, cos_x) = view.rot_x.sin_cos();

  let mut out = Vec::with_capacity(particles.len());

  for p in particles {
    let [x, y, z] = p.position;

    // Yaw (vertical axis)
    let x1 = x * cos_y - z * sin_y;
    let z1 = x * sin_y + z * cos_y;

    // Pitch (horizontal axis)
    let y2 = y * cos_x - z1 * sin_x;
    let z2 = y * sin_x + z1 * cos_x;

    // Keep the perspective division away from the pole.
    let depth = z2.min(FOCAL_LENGTH - 1.0);
    let scale = FOCAL_LENGTH / (FOCAL_LENGTH - depth);

    let base_size = match p.kind {
      ParticleKind::Electron => ELECTRON_SIZE,
      _ => NUCLEON_SIZE,
    };

    out.push(ProjectedParticle {
      kind: p.kind,
      x: center_x + x1 * scale * view.zoom,
      y: center_y + y2 * scale * view.zoom,
      depth: z2,
      size: base_size * scale * view.zoom,
      opacity: ((z2 + 250.0) / 500.0).clamp(OPACITY_FLOOR, 1.0),
    });
  }

  // Painter's algorithm: farthest first.
  out.sort_by(|a, b| a.depth.partial_cmp(&b.depth).unwrap_or(Ordering::Equal));

  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::rendering::layout;

  fn particle(kind: ParticleKind, position: [f64; 3]) -> Particle3D {
    Particle3D { kind, position }
  }

  #[test]
  fn test_output_length_matches_input() {
    let particles = layout::assemble(6, 6, 6);
    let frame = project_frame(&particles, &ViewTransform::new(), 400.0, 300.0);
    assert_eq!(frame.len(), particles.len());
  }

  #[test]
  fn test_output_sorted_by_depth() {
    let mut view = ViewTransform::new();
    view.drag(200.0, 120.0);
    view.advance();

    // Oganesson-sized input: the practical worst case for a single frame.
    let particles = layout::assemble(118, 176, 118);
    let frame = project_frame(&particles, &view, 500.0, 350.0);
    for pair in frame.windows(2) {
      assert!(pair[0].depth <= pair[1].depth);
    }
  }

  #[test]
  fn test_empty_scene_is_valid() {
    let frame = project_frame(&[], &ViewTransform::new(), 0.0, 0.0);
    assert!(frame.is_empty());
  }

  #[test]
  fn test_scale_stays_finite_near_focal_plane() {
    // Depth right at (and past) the focal length must not blow up.
    let particles = [
      particle(ParticleKind::Proton, [0.0, 0.0, FOCAL_LENGTH]),
      particle(ParticleKind::Proton, [0.0, 0.0, FOCAL_LENGTH + 50.0]),
    ];
    let frame = project_frame(&particles, &ViewTransform::new(), 100.0, 100.0);
    for p in &frame {
      assert!(p.x.is_finite());
      assert!(p.y.is_finite());
      assert!(p.size.is_finite());
    }
  }

  #[test]
  fn test_opacity_has_floor_and_ceiling() {
    let particles = [
      particle(ParticleKind::Neutron, [0.0, 0.0, -400.0]),
      particle(ParticleKind::Neutron, [0.0, 0.0, 400.0]),
    ];
    let frame = project_frame(&particles, &ViewTransform::new(), 0.0, 0.0);
    assert_eq!(frame[0].opacity, 0.2);
    assert_eq!(frame[1].opacity, 1.0);
  }

  #[test]
  fn test_electrons_project_smaller_than_nucleons() {
    let particles = [
      particle(ParticleKind::Proton, [0.0, 0.0, 0.0]),
      particle(ParticleKind::Electron, [0.0, 0.0, 0.0]),
    ];
    let frame = project_frame(&particles, &ViewTransform::new(), 0.0, 0.0);
    let proton = frame.iter().find(|p| p.kind == ParticleKind::Proton).unwrap();
    let electron = frame
      .iter()
      .find(|p| p.kind == ParticleKind::Electron)
      .unwrap();
    assert!(electron.size < proton.size);
  }

  #[test]
  fn test_zoom_scales_screen_offsets() {
    let particles = [particle(ParticleKind::Proton, [100.0, 0.0, 0.0])];
    let mut view = ViewTransform::new();
    let near = project_frame(&particles, &view, 0.0, 0.0)[0].x;
    view.zoom_by(1.0); // zoom = 2.0
    let far = project_frame(&particles, &view, 0.0, 0.0)[0].x;
    assert!((far - near * 2.0).abs() < 1e-9);
  }
}
