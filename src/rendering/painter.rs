// src/rendering/painter.rs
//
// Cairo painters. The builder canvas draws the flat schematic atom in a
// 500x500 viewbox scaled to the widget; the viewer frame paints an already
// projected, back-to-front particle list.

use super::layout::{self, CANVAS_CENTER, CANVAS_SIZE, SHELL_RADII_2D, SHELL_RADII_3D};
use crate::model::particles::{ParticleKind, ProjectedParticle};
use cairo::{Context, RadialGradient};
use std::f64::consts::PI;

const PROTON_RGB: (f64, f64, f64) = (0.957, 0.247, 0.369);
const PROTON_RING: (f64, f64, f64) = (0.984, 0.443, 0.522);
const NEUTRON_RGB: (f64, f64, f64) = (0.580, 0.639, 0.722);
const NEUTRON_RING: (f64, f64, f64) = (0.796, 0.835, 0.882);
const ELECTRON_RGB: (f64, f64, f64) = (0.063, 0.725, 0.506);
const ELECTRON_RING: (f64, f64, f64) = (0.204, 0.827, 0.600);

const FLAT_NUCLEON_RADIUS: f64 = 6.5;
const FLAT_ELECTRON_RADIUS: f64 = 5.5;

fn kind_rgb(kind: ParticleKind) -> (f64, f64, f64) {
  match kind {
    ParticleKind::Proton => PROTON_RGB,
    ParticleKind::Neutron => NEUTRON_RGB,
    ParticleKind::Electron => ELECTRON_RGB,
  }
}

/// Widget coords <-> viewbox coords for the builder canvas: uniform scale
/// that fits the 500x500 box, centered.
pub fn canvas_transform(width: f64, height: f64) -> (f64, f64, f64) {
  let scale = (width.min(height) / CANVAS_SIZE).max(1e-6);
  let offset_x = (width - CANVAS_SIZE * scale) / 2.0;
  let offset_y = (height - CANVAS_SIZE * scale) / 2.0;
  (scale, offset_x, offset_y)
}

// ============================================================================
// 2D BUILDER CANVAS
// ============================================================================

pub fn draw_builder_canvas(
  cr: &Context,
  width: f64,
  height: f64,
  protons: u32,
  neutrons: u32,
  electrons: u32,
) {
  // Background
  cr.set_source_rgb(0.06, 0.09, 0.16);
  cr.paint().expect("Failed to paint canvas background");

  let (scale, offset_x, offset_y) = canvas_transform(width, height);
  cr.save().expect("Failed to save Cairo state for canvas");
  cr.translate(offset_x, offset_y);
  cr.scale(scale, scale);

  // Nucleus glow
  let glow = RadialGradient::new(
    CANVAS_CENTER,
    CANVAS_CENTER,
    0.0,
    CANVAS_CENTER,
    CANVAS_CENTER,
    120.0,
  );
  glow.add_color_stop_rgba(0.0, 0.506, 0.549, 0.973, 0.4);
  glow.add_color_stop_rgba(1.0, 0.506, 0.549, 0.973, 0.0);
  cr.set_source(&glow).expect("Failed to set nucleus glow source");
  cr.arc(CANVAS_CENTER, CANVAS_CENTER, 120.0, 0.0, 2.0 * PI);
  cr.fill().expect("Failed to fill nucleus glow");

  // Shell rings, dashed
  cr.set_source_rgba(1.0, 1.0, 1.0, 0.08);
  cr.set_line_width(2.0);
  cr.set_dash(&[8.0, 8.0], 0.0);
  for r in SHELL_RADII_2D {
    cr.arc(CANVAS_CENTER, CANVAS_CENTER, r, 0.0, 2.0 * PI);
    cr.stroke().expect("Failed to stroke shell ring");
  }
  cr.set_dash(&[], 0.0);

  // Nucleons on the Fermat spiral
  cr.set_font_size(6.0);
  for p in layout::layout_nucleus_flat(protons, neutrons) {
    let (fill, ring, glyph) = match p.kind {
      ParticleKind::Proton => (PROTON_RGB, PROTON_RING, "+"),
      _ => (NEUTRON_RGB, NEUTRON_RING, "n"),
    };

    cr.set_source_rgb(fill.0, fill.1, fill.2);
    cr.arc(p.x, p.y, FLAT_NUCLEON_RADIUS, 0.0, 2.0 * PI);
    cr.fill_preserve().expect("Failed to fill nucleon");
    cr.set_source_rgb(ring.0, ring.1, ring.2);
    cr.set_line_width(1.0);
    cr.stroke().expect("Failed to stroke nucleon outline");

    cr.set_source_rgb(1.0, 1.0, 1.0);
    if let Ok(ext) = cr.text_extents(glyph) {
      cr.move_to(p.x - ext.width() / 2.0 - ext.x_bearing(), p.y + 2.0);
      cr.show_text(glyph).expect("Failed to draw nucleon glyph");
    }
  }

  // Electrons on their rings
  for e in layout::layout_shells_flat(electrons) {
    cr.set_source_rgb(ELECTRON_RGB.0, ELECTRON_RGB.1, ELECTRON_RGB.2);
    cr.arc(e.x, e.y, FLAT_ELECTRON_RADIUS, 0.0, 2.0 * PI);
    cr.fill_preserve().expect("Failed to fill electron");
    cr.set_source_rgb(ELECTRON_RING.0, ELECTRON_RING.1, ELECTRON_RING.2);
    cr.set_line_width(2.0);
    cr.stroke().expect("Failed to stroke electron outline");
  }

  cr.restore().expect("Failed to restore Cairo state after canvas");
}

/// Hit-test a widget-space click against the flat particles. Nearest
/// particle within its visual radius (plus a small grab margin) wins;
/// electrons are checked first since they sit on top visually.
pub fn pick_particle(
  width: f64,
  height: f64,
  click_x: f64,
  click_y: f64,
  protons: u32,
  neutrons: u32,
  electrons: u32,
) -> Option<ParticleKind> {
  let (scale, offset_x, offset_y) = canvas_transform(width, height);
  let x = (click_x - offset_x) / scale;
  let y = (click_y - offset_y) / scale;

  let mut best: Option<(f64, ParticleKind)> = None;
  let mut consider = |px: f64, py: f64, radius: f64, kind: ParticleKind| {
    let d = ((px - x).powi(2) + (py - y).powi(2)).sqrt();
    if d <= radius + 3.0 && best.map_or(true, |(bd, _)| d < bd) {
      best = Some((d, kind));
    }
  };

  for e in layout::layout_shells_flat(electrons) {
    consider(e.x, e.y, FLAT_ELECTRON_RADIUS, ParticleKind::Electron);
  }
  for p in layout::layout_nucleus_flat(protons, neutrons) {
    consider(p.x, p.y, FLAT_NUCLEON_RADIUS, p.kind);
  }

  best.map(|(_, kind)| kind)
}

// ============================================================================
// 3D VIEWER FRAME
// ============================================================================

pub fn draw_projected_frame(
  cr: &Context,
  width: f64,
  height: f64,
  frame: &[ProjectedParticle],
  zoom: f64,
) {
  cr.set_source_rgb(0.008, 0.024, 0.09);
  cr.paint().expect("Failed to paint viewer background");

  let center_x = width / 2.0;
  let center_y = height / 2.0;

  // Orbit guides behind everything
  cr.set_source_rgba(0.388, 0.4, 0.945, 0.15);
  cr.set_line_width(1.0);
  for r in SHELL_RADII_3D {
    cr.arc(center_x, center_y, r * zoom, 0.0, 2.0 * PI);
    cr.stroke().expect("Failed to stroke orbit guide");
  }

  // Particles arrive back-to-front
  for p in frame {
    let (r, g, b) = kind_rgb(p.kind);

    // Soft halo for near particles (stands in for canvas shadowBlur)
    if p.opacity > 0.6 {
      let halo = RadialGradient::new(p.x, p.y, p.size * 0.5, p.x, p.y, p.size * 2.2);
      halo.add_color_stop_rgba(0.0, r, g, b, p.opacity * 0.35);
      halo.add_color_stop_rgba(1.0, r, g, b, 0.0);
      cr.set_source(&halo).expect("Failed to set halo source");
      cr.arc(p.x, p.y, p.size * 2.2, 0.0, 2.0 * PI);
      cr.fill().expect("Failed to fill particle halo");
    }

    cr.set_source_rgba(r, g, b, p.opacity);
    cr.arc(p.x, p.y, p.size.max(0.5), 0.0, 2.0 * PI);
    cr.fill().expect("Failed to fill particle");
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::rendering::scene;
  use crate::state::ViewTransform;
  use cairo::{Format, ImageSurface};

  fn test_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface =
      ImageSurface::create(Format::ARgb32, width, height).expect("Failed to create test surface");
    let cr = Context::new(&surface).expect("Failed to create test context");
    (surface, cr)
  }

  #[test]
  fn test_builder_canvas_paints_offscreen() {
    // Carbon-12 through the full pipeline onto a real surface; every
    // painter expect() path has to succeed without a display.
    let (mut surface, cr) = test_context(500, 500);
    draw_builder_canvas(&cr, 500.0, 500.0, 6, 6, 6);
    drop(cr);

    let data = surface.data().expect("Failed to read surface data");
    assert!(data.iter().any(|&byte| byte != 0));
  }

  #[test]
  fn test_projected_frame_paints_offscreen() {
    let (mut surface, cr) = test_context(800, 600);
    let particles = crate::rendering::layout::assemble(6, 6, 6);
    let frame = scene::project_frame(&particles, &ViewTransform::new(), 400.0, 300.0);
    draw_projected_frame(&cr, 800.0, 600.0, &frame, 1.0);
    drop(cr);

    let data = surface.data().expect("Failed to read surface data");
    assert!(data.iter().any(|&byte| byte != 0));
  }

  #[test]
  fn test_canvas_transform_fits_square() {
    let (scale, ox, oy) = canvas_transform(500.0, 500.0);
    assert!((scale - 1.0).abs() < 1e-9);
    assert_eq!((ox, oy), (0.0, 0.0));
  }

  #[test]
  fn test_canvas_transform_centers_wide_widget() {
    let (scale, ox, oy) = canvas_transform(1000.0, 500.0);
    assert!((scale - 1.0).abs() < 1e-9);
    assert!((ox - 250.0).abs() < 1e-9);
    assert_eq!(oy, 0.0);
  }

  #[test]
  fn test_pick_center_nucleon() {
    // One proton sits exactly at the canvas center.
    let hit = pick_particle(500.0, 500.0, 250.0, 250.0, 1, 0, 0);
    assert_eq!(hit, Some(ParticleKind::Proton));
  }

  #[test]
  fn test_pick_misses_empty_space() {
    let hit = pick_particle(500.0, 500.0, 30.0, 30.0, 1, 1, 2);
    assert_eq!(hit, None);
  }

  #[test]
  fn test_pick_electron_on_first_shell() {
    // Two electrons: angles 0 and pi on radius 60 -> (310, 250) and (190, 250).
    let hit = pick_particle(500.0, 500.0, 310.0, 250.0, 0, 0, 2);
    assert_eq!(hit, Some(ParticleKind::Electron));
  }
}
