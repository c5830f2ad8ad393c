// src/ui/viewer3d.rs
//
// Modal 3D viewer. Owns the particle set (built once from the counts it
// was opened with), the view transform and the per-frame tick callback.
// The tick is registered on open and removed on close so nothing keeps
// spinning after the window is gone.

use crate::model::particles::Particle3D;
use crate::rendering::{layout, painter, scene};
use crate::state::ViewTransform;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::Box as GtkBox;
use gtk4::{
  Align, ApplicationWindow, Button, DrawingArea, EventControllerScroll,
  EventControllerScrollFlags, GestureDrag, Label, Orientation, TickCallbackId, Window,
};
use std::cell::RefCell;
use std::rc::Rc;

pub fn open(parent: &ApplicationWindow, protons: u32, neutrons: u32, electrons: u32) {
  let window = Window::builder()
    .transient_for(parent)
    .modal(true)
    .title("Advanced 3D Model")
    .default_width(1000)
    .default_height(720)
    .build();

  let root = GtkBox::new(Orientation::Vertical, 8);
  root.set_margin_top(10);
  root.set_margin_bottom(10);
  root.set_margin_start(10);
  root.set_margin_end(10);

  let counts = Label::new(Some(&format!(
    "Protons: {}  -  Neutrons: {}  -  Electrons: {}",
    protons, neutrons, electrons
  )));
  counts.add_css_class("heading");
  let hint = Label::new(Some("Drag to rotate - scroll to zoom"));
  hint.add_css_class("dim-label");

  let area = DrawingArea::new();
  area.set_vexpand(true);
  area.set_hexpand(true);

  let controls = GtkBox::new(Orientation::Horizontal, 8);
  controls.set_halign(Align::Center);
  let zoom_in = Button::with_label("+");
  let zoom_out = Button::with_label("-");
  let reset_view = Button::with_label("Reset view");
  let close = Button::with_label("Close");
  controls.append(&zoom_in);
  controls.append(&zoom_out);
  controls.append(&reset_view);
  controls.append(&close);

  root.append(&counts);
  root.append(&hint);
  root.append(&area);
  root.append(&controls);
  window.set_child(Some(&root));

  // Positions are generated once per open; counts cannot change while the
  // modal viewer is up.
  let particles: Rc<Vec<Particle3D>> = Rc::new(layout::assemble(protons, neutrons, electrons));
  let view = Rc::new(RefCell::new(ViewTransform::new()));

  let p = particles.clone();
  let v = view.clone();
  area.set_draw_func(move |_, cr, w, h| {
    let w = w as f64;
    let h = h as f64;
    let view = v.borrow();
    let frame = scene::project_frame(&p, &view, w / 2.0, h / 2.0);
    painter::draw_projected_frame(cr, w, h, &frame, view.zoom);
  });

  // Animation tick: advance the auto-rotation phase and repaint.
  let tick_id: Rc<RefCell<Option<TickCallbackId>>> = Rc::new(RefCell::new(None));
  let v = view.clone();
  let id = area.add_tick_callback(move |area, _clock| {
    v.borrow_mut().advance();
    area.queue_draw();
    glib::ControlFlow::Continue
  });
  tick_id.borrow_mut().replace(id);

  // Drag to rotate: the gesture reports offsets from the press point,
  // so keep the previous offset to turn them into per-move deltas.
  let drag = GestureDrag::new();
  let last = Rc::new(RefCell::new((0.0_f64, 0.0_f64)));
  let l = last.clone();
  drag.connect_drag_begin(move |_, _, _| {
    *l.borrow_mut() = (0.0, 0.0);
  });
  let v = view.clone();
  let a = area.clone();
  drag.connect_drag_update(move |_, offset_x, offset_y| {
    let mut prev = last.borrow_mut();
    v.borrow_mut().drag(offset_x - prev.0, offset_y - prev.1);
    *prev = (offset_x, offset_y);
    a.queue_draw();
  });
  area.add_controller(drag);

  // Scroll to zoom
  let scroll = EventControllerScroll::new(EventControllerScrollFlags::VERTICAL);
  let v = view.clone();
  let a = area.clone();
  scroll.connect_scroll(move |_, _, dy| {
    v.borrow_mut().wheel(dy);
    a.queue_draw();
    glib::Propagation::Stop
  });
  area.add_controller(scroll);

  let v = view.clone();
  let a = area.clone();
  zoom_in.connect_clicked(move |_| {
    v.borrow_mut().zoom_by(0.1);
    a.queue_draw();
  });
  let v = view.clone();
  let a = area.clone();
  zoom_out.connect_clicked(move |_| {
    v.borrow_mut().zoom_by(-0.1);
    a.queue_draw();
  });
  let v = view.clone();
  let a = area.clone();
  reset_view.connect_clicked(move |_| {
    v.borrow_mut().reset();
    a.queue_draw();
  });

  let w = window.clone();
  close.connect_clicked(move |_| {
    w.close();
  });

  // Unregister the tick so the per-frame work dies with the window.
  window.connect_close_request(move |_| {
    if let Some(id) = tick_id.borrow_mut().take() {
      id.remove();
    }
    glib::Propagation::Proceed
  });

  window.present();
}
