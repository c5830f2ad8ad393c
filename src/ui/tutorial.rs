// src/ui/tutorial.rs

use crate::state::AppState;
use gtk4::prelude::*;
use gtk4::Box as GtkBox;
use gtk4::{Align, ApplicationWindow, Button, Label, Orientation, Window};
use std::cell::RefCell;
use std::rc::Rc;

const STEPS: [&str; 4] = [
  "1. Pick a target element from the list on the left.",
  "2. Use +P, +N and +E to add particles to your atom.",
  "3. Press AI analysis to hear what the lab advisor thinks of your build.",
  "4. Press View 3D to explore your atom in three dimensions.",
];

/// First-run walkthrough. Dismissing it writes the seen-flag so it only
/// ever shows once per installation.
pub fn show(parent: &ApplicationWindow, state: Rc<RefCell<AppState>>, seen_key: &'static str) {
  let window = Window::builder()
    .transient_for(parent)
    .modal(true)
    .title("How it works")
    .default_width(440)
    .build();

  let root = GtkBox::new(Orientation::Vertical, 12);
  root.set_margin_top(24);
  root.set_margin_bottom(24);
  root.set_margin_start(24);
  root.set_margin_end(24);

  let title = Label::new(Some("Welcome to the lab!"));
  title.add_css_class("title-2");
  root.append(&title);

  for step in STEPS {
    let label = Label::new(Some(step));
    label.set_wrap(true);
    label.set_halign(Align::Start);
    root.append(&label);
  }

  let ready = Button::with_label("Ready to experiment!");
  ready.add_css_class("suggested-action");
  root.append(&ready);

  let w = window.clone();
  ready.connect_clicked(move |_| {
    state.borrow_mut().storage.set(seen_key, "true");
    w.close();
  });

  window.set_child(Some(&root));
  window.present();
}
