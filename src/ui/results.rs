// src/ui/results.rs

use super::{navigate, Ctx, View};
use crate::state::BuildResult;
use gtk4::prelude::*;
use gtk4::Box as GtkBox;
use gtk4::{Align, Button, Frame, Label, Orientation};
use log::warn;
use std::rc::Rc;

pub fn build(ctx: &Rc<Ctx>) -> gtk4::Widget {
  let result = match ctx.state.borrow().last_result.clone() {
    Some(result) => result,
    None => {
      warn!("Results view opened without a finished attempt");
      BuildResult {
        element_name: "Unknown".to_string(),
        protons: 0,
        neutrons: 0,
        electrons: 0,
        score: 0,
        time_taken: 0,
      }
    }
  };
  let is_perfect = result.score >= 95;

  let root = GtkBox::new(Orientation::Vertical, 16);
  root.set_halign(Align::Center);
  root.set_valign(Align::Center);

  let headline = Label::new(Some(if is_perfect {
    "Perfect build!"
  } else {
    "Nice experiment!"
  }));
  headline.add_css_class("title-1");
  root.append(&headline);

  let stats = GtkBox::new(Orientation::Horizontal, 16);
  stats.set_halign(Align::Center);
  stats.append(&stat_card("Accuracy", &format!("{}%", result.score)));
  stats.append(&stat_card("Lab time", &format!("{}s", result.time_taken)));
  root.append(&stats);

  let detail_frame = Frame::new(Some(&format!("Structure: {}", result.element_name)));
  let details = GtkBox::new(Orientation::Vertical, 6);
  details.set_margin_top(10);
  details.set_margin_bottom(10);
  details.set_margin_start(14);
  details.set_margin_end(14);
  for (caption, value) in [
    ("Protons", result.protons),
    ("Neutrons", result.neutrons),
    ("Electrons", result.electrons),
  ] {
    let row = GtkBox::new(Orientation::Horizontal, 24);
    let name = Label::new(Some(caption));
    name.set_hexpand(true);
    name.set_halign(Align::Start);
    let count = Label::new(Some(&value.to_string()));
    count.add_css_class("heading");
    row.append(&name);
    row.append(&count);
    details.append(&row);
  }
  detail_frame.set_child(Some(&details));
  root.append(&detail_frame);

  let restart = Button::with_label("Explore a new element");
  restart.add_css_class("suggested-action");
  let signout = Button::with_label("Back to start");

  let c = ctx.clone();
  restart.connect_clicked(move |_| {
    navigate(&c, View::Builder);
  });
  let c = ctx.clone();
  signout.connect_clicked(move |_| {
    {
      let mut st = c.state.borrow_mut();
      st.student = None;
      st.last_result = None;
    }
    navigate(&c, View::Login);
  });

  root.append(&restart);
  root.append(&signout);
  root.upcast()
}

fn stat_card(caption: &str, value: &str) -> Frame {
  let frame = Frame::new(None);
  let inner = GtkBox::new(Orientation::Vertical, 4);
  inner.set_margin_top(12);
  inner.set_margin_bottom(12);
  inner.set_margin_start(24);
  inner.set_margin_end(24);
  let top = Label::new(Some(caption));
  top.add_css_class("dim-label");
  let big = Label::new(Some(value));
  big.add_css_class("title-2");
  inner.append(&top);
  inner.append(&big);
  frame.set_child(Some(&inner));
  frame
}
