// src/ui/login.rs

use super::{navigate, Ctx, View};
use crate::state::{AppState, Student};
use gtk4::prelude::*;
use gtk4::Box as GtkBox;
use gtk4::{Align, DropDown, Entry, Frame, Label, ListBox, Orientation, ScrolledWindow};
use std::rc::Rc;

const TEAMS: [&str; 4] = ["Team Hydrogen", "Team Helium", "Team Carbon", "Team Oxygen"];

pub fn build(ctx: &Rc<Ctx>) -> gtk4::Widget {
  let root = GtkBox::new(Orientation::Horizontal, 32);
  root.set_margin_top(48);
  root.set_margin_bottom(48);
  root.set_margin_start(48);
  root.set_margin_end(48);
  root.set_halign(Align::Center);

  // --- Sign-in form ---
  let form = GtkBox::new(Orientation::Vertical, 12);
  form.set_valign(Align::Center);

  let title = Label::new(Some("AtomLab"));
  title.add_css_class("title-1");
  let subtitle = Label::new(Some("Welcome, young scientist! Sign in to start building."));
  subtitle.add_css_class("dim-label");

  let id_entry = Entry::builder().placeholder_text("Student id...").build();
  let name_entry = Entry::builder().placeholder_text("What's your name?").build();

  let team_label = Label::new(Some("Pick your team"));
  team_label.set_halign(Align::Start);
  let team_dropdown = DropDown::from_strings(&TEAMS);

  let start = gtk4::Button::with_label("Start building");
  start.add_css_class("suggested-action");

  form.append(&title);
  form.append(&subtitle);
  form.append(&id_entry);
  form.append(&name_entry);
  form.append(&team_label);
  form.append(&team_dropdown);
  form.append(&start);

  let c = ctx.clone();
  start.connect_clicked(move |_| {
    let id = id_entry.text().trim().to_string();
    let name = name_entry.text().trim().to_string();
    if id.is_empty() {
      id_entry.grab_focus();
      return;
    }
    if name.is_empty() {
      name_entry.grab_focus();
      return;
    }
    let team = TEAMS[team_dropdown.selected() as usize].to_string();

    c.state.borrow_mut().student = Some(Student { id, name, team });
    navigate(&c, View::Builder);
  });

  // --- Leaderboard ---
  let board_frame = Frame::new(Some("Class leaderboard"));
  let board = leaderboard_list(&ctx.state.borrow());
  let scroll = ScrolledWindow::builder()
    .min_content_width(420)
    .min_content_height(400)
    .child(&board)
    .build();
  board_frame.set_child(Some(&scroll));

  root.append(&form);
  root.append(&board_frame);
  root.upcast()
}

fn leaderboard_list(state: &AppState) -> ListBox {
  let list = ListBox::new();
  list.set_selection_mode(gtk4::SelectionMode::None);

  if state.leaderboard.entries().is_empty() {
    let empty = Label::new(Some("No results yet - be the first on the board!"));
    empty.add_css_class("dim-label");
    empty.set_margin_top(12);
    empty.set_margin_bottom(12);
    list.append(&empty);
    return list;
  }

  for (rank, entry) in state.leaderboard.entries().iter().enumerate() {
    let row = GtkBox::new(Orientation::Horizontal, 10);
    row.set_margin_top(6);
    row.set_margin_bottom(6);
    row.set_margin_start(10);
    row.set_margin_end(10);

    let place = Label::new(Some(&format!("#{}", rank + 1)));
    place.add_css_class("dim-label");
    let who = Label::new(Some(&format!("{} ({})", entry.student_name, entry.team)));
    who.set_hexpand(true);
    who.set_halign(Align::Start);
    let what = Label::new(Some(&format!(
      "{} - {}% in {}s - {}",
      entry.element_name, entry.score, entry.time_taken, entry.date
    )));

    row.append(&place);
    row.append(&who);
    row.append(&what);
    list.append(&row);
  }

  list
}
