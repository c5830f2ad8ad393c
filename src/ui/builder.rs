// src/ui/builder.rs
//
// The main workbench: element sidebar, 2D atom canvas, particle controls,
// target HUD and the AI advisor panel.

use super::{navigate, tutorial, viewer3d, Ctx, View};
use crate::leaderboard::LeaderboardEntry;
use crate::model::elements;
use crate::model::particles::ParticleKind;
use crate::rendering::painter;
use crate::services::insight;
use crate::state::{AppState, BuildResult, BuildState};
use gtk4::prelude::*;
use gtk4::Box as GtkBox;
use gtk4::{gio, glib};
use gtk4::{
  Align, Button, DrawingArea, Entry, Frame, GestureClick, Label, LevelBar, ListBox, ListBoxRow,
  Orientation, ScrolledWindow,
};
use std::rc::Rc;

const TUTORIAL_SEEN_KEY: &str = "atom_tutorial_seen";

pub fn build(ctx: &Rc<Ctx>) -> gtk4::Widget {
  // Fresh counts on every entry, then pick up an interrupted session.
  {
    let mut st = ctx.state.borrow_mut();
    st.build = BuildState::new();
    st.restore_session();
  }

  let root = GtkBox::new(Orientation::Vertical, 0);

  // --- Header ---
  let header = GtkBox::new(Orientation::Horizontal, 12);
  header.set_margin_top(10);
  header.set_margin_bottom(10);
  header.set_margin_start(16);
  header.set_margin_end(16);

  let student_label = Label::new(None);
  student_label.add_css_class("heading");
  if let Some(student) = &ctx.state.borrow().student {
    student_label.set_text(&format!("{} - {}", student.name, student.team));
  }
  student_label.set_hexpand(true);
  student_label.set_halign(Align::Start);

  let accuracy_caption = Label::new(Some("Accuracy"));
  accuracy_caption.add_css_class("dim-label");
  let accuracy_bar = LevelBar::for_interval(0.0, 1.0);
  accuracy_bar.set_size_request(140, -1);
  accuracy_bar.set_valign(Align::Center);

  let finish = Button::with_label("Done!");
  finish.add_css_class("suggested-action");
  let signout = Button::with_label("Sign out");

  header.append(&student_label);
  header.append(&accuracy_caption);
  header.append(&accuracy_bar);
  header.append(&finish);
  header.append(&signout);
  root.append(&header);

  // --- Main area ---
  let main_hbox = GtkBox::new(Orientation::Horizontal, 0);
  main_hbox.set_vexpand(true);
  root.append(&main_hbox);

  // Sidebar: search + element list
  let sidebar = GtkBox::new(Orientation::Vertical, 8);
  sidebar.set_margin_top(8);
  sidebar.set_margin_start(8);
  sidebar.set_margin_end(8);
  let search_entry = Entry::builder().placeholder_text("Search elements...").build();
  let element_list = ListBox::new();
  populate_elements(&element_list, "");
  let list_scroll = ScrolledWindow::builder()
    .min_content_width(260)
    .vexpand(true)
    .child(&element_list)
    .build();
  sidebar.append(&search_entry);
  sidebar.append(&list_scroll);
  main_hbox.append(&sidebar);

  // Center: canvas + particle controls
  let center = GtkBox::new(Orientation::Vertical, 8);
  center.set_hexpand(true);

  let drawing_area = DrawingArea::new();
  drawing_area.set_vexpand(true);
  drawing_area.set_hexpand(true);

  let controls = GtkBox::new(Orientation::Horizontal, 8);
  controls.set_halign(Align::Center);
  controls.set_margin_bottom(12);
  let add_proton = Button::with_label("+P");
  let add_neutron = Button::with_label("+N");
  let add_electron = Button::with_label("+E");
  let clear_atom = Button::with_label("Clear atom");
  let view_3d = Button::with_label("View 3D");
  let ai_button = Button::with_label("AI analysis");
  controls.append(&add_proton);
  controls.append(&add_neutron);
  controls.append(&add_electron);
  controls.append(&clear_atom);
  controls.append(&view_3d);
  controls.append(&ai_button);

  let hint = Label::new(Some("Click a particle on the canvas to remove it"));
  hint.add_css_class("dim-label");
  hint.set_halign(Align::Center);

  center.append(&drawing_area);
  center.append(&hint);
  center.append(&controls);
  main_hbox.append(&center);

  // Right panel: target HUD, fun fact, AI advisor
  let panel = GtkBox::new(Orientation::Vertical, 12);
  panel.set_margin_top(8);
  panel.set_margin_start(8);
  panel.set_margin_end(8);
  panel.set_size_request(280, -1);

  let target_frame = Frame::new(Some("Target"));
  let target_box = GtkBox::new(Orientation::Vertical, 6);
  target_box.set_margin_top(8);
  target_box.set_margin_bottom(8);
  target_box.set_margin_start(10);
  target_box.set_margin_end(10);
  let target_title = Label::new(None);
  target_title.set_halign(Align::Start);
  target_title.add_css_class("heading");
  let proton_value = stat_row(&target_box, "Protons");
  let neutron_value = stat_row(&target_box, "Neutrons");
  let electron_value = stat_row(&target_box, "Electrons");
  target_box.prepend(&target_title);
  target_frame.set_child(Some(&target_box));

  let fact_frame = Frame::new(Some("Fun fact"));
  let fun_fact_label = blurb_label();
  fact_frame.set_child(Some(&fun_fact_label));

  let insight_frame = Frame::new(Some("Lab advisor"));
  let insight_label = blurb_label();
  insight_frame.set_child(Some(&insight_label));

  panel.append(&target_frame);
  panel.append(&fact_frame);
  panel.append(&insight_frame);
  main_hbox.append(&panel);

  // --- Wiring ---

  // One refresh path for everything count- or target-dependent.
  let refresh: Rc<dyn Fn()> = {
    let state = ctx.state.clone();
    let area = drawing_area.clone();
    let target_title = target_title.clone();
    let proton_value = proton_value.clone();
    let neutron_value = neutron_value.clone();
    let electron_value = electron_value.clone();
    let accuracy_bar = accuracy_bar.clone();
    Rc::new(move || {
      let st = state.borrow();
      let t = st.build.target();
      target_title.set_text(&format!("{} ({})  Z={}", t.name, t.symbol, t.z));
      proton_value.set_text(&format!("{} / {}", st.build.protons, t.z));
      neutron_value.set_text(&format!("{} / {}", st.build.neutrons, t.neutrons));
      electron_value.set_text(&format!("{} / {}", st.build.electrons, t.z));
      accuracy_bar.set_value(st.build.matches() as f64 / 3.0);
      area.queue_draw();
    })
  };

  // Canvas
  let state = ctx.state.clone();
  drawing_area.set_draw_func(move |_, cr, w, h| {
    let st = state.borrow();
    painter::draw_builder_canvas(
      cr,
      w as f64,
      h as f64,
      st.build.protons,
      st.build.neutrons,
      st.build.electrons,
    );
  });

  // Click a particle to remove it
  let click = GestureClick::new();
  let state = ctx.state.clone();
  let area = drawing_area.clone();
  let refresh_cb = refresh.clone();
  click.connect_pressed(move |_, _, x, y| {
    let w = area.width() as f64;
    let h = area.height() as f64;
    let hit = {
      let st = state.borrow();
      painter::pick_particle(w, h, x, y, st.build.protons, st.build.neutrons, st.build.electrons)
    };
    if let Some(kind) = hit {
      let mut st = state.borrow_mut();
      st.build.remove(kind);
      st.save_session();
      drop(st);
      refresh_cb();
    }
  });
  drawing_area.add_controller(click);

  // Add-particle buttons
  for (button, kind) in [
    (&add_proton, ParticleKind::Proton),
    (&add_neutron, ParticleKind::Neutron),
    (&add_electron, ParticleKind::Electron),
  ] {
    let state = ctx.state.clone();
    let refresh_cb = refresh.clone();
    button.connect_clicked(move |_| {
      {
        let mut st = state.borrow_mut();
        st.build.add(kind);
        st.save_session();
      }
      refresh_cb();
    });
  }

  let state = ctx.state.clone();
  let refresh_cb = refresh.clone();
  clear_atom.connect_clicked(move |_| {
    {
      let mut st = state.borrow_mut();
      st.build.reset_counts();
      st.save_session();
    }
    refresh_cb();
  });

  // Element search + selection
  let list = element_list.clone();
  search_entry.connect_changed(move |entry| {
    populate_elements(&list, entry.text().as_str());
  });

  let state = ctx.state.clone();
  let refresh_cb = refresh.clone();
  let fact_label = fun_fact_label.clone();
  let insight_lbl = insight_label.clone();
  element_list.connect_row_selected(move |_, row| {
    let Some(row) = row else { return };
    let Ok(z) = row.widget_name().parse::<u32>() else { return };
    let symbol = {
      let mut st = state.borrow_mut();
      if st.build.element_z == z {
        return;
      }
      st.build.element_z = z;
      st.save_session();
      st.build.target().symbol
    };
    insight_lbl.set_text("");
    fetch_fun_fact(&fact_label, symbol);
    refresh_cb();
  });

  // 3D viewer
  let c = ctx.clone();
  view_3d.connect_clicked(move |_| {
    let (p, n, e) = {
      let st = c.state.borrow();
      (st.build.protons, st.build.neutrons, st.build.electrons)
    };
    viewer3d::open(&c.window, p, n, e);
  });

  // AI stability analysis (fire-and-forget, never blocks the UI)
  let state = ctx.state.clone();
  let insight_lbl = insight_label.clone();
  ai_button.connect_clicked(move |btn| {
    let (p, n, name) = {
      let st = state.borrow();
      if st.build.protons == 0 && st.build.neutrons == 0 {
        return;
      }
      (st.build.protons, st.build.neutrons, st.build.target().name)
    };
    btn.set_sensitive(false);
    insight_lbl.set_text("Asking the lab advisor...");
    let label = insight_lbl.clone();
    let btn = btn.clone();
    glib::spawn_future_local(async move {
      let text = gio::spawn_blocking(move || insight::stability_analysis(p, n, name))
        .await
        .unwrap_or_else(|_| insight::INSIGHT_FALLBACK.to_string());
      label.set_text(&text);
      btn.set_sensitive(true);
    });
  });

  // Finish -> score, leaderboard, results
  let c = ctx.clone();
  finish.connect_clicked(move |_| {
    {
      let mut st = c.state.borrow_mut();
      let target = st.build.target();
      let result = BuildResult {
        element_name: target.name.to_string(),
        protons: st.build.protons,
        neutrons: st.build.neutrons,
        electrons: st.build.electrons,
        score: st.build.score(),
        time_taken: st.build.elapsed_secs(),
      };

      if let Some(student) = st.student.clone() {
        let date = glib::DateTime::now_local()
          .ok()
          .and_then(|d| d.format("%d/%m/%Y").ok())
          .map(|s| s.to_string())
          .unwrap_or_default();
        st.leaderboard.submit(LeaderboardEntry {
          student_name: student.name,
          team: student.team,
          element_name: result.element_name.clone(),
          protons: result.protons,
          neutrons: result.neutrons,
          electrons: result.electrons,
          score: result.score,
          time_taken: result.time_taken,
          date,
        });
        let AppState {
          leaderboard,
          storage,
          ..
        } = &mut *st;
        leaderboard.save(storage);
      }

      st.clear_session();
      st.last_result = Some(result);
    }
    navigate(&c, View::Results);
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

  // Initial paint + fun fact for the starting element
  refresh();
  let symbol = ctx.state.borrow().build.target().symbol;
  fetch_fun_fact(&fun_fact_label, symbol);

  // First-run tutorial
  let needs_tutorial = ctx.state.borrow().storage.get(TUTORIAL_SEEN_KEY).is_none();
  if needs_tutorial {
    tutorial::show(&ctx.window, ctx.state.clone(), TUTORIAL_SEEN_KEY);
  }

  root.upcast()
}

fn stat_row(parent: &GtkBox, caption: &str) -> Label {
  let row = GtkBox::new(Orientation::Horizontal, 8);
  let name = Label::new(Some(caption));
  name.set_hexpand(true);
  name.set_halign(Align::Start);
  let value = Label::new(Some("0 / 0"));
  row.append(&name);
  row.append(&value);
  parent.append(&row);
  value
}

fn blurb_label() -> Label {
  let label = Label::new(None);
  label.set_wrap(true);
  label.set_max_width_chars(32);
  label.set_halign(Align::Start);
  label.set_margin_top(8);
  label.set_margin_bottom(8);
  label.set_margin_start(10);
  label.set_margin_end(10);
  label
}

fn populate_elements(list: &ListBox, term: &str) {
  while let Some(row) = list.row_at_index(0) {
    list.remove(&row);
  }
  for el in elements::search(term) {
    let row = ListBoxRow::new();
    row.set_widget_name(&el.z.to_string());
    let label = Label::new(Some(&format!("{}  {}  (Z={})", el.symbol, el.name, el.z)));
    label.set_halign(Align::Start);
    label.set_margin_top(4);
    label.set_margin_bottom(4);
    label.set_margin_start(8);
    row.set_child(Some(&label));
    list.append(&row);
  }
}

fn fetch_fun_fact(label: &Label, symbol: &'static str) {
  label.set_text("Fetching a fun fact...");
  let label = label.clone();
  glib::spawn_future_local(async move {
    let text = gio::spawn_blocking(move || insight::fun_fact(symbol))
      .await
      .unwrap_or_else(|_| insight::FUN_FACT_FALLBACK.to_string());
    label.set_text(&text);
  });
}
