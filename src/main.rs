// src/main.rs

use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Stack, StackTransitionType};
use std::cell::RefCell;
use std::rc::Rc;

pub mod leaderboard;
pub mod model;
pub mod rendering;
pub mod services;
pub mod state;
pub mod storage;
pub mod ui;

use state::AppState;
use storage::Storage;
use ui::{Ctx, View};

fn main() {
  env_logger::init();

  let app = Application::builder()
    .application_id("com.example.atomlab")
    .build();

  app.connect_activate(build_ui);
  app.run();
}

fn build_ui(app: &Application) {
  let state = Rc::new(RefCell::new(AppState::new(Storage::open())));

  let window = ApplicationWindow::builder()
    .application(app)
    .title("AtomLab - Atom Builder")
    .default_width(1200)
    .default_height(800)
    .build();

  let stack = Stack::new();
  stack.set_transition_type(StackTransitionType::Crossfade);
  window.set_child(Some(&stack));

  let ctx = Rc::new(Ctx {
    window: window.clone(),
    stack,
    state,
  });
  ui::navigate(&ctx, View::Login);

  window.present();
}
