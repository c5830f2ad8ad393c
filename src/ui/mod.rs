// src/ui/mod.rs

pub mod builder;
pub mod login;
pub mod results;
pub mod tutorial;
pub mod viewer3d;

use crate::state::AppState;
use gtk4::{ApplicationWindow, Stack};
use std::cell::RefCell;
use std::rc::Rc;

/// Everything a view needs to build itself and navigate onwards.
pub struct Ctx {
  pub window: ApplicationWindow,
  pub stack: Stack,
  pub state: Rc<RefCell<AppState>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
  Login,
  Builder,
  Results,
}

/// Views are rebuilt on every navigation so they always reflect current
/// state (fresh leaderboard, restored session, reset counts).
pub fn navigate(ctx: &Rc<Ctx>, view: View) {
  let (name, widget) = match view {
    View::Login => ("login", login::build(ctx)),
    View::Builder => ("builder", builder::build(ctx)),
    View::Results => ("results", results::build(ctx)),
  };

  if let Some(old) = ctx.stack.child_by_name(name) {
    ctx.stack.remove(&old);
  }
  ctx.stack.add_named(&widget, Some(name));
  ctx.stack.set_visible_child_name(name);
}
