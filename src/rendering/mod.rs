// src/rendering/mod.rs

pub mod layout;
pub mod painter;
pub mod scene;
