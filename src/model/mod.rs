// src/model/mod.rs

pub mod elements;
pub mod particles;
