// src/services/mod.rs

pub mod insight;
