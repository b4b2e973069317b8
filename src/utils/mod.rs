// src/utils/mod.rs
mod io;

pub use io::*;
