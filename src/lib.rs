//! A small terminal to-do list backed by a plain text file.

pub mod config;
pub mod store;
pub mod tui;
