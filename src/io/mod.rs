//! I/O utilities for confstash.
//!
//! Reading source files, writing restored files, and preparing the config
//! directory.

pub mod files;

pub use files::{absolute, ensure_dir, read_file_bytes, write_file_bytes};
