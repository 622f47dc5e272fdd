//! Core library for the co-occurrence network analysis engine

pub mod community;
pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod layout;
pub mod metrics;
pub mod pairs;
pub mod pipeline;
pub mod tokenize;

pub use anyhow::{anyhow, Result};
