//! Core library functions for the airline route network auditor

pub mod config;
pub mod data;
pub mod error;
pub mod geo;
pub mod graph;
pub mod network;
pub mod report;

pub use anyhow::{Result, anyhow};
