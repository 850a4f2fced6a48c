//! Network decomposition and outlier detection module

pub mod detection;
pub mod metrics;

pub use detection::{audit_airline, audit_airlines, connected_components, DisjointSets};
