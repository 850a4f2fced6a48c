//! Configuration management for the route network audit

/// Configuration for the outlier detector
pub struct AuditConfig {
    /// Max-to-average distance ratio at which a sub-network is flagged
    pub dist_ratio: f64,

    /// Emit per-component statistics reports and loop-edge notices
    pub verbose: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            dist_ratio: 7.0,
            verbose: false,
        }
    }
}

impl AuditConfig {
    /// Create a new configuration with custom values
    pub fn new(dist_ratio: f64, verbose: bool) -> Self {
        Self {
            dist_ratio,
            verbose,
        }
    }
}
