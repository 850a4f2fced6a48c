//! Typed report model for audit findings

use serde::Serialize;
use std::collections::BTreeMap;

/// Topology statistics for one sub-network (connected component)
#[derive(Debug, Clone, Serialize)]
pub struct TopologyStats {
    /// Number of nodes
    pub order: usize,

    /// Number of edges
    pub size: usize,

    /// Average degree: size (nb of edges) / order (nb of nodes)
    pub avg_degree: f64,

    /// Density: 2*size / (order*(order-1)), 0 for a single node
    pub density: f64,

    /// Degree of every station in the sub-network
    pub degree: BTreeMap<String, usize>,

    /// Degree centrality: degree / (order-1), 0 for a single node
    pub degree_centrality: BTreeMap<String, f64>,

    /// All stations of minimum eccentricity, in discovery order
    pub centers: Vec<String>,

    /// Reference center: first entry of `centers`
    pub center: String,
}

/// Great-circle distance statistics from the reference center
#[derive(Debug, Clone, Serialize)]
pub struct DistanceStats {
    /// Average center-to-station distance
    pub avg_dist_km: f64,

    /// Maximum center-to-station distance
    pub max_dist_km: f64,

    /// Station attaining the maximum distance
    pub max_station: String,

    /// Max over average distance; absent when the average is zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
}

/// One structured audit finding
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Report {
    /// A flight leg whose origin and destination are the same station.
    /// The leg is kept out of the route graph but may be legitimate
    /// (e.g. sightseeing flights out of a seaplane base).
    LoopEdge {
        airline_code: String,
        origin: String,
        destination: String,
        frequency: u32,
    },

    /// A station present in an airline's network but missing from the
    /// POR coordinate index
    UnknownStation {
        airline_code: String,
        airline_name: String,
        center: String,
        station: String,
    },

    /// A sub-network whose farthest station exceeds the configured
    /// multiple of the average center distance
    DistanceOutlier {
        airline_code: String,
        airline_name: String,
        subnetwork_id: usize,
        stats: TopologyStats,
        distances: DistanceStats,
    },

    /// Full per-component statistics, emitted in verbose mode for
    /// sub-networks below the outlier threshold
    NetworkStats {
        airline_code: String,
        airline_name: String,
        subnetwork_id: usize,
        stats: TopologyStats,
        distances: DistanceStats,
    },
}

impl Report {
    /// Whether the report is informational and only surfaced in
    /// verbose mode
    pub fn is_verbose_only(&self) -> bool {
        matches!(self, Report::LoopEdge { .. } | Report::NetworkStats { .. })
    }
}
