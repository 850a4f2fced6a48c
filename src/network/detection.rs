//! Network decomposition and outlier detection

use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap};

use crate::config::AuditConfig;
use crate::data::CoordIndex;
use crate::geo;
use crate::graph::RouteGraph;
use crate::network::metrics;
use crate::report::{DistanceStats, Report};

/// Union-Find data structure for connected component analysis
pub struct DisjointSets {
    /// Parent pointers (parent[i] = parent of node i)
    parent: Vec<u32>,

    /// Rank/size of each set (for union by rank)
    rank: Vec<u32>,
}

impl DisjointSets {
    /// Create a new DisjointSets data structure
    pub fn new(size: usize) -> Self {
        let mut parent = Vec::with_capacity(size);
        let mut rank = Vec::with_capacity(size);

        // Initialize each node as its own set
        for i in 0..size {
            parent.push(i as u32);
            rank.push(1);
        }

        Self { parent, rank }
    }

    /// Find the root of the set containing x with path compression
    pub fn find(&mut self, x: u32) -> u32 {
        let px = self.parent[x as usize];
        if px != x {
            // Path compression: set parent to root
            self.parent[x as usize] = self.find(px);
        }
        self.parent[x as usize]
    }

    /// Union the sets containing x and y
    pub fn union(&mut self, x: u32, y: u32) {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return; // Already in the same set
        }

        // Union by rank: attach smaller tree under root of larger tree
        let rank_x = self.rank[root_x as usize];
        let rank_y = self.rank[root_y as usize];

        if rank_x > rank_y {
            self.parent[root_y as usize] = root_x;
            self.rank[root_x as usize] += self.rank[root_y as usize];
        } else {
            self.parent[root_x as usize] = root_y;
            self.rank[root_y as usize] += self.rank[root_x as usize];
        }
    }
}

/// Decompose a route graph into connected components.
///
/// Components are ordered by their first-seen node and members keep
/// node insertion order, so the downstream center tie-break is stable.
pub fn connected_components(graph: &RouteGraph) -> Vec<Vec<u32>> {
    let node_count = graph.node_count();
    let mut sets = DisjointSets::new(node_count);

    for node in 0..node_count as u32 {
        for &(next, _) in graph.neighbors(node) {
            sets.union(node, next);
        }
    }

    let mut root_to_component: HashMap<u32, usize> = HashMap::new();
    let mut components: Vec<Vec<u32>> = Vec::new();

    for node in 0..node_count as u32 {
        let root = sets.find(node);
        let idx = *root_to_component.entry(root).or_insert_with(|| {
            components.push(Vec::new());
            components.len() - 1
        });
        components[idx].push(node);
    }

    components
}

/// Audit every airline network, in airline-code order.
///
/// Airlines are independent over read-only inputs, so detection runs
/// in parallel across them; reports are collected back in airline
/// order so the output matches a sequential run.
pub fn audit_airlines(
    graphs: &BTreeMap<String, RouteGraph>,
    coords: &CoordIndex,
    airline_names: &HashMap<String, String>,
    config: &AuditConfig,
) -> Vec<Report> {
    graphs
        .par_iter()
        .flat_map(|(code, graph)| audit_airline(code, graph, coords, airline_names, config))
        .collect()
}

/// Audit one airline's route network for outlier stations.
///
/// Each connected sub-network is checked independently: its center is
/// located by hop-count eccentricity, then every station's great-circle
/// distance from that center is compared against the sub-network
/// average.
pub fn audit_airline(
    airline_code: &str,
    graph: &RouteGraph,
    coords: &CoordIndex,
    airline_names: &HashMap<String, String>,
    config: &AuditConfig,
) -> Vec<Report> {
    let mut reports = Vec::new();
    if graph.is_empty() {
        return reports;
    }

    let airline_name = airline_names
        .get(airline_code)
        .cloned()
        .unwrap_or_default();

    for (comp_idx, members) in connected_components(graph).into_iter().enumerate() {
        let subnetwork_id = comp_idx + 1;
        let centers = metrics::component_centers(graph, &members);
        let stats = metrics::component_stats(graph, &members, &centers);

        log::debug!(
            "[{}] sub-network {}: size={}, order={}, density={}",
            airline_code,
            subnetwork_id,
            stats.size,
            stats.order,
            stats.density
        );

        // Resolve the geography of every station. A single station
        // missing from the coordinate index invalidates the distance
        // statistics of the whole sub-network.
        let mut sum_km = 0.0;
        let mut max_km = 0.0;
        let mut max_station = stats.center.clone();
        let mut unknown = None;

        for &node in &members {
            match geo::distance_km(&stats.center, graph.code(node), coords) {
                Ok(km) => {
                    sum_km += km;
                    if km > max_km {
                        max_km = km;
                        max_station = graph.code(node).to_string();
                    }
                }
                Err(_) => {
                    unknown = Some(graph.code(node).to_string());
                    break;
                }
            }
        }

        if let Some(station) = unknown {
            reports.push(Report::UnknownStation {
                airline_code: airline_code.to_string(),
                airline_name: airline_name.clone(),
                center: stats.center.clone(),
                station,
            });
            continue;
        }

        let avg_km = sum_km / stats.order as f64;
        // A single-node sub-network has average distance 0 and cannot
        // be a distance outlier.
        let ratio = if avg_km > 0.0 {
            Some(max_km / avg_km)
        } else {
            None
        };

        let distances = DistanceStats {
            avg_dist_km: avg_km,
            max_dist_km: max_km,
            max_station,
            ratio,
        };

        let is_outlier = ratio.is_some_and(|r| r >= config.dist_ratio);
        if is_outlier {
            reports.push(Report::DistanceOutlier {
                airline_code: airline_code.to_string(),
                airline_name: airline_name.clone(),
                subnetwork_id,
                stats,
                distances,
            });
        } else if config.verbose {
            reports.push(Report::NetworkStats {
                airline_code: airline_code.to_string(),
                airline_name: airline_name.clone(),
                subnetwork_id,
                stats,
                distances,
            });
        }
    }

    reports
}
