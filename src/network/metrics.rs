//! Sub-network statistics: eccentricity, center, degree, density

use itertools::Itertools;
use std::collections::{BTreeMap, HashMap, VecDeque};

use crate::graph::RouteGraph;
use crate::report::TopologyStats;

/// Breadth-first hop distances from `start` to every node reachable
/// from it. Edge weights are display data only; shortest paths are
/// measured in hops.
pub fn hop_distances(graph: &RouteGraph, start: u32) -> HashMap<u32, usize> {
    let mut dist = HashMap::new();
    dist.insert(start, 0);

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        let d = dist[&node];
        for &(next, _) in graph.neighbors(node) {
            if !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }

    dist
}

/// Nodes of minimum eccentricity within a component, preserving the
/// order of `members`. The first entry is the reference center; with
/// members in node insertion order that tie-break is stable across
/// runs.
pub fn component_centers(graph: &RouteGraph, members: &[u32]) -> Vec<u32> {
    let eccentricities: Vec<usize> = members
        .iter()
        .map(|&m| {
            hop_distances(graph, m)
                .values()
                .copied()
                .max()
                .unwrap_or(0)
        })
        .collect();

    let min_ecc = eccentricities.iter().copied().min().unwrap_or(0);

    eccentricities
        .iter()
        .positions(|&e| e == min_ecc)
        .map(|pos| members[pos])
        .collect()
}

/// Topology statistics for one component.
///
/// `centers` must be non-empty and come from `component_centers` on
/// the same member set.
pub fn component_stats(graph: &RouteGraph, members: &[u32], centers: &[u32]) -> TopologyStats {
    let order = members.len();

    // Components are closed under adjacency, so summing member degrees
    // counts each internal edge twice.
    let size = members.iter().map(|&m| graph.degree(m)).sum::<usize>() / 2;

    let avg_degree = size as f64 / order as f64;
    let density = if order > 1 {
        2.0 * size as f64 / (order as f64 * (order - 1) as f64)
    } else {
        0.0
    };

    let mut degree = BTreeMap::new();
    let mut degree_centrality = BTreeMap::new();
    for &m in members {
        let d = graph.degree(m);
        let centrality = if order > 1 {
            d as f64 / (order - 1) as f64
        } else {
            0.0
        };
        degree.insert(graph.code(m).to_string(), d);
        degree_centrality.insert(graph.code(m).to_string(), centrality);
    }

    TopologyStats {
        order,
        size,
        avg_degree,
        density,
        degree,
        degree_centrality,
        centers: centers.iter().map(|&c| graph.code(c).to_string()).collect(),
        center: graph.code(centers[0]).to_string(),
    }
}
