//! Undirected weighted route graph representation

use std::collections::HashMap;

/// Undirected graph of one airline's flight legs.
///
/// Nodes are station codes, registered in first-seen order, and edges
/// carry the leg frequency as weight. Node indices follow insertion
/// order; the detector relies on that order being stable for its
/// center tie-break.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    /// Station codes in insertion order
    codes: Vec<String>,

    /// Mapping from station codes to node indices
    code_to_index: HashMap<String, u32>,

    /// Adjacency lists: (neighbor index, edge weight) per node
    adjacency: Vec<Vec<(u32, u32)>>,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the node for the given station code
    pub fn get_or_create_node(&mut self, code: &str) -> u32 {
        if let Some(&idx) = self.code_to_index.get(code) {
            return idx;
        }

        let idx = self.codes.len() as u32;
        self.code_to_index.insert(code.to_string(), idx);
        self.codes.push(code.to_string());
        self.adjacency.push(Vec::new());

        idx
    }

    /// Add or update the undirected edge between two stations.
    ///
    /// A repeated leg for the same station pair overwrites the weight
    /// rather than accumulating it.
    pub fn upsert_edge(&mut self, origin: &str, destination: &str, weight: u32) {
        let a = self.get_or_create_node(origin);
        let b = self.get_or_create_node(destination);

        Self::set_half_edge(&mut self.adjacency[a as usize], b, weight);
        Self::set_half_edge(&mut self.adjacency[b as usize], a, weight);
    }

    fn set_half_edge(list: &mut Vec<(u32, u32)>, target: u32, weight: u32) {
        match list.iter_mut().find(|(t, _)| *t == target) {
            Some(entry) => entry.1 = weight,
            None => list.push((target, weight)),
        }
    }

    /// Number of nodes (graph order)
    pub fn node_count(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Number of edges (graph size)
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|list| list.len()).sum::<usize>() / 2
    }

    /// Neighbors of a node with their edge weights
    pub fn neighbors(&self, node: u32) -> &[(u32, u32)] {
        &self.adjacency[node as usize]
    }

    pub fn degree(&self, node: u32) -> usize {
        self.adjacency[node as usize].len()
    }

    /// Station code of a node
    pub fn code(&self, node: u32) -> &str {
        &self.codes[node as usize]
    }

    pub fn node_index(&self, code: &str) -> Option<u32> {
        self.code_to_index.get(code).copied()
    }

    /// Check whether an edge connects the two stations
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edge_weight(a, b).is_some()
    }

    /// Weight of the edge between two stations, if any
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<u32> {
        let a = self.node_index(a)?;
        let b = self.node_index(b)?;
        self.adjacency[a as usize]
            .iter()
            .find(|(t, _)| *t == b)
            .map(|&(_, w)| w)
    }
}
