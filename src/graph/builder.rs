//! Route graph construction from flight-leg records

use std::collections::BTreeMap;

use crate::data::FlightLeg;
use crate::graph::RouteGraph;
use crate::report::Report;

/// Build one undirected route graph per airline code.
///
/// Legs whose origin and destination are the same station are kept out
/// of the graph (a loop edge would break degree centrality downstream)
/// and surfaced as structured loop-edge notices instead.
pub fn build(legs: &[FlightLeg]) -> (BTreeMap<String, RouteGraph>, Vec<Report>) {
    let mut graphs: BTreeMap<String, RouteGraph> = BTreeMap::new();
    let mut notices = Vec::new();

    for leg in legs {
        let graph = graphs.entry(leg.airline_code.clone()).or_default();

        if leg.origin == leg.destination {
            log::debug!(
                "Loop edge for {}: {} -> {} (freq {})",
                leg.airline_code,
                leg.origin,
                leg.destination,
                leg.frequency
            );
            notices.push(Report::LoopEdge {
                airline_code: leg.airline_code.clone(),
                origin: leg.origin.clone(),
                destination: leg.destination.clone(),
                frequency: leg.frequency,
            });
            continue;
        }

        graph.upsert_edge(&leg.origin, &leg.destination, leg.frequency);
    }

    (graphs, notices)
}

/// Cumulative flight frequency per airline and station, over all legs
/// touching the station. Loop legs count once for their single
/// station; other legs credit both endpoints.
pub fn tally(legs: &[FlightLeg]) -> BTreeMap<String, BTreeMap<String, u64>> {
    let mut tallies: BTreeMap<String, BTreeMap<String, u64>> = BTreeMap::new();

    for leg in legs {
        let stations = tallies.entry(leg.airline_code.clone()).or_default();

        *stations.entry(leg.origin.clone()).or_insert(0) += u64::from(leg.frequency);
        if leg.origin != leg.destination {
            *stations.entry(leg.destination.clone()).or_insert(0) += u64::from(leg.frequency);
        }
    }

    tallies
}
