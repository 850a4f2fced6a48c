//! End-to-end audit scenarios: legs in, reports out.

use std::collections::HashMap;

use airline_network_auditor::config::AuditConfig;
use airline_network_auditor::data::{Coord, CoordIndex, FlightLeg};
use airline_network_auditor::graph::builder;
use airline_network_auditor::network::detection;
use airline_network_auditor::report::Report;

const EARTH_RADIUS_KM: f64 = 6371.0;
const ONE_DEGREE_KM: f64 = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;

fn leg(airline: &str, org: &str, dst: &str, freq: u32) -> FlightLeg {
    FlightLeg {
        airline_code: airline.to_string(),
        origin: org.to_string(),
        destination: dst.to_string(),
        frequency: freq,
    }
}

fn coords_of(entries: &[(&str, f64, f64)]) -> CoordIndex {
    entries
        .iter()
        .map(|&(code, lat, lon)| (code.to_string(), Coord { lat, lon }))
        .collect()
}

#[test]
fn triangle_network_with_a_loop_leg() {
    let legs = vec![
        leg("XX", "JFK", "LHR", 100),
        leg("XX", "LHR", "CDG", 50),
        leg("XX", "CDG", "JFK", 10),
        leg("XX", "ORY", "ORY", 5),
    ];

    let (graphs, notices) = builder::build(&legs);
    let tallies = builder::tally(&legs);

    // The loop leg stays out of the graph but is tallied
    let graph = &graphs["XX"];
    assert_eq!(graph.node_count(), 3);
    assert!(graph.node_index("ORY").is_none());
    assert_eq!(notices.len(), 1);
    assert_eq!(tallies["XX"]["ORY"], 5);

    // One connected component covering the whole triangle
    let components = detection::connected_components(graph);
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].len(), 3);

    let coords = coords_of(&[
        ("JFK", 40.639751, -73.778925),
        ("LHR", 51.4775, -0.461389),
        ("CDG", 49.012779, 2.55),
    ]);
    let names = HashMap::from([("XX".to_string(), "Example Air".to_string())]);

    // A triangle of real airports is nowhere near a 7x outlier
    let quiet = detection::audit_airlines(&graphs, &coords, &names, &AuditConfig::default());
    assert!(quiet.is_empty());

    let verbose = detection::audit_airlines(&graphs, &coords, &names, &AuditConfig::new(7.0, true));
    assert_eq!(verbose.len(), 1);
    match &verbose[0] {
        Report::NetworkStats {
            airline_name,
            stats,
            ..
        } => {
            assert_eq!(airline_name, "Example Air");
            assert_eq!(stats.order, 3);
            assert_eq!(stats.size, 3);
            assert!((stats.density - 1.0).abs() < 1e-12);
        }
        other => panic!("expected network stats, got {other:?}"),
    }
}

#[test]
fn chain_distances_match_hand_computed_haversine() {
    // A-B-C-D chain along the zero meridian, one degree of latitude
    // between neighbors. Minimum eccentricity is 2, attained by B and
    // C; B is first in insertion order and becomes the reference
    // center.
    let legs = vec![
        leg("CH", "AAA", "BBB", 1),
        leg("CH", "BBB", "CCC", 1),
        leg("CH", "CCC", "DDD", 1),
    ];
    let coords = coords_of(&[
        ("AAA", 0.0, 0.0),
        ("BBB", 1.0, 0.0),
        ("CCC", 2.0, 0.0),
        ("DDD", 3.0, 0.0),
    ]);

    let (graphs, _) = builder::build(&legs);
    let names = HashMap::new();
    let reports =
        detection::audit_airlines(&graphs, &coords, &names, &AuditConfig::new(7.0, true));

    assert_eq!(reports.len(), 1);
    match &reports[0] {
        Report::NetworkStats {
            stats, distances, ..
        } => {
            assert_eq!(stats.centers, vec!["BBB", "CCC"]);
            assert_eq!(stats.center, "BBB");

            // From B: 1 degree to A and C, 2 degrees to D
            let expected_max = 2.0 * ONE_DEGREE_KM;
            let expected_avg = 4.0 * ONE_DEGREE_KM / 4.0;
            assert!((distances.max_dist_km - expected_max).abs() < 1e-3);
            assert!((distances.avg_dist_km - expected_avg).abs() < 1e-3);
            assert_eq!(distances.max_station, "DDD");
            assert!((distances.ratio.unwrap() - 2.0).abs() < 1e-6);
        }
        other => panic!("expected network stats, got {other:?}"),
    }
}

#[test]
fn unresolvable_station_short_circuits_the_airline_component() {
    let legs = vec![leg("ZZ", "AAA", "BBB", 3), leg("ZZ", "BBB", "XYZ", 4)];
    let coords = coords_of(&[("AAA", 0.0, 0.0), ("BBB", 1.0, 0.0)]);
    let names = HashMap::from([("ZZ".to_string(), "Ghost Lines".to_string())]);

    let (graphs, _) = builder::build(&legs);
    let reports =
        detection::audit_airlines(&graphs, &coords, &names, &AuditConfig::new(7.0, true));

    assert_eq!(reports.len(), 1);
    match &reports[0] {
        Report::UnknownStation {
            airline_code,
            airline_name,
            center,
            station,
        } => {
            assert_eq!(airline_code, "ZZ");
            assert_eq!(airline_name, "Ghost Lines");
            assert_eq!(center, "BBB");
            assert_eq!(station, "XYZ");
        }
        other => panic!("expected an unknown-station report, got {other:?}"),
    }
}

#[test]
fn reports_come_out_in_airline_order() {
    let legs = vec![
        leg("ZZ", "AAA", "XYZ", 1),
        leg("AA", "AAA", "XYZ", 1),
        leg("MM", "AAA", "XYZ", 1),
    ];
    let coords = coords_of(&[("AAA", 0.0, 0.0)]);
    let names = HashMap::new();

    let (graphs, _) = builder::build(&legs);
    let reports =
        detection::audit_airlines(&graphs, &coords, &names, &AuditConfig::default());

    let airlines: Vec<&str> = reports
        .iter()
        .map(|r| match r {
            Report::UnknownStation { airline_code, .. } => airline_code.as_str(),
            other => panic!("expected unknown-station reports, got {other:?}"),
        })
        .collect();
    assert_eq!(airlines, vec!["AA", "MM", "ZZ"]);
}
