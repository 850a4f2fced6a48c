//! CSV handling for the '^'-delimited OpenTravelData reference feeds

use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use crate::error::AuditError;

/// Geographic coordinates in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

/// Station code to coordinates, as loaded from the POR reference feed
pub type CoordIndex = HashMap<String, Coord>;

/// One flight leg from the airline POR feed
/// (`airline_code^apt_org^apt_dst^flt_freq`)
#[derive(Debug, Clone, Deserialize)]
pub struct FlightLeg {
    pub airline_code: String,

    #[serde(rename = "apt_org")]
    pub origin: String,

    #[serde(rename = "apt_dst")]
    pub destination: String,

    #[serde(rename = "flt_freq")]
    pub frequency: u32,
}

/// One row of the POR best-known-so-far feed
/// (`pk^iata_code^latitude^longitude^city_code^date_from`)
#[derive(Debug, Deserialize)]
struct PorRow {
    pk: String,
    iata_code: String,
    latitude: f64,
    longitude: f64,
}

/// One row of the airline details feed; only the fields the audit
/// needs, the remaining columns are ignored
#[derive(Debug, Deserialize)]
struct AirlineRow {
    env_id: String,

    #[serde(rename = "2char_code")]
    code: String,

    name: String,
}

fn feed_reader(path: &Path) -> Result<csv::Reader<File>> {
    csv::ReaderBuilder::new()
        .delimiter(b'^')
        .from_path(path)
        .with_context(|| format!("opening feed {}", path.display()))
}

/// Load the POR coordinate index.
///
/// The first row seen for a station code wins; later rows for the same
/// code are ignored. A primary key that does not match the
/// `{country}-{admin}-{geo id}` shape marks the feed as corrupt and
/// aborts the load.
pub fn load_coordinate_index(path: &Path) -> Result<CoordIndex> {
    let pk_re = Regex::new(r"^([A-Z]{3})-([A-Z]{1,2})-([0-9]{1,15})$")?;

    let mut index = CoordIndex::new();
    for (idx, row) in feed_reader(path)?.deserialize().enumerate() {
        let row: PorRow = row.with_context(|| format!("reading POR record {}", idx + 1))?;
        if !pk_re.is_match(&row.pk) {
            return Err(AuditError::MalformedPorKey {
                pk: row.pk,
                record: idx + 1,
            }
            .into());
        }

        index.entry(row.iata_code).or_insert(Coord {
            lat: row.latitude,
            lon: row.longitude,
        });
    }

    log::info!(
        "Loaded {} station coordinates from {}",
        index.len(),
        path.display()
    );

    Ok(index)
}

/// Load the display names of the currently active airlines.
///
/// A row is kept only when its deactivation marker (`env_id`) is
/// empty; the last active row for a code wins.
pub fn load_airline_names(path: &Path) -> Result<HashMap<String, String>> {
    let mut names = HashMap::new();
    for (idx, row) in feed_reader(path)?.deserialize().enumerate() {
        let row: AirlineRow = row.with_context(|| format!("reading airline record {}", idx + 1))?;
        if row.env_id.is_empty() {
            names.insert(row.code, row.name);
        }
    }

    log::info!(
        "Loaded {} active airlines from {}",
        names.len(),
        path.display()
    );

    Ok(names)
}

/// Load the flight-leg frequency records
pub fn load_flight_legs(path: &Path) -> Result<Vec<FlightLeg>> {
    let mut legs = Vec::new();
    for (idx, row) in feed_reader(path)?.deserialize().enumerate() {
        let leg: FlightLeg = row.with_context(|| format!("reading flight leg {}", idx + 1))?;
        legs.push(leg);
    }

    log::info!("Loaded {} flight legs from {}", legs.len(), path.display());

    Ok(legs)
}
