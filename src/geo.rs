//! Great-circle distance between stations

use crate::data::CoordIndex;
use crate::error::AuditError;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers between two stations.
///
/// Fails with `AuditError::UnknownStation` when either code is absent
/// from the coordinate index; the detector relies on catching that
/// error to report unreferenced stations.
pub fn distance_km(a: &str, b: &str, coords: &CoordIndex) -> Result<f64, AuditError> {
    let ca = coords
        .get(a)
        .ok_or_else(|| AuditError::UnknownStation(a.to_string()))?;
    let cb = coords
        .get(b)
        .ok_or_else(|| AuditError::UnknownStation(b.to_string()))?;

    let lat1 = ca.lat.to_radians();
    let lat2 = cb.lat.to_radians();
    let dlat = (cb.lat - ca.lat).to_radians();
    let dlon = (cb.lon - ca.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    Ok(2.0 * EARTH_RADIUS_KM * h.sqrt().asin())
}
