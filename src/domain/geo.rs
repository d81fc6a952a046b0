// Geographic primitives and coordinate decoding
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Strict numeric cell parsing. Rejects empty, non-numeric and non-finite input.
pub fn parse_number(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a single `"lat,lng"` pair.
pub fn parse_lat_lng(pair: &str) -> Option<LatLng> {
    let mut parts = pair.split(',');
    let (lat, lng) = match (parts.next(), parts.next(), parts.next()) {
        (Some(lat), Some(lng), None) => (lat, lng),
        _ => return None,
    };
    Some(LatLng::new(parse_number(lat)?, parse_number(lng)?))
}

/// Decode `"lat,lng;lat,lng;..."` into coordinates, dropping malformed pairs.
pub fn parse_coords(text: &str) -> Vec<LatLng> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split(';').filter_map(parse_lat_lng).collect()
}

/// Position along a straight track, restarting every `period`.
pub fn position_at(elapsed: Duration, period: Duration, start: LatLng, end: LatLng) -> LatLng {
    let period_ms = period.as_millis();
    if period_ms == 0 {
        return start;
    }
    let t = (elapsed.as_millis() % period_ms) as f64 / period_ms as f64;
    LatLng::new(
        start.lat + (end.lat - start.lat) * t,
        start.lng + (end.lng - start.lng) * t,
    )
}
