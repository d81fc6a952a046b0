// Map overlay domain models
use super::geo::{position_at, LatLng};
use serde::Serialize;
use std::time::Duration;

const MIN_CYCLE_TICKS: u64 = 1000;
const CYCLE_TICK_SPREAD: u64 = 1500;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerStatus {
    Good,
    Warning,
    Critical,
    #[default]
    Neutral,
}

impl MarkerStatus {
    pub fn from_cell(cell: &str) -> Self {
        match cell.trim().to_ascii_lowercase().as_str() {
            "good" => MarkerStatus::Good,
            "warning" => MarkerStatus::Warning,
            "critical" => MarkerStatus::Critical,
            _ => MarkerStatus::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: MarkerStatus,
    pub title: String,
}

impl MapMarker {
    pub fn new(
        position: LatLng,
        kind: impl Into<String>,
        status: MarkerStatus,
        title: impl Into<String>,
    ) -> Self {
        Self {
            lat: position.lat,
            lng: position.lng,
            kind: kind.into(),
            status,
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPolygon {
    pub positions: Vec<LatLng>,
    pub color: String,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPath {
    pub path: Vec<LatLng>,
    pub color: String,
    pub dashed: bool,
    pub label: Option<String>,
}

/// A vehicle animated from start to end, restarting at the start each cycle.
/// Only the endpoints are stored; the current position is derived.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapVehicle {
    pub id: String,
    pub start_pos: LatLng,
    pub end_pos: LatLng,
    #[serde(rename = "type")]
    pub kind: String,
    pub color: String,
}

impl MapVehicle {
    /// Number of animation ticks in one trip, stable for a given id.
    pub fn cycle_ticks(&self) -> u64 {
        // FNV-1a
        let hash = self
            .id
            .bytes()
            .fold(0xcbf2_9ce4_8422_2325_u64, |acc, b| {
                (acc ^ u64::from(b)).wrapping_mul(0x0000_0100_0000_01b3)
            });
        MIN_CYCLE_TICKS + hash % CYCLE_TICK_SPREAD
    }

    pub fn period(&self, tick: Duration) -> Duration {
        tick.saturating_mul(self.cycle_ticks().min(u64::from(u32::MAX)) as u32)
    }

    pub fn position_at(&self, elapsed: Duration, tick: Duration) -> LatLng {
        position_at(elapsed, self.period(tick), self.start_pos, self.end_pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(id: &str) -> MapVehicle {
        MapVehicle {
            id: id.to_string(),
            start_pos: LatLng::new(31.900, 35.012),
            end_pos: LatLng::new(31.893, 35.007),
            kind: "garbage".to_string(),
            color: "#f59e0b".to_string(),
        }
    }

    #[test]
    fn test_cycle_ticks_is_stable_and_bounded() {
        for id in ["truck1", "truck2", "", "patrol-77"] {
            let ticks = vehicle(id).cycle_ticks();
            assert!((1000..2500).contains(&ticks));
            assert_eq!(ticks, vehicle(id).cycle_ticks());
        }
    }

    #[test]
    fn test_vehicle_position_starts_at_start() {
        let v = vehicle("truck1");
        let tick = Duration::from_millis(50);
        assert_eq!(v.position_at(Duration::ZERO, tick), v.start_pos);
        assert_eq!(v.position_at(v.period(tick), tick), v.start_pos);
    }

    #[test]
    fn test_marker_status_default() {
        assert_eq!(MarkerStatus::from_cell("WARNING"), MarkerStatus::Warning);
        assert_eq!(MarkerStatus::from_cell("unknown"), MarkerStatus::Neutral);
    }
}
