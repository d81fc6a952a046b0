// Dashboard section domain model
use super::boards::Board;
use super::cases::SupportCase;
use super::map::{MapMarker, MapPath, MapPolygon, MapVehicle};
use super::widgets::{Chart, Kpi};
use serde::Serialize;

/// Everything needed to render one tab in one language.
///
/// A section is built in one go and replaced wholesale; it is never patched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSection {
    pub kpis: Vec<Kpi>,
    pub main_chart: Chart,
    pub secondary_chart: Chart,
    pub third_chart: Chart,
    pub fourth_chart: Chart,
    pub map_title: String,
    pub map_markers: Vec<MapMarker>,
    pub map_polygons: Vec<MapPolygon>,
    pub map_paths: Vec<MapPath>,
    pub map_vehicles: Vec<MapVehicle>,
    pub boards: Vec<Board>,
    pub support_cases: Vec<SupportCase>,
}

/// Where a field group of an assembled section came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Live,
    Mock,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionProvenance {
    pub kpis: Source,
    /// Main, secondary, third and fourth chart, in that order.
    pub charts: [Source; 4],
    pub map_markers: Source,
    pub map_polygons: Source,
    pub map_paths: Source,
    pub map_vehicles: Source,
    pub boards: Source,
    pub support_cases: Source,
}

impl SectionProvenance {
    /// Provenance of a section taken entirely from the mock generator.
    /// Groups the mock leaves empty are reported as `Empty`.
    pub fn of_mock(section: &DashboardSection) -> Self {
        Self {
            kpis: mock_source(section.kpis.is_empty()),
            charts: [
                &section.main_chart,
                &section.secondary_chart,
                &section.third_chart,
                &section.fourth_chart,
            ]
            .map(|chart| mock_source(chart.data.is_empty())),
            map_markers: mock_source(section.map_markers.is_empty()),
            map_polygons: mock_source(section.map_polygons.is_empty()),
            map_paths: mock_source(section.map_paths.is_empty()),
            map_vehicles: mock_source(section.map_vehicles.is_empty()),
            boards: mock_source(section.boards.is_empty()),
            support_cases: mock_source(section.support_cases.is_empty()),
        }
    }
}

fn mock_source(empty: bool) -> Source {
    if empty { Source::Empty } else { Source::Mock }
}

/// A section together with the source used for each of its field groups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssembledSection {
    pub section: DashboardSection,
    pub provenance: SectionProvenance,
}
