// Typed records for each published sheet
//
// Every record is built from a parsed row without failing: constrained
// columns fall back to their default variant and unparseable numbers or
// coordinates become `None`.
use crate::domain::boards::TaskPriority;
use crate::domain::cases::{CasePriority, CaseStatus};
use crate::domain::geo::{parse_coords, parse_number, LatLng};
use crate::domain::map::MarkerStatus;
use crate::domain::tab::Localized;
use crate::domain::widgets::{ChartKind, ChartSlot, KpiStatus, Trend};
use crate::infrastructure::csv_rows::Row;

#[derive(Debug, Clone, PartialEq)]
pub struct KpiRecord {
    pub tab_id: String,
    pub kpi_id: Option<String>,
    pub title: Localized,
    pub value: String,
    pub delta: Localized,
    pub trend: Trend,
    pub status: KpiStatus,
}

impl From<&Row> for KpiRecord {
    fn from(row: &Row) -> Self {
        Self {
            tab_id: row.get("TAB_ID").to_string(),
            kpi_id: non_empty(row.get("KPI_ID")),
            title: localized(row, "TITLE_HE", "TITLE_EN", None),
            value: row.get("VALUE").to_string(),
            delta: localized(row, "DELTA_HE", "DELTA_EN", None),
            trend: Trend::from_cell(row.get("TREND")),
            status: KpiStatus::from_cell(row.get("STATUS")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartRecord {
    pub tab_id: String,
    pub slot: Option<ChartSlot>,
    pub title: Localized,
    pub kind: ChartKind,
    pub label: Localized,
    pub value: f64,
}

impl From<&Row> for ChartRecord {
    fn from(row: &Row) -> Self {
        Self {
            tab_id: row.get("TAB_ID").to_string(),
            slot: ChartSlot::from_cell(row.get("CHART_INDEX")),
            title: localized(row, "TITLE_HE", "TITLE_EN", None),
            kind: ChartKind::from_cell(row.get("TYPE")),
            label: localized(row, "LABEL_HE", "LABEL_EN", None),
            value: parse_number(row.get("VALUE")).unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerRecord {
    pub tab_id: String,
    pub position: Option<LatLng>,
    pub kind: String,
    pub status: MarkerStatus,
    pub title: Localized,
}

impl From<&Row> for MarkerRecord {
    fn from(row: &Row) -> Self {
        Self {
            tab_id: row.get("TAB_ID").to_string(),
            position: lat_lng(row, "LAT", "LNG", "COORDS"),
            kind: row.get("TYPE").to_string(),
            status: MarkerStatus::from_cell(row.get("STATUS")),
            title: localized(row, "TITLE_HE", "TITLE_EN", None),
        }
    }
}

/// Shared shape of the polygon and path sheets.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeRecord {
    pub tab_id: String,
    pub coords: Vec<LatLng>,
    pub color: Option<String>,
    pub label: Option<String>,
    pub dashed: bool,
}

impl From<&Row> for ShapeRecord {
    fn from(row: &Row) -> Self {
        Self {
            tab_id: row.get("TAB_ID").to_string(),
            coords: parse_coords(row.get("COORDS")),
            color: non_empty(row.get("COLOR")),
            label: non_empty(row.get("LABEL")),
            dashed: row.get("DASHED").eq_ignore_ascii_case("true"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRecord {
    pub tab_id: String,
    pub id: String,
    pub kind: Option<String>,
    pub color: Option<String>,
    pub start: Option<LatLng>,
    pub end: Option<LatLng>,
}

impl From<&Row> for VehicleRecord {
    fn from(row: &Row) -> Self {
        Self {
            tab_id: row.get("TAB_ID").to_string(),
            id: row.get("ID").to_string(),
            kind: non_empty(row.get("TYPE")).map(|t| t.to_lowercase()),
            color: non_empty(row.get("COLOR")),
            start: lat_lng(row, "START_LAT", "START_LNG", "START"),
            end: lat_lng(row, "END_LAT", "END_LNG", "END"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardRecord {
    pub board_id: String,
    pub board_title: Localized,
    pub board_emoji: Option<String>,
    pub board_color: Option<String>,
    pub board_stats: String,
    pub column_title: String,
    pub task_id: String,
    pub task_title: Localized,
    pub task_assignee: String,
    pub task_due_date: String,
    pub task_priority: TaskPriority,
    pub task_tags: Vec<String>,
    pub task_budget: Option<String>,
    pub task_progress: Option<u32>,
}

impl From<&Row> for BoardRecord {
    fn from(row: &Row) -> Self {
        Self {
            board_id: row.get("BOARD_ID").to_string(),
            board_title: localized(row, "BOARD_TITLE_HE", "BOARD_TITLE_EN", Some("BOARD_TITLE")),
            board_emoji: non_empty(row.get("BOARD_EMOJI")),
            board_color: non_empty(row.get("BOARD_COLOR")),
            board_stats: row.get("BOARD_STATS").to_string(),
            column_title: row.get("COLUMN_TITLE").to_string(),
            task_id: row.get("TASK_ID").to_string(),
            task_title: localized(row, "TASK_TITLE_HE", "TASK_TITLE_EN", Some("TASK_TITLE")),
            task_assignee: row.get("TASK_ASSIGNEE").to_string(),
            task_due_date: row.get("TASK_DUE_DATE").to_string(),
            task_priority: TaskPriority::from_cell(row.get("TASK_PRIORITY")),
            task_tags: row
                .get("TASK_TAGS")
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            task_budget: non_empty(row.get("TASK_BUDGET")),
            task_progress: parse_progress(row.get("TASK_PROGRESS")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseRecord {
    pub id: String,
    pub subject: Localized,
    pub status: CaseStatus,
    pub priority: CasePriority,
    pub origin: Option<String>,
    pub created_date: Option<String>,
    pub account: String,
}

impl From<&Row> for CaseRecord {
    fn from(row: &Row) -> Self {
        Self {
            id: row.get("ID").to_string(),
            subject: localized(row, "SUBJECT_HE", "SUBJECT_EN", Some("SUBJECT")),
            status: CaseStatus::from_cell(row.get("STATUS")),
            priority: CasePriority::from_cell(row.get("PRIORITY")),
            origin: non_empty(row.get("ORIGIN")),
            created_date: non_empty(row.get("CREATED_DATE")),
            account: row.get("ACCOUNT").to_string(),
        }
    }
}

fn non_empty(cell: &str) -> Option<String> {
    let cell = cell.trim();
    (!cell.is_empty()).then(|| cell.to_string())
}

fn localized(row: &Row, he: &str, en: &str, shared: Option<&str>) -> Localized {
    match shared {
        Some(shared) => Localized::new(row.first_of(&[he, shared]), row.first_of(&[en, shared])),
        None => Localized::new(row.get(he), row.get(en)),
    }
}

/// Coordinate from dedicated lat/lng columns, falling back to the matching
/// component of a combined `"lat,lng"` column when a dedicated one is empty.
fn lat_lng(row: &Row, lat_field: &str, lng_field: &str, combined_field: &str) -> Option<LatLng> {
    let combined = row.get(combined_field);
    let component = |field: &str, idx: usize| {
        let direct = row.get(field);
        if direct.is_empty() {
            combined.split(',').nth(idx).and_then(parse_number)
        } else {
            parse_number(direct)
        }
    };
    Some(LatLng::new(component(lat_field, 0)?, component(lng_field, 1)?))
}

fn parse_progress(cell: &str) -> Option<u32> {
    let cell = cell.trim();
    cell.strip_suffix('%').unwrap_or(cell).trim().parse().ok()
}
