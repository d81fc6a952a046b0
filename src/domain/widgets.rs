// KPI tiles and chart domain models
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Neutral,
}

impl Trend {
    pub fn from_cell(cell: &str) -> Self {
        match cell.trim().to_ascii_lowercase().as_str() {
            "up" => Trend::Up,
            "down" => Trend::Down,
            _ => Trend::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KpiStatus {
    Good,
    Warning,
    Critical,
    #[default]
    Neutral,
}

impl KpiStatus {
    pub fn from_cell(cell: &str) -> Self {
        match cell.trim().to_ascii_lowercase().as_str() {
            "good" => KpiStatus::Good,
            "warning" => KpiStatus::Warning,
            "critical" => KpiStatus::Critical,
            _ => KpiStatus::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    pub id: String,
    pub title: String,
    pub value: String,
    pub delta: String,
    pub trend: Trend,
    pub status: KpiStatus,
}

impl Kpi {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        value: impl Into<String>,
        delta: impl Into<String>,
        trend: Trend,
        status: KpiStatus,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            value: value.into(),
            delta: delta.into(),
            trend,
            status,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    #[default]
    Bar,
    Area,
    Pie,
    Doughnut,
}

impl ChartKind {
    pub fn from_cell(cell: &str) -> Self {
        match cell.trim().to_ascii_lowercase().as_str() {
            "line" => ChartKind::Line,
            "area" => ChartKind::Area,
            "pie" => ChartKind::Pie,
            "doughnut" => ChartKind::Doughnut,
            _ => ChartKind::Bar,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: Vec<ChartPoint>,
}

impl Chart {
    pub fn new(title: impl Into<String>, kind: ChartKind, data: Vec<ChartPoint>) -> Self {
        Self {
            title: title.into(),
            kind,
            data,
        }
    }

    /// Blank bar chart used when neither live nor mock data exists for a slot.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Position of a chart on the page, addressed by `CHART_INDEX` 1-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartSlot {
    Main,
    Secondary,
    Third,
    Fourth,
}

impl ChartSlot {
    pub fn from_cell(cell: &str) -> Option<Self> {
        match cell.trim().parse::<u8>().ok()? {
            1 => Some(ChartSlot::Main),
            2 => Some(ChartSlot::Secondary),
            3 => Some(ChartSlot::Third),
            4 => Some(ChartSlot::Fourth),
            _ => None,
        }
    }
}
