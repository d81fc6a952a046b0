// Section assembler - Merges live sheet rows with mock content into one section
use crate::application::mock_data::mock_section;
use crate::application::sheet_records::{
    BoardRecord, CaseRecord, ChartRecord, KpiRecord, MarkerRecord, ShapeRecord, VehicleRecord,
};
use crate::domain::boards::{Board, Task};
use crate::domain::cases::SupportCase;
use crate::domain::dashboard::{AssembledSection, DashboardSection, SectionProvenance, Source};
use crate::domain::map::{MapMarker, MapPath, MapPolygon, MapVehicle};
use crate::domain::tab::{Language, TabId};
use crate::domain::widgets::{Chart, ChartPoint, ChartSlot, Kpi};
use crate::infrastructure::csv_rows::Row;
use std::collections::HashMap;

const DEFAULT_BOARD_EMOJI: &str = "📋";
const DEFAULT_BOARD_COLOR: &str = "#3b82f6";
const DEFAULT_POLYGON_COLOR: &str = "#3b82f6";
const DEFAULT_PATH_COLOR: &str = "#eab308";
const DEFAULT_VEHICLE_KIND: &str = "car";
const DEFAULT_VEHICLE_COLOR: &str = "#f59e0b";
const DEFAULT_CASE_ORIGIN: &str = "Web";
const DEFAULT_CASE_DATE: &str = "2023-01-01";

/// Parsed rows of every published sheet, one independent list per sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetRows {
    pub kpis: Vec<Row>,
    pub charts: Vec<Row>,
    pub map_markers: Vec<Row>,
    pub map_polygons: Vec<Row>,
    pub map_paths: Vec<Row>,
    pub map_vehicles: Vec<Row>,
    pub boards: Vec<Row>,
    pub support_cases: Vec<Row>,
}

/// A value together with the source it was taken from.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub source: Source,
}

/// Live items if there are any, else the mock items, else nothing.
pub fn resolve_list<T>(live: Vec<T>, mock: Vec<T>) -> Resolved<Vec<T>> {
    if !live.is_empty() {
        Resolved { value: live, source: Source::Live }
    } else if !mock.is_empty() {
        Resolved { value: mock, source: Source::Mock }
    } else {
        Resolved { value: Vec::new(), source: Source::Empty }
    }
}

/// Live chart if the slot has rows, else the mock chart, else a blank bar chart.
pub fn resolve_chart(live: Option<Chart>, mock: Option<Chart>) -> Resolved<Chart> {
    match (live, mock) {
        (Some(chart), _) => Resolved { value: chart, source: Source::Live },
        (None, Some(chart)) => Resolved { value: chart, source: Source::Mock },
        (None, None) => Resolved { value: Chart::empty(), source: Source::Empty },
    }
}

/// Build the section for `tab` in `lang` from live rows.
///
/// Returns `None` when an ordinary tab has neither KPI nor chart rows; the
/// caller then shows the mock section as a whole. Boards and support cases
/// come from dedicated sheets and are never filtered by tab.
pub fn assemble(tab: TabId, lang: Language, rows: &SheetRows) -> Option<AssembledSection> {
    let kpis: Vec<KpiRecord> = rows
        .kpis
        .iter()
        .map(KpiRecord::from)
        .filter(|r| tab.matches(&r.tab_id))
        .collect();
    let charts: Vec<ChartRecord> = rows
        .charts
        .iter()
        .map(ChartRecord::from)
        .filter(|r| tab.matches(&r.tab_id))
        .collect();

    if !tab.is_specialized() && kpis.is_empty() && charts.is_empty() {
        tracing::debug!("No live KPI or chart rows for tab {}", tab);
        return None;
    }

    let markers = rows
        .map_markers
        .iter()
        .map(MarkerRecord::from)
        .filter(|r| tab.matches(&r.tab_id));
    let polygons = rows
        .map_polygons
        .iter()
        .map(ShapeRecord::from)
        .filter(|r| tab.matches(&r.tab_id));
    let paths = rows
        .map_paths
        .iter()
        .map(ShapeRecord::from)
        .filter(|r| tab.matches(&r.tab_id));
    let vehicles = rows
        .map_vehicles
        .iter()
        .map(VehicleRecord::from)
        .filter(|r| tab.matches(&r.tab_id));
    let boards: Vec<BoardRecord> = rows.boards.iter().map(BoardRecord::from).collect();
    let cases: Vec<CaseRecord> = rows.support_cases.iter().map(CaseRecord::from).collect();

    let mock = mock_section(tab, lang);

    let kpis = resolve_list(build_kpis(&kpis, lang), mock.kpis);
    let [main, secondary, third, fourth] = [
        (ChartSlot::Main, mock.main_chart),
        (ChartSlot::Secondary, mock.secondary_chart),
        (ChartSlot::Third, mock.third_chart),
        (ChartSlot::Fourth, mock.fourth_chart),
    ]
    .map(|(slot, mock_chart)| resolve_chart(build_chart(&charts, slot, lang), Some(mock_chart)));
    let markers = resolve_list(markers.filter_map(|r| build_marker(r, lang)).collect(), mock.map_markers);
    let polygons = resolve_list(polygons.filter_map(build_polygon).collect(), mock.map_polygons);
    let paths = resolve_list(paths.filter_map(build_path).collect(), mock.map_paths);
    let vehicles = resolve_list(vehicles.filter_map(build_vehicle).collect(), mock.map_vehicles);
    let boards = resolve_list(build_boards(&boards, lang), mock.boards);
    let cases = resolve_list(
        cases.iter().map(|r| build_case(r, lang)).collect(),
        mock.support_cases,
    );

    let provenance = SectionProvenance {
        kpis: kpis.source,
        charts: [main.source, secondary.source, third.source, fourth.source],
        map_markers: markers.source,
        map_polygons: polygons.source,
        map_paths: paths.source,
        map_vehicles: vehicles.source,
        boards: boards.source,
        support_cases: cases.source,
    };

    tracing::debug!("Assembled tab {} ({}): {:?}", tab, lang.as_str(), provenance);

    Some(AssembledSection {
        section: DashboardSection {
            kpis: kpis.value,
            main_chart: main.value,
            secondary_chart: secondary.value,
            third_chart: third.value,
            fourth_chart: fourth.value,
            map_title: mock.map_title,
            map_markers: markers.value,
            map_polygons: polygons.value,
            map_paths: paths.value,
            map_vehicles: vehicles.value,
            boards: boards.value,
            support_cases: cases.value,
        },
        provenance,
    })
}

fn build_kpis(records: &[KpiRecord], lang: Language) -> Vec<Kpi> {
    records
        .iter()
        .enumerate()
        .map(|(idx, r)| {
            let id = r.kpi_id.clone().unwrap_or_else(|| format!("kpi-{}", idx + 1));
            Kpi::new(id, r.title.pick(lang), r.value.clone(), r.delta.pick(lang), r.trend, r.status)
        })
        .collect()
}

/// One chart from every row of `slot`; title and kind come from the first row.
fn build_chart(records: &[ChartRecord], slot: ChartSlot, lang: Language) -> Option<Chart> {
    let rows: Vec<&ChartRecord> = records.iter().filter(|r| r.slot == Some(slot)).collect();
    let first = rows.first()?;
    let data = rows
        .iter()
        .map(|r| ChartPoint::new(r.label.pick(lang), r.value))
        .collect();
    Some(Chart::new(first.title.pick(lang), first.kind, data))
}

fn build_marker(record: MarkerRecord, lang: Language) -> Option<MapMarker> {
    let position = record.position?;
    Some(MapMarker::new(position, record.kind, record.status, record.title.pick(lang)))
}

fn build_polygon(record: ShapeRecord) -> Option<MapPolygon> {
    if record.coords.is_empty() {
        return None;
    }
    Some(MapPolygon {
        positions: record.coords,
        color: record.color.unwrap_or_else(|| DEFAULT_POLYGON_COLOR.to_string()),
        label: record.label,
    })
}

fn build_path(record: ShapeRecord) -> Option<MapPath> {
    if record.coords.is_empty() {
        return None;
    }
    Some(MapPath {
        path: record.coords,
        color: record.color.unwrap_or_else(|| DEFAULT_PATH_COLOR.to_string()),
        dashed: record.dashed,
        label: record.label,
    })
}

fn build_vehicle(record: VehicleRecord) -> Option<MapVehicle> {
    Some(MapVehicle {
        id: record.id,
        start_pos: record.start?,
        end_pos: record.end?,
        kind: record.kind.unwrap_or_else(|| DEFAULT_VEHICLE_KIND.to_string()),
        color: record.color.unwrap_or_else(|| DEFAULT_VEHICLE_COLOR.to_string()),
    })
}

/// Group rows by board id, then by column title, both in first-seen order.
fn build_boards(records: &[BoardRecord], lang: Language) -> Vec<Board> {
    let mut boards: Vec<Board> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for r in records.iter().filter(|r| !r.board_id.is_empty()) {
        let idx = *index.entry(r.board_id.as_str()).or_insert_with(|| {
            boards.push(Board {
                id: r.board_id.clone(),
                title: r.board_title.pick(lang).to_string(),
                emoji: r.board_emoji.clone().unwrap_or_else(|| DEFAULT_BOARD_EMOJI.to_string()),
                color: r.board_color.clone().unwrap_or_else(|| DEFAULT_BOARD_COLOR.to_string()),
                stats: r.board_stats.clone(),
                columns: Vec::new(),
            });
            boards.len() - 1
        });

        boards[idx].column_mut(&r.column_title).tasks.push(Task {
            id: r.task_id.clone(),
            title: r.task_title.pick(lang).to_string(),
            assignee: r.task_assignee.clone(),
            due_date: r.task_due_date.clone(),
            priority: r.task_priority,
            tags: r.task_tags.clone(),
            budget: r.task_budget.clone(),
            progress: r.task_progress,
        });
    }

    boards
}

fn build_case(record: &CaseRecord, lang: Language) -> SupportCase {
    SupportCase {
        id: record.id.clone(),
        subject: record.subject.pick(lang).to_string(),
        status: record.status,
        priority: record.priority,
        origin: record.origin.clone().unwrap_or_else(|| DEFAULT_CASE_ORIGIN.to_string()),
        created_date: record.created_date.clone().unwrap_or_else(|| DEFAULT_CASE_DATE.to_string()),
        account: record.account.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cases::{CasePriority, CaseStatus};
    use crate::domain::geo::LatLng;
    use crate::domain::widgets::ChartKind;
    use crate::infrastructure::csv_rows::parse_rows;

    const KPI_HEADER: &str = "TAB_ID,KPI_ID,TITLE_HE,TITLE_EN,VALUE,DELTA_HE,DELTA_EN,TREND,STATUS";
    const CHART_HEADER: &str = "TAB_ID,CHART_INDEX,TITLE_HE,TITLE_EN,TYPE,LABEL_HE,LABEL_EN,VALUE";

    fn sheet(header: &str, lines: &[&str]) -> Vec<Row> {
        let mut text = header.to_string();
        for line in lines {
            text.push('\n');
            text.push_str(line);
        }
        parse_rows(&text)
    }

    fn waste_kpis() -> Vec<Row> {
        sheet(KPI_HEADER, &["waste,k1,כותרת,Pickups,120,,+5,UP,good"])
    }

    #[test]
    fn test_no_live_data_for_ordinary_tab() {
        let rows = SheetRows {
            kpis: sheet(KPI_HEADER, &["security,s1,,Patrols,4,,,,"]),
            map_markers: sheet("TAB_ID,LAT,LNG,TYPE,STATUS,TITLE_HE,TITLE_EN", &["waste,31.9,35.0,bin,good,,Bin"]),
            support_cases: sheet("ID,SUBJECT,STATUS", &["SF-1,Leak,Working"]),
            ..SheetRows::default()
        };

        assert!(assemble(TabId::Waste, Language::En, &rows).is_none());
        assert!(assemble(TabId::Security, Language::En, &rows).is_some());
    }

    #[test]
    fn test_specialized_tab_without_kpis_still_assembles() {
        let rows = SheetRows {
            support_cases: sheet("ID,SUBJECT_EN,STATUS,PRIORITY,ORIGIN,CREATED_DATE,ACCOUNT", &["SF-9,Leak,,,,,"]),
            ..SheetRows::default()
        };
        let assembled = assemble(TabId::SupportCases, Language::En, &rows).unwrap();

        assert_eq!(assembled.provenance.kpis, Source::Mock);
        assert_eq!(assembled.provenance.support_cases, Source::Live);

        let case = &assembled.section.support_cases[0];
        assert_eq!(case.status, CaseStatus::New);
        assert_eq!(case.priority, CasePriority::Medium);
        assert_eq!(case.origin, "Web");
        assert_eq!(case.created_date, "2023-01-01");
        assert_eq!(case.subject, "Leak");
    }

    #[test]
    fn test_chart_slots_resolve_independently() {
        let rows = SheetRows {
            charts: sheet(
                CHART_HEADER,
                &[
                    "waste,1,נפח,Volume,line,ינו,Jan,10",
                    "WASTE,1,נפח,Volume,bar,פבר,Feb,12.5",
                    "security,2,x,Other,pie,a,A,1",
                ],
            ),
            ..SheetRows::default()
        };
        let assembled = assemble(TabId::Waste, Language::En, &rows).unwrap();
        let mock = mock_section(TabId::Waste, Language::En);

        let main = &assembled.section.main_chart;
        assert_eq!(main.kind, ChartKind::Line);
        assert_eq!(main.title, "Volume");
        assert_eq!(main.data, vec![ChartPoint::new("Jan", 10.0), ChartPoint::new("Feb", 12.5)]);

        assert_eq!(assembled.section.secondary_chart, mock.secondary_chart);
        assert_eq!(
            assembled.provenance.charts,
            [Source::Live, Source::Mock, Source::Mock, Source::Mock]
        );
        // KPIs had no rows, so they come from the mock generator
        assert_eq!(assembled.section.kpis, mock.kpis);
    }

    #[test]
    fn test_chart_kind_defaults_to_bar() {
        let rows = SheetRows {
            charts: sheet(CHART_HEADER, &["waste,3,,Types,,,Glass,5", "waste,3,,Types,pie,,Paper,x"]),
            ..SheetRows::default()
        };
        let assembled = assemble(TabId::Waste, Language::En, &rows).unwrap();

        assert_eq!(assembled.section.third_chart.kind, ChartKind::Bar);
        assert_eq!(assembled.section.third_chart.data[1], ChartPoint::new("Paper", 0.0));
    }

    #[test]
    fn test_resolve_chart_without_any_source_is_blank_bar() {
        let resolved = resolve_chart(None, None);
        assert_eq!(resolved.source, Source::Empty);
        assert_eq!(resolved.value.title, "");
        assert_eq!(resolved.value.kind, ChartKind::Bar);
        assert!(resolved.value.data.is_empty());
    }

    #[test]
    fn test_live_kpis_use_selected_language() {
        let rows = SheetRows {
            kpis: sheet(KPI_HEADER, &["waste,,איסופים,Pickups,120,+5 היום,+5 today,,"]),
            ..SheetRows::default()
        };

        let he = assemble(TabId::Waste, Language::He, &rows).unwrap().section;
        assert_eq!(he.kpis.len(), 1);
        assert_eq!(he.kpis[0].id, "kpi-1");
        assert_eq!(he.kpis[0].title, "איסופים");
        assert_eq!(he.kpis[0].delta, "+5 היום");

        let en = assemble(TabId::Waste, Language::En, &rows).unwrap().section;
        assert_eq!(en.kpis[0].title, "Pickups");
        assert_eq!(en.kpis[0].trend, crate::domain::widgets::Trend::Neutral);
    }

    #[test]
    fn test_invalid_markers_fall_back_to_mock() {
        let rows = SheetRows {
            kpis: waste_kpis(),
            map_markers: sheet("TAB_ID,LAT,LNG,COORDS,TYPE,STATUS,TITLE_HE,TITLE_EN", &["waste,,,,bin,good,,Broken"]),
            ..SheetRows::default()
        };
        let assembled = assemble(TabId::Waste, Language::En, &rows).unwrap();

        assert_eq!(assembled.provenance.map_markers, Source::Mock);
        assert_eq!(
            assembled.section.map_markers,
            mock_section(TabId::Waste, Language::En).map_markers
        );
    }

    #[test]
    fn test_overlays_drop_invalid_rows_and_keep_valid_ones() {
        let rows = SheetRows {
            kpis: waste_kpis(),
            map_markers: sheet(
                "TAB_ID,LAT,LNG,COORDS,TYPE,STATUS,TITLE_HE,TITLE_EN",
                &["waste,abc,35.0,,bin,,,Bad", "waste,,,\"31.91,35.02\",bin,critical,,Good"],
            ),
            map_polygons: sheet("TAB_ID,COORDS,COLOR,LABEL", &["waste,bad;worse,,", "waste,\"31.9,35.0;31.8,35.1\",,North"]),
            map_paths: sheet("TAB_ID,COORDS,COLOR,LABEL,DASHED", &["waste,\"31.9,35.0;31.8,35.1\",#000,,TRUE"]),
            map_vehicles: sheet(
                "TAB_ID,ID,TYPE,COLOR,START_LAT,START_LNG,START,END_LAT,END_LNG,END",
                &["waste,v1,,,,,\"31.9,35.0\",,,\"31.8,35.1\"", "waste,v2,bus,,x,y,,,,"],
            ),
            ..SheetRows::default()
        };
        let section = assemble(TabId::Waste, Language::En, &rows).unwrap().section;

        assert_eq!(section.map_markers.len(), 1);
        assert_eq!(section.map_markers[0].title, "Good");
        assert_eq!(section.map_markers[0].lat, 31.91);

        assert_eq!(section.map_polygons.len(), 1);
        assert_eq!(section.map_polygons[0].color, "#3b82f6");
        assert_eq!(section.map_polygons[0].label.as_deref(), Some("North"));

        assert!(section.map_paths[0].dashed);
        assert_eq!(section.map_paths[0].color, "#000");

        assert_eq!(section.map_vehicles.len(), 1);
        assert_eq!(section.map_vehicles[0].kind, "car");
        assert_eq!(section.map_vehicles[0].color, "#f59e0b");
        assert_eq!(section.map_vehicles[0].end_pos, LatLng::new(31.8, 35.1));
    }

    #[test]
    fn test_overlays_keep_only_rows_of_the_requested_tab() {
        let rows = SheetRows {
            kpis: sheet(KPI_HEADER, &["waste,k1,,Pickups,120,,,,", "security,s1,,Patrols,4,,,,"]),
            map_markers: sheet(
                "TAB_ID,LAT,LNG,TYPE,STATUS,TITLE_HE,TITLE_EN",
                &[
                    "security,31.7,35.2,camera,good,,Camera",
                    "Waste,31.9,35.0,bin,good,,Bin",
                    "security,31.6,35.3,camera,warning,,Gate",
                ],
            ),
            map_polygons: sheet("TAB_ID,COORDS,COLOR,LABEL", &["security,\"31.9,35.0;31.8,35.1\",,Zone"]),
            map_paths: sheet(
                "TAB_ID,COORDS,COLOR,LABEL,DASHED",
                &["security,\"31.7,35.2;31.6,35.3\",,Patrol,", "waste,\"31.9,35.0;31.8,35.1\",,Route,"],
            ),
            map_vehicles: sheet("TAB_ID,ID,START,END", &["security,p1,\"31.7,35.2\",\"31.6,35.3\""]),
            ..SheetRows::default()
        };
        let mock = mock_section(TabId::Waste, Language::En);

        let waste = assemble(TabId::Waste, Language::En, &rows).unwrap();
        assert_eq!(waste.section.map_markers.len(), 1);
        assert_eq!(waste.section.map_markers[0].title, "Bin");
        assert_eq!(waste.provenance.map_markers, Source::Live);
        assert_eq!(waste.section.map_paths.len(), 1);
        assert_eq!(waste.section.map_paths[0].label.as_deref(), Some("Route"));
        assert_eq!(waste.provenance.map_paths, Source::Live);
        // only security polygons and vehicles exist, so waste shows the mock ones
        assert_eq!(waste.section.map_polygons, mock.map_polygons);
        assert_eq!(waste.provenance.map_polygons, Source::Mock);
        assert_eq!(waste.section.map_vehicles, mock.map_vehicles);
        assert_eq!(waste.provenance.map_vehicles, Source::Mock);

        let security = assemble(TabId::Security, Language::En, &rows).unwrap();
        let titles: Vec<&str> = security.section.map_markers.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Camera", "Gate"]);
        assert_eq!(security.section.map_vehicles.len(), 1);
        assert_eq!(security.section.map_vehicles[0].id, "p1");
    }

    #[test]
    fn test_board_grouping_keeps_first_seen_order() {
        let rows = SheetRows {
            boards: sheet(
                "BOARD_ID,BOARD_TITLE_EN,COLUMN_TITLE,TASK_ID,TASK_TITLE_EN",
                &[
                    "b1,Roads,Todo,t1,Plan",
                    "b1,Roads,Todo,t2,Survey",
                    ",Orphan,Todo,t9,Skipped",
                    "b1,Roads,Done,t3,Permit",
                ],
            ),
            ..SheetRows::default()
        };
        let assembled = assemble(TabId::ProjectBoards, Language::En, &rows).unwrap();
        let boards = &assembled.section.boards;

        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].id, "b1");
        assert_eq!(boards[0].emoji, "📋");
        let columns: Vec<&str> = boards[0].columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(columns, vec!["Todo", "Done"]);
        let todo: Vec<&str> = boards[0].columns[0].tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(todo, vec!["t1", "t2"]);
        assert_eq!(boards[0].columns[1].tasks[0].id, "t3");
    }

    #[test]
    fn test_boards_fall_back_to_mock() {
        let assembled = assemble(TabId::ProjectBoards, Language::En, &SheetRows::default()).unwrap();
        assert_eq!(assembled.provenance.boards, Source::Mock);
        assert_eq!(
            assembled.section.boards,
            mock_section(TabId::ProjectBoards, Language::En).boards
        );
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let rows = SheetRows {
            kpis: waste_kpis(),
            charts: sheet(CHART_HEADER, &["waste,2,,Stops,bar,,Sun,3"]),
            ..SheetRows::default()
        };
        assert_eq!(
            assemble(TabId::Waste, Language::He, &rows),
            assemble(TabId::Waste, Language::He, &rows)
        );
    }
}
