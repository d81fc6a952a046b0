// Bundled mock content used whenever live sheet data is missing
use crate::domain::boards::{Board, BoardColumn, Task, TaskPriority};
use crate::domain::cases::{CasePriority, CaseStatus, SupportCase};
use crate::domain::dashboard::DashboardSection;
use crate::domain::geo::LatLng;
use crate::domain::map::{MapMarker, MapPath, MapPolygon, MapVehicle, MarkerStatus};
use crate::domain::tab::{Language, TabId};
use crate::domain::widgets::{Chart, ChartKind, ChartPoint, Kpi, KpiStatus, Trend};

const MONTHS_HE: [&str; 12] = [
    "ינו", "פבר", "מרץ", "אפר", "מאי", "יונ", "יול", "אוג", "ספט", "אוק", "נוב", "דצ",
];
const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Complete mock section for a tab. Tabs without dedicated content share the
/// waste management content.
pub fn mock_section(tab: TabId, lang: Language) -> DashboardSection {
    let text = Text(lang);
    match tab {
        TabId::SupportCases => support_cases_section(text),
        TabId::ProjectBoards => project_boards_section(text),
        _ => waste_section(text),
    }
}

#[derive(Clone, Copy)]
struct Text(Language);

impl Text {
    fn t(&self, he: &str, en: &str) -> String {
        match self.0 {
            Language::He => he.to_string(),
            Language::En => en.to_string(),
        }
    }

    fn points(&self, entries: &[(&str, &str, f64)]) -> Vec<ChartPoint> {
        entries
            .iter()
            .map(|(he, en, value)| ChartPoint::new(self.t(he, en), *value))
            .collect()
    }

    /// Twelve monthly values between `base` and `base * 1.3`.
    fn months(&self, base: u32) -> Vec<ChartPoint> {
        let names = match self.0 {
            Language::He => MONTHS_HE,
            Language::En => MONTHS_EN,
        };
        names
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let spread = (base * 3 / 10).max(1);
                let jitter = (base + idx as u32 * 7919) * 31 % spread;
                ChartPoint::new(*name, f64::from(base + jitter))
            })
            .collect()
    }
}

fn square(center: LatLng, offset: f64) -> Vec<LatLng> {
    vec![
        LatLng::new(center.lat + offset, center.lng + offset),
        LatLng::new(center.lat - offset, center.lng + offset),
        LatLng::new(center.lat - offset, center.lng - offset),
        LatLng::new(center.lat + offset, center.lng - offset),
    ]
}

fn track(coords: &[(f64, f64)]) -> Vec<LatLng> {
    coords.iter().map(|(lat, lng)| LatLng::new(*lat, *lng)).collect()
}

fn vehicle(id: &str, start: (f64, f64), end: (f64, f64), color: &str) -> MapVehicle {
    MapVehicle {
        id: id.to_string(),
        start_pos: LatLng::new(start.0, start.1),
        end_pos: LatLng::new(end.0, end.1),
        kind: "garbage".to_string(),
        color: color.to_string(),
    }
}

fn waste_section(x: Text) -> DashboardSection {
    DashboardSection {
        kpis: vec![
            Kpi::new("w1", x.t("תקן טיפול פניות", "SLA Compliance"), "98.8%", x.t("+0.6% החודש", "+0.6% This Month"), Trend::Up, KpiStatus::Good),
            Kpi::new("w2", x.t("שביעות רצון", "Satisfaction"), "72%", x.t("לפי סקרים", "Surveys"), Trend::Neutral, KpiStatus::Neutral),
            Kpi::new("w3", x.t("חיסכון משקל אשפה", "Waste Weight Savings"), "₪ 166k", x.t("+2,075 דקות", "+2,075 mins"), Trend::Up, KpiStatus::Good),
            Kpi::new("w4", x.t("חיסכון טיאוט", "Sweeping Savings"), "₪ 48k", x.t("1,044 טון", "1,044 tons"), Trend::Up, KpiStatus::Good),
        ],
        main_chart: Chart::new(x.t("תחזית נפח פחי מיחזור", "Recycling Bin Volume Forecast"), ChartKind::Area, x.months(65)),
        secondary_chart: Chart::new(
            x.t("חריגות עצירה", "Stop Anomalies"),
            ChartKind::Bar,
            x.points(&[("א", "Sun", 14.0), ("ב", "Mon", 18.0), ("ג", "Tue", 22.0), ("ד", "Wed", 17.0), ("ה", "Thu", 19.0), ("ו", "Fri", 11.0)]),
        ),
        third_chart: Chart::new(
            x.t("תלונות לפי שכונה", "Complaints by Neighborhood"),
            ChartKind::Bar,
            x.points(&[("מרכז", "Center", 45.0), ("צפון", "North", 30.0), ("דרום", "South", 55.0), ("מזרח", "East", 20.0)]),
        ),
        fourth_chart: Chart::new(
            x.t("סוגי אשפה (טון)", "Waste Types (Tons)"),
            ChartKind::Pie,
            x.points(&[("ביתי", "Household", 600.0), ("גזם", "Green", 300.0), ("מיחזור", "Recycle", 150.0), ("זכוכית", "Glass", 50.0)]),
        ),
        map_title: x.t("מיקומי פחים ונקודות איסוף", "Bin Locations & Pickup Points"),
        map_markers: vec![
            MapMarker::new(LatLng::new(31.900, 35.012), "bin", MarkerStatus::Good, x.t("פח מיחזור", "Recycling Bin")),
            MapMarker::new(LatLng::new(31.893, 35.007), "bin", MarkerStatus::Warning, x.t("איסוף נייר", "Paper Pickup")),
            MapMarker::new(LatLng::new(31.905, 35.018), "bin", MarkerStatus::Critical, x.t("איסוף פלסטיק", "Plastic Pickup")),
        ],
        map_polygons: vec![
            MapPolygon {
                positions: square(LatLng::new(31.895, 35.010), 0.005),
                color: "#22c55e".to_string(),
                label: Some("Zone A".to_string()),
            },
            MapPolygon {
                positions: track(&[
                    (31.902, 35.014),
                    (31.900, 35.012),
                    (31.898, 35.010),
                    (31.891, 35.005),
                    (31.893, 35.007),
                    (31.895, 35.009),
                    (31.902, 35.014),
                ]),
                color: "#8b5cf6".to_string(),
                label: Some("Truck Routes".to_string()),
            },
        ],
        map_paths: vec![
            MapPath {
                path: track(&[(31.900, 35.012), (31.898, 35.011), (31.895, 35.010), (31.893, 35.007)]),
                color: "#f59e0b".to_string(),
                dashed: false,
                label: Some("Truck 1 Route".to_string()),
            },
            MapPath {
                path: track(&[(31.902, 35.014), (31.900, 35.013), (31.897, 35.011), (31.895, 35.009)]),
                color: "#3b82f6".to_string(),
                dashed: false,
                label: Some("Truck 2 Route".to_string()),
            },
            MapPath {
                path: track(&[(31.898, 35.010), (31.896, 35.008), (31.893, 35.006), (31.891, 35.005)]),
                color: "#10b981".to_string(),
                dashed: false,
                label: Some("Truck 3 Route".to_string()),
            },
        ],
        map_vehicles: vec![
            vehicle("truck1", (31.900, 35.012), (31.893, 35.007), "#f59e0b"),
            vehicle("truck2", (31.902, 35.014), (31.895, 35.009), "#3b82f6"),
            vehicle("truck3", (31.898, 35.010), (31.891, 35.005), "#10b981"),
        ],
        boards: Vec::new(),
        support_cases: Vec::new(),
    }
}

fn support_cases_section(x: Text) -> DashboardSection {
    let case = |id: &str, subject: String, status, priority, origin: &str, date: &str, account: &str| SupportCase {
        id: id.to_string(),
        subject,
        status,
        priority,
        origin: origin.to_string(),
        created_date: date.to_string(),
        account: account.to_string(),
    };

    DashboardSection {
        kpis: vec![
            Kpi::new("sf1", x.t("סה\"כ קריאות שירות", "Total Service Cases"), "1,248", x.t("+12% החודש", "+12% this month"), Trend::Up, KpiStatus::Neutral),
            Kpi::new("sf2", x.t("זמן סגירה ממוצע", "Avg Closing Time"), "4.2h", x.t("-0.5h שיפור", "-0.5h improvement"), Trend::Up, KpiStatus::Good),
            Kpi::new("sf3", x.t("קריאות בטיפול", "Active Cases"), "156", x.t("12 בהסלמה", "12 escalated"), Trend::Down, KpiStatus::Warning),
            Kpi::new("sf4", x.t("שביעות רצון (CSAT)", "CSAT Score"), "4.8/5", x.t("יעד: 4.5", "Target: 4.5"), Trend::Up, KpiStatus::Good),
        ],
        main_chart: Chart::new(x.t("קריאות שירות לאורך זמן", "Service Cases Over Time"), ChartKind::Area, x.months(100)),
        secondary_chart: Chart::new(
            x.t("מקורות פנייה", "Case Origin"),
            ChartKind::Pie,
            x.points(&[("טלפון", "Phone", 45.0), ("אימייל", "Email", 25.0), ("ווב", "Web", 20.0), ("אפליקציה", "App", 10.0)]),
        ),
        third_chart: Chart::new(
            x.t("סטטוס קריאות", "Case Status"),
            ChartKind::Bar,
            x.points(&[("חדש", "New", 30.0), ("בטיפול", "Working", 85.0), ("מוסלם", "Escalated", 12.0), ("סגור", "Closed", 120.0)]),
        ),
        fourth_chart: Chart::new(
            x.t("עדיפות", "Priority Distribution"),
            ChartKind::Doughnut,
            x.points(&[("גבוהה", "High", 15.0), ("בינונית", "Medium", 45.0), ("נמוכה", "Low", 40.0)]),
        ),
        map_title: x.t("מפת קריאות שירות (Salesforce)", "Service Cases Map (Salesforce)"),
        map_markers: vec![
            MapMarker::new(LatLng::new(31.901, 35.013), "case", MarkerStatus::Critical, "פנסי רחוב מקולקלים"),
            MapMarker::new(LatLng::new(31.895, 35.008), "case", MarkerStatus::Warning, "פינוי גזם לא בוצע"),
            MapMarker::new(LatLng::new(31.905, 35.020), "case", MarkerStatus::Good, "ניקוי פארק"),
        ],
        map_polygons: Vec::new(),
        map_paths: Vec::new(),
        map_vehicles: Vec::new(),
        boards: Vec::new(),
        support_cases: vec![
            case("SF-001", x.t("תקלה בתשתית ביוב", "Sewage Infrastructure Failure"), CaseStatus::Working, CasePriority::High, "Phone", "2023-11-20", "Neighborhood A"),
            case("SF-002", x.t("בקשה לגיזום עצים", "Tree Trimming Request"), CaseStatus::New, CasePriority::Medium, "Web", "2023-11-21", "City Center"),
            case("SF-003", x.t("פנס רחוב מהבהב", "Flickering Street Light"), CaseStatus::Closed, CasePriority::Low, "App", "2023-11-19", "South Gate"),
        ],
    }
}

fn project_boards_section(x: Text) -> DashboardSection {
    let task = |id: &str, title: String, assignee: &str, due: &str, priority, tags: Vec<String>| Task {
        id: id.to_string(),
        title,
        assignee: assignee.to_string(),
        due_date: due.to_string(),
        priority,
        tags,
        budget: None,
        progress: None,
    };

    let infra = Board {
        id: "infra".to_string(),
        title: x.t("פרויקטי תשתיות", "Infrastructure Projects"),
        emoji: "🛣️".to_string(),
        color: "#3b82f6".to_string(),
        stats: x.t("12 משימות • 3 צוותים", "12 Tasks • 3 Teams"),
        columns: vec![
            BoardColumn {
                title: x.t("לעשות", "To Do"),
                tasks: vec![
                    Task {
                        budget: Some("₪ 2.5M".to_string()),
                        ..task("t1", x.t("שיפוץ כביש מרכזי", "Road Renovation"), "Dana Levi", "20/12", TaskPriority::High, vec![x.t("דחוף", "Urgent")])
                    },
                    task("t2", x.t("התקנת תאורה", "Smart Lighting"), "Moshe Cohen", "15/01", TaskPriority::Medium, vec![x.t("טכנולוגיה", "Tech")]),
                ],
            },
            BoardColumn {
                title: x.t("בתהליך", "In Progress"),
                tasks: vec![Task {
                    progress: Some(75),
                    ..task("t3", x.t("שדרוג צמתים", "Junction Upgrade"), "Sarah A", "10/12", TaskPriority::Medium, vec!["75%".to_string()])
                }],
            },
        ],
    };

    DashboardSection {
        kpis: vec![
            Kpi::new("mon1", x.t("פרויקטים פעילים", "Active Projects"), "24", x.t("+3 החודש", "+3 this month"), Trend::Up, KpiStatus::Neutral),
            Kpi::new("mon2", x.t("משימות שהושלמו", "Completed Tasks"), "89%", x.t("בזמן", "On time"), Trend::Up, KpiStatus::Good),
            Kpi::new("mon3", x.t("משימות בפיגור", "Delayed Tasks"), "7", x.t("דורשות מעקב", "Requires follow-up"), Trend::Down, KpiStatus::Warning),
            Kpi::new("mon4", x.t("צוותים פעילים", "Active Teams"), "8", x.t("תכנון עירוני", "Urban Planning"), Trend::Neutral, KpiStatus::Neutral),
        ],
        main_chart: Chart::new(x.t("התקדמות חודשית", "Monthly Progress"), ChartKind::Line, x.months(50)),
        secondary_chart: Chart::new(
            x.t("חלוקת משימות לפי סטטוס", "Task Status"),
            ChartKind::Doughnut,
            x.points(&[("הושלם", "Done", 42.0), ("בתהליך", "In Progress", 28.0), ("באישור", "Approval", 15.0), ("בפיגור", "Delayed", 15.0)]),
        ),
        third_chart: Chart::new(
            x.t("משימות לפי צוות", "Tasks by Team"),
            ChartKind::Bar,
            x.points(&[("תשתיות", "Infra", 12.0), ("תכנון", "Planning", 18.0), ("סביבה", "Env", 9.0)]),
        ),
        fourth_chart: Chart::new(
            x.t("חלוקת תקציבים", "Budget Share"),
            ChartKind::Pie,
            x.points(&[("תשתיות", "Infra", 35.0), ("סביבה", "Env", 22.0), ("חינוך", "Edu", 43.0)]),
        ),
        map_title: x.t("מפת פרויקטים", "Project Map"),
        map_markers: Vec::new(),
        map_polygons: Vec::new(),
        map_paths: Vec::new(),
        map_vehicles: Vec::new(),
        boards: vec![infra],
        support_cases: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_is_deterministic() {
        for tab in TabId::ALL {
            assert_eq!(mock_section(tab, Language::En), mock_section(tab, Language::En));
        }
    }

    #[test]
    fn test_month_series_stays_in_range() {
        let chart = mock_section(TabId::Waste, Language::En).main_chart;
        assert_eq!(chart.data.len(), 12);
        assert_eq!(chart.data[0].name, "Jan");
        for point in &chart.data {
            assert!(point.value >= 65.0 && point.value < 65.0 * 1.3);
        }
    }

    #[test]
    fn test_tabs_without_dedicated_content_share_waste_content() {
        assert_eq!(
            mock_section(TabId::Water, Language::He),
            mock_section(TabId::Waste, Language::He)
        );
        assert!(!mock_section(TabId::ProjectBoards, Language::En).boards.is_empty());
        assert_eq!(mock_section(TabId::SupportCases, Language::En).support_cases.len(), 3);
    }

    #[test]
    fn test_mock_section_is_monolingual() {
        let he = mock_section(TabId::Waste, Language::He);
        let en = mock_section(TabId::Waste, Language::En);
        assert_eq!(he.kpis[0].title, "תקן טיפול פניות");
        assert_eq!(en.kpis[0].title, "SLA Compliance");
        assert_eq!(en.secondary_chart.data[0].name, "Sun");
    }
}
