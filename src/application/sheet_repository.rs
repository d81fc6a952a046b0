// Repository trait for published spreadsheet access
use async_trait::async_trait;
use std::fmt;

/// The independently published tabs of the backing spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetResource {
    Kpis,
    Charts,
    MapMarkers,
    MapPolygons,
    MapPaths,
    MapVehicles,
    MondayBoards,
    Salesforce,
}

impl SheetResource {
    pub const ALL: [SheetResource; 8] = [
        SheetResource::Kpis,
        SheetResource::Charts,
        SheetResource::MapMarkers,
        SheetResource::MapPolygons,
        SheetResource::MapPaths,
        SheetResource::MapVehicles,
        SheetResource::MondayBoards,
        SheetResource::Salesforce,
    ];

    /// Name of the tab inside the spreadsheet.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            SheetResource::Kpis => "KPIs",
            SheetResource::Charts => "Charts",
            SheetResource::MapMarkers => "MapMarkers",
            SheetResource::MapPolygons => "MapPolygons",
            SheetResource::MapPaths => "MapPaths",
            SheetResource::MapVehicles => "MapVehicles",
            SheetResource::MondayBoards => "MondayBoards",
            SheetResource::Salesforce => "Salesforce",
        }
    }
}

impl fmt::Display for SheetResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sheet_name())
    }
}

#[async_trait]
pub trait SheetRepository: Send + Sync {
    /// Raw CSV text of a resource, or an empty string when it could not be
    /// obtained. Implementations never fail.
    async fn fetch_resource(&self, resource: SheetResource) -> String;
}
