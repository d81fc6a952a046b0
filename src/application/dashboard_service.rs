// Dashboard service - Use case for syncing a tab with the published sheets
use crate::application::mock_data::mock_section;
use crate::application::section_assembler::{assemble, SheetRows};
use crate::application::sheet_repository::{SheetRepository, SheetResource};
use crate::domain::dashboard::{AssembledSection, DashboardSection, SectionProvenance};
use crate::domain::geo::LatLng;
use crate::domain::tab::{Language, TabId};
use crate::infrastructure::csv_rows::parse_rows;
use futures::future::join_all;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// The section currently shown for one (tab, language) selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub tab: TabId,
    pub lang: Language,
    pub is_live: bool,
    pub provenance: SectionProvenance,
    pub section: DashboardSection,
    pub synced_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    Applied(DashboardSnapshot),
    /// A newer sync started while this one was running; its result was dropped.
    Superseded,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehiclePosition {
    pub id: String,
    pub position: LatLng,
}

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn SheetRepository>,
    animation_tick: Duration,
    generation: Arc<AtomicU64>,
    current: Arc<RwLock<Option<DashboardSnapshot>>>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn SheetRepository>, animation_tick: Duration) -> Self {
        Self {
            repository,
            animation_tick,
            generation: Arc::new(AtomicU64::new(0)),
            current: Arc::new(RwLock::new(None)),
        }
    }

    /// Fetch every sheet concurrently and assemble the live section.
    /// `None` means there is no live data for the tab.
    pub async fn fetch_sheet_data(&self, tab: TabId, lang: Language) -> Option<AssembledSection> {
        let start = Instant::now();
        let texts = join_all(SheetResource::ALL.into_iter().map(|resource| {
            let repo = self.repository.clone();
            async move { (resource, repo.fetch_resource(resource).await) }
        }))
        .await;

        tracing::debug!("Fetched {} sheets in {:?}", texts.len(), start.elapsed());
        assemble(tab, lang, &rows_from_texts(texts))
    }

    /// Refresh the shown section for `tab`/`lang`. The newest call wins:
    /// a sync that finishes after a later one has started is discarded.
    pub async fn sync(&self, tab: TabId, lang: Language) -> SyncOutcome {
        let generation = self.begin();
        let snapshot = self.build_snapshot(tab, lang).await;
        self.commit(generation, snapshot).await
    }

    pub async fn current(&self) -> Option<DashboardSnapshot> {
        self.current.read().await.clone()
    }

    /// Vehicle positions of the current section after `elapsed` of animation.
    pub async fn vehicle_positions(&self, elapsed: Duration) -> Vec<VehiclePosition> {
        let current = self.current.read().await;
        current
            .iter()
            .flat_map(|snapshot| snapshot.section.map_vehicles.iter())
            .map(|v| VehiclePosition {
                id: v.id.clone(),
                position: v.position_at(elapsed, self.animation_tick),
            })
            .collect()
    }

    fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn build_snapshot(&self, tab: TabId, lang: Language) -> DashboardSnapshot {
        let (is_live, provenance, section) = match self.fetch_sheet_data(tab, lang).await {
            Some(assembled) => (true, assembled.provenance, assembled.section),
            None => {
                let section = mock_section(tab, lang);
                (false, SectionProvenance::of_mock(&section), section)
            }
        };

        DashboardSnapshot {
            tab,
            lang,
            is_live,
            provenance,
            section,
            synced_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    async fn commit(&self, generation: u64, snapshot: DashboardSnapshot) -> SyncOutcome {
        let mut current = self.current.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::info!(
                "Discarding superseded sync of tab {} ({})",
                snapshot.tab,
                snapshot.lang.as_str()
            );
            return SyncOutcome::Superseded;
        }

        tracing::info!(
            "Synced tab {} ({}) from {} data",
            snapshot.tab,
            snapshot.lang.as_str(),
            if snapshot.is_live { "live" } else { "mock" }
        );
        *current = Some(snapshot.clone());
        SyncOutcome::Applied(snapshot)
    }
}

fn rows_from_texts(texts: Vec<(SheetResource, String)>) -> SheetRows {
    let mut rows = SheetRows::default();
    for (resource, text) in texts {
        let parsed = parse_rows(&text);
        tracing::debug!("Sheet {}: {} rows", resource, parsed.len());
        let slot = match resource {
            SheetResource::Kpis => &mut rows.kpis,
            SheetResource::Charts => &mut rows.charts,
            SheetResource::MapMarkers => &mut rows.map_markers,
            SheetResource::MapPolygons => &mut rows.map_polygons,
            SheetResource::MapPaths => &mut rows.map_paths,
            SheetResource::MapVehicles => &mut rows.map_vehicles,
            SheetResource::MondayBoards => &mut rows.boards,
            SheetResource::Salesforce => &mut rows.support_cases,
        };
        *slot = parsed;
    }
    rows
}
