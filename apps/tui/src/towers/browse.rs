use crate::api::ApiError;
use crate::domain::{GeoPoint, TowerStatus, BROWSE_MAP_ZOOM, DEFAULT_CENTER};
use crate::location::{
    reconcile, CoordinateStore, LocationEvent, MapCamera, MapExtent, MapProjection, PlaceResult,
    Reconciliation,
};
use crate::report::Notice;
use crate::towers::blankspot::BlankspotRecord;
use crate::towers::filter::FilterSelection;
use crate::towers::layers::{render_instruction, Layer, LayerVisibility, RenderInstruction};
use crate::towers::record::{TowerId, TowerRecord};
use ratatui::layout::{Position, Rect};

/// How far from a click, in columns, a tower still counts as hit. Rows count
/// double since a terminal cell is about twice as tall as it is wide.
const PICK_RADIUS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// A place picked in the browse search box.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchedPlace {
    pub label: String,
    pub point: Option<GeoPoint>,
}

#[derive(Debug, Clone)]
pub struct BrowseState {
    towers: Vec<TowerRecord>,
    blankspots: Vec<BlankspotRecord>,
    fetch: FetchState,
    filter: FilterSelection,
    layers: LayerVisibility,
    camera: MapCamera,
    panel_open: bool,
    searched: Option<SearchedPlace>,
    selected: Option<TowerId>,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowseState {
    pub fn new() -> Self {
        Self {
            towers: Vec::new(),
            blankspots: Vec::new(),
            fetch: FetchState::Idle,
            filter: FilterSelection::new(),
            layers: LayerVisibility::default(),
            camera: MapCamera::new(DEFAULT_CENTER, BROWSE_MAP_ZOOM),
            panel_open: true,
            searched: None,
            selected: None,
        }
    }

    pub fn towers(&self) -> &[TowerRecord] {
        &self.towers
    }

    pub fn blankspots(&self) -> &[BlankspotRecord] {
        &self.blankspots
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    pub fn filter(&self) -> &FilterSelection {
        &self.filter
    }

    pub fn layers(&self) -> LayerVisibility {
        self.layers
    }

    pub fn camera(&self) -> &MapCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut MapCamera {
        &mut self.camera
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn searched(&self) -> Option<&SearchedPlace> {
        self.searched.as_ref()
    }

    /// Marks a fetch as started. Returns false when one is already running
    /// or the towers are already here.
    pub fn begin_fetch(&mut self) -> bool {
        match self.fetch {
            FetchState::Loading | FetchState::Loaded => false,
            FetchState::Idle | FetchState::Failed(_) => {
                self.fetch = FetchState::Loading;
                true
            }
        }
    }

    /// Applies the outcome of a tower fetch. A failure leaves the tower layer
    /// empty and returns a notice for the user.
    pub fn finish_fetch(&mut self, result: Result<Vec<TowerRecord>, ApiError>) -> Option<Notice> {
        match result {
            Ok(towers) => {
                tracing::info!(count = towers.len(), "tower layer ready");
                self.towers = towers;
                self.selected = None;
                self.fetch = FetchState::Loaded;
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "tower fetch failed");
                self.towers.clear();
                self.selected = None;
                self.fetch = FetchState::Failed(err.to_string());
                Some(Notice::error("Gagal memuat data menara"))
            }
        }
    }

    pub fn set_blankspots(&mut self, blankspots: Vec<BlankspotRecord>) {
        self.blankspots = blankspots;
    }

    /// Operator and status checkboxes bring a hidden tower layer back.
    pub fn toggle_operator(&mut self, operator: &str) {
        self.filter.toggle_operator(operator);
        self.layers.show_towers();
    }

    pub fn toggle_status(&mut self, status: TowerStatus) {
        self.filter.toggle_status(status);
        self.layers.show_towers();
    }

    pub fn toggle_layer(&mut self, layer: Layer) {
        self.layers.toggle(layer);
    }

    pub fn toggle_panel(&mut self) {
        self.panel_open = !self.panel_open;
    }

    pub fn set_panel_open(&mut self, open: bool) {
        self.panel_open = open;
    }

    /// Centers the map on a searched place and drops a marker there. The
    /// report form's point is untouched.
    pub fn focus_place(&mut self, place: PlaceResult, extent: MapExtent) -> bool {
        let label = place.display_label().to_string();
        let mut scratch = CoordinateStore::new();
        match reconcile(
            &mut scratch,
            &mut self.camera,
            &mut (),
            LocationEvent::PlaceSelected(place),
            extent,
        ) {
            Reconciliation::Moved(point) => {
                self.searched = Some(SearchedPlace {
                    label,
                    point: Some(point),
                });
                true
            }
            Reconciliation::CameraOnly => {
                self.searched = Some(SearchedPlace { label, point: None });
                true
            }
            Reconciliation::Ignored => false,
        }
    }

    pub fn clear_search(&mut self) {
        self.searched = None;
    }

    pub fn render(&self) -> RenderInstruction<'_> {
        render_instruction(&self.towers, &self.filter, self.layers)
    }

    /// The tower whose details are open, as long as it is still drawn.
    pub fn selected_tower(&self) -> Option<&TowerRecord> {
        let id = self.selected.as_ref()?;
        self.render().towers.into_iter().find(|tower| &tower.id == id)
    }

    /// Opens the details of the drawn tower nearest to a clicked cell of the
    /// map `area`. A click with no tower close by closes them instead.
    pub fn select_tower_at(&mut self, area: Rect, column: u16, row: u16) -> bool {
        let projection = MapProjection::new(&self.camera, area);
        let picked = nearest_tower(
            &self.render().towers,
            &projection,
            Position::new(column, row),
            Some(PICK_RADIUS),
        )
        .map(|tower| tower.id.clone());
        self.selected = picked;
        self.selected.is_some()
    }

    /// Opens the details of the drawn tower closest to the map center.
    pub fn select_tower_near_center(&mut self, area: Rect) -> bool {
        let projection = MapProjection::new(&self.camera, area);
        let picked = projection.cell_of(self.camera.center()).and_then(|center| {
            nearest_tower(&self.render().towers, &projection, center, None)
                .map(|tower| tower.id.clone())
        });
        self.selected = picked;
        self.selected.is_some()
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

/// Closest tower on screen to `target`, measured in cells with rows weighted
/// double. Towers outside the projection are never picked; `radius` limits
/// the distance when given.
pub fn nearest_tower<'a>(
    towers: &[&'a TowerRecord],
    projection: &MapProjection,
    target: Position,
    radius: Option<u32>,
) -> Option<&'a TowerRecord> {
    towers
        .iter()
        .filter_map(|tower| {
            let cell = projection.cell_of(tower.position)?;
            let dx = u32::from(cell.x.abs_diff(target.x));
            let dy = u32::from(cell.y.abs_diff(target.y)) * 2;
            Some((dx * dx + dy * dy, *tower))
        })
        .filter(|(distance, _)| radius.is_none_or(|radius| *distance <= radius * radius))
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, tower)| tower)
}
