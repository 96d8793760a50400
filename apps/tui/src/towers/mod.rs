//! Tower map: wire records, filter engine, layer switches and the browse
//! session that ties them together.

pub mod blankspot;
pub mod browse;
pub mod filter;
pub mod layers;
pub mod record;

pub use blankspot::{load_blankspots, BlankspotRecord};
pub use browse::{nearest_tower, BrowseState, FetchState};
pub use filter::{visible_towers, FilterSelection};
pub use layers::{render_instruction, Layer, LayerVisibility, RenderInstruction};
pub use record::{decode_towers, TowerDecodeError, TowerId, TowerRecord};
