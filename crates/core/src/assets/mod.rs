//! Team asset domain model and demo fixtures.

mod mock_data;
mod types;

pub use mock_data::demo_team_assets;
pub use types::TeamAssets;
