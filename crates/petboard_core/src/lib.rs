//! Petboard core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{normalize_api_base, AppState, PetRecord, DEFAULT_API_BASE};
pub use update::update;
pub use view_model::{AppViewModel, PetCardView};
