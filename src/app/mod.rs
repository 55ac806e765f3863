//! App controller: a pure state machine plus the async runtime that drives it.
mod delegate;
mod effect;
mod msg;
mod runtime;
mod state;
mod update;

pub use delegate::selected_item_id;
pub use effect::Effect;
pub use msg::{MealOutcome, Msg, SearchOutcome};
pub use runtime::App;
pub use state::{SubmitLabel, UiState};
pub use update::update;
