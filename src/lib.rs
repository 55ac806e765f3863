pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod notify;
pub mod render;

pub use app::{App, Effect, Msg, SubmitLabel, UiState};
pub use client::{MealDbClient, RecipeService};
pub use config::FinderConfig;
pub use error::FinderError;
pub use model::{Ingredient, MealDetail, MealSummary, SearchQuery};
pub use notify::{ConsoleNotifier, Notification, NotificationKind, Notifier};
pub use render::{render_detail, render_page};

/// Controller wired to TheMealDB over HTTP, reporting notifications on stderr.
pub fn build_app(config: &FinderConfig) -> Result<App<MealDbClient, ConsoleNotifier>, FinderError> {
    let client = MealDbClient::new(config)?;
    Ok(App::new(client, ConsoleNotifier))
}
