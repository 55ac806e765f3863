use crate::model::{MealDetail, MealSummary};

/// Result of a search as seen by the state machine. `Ok(None)` is the null-meals sentinel.
pub type SearchOutcome = Result<Option<Vec<MealSummary>>, String>;

/// Result of a random or by-id fetch.
pub type MealOutcome = Result<Option<MealDetail>, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search field.
    InputChanged(String),
    /// User submitted the search form with this raw field value.
    SearchSubmitted(String),
    /// User pressed the random button.
    RandomRequested,
    /// User clicked a result list item carrying this id.
    ResultItemSelected(String),
    /// The search request finished.
    SearchCompleted {
        query: String,
        outcome: SearchOutcome,
    },
    /// A random or lookup request finished.
    MealLoaded(MealOutcome),
}
