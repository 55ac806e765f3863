use crate::notify::Notification;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SearchMeals { query: String },
    FetchRandom,
    LookupMeal { id: String },
    Notify(Notification),
    /// Diagnostic record for a failed request; never shown as page content.
    ReportError(String),
}
