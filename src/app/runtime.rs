use super::{selected_item_id, update, Effect, Msg, UiState};
use crate::client::RecipeService;
use crate::notify::Notifier;
use log::{debug, error};
use std::collections::VecDeque;

/// Owns the UI state and runs the effects [`update`] asks for.
///
/// Handlers never return errors: failures end up as a danger notification and an
/// `error!` log record, and the page stays usable.
pub struct App<S, N> {
    state: UiState,
    service: S,
    notifier: N,
}

impl<S: RecipeService, N: Notifier> App<S, N> {
    pub fn new(service: S, notifier: N) -> Self {
        Self {
            state: UiState::new(),
            service,
            notifier,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Search form submitted with the raw field value.
    pub async fn on_search_submit(&mut self, raw_query: &str) {
        self.dispatch(Msg::SearchSubmitted(raw_query.to_string()))
            .await;
    }

    pub async fn on_random_requested(&mut self) {
        self.dispatch(Msg::RandomRequested).await;
    }

    pub async fn on_result_item_selected(&mut self, id: &str) {
        self.dispatch(Msg::ResultItemSelected(id.to_string())).await;
    }

    /// Click anywhere inside the result list; only tagged items trigger a lookup.
    pub async fn on_list_click(&mut self, target_selector: &str) {
        match selected_item_id(self.state.list_html(), target_selector) {
            Some(id) => self.on_result_item_selected(&id).await,
            None => debug!("Click on {:?} carries no item id", target_selector),
        }
    }

    pub async fn on_input_changed(&mut self, input: &str) {
        self.dispatch(Msg::InputChanged(input.to_string())).await;
    }

    /// Apply a message and keep feeding request completions back until nothing is pending.
    pub async fn dispatch(&mut self, msg: Msg) {
        let mut pending = VecDeque::from([msg]);
        while let Some(msg) = pending.pop_front() {
            let (next, effects) = update(std::mem::take(&mut self.state), msg);
            self.state = next;
            for effect in effects {
                if let Some(reply) = self.run(effect).await {
                    pending.push_back(reply);
                }
            }
        }
    }

    async fn run(&self, effect: Effect) -> Option<Msg> {
        match effect {
            Effect::SearchMeals { query } => {
                debug!("Searching for {:?}", query);
                let outcome = self
                    .service
                    .search(&query)
                    .await
                    .map_err(|e| e.to_string());
                Some(Msg::SearchCompleted { query, outcome })
            }
            Effect::FetchRandom => {
                debug!("Fetching random meal");
                let outcome = self
                    .service
                    .random()
                    .await
                    .map(Some)
                    .map_err(|e| e.to_string());
                Some(Msg::MealLoaded(outcome))
            }
            Effect::LookupMeal { id } => {
                debug!("Looking up meal {}", id);
                let outcome = self.service.lookup(&id).await.map_err(|e| e.to_string());
                Some(Msg::MealLoaded(outcome))
            }
            Effect::Notify(notification) => {
                self.notifier.notify(&notification);
                None
            }
            Effect::ReportError(message) => {
                error!("Request failed: {}", message);
                None
            }
        }
    }
}
