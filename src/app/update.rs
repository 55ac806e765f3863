use super::{Effect, Msg, SubmitLabel, UiState};
use crate::model::SearchQuery;
use crate::notify::{Notification, EMPTY_QUERY_MESSAGE, FAILURE_MESSAGE, NO_RESULTS_MESSAGE};
use crate::render::{render_detail, render_heading, render_list};
use crate::FinderError;

/// Pure update function: applies a message to state and returns any effects.
///
/// Every request-issuing message reveals the panel up front; every failed completion
/// hides it again, restores the idle label and reports the error.
pub fn update(mut state: UiState, msg: Msg) -> (UiState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(input) => {
            state.set_search_input(input);
            Vec::new()
        }
        Msg::SearchSubmitted(raw) => {
            state.set_detail(String::new());
            let parsed = SearchQuery::parse(&raw);
            state.set_search_input(raw);
            let Ok(query) = parsed else {
                return notify(state, Notification::warning(EMPTY_QUERY_MESSAGE));
            };
            state.set_submit_label(SubmitLabel::Busy);
            state.show_panel();
            vec![Effect::SearchMeals {
                query: query.into_inner(),
            }]
        }
        Msg::RandomRequested => {
            state.show_panel();
            state.clear_results();
            vec![Effect::FetchRandom]
        }
        Msg::ResultItemSelected(id) => {
            if id.is_empty() {
                Vec::new()
            } else {
                state.show_panel();
                vec![Effect::LookupMeal { id }]
            }
        }
        Msg::SearchCompleted { query, outcome } => {
            state.set_submit_label(SubmitLabel::Idle);
            match outcome {
                Ok(Some(meals)) => {
                    state.set_heading(render_heading(&query));
                    state.set_list(render_list(&meals));
                    state.reset_form();
                    Vec::new()
                }
                Ok(None) => {
                    state.clear_results();
                    state.reset_form();
                    return notify(state, Notification::danger(NO_RESULTS_MESSAGE));
                }
                Err(error) => return fail(state, error),
            }
        }
        Msg::MealLoaded(outcome) => match outcome {
            Ok(Some(detail)) => {
                state.set_detail(render_detail(&detail));
                Vec::new()
            }
            Ok(None) => return fail(state, FinderError::NoResults.to_string()),
            Err(error) => return fail(state, error),
        },
    };

    (state, effects)
}

fn notify(mut state: UiState, notification: Notification) -> (UiState, Vec<Effect>) {
    state.set_notification(notification.clone());
    (state, vec![Effect::Notify(notification)])
}

fn fail(mut state: UiState, error: String) -> (UiState, Vec<Effect>) {
    state.hide_panel();
    state.set_submit_label(SubmitLabel::Idle);
    let (state, mut effects) = notify(state, Notification::danger(FAILURE_MESSAGE));
    effects.push(Effect::ReportError(error));
    (state, effects)
}
