//! Shared helpers for the integration tests.
#![allow(dead_code)]

use meal_finder::{App, FinderConfig, MealDbClient, Notification, Notifier};
use std::sync::Mutex;

/// Keeps every notification it is asked to show.
#[derive(Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn seen(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.seen.lock().unwrap().push(notification.clone());
    }
}

pub fn app_for(server: &mockito::Server) -> App<MealDbClient, RecordingNotifier> {
    let client = MealDbClient::new(&FinderConfig::with_base_url(server.url())).unwrap();
    App::new(client, RecordingNotifier::default())
}

pub fn client_for(server: &mockito::Server) -> MealDbClient {
    MealDbClient::new(&FinderConfig::with_base_url(server.url())).unwrap()
}

pub const ENCHILADA_SEARCH: &str = r#"{
    "meals": [
        {
            "idMeal": "52",
            "strMeal": "Chicken Enchilada",
            "strMealThumb": "url1"
        }
    ]
}"#;

pub const NULL_MEALS: &str = r#"{"meals": null}"#;

pub const SALT_ONLY_MEAL: &str = r#"{
    "meals": [
        {
            "idMeal": "52",
            "strMeal": "Chicken Enchilada",
            "strMealThumb": "url1",
            "strCategory": "Chicken",
            "strArea": "Mexican",
            "strInstructions": "Roll and bake.",
            "strIngredient1": "Salt",
            "strMeasure1": "1 tsp",
            "strIngredient2": null,
            "strMeasure2": null,
            "strIngredient3": "Pepper",
            "strMeasure3": "pinch"
        }
    ]
}"#;

pub const NO_CATEGORY_MEAL: &str = r#"{
    "meals": [
        {
            "idMeal": "77",
            "strMeal": "Mystery Stew",
            "strMealThumb": "url77",
            "strCategory": "",
            "strArea": null,
            "strInstructions": "Simmer.",
            "strIngredient1": "Water",
            "strMeasure1": "1l",
            "strIngredient2": "Stone",
            "strMeasure2": "1"
        }
    ]
}"#;

pub const CHICKEN_SEARCH: &str = r#"{
    "meals": [
        { "idMeal": "52795", "strMeal": "Chicken Handi", "strMealThumb": "thumb-a" },
        { "idMeal": "52956", "strMeal": "Chicken Congee", "strMealThumb": "thumb-b" },
        { "idMeal": "52940", "strMeal": "Brown Stew Chicken", "strMealThumb": "thumb-c" }
    ]
}"#;
