use crate::FinderError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

/// Highest `strIngredientN` / `strMeasureN` index the service ever fills in.
pub const MAX_INGREDIENTS: usize = 20;

/// A trimmed, non-empty search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Result<Self, FinderError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FinderError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Response wrapper shared by every endpoint. `meals` is `null` when nothing matched.
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

/// Minimal shape used to render the result list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default, deserialize_with = "null_as_empty")]
    pub thumbnail_url: String,
}

/// Full recipe record as the service sends it.
///
/// The indexed ingredient and measure columns are not named individually; they stay in
/// `fields` and are read back with [`MealRecord::ingredient`] and [`MealRecord::measure`].
#[derive(Debug, Clone, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl MealRecord {
    /// Ingredient name at `index` (1-based), only when it is a non-empty string.
    pub fn ingredient(&self, index: usize) -> Option<&str> {
        self.fields
            .get(&format!("strIngredient{index}"))
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    pub fn measure(&self, index: usize) -> Option<&str> {
        self.fields
            .get(&format!("strMeasure{index}"))
            .and_then(Value::as_str)
    }

    /// Scan indices 1..=20 and stop at the first missing ingredient name.
    ///
    /// A hole ends the scan: populated indices after it are never read.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=MAX_INGREDIENTS)
            .map_while(|index| {
                self.ingredient(index).map(|name| Ingredient {
                    name: name.to_string(),
                    measure: self.measure(index).unwrap_or_default().to_string(),
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.measure)
    }
}

/// Everything the detail view shows for one recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealDetail {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    /// `None` when the service sent null or an empty string
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: String,
    pub ingredients: Vec<Ingredient>,
}

impl From<MealRecord> for MealDetail {
    fn from(record: MealRecord) -> Self {
        let ingredients = record.ingredients();
        MealDetail {
            id: record.id,
            name: record.name,
            thumbnail_url: record.thumbnail_url.unwrap_or_default(),
            category: record.category.filter(|c| !c.is_empty()),
            area: record.area.filter(|a| !a.is_empty()),
            instructions: record.instructions.unwrap_or_default(),
            ingredients,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
