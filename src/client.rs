use crate::config::FinderConfig;
use crate::model::{MealDetail, MealRecord, MealSummary, MealsEnvelope};
use crate::FinderError;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// The three read-only lookups the UI needs from the recipe database
#[async_trait]
pub trait RecipeService: Send + Sync {
    /// Keyword search. `Ok(None)` means the service reported no matches.
    async fn search(&self, query: &str) -> Result<Option<Vec<MealSummary>>, FinderError>;

    /// One random recipe.
    async fn random(&self) -> Result<MealDetail, FinderError>;

    /// Full recipe by id. `Ok(None)` means the id is unknown.
    async fn lookup(&self, id: &str) -> Result<Option<MealDetail>, FinderError>;
}

/// HTTP client for TheMealDB JSON API
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(config: &FinderConfig) -> Result<Self, FinderError> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<Vec<T>>, FinderError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        let envelope: MealsEnvelope<T> = response.json().await?;
        Ok(envelope.meals)
    }
}

#[async_trait]
impl RecipeService for MealDbClient {
    async fn search(&self, query: &str) -> Result<Option<Vec<MealSummary>>, FinderError> {
        let meals = self.get::<MealSummary>("search.php", &[("s", query)]).await?;
        debug!(
            "Search for {:?} returned {} meals",
            query,
            meals.as_ref().map_or(0, Vec::len)
        );
        Ok(meals)
    }

    async fn random(&self) -> Result<MealDetail, FinderError> {
        self.get::<MealRecord>("random.php", &[])
            .await?
            .and_then(|meals| meals.into_iter().next())
            .map(MealDetail::from)
            .ok_or_else(|| {
                FinderError::MalformedResponse("random.php returned no meal".to_string())
            })
    }

    async fn lookup(&self, id: &str) -> Result<Option<MealDetail>, FinderError> {
        let meals = self.get::<MealRecord>("lookup.php", &[("i", id)]).await?;
        Ok(meals
            .and_then(|meals| meals.into_iter().next())
            .map(MealDetail::from))
    }
}
