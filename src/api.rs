use std::time::Duration;

use url::Url;

use crate::error::{AppError, AppResult};
use crate::models::{Drink, DrinkResponse, first_drink};

pub const DEFAULT_API_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";

/// Read-only client for TheCocktailDB.
#[derive(Debug, Clone)]
pub struct CocktailClient {
    http: reqwest::Client,
    base: Url,
}

impl CocktailClient {
    /// # Errors
    ///
    /// Will return err if `base` is not a valid URL or the HTTP client can't be built
    pub fn new(base: &str, timeout: Duration) -> AppResult<Self> {
        // keep the last path segment when joining ("…/v1/1" + "search.php")
        let base = Url::parse(&format!("{}/", base.trim_end_matches('/')))?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Search drinks by name. A blank query is answered locally with no drinks.
    ///
    /// # Errors
    ///
    /// Will return err if the request fails or the body isn't a drinks payload
    pub async fn search(&self, query: &str) -> AppResult<DrinkResponse> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(DrinkResponse::default());
        }
        self.get_json("search.php", "s", query).await
    }

    /// Look a drink up by id. A blank id is answered locally with no drinks.
    ///
    /// # Errors
    ///
    /// Will return err if the request fails or the body isn't a drinks payload
    pub async fn lookup(&self, id: &str) -> AppResult<DrinkResponse> {
        let id = id.trim();
        if id.is_empty() {
            return Ok(DrinkResponse::default());
        }
        self.get_json("lookup.php", "i", id).await
    }

    /// Lookup plus normalization, `None` when the id is unknown.
    ///
    /// # Errors
    ///
    /// Will return err if the lookup request fails
    pub async fn drink_details(&self, id: &str) -> AppResult<Option<Drink>> {
        let response = self.lookup(id).await?;
        Ok(first_drink(response).map(|raw| Drink::from_raw(&raw)))
    }

    async fn get_json(&self, endpoint: &str, param: &str, value: &str) -> AppResult<DrinkResponse> {
        let mut url = self.base.join(endpoint)?;
        url.query_pairs_mut().append_pair(param, value);
        tracing::debug!(%url, "cocktaildb request");

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            // the body is only context for the error
            return Err(AppError::Upstream {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }
        let text = resp.text().await?;

        // the API answers "no results" with an empty body on some endpoints
        if text.trim().is_empty() {
            return Ok(DrinkResponse::default());
        }
        let parsed: DrinkResponse = serde_json::from_str(&text)?;
        tracing::debug!(drinks = parsed.drinks().len(), "cocktaildb response");
        Ok(parsed)
    }
}
