use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use super::types::{Character, CharacterId, Ship};

/// The backend of the catalog service the exercise ships with.
const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// The two endpoints the catalog service exposes. This is the seam for test
/// doubles; production code goes through [`HttpApi`].
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn characters(&self) -> Result<Vec<Character>, String>;

    /// The backend answers an empty JSON object for an unknown id. That is
    /// mapped to `Ok(None)` and treated as data, not as an error.
    async fn character(&self, id: CharacterId) -> Result<Option<Character>, String>;
}

#[derive(Clone)]
pub struct Model {
    pub base_url: String,
    client: Arc<dyn CatalogApi>,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model").finish()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL.to_string())
    }
}

impl Model {
    pub fn new(base_url: String) -> Self {
        let client = HttpApi::new(base_url.clone());
        Self {
            base_url,
            client: Arc::new(client),
        }
    }

    /// Swap in a different transport, e.g. an in-memory double.
    pub fn with_api(base_url: String, client: Arc<dyn CatalogApi>) -> Self {
        Self { base_url, client }
    }

    pub async fn characters(&self) -> Result<Vec<Character>, String> {
        self.client.characters().await
    }

    pub async fn character(&self, id: CharacterId) -> Result<Option<Character>, String> {
        self.client.character(id).await
    }

    /// Fetches all characters and projects each to its ship.
    pub async fn ships(&self) -> Result<Vec<Ship>, String> {
        let characters = self.client.characters().await?;
        Ok(characters.iter().map(Character::ship).collect())
    }
}

pub struct HttpApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpApi {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, String> {
        Url::parse(&self.base_url)
            .and_then(|base| base.join(path))
            .string_error("endpoint")
    }
}

#[async_trait]
impl CatalogApi for HttpApi {
    async fn characters(&self) -> Result<Vec<Character>, String> {
        let url = self.endpoint("characters")?;
        self.http
            .get(url)
            .send()
            .await
            .string_error("characters")?
            .error_for_status()
            .string_error("characters")?
            .json::<Vec<Character>>()
            .await
            .string_error("characters")
    }

    async fn character(&self, id: CharacterId) -> Result<Option<Character>, String> {
        let url = self.endpoint(&format!("character/{id}"))?;
        let value: serde_json::Value = self
            .http
            .get(url)
            .send()
            .await
            .string_error("character")?
            .error_for_status()
            .string_error("character")?
            .json()
            .await
            .string_error("character")?;
        if value.as_object().map_or(false, |object| object.is_empty()) {
            return Ok(None);
        }
        serde_json::from_value(value)
            .map(Some)
            .string_error("character")
    }
}

trait ResultExt {
    type Output;
    fn string_error(self, call: &'static str) -> Result<Self::Output, String>;
}

impl<T, E: std::fmt::Debug> ResultExt for Result<T, E> {
    type Output = T;
    fn string_error(self, call: &'static str) -> Result<T, String> {
        self.map_err(|e| {
            let string_error = format!("API Error: {call} {e:?}");
            log::error!("{string_error}");
            string_error
        })
    }
}
