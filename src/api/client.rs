//! REST client for the customer backend
//!
//! Every request goes to a single configured base URL. Non-2xx responses are
//! turned into errors so callers only ever branch on `Result`.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, Method, Response, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::model::{Customer, CustomerPatch, NewCustomer};

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

const CUSTOMERS_PATH: &str = "/customers";
const COUNTRIES_PATH: &str = "/countries";
const TITLES_PATH: &str = "/titles";

/// Thin typed wrapper over `reqwest::Client`; clones share the connection pool
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Arc<str>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("client", &"<HttpClient>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
                Client::new()
            });
        Self {
            client,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Path of one customer; the id is a single encoded segment
    fn customer_path(id: &str) -> String {
        format!("{}/{}", CUSTOMERS_PATH, urlencoding::encode(id))
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response> {
        let url = self.url(path);
        debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(header::ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| anyhow!("{} {} failed: {}", method, path, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("{} {} returned {}", method, path, status));
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send::<()>(Method::GET, path, None).await?;
        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to decode response of GET {}", path))
    }

    /// Decode an optional record body; json-server style backends always send one,
    /// but an empty 2xx is still a success.
    async fn read_record(response: Response, what: &str) -> Result<Option<Customer>> {
        let body = response
            .text()
            .await
            .map_err(|e| anyhow!("Failed to read response: {}", e))?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&body)
            .map(Some)
            .with_context(|| format!("Failed to decode {} response", what))
    }

    /// Rows that do not decode (e.g. no id to address them by) are skipped
    pub async fn list_customers(&self) -> Result<Vec<Customer>> {
        let rows: Vec<serde_json::Value> = self.get_json(CUSTOMERS_PATH).await?;
        Ok(decode_rows(rows))
    }

    pub async fn countries(&self) -> Result<Vec<String>> {
        self.get_json(COUNTRIES_PATH).await
    }

    pub async fn titles(&self) -> Result<Vec<String>> {
        self.get_json(TITLES_PATH).await
    }

    pub async fn create_customer(&self, customer: &NewCustomer) -> Result<Option<Customer>> {
        let response = self
            .send(Method::POST, CUSTOMERS_PATH, Some(customer))
            .await?;
        Self::read_record(response, "create").await
    }

    pub async fn update_customer(
        &self,
        id: &str,
        patch: &CustomerPatch,
    ) -> Result<Option<Customer>> {
        let response = self
            .send(Method::PATCH, &Self::customer_path(id), Some(patch))
            .await?;
        Self::read_record(response, "update").await
    }

    pub async fn delete_customer(&self, id: &str) -> Result<()> {
        self.send::<()>(Method::DELETE, &Self::customer_path(id), None)
            .await?;
        Ok(())
    }
}

fn decode_rows(rows: Vec<serde_json::Value>) -> Vec<Customer> {
    let total = rows.len();
    let customers: Vec<Customer> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value(row) {
            Ok(customer) => Some(customer),
            Err(e) => {
                warn!("Skipping customer row {}: {}", index, e);
                None
            }
        })
        .collect();
    if customers.len() < total {
        warn!("{} of {} customer rows were malformed", total - customers.len(), total);
    }
    customers
}
