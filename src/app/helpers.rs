//! Async helpers wrapping API calls for `Task::perform`
//!
//! Messages must be `Clone`, so errors cross the task boundary as their
//! rendered context chain.

use crate::api::ApiClient;
use crate::features::{ReferenceKind, WriteRequest};

fn render(e: anyhow::Error) -> String {
    format!("{:#}", e)
}

/// Load the customer collection
pub async fn fetch_customers(api: ApiClient) -> Result<Vec<crate::api::Customer>, String> {
    api.list_customers().await.map_err(render)
}

/// Load one reference list for a form's select input
pub async fn fetch_reference(api: ApiClient, kind: ReferenceKind) -> Result<Vec<String>, String> {
    let result = match kind {
        ReferenceKind::Countries => api.countries().await,
        ReferenceKind::Titles => api.titles().await,
    };
    result.map_err(render)
}

/// Issue the single write produced by a form submit
///
/// The returned record is not needed: the collection is refetched afterwards.
pub async fn write_customer(api: ApiClient, request: WriteRequest) -> Result<(), String> {
    let result = match &request {
        WriteRequest::Create(draft) => api.create_customer(draft).await,
        WriteRequest::Update { id, patch } => api.update_customer(id, patch).await,
    };
    result.map(|_| ()).map_err(render)
}

pub async fn delete_customer(api: ApiClient, id: String) -> Result<(), String> {
    api.delete_customer(&id).await.map_err(render)
}
