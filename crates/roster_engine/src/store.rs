use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Response, StatusCode};
use roster_core::{NewRecord, Record, RecordId};
use roster_logging::{roster_debug, roster_trace};
use serde::de::DeserializeOwned;
use url::Url;

use crate::StoreError;

pub const DEFAULT_COLLECTION_PATH: &str = "/users";

#[derive(Debug, Clone)]
pub struct StoreSettings {
    /// Scheme, host and optional path prefix of the backend, e.g. `http://localhost:3000`.
    pub base_url: String,
    pub collection_path: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl StoreSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Absolute URL of the record collection.
    pub fn collection_url(&self) -> Result<Url, StoreError> {
        let base = self.base_url.trim().trim_end_matches('/');
        let path = self.collection_path.trim();
        let joined = if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        };
        let url = Url::parse(&joined).map_err(|err| StoreError::InvalidUrl(err.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(StoreError::InvalidUrl(format!("unsupported scheme {other}"))),
        }
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            collection_path: DEFAULT_COLLECTION_PATH.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The backend collection resource: list, create and delete.
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Record>, StoreError>;

    async fn create(&self, record: &NewRecord) -> Result<Record, StoreError>;

    async fn delete(&self, ids: &[RecordId]) -> Result<(), StoreError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestRecordStore {
    client: reqwest::Client,
    collection: Url,
}

impl ReqwestRecordStore {
    pub fn new(settings: StoreSettings) -> Result<Self, StoreError> {
        let collection = settings.collection_url()?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| StoreError::Network(err.to_string()))?;
        Ok(Self { client, collection })
    }
}

#[async_trait::async_trait]
impl RecordStore for ReqwestRecordStore {
    async fn list(&self) -> Result<Vec<Record>, StoreError> {
        roster_debug!("GET {}", self.collection);
        let response = self
            .client
            .get(self.collection.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode_json(ensure_success(response)?).await
    }

    async fn create(&self, record: &NewRecord) -> Result<Record, StoreError> {
        roster_debug!("POST {}", self.collection);
        let response = self
            .client
            .post(self.collection.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(record)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode_json(ensure_success(response)?).await
    }

    async fn delete(&self, ids: &[RecordId]) -> Result<(), StoreError> {
        roster_debug!("DELETE {} ({} id(s))", self.collection, ids.len());
        let response = self
            .client
            .delete(self.collection.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(ids)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        // Success is decided by the status line; the body is ignored.
        ensure_success(response).map(|_| ())
    }
}

fn ensure_success(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    roster_trace!("{} answered {}", response.url(), status);
    if status.is_success() {
        Ok(response)
    } else {
        Err(rejected(status))
    }
}

fn rejected(status: StatusCode) -> StoreError {
    StoreError::Rejected {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
    let bytes = response.bytes().await.map_err(map_reqwest_error)?;
    serde_json::from_slice(&bytes).map_err(|err| StoreError::Decode(err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> StoreError {
    if err.is_timeout() {
        return StoreError::Timeout(err.to_string());
    }
    if err.is_decode() {
        return StoreError::Decode(err.to_string());
    }
    StoreError::Network(err.to_string())
}
