//! Remote user directory client.
//!
//! `UserDirectory` is the seam between the synchronizer and the REST API;
//! `HttpUserDirectory` is the production implementation. Responses are parsed
//! into explicit shapes at this boundary; nothing downstream trusts field
//! presence.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::models::{NewUser, UserId, UserRecord};
use crate::util::compact_text;

/// Operations the remote user directory exposes.
#[allow(async_fn_in_trait)]
pub trait UserDirectory {
    /// Fetch the full collection, in server order
    async fn list(&self) -> Result<Vec<UserRecord>>;

    /// Fetch a single record by ID
    async fn get(&self, id: UserId) -> Result<UserRecord>;

    /// Create a record; the directory assigns the ID
    async fn create(&self, user: &NewUser) -> Result<UserRecord>;

    /// Replace an existing record's fields
    async fn update(&self, id: UserId, user: &NewUser) -> Result<UserRecord>;

    /// Delete a record; success is any 2xx status, body ignored
    async fn delete(&self, id: UserId) -> Result<()>;
}

/// HTTP+JSON implementation of `UserDirectory`.
#[derive(Clone)]
pub struct HttpUserDirectory {
    config: ApiConfig,
    client: reqwest::Client,
}

impl HttpUserDirectory {
    /// Create a directory client for the configured endpoint.
    pub fn new(config: ApiConfig) -> Result<Self> {
        Ok(Self {
            config,
            client: reqwest::Client::builder().build()?,
        })
    }

    async fn read_success_body(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(Error::Api {
                status: status.as_u16(),
                message: parse_api_error(status, &body),
            })
        }
    }
}

impl UserDirectory for HttpUserDirectory {
    async fn list(&self) -> Result<Vec<UserRecord>> {
        let response = self
            .client
            .get(self.config.collection_url())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let body = Self::read_success_body(response).await?;
        parse_records(&body)
    }

    async fn get(&self, id: UserId) -> Result<UserRecord> {
        let response = self
            .client
            .get(self.config.record_url(id))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let body = Self::read_success_body(response).await?;
        parse_record(&body)
    }

    async fn create(&self, user: &NewUser) -> Result<UserRecord> {
        let response = self
            .client
            .post(self.config.collection_url())
            .json(user)
            .send()
            .await?;
        let body = Self::read_success_body(response).await?;
        parse_record(&body)
    }

    async fn update(&self, id: UserId, user: &NewUser) -> Result<UserRecord> {
        let response = self
            .client
            .put(self.config.record_url(id))
            .json(user)
            .send()
            .await?;
        let body = Self::read_success_body(response).await?;
        parse_record(&body)
    }

    async fn delete(&self, id: UserId) -> Result<()> {
        let response = self.client.delete(self.config.record_url(id)).send().await?;
        Self::read_success_body(response).await?;
        Ok(())
    }
}

/// Parse a collection listing from a raw JSON payload.
///
/// Public for testability — callers can exercise parsing without network
/// access.
pub fn parse_records(payload: &str) -> Result<Vec<UserRecord>> {
    serde_json::from_str(payload)
        .map_err(|error| Error::InvalidPayload(format!("expected a user array: {error}")))
}

fn parse_record(payload: &str) -> Result<UserRecord> {
    serde_json::from_str(payload)
        .map_err(|error| Error::InvalidPayload(format!("expected a user record: {error}")))
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = payload.message.or(payload.error) {
            return message.trim().to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        compact_text(trimmed)
    }
}
