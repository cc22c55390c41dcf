//! Dog CEO image API client.
//!
//! `GET {base}/breed/{breed}/images` answers `{ "message": [...], "status": "success" }`
//! for a known breed. Unknown breeds get HTTP 404 with a JSON body whose
//! `status` is `"error"` and whose `message` is free text, so the body is
//! decoded regardless of HTTP status and the caller decides on `status`.

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

/// `message` is a URL list on success and a sentence on error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ApiMessage {
    Images(Vec<String>),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BreedImagesResponse {
    pub message: ApiMessage,
    pub status: ApiStatus,
}

impl BreedImagesResponse {
    /// Image URLs in API order, or `None` when the API reported an error.
    pub fn into_images(self) -> Option<Vec<String>> {
        match (self.status, self.message) {
            (ApiStatus::Success, ApiMessage::Images(images)) => Some(images),
            (ApiStatus::Success, ApiMessage::Text(_)) => Some(Vec::new()),
            (ApiStatus::Error, _) => None,
        }
    }
}

/// Where breed image lists come from.
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
pub trait ImageSource {
    fn breed_images<'a>(
        &'a self,
        breed: &'a str,
    ) -> LocalBoxFuture<'a, Result<BreedImagesResponse, ApiError>>;
}

#[derive(Debug, Clone)]
pub struct DogApiClient {
    client: Client,
    base_url: String,
}

impl DogApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn images_url(&self, breed: &str) -> String {
        format!("{}/breed/{}/images", self.base_url, breed)
    }

    pub async fn fetch_breed_images(&self, breed: &str) -> Result<BreedImagesResponse, ApiError> {
        let url = self.images_url(breed);
        debug!(url = %url, "fetching breed images");

        let resp = self.client.get(&url).send().await?;
        let http_status = resp.status().as_u16();
        let body: BreedImagesResponse = resp.json().await?;

        debug!(
            breed = breed,
            http_status = http_status,
            status = ?body.status,
            "breed images response"
        );
        Ok(body)
    }
}

impl ImageSource for DogApiClient {
    fn breed_images<'a>(
        &'a self,
        breed: &'a str,
    ) -> LocalBoxFuture<'a, Result<BreedImagesResponse, ApiError>> {
        self.fetch_breed_images(breed).boxed_local()
    }
}
