use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use super::{endpoint, Backend};
use crate::error::ApiError;

/// `reqwest`-backed client; in the browser requests go through `fetch`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Url {
        endpoint(&self.base_url, path, query)
    }
}

impl Backend for HttpBackend {
    async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<Vec<T>, ApiError> {
        let url = self.endpoint(path, query);
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        read_json(response).await
    }

    async fn create<P: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &P,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path, &[]);
        debug!("POST {}", url);
        let response = self.client.post(url).json(payload).send().await?;
        read_json(response).await
    }

    async fn delete(&self, path: &str, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("{}/{}", path, id), &[]);
        debug!("DELETE {}", url);
        let response = self.client.delete(url).send().await?;
        check_status(response).await.map(|_| ())
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().clone();
    let body = response.text().await.unwrap_or_default();
    warn!("{} returned {}", url, status.as_u16());
    Err(ApiError::from_response_body(status.as_u16(), &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
