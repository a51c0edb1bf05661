//! HTTP client for the language portal backend.

use std::marker::PhantomData;
use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::domain::entity::Entity;
use crate::domain::study_session::{NewStudySession, NewWordReview, StudySession, WordReview};
use crate::domain::types::{StudySessionId, WordId};
use crate::domain::word::Word;
use crate::dto::page::{PageRequest, PageResponse, WirePage};
use crate::fetch::errors::FetchError;
use crate::fetch::{DatasetFetcher, PageFetcher};

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Malformed(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

/// Builds the shared HTTP client with a request timeout.
pub fn build_http_client(timeout: Duration) -> Result<Client, FetchError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| FetchError::Network(format!("Failed to create client with error: {e}")))
}

/// Thin client over the backend REST API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    page_size: usize,
}

impl ApiClient {
    /// `page_size` is the backend's fixed page size; page responses that
    /// disagree with it are rejected.
    pub fn new(base_url: &str, timeout: Duration, page_size: usize) -> Result<Self, FetchError> {
        // Without a trailing slash `Url::join` would replace the last segment.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| FetchError::Network(format!("Invalid backend url {base_url}: {e}")))?;

        Ok(Self {
            client: build_http_client(timeout)?,
            base_url,
            page_size,
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    fn url(&self, path: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(path)
            .map_err(|e| FetchError::Network(format!("Invalid path {path}: {e}")))
    }

    /// Fetches one page of a paginated collection.
    pub async fn get_page<T>(&self, path: &str, page: usize) -> Result<PageResponse<T>, FetchError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        log::debug!("GET {url}?page={page}");

        let response = self.client.get(url).query(&[("page", page)]).send().await?;
        let body = checked(response).await?.bytes().await?;

        serde_json::from_slice::<WirePage<T>>(&body)
            .map_err(|e| FetchError::Malformed(e.to_string()))?
            .into_page(self.page_size)
    }

    /// Fetches a collection the backend returns as a plain array.
    pub async fn get_list<T>(&self, path: &str) -> Result<Vec<T>, FetchError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        log::debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        let body = checked(response).await?.bytes().await?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Malformed(e.to_string()))
    }

    pub async fn get_word(&self, id: WordId) -> Result<Word, FetchError> {
        let url = self.url(&format!("words/{id}"))?;
        log::debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        let body = checked(response).await?.bytes().await?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Malformed(e.to_string()))
    }

    pub async fn create_study_session(
        &self,
        new_session: &NewStudySession,
    ) -> Result<StudySession, FetchError> {
        let url = self.url(&Entity::StudySessions.path())?;
        log::debug!("POST {url}");

        let response = self.client.post(url).json(new_session).send().await?;
        let body = checked(response).await?.bytes().await?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Malformed(e.to_string()))
    }

    pub async fn log_review(
        &self,
        session_id: StudySessionId,
        review: &NewWordReview,
    ) -> Result<WordReview, FetchError> {
        let url = self.url(&format!("study_sessions/{session_id}/review"))?;
        log::debug!("POST {url}");

        let response = self.client.post(url).json(review).send().await?;
        let body = checked(response).await?.bytes().await?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

/// Turns non-2xx responses into [`FetchError::Status`].
async fn checked(response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    log::error!("Backend request failed with {status}: {message}");
    Err(FetchError::Status {
        status: status.as_u16(),
        message: message.trim().to_string(),
    })
}

/// Pages of one backend entity.
pub struct ApiFetcher<R> {
    api: ApiClient,
    entity: Entity,
    _record: PhantomData<fn() -> R>,
}

impl<R> ApiFetcher<R> {
    pub fn new(api: ApiClient, entity: Entity) -> Self {
        Self {
            api,
            entity,
            _record: PhantomData,
        }
    }
}

impl<R: DeserializeOwned> PageFetcher for ApiFetcher<R> {
    type Record = R;

    async fn fetch_page(&self, request: PageRequest) -> Result<PageResponse<R>, FetchError> {
        self.api.get_page(&self.entity.path(), request.page).await
    }
}

/// A whole backend entity that is not paginated server-side.
pub struct ApiDataset<R> {
    api: ApiClient,
    entity: Entity,
    _record: PhantomData<fn() -> R>,
}

impl<R> ApiDataset<R> {
    pub fn new(api: ApiClient, entity: Entity) -> Self {
        Self {
            api,
            entity,
            _record: PhantomData,
        }
    }
}

impl<R: DeserializeOwned> DatasetFetcher for ApiDataset<R> {
    type Record = R;

    async fn fetch_all(&self) -> Result<Vec<R>, FetchError> {
        self.api.get_list(&self.entity.path()).await
    }
}
