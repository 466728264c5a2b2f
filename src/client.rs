//! HTTP access to the search and submit endpoints.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::error::{ErrorBody, ErrorCode};
use crate::models::{SearchForm, SubmitForm, SubmitResponse};
use crate::paging::PageIndex;

/// Errors raised while talking to the service.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server rejected the request ({status}): {code:?}: {message}")]
    Rejected {
        status: StatusCode,
        code: ErrorCode,
        message: String,
    },
    #[error("unexpected response ({status}): {body}")]
    Unexpected { status: StatusCode, body: String },
}

impl ClientError {
    /// Whether the server rejected the page number itself.
    pub fn is_page_validation(&self) -> bool {
        matches!(self, ClientError::Rejected { code, .. } if code.is_page_validation())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Source of page contents and submission echoes.
#[async_trait]
pub trait PageBackend: Send + Sync {
    /// Fetches the numbers for `page`.
    async fn search(&self, page: PageIndex) -> ClientResult<Vec<u32>>;

    /// Submits a selection and returns the echo.
    async fn submit(&self, selected: Option<i64>) -> ClientResult<SubmitResponse>;
}

/// [`PageBackend`] over HTTP.
pub struct HttpPageBackend {
    client: reqwest::Client,
    base: Url,
}

impl HttpPageBackend {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    async fn post_form<F, T>(&self, path: &str, form: &F) -> ClientResult<T>
    where
        F: serde::Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.base.join(path)?;
        let response = self.client.post(url).form(form).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await?;
        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(error) => Err(ClientError::Rejected {
                status,
                code: error.code,
                message: error.message,
            }),
            Err(_) => Err(ClientError::Unexpected { status, body }),
        }
    }
}

#[async_trait]
impl PageBackend for HttpPageBackend {
    async fn search(&self, page: PageIndex) -> ClientResult<Vec<u32>> {
        self.post_form("search", &SearchForm::new(page)).await
    }

    async fn submit(&self, selected: Option<i64>) -> ClientResult<SubmitResponse> {
        self.post_form("submit", &SubmitForm::new(selected)).await
    }
}
