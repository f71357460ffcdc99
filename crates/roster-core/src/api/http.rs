use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response, StatusCode, Url};
use tracing::{debug, error, warn};

use super::StudentApi;
use super::errors::ApiError;
use crate::model::{Student, StudentId, StudentPayload};

const JSON_UTF8: &str = "application/json; charset=UTF-8";

/// `reqwest`-backed client for a single student collection.
#[derive(Debug, Clone)]
pub struct HttpStudentApi {
    client: Client,
    base_url: Url,
}

impl HttpStudentApi {
    /// Build a client for the collection at `base_url`.
    ///
    /// `timeout` bounds each request end to end; `None` leaves requests
    /// unbounded.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url).map_err(|e| ApiError::InvalidUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl {
                url: base_url.to_string(),
                message: "URL cannot be used as a collection base".to_string(),
            });
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ApiError::ClientBuild {
            message: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    pub fn from_config(config: &roster_config::ApiConfig) -> Result<Self, ApiError> {
        Self::new(config.base_url(), config.timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/{id}`, with the id percent-encoded as a single path segment.
    fn item_url(&self, id: &StudentId) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in `new`, so segments are always available.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id.as_str());
        }
        url
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        payload: Option<&StudentPayload>,
    ) -> Result<Response, ApiError> {
        let method_name = method_name(&method);
        debug!(event = "core.api.request_started", method = method_name, url = %url);

        let mut request = self.client.request(method, url.clone());
        if let Some(payload) = payload {
            request = request.header(CONTENT_TYPE, JSON_UTF8).json(payload);
        }

        request.send().await.map_err(|e| {
            error!(
                event = "core.api.request_failed",
                method = method_name,
                url = %url,
                error = %e
            );
            ApiError::Transport {
                method: method_name,
                url: url.to_string(),
                message: e.to_string(),
            }
        })
    }
}

/// Map a response to `Ok` only when it carries the expected status.
fn expect_status(
    response: Response,
    method: &'static str,
    expected: StatusCode,
) -> Result<Response, ApiError> {
    let status = response.status();
    if status == expected {
        debug!(event = "core.api.request_completed", method, status = status.as_u16());
        return Ok(response);
    }

    warn!(
        event = "core.api.unexpected_status",
        method,
        url = %response.url(),
        expected = expected.as_u16(),
        status = status.as_u16()
    );
    Err(ApiError::UnexpectedStatus {
        method,
        url: response.url().to_string(),
        status: status.as_u16(),
    })
}

fn method_name(method: &Method) -> &'static str {
    if *method == Method::GET {
        "GET"
    } else if *method == Method::POST {
        "POST"
    } else if *method == Method::PUT {
        "PUT"
    } else if *method == Method::DELETE {
        "DELETE"
    } else {
        "OTHER"
    }
}

impl StudentApi for HttpStudentApi {
    async fn list(&self) -> Result<Vec<Student>, ApiError> {
        let url = self.base_url.clone();
        let response = self.send(Method::GET, url.clone(), None).await?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                event = "core.api.unexpected_status",
                method = "GET",
                url = %url,
                status = status.as_u16()
            );
            return Err(ApiError::UnexpectedStatus {
                method: "GET",
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let students: Vec<Student> = response.json().await.map_err(|e| {
            error!(event = "core.api.decode_failed", url = %url, error = %e);
            ApiError::Transport {
                method: "GET",
                url: url.to_string(),
                message: e.to_string(),
            }
        })?;

        for student in students.iter().filter(|s| s.age.is_none()) {
            warn!(event = "core.api.age_unreadable", id = %student.id);
        }

        debug!(event = "core.api.list_completed", count = students.len());
        Ok(students)
    }

    async fn create(&self, payload: &StudentPayload) -> Result<(), ApiError> {
        let response = self
            .send(Method::POST, self.base_url.clone(), Some(payload))
            .await?;
        expect_status(response, "POST", StatusCode::CREATED)?;
        Ok(())
    }

    async fn update(&self, id: &StudentId, payload: &StudentPayload) -> Result<(), ApiError> {
        let response = self
            .send(Method::PUT, self.item_url(id), Some(payload))
            .await?;
        expect_status(response, "PUT", StatusCode::OK)?;
        Ok(())
    }

    async fn delete(&self, id: &StudentId) -> Result<(), ApiError> {
        let response = self.send(Method::DELETE, self.item_url(id), None).await?;
        expect_status(response, "DELETE", StatusCode::OK)?;
        Ok(())
    }
}
