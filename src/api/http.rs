//! HTTP implementation of [`TodoApi`] on top of `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use super::{ApiError, TodoApi};
use crate::entities::{NewTodo, Todo, TodoId, TodoPatch, UserId};

const USER_AGENT: &str = concat!("todoterm/", env!("CARGO_PKG_VERSION"));

/// Talks to a REST resource at `{base_url}/todos`.
pub struct HttpTodoApi {
    client: Client,
    base_url: Url,
}

impl HttpTodoApi {
    /// Create a client for `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| ApiError::InvalidData(format!("invalid base URL '{}': {}", base_url, e)))?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the collection, or of a single todo when `id` is given.
    fn todos_url(&self, id: Option<TodoId>) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidData(format!("base URL cannot be a base: {}", self.base_url)))?;
            segments.pop_if_empty().push("todos");
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        Ok(url)
    }

    async fn send(request: reqwest::RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| ApiError::InvalidData(e.to_string()))
    }
}

#[async_trait]
impl TodoApi for HttpTodoApi {
    async fn list_todos(&self, user_id: UserId) -> Result<Vec<Todo>, ApiError> {
        let url = self.todos_url(None)?;
        log::debug!("GET {} userId={}", url, user_id);
        let response = Self::send(self.client.get(url).query(&[("userId", user_id)])).await?;
        Self::decode(response).await
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, ApiError> {
        let url = self.todos_url(None)?;
        log::debug!("POST {} title={:?}", url, todo.title);
        let response = Self::send(self.client.post(url).json(todo)).await?;
        Self::decode(response).await
    }

    async fn delete_todo(&self, id: TodoId) -> Result<(), ApiError> {
        let url = self.todos_url(Some(id))?;
        log::debug!("DELETE {}", url);
        Self::send(self.client.delete(url)).await?;
        Ok(())
    }

    async fn update_todo(&self, id: TodoId, patch: &TodoPatch) -> Result<Todo, ApiError> {
        let url = self.todos_url(Some(id))?;
        log::debug!("PATCH {} {:?}", url, patch);
        let response = Self::send(self.client.patch(url).json(patch)).await?;
        Self::decode(response).await
    }
}
