/**
 * Board API Client
 *
 * Async HTTP client for the taskboard API. After `login` the client holds
 * the session and sends it as a bearer token on every protected call.
 */

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use uuid::Uuid;

use crate::client::error::ClientError;
use crate::client::session::Session;
use crate::shared::api::{
    CreateBoardRequest, CreateListRequest, CreateTaskRequest, DeletedList, DeletedTask,
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, RegisterResponse,
    UpdateBoardRequest, UpdateListRequest, UpdateProfileRequest, UpdateTaskRequest, UserEnvelope,
};
use crate::shared::validation::require_title;
use crate::shared::{Board, BoardList, ListWithTasks, PublicUser, Task};

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for one taskboard server
#[derive(Debug, Clone)]
pub struct BoardClient {
    http: Client,
    base_url: String,
    session: Option<Session>,
}

impl BoardClient {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:3000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session: None,
        }
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Forget the session; tokens are not revoked server-side
    pub fn logout(&mut self) {
        self.session = None;
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.api_url(path))
    }

    fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let session = self.session.as_ref().ok_or(ClientError::NotSignedIn)?;
        Ok(self.request(method, path).bearer_auth(session.token()))
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| status.to_string());
        tracing::debug!(status = status.as_u16(), %message, "API error");
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ClientError> {
        Self::parse(builder.send().await?).await
    }

    // === Auth ===

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterResponse, ClientError> {
        let body = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        Self::send(self.request(Method::POST, "/auth/register").json(&body)).await
    }

    /// Log in and keep the returned session
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Session, ClientError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse =
            Self::send(self.request(Method::POST, "/auth/login").json(&body)).await?;

        let session = Session::new(response.token);
        self.session = Some(session.clone());
        Ok(session)
    }

    pub async fn me(&self) -> Result<PublicUser, ClientError> {
        let envelope: UserEnvelope = Self::send(self.authed(Method::GET, "/auth/me")?).await?;
        Ok(envelope.user)
    }

    pub async fn update_me(&self, update: &UpdateProfileRequest) -> Result<PublicUser, ClientError> {
        let envelope: UserEnvelope =
            Self::send(self.authed(Method::PATCH, "/auth/me")?.json(update)).await?;
        Ok(envelope.user)
    }

    // === Boards ===

    pub async fn boards(&self) -> Result<Vec<Board>, ClientError> {
        Self::send(self.authed(Method::GET, "/boards")?).await
    }

    pub async fn create_board(
        &self,
        title: &str,
        background_color: Option<&str>,
    ) -> Result<Board, ClientError> {
        let body = CreateBoardRequest {
            title: require_title(title)?,
            background_color: background_color.map(str::to_string),
        };
        Self::send(self.authed(Method::POST, "/boards")?.json(&body)).await
    }

    pub async fn board(&self, id: Uuid) -> Result<Board, ClientError> {
        Self::send(self.authed(Method::GET, &format!("/boards/{id}"))?).await
    }

    pub async fn update_board(
        &self,
        id: Uuid,
        update: &UpdateBoardRequest,
    ) -> Result<Board, ClientError> {
        Self::send(self.authed(Method::PATCH, &format!("/boards/{id}"))?.json(update)).await
    }

    pub async fn delete_board(&self, id: Uuid) -> Result<MessageResponse, ClientError> {
        Self::send(self.authed(Method::DELETE, &format!("/boards/{id}"))?).await
    }

    // === Lists ===

    pub async fn lists(&self, board_id: Uuid) -> Result<Vec<ListWithTasks>, ClientError> {
        Self::send(self.authed(Method::GET, &format!("/boards/{board_id}/lists"))?).await
    }

    pub async fn create_list(&self, board_id: Uuid, title: &str) -> Result<BoardList, ClientError> {
        let body = CreateListRequest {
            title: require_title(title)?,
        };
        Self::send(
            self.authed(Method::POST, &format!("/boards/{board_id}/lists"))?
                .json(&body),
        )
        .await
    }

    pub async fn list(&self, id: Uuid) -> Result<BoardList, ClientError> {
        Self::send(self.authed(Method::GET, &format!("/lists/{id}"))?).await
    }

    pub async fn rename_list(&self, id: Uuid, title: &str) -> Result<BoardList, ClientError> {
        let body = UpdateListRequest {
            title: Some(require_title(title)?),
        };
        Self::send(self.authed(Method::PATCH, &format!("/lists/{id}"))?.json(&body)).await
    }

    pub async fn delete_list(&self, id: Uuid) -> Result<DeletedList, ClientError> {
        Self::send(self.authed(Method::DELETE, &format!("/lists/{id}"))?).await
    }

    // === Tasks ===

    pub async fn tasks(&self, list_id: Uuid) -> Result<Vec<Task>, ClientError> {
        Self::send(self.authed(Method::GET, &format!("/lists/{list_id}/tasks"))?).await
    }

    pub async fn create_task(
        &self,
        list_id: Uuid,
        title: &str,
        description: Option<&str>,
    ) -> Result<Task, ClientError> {
        let body = CreateTaskRequest {
            title: require_title(title)?,
            description: description.map(str::to_string),
        };
        Self::send(
            self.authed(Method::POST, &format!("/lists/{list_id}/tasks"))?
                .json(&body),
        )
        .await
    }

    pub async fn task(&self, id: Uuid) -> Result<Task, ClientError> {
        Self::send(self.authed(Method::GET, &format!("/tasks/{id}"))?).await
    }

    pub async fn update_task(
        &self,
        id: Uuid,
        update: &UpdateTaskRequest,
    ) -> Result<Task, ClientError> {
        Self::send(self.authed(Method::PATCH, &format!("/tasks/{id}"))?.json(update)).await
    }

    /// Flip the completion flag of a task
    pub async fn toggle_task(&self, task: &Task) -> Result<Task, ClientError> {
        let update = UpdateTaskRequest {
            completed: Some(!task.completed),
            ..UpdateTaskRequest::default()
        };
        self.update_task(task.id, &update).await
    }

    pub async fn delete_task(&self, id: Uuid) -> Result<DeletedTask, ClientError> {
        Self::send(self.authed(Method::DELETE, &format!("/tasks/{id}"))?).await
    }
}
