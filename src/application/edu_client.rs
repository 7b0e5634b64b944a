//! EduClient - one method per backend operation.
//!
//! Each method fixes the path, method and body shape of one endpoint and
//! delegates to the [`RequestGateway`]. Login and logout also touch the
//! session store and the page.

use std::fmt::Display;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::info;

use super::request_gateway::RequestGateway;
use super::session_store::{SessionStore, SessionStoreError};
use crate::domain::request::{RequestError, RequestOptions, UploadFile};
use crate::domain::session::{PersistenceScope, Session, UserRecord};
use crate::ports::Navigator;

/// Default page logout navigates to.
pub const DEFAULT_LOGIN_PAGE: &str = "/pages/user_login.html";

const LOGIN_SUCCESS: &str = "Login successful!";
const REGISTER_SUCCESS: &str = "Registration successful! Please login.";
const UPLOAD_SUCCESS: &str = "File uploaded successfully!";
const UPLOAD_FALLBACK: &str = "Upload failed";

/// Failure of an operation that touches both the backend and the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Session(#[from] SessionStoreError),
}

/// Body of a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub token: String,
    pub user: UserRecord,
    /// Role dashboard to open next: the backend's suggestion, else the
    /// page for the user's role.
    #[serde(default)]
    pub redirect: Option<String>,
}

/// Typed access to the EduTech backend.
#[derive(Clone)]
pub struct EduClient {
    gateway: RequestGateway,
    sessions: SessionStore,
    navigator: Arc<dyn Navigator>,
    login_page: String,
}

impl EduClient {
    pub fn new(
        gateway: RequestGateway,
        sessions: SessionStore,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            gateway,
            sessions,
            navigator,
            login_page: DEFAULT_LOGIN_PAGE.to_string(),
        }
    }

    /// Overrides the page logout navigates to.
    pub fn with_login_page(mut self, login_page: impl Into<String>) -> Self {
        self.login_page = login_page.into();
        self
    }

    pub fn gateway(&self) -> &RequestGateway {
        &self.gateway
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    // ════════════════════════════════════════════════════════════════════
    // Authentication
    // ════════════════════════════════════════════════════════════════════

    /// Logs in and remembers the session durably.
    pub async fn login(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<LoginResponse, ClientError> {
        self.login_with_scope(email, password, PersistenceScope::Durable)
            .await
    }

    /// Logs in and stores the session in `scope`.
    pub async fn login_with_scope(
        &self,
        email: &str,
        password: &SecretString,
        scope: PersistenceScope,
    ) -> Result<LoginResponse, ClientError> {
        let body = json!({
            "email": email,
            "password": password.expose_secret(),
        });
        let data = self
            .gateway
            .request("/login", RequestOptions::post_json(body))
            .await?;

        let mut response: LoginResponse = serde_json::from_value(data).map_err(|e| {
            let err = RequestError::invalid_response(
                format!("Unexpected login response: {}", e),
                http::StatusCode::OK,
            );
            self.gateway.notifier().error(err.message());
            err
        })?;

        if response.redirect.is_none() {
            response.redirect = response
                .user
                .role()
                .map(|role| format!("/pages/{}", role.dashboard_page()));
        }

        let session = Session::new(response.user.clone(), response.token.clone());
        self.sessions.save(&session, scope).await?;

        info!(user_id = response.user.id, %scope, "Logged in");
        self.gateway.notifier().success(LOGIN_SUCCESS);
        Ok(response)
    }

    /// Creates an account. Does not log in.
    pub async fn register(&self, user_data: Value) -> Result<Value, RequestError> {
        let data = self
            .gateway
            .request("/register", RequestOptions::post_json(user_data))
            .await?;
        self.gateway.notifier().success(REGISTER_SUCCESS);
        Ok(data)
    }

    /// Forgets the session and returns to the login page.
    ///
    /// Navigation happens even if clearing storage failed; that failure is
    /// still returned.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let cleared = self.sessions.clear().await;
        info!(login_page = %self.login_page, "Logged out");
        self.navigator.navigate(&self.login_page);
        cleared.map_err(ClientError::from)
    }

    /// The stored session, if any.
    pub async fn current_session(&self) -> Option<Session> {
        self.sessions.load().await
    }

    // ════════════════════════════════════════════════════════════════════
    // Lessons and progress
    // ════════════════════════════════════════════════════════════════════

    /// Lessons visible to the student, optionally filtered by grade.
    pub async fn list_lessons(&self, grade: Option<&str>) -> Result<Value, RequestError> {
        let mut options = RequestOptions::get();
        if let Some(grade) = grade {
            options = options.with_query("grade", grade);
        }
        self.gateway.request("/student/lessons", options).await
    }

    pub async fn get_lesson(&self, lesson_id: impl Display) -> Result<Value, RequestError> {
        self.gateway
            .request(&format!("/lessons/{}", lesson_id), RequestOptions::get())
            .await
    }

    /// Records progress on a lesson.
    ///
    /// The body is `progress` with `lesson_id` merged in; a `lesson_id` key
    /// inside `progress` overrides the argument.
    pub async fn update_progress(
        &self,
        lesson_id: impl Into<Value>,
        progress: Map<String, Value>,
    ) -> Result<Value, RequestError> {
        let mut body = Map::new();
        body.insert("lesson_id".to_string(), lesson_id.into());
        body.extend(progress);
        self.gateway
            .request("/progress", RequestOptions::post_json(Value::Object(body)))
            .await
    }

    pub async fn get_progress(&self, user_id: impl Display) -> Result<Value, RequestError> {
        let options = RequestOptions::get().with_query("user_id", user_id.to_string());
        self.gateway.request("/progress", options).await
    }

    pub async fn student_dashboard(&self) -> Result<Value, RequestError> {
        self.gateway
            .request("/student/dashboard", RequestOptions::get())
            .await
    }

    // ════════════════════════════════════════════════════════════════════
    // Quizzes
    // ════════════════════════════════════════════════════════════════════

    pub async fn list_quizzes(&self) -> Result<Value, RequestError> {
        self.gateway.request("/quizzes", RequestOptions::get()).await
    }

    pub async fn get_quiz(&self, quiz_id: impl Display) -> Result<Value, RequestError> {
        self.gateway
            .request(&format!("/quizzes/{}", quiz_id), RequestOptions::get())
            .await
    }

    pub async fn list_quiz_attempts(&self) -> Result<Value, RequestError> {
        self.gateway
            .request("/student/quizzes/attempts", RequestOptions::get())
            .await
    }

    /// Submits answers for grading.
    pub async fn submit_quiz(
        &self,
        quiz_id: impl Display,
        answers: Value,
    ) -> Result<Value, RequestError> {
        let path = format!("/student/quizzes/{}/submit", quiz_id);
        self.gateway
            .request(&path, RequestOptions::post_json(json!({ "answers": answers })))
            .await
    }

    // ════════════════════════════════════════════════════════════════════
    // AI assistance
    // ════════════════════════════════════════════════════════════════════

    /// Asks the tutor. Returns only the `response` field.
    pub async fn ai_tutor_query(&self, query: &str) -> Result<Value, RequestError> {
        let data = self
            .gateway
            .request("/ai/tutor", RequestOptions::post_json(json!({ "query": query })))
            .await?;
        Ok(field(&data, "response"))
    }

    /// Generates study material. Returns only the `content` field.
    pub async fn generate_content(&self, topic: &str) -> Result<Value, RequestError> {
        let data = self
            .gateway
            .request(
                "/ai/generate-content",
                RequestOptions::post_json(json!({ "topic": topic })),
            )
            .await?;
        Ok(field(&data, "content"))
    }

    // ════════════════════════════════════════════════════════════════════
    // Uploads
    // ════════════════════════════════════════════════════════════════════

    /// Uploads a file as the multipart field `file`.
    ///
    /// Success raises a notification; failure only returns the error.
    pub async fn upload_file(&self, file: UploadFile) -> Result<Value, RequestError> {
        let data = self
            .gateway
            .request_quiet(
                "/upload-file",
                RequestOptions::post_file("file", file),
                UPLOAD_FALLBACK,
            )
            .await?;
        self.gateway.notifier().success(UPLOAD_SUCCESS);
        Ok(data)
    }
}

fn field(data: &Value, name: &str) -> Value {
    data.get(name).cloned().unwrap_or(Value::Null)
}
