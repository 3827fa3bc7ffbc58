use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::common::records::SearchResults;
use crate::common::{
    Acknowledgement, AssistantReply, AuthorProfile, AvatarUpload, ChatMessage, CollectReport,
    ContactSubmission, HistoryEntry, KnowledgeSource, RagStats, SemanticHit,
};

use super::error::{ApiError, ApiResult, extract_detail};

/// Form values the backend expects alongside the uploaded avatar.
const AVATAR_TYPE: &str = "avatar";
const AVATAR_NAME: &str = "ghassan-avatar";

/// Thin wrapper over the Ghassan backend. Every call is a single attempt and
/// comes back as `ApiResult`; nothing here panics on a bad response.
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    api_base: String,
}

#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
    session_id: &'a str,
}

#[derive(Deserialize)]
struct SessionCreated {
    session_id: String,
}

#[derive(Deserialize)]
struct History {
    #[serde(default)]
    messages: Vec<HistoryEntry>,
}

impl BackendClient {
    pub fn new(backend_url: &str) -> ApiResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("ghassan-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| ApiError::InvalidRequest(err.to_string()))?;

        Ok(Self {
            http,
            api_base: format!("{}/api", backend_url.trim_end_matches('/')),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// `GET /`; any 2xx answer counts as alive.
    pub async fn probe(&self) -> ApiResult<()> {
        let response = self.http.get(self.url("/")).send().await?;
        check_status(response).await.map(|_| ())
    }

    pub async fn create_session(&self) -> ApiResult<String> {
        let response = self.http.post(self.url("/chat/session")).send().await?;
        let created: SessionCreated = decode(response).await?;
        Ok(created.session_id)
    }

    pub async fn send_message(&self, text: &str, session_id: &str) -> ApiResult<AssistantReply> {
        self.post_message("/chat/message", text, session_id).await
    }

    /// Same contract as `send_message`, answered with reliability metadata.
    pub async fn send_message_advanced(
        &self,
        text: &str,
        session_id: &str,
    ) -> ApiResult<AssistantReply> {
        self.post_message("/chat/message-advanced", text, session_id)
            .await
    }

    async fn post_message(
        &self,
        path: &str,
        text: &str,
        session_id: &str,
    ) -> ApiResult<AssistantReply> {
        let body = MessageBody {
            message: text,
            session_id,
        };
        let response = self.http.post(self.url(path)).json(&body).send().await?;
        decode(response).await
    }

    pub async fn history(&self, session_id: &str, limit: usize) -> ApiResult<Vec<ChatMessage>> {
        let response = self
            .http
            .get(self.url(&format!("/chat/history/{session_id}")))
            .query(&[("limit", limit)])
            .send()
            .await?;
        let history: History = decode(response).await?;
        Ok(history.messages.into_iter().map(ChatMessage::from).collect())
    }

    pub async fn send_contact(&self, submission: &ContactSubmission) -> ApiResult<Acknowledgement> {
        self.post_acknowledged("/contact/send", submission).await
    }

    pub async fn rag_stats(&self) -> ApiResult<RagStats> {
        let response = self.http.get(self.url("/rag/stats")).send().await?;
        decode(response).await
    }

    /// `POST /collect/simple`; an incomplete collection counts as a rejection.
    pub async fn collect_sources(&self) -> ApiResult<CollectReport> {
        let response = self.http.post(self.url("/collect/simple")).send().await?;
        let report: CollectReport = decode(response).await?;
        if report.collection_completed {
            Ok(report)
        } else {
            Err(ApiError::Rejected(report.error))
        }
    }

    pub async fn semantic_search(&self, query: &str, limit: usize) -> ApiResult<Vec<SemanticHit>> {
        let response = self
            .http
            .get(self.url("/search/semantic"))
            .query(&[("query", query.to_string()), ("limit", limit.to_string())])
            .send()
            .await?;
        let found: SearchResults = decode(response).await?;
        Ok(found.results)
    }

    pub async fn add_author(&self, author: &AuthorProfile) -> ApiResult<Acknowledgement> {
        self.post_acknowledged("/authors/add", author).await
    }

    pub async fn add_source(&self, source: &KnowledgeSource) -> ApiResult<Acknowledgement> {
        self.post_acknowledged("/knowledge/add-source", source).await
    }

    pub async fn upload_avatar(&self, upload: &AvatarUpload) -> ApiResult<Acknowledgement> {
        let bytes = tokio::fs::read(&upload.path)
            .await
            .map_err(|err| ApiError::LocalFile {
                path: upload.path.display().to_string(),
                reason: err.to_string(),
            })?;

        let image = Part::bytes(bytes)
            .file_name(upload.file_name.clone())
            .mime_str(&upload.mime)
            .map_err(|err| ApiError::InvalidRequest(err.to_string()))?;
        let form = Form::new()
            .part("image", image)
            .text("type", AVATAR_TYPE)
            .text("name", AVATAR_NAME);

        let response = self
            .http
            .post(self.url("/upload/avatar"))
            .multipart(form)
            .send()
            .await?;
        acknowledge(decode(response).await?)
    }

    async fn post_acknowledged<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<Acknowledgement> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        acknowledge(decode(response).await?)
    }
}

async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        detail: extract_detail(&body),
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

fn acknowledge(ack: Acknowledgement) -> ApiResult<Acknowledgement> {
    if ack.success {
        Ok(ack)
    } else {
        Err(ApiError::Rejected(ack.failure_detail()))
    }
}
