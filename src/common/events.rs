use crate::network::{ApiError, ApiResult};

use super::commands::ApiCommand;
use super::records::{Acknowledgement, CollectReport, RagStats, SemanticHit};
use super::types::{AssistantReply, ChatMessage};

/// Sự kiện từ tầng mạng gửi lên UI.
#[derive(Debug, Clone)]
pub enum ApiEvent {
    BackendProbed(ApiResult<()>),
    SessionOpened(ApiResult<String>),
    HistoryLoaded(ApiResult<Vec<ChatMessage>>),
    ReplyReceived(ApiResult<AssistantReply>),
    ContactSent(ApiResult<Acknowledgement>),
    StatsLoaded(ApiResult<RagStats>),
    SourcesCollected(ApiResult<CollectReport>),
    SearchCompleted(ApiResult<Vec<SemanticHit>>),
    AuthorAdded(ApiResult<Acknowledgement>),
    SourceAdded(ApiResult<Acknowledgement>),
    AvatarUploaded(ApiResult<Acknowledgement>),
}

/// An event routed back to the view mounted under `ticket`.
#[derive(Debug, Clone)]
pub struct Response {
    pub ticket: u64,
    pub event: ApiEvent,
}

impl ApiEvent {
    /// The event `command` resolves to when it fails before reaching the backend.
    pub fn failed(command: &ApiCommand, err: ApiError) -> Self {
        match command {
            ApiCommand::ProbeBackend => ApiEvent::BackendProbed(Err(err)),
            ApiCommand::OpenSession => ApiEvent::SessionOpened(Err(err)),
            ApiCommand::LoadHistory { .. } => ApiEvent::HistoryLoaded(Err(err)),
            ApiCommand::SendMessage { .. } => ApiEvent::ReplyReceived(Err(err)),
            ApiCommand::SendContact(_) => ApiEvent::ContactSent(Err(err)),
            ApiCommand::FetchStats => ApiEvent::StatsLoaded(Err(err)),
            ApiCommand::CollectSources => ApiEvent::SourcesCollected(Err(err)),
            ApiCommand::SemanticSearch { .. } => ApiEvent::SearchCompleted(Err(err)),
            ApiCommand::AddAuthor(_) => ApiEvent::AuthorAdded(Err(err)),
            ApiCommand::AddSource(_) => ApiEvent::SourceAdded(Err(err)),
            ApiCommand::UploadAvatar(_) => ApiEvent::AvatarUploaded(Err(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_event_matches_command() {
        let err = ApiError::Unreachable("channel closed".into());

        let event = ApiEvent::failed(
            &ApiCommand::SendMessage {
                text: "مرحبا".into(),
                session_id: "s-1".into(),
                advanced: false,
            },
            err.clone(),
        );
        assert!(matches!(event, ApiEvent::ReplyReceived(Err(ref e)) if *e == err));

        let event = ApiEvent::failed(&ApiCommand::FetchStats, err);
        assert!(matches!(event, ApiEvent::StatsLoaded(Err(_))));
    }
}
