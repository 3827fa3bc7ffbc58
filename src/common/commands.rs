use super::records::{AuthorProfile, AvatarUpload, ContactSubmission, KnowledgeSource};

/// Lệnh UI gửi xuống tầng mạng.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCommand {
    /// Liveness probe (`GET /`).
    ProbeBackend,
    OpenSession,
    LoadHistory {
        session_id: String,
        limit: usize,
    },
    SendMessage {
        text: String,
        session_id: String,
        /// Use `/chat/message-advanced` instead of `/chat/message`.
        advanced: bool,
    },
    SendContact(ContactSubmission),
    FetchStats,
    CollectSources,
    SemanticSearch {
        query: String,
        limit: usize,
    },
    AddAuthor(AuthorProfile),
    AddSource(KnowledgeSource),
    UploadAvatar(AvatarUpload),
}

/// A command tagged with the mount ticket of the view that issued it.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub ticket: u64,
    pub command: ApiCommand,
}
