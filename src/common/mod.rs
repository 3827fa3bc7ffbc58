pub mod commands;
pub mod events;
pub mod records;
pub mod types;

pub use commands::{ApiCommand, Request};
pub use events::{ApiEvent, Response};
pub use records::{
    Acknowledgement, AuthorProfile, AvatarUpload, CollectReport, ContactSubmission,
    KnowledgeSource, RagStats, SemanticHit,
};
pub use types::{AssistantReply, ChatMessage, HistoryEntry, MessageKind, Sender};
