use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Body of `/contact/send`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A literary source submitted to `/knowledge/add-source`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeSource {
    pub title: String,
    pub content: String,
    pub source_type: String,
    pub author: String,
    pub publication_date: String,
    pub reliability_score: f32,
    pub tags: Vec<String>,
}

/// An Omani author submitted to `/authors/add`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorProfile {
    pub full_name: String,
    pub biography: String,
    pub birth_date: String,
    pub birth_place: String,
    pub main_genres: Vec<String>,
    pub influences: Vec<String>,
    pub literary_periods: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EmbeddingStats {
    #[serde(default)]
    pub total_embeddings: u64,
}

/// Knowledge base counters from `/rag/stats`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RagStats {
    #[serde(default)]
    pub authors_count: u64,
    #[serde(default)]
    pub works_count: u64,
    #[serde(default)]
    pub sources_count: u64,
    #[serde(default)]
    pub embeddings: Option<EmbeddingStats>,
    #[serde(default)]
    pub recent_queries: Vec<String>,
}

impl RagStats {
    pub fn total_embeddings(&self) -> u64 {
        self.embeddings
            .as_ref()
            .map(|e| e.total_embeddings)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SemanticHit {
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub similarity_score: f32,
    #[serde(default)]
    pub text_content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SearchResults {
    #[serde(default)]
    pub results: Vec<SemanticHit>,
}

/// Outcome of `/collect/simple`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CollectReport {
    #[serde(default)]
    pub collection_completed: bool,
    #[serde(default)]
    pub total_sources_found: u64,
    #[serde(default)]
    pub authors_processed: u64,
    #[serde(default)]
    pub error: Option<String>,
}

/// Generic reply of the management endpoints. The backend answers 200 with
/// `success: false` for logical failures.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub knowledge_entries: Option<u64>,
    #[serde(default)]
    pub embedding_id: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

impl Acknowledgement {
    pub fn failure_detail(&self) -> Option<String> {
        [&self.error, &self.message, &self.detail]
            .into_iter()
            .flatten()
            .find(|text| !text.is_empty())
            .cloned()
    }
}

/// An image already accepted by the uploader; the bytes are read by the
/// worker right before the multipart request is built.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarUpload {
    pub path: PathBuf,
    pub file_name: String,
    pub mime: String,
}
