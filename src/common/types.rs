use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a message in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    /// The backend stores assistant turns under the persona name.
    #[serde(alias = "ghassan")]
    Assistant,
}

/// How the chat view should present an assistant message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageKind {
    #[default]
    Regular,
    Welcome,
    Error,
}

/// Domain model đại diện một tin nhắn chat.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    pub has_web_search: bool,
    pub model_used: Option<String>,
    pub reliability_score: Option<f32>,
    pub confidence_level: Option<String>,
    pub kind: MessageKind,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::local(Sender::User, MessageKind::Regular, text.into())
    }

    /// Assistant-side message produced by the client itself (welcome, failures).
    pub fn notice(kind: MessageKind, text: impl Into<String>) -> Self {
        Self::local(Sender::Assistant, kind, text.into())
    }

    fn local(sender: Sender, kind: MessageKind, text: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            sender,
            timestamp: Utc::now(),
            has_web_search: false,
            model_used: None,
            reliability_score: None,
            confidence_level: None,
            kind,
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Reply body of `/chat/message` and `/chat/message-advanced`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssistantReply {
    pub message_id: String,
    pub text: String,
    #[serde(default)]
    pub session_id: Option<String>,
    pub timestamp: String,
    #[serde(default)]
    pub has_web_search: bool,
    #[serde(default)]
    pub model_used: Option<String>,
    #[serde(default)]
    pub reliability_score: Option<f32>,
    #[serde(default)]
    pub confidence_level: Option<String>,
}

impl From<AssistantReply> for ChatMessage {
    fn from(reply: AssistantReply) -> Self {
        Self {
            id: reply.message_id,
            text: reply.text,
            sender: Sender::Assistant,
            timestamp: parse_timestamp(&reply.timestamp),
            has_web_search: reply.has_web_search,
            model_used: reply.model_used,
            reliability_score: reply.reliability_score,
            confidence_level: reply.confidence_level,
            kind: MessageKind::Regular,
        }
    }
}

/// One stored message as returned by `/chat/history/{session_id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: String,
    #[serde(default, rename = "hasWebSearch")]
    pub has_web_search: bool,
    #[serde(default, rename = "modelUsed")]
    pub model_used: Option<String>,
}

impl From<HistoryEntry> for ChatMessage {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            id: entry.id,
            text: entry.text,
            sender: entry.sender,
            timestamp: parse_timestamp(&entry.timestamp),
            has_web_search: entry.has_web_search,
            model_used: entry.model_used,
            reliability_score: None,
            confidence_level: None,
            kind: MessageKind::Regular,
        }
    }
}

/// Parses backend timestamps, which are ISO-8601 and usually lack an offset
/// (naive UTC). Unparseable values fall back to the current time.
pub fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Utc);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.and_utc();
    }
    log::debug!("Unrecognized timestamp `{raw}`; using current time");
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_naive_backend_timestamps_as_utc() {
        let ts = parse_timestamp("2024-03-05T10:20:30.123456");
        assert_eq!((ts.year(), ts.month(), ts.day()), (2024, 3, 5));
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (10, 20, 30));
    }

    #[test]
    fn parses_offset_timestamps() {
        let ts = parse_timestamp("2024-03-05T12:00:00+02:00");
        assert_eq!(ts.hour(), 10);
    }

    #[test]
    fn garbage_timestamp_falls_back_to_now() {
        let before = Utc::now();
        let ts = parse_timestamp("yesterday-ish");
        assert!(ts >= before);
    }

    #[test]
    fn history_entry_accepts_persona_sender() {
        let json = r#"{
            "id": "m1",
            "text": "مرحبا",
            "sender": "ghassan",
            "timestamp": "2024-01-01T00:00:00",
            "hasWebSearch": true,
            "modelUsed": "claude-3"
        }"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        let message = ChatMessage::from(entry);
        assert_eq!(message.sender, Sender::Assistant);
        assert!(message.has_web_search);
        assert_eq!(message.model_used.as_deref(), Some("claude-3"));
    }

    #[test]
    fn reply_metadata_is_carried_into_message() {
        let json = r#"{
            "message_id": "r1",
            "text": "جواب",
            "timestamp": "2024-01-01T00:00:00",
            "has_web_search": true,
            "reliability_score": 0.92,
            "confidence_level": "عالي"
        }"#;
        let reply: AssistantReply = serde_json::from_str(json).unwrap();
        let message = ChatMessage::from(reply);
        assert_eq!(message.id, "r1");
        let score = message.reliability_score.unwrap();
        assert!((score - 0.92).abs() < 1e-6);
        assert_eq!(message.confidence_level.as_deref(), Some("عالي"));
        assert_eq!(message.kind, MessageKind::Regular);
        assert!(!message.is_from_user());
    }

    #[test]
    fn local_messages_get_unique_ids() {
        let a = ChatMessage::user("a");
        let b = ChatMessage::user("a");
        assert_ne!(a.id, b.id);
        assert!(a.is_from_user());
    }
}
