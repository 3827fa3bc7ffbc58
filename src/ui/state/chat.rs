//! Chat view-model: session lifecycle and the send/receive flow.

use crate::common::{ApiCommand, AssistantReply, ChatMessage, MessageKind};
use crate::network::{ApiError, ApiResult};

/// Phrases that make the backend search the web before answering. A fixed
/// substring heuristic; the backend does its own classification.
pub const SEARCH_TRIGGERS: [&str; 6] = [
    "أخبرني عن",
    "معلومات عن",
    "من هو",
    "ما هي",
    "بحث",
    "اعثر على",
];

pub const WELCOME_TEXT: &str = "أهلاً وسهلاً! أنا غسان، مساعدك الأدبي العُماني الذكي. أستطيع مساعدتك في الأدب العُماني، التحليل النحوي والبلاغي، والبحث في المصادر الموثوقة.";
pub const PROCESSING_ERROR_TEXT: &str =
    "عذراً، حدث خطأ في معالجة رسالتك. أرجو المحاولة مرة أخرى.";
pub const CONNECTION_ERROR_TEXT: &str =
    "عذراً، لا أستطيع الاتصال بالخادم حالياً. أرجو المحاولة لاحقاً.";

/// `(button label, prompt)` examples offered under the input bar.
pub const QUICK_PROMPTS: [(&str, &str); 2] = [
    ("مثال: تحليل نحوي", "أعرب لي: والشمس تشرق على عُمان"),
    ("مثال: بحث عن شاعر", "أخبرني عن الشاعر سيف الرحبي"),
];

pub fn needs_web_search(text: &str) -> bool {
    SEARCH_TRIGGERS.iter().any(|trigger| text.contains(trigger))
}

/// What the assistant is doing while a reply is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Typing,
    Searching,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPhase {
    Disconnected,
    /// Liveness probe in flight.
    Connecting,
    /// Backend reachable, session (or history) request in flight.
    OpeningSession,
    Ready,
    Awaiting(Indicator),
}

#[derive(Debug, Clone, Default)]
pub struct ChatOptions {
    pub advanced: bool,
    pub history_limit: usize,
    /// Session to continue instead of opening a new one.
    pub resume_session: Option<String>,
}

pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input_text: String,
    phase: ChatPhase,
    session_id: Option<String>,
    options: ChatOptions,
}

impl ChatState {
    pub fn new(options: ChatOptions) -> Self {
        Self {
            messages: Vec::new(),
            input_text: String::new(),
            phase: ChatPhase::Disconnected,
            session_id: None,
            options,
        }
    }

    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        !matches!(self.phase, ChatPhase::Disconnected | ChatPhase::Connecting)
    }

    pub fn input_enabled(&self) -> bool {
        self.phase == ChatPhase::Ready
    }

    pub fn indicator(&self) -> Option<Indicator> {
        match self.phase {
            ChatPhase::Awaiting(indicator) => Some(indicator),
            _ => None,
        }
    }

    pub fn mount(&mut self) -> ApiCommand {
        self.phase = ChatPhase::Connecting;
        ApiCommand::ProbeBackend
    }

    pub fn on_probe(&mut self, result: ApiResult<()>) -> Option<ApiCommand> {
        if self.phase != ChatPhase::Connecting {
            log::debug!("Ignoring probe result in phase {:?}", self.phase);
            return None;
        }

        match result {
            Ok(()) => {
                self.phase = ChatPhase::OpeningSession;
                match &self.options.resume_session {
                    Some(session_id) => Some(ApiCommand::LoadHistory {
                        session_id: session_id.clone(),
                        limit: self.options.history_limit,
                    }),
                    None => Some(ApiCommand::OpenSession),
                }
            }
            Err(err) => {
                log::error!("Backend unreachable, chat disabled: {err}");
                self.phase = ChatPhase::Disconnected;
                None
            }
        }
    }

    pub fn on_session_opened(&mut self, result: ApiResult<String>) {
        if self.phase != ChatPhase::OpeningSession {
            log::debug!("Ignoring session result in phase {:?}", self.phase);
            return;
        }

        match result {
            Ok(session_id) => {
                log::info!("Chat session {session_id} opened");
                self.session_id = Some(session_id);
                self.phase = ChatPhase::Ready;
                self.messages
                    .push(ChatMessage::notice(MessageKind::Welcome, WELCOME_TEXT));
            }
            Err(err) => {
                log::error!("Could not open chat session: {err}");
                self.phase = ChatPhase::Disconnected;
            }
        }
    }

    /// Resume path. A failed history fetch falls back to a fresh session.
    pub fn on_history_loaded(&mut self, result: ApiResult<Vec<ChatMessage>>) -> Option<ApiCommand> {
        if self.phase != ChatPhase::OpeningSession {
            log::debug!("Ignoring history result in phase {:?}", self.phase);
            return None;
        }

        match (result, self.options.resume_session.take()) {
            (Ok(history), Some(session_id)) => {
                log::info!(
                    "Resumed session {session_id} with {} messages",
                    history.len()
                );
                self.session_id = Some(session_id);
                self.phase = ChatPhase::Ready;
                if history.is_empty() {
                    self.messages
                        .push(ChatMessage::notice(MessageKind::Welcome, WELCOME_TEXT));
                } else {
                    self.messages.extend(history);
                }
                None
            }
            (Err(err), _) => {
                log::warn!("Could not load history ({err}); opening a new session");
                Some(ApiCommand::OpenSession)
            }
            (Ok(_), None) => Some(ApiCommand::OpenSession),
        }
    }

    /// Replaces the draft with `prompt`; ignored unless the chat is ready.
    pub fn use_suggestion(&mut self, prompt: &str) -> bool {
        if !self.input_enabled() {
            return false;
        }
        self.input_text = prompt.to_string();
        true
    }

    pub fn can_send(&self) -> bool {
        self.input_enabled() && self.session_id.is_some() && !self.input_text.trim().is_empty()
    }

    /// Appends the user message and returns the request to send, or `None`
    /// when the guard fails (nothing changes then).
    pub fn submit(&mut self) -> Option<ApiCommand> {
        if !self.can_send() {
            return None;
        }
        let session_id = self.session_id.clone()?;

        let text = std::mem::take(&mut self.input_text);
        self.messages.push(ChatMessage::user(text.clone()));

        let indicator = if needs_web_search(&text) {
            Indicator::Searching
        } else {
            Indicator::Typing
        };
        self.phase = ChatPhase::Awaiting(indicator);

        Some(ApiCommand::SendMessage {
            text,
            session_id,
            advanced: self.options.advanced,
        })
    }

    pub fn on_reply(&mut self, result: ApiResult<AssistantReply>) {
        if self.indicator().is_none() {
            log::warn!("Dropping reply received in phase {:?}", self.phase);
            return;
        }

        let message = match result {
            Ok(reply) => ChatMessage::from(reply),
            Err(err) => ChatMessage::notice(MessageKind::Error, failure_text(&err)),
        };
        self.messages.push(message);
        self.phase = ChatPhase::Ready;
    }
}

fn failure_text(err: &ApiError) -> &'static str {
    if err.is_connectivity() {
        CONNECTION_ERROR_TEXT
    } else {
        PROCESSING_ERROR_TEXT
    }
}
