pub mod audiobooks;
pub mod banner;
pub mod chat;
pub mod contact;
pub mod knowledge;
pub mod upload;

use crate::common::{ApiCommand, ApiEvent, Request, Response};
use crate::network::ApiError;

use super::router::Route;
use chat::{ChatOptions, ChatState};
use contact::ContactState;
use knowledge::KnowledgeState;
use upload::UploadState;

/// The currently mounted view and its view-model.
pub enum View {
    Chat(ChatState),
    AudioBooks,
    Contact(ContactState),
    Knowledge(KnowledgeState),
    Upload(UploadState),
}

/// Trạng thái cục bộ của UI.
pub struct AppState {
    route: Route,
    pub view: View,
    /// Bumped on every mount; responses for older tickets are dropped.
    ticket: u64,
    chat_options: ChatOptions,
}

impl AppState {
    /// Mounts `route` and returns the requests the fresh view needs.
    pub fn new(route: Route, chat_options: ChatOptions) -> (Self, Vec<Request>) {
        let mut state = Self {
            route,
            view: View::AudioBooks,
            ticket: 0,
            chat_options,
        };
        let requests = state.mount(route);
        (state, requests)
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// Switching views unmounts the current one; staying put is a no-op.
    pub fn navigate(&mut self, route: Route) -> Vec<Request> {
        if route == self.route {
            return Vec::new();
        }
        log::info!("Navigating to {}", route.path());
        self.mount(route)
    }

    fn mount(&mut self, route: Route) -> Vec<Request> {
        self.route = route;
        self.ticket += 1;

        let (view, command) = match route {
            Route::Chat => {
                let mut options = self.chat_options.clone();
                // A resume request applies to the first chat mount only.
                options.resume_session = self.chat_options.resume_session.take();
                let mut chat = ChatState::new(options);
                let command = chat.mount();
                (View::Chat(chat), Some(command))
            }
            Route::AudioBooks => (View::AudioBooks, None),
            Route::Contact => (View::Contact(ContactState::default()), None),
            Route::Knowledge => {
                let mut knowledge = KnowledgeState::default();
                let command = knowledge.mount();
                (View::Knowledge(knowledge), Some(command))
            }
            Route::Upload => (View::Upload(UploadState::default()), None),
        };

        self.view = view;
        self.tag(command)
    }

    pub fn tag(&self, command: Option<ApiCommand>) -> Vec<Request> {
        command
            .into_iter()
            .map(|command| Request {
                ticket: self.ticket,
                command,
            })
            .collect()
    }

    /// Routes a worker response into the mounted view-model and returns any
    /// follow-up requests.
    pub fn apply(&mut self, response: Response) -> Vec<Request> {
        if response.ticket != self.ticket {
            log::debug!(
                "Dropping response for unmounted view (ticket {} != {})",
                response.ticket,
                self.ticket
            );
            return Vec::new();
        }

        let follow_up = match (&mut self.view, response.event) {
            (View::Chat(chat), ApiEvent::BackendProbed(result)) => chat.on_probe(result),
            (View::Chat(chat), ApiEvent::SessionOpened(result)) => {
                chat.on_session_opened(result);
                None
            }
            (View::Chat(chat), ApiEvent::HistoryLoaded(result)) => chat.on_history_loaded(result),
            (View::Chat(chat), ApiEvent::ReplyReceived(result)) => {
                chat.on_reply(result);
                None
            }
            (View::Contact(contact), ApiEvent::ContactSent(result)) => {
                contact.on_sent(result);
                None
            }
            (View::Knowledge(knowledge), ApiEvent::StatsLoaded(result)) => {
                knowledge.on_stats(result);
                None
            }
            (View::Knowledge(knowledge), ApiEvent::SourcesCollected(result)) => {
                knowledge.on_collected(result);
                None
            }
            (View::Knowledge(knowledge), ApiEvent::SearchCompleted(result)) => {
                knowledge.on_search(result);
                None
            }
            (View::Knowledge(knowledge), ApiEvent::SourceAdded(result)) => {
                knowledge.on_source_added(result);
                None
            }
            (View::Knowledge(knowledge), ApiEvent::AuthorAdded(result)) => {
                knowledge.on_author_added(result)
            }
            (View::Upload(upload), ApiEvent::AvatarUploaded(result)) => {
                upload.on_uploaded(result);
                None
            }
            (_, event) => {
                log::warn!("Event {event:?} does not belong to {}", self.route.path());
                None
            }
        };

        self.tag(follow_up)
    }

    /// Feeds a request that never reached the worker back to its view as a
    /// connectivity failure, so the view leaves its in-flight state.
    pub fn undeliverable(&mut self, request: Request, reason: String) -> Vec<Request> {
        let event = ApiEvent::failed(&request.command, ApiError::Unreachable(reason));
        self.apply(Response {
            ticket: request.ticket,
            event,
        })
    }
}
