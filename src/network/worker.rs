use tokio::sync::mpsc;

use crate::common::{ApiCommand, ApiEvent, Request, Response};

use super::client::BackendClient;

/// Background half of the app: takes UI requests off the command channel,
/// performs them against the backend and posts the outcome back.
pub struct ApiWorker {
    client: BackendClient,
    event_sender: mpsc::Sender<Response>,
    command_receiver: mpsc::Receiver<Request>,
}

impl ApiWorker {
    pub fn new(
        client: BackendClient,
        event_sender: mpsc::Sender<Response>,
        command_receiver: mpsc::Receiver<Request>,
    ) -> Self {
        Self {
            client,
            event_sender,
            command_receiver,
        }
    }

    /// Runs until the UI drops its command sender.
    pub async fn run(mut self) {
        log::info!("API worker started against {}", self.client.api_base());

        while let Some(request) = self.command_receiver.recv().await {
            let client = self.client.clone();
            let event_sender = self.event_sender.clone();

            // Calls are independent; a slow one must not hold up the rest.
            tokio::spawn(async move {
                let ticket = request.ticket;
                let event = execute(&client, request.command).await;
                if let Err(err) = event_sender.send(Response { ticket, event }).await {
                    log::warn!("Failed to notify UI about API result: {err}");
                }
            });
        }

        log::info!("Command channel closed; API worker stopping");
    }
}

/// Performs one command and wraps its result in the matching event.
pub async fn execute(client: &BackendClient, command: ApiCommand) -> ApiEvent {
    log::debug!("Executing {command:?}");

    let event = match command {
        ApiCommand::ProbeBackend => ApiEvent::BackendProbed(client.probe().await),
        ApiCommand::OpenSession => ApiEvent::SessionOpened(client.create_session().await),
        ApiCommand::LoadHistory { session_id, limit } => {
            ApiEvent::HistoryLoaded(client.history(&session_id, limit).await)
        }
        ApiCommand::SendMessage {
            text,
            session_id,
            advanced,
        } => {
            let result = if advanced {
                client.send_message_advanced(&text, &session_id).await
            } else {
                client.send_message(&text, &session_id).await
            };
            ApiEvent::ReplyReceived(result)
        }
        ApiCommand::SendContact(submission) => {
            ApiEvent::ContactSent(client.send_contact(&submission).await)
        }
        ApiCommand::FetchStats => ApiEvent::StatsLoaded(client.rag_stats().await),
        ApiCommand::CollectSources => ApiEvent::SourcesCollected(client.collect_sources().await),
        ApiCommand::SemanticSearch { query, limit } => {
            ApiEvent::SearchCompleted(client.semantic_search(&query, limit).await)
        }
        ApiCommand::AddAuthor(author) => ApiEvent::AuthorAdded(client.add_author(&author).await),
        ApiCommand::AddSource(source) => ApiEvent::SourceAdded(client.add_source(&source).await),
        ApiCommand::UploadAvatar(upload) => {
            ApiEvent::AvatarUploaded(client.upload_avatar(&upload).await)
        }
    };

    if let Some(err) = failure_of(&event) {
        log::warn!("Backend call failed: {err}");
    }
    event
}

fn failure_of(event: &ApiEvent) -> Option<&super::ApiError> {
    match event {
        ApiEvent::BackendProbed(Err(err))
        | ApiEvent::SessionOpened(Err(err))
        | ApiEvent::HistoryLoaded(Err(err))
        | ApiEvent::ReplyReceived(Err(err))
        | ApiEvent::ContactSent(Err(err))
        | ApiEvent::StatsLoaded(Err(err))
        | ApiEvent::SourcesCollected(Err(err))
        | ApiEvent::SearchCompleted(Err(err))
        | ApiEvent::AuthorAdded(Err(err))
        | ApiEvent::SourceAdded(Err(err))
        | ApiEvent::AvatarUploaded(Err(err)) => Some(err),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::testing::{spawn_mock_backend, unreachable_url};

    async fn start_worker(base_url: &str) -> (mpsc::Sender<Request>, mpsc::Receiver<Response>) {
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (event_tx, event_rx) = mpsc::channel(8);
        let client = BackendClient::new(base_url).unwrap();
        tokio::spawn(ApiWorker::new(client, event_tx, cmd_rx).run());
        (cmd_tx, event_rx)
    }

    #[tokio::test]
    async fn responses_keep_the_request_ticket() {
        let (cmd_tx, mut event_rx) = start_worker(&spawn_mock_backend().await).await;

        cmd_tx
            .send(Request {
                ticket: 7,
                command: ApiCommand::OpenSession,
            })
            .await
            .unwrap();

        let response = event_rx.recv().await.unwrap();
        assert_eq!(response.ticket, 7);
        match response.event {
            ApiEvent::SessionOpened(Ok(id)) => assert_eq!(id, "session-1"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn advanced_flag_selects_endpoint() {
        let client = BackendClient::new(&spawn_mock_backend().await).unwrap();

        let event = execute(
            &client,
            ApiCommand::SendMessage {
                text: "سؤال".into(),
                session_id: "session-1".into(),
                advanced: true,
            },
        )
        .await;
        match event {
            ApiEvent::ReplyReceived(Ok(reply)) => assert!(reply.reliability_score.is_some()),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn failures_are_reported_as_events() {
        let (cmd_tx, mut event_rx) = start_worker(&unreachable_url().await).await;

        cmd_tx
            .send(Request {
                ticket: 1,
                command: ApiCommand::ProbeBackend,
            })
            .await
            .unwrap();

        match event_rx.recv().await.unwrap().event {
            ApiEvent::BackendProbed(Err(err)) => assert!(err.is_connectivity()),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn worker_stops_when_ui_hangs_up() {
        let (cmd_tx, cmd_rx) = mpsc::channel(1);
        let (event_tx, _event_rx) = mpsc::channel(1);
        let client = BackendClient::new("http://127.0.0.1:1").unwrap();
        let handle = tokio::spawn(ApiWorker::new(client, event_tx, cmd_rx).run());

        drop(cmd_tx);
        handle.await.unwrap();
    }
}
