//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use clique_client::{fetch_posts, MediaSource, Transport};
use clique_core::SubmissionResult;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::backend::Backend;
use crate::handler::UpdateAction;
use crate::message::Message;
use crate::submission::SubmissionAttempt;

/// Execute an action by spawning a background task
pub fn handle_action<T, S>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    backend: Arc<Backend<T, S>>,
) where
    T: Transport + Send + Sync + 'static,
    S: MediaSource + Send + Sync + 'static,
{
    match action {
        UpdateAction::SubmitForm(attempt) => spawn_submission(*attempt, msg_tx, backend),
        UpdateAction::FetchPosts => spawn_fetch_posts(msg_tx, backend),
    }
}

/// Run one attempt, reporting each phase and the final result.
fn spawn_submission<T, S>(
    attempt: SubmissionAttempt,
    msg_tx: mpsc::Sender<Message>,
    backend: Arc<Backend<T, S>>,
) where
    T: Transport + Send + Sync + 'static,
    S: MediaSource + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let id = attempt.id;
        let progress_tx = msg_tx.clone();
        let result = attempt
            .execute(&*backend, move |phase| {
                let _ = progress_tx.try_send(Message::SubmissionProgress { attempt: id, phase });
            })
            .await;

        if msg_tx
            .send(Message::SubmissionCompleted { attempt: id, result })
            .await
            .is_err()
        {
            warn!("Submission {} finished after the event loop closed", id);
        }
    });
}

fn spawn_fetch_posts<T, S>(msg_tx: mpsc::Sender<Message>, backend: Arc<Backend<T, S>>)
where
    T: Transport + Send + Sync + 'static,
    S: MediaSource + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let result = fetch_posts(&backend.transport).await.map_err(|e| {
            warn!("Feed fetch failed: {}", e);
            SubmissionResult::from(e).message()
        });
        if let Ok(posts) = &result {
            debug!("Loaded {} posts", posts.len());
        }
        let _ = msg_tx.send(Message::PostsLoaded(result)).await;
    });
}
