//! Background task that runs summarization requests off the UI thread.

use std::sync::mpsc::Sender;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::api::PredictClient;
use crate::ui::app::{UiCommand, UiCommandSender};
use crate::ui::events::AppEvent;

/// Capacity of the command queue. Submits are rejected while one is in
/// flight, so this only needs headroom for bursts.
const COMMAND_BUFFER: usize = 16;

/// Spawn the worker on `handle` and return the sender the UI uses to reach it.
///
/// Every `Submit` runs as its own task; its outcome comes back to the UI as
/// `AppEvent::Summary`. The worker stops once all senders are dropped.
pub fn spawn_worker(
    handle: &Handle,
    client: PredictClient,
    events: Sender<AppEvent>,
) -> UiCommandSender {
    let (tx, mut rx) = mpsc::channel(COMMAND_BUFFER);

    handle.spawn(async move {
        while let Some(command) = rx.recv().await {
            match command {
                UiCommand::Submit {
                    request_id,
                    request,
                } => {
                    let client = client.clone();
                    let events = events.clone();
                    tokio::spawn(async move {
                        let result = client.predict(&request).await;
                        if events
                            .send(AppEvent::Summary { request_id, result })
                            .is_err()
                        {
                            tracing::debug!(request_id, "UI gone, dropping summary result");
                        }
                    });
                }
            }
        }
        tracing::debug!("Summarization worker stopped");
    });

    tx
}
