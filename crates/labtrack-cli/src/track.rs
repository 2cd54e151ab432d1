//! Live time tracking
//!
//! Drives a [`TimeSession`] from a one-second interval until `stop`
//! resolves, then commits the new total through the shared store.

use anyhow::{anyhow, Result};
use labtrack_model::ProjectId;
use labtrack_persist::StorageBackend;
use labtrack_store::{SharedStore, TimeSession};
use std::future::Future;
use std::time::Duration;

/// Track time on `id` until `stop` resolves; returns the committed total
///
/// `on_tick` sees the session after every elapsed second.
///
/// # Errors
/// Returns an error if no project has `id`.
pub async fn track<B, F>(
    store: SharedStore<B>,
    id: ProjectId,
    stop: F,
    mut on_tick: impl FnMut(&TimeSession),
) -> Result<u64>
where
    B: StorageBackend,
    F: Future<Output = ()>,
{
    let initial = store
        .read(|s| s.get(&id).map(|p| p.time_tracked))
        .ok_or_else(|| anyhow!("no project with id {id}"))?;

    let mut session = TimeSession::new(initial);
    session.start();
    tracing::info!(%id, initial, "tracking started");

    let mut interval = tokio::time::interval(Duration::from_secs(1));
    // first tick fires immediately
    interval.tick().await;

    tokio::pin!(stop);
    loop {
        tokio::select! {
            () = &mut stop => break,
            _ = interval.tick() => {
                session.tick();
                on_tick(&session);
            }
        }
    }

    let session_secs = session.session_secs();
    let total = session.stop();
    store.write(|s| s.record_time(&id, total));
    tracing::info!(%id, session_secs, total, "tracking stopped");
    Ok(total)
}
