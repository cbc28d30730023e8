use carousel_model::{SlideSet, Step};
use tokio::sync::{mpsc, oneshot, watch};

use super::CarouselCommand;
use crate::error::{CarouselError, Result};
use crate::snapshot::Snapshot;

/// Cloneable front door to a carousel actor.
///
/// Every request resolves once the actor has applied it, yielding the
/// snapshot right after that change. Dropping the last handle shuts the actor
/// down.
#[derive(Debug)]
pub struct CarouselHandle<T> {
    commands: mpsc::Sender<CarouselCommand<T>>,
    snapshots: watch::Receiver<Snapshot>,
}

impl<T> Clone for CarouselHandle<T> {
    fn clone(&self) -> Self {
        Self {
            commands: self.commands.clone(),
            snapshots: self.snapshots.clone(),
        }
    }
}

impl<T> CarouselHandle<T> {
    pub(crate) fn new(
        commands: mpsc::Sender<CarouselCommand<T>>,
        snapshots: watch::Receiver<Snapshot>,
    ) -> Self {
        Self {
            commands,
            snapshots,
        }
    }

    /// Previous/next request.
    pub async fn move_slide(&self, step: Step) -> Result<Snapshot> {
        self.request(|reply| CarouselCommand::Move { step, reply })
            .await
    }

    /// Publish the external target signal. Repeating the last value is a no-op.
    pub async fn set_target(&self, target: Option<i64>) -> Result<Snapshot> {
        self.request(|reply| CarouselCommand::SetTarget { target, reply })
            .await
    }

    /// Swap the slide set, dropping any in-flight go-to.
    pub async fn replace_slides(&self, slides: SlideSet<T>) -> Result<Snapshot> {
        self.request(|reply| CarouselCommand::ReplaceSlides { slides, reply })
            .await
    }

    /// Change the requested window radius.
    pub async fn set_offset_radius(&self, radius: i64) -> Result<Snapshot> {
        self.request(|reply| CarouselCommand::SetOffsetRadius { radius, reply })
            .await
    }

    /// Stop the actor, cancelling any scheduled hop. Resolves with the final
    /// snapshot once the actor has torn down.
    pub async fn shutdown(&self) -> Result<Snapshot> {
        self.request(|reply| CarouselCommand::Shutdown { reply })
            .await
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver that observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    /// Wait until no go-to is in flight.
    pub async fn wait_until_settled(&self) -> Result<Snapshot> {
        let mut snapshots = self.snapshots.clone();
        let snapshot = snapshots
            .wait_for(Snapshot::is_settled)
            .await
            .map_err(|_| CarouselError::ActorClosed)?;
        Ok(Snapshot::clone(&snapshot))
    }

    async fn request<F>(&self, build: F) -> Result<Snapshot>
    where
        F: FnOnce(oneshot::Sender<Snapshot>) -> CarouselCommand<T>,
    {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(build(reply))
            .await
            .map_err(|_| CarouselError::ActorClosed)?;
        response.await.map_err(|_| CarouselError::ActorClosed)
    }
}
