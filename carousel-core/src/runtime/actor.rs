use std::ops::ControlFlow;

use tokio::{
    sync::{mpsc, oneshot, watch},
    task::JoinHandle,
};
use tracing::{debug, info};

use super::{CarouselCommand, CarouselHandle, MAILBOX_CAPACITY};
use crate::controller::{
    CarouselController, HopToken, ScheduledHop, TimerAction, Transition,
};
use crate::renderer::SlideRenderer;
use crate::snapshot::Snapshot;

/// Spawn an actor owning `controller` and return a handle to it.
///
/// Must be called from within a tokio runtime. The renderer receives the
/// initial snapshot and then one snapshot per processed command or hop.
pub fn spawn_carousel<T, R>(
    controller: CarouselController<T>,
    renderer: R,
) -> CarouselHandle<T>
where
    T: Send + 'static,
    R: SlideRenderer<T> + 'static,
{
    let (commands_tx, commands_rx) = mpsc::channel(MAILBOX_CAPACITY);
    let (timer_tx, timer_rx) = mpsc::unbounded_channel();
    let (snapshot_tx, snapshot_rx) = watch::channel(controller.snapshot());

    let actor = CarouselActor {
        controller,
        renderer,
        commands: commands_rx,
        timer_tx,
        timer_rx,
        snapshots: snapshot_tx,
        hop_task: None,
    };
    tokio::spawn(actor.run());

    CarouselHandle::new(commands_tx, snapshot_rx)
}

struct CarouselActor<T, R> {
    controller: CarouselController<T>,
    renderer: R,
    commands: mpsc::Receiver<CarouselCommand<T>>,
    timer_tx: mpsc::UnboundedSender<HopToken>,
    timer_rx: mpsc::UnboundedReceiver<HopToken>,
    snapshots: watch::Sender<Snapshot>,
    hop_task: Option<JoinHandle<()>>,
}

impl<T, R> CarouselActor<T, R>
where
    T: Send + 'static,
    R: SlideRenderer<T> + 'static,
{
    async fn run(mut self) {
        let initial = self.controller.snapshot();
        self.renderer.render(self.controller.slides(), &initial);
        debug!(
            slides = self.controller.slides().len(),
            "carousel actor started"
        );

        loop {
            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(command) => {
                        if self.handle(command).is_break() {
                            break;
                        }
                    }
                    None => {
                        // every handle dropped
                        self.teardown();
                        break;
                    }
                },
                Some(token) = self.timer_rx.recv() => {
                    let transition = self.controller.fire_hop(token);
                    self.apply(transition);
                }
            }
        }
    }

    fn handle(&mut self, command: CarouselCommand<T>) -> ControlFlow<()> {
        let (transition, reply) = match command {
            CarouselCommand::Move { step, reply } => {
                (self.controller.move_slide(step), reply)
            }
            CarouselCommand::SetTarget { target, reply } => {
                (self.controller.observe_target(target), reply)
            }
            CarouselCommand::ReplaceSlides { slides, reply } => {
                (self.controller.replace_slides(slides), reply)
            }
            CarouselCommand::SetOffsetRadius { radius, reply } => {
                (self.controller.set_offset_radius(radius), reply)
            }
            CarouselCommand::Shutdown { reply } => {
                let snapshot = self.teardown();
                respond(reply, snapshot);
                return ControlFlow::Break(());
            }
        };

        let snapshot = self.apply(transition);
        respond(reply, snapshot);
        ControlFlow::Continue(())
    }

    fn apply(&mut self, transition: Transition) -> Snapshot {
        match transition.timer {
            TimerAction::Unchanged => {}
            TimerAction::Schedule(hop) => self.arm(hop),
            TimerAction::Cancel => self.disarm(),
        }

        self.renderer
            .render(self.controller.slides(), &transition.snapshot);
        self.snapshots.send_replace(transition.snapshot.clone());
        transition.snapshot
    }

    fn arm(&mut self, hop: ScheduledHop) {
        self.disarm();
        let timer_tx = self.timer_tx.clone();
        self.hop_task = Some(tokio::spawn(async move {
            tokio::time::sleep(hop.delay).await;
            let _ = timer_tx.send(hop.token);
        }));
    }

    fn disarm(&mut self) {
        if let Some(task) = self.hop_task.take() {
            task.abort();
        }
    }

    fn teardown(&mut self) -> Snapshot {
        self.disarm();
        self.controller.shutdown();
        let snapshot = self.controller.snapshot();
        info!(
            current = snapshot.current_index,
            "carousel actor stopped"
        );
        snapshot
    }
}

fn respond(reply: oneshot::Sender<Snapshot>, snapshot: Snapshot) {
    // The caller may have given up waiting; the state change still stands.
    let _ = reply.send(snapshot);
}
