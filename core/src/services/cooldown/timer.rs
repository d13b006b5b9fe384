//! Cancellable periodic tick source

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// One cooldown tick, tagged with the cooldown generation it was started for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownTick {
    pub generation: u64,
}

/// Handle to the task emitting cooldown ticks.
///
/// At most one task is alive per handle: starting again aborts the previous
/// task first, and dropping the handle aborts whatever is running.
#[derive(Debug, Default)]
pub struct CooldownTimer {
    handle: Option<JoinHandle<()>>,
}

impl CooldownTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a task sending `ticks` ticks, one every `period`.
    ///
    /// The task stops on its own after the last tick or when the receiver
    /// goes away. Must be called from within a tokio runtime.
    pub fn start(
        &mut self,
        generation: u64,
        ticks: u32,
        period: Duration,
        sender: UnboundedSender<CooldownTick>,
    ) {
        self.cancel();

        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            for _ in 0..ticks {
                interval.tick().await;
                if sender.send(CooldownTick { generation }).is_err() {
                    tracing::debug!(generation, "Cooldown receiver dropped, stopping timer");
                    return;
                }
            }
            tracing::debug!(generation, "Cooldown timer finished");
        });

        self.handle = Some(handle);
    }

    /// Abort the running task, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Whether a tick task is still running
    pub fn is_active(&self) -> bool {
        self.handle
            .as_ref()
            .map_or(false, |handle| !handle.is_finished())
    }
}

impl Drop for CooldownTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
