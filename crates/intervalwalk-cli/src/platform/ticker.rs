use std::collections::HashMap;
use std::time::Duration;

use intervalwalk_core::{Command, Subscription, TickScheduler};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// One interval task per subscription, each feeding `Command::Tick` into the
/// session loop.
///
/// Aborting a task stops further sends, but a tick may already sit in the
/// channel; the controller drops it because the subscription is no longer
/// active.
pub struct TokioTicker {
    tx: UnboundedSender<Command>,
    period: Duration,
    tasks: HashMap<Subscription, JoinHandle<()>>,
}

impl TokioTicker {
    pub fn new(tx: UnboundedSender<Command>, period: Duration) -> Self {
        Self {
            tx,
            period,
            tasks: HashMap::new(),
        }
    }
}

impl TickScheduler for TokioTicker {
    fn every_second(&mut self, subscription: Subscription) {
        let tx = self.tx.clone();
        let period = self.period;
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(Command::Tick(subscription)).is_err() {
                    break;
                }
            }
        });
        if let Some(previous) = self.tasks.insert(subscription, handle) {
            previous.abort();
        }
    }

    fn cancel(&mut self, subscription: Subscription) {
        if let Some(handle) = self.tasks.remove(&subscription) {
            handle.abort();
        }
    }
}

impl Drop for TokioTicker {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn delivers_ticks_until_cancelled() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = TokioTicker::new(tx, Duration::from_secs(1));
        let sub = Subscription(7);
        ticker.every_second(sub);

        tokio::time::sleep(Duration::from_millis(3500)).await;
        let mut got = Vec::new();
        while let Ok(command) = rx.try_recv() {
            got.push(command);
        }
        assert_eq!(got, vec![Command::Tick(sub); 3]);

        ticker.cancel(sub);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }
}
