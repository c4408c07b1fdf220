//! Frame ticker: the host's per-frame scheduling primitive.
//!
//! [`FrameTicker`] spawns a background thread that delivers tick instants
//! over a channel at a fixed rate. The animator itself never schedules
//! anything; the host drains the channel and calls
//! [`PathAnimator::tick`](crate::animation::PathAnimator::tick) with each
//! instant, which keeps cancellation synchronous with respect to the
//! consuming loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, TrySendError};

/// Background tick source delivering [`Instant`]s at a fixed rate.
#[derive(Debug)]
pub struct FrameTicker {
    rx: Receiver<Instant>,
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl FrameTicker {
    /// Start a ticker at the given rate (ticks per second).
    ///
    /// Rates of zero are clamped to one tick per second.
    pub fn start(tick_hz: u32) -> Self {
        let interval = Duration::from_secs_f64(1.0 / f64::from(tick_hz.max(1)));

        // Capacity 1: a slow consumer drops frames instead of queueing a
        // backlog of stale instants.
        let (tx, rx) = bounded(1);
        let shutdown = Arc::new(AtomicBool::new(false));
        let thread_shutdown = Arc::clone(&shutdown);

        let handle = std::thread::spawn(move || {
            while !thread_shutdown.load(Ordering::Acquire) {
                std::thread::sleep(interval);
                match tx.try_send(Instant::now()) {
                    Ok(()) => {}
                    // Consumer is behind: drop the frame rather than queue
                    // a stale instant.
                    Err(TrySendError::Full(_)) => {}
                    Err(TrySendError::Disconnected(_)) => break,
                }
            }
        });

        Self {
            rx,
            shutdown,
            handle: Some(handle),
        }
    }

    /// Receiver end of the tick channel.
    pub fn receiver(&self) -> &Receiver<Instant> {
        &self.rx
    }

    /// Stop the ticker thread and wait for it to exit.
    pub fn stop(mut self) {
        self.signal_and_join();
    }

    fn signal_and_join(&mut self) {
        self.shutdown.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("Ticker thread panicked");
            }
        }
    }
}

impl Drop for FrameTicker {
    fn drop(&mut self) {
        self.signal_and_join();
    }
}
