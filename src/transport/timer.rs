//! Cancellable repeating tick timer.
//!
//! A [`Scheduler`] starts a recurring timer and hands back a [`TimerHandle`].
//! The handle is the only way to stop the recurrence: `cancel()` it, or drop
//! it. Each tick carries the [`TimerId`] of the timer that produced it so a
//! tick that was already queued when its timer got cancelled can be told
//! apart from a live one.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Identifies one started timer. Never reused by a transport.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Starts repeating timers.
pub trait Scheduler {
    /// Start a timer that fires every `period` until its handle is cancelled.
    fn start(&self, id: TimerId, period: Duration) -> TimerHandle;
}

/// Owning handle of a running timer. Dropping it cancels the timer.
pub struct TimerHandle {
    id: TimerId,
    cancelled: Arc<AtomicBool>,
    stop: Option<Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl TimerHandle {
    pub(crate) fn new(
        id: TimerId,
        cancelled: Arc<AtomicBool>,
        stop: Option<Sender<()>>,
        join: Option<JoinHandle<()>>,
    ) -> Self {
        Self {
            id,
            cancelled,
            stop,
            join,
        }
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Stop the recurrence and wait for the timer thread to exit.
    pub fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
        // Closing the stop channel wakes the thread out of its wait.
        self.stop.take();
        if let Some(join) = self.join.take() {
            if join.thread().id() != thread::current().id() {
                let _ = join.join();
            }
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Runs each timer on its own thread and delivers ticks into a channel.
///
/// Ticks are sent as `T::from(TimerId)`, so the receiving side decides what a
/// tick looks like in its own command type.
pub struct ThreadScheduler<T> {
    sink: Sender<T>,
}

impl<T> ThreadScheduler<T> {
    pub fn new(sink: Sender<T>) -> Self {
        Self { sink }
    }
}

impl<T> Scheduler for ThreadScheduler<T>
where
    T: From<TimerId> + Send + 'static,
{
    fn start(&self, id: TimerId, period: Duration) -> TimerHandle {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let cancelled = Arc::new(AtomicBool::new(false));
        let cancelled_for_thread = cancelled.clone();
        let sink = self.sink.clone();

        let join = thread::spawn(move || {
            loop {
                match stop_rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => {
                        if cancelled_for_thread.load(Ordering::SeqCst) {
                            break;
                        }
                        if sink.send(T::from(id)).is_err() {
                            break;
                        }
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            log::trace!("tick timer {:?} exited", id);
        });

        TimerHandle::new(id, cancelled, Some(stop_tx), Some(join))
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Scheduler that never fires on its own; tests drive ticks by hand and
    /// inspect which timers were started and cancelled.
    #[derive(Clone, Default)]
    pub(crate) struct ManualScheduler {
        started: Rc<RefCell<Vec<(TimerId, Arc<AtomicBool>)>>>,
    }

    impl ManualScheduler {
        pub(crate) fn started_count(&self) -> usize {
            self.started.borrow().len()
        }

        /// Ids of timers that were started and not yet cancelled.
        pub(crate) fn active(&self) -> Vec<TimerId> {
            self.started
                .borrow()
                .iter()
                .filter(|(_, cancelled)| !cancelled.load(Ordering::SeqCst))
                .map(|(id, _)| *id)
                .collect()
        }

        pub(crate) fn last_started(&self) -> Option<TimerId> {
            self.started.borrow().last().map(|(id, _)| *id)
        }
    }

    impl Scheduler for ManualScheduler {
        fn start(&self, id: TimerId, _period: Duration) -> TimerHandle {
            let cancelled = Arc::new(AtomicBool::new(false));
            self.started.borrow_mut().push((id, cancelled.clone()));
            TimerHandle::new(id, cancelled, None, None)
        }
    }
}
