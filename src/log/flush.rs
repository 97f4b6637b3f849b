//! Periodic background flushing of the file sink.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::log::sink::SinkShared;

struct Schedule {
    interval: Duration,
    /// Bumped on every reconfiguration so the worker can tell a timed-out
    /// wait apart from an interval change.
    generation: u64,
    cancelled: bool,
}

/// A cancellable periodic task that flushes the file sink.
///
/// The worker runs on its own thread and never blocks callers: interval
/// changes and cancellation are communicated through a condvar. Changing the
/// interval re-arms the timer immediately: one flush fires at the moment of
/// the change, then the new cadence takes over.
pub struct FlushScheduler {
    schedule: Arc<(Mutex<Schedule>, Condvar)>,
    fires: Arc<AtomicU64>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl FlushScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            schedule: Arc::new((
                Mutex::new(Schedule {
                    interval,
                    generation: 0,
                    cancelled: false,
                }),
                Condvar::new(),
            )),
            fires: Arc::new(AtomicU64::new(0)),
            worker: Mutex::new(None),
        }
    }

    /// Arms the scheduler against the given sink. A no-op if already running.
    pub(crate) fn start(&self, sink: Arc<SinkShared>) {
        let mut worker = self.worker.lock();
        if worker.is_some() {
            return;
        }

        self.schedule.0.lock().cancelled = false;
        let schedule = Arc::clone(&self.schedule);
        let fires = Arc::clone(&self.fires);
        *worker = Some(std::thread::spawn(move || run_worker(schedule, sink, fires)));
    }

    /// Stops the worker and waits for it to exit.
    ///
    /// After this returns, no further flush can occur, so the caller may
    /// safely close the file sink.
    pub fn cancel(&self) {
        {
            let (lock, condvar) = &*self.schedule;
            let mut schedule = lock.lock();
            schedule.cancelled = true;
            condvar.notify_all();
        }

        let handle = self.worker.lock().take();
        if let Some(handle) = handle {
            let _ = handle.join();
        }
    }

    /// Reconfigures the flush interval in place, re-arming the timer
    /// immediately. Safe to call whether or not the worker is running.
    pub fn set_interval(&self, interval: Duration) {
        let (lock, condvar) = &*self.schedule;
        let mut schedule = lock.lock();
        schedule.interval = interval;
        schedule.generation += 1;
        condvar.notify_all();
    }

    pub fn interval(&self) -> Duration {
        self.schedule.0.lock().interval
    }

    /// Number of times the scheduler has fired since creation.
    pub fn fire_count(&self) -> u64 {
        self.fires.load(Ordering::Relaxed)
    }

    pub fn is_running(&self) -> bool {
        self.worker.lock().is_some()
    }
}

fn run_worker(schedule: Arc<(Mutex<Schedule>, Condvar)>, sink: Arc<SinkShared>, fires: Arc<AtomicU64>) {
    let (lock, condvar) = &*schedule;
    let mut guard = lock.lock();
    loop {
        if guard.cancelled {
            return;
        }

        let generation = guard.generation;
        let deadline = Instant::now() + guard.interval;

        // Wait out the interval, waking early on cancellation or reconfiguration.
        loop {
            if guard.cancelled {
                return;
            }
            if guard.generation != generation {
                // Reconfigured: fire now, then continue on the new interval.
                break;
            }
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            let _ = condvar.wait_for(&mut guard, deadline - now);
        }

        // Fire without holding the schedule lock so a slow flush never
        // delays `set_interval` or `cancel`.
        drop(guard);
        let _ = sink.flush();
        fires.fetch_add(1, Ordering::Relaxed);
        guard = lock.lock();
    }
}
