//! Fixed-interval worker thread
//!
//! `IntervalThread` invokes a task once per interval on a dedicated thread.
//! If an invocation overruns the interval, the task is reinvoked as soon as it
//! returns; invocations never overlap and no catch-up burst is injected.
//! Shutdown is cooperative: `stop` flags the worker under the thread's own
//! lock, wakes it, and joins before returning, so the task is guaranteed to
//! never run again afterwards.

use std::io;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, error};

struct Shared {
    stop: Mutex<bool>,
    wake: Condvar,
}

/// A thread that runs a task at a fixed interval until stopped
pub struct IntervalThread {
    shared: Arc<Shared>,
    handle: Option<JoinHandle<()>>,
}

impl IntervalThread {
    /// Start a named worker invoking `task` once per `interval`.
    ///
    /// The first invocation happens immediately. Fails only if the OS refuses
    /// to spawn the thread.
    pub fn spawn<F>(name: &str, interval: Duration, mut task: F) -> io::Result<Self>
    where
        F: FnMut() + Send + 'static,
    {
        let shared = Arc::new(Shared {
            stop: Mutex::new(false),
            wake: Condvar::new(),
        });
        let worker = Arc::clone(&shared);

        let handle = thread::Builder::new()
            .name(name.to_owned())
            .spawn(move || loop {
                {
                    let stop = worker.stop.lock().expect("interval stop lock poisoned");
                    if *stop {
                        return;
                    }
                }

                let started = Instant::now();
                task();

                // Pace the next run. An overrunning task leaves no remaining
                // wait and is reinvoked right away.
                let mut remaining = interval.saturating_sub(started.elapsed());
                let mut stop = worker.stop.lock().expect("interval stop lock poisoned");
                while !*stop && !remaining.is_zero() {
                    let wait_start = Instant::now();
                    let (guard, timeout) = worker
                        .wake
                        .wait_timeout(stop, remaining)
                        .expect("interval stop lock poisoned");
                    stop = guard;
                    if timeout.timed_out() {
                        break;
                    }
                    remaining = remaining.saturating_sub(wait_start.elapsed());
                }
                if *stop {
                    return;
                }
            })?;

        debug!("interval thread '{name}' started ({}ms)", interval.as_millis());
        Ok(Self {
            shared,
            handle: Some(handle),
        })
    }

    /// Stop the worker and join it. Idempotent. After this returns the task
    /// will never be invoked again.
    pub fn stop(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        {
            let mut stop = self.shared.stop.lock().expect("interval stop lock poisoned");
            *stop = true;
        }
        self.shared.wake.notify_all();
        if handle.join().is_err() {
            error!("interval worker panicked");
        }
    }
}

impl Drop for IntervalThread {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_task_runs_repeatedly() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&count);
        let mut worker = IntervalThread::spawn("test-repeat", Duration::from_millis(5), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        thread::sleep(Duration::from_millis(60));
        worker.stop();
        // First run is immediate, then roughly once per 5ms.
        assert!(count.load(Ordering::SeqCst) >= 2);
    }

    #[test]
    fn test_stop_before_first_interval() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&count);
        let mut worker = IntervalThread::spawn("test-early-stop", Duration::from_millis(10), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        // Stop well inside the first interval; must not deadlock.
        thread::sleep(Duration::from_millis(2));
        worker.stop();

        let after_stop = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(count.load(Ordering::SeqCst), after_stop);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut worker =
            IntervalThread::spawn("test-idempotent", Duration::from_millis(5), || {}).unwrap();
        worker.stop();
        worker.stop();
    }
}
