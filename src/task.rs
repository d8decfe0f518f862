//! Background fetches whose results are dropped once the owning view goes away.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;

#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// A fetch bound to a view. Dropping the task cancels it; a cancelled task never delivers.
pub struct ViewTask<T> {
    rx: mpsc::Receiver<T>,
    cancel: CancelToken,
}

impl<T: Send + 'static> ViewTask<T> {
    pub fn spawn<F>(f: F) -> Self
    where
        F: FnOnce(&CancelToken) -> T + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let cancel = CancelToken::new();
        let token = cancel.clone();
        thread::spawn(move || {
            let out = f(&token);
            if !token.is_cancelled() {
                let _ = tx.send(out);
            }
        });
        Self { rx, cancel }
    }
}

impl<T> ViewTask<T> {
    /// Non-blocking poll for the render loop.
    pub fn try_take(&self) -> Option<T> {
        if self.cancel.is_cancelled() {
            return None;
        }
        self.rx.try_recv().ok()
    }

    /// Blocks until the result arrives; `None` when cancelled.
    pub fn wait(&self) -> Option<T> {
        if self.cancel.is_cancelled() {
            return None;
        }
        let out = self.rx.recv().ok()?;
        (!self.cancel.is_cancelled()).then_some(out)
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn token(&self) -> &CancelToken {
        &self.cancel
    }
}

impl<T> Drop for ViewTask<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Runs two independent fetches concurrently and waits for both.
pub fn fetch_both<A, B, FA, FB>(a: FA, b: FB) -> (A, B)
where
    A: Send,
    B: Send,
    FA: FnOnce() -> A + Send,
    FB: FnOnce() -> B + Send,
{
    thread::scope(|s| {
        let left = s.spawn(a);
        let right = b();
        match left.join() {
            Ok(left) => (left, right),
            Err(panic) => std::panic::resume_unwind(panic),
        }
    })
}

#[cfg(test)]
#[path = "tests/task_tests.rs"]
mod tests;
