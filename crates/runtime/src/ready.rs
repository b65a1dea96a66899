/// One-shot readiness latch.
///
/// Callbacks registered before the latch fires are queued and run, in
/// registration order, when it does; callbacks registered afterwards run
/// immediately. The latch never resets.
#[derive(Default)]
pub struct ReadyLatch {
    fired: bool,
    pending: Vec<Box<dyn FnOnce()>>,
}

impl ReadyLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.fired
    }

    pub fn when_ready(&mut self, callback: impl FnOnce() + 'static) {
        if self.fired {
            callback();
        } else {
            self.pending.push(Box::new(callback));
        }
    }

    /// Mark the latch ready and run everything queued. Firing twice is
    /// harmless; the queue is already empty.
    pub fn fire(&mut self) {
        self.fired = true;
        for callback in std::mem::take(&mut self.pending) {
            callback();
        }
    }
}
