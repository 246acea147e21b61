/// Best score seen in this process, across restarts.
///
/// Lives as long as the engine, not as long as one game: `restart()` never
/// touches it. Updates are a monotonic max, so it never decreases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionScore {
    best: u32,
}

impl SessionScore {
    pub fn new(best: u32) -> Self {
        Self { best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record a score; returns true iff it strictly beat the previous best.
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Monotonic-max restore, used to seed the session from disk.
    pub fn restore(&mut self, best: u32) {
        self.best = self.best.max(best);
    }
}
