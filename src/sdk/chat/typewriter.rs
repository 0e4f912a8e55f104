pub const TYPING_INTERVAL_MS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Running { started_at: u64 },
    Cancelled,
}

/// Reveals one character of `text` every `interval_ms` once started.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    char_count: usize,
    interval_ms: u64,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, interval_ms: u64) -> Self {
        let text = text.into();
        let char_count = text.chars().count();
        Self {
            text,
            char_count,
            interval_ms: interval_ms.max(1),
            shown: 0,
            phase: Phase::Idle,
        }
    }

    /// (Re)starts typing from the first character.
    pub fn start(&mut self, now: u64) {
        self.shown = 0;
        self.phase = Phase::Running { started_at: now };
    }

    /// Shows the whole text without animation.
    pub fn complete(&mut self) {
        self.shown = self.char_count;
        self.phase = Phase::Idle;
    }

    /// Advances to `now`; returns true when more text became visible.
    pub fn advance(&mut self, now: u64) -> bool {
        let Phase::Running { started_at } = self.phase else {
            return false;
        };
        let target = (now.saturating_sub(started_at) / self.interval_ms) as usize;
        let target = target.min(self.char_count);
        if target == self.char_count {
            self.phase = Phase::Idle;
        }
        if target > self.shown {
            self.shown = target;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        if matches!(self.phase, Phase::Running { .. }) {
            self.phase = Phase::Cancelled;
        }
    }

    pub fn visible(&self) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
        &self.text[..end]
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    pub fn is_done(&self) -> bool {
        self.shown == self.char_count
    }

    /// Time from start until the last character shows.
    pub fn duration_ms(&self) -> u64 {
        self.char_count as u64 * self.interval_ms
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
