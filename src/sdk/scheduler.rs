/// Ordered list of `(due_ms, item)` entries driven by a caller-supplied clock.
///
/// Items come out in non-decreasing due time; entries sharing a due time keep
/// their insertion order. `cancel_all` drops every pending entry at once.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    entries: Vec<Entry<T>>,
    next_seq: u64,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    due: u64,
    seq: u64,
    item: T,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn schedule(&mut self, due: u64, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        // Insert after every entry due at or before `due`.
        let pos = self
            .entries
            .partition_point(|e| (e.due, e.seq) <= (due, seq));
        self.entries.insert(pos, Entry { due, seq, item });
    }

    /// Removes and returns every item due at or before `now`, in order.
    pub fn advance_to(&mut self, now: u64) -> Vec<T> {
        let split = self.entries.partition_point(|e| e.due <= now);
        self.entries.drain(..split).map(|e| e.item).collect()
    }

    pub fn next_due(&self) -> Option<u64> {
        self.entries.first().map(|e| e.due)
    }

    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
