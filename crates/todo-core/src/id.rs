//! Item id generation.
//!
//! Ids are creation timestamps in milliseconds. Two items created within the
//! same millisecond would collide, so the generator never hands out an id
//! lower than or equal to the previous one: `next = max(now, last + 1)`.

use std::cell::Cell;
use std::fmt;

use crate::domain::{Item, ItemId};

type Clock = Box<dyn Fn() -> u64>;

fn system_millis() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}

/// Strictly increasing, timestamp-based id source
pub struct IdGenerator {
    clock: Clock,
    last: Cell<u64>,
}

impl IdGenerator {
    /// Generator backed by the system clock
    pub fn new() -> Self {
        Self::with_clock(system_millis)
    }

    /// Generator backed by a custom millisecond clock
    pub fn with_clock(clock: impl Fn() -> u64 + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            last: Cell::new(0),
        }
    }

    /// Never issue an id at or below the largest id in `items`
    pub fn seed_from(&self, items: &[Item]) {
        if let Some(max) = items.iter().map(|item| item.id.0).max() {
            if max > self.last.get() {
                self.last.set(max);
            }
        }
    }

    pub fn next_id(&self) -> ItemId {
        let now = (self.clock)();
        let id = now.max(self.last.get().saturating_add(1));
        self.last.set(id);
        ItemId(id)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdGenerator").field("last", &self.last.get()).finish()
    }
}
