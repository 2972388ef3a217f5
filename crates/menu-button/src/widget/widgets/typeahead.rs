//! Typeahead search over menu item labels.
//!
//! Typing printable characters while a menu is open moves focus to the next
//! item whose label starts with the typed text. Characters accumulate into a
//! buffer until the user pauses for longer than the timeout; the pause is
//! detected lazily on the next keystroke, no timer runs in the background.
//!
//! When the accumulated buffer matches nothing, the search is retried with only
//! the most recent character. Pressing the same letter repeatedly therefore
//! cycles through every item starting with that letter.

use std::time::{Duration, Instant};

use menu_button_core::{SharedClock, SystemClock, logging::targets};

use super::action::MenuItem;

/// Default inactivity window after which the buffer is discarded.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(500);

/// Incremental prefix search state.
pub struct Typeahead {
    buffer: String,
    last_input: Option<Instant>,
    timeout: Duration,
    clock: SharedClock,
}

impl Typeahead {
    /// Create a typeahead with the default timeout and the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock::shared(), DEFAULT_TIMEOUT)
    }

    /// Create a typeahead with an explicit clock and timeout.
    pub fn with_clock(clock: SharedClock, timeout: Duration) -> Self {
        Self {
            buffer: String::new(),
            last_input: None,
            timeout,
            clock,
        }
    }

    /// The accumulated search text, lower-cased.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The inactivity timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether a search is in progress (the buffer is non-empty and fresh).
    pub fn is_active(&self) -> bool {
        !self.buffer.is_empty() && !self.is_stale(self.clock.now())
    }

    /// Discard the buffer.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.last_input = None;
    }

    fn is_stale(&self, now: Instant) -> bool {
        self.last_input
            .is_none_or(|last| now.saturating_duration_since(last) > self.timeout)
    }

    /// Feed one character and search `items` for a match.
    ///
    /// The search starts just after `current` and wraps around, so the item at
    /// `current` is considered last. Returns the index of the matching item, or
    /// `None` if nothing matches; on `None` the caller keeps its position.
    pub fn search(&mut self, ch: char, items: &[MenuItem], current: usize) -> Option<usize> {
        let now = self.clock.now();
        if self.is_stale(now) {
            self.buffer.clear();
        }

        // A leading space never starts a search.
        if ch.is_whitespace() && self.buffer.is_empty() {
            return None;
        }

        self.buffer.extend(ch.to_lowercase());
        self.last_input = Some(now);

        let found = find_from(items, current, &self.buffer).or_else(|| {
            let last: String = ch.to_lowercase().collect();
            if last == self.buffer {
                None
            } else {
                find_from(items, current, &last)
            }
        });

        tracing::trace!(
            target: targets::TYPEAHEAD,
            buffer = %self.buffer,
            current,
            ?found,
            "typeahead search"
        );
        found
    }
}

impl Default for Typeahead {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Typeahead {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typeahead")
            .field("buffer", &self.buffer)
            .field("last_input", &self.last_input)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// First item after `current` (wrapping) whose label starts with `prefix`.
fn find_from(items: &[MenuItem], current: usize, prefix: &str) -> Option<usize> {
    let count = items.len();
    (1..=count)
        .map(|offset| (current + offset) % count)
        .find(|&index| items[index].matches_prefix(prefix))
}
