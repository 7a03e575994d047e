//! History backends.
//!
//! - [`MemoryHistory`] - in-process entry stack (tests, non-browser targets)
//! - [`BrowserHistory`] - `window.history` in history mode (wasm32 only)

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Result of a history traversal request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// The backend moved synchronously; its location is up to date.
    Settled,
    /// The backend will report the move later (browser `popstate`).
    Pending,
    /// The requested entry does not exist.
    OutOfRange,
}

/// State object stored with each browser history entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub position: usize,
}

/// Storage for navigation history.
///
/// Locations exchanged with a backend are in-app paths (`/forms/x?y=1`);
/// any base path is the backend's concern.
pub trait HistoryBackend {
    /// Current in-app location.
    fn location(&self) -> String;

    /// Index of the current entry.
    fn position(&self) -> usize;

    /// Add an entry after the current one.
    fn push(&mut self, location: &str) -> Result<()>;

    /// Overwrite the current entry.
    fn replace(&mut self, location: &str) -> Result<()>;

    /// Move `delta` entries back (negative) or forward (positive).
    fn go(&mut self, delta: isize) -> Traversal;

    /// Href for an in-app location, as used in `<a href>`.
    fn href(&self, location: &str) -> String {
        location.to_string()
    }

    /// Re-read external state after the platform moved on its own.
    fn refresh(&mut self) {}
}

// ============================================================================
// MemoryHistory
// ============================================================================

/// History kept in memory.
#[derive(Clone, Debug)]
pub struct MemoryHistory {
    entries: Vec<String>,
    position: usize,
}

impl MemoryHistory {
    /// Creates a history whose single entry is `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            position: 0,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl HistoryBackend for MemoryHistory {
    fn location(&self) -> String {
        self.entries[self.position].clone()
    }

    fn position(&self) -> usize {
        self.position
    }

    fn push(&mut self, location: &str) -> Result<()> {
        self.entries.truncate(self.position + 1);
        self.entries.push(location.to_string());
        self.position += 1;
        Ok(())
    }

    fn replace(&mut self, location: &str) -> Result<()> {
        self.entries[self.position] = location.to_string();
        Ok(())
    }

    fn go(&mut self, delta: isize) -> Traversal {
        match self.position.checked_add_signed(delta) {
            Some(target) if target < self.entries.len() => {
                self.position = target;
                Traversal::Settled
            }
            _ => Traversal::OutOfRange,
        }
    }
}

// ============================================================================
// BrowserHistory
// ============================================================================

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserHistory;

#[cfg(target_arch = "wasm32")]
mod browser {
    use web_sys::{History, Window};

    use super::{HistoryBackend, HistoryEntry, Traversal};
    use crate::error::{Result, RouterError};
    use crate::location::{join_base, normalize_base, strip_base};

    fn js_error(err: wasm_bindgen::JsValue) -> RouterError {
        RouterError::History(format!("{:?}", err))
    }

    /// `window.history` with an optional base path (e.g. `/app`).
    pub struct BrowserHistory {
        window: Window,
        history: History,
        base: String,
        position: usize,
    }

    impl BrowserHistory {
        pub fn new(base: &str) -> Result<Self> {
            let window = web_sys::window().ok_or(RouterError::NoWindow)?;
            let history = window.history().map_err(js_error)?;
            let mut this = Self {
                window,
                history,
                base: normalize_base(base),
                position: 0,
            };

            match this.read_entry() {
                Some(entry) => this.position = entry.position,
                None => {
                    // First load: tag the landing entry so later popstates can be ordered.
                    let location = this.location();
                    this.write(&location, 0, false)?;
                }
            }
            Ok(this)
        }

        fn read_entry(&self) -> Option<HistoryEntry> {
            let state = self.history.state().ok()?;
            if state.is_null() || state.is_undefined() {
                return None;
            }
            serde_wasm_bindgen::from_value(state).ok()
        }

        /// Write `location` tagged with `position`. Callers commit the
        /// position only once the write succeeded.
        fn write(&self, location: &str, position: usize, push: bool) -> Result<()> {
            let entry = HistoryEntry { position };
            let state = serde_wasm_bindgen::to_value(&entry)
                .map_err(|e| RouterError::History(e.to_string()))?;
            let url = self.href(location);
            let written = if push {
                self.history.push_state_with_url(&state, "", Some(&url))
            } else {
                self.history.replace_state_with_url(&state, "", Some(&url))
            };
            written.map_err(js_error)
        }
    }

    impl HistoryBackend for BrowserHistory {
        fn location(&self) -> String {
            let location = self.window.location();
            let path = location.pathname().unwrap_or_else(|_| "/".to_string());
            let search = location.search().unwrap_or_default();
            let hash = location.hash().unwrap_or_default();
            format!("{}{}{}", strip_base(&path, &self.base), search, hash)
        }

        fn position(&self) -> usize {
            self.position
        }

        fn push(&mut self, location: &str) -> Result<()> {
            let position = self.position + 1;
            self.write(location, position, true)?;
            self.position = position;
            Ok(())
        }

        fn replace(&mut self, location: &str) -> Result<()> {
            self.write(location, self.position, false)
        }

        fn go(&mut self, delta: isize) -> Traversal {
            let Ok(delta) = i32::try_from(delta) else {
                return Traversal::OutOfRange;
            };
            match self.history.go_with_delta(delta) {
                Ok(()) => Traversal::Pending,
                Err(_) => Traversal::OutOfRange,
            }
        }

        fn href(&self, location: &str) -> String {
            join_base(&self.base, location)
        }

        fn refresh(&mut self) {
            if let Some(entry) = self.read_entry() {
                self.position = entry.position;
            }
        }
    }
}
