//! Session history and programmatic navigation.
//!
//! The registry itself is a pure lookup table. This module is the seam to
//! whatever navigation mechanism the host environment provides: a [`History`]
//! keeps the current location plus the entries behind and ahead of it, and a
//! [`Navigator`] drives it by page name so path strings never leak into UI
//! code.

use std::sync::Arc;

use thiserror::Error;

use crate::{PageName, Registry, Resolution};

/// Host-environment navigation history.
///
/// The in-process implementation is [`MemoryHistory`]; a browser-backed host
/// would implement this over the History API. Entries are real URL paths, not
/// hash fragments, so back and forward keep working natively.
pub trait History {
    /// The current location path.
    fn location(&self) -> &str;

    /// Pushes a new entry, dropping any entries ahead of the current one.
    fn push(&mut self, path: &str);

    /// Replaces the current entry in place.
    fn replace(&mut self, path: &str);

    /// Moves one entry back. Returns `false` at the start of the session.
    fn back(&mut self) -> bool;

    /// Moves one entry forward. Returns `false` at the end of the session.
    fn forward(&mut self) -> bool;
}

/// In-process session history.
///
/// # Examples
///
/// ```
/// use pawsit_router::{History, MemoryHistory};
///
/// let mut history = MemoryHistory::default();
/// history.push("/home");
/// history.push("/signin");
/// assert_eq!(history.location(), "/signin");
///
/// assert!(history.back());
/// assert_eq!(history.location(), "/home");
/// ```
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    /// Creates a history with the given initial location.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
        }
    }

    /// Number of entries currently in the session.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A session always holds at least its initial location.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn location(&self) -> &str {
        &self.entries[self.index]
    }

    fn push(&mut self, path: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(path.to_string());
        self.index += 1;
    }

    fn replace(&mut self, path: &str) {
        self.entries[self.index] = path.to_string();
    }

    fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    fn forward(&mut self) -> bool {
        if self.index + 1 == self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }
}

/// Failure modes of programmatic navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The requested name is not in the registry.
    #[error("no route registered under name {0}")]
    UnknownName(PageName),
}

/// Programmatic navigation over a shared registry.
///
/// UI code asks for a page by [`PageName`]; the navigator looks the concrete
/// path up in the registry and pushes it onto the session history.
///
/// # Examples
///
/// ```
/// use pawsit_router::{MemoryHistory, Navigator, PageName, Registry};
/// use std::sync::Arc;
///
/// let registry = Registry::builder()
///     .route(PageName::HomePage, "/home", ())
///     .build()?;
///
/// let mut nav = Navigator::new(Arc::new(registry), MemoryHistory::default());
/// assert_eq!(nav.navigate(PageName::HomePage)?, "/home");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Navigator<V, H = MemoryHistory> {
    registry: Arc<Registry<V>>,
    history: H,
}

impl<V, H: History> Navigator<V, H> {
    /// Couples a registry with a history backend.
    pub fn new(registry: Arc<Registry<V>>, history: H) -> Self {
        Self { registry, history }
    }

    /// Navigates to a named route, pushing its path onto the history.
    ///
    /// Returns the path navigated to, or [`NavigationError::UnknownName`]
    /// when the name was never registered.
    pub fn navigate(&mut self, name: PageName) -> Result<&str, NavigationError> {
        let path = self
            .registry
            .path_of(name)
            .ok_or(NavigationError::UnknownName(name))?;
        self.history.push(path);
        Ok(self.history.location())
    }

    /// Resolves the current location against the registry.
    pub fn current(&self) -> Resolution<'_, V> {
        self.registry.resolve(self.history.location())
    }

    /// Moves one entry back in the session history.
    pub fn back(&mut self) -> bool {
        self.history.back()
    }

    /// Moves one entry forward in the session history.
    pub fn forward(&mut self) -> bool {
        self.history.forward()
    }

    /// The underlying history, for inspection.
    pub fn history(&self) -> &H {
        &self.history
    }
}
