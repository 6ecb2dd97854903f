use thiserror::Error;

use crate::PageName;

/// Ways a route table can be rejected at build time.
///
/// The registry is built once at startup and immutable afterwards, so every
/// conflict is surfaced as an error instead of being papered over with a
/// silent overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A route was registered with a path that does not start with `/`.
    #[error("route {name} has invalid path {path:?}: paths must start with '/'")]
    InvalidPath { name: PageName, path: String },

    /// The same page name was registered twice.
    #[error("route name {0} registered twice")]
    DuplicateName(PageName),

    /// Two routes normalized to the same path.
    #[error("routes {first} and {second} both map to path {path:?}")]
    DuplicatePath {
        path: String,
        first: PageName,
        second: PageName,
    },
}
