//! # Pawsit Router
//!
//! Route registry for the Pawsit marketplace frontend. Each route associates
//! a unique [`PageName`] and a URL path with a page view; the registry is
//! built once at application startup, validated as a whole, and immutable
//! afterwards.
//!
//! Lookup is an exact match against the registered paths. Incoming paths are
//! normalized first (trailing slashes, duplicate slashes), with a zero-copy
//! fast path for paths that are already canonical. A path that matches no
//! route resolves to [`Resolution::NotFound`] carrying the fallback view when
//! one was registered; it never panics.
//!
//! ## Example
//!
//! ```
//! use pawsit_router::{PageName, Registry, Resolution};
//!
//! let registry = Registry::builder()
//!     .route(PageName::HomePage, "/home", "home page")
//!     .route(PageName::BookingInfo, "/booking_info", "booking page")
//!     .build()?;
//!
//! assert!(matches!(registry.resolve("/home"), Resolution::Page(_)));
//! assert_eq!(registry.path_of(PageName::BookingInfo), Some("/booking_info"));
//! assert!(registry.resolve("/does_not_exist").is_not_found());
//! # Ok::<(), pawsit_router::RegistryError>(())
//! ```

use std::collections::HashMap;

mod error;
mod history;
mod name;
pub mod path;

pub use error::RegistryError;
pub use history::{History, MemoryHistory, NavigationError, Navigator};
pub use name::{PageName, UnknownPageName};
pub use path::{is_canonical_path, normalize_path};

/// A single route: the association of a page name, a URL path and a view.
///
/// The registry is generic over the view handle `V`. The application
/// instantiates it with a shared handle (for example `Arc<dyn View>`) so the
/// registry never owns the rendering side of a page.
#[derive(Debug, Clone)]
pub struct Route<V> {
    name: PageName,
    path: String,
    view: V,
}

impl<V> Route<V> {
    /// The symbolic name of this route.
    pub fn name(&self) -> PageName {
        self.name
    }

    /// The canonical URL path of this route.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The view registered for this route.
    pub fn view(&self) -> &V {
        &self.view
    }
}

/// How the mounted router drives browser navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavigationMode {
    /// History-API navigation: anchor clicks are intercepted, the matching
    /// view is swapped in without a full page reload, and the real URL is
    /// pushed so the browser's back and forward buttons keep working.
    #[default]
    History,
    /// Classic full-page loads on every navigation.
    Reload,
}

/// Result of resolving a URL path against the registry.
#[derive(Debug)]
pub enum Resolution<'a, V> {
    /// The path matched a registered route.
    Page(&'a Route<V>),
    /// No route matched. Carries the fallback view when one was registered.
    NotFound(Option<&'a V>),
}

impl<'a, V> Resolution<'a, V> {
    /// Whether the path matched no registered route.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound(_))
    }

    /// The view to render: the matched page, or the fallback if any.
    pub fn view(&self) -> Option<&'a V> {
        match self {
            Resolution::Page(route) => Some(route.view()),
            Resolution::NotFound(fallback) => *fallback,
        }
    }
}

/// Collects routes and validates them into an immutable [`Registry`].
///
/// Builder methods consume and return `self` for chaining. All validation
/// happens in [`build`](RegistryBuilder::build): paths must start with `/`,
/// and both names and normalized paths must be unique across the table.
pub struct RegistryBuilder<V> {
    entries: Vec<(PageName, String, V)>,
    fallback: Option<V>,
    navigation: NavigationMode,
}

impl<V> RegistryBuilder<V> {
    /// Registers a route under the given name and path.
    pub fn route(mut self, name: PageName, path: impl Into<String>, view: V) -> Self {
        self.entries.push((name, path.into(), view));
        self
    }

    /// Registers the view rendered when no route matches.
    pub fn fallback(mut self, view: V) -> Self {
        self.fallback = Some(view);
        self
    }

    /// Selects the navigation mode the mounted router will use.
    pub fn navigation(mut self, mode: NavigationMode) -> Self {
        self.navigation = mode;
        self
    }

    /// Validates the collected routes and builds the registry.
    pub fn build(self) -> Result<Registry<V>, RegistryError> {
        let mut routes: Vec<Route<V>> = Vec::with_capacity(self.entries.len());
        let mut by_name = HashMap::with_capacity(self.entries.len());
        let mut by_path: HashMap<String, usize> = HashMap::with_capacity(self.entries.len());

        for (name, raw_path, view) in self.entries {
            if !raw_path.starts_with('/') {
                return Err(RegistryError::InvalidPath {
                    name,
                    path: raw_path,
                });
            }
            let path = normalize_path(&raw_path).into_owned();

            let index = routes.len();
            if by_name.insert(name, index).is_some() {
                return Err(RegistryError::DuplicateName(name));
            }
            if let Some(previous) = by_path.insert(path.clone(), index) {
                return Err(RegistryError::DuplicatePath {
                    path,
                    first: routes[previous].name,
                    second: name,
                });
            }

            routes.push(Route { name, path, view });
        }

        Ok(Registry {
            routes,
            by_name,
            by_path,
            fallback: self.fallback,
            navigation: self.navigation,
        })
    }
}

/// The route registry: an immutable table mapping page names and URL paths to
/// views, constructed once at startup via [`Registry::builder`].
#[derive(Debug)]
pub struct Registry<V> {
    routes: Vec<Route<V>>,
    by_name: HashMap<PageName, usize>,
    by_path: HashMap<String, usize>,
    fallback: Option<V>,
    navigation: NavigationMode,
}

impl<V> Registry<V> {
    /// Starts building a registry.
    pub fn builder() -> RegistryBuilder<V> {
        RegistryBuilder {
            entries: Vec::new(),
            fallback: None,
            navigation: NavigationMode::default(),
        }
    }

    /// Resolves a URL path to the route registered for it.
    ///
    /// The path is normalized before lookup, so `/home/` and `//home` resolve
    /// like `/home`. An unmatched path yields [`Resolution::NotFound`].
    pub fn resolve(&self, url_path: &str) -> Resolution<'_, V> {
        let normalized = normalize_path(url_path);
        match self.by_path.get(normalized.as_ref()) {
            Some(&index) => Resolution::Page(&self.routes[index]),
            None => Resolution::NotFound(self.fallback.as_ref()),
        }
    }

    /// Reverse lookup: the concrete path registered under a name.
    ///
    /// UI code that triggers navigation uses this instead of hardcoding path
    /// strings. Returns `None` when the name was never registered.
    pub fn path_of(&self, name: PageName) -> Option<&str> {
        self.by_name
            .get(&name)
            .map(|&index| self.routes[index].path.as_str())
    }

    /// The route registered under a name, if any.
    pub fn get(&self, name: PageName) -> Option<&Route<V>> {
        self.by_name.get(&name).map(|&index| &self.routes[index])
    }

    /// Whether the path matches a registered route after normalization.
    pub fn contains_path(&self, url_path: &str) -> bool {
        self.by_path
            .contains_key(normalize_path(url_path).as_ref())
    }

    /// All routes, in registration order.
    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    /// Number of registered routes, not counting the fallback.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the registry has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The fallback view, if one was registered.
    pub fn fallback(&self) -> Option<&V> {
        self.fallback.as_ref()
    }

    /// The navigation mode selected at build time.
    pub fn navigation(&self) -> NavigationMode {
        self.navigation
    }
}
