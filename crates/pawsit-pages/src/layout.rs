//! Site-wide document chrome.
//!
//! The layout owns everything around a page's content: the document head,
//! the navigation bar and the footer. Navigation hrefs are supplied by the
//! caller from the route registry, never hardcoded here.

use maud::{html, Markup, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

/// Shared chrome wrapped around every page.
///
/// With `boost` enabled the body carries `hx-boost`, so anchor clicks are
/// intercepted, the new page is swapped in without a full reload and the real
/// URL is pushed onto the browser history. Disabled, every navigation is a
/// classic full-page load.
#[derive(Debug, Clone)]
pub struct Chrome {
    nav: Vec<(String, String)>,
    boost: bool,
}

impl Default for Chrome {
    fn default() -> Self {
        Self::new()
    }
}

impl Chrome {
    pub fn new() -> Self {
        Self {
            nav: Vec::new(),
            boost: true,
        }
    }

    /// Appends a navigation bar entry.
    pub fn nav_link(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.nav.push((label.into(), href.into()));
        self
    }

    /// Enables or disables boosted (history-API) navigation.
    pub fn boost(mut self, on: bool) -> Self {
        self.boost = on;
        self
    }

    /// Wraps page content into a full HTML document.
    pub fn render(&self, title: &str, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) " · Pawsit" }
                    script src=(HTMX_SRC) {}
                }
                body hx-boost=[self.boost.then_some("true")] {
                    header {
                        nav {
                            @for (label, href) in &self.nav {
                                a href=(href) { (label) }
                            }
                        }
                    }
                    main {
                        (content)
                    }
                    footer {
                        small { "Pawsit, loving care while you are away" }
                    }
                }
            }
        }
    }
}
