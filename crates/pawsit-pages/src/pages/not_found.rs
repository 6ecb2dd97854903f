use maud::{html, Markup};

use crate::View;

/// Fallback page for URLs that match no route.
pub struct NotFoundPage;

impl View for NotFoundPage {
    fn name(&self) -> &'static str {
        "NotFound"
    }

    fn title(&self) -> &'static str {
        "Page not found"
    }

    fn render(&self) -> Markup {
        html! {
            h1 { "404, this page wandered off" }
            p { "The address you followed does not match any page. The navigation above will get you back on track." }
        }
    }
}
