use maud::{html, Markup};

use crate::View;

/// Caretaker search.
pub struct FindCaretaker;

impl View for FindCaretaker {
    fn name(&self) -> &'static str {
        "FindCaretaker"
    }

    fn title(&self) -> &'static str {
        "Find a caretaker"
    }

    fn render(&self) -> Markup {
        html! {
            h1 { "Find a caretaker" }
            form hx-get="/api/v1/caretaker" hx-target="#caretaker-results" {
                label { "Near"
                    input type="text" name="address" placeholder="Your neighbourhood";
                }
                button type="submit" { "Search" }
            }
            section #caretaker-results {
                p { "Caretakers near you will appear here, best rated first." }
            }
        }
    }
}

/// A caretaker's public profile.
pub struct CaretakerInfo;

impl View for CaretakerInfo {
    fn name(&self) -> &'static str {
        "CaretakerInfo"
    }

    fn title(&self) -> &'static str {
        "Caretaker profile"
    }

    fn render(&self) -> Markup {
        html! {
            h1 { "Caretaker profile" }
            dl #caretaker-profile hx-get="/api/v1/caretaker" hx-trigger="load" {
                dt { "Name" }
                dd {}
                dt { "Address" }
                dd {}
                dt { "Phone" }
                dd {}
                dt { "Rating" }
                dd {}
            }
            form hx-post="/api/v1/owner/booking" hx-target="#booking-result" {
                label { "Instructions for the sitter"
                    textarea name="instruction" rows="4" {}
                }
                button type="submit" { "Request a booking" }
            }
            div #booking-result {}
        }
    }
}
