use maud::{html, Markup};

use crate::View;

/// Landing page.
pub struct HomePage;

impl View for HomePage {
    fn name(&self) -> &'static str {
        "HomePage"
    }

    fn title(&self) -> &'static str {
        "Home"
    }

    fn render(&self) -> Markup {
        html! {
            section.hero {
                h1 { "Find a sitter your pet will love" }
                p {
                    "Pawsit connects pet owners with trusted caretakers nearby. "
                    "Browse profiles, check ratings and book a stay in minutes."
                }
            }
            section.highlights {
                article {
                    h2 { "For owners" }
                    p { "Add your pets, search caretakers around you and keep every booking in one place." }
                }
                article {
                    h2 { "For caretakers" }
                    p { "Create a profile, collect reviews and grow your rating with every happy stay." }
                }
            }
        }
    }
}
