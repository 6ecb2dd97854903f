use maud::{html, Markup};

use crate::View;

/// The signed-in owner's profile.
pub struct OwnerInfo;

impl View for OwnerInfo {
    fn name(&self) -> &'static str {
        "OwnerInfo"
    }

    fn title(&self) -> &'static str {
        "My profile"
    }

    fn render(&self) -> Markup {
        html! {
            h1 { "My profile" }
            dl #owner-profile hx-get="/api/v1/owner" hx-trigger="load" {
                dt { "Name" }
                dd {}
                dt { "Address" }
                dd {}
                dt { "Email" }
                dd {}
                dt { "Phone" }
                dd {}
            }
        }
    }
}
