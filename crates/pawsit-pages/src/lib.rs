//! Page views for the Pawsit marketplace frontend.
//!
//! Every page is a unit struct implementing [`View`]. Views take no
//! route-supplied input; whatever a page shows beyond its static markup is
//! fetched from the backend API by the browser after the page is on screen.
//! The route registry stores views behind shared handles and renders them
//! through this trait, so pages stay decoupled from routing.

use maud::Markup;

pub mod layout;
pub mod pages;

pub use pages::{
    AddPet, AllBookingInfo, BookingInfo, CaretakerInfo, CaretakerSignUp, FindCaretaker,
    HomePage, NotFoundPage, OwnerInfo, OwnerSignUp, PetInfo, SignIn,
};

/// A renderable page unit.
pub trait View: Send + Sync {
    /// Stable identifier, used in logs.
    fn name(&self) -> &'static str;

    /// Document title for the browser tab.
    fn title(&self) -> &'static str;

    /// Renders the page content. The layout wraps it with the site chrome.
    fn render(&self) -> Markup;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_renders_nonempty_markup() {
        let views: Vec<Box<dyn View>> = vec![
            Box::new(HomePage),
            Box::new(SignIn),
            Box::new(OwnerSignUp),
            Box::new(CaretakerSignUp),
            Box::new(PetInfo),
            Box::new(AddPet),
            Box::new(FindCaretaker),
            Box::new(OwnerInfo),
            Box::new(CaretakerInfo),
            Box::new(BookingInfo),
            Box::new(AllBookingInfo),
            Box::new(NotFoundPage),
        ];

        for view in views {
            let html = view.render().into_string();
            assert!(!html.is_empty(), "{} rendered nothing", view.name());
            assert!(!view.title().is_empty(), "{} has no title", view.name());
        }
    }
}
