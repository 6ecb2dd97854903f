// File: src/routes.rs
// Purpose: The route table, every page the frontend can show in one place

use std::sync::Arc;

use pawsit_pages::{
    AddPet, AllBookingInfo, BookingInfo, CaretakerInfo, CaretakerSignUp, FindCaretaker,
    HomePage, NotFoundPage, OwnerInfo, OwnerSignUp, PetInfo, SignIn, View,
};
use pawsit_router::{NavigationMode, PageName, Registry, RegistryError};

/// The registry as the application uses it: views behind shared handles.
pub type PageRegistry = Registry<Arc<dyn View>>;

/// Builds the marketplace route table.
///
/// This is the single place a path string is paired with a page. Everything
/// else asks the registry, either by resolving a URL or by looking a path up
/// through its [`PageName`].
pub fn registry(mode: NavigationMode) -> Result<PageRegistry, RegistryError> {
    Registry::builder()
        .navigation(mode)
        .route(PageName::HomePage, "/home", page(HomePage))
        .route(PageName::SignIn, "/signin", page(SignIn))
        .route(PageName::OwnerSignUp, "/owner_signup", page(OwnerSignUp))
        .route(PageName::CaretakerSignUp, "/caretaker_signup", page(CaretakerSignUp))
        .route(PageName::PetInfo, "/pet_info", page(PetInfo))
        .route(PageName::AddPet, "/add_pet", page(AddPet))
        .route(PageName::FindCaretaker, "/find_caretaker", page(FindCaretaker))
        .route(PageName::OwnerInfo, "/owner_info", page(OwnerInfo))
        .route(PageName::CaretakerInfo, "/caretaker_info", page(CaretakerInfo))
        .route(PageName::BookingInfo, "/booking_info", page(BookingInfo))
        .route(PageName::AllBookingInfo, "/all_bookings_info", page(AllBookingInfo))
        .fallback(page(NotFoundPage))
        .build()
}

fn page(view: impl View + 'static) -> Arc<dyn View> {
    Arc::new(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use pawsit_router::Resolution;

    #[test]
    fn test_every_page_name_is_registered() {
        let registry = registry(NavigationMode::History).unwrap();
        assert_eq!(registry.len(), PageName::ALL.len());

        for name in PageName::ALL {
            assert!(registry.path_of(name).is_some(), "{name} missing from table");
        }
    }

    #[rstest]
    #[case(PageName::HomePage, "/home")]
    #[case(PageName::SignIn, "/signin")]
    #[case(PageName::OwnerSignUp, "/owner_signup")]
    #[case(PageName::CaretakerSignUp, "/caretaker_signup")]
    #[case(PageName::PetInfo, "/pet_info")]
    #[case(PageName::AddPet, "/add_pet")]
    #[case(PageName::FindCaretaker, "/find_caretaker")]
    #[case(PageName::OwnerInfo, "/owner_info")]
    #[case(PageName::CaretakerInfo, "/caretaker_info")]
    #[case(PageName::BookingInfo, "/booking_info")]
    #[case(PageName::AllBookingInfo, "/all_bookings_info")]
    fn test_table_paths_are_exact(#[case] name: PageName, #[case] path: &str) {
        let registry = registry(NavigationMode::History).unwrap();
        assert_eq!(registry.path_of(name), Some(path));

        match registry.resolve(path) {
            Resolution::Page(route) => assert_eq!(route.name(), name),
            Resolution::NotFound(_) => panic!("{path} must resolve"),
        }
    }

    #[test]
    fn test_unknown_url_falls_back_to_not_found_page() {
        let registry = registry(NavigationMode::History).unwrap();

        let resolution = registry.resolve("/does_not_exist");
        assert!(resolution.is_not_found());

        let fallback = resolution.view().expect("fallback page registered");
        assert_eq!(fallback.name(), "NotFound");
    }

    #[test]
    fn test_view_render_matches_registered_page() {
        let registry = registry(NavigationMode::History).unwrap();

        let resolution = registry.resolve("/find_caretaker");
        let view = resolution.view().expect("registered page");
        assert!(view.render().into_string().contains("Find a caretaker"));
    }
}
