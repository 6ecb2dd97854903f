//! Integration tests for the route registry.
//!
//! Covers construction-time validation (duplicate names and paths, invalid
//! paths), exact-match resolution with normalization, reverse lookup by name
//! and the not-found fallback.

use pretty_assertions::assert_eq;
use rstest::rstest;

use pawsit_router::{
    NavigationMode, PageName, Registry, RegistryError, Resolution,
};

/// A registry shaped like the real application table, with string views so
/// matches are easy to assert on.
fn marketplace_registry() -> Registry<&'static str> {
    Registry::builder()
        .route(PageName::HomePage, "/home", "home")
        .route(PageName::SignIn, "/signin", "signin")
        .route(PageName::OwnerSignUp, "/owner_signup", "owner signup")
        .route(PageName::CaretakerSignUp, "/caretaker_signup", "caretaker signup")
        .route(PageName::PetInfo, "/pet_info", "pet info")
        .route(PageName::AddPet, "/add_pet", "add pet")
        .route(PageName::FindCaretaker, "/find_caretaker", "find caretaker")
        .route(PageName::OwnerInfo, "/owner_info", "owner info")
        .route(PageName::CaretakerInfo, "/caretaker_info", "caretaker info")
        .route(PageName::BookingInfo, "/booking_info", "booking info")
        .route(PageName::AllBookingInfo, "/all_bookings_info", "all bookings")
        .fallback("not found")
        .build()
        .expect("table is conflict-free")
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
fn resolve_and_path_of_are_inverse(#[case] name: PageName, #[case] path: &str) {
    let registry = marketplace_registry();

    // name -> path
    assert_eq!(registry.path_of(name), Some(path));

    // path -> the route registered under that name
    match registry.resolve(path) {
        Resolution::Page(route) => {
            assert_eq!(route.name(), name);
            assert_eq!(route.path(), path);
        }
        Resolution::NotFound(_) => panic!("{path} must resolve to {name}"),
    }
}

#[test]
fn all_names_and_paths_are_pairwise_distinct() {
    let registry = marketplace_registry();
    assert_eq!(registry.len(), PageName::ALL.len());

    let mut names = std::collections::HashSet::new();
    let mut paths = std::collections::HashSet::new();
    for route in registry.routes() {
        assert!(names.insert(route.name()));
        assert!(paths.insert(route.path().to_string()));
    }
}

#[test]
fn unregistered_path_resolves_to_not_found() {
    let registry = marketplace_registry();

    let resolution = registry.resolve("/does_not_exist");
    assert!(resolution.is_not_found());
    assert_eq!(resolution.view(), Some(&"not found"));
}

#[test]
fn not_found_without_fallback_carries_no_view() {
    let registry: Registry<&str> = Registry::builder()
        .route(PageName::HomePage, "/home", "home")
        .build()
        .unwrap();

    let resolution = registry.resolve("/unregistered");
    assert!(resolution.is_not_found());
    assert_eq!(resolution.view(), None);
}

#[rstest]
#[case("/home/")]
#[case("//home")]
#[case("/home//")]
fn resolution_normalizes_sloppy_paths(#[case] sloppy: &str) {
    let registry = marketplace_registry();

    match registry.resolve(sloppy) {
        Resolution::Page(route) => assert_eq!(route.name(), PageName::HomePage),
        Resolution::NotFound(_) => panic!("{sloppy:?} must normalize to /home"),
    }
}

#[test]
fn duplicate_path_is_rejected() {
    let err = Registry::builder()
        .route(PageName::BookingInfo, "/booking_info", ())
        .route(PageName::AllBookingInfo, "/booking_info", ())
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        RegistryError::DuplicatePath {
            path: "/booking_info".to_string(),
            first: PageName::BookingInfo,
            second: PageName::AllBookingInfo,
        }
    );
}

#[test]
fn duplicate_path_after_normalization_is_rejected() {
    // "/home/" and "/home" are the same route once normalized.
    let err = Registry::builder()
        .route(PageName::HomePage, "/home", ())
        .route(PageName::SignIn, "/home/", ())
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        RegistryError::DuplicatePath {
            path: "/home".to_string(),
            first: PageName::HomePage,
            second: PageName::SignIn,
        }
    );
}

#[test]
fn duplicate_name_is_rejected() {
    let err = Registry::builder()
        .route(PageName::SignIn, "/signin", ())
        .route(PageName::SignIn, "/signin_again", ())
        .build()
        .unwrap_err();

    assert_eq!(err, RegistryError::DuplicateName(PageName::SignIn));
}

#[test]
fn relative_path_is_rejected() {
    let err = Registry::builder()
        .route(PageName::HomePage, "home", ())
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        RegistryError::InvalidPath {
            name: PageName::HomePage,
            path: "home".to_string(),
        }
    );
}

#[test]
fn path_of_unregistered_name_is_none() {
    let registry: Registry<&str> = Registry::builder()
        .route(PageName::HomePage, "/home", "home")
        .build()
        .unwrap();

    assert_eq!(registry.path_of(PageName::AddPet), None);
}

#[test]
fn navigation_mode_defaults_to_history() {
    let registry = marketplace_registry();
    assert_eq!(registry.navigation(), NavigationMode::History);

    let reload: Registry<()> = Registry::builder()
        .navigation(NavigationMode::Reload)
        .build()
        .unwrap();
    assert_eq!(reload.navigation(), NavigationMode::Reload);
}
