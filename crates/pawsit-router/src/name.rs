use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Symbolic identifier for every page the frontend can show.
///
/// Navigation goes through this tag instead of loose strings, so a typo in a
/// navigation call is a compile error rather than a blank page at runtime.
///
/// # Examples
///
/// ```
/// use pawsit_router::PageName;
///
/// assert_eq!(PageName::BookingInfo.as_str(), "BookingInfo");
/// assert_eq!("AddPet".parse(), Ok(PageName::AddPet));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageName {
    HomePage,
    SignIn,
    OwnerSignUp,
    CaretakerSignUp,
    PetInfo,
    AddPet,
    FindCaretaker,
    OwnerInfo,
    CaretakerInfo,
    BookingInfo,
    AllBookingInfo,
}

impl PageName {
    /// Every page name, in registration order.
    pub const ALL: [PageName; 11] = [
        PageName::HomePage,
        PageName::SignIn,
        PageName::OwnerSignUp,
        PageName::CaretakerSignUp,
        PageName::PetInfo,
        PageName::AddPet,
        PageName::FindCaretaker,
        PageName::OwnerInfo,
        PageName::CaretakerInfo,
        PageName::BookingInfo,
        PageName::AllBookingInfo,
    ];

    /// The symbolic name as registered in the route table.
    pub fn as_str(self) -> &'static str {
        match self {
            PageName::HomePage => "HomePage",
            PageName::SignIn => "SignIn",
            PageName::OwnerSignUp => "OwnerSignUp",
            PageName::CaretakerSignUp => "CaretakerSignUp",
            PageName::PetInfo => "PetInfo",
            PageName::AddPet => "AddPet",
            PageName::FindCaretaker => "FindCaretaker",
            PageName::OwnerInfo => "OwnerInfo",
            PageName::CaretakerInfo => "CaretakerInfo",
            PageName::BookingInfo => "BookingInfo",
            PageName::AllBookingInfo => "AllBookingInfo",
        }
    }
}

impl fmt::Display for PageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that names no known page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page name: {0:?}")]
pub struct UnknownPageName(pub String);

impl FromStr for PageName {
    type Err = UnknownPageName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownPageName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_str() {
        for name in PageName::ALL {
            assert_eq!(name.as_str().parse(), Ok(name));
        }
    }

    #[test]
    fn test_unknown_name_rejected() {
        let err = "AdminPanel".parse::<PageName>().unwrap_err();
        assert_eq!(err, UnknownPageName("AdminPanel".to_string()));
    }

    #[test]
    fn test_all_names_distinct() {
        let mut seen = std::collections::HashSet::new();
        for name in PageName::ALL {
            assert!(seen.insert(name.as_str()), "{name} listed twice");
        }
    }
}
