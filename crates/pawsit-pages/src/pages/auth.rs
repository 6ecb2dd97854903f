//! Sign-in and sign-up pages.
//!
//! Forms post to the marketplace backend (`/api/v1/...`); this crate renders
//! them and leaves authentication entirely to the server.

use maud::{html, Markup};

use crate::View;

/// Sign-in form for owners and caretakers.
pub struct SignIn;

impl View for SignIn {
    fn name(&self) -> &'static str {
        "SignIn"
    }

    fn title(&self) -> &'static str {
        "Sign in"
    }

    fn render(&self) -> Markup {
        html! {
            h1 { "Sign in" }
            form hx-post="/api/v1/authentication/owner_signin" hx-target="#signin-result" {
                label { "I am a"
                    select name="role" {
                        option value="owner" selected { "Pet owner" }
                        option value="caretaker" { "Caretaker" }
                    }
                }
                label { "Email"
                    input type="email" name="username" required;
                }
                label { "Password"
                    input type="password" name="password" required;
                }
                button type="submit" { "Sign in" }
            }
            div #signin-result {}
        }
    }
}

/// Registration form for pet owners.
pub struct OwnerSignUp;

impl View for OwnerSignUp {
    fn name(&self) -> &'static str {
        "OwnerSignUp"
    }

    fn title(&self) -> &'static str {
        "Owner sign up"
    }

    fn render(&self) -> Markup {
        html! {
            h1 { "Create an owner account" }
            form hx-post="/api/v1/owner/signup" hx-target="#signup-result" {
                (identity_fields())
                button type="submit" { "Sign up" }
            }
            div #signup-result {}
        }
    }
}

/// Registration form for caretakers.
pub struct CaretakerSignUp;

impl View for CaretakerSignUp {
    fn name(&self) -> &'static str {
        "CaretakerSignUp"
    }

    fn title(&self) -> &'static str {
        "Caretaker sign up"
    }

    fn render(&self) -> Markup {
        html! {
            h1 { "Become a caretaker" }
            p { "New caretakers start without a rating; reviews from completed bookings build it up." }
            form hx-post="/api/v1/caretaker/signup" hx-target="#signup-result" {
                (identity_fields())
                button type="submit" { "Sign up" }
            }
            div #signup-result {}
        }
    }
}

// Both account types share the same identity fields.
fn identity_fields() -> Markup {
    html! {
        label { "Name"
            input type="text" name="name" required;
        }
        label { "Address"
            input type="text" name="address" required;
        }
        label { "Email"
            input type="email" name="email" required;
        }
        label { "Password"
            input type="password" name="password" required;
        }
        label { "Phone"
            input type="tel" name="phone" required;
        }
        input type="hidden" name="lat" value="0";
        input type="hidden" name="lon" value="0";
    }
}
