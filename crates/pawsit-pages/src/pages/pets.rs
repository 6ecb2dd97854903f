use maud::{html, Markup};

use crate::View;

/// The signed-in owner's pets.
pub struct PetInfo;

impl View for PetInfo {
    fn name(&self) -> &'static str {
        "PetInfo"
    }

    fn title(&self) -> &'static str {
        "My pets"
    }

    fn render(&self) -> Markup {
        html! {
            h1 { "My pets" }
            table {
                thead {
                    tr {
                        th { "Name" }
                        th { "Age" }
                        th { "Breed" }
                        th { "Gender" }
                    }
                }
                // Filled by the backend once the owner's session is known.
                tbody #pet-list hx-get="/api/v1/owner/owner_pet" hx-trigger="load" {}
            }
        }
    }
}

/// Form to register a new pet.
pub struct AddPet;

impl View for AddPet {
    fn name(&self) -> &'static str {
        "AddPet"
    }

    fn title(&self) -> &'static str {
        "Add a pet"
    }

    fn render(&self) -> Markup {
        html! {
            h1 { "Add a pet" }
            form hx-post="/api/v1/owner/add_pet" hx-target="#add-pet-result" {
                label { "Name"
                    input type="text" name="name" required;
                }
                label { "Age"
                    input type="number" name="age" min="0" required;
                }
                label { "Breed"
                    input type="text" name="breed" required;
                }
                label { "Gender"
                    select name="gender" {
                        option value="female" { "Female" }
                        option value="male" { "Male" }
                    }
                }
                button type="submit" { "Add pet" }
            }
            div #add-pet-result {}
        }
    }
}
