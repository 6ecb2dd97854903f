use maud::{html, Markup};

use crate::View;

/// Details of a single booking, including the review form.
pub struct BookingInfo;

impl View for BookingInfo {
    fn name(&self) -> &'static str {
        "BookingInfo"
    }

    fn title(&self) -> &'static str {
        "Booking"
    }

    fn render(&self) -> Markup {
        html! {
            h1 { "Booking" }
            dl #booking-details hx-get="/api/v1/caretaker/booking" hx-trigger="load" {
                dt { "Caretaker" }
                dd {}
                dt { "Booked on" }
                dd {}
                dt { "Instructions" }
                dd {}
            }
            section {
                h2 { "Leave a review" }
                form hx-post="/api/v1/owner/review" hx-target="#review-result" {
                    label { "Rating"
                        select name="rating" {
                            @for stars in (1..=5).rev() {
                                option value=(stars) { (stars) }
                            }
                        }
                    }
                    label { "Comment"
                        textarea name="comment" rows="3" {}
                    }
                    button type="submit" { "Submit review" }
                }
                div #review-result {}
            }
        }
    }
}

/// Every booking the signed-in user is part of.
pub struct AllBookingInfo;

impl View for AllBookingInfo {
    fn name(&self) -> &'static str {
        "AllBookingInfo"
    }

    fn title(&self) -> &'static str {
        "All bookings"
    }

    fn render(&self) -> Markup {
        html! {
            h1 { "All bookings" }
            table {
                thead {
                    tr {
                        th { "Caretaker" }
                        th { "Owner" }
                        th { "Date" }
                        th { "Instructions" }
                    }
                }
                tbody #booking-list hx-get="/api/v1/owner/owner_booking" hx-trigger="load" {}
            }
        }
    }
}
