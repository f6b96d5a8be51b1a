use crate::components::pico::Card;
use crate::components::pico::Container;
use crate::copy;
use crate::Route;
use dioxus::prelude::*;

/// Entry point of the booking flow, where retries from a failed payment land.
#[component]
pub fn SelectServiceScreen() -> Element {
    rsx! {
        Container {
            Card {
                h3 { {copy::SELECT_SERVICE_HEADING} }
                p { {copy::SELECT_SERVICE_BODY} }
                Link {
                    to: Route::Home {},
                    {copy::HOME_LABEL}
                }
            }
        }
    }
}
