use crate::components::pico::Card;
use crate::components::pico::Container;
use crate::copy;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn HomeScreen() -> Element {
    rsx! {
        Container {
            h1 { {copy::APP_TITLE} }
            Card {
                h3 { {copy::HOME_HEADING} }
                p { {copy::HOME_BODY} }
                Link {
                    to: Route::SelectService {},
                    {copy::BOOK_NOW_LABEL}
                }
            }
        }
    }
}
