// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
pub mod copy;
pub mod navigation;
pub mod params;
pub mod screens;
pub mod theme;

pub use navigation::NavigationError;
pub use navigation::PaymentFailedAction;
pub use navigation::RouteReplacer;
pub use navigation::RouteReplacerContext;
pub use params::PaymentFailedParams;
use screens::home::HomeScreen;
use screens::payment_failed::PaymentFailed;
use screens::select_service::SelectServiceScreen;

/// Routes of the booking app.
///
/// The payment-failed route carries its optional context as a
/// form-urlencoded query string.
#[derive(Debug, Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Home {})]
    #[route("/(tabs)", HomeScreen)]
    Home {},
    #[route("/booking/select-service", SelectServiceScreen)]
    SelectService {},
    #[route("/payment/failed?:..params")]
    PaymentFailed { params: PaymentFailedParams },
}

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let stylesheet = theme::stylesheet();

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{stylesheet}"
        }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_destinations_render_their_paths() {
        assert_eq!(Route::Home {}.to_string(), "/(tabs)");
        assert_eq!(Route::SelectService {}.to_string(), "/booking/select-service");
    }

    #[test]
    fn payment_failed_route_reads_query_string() {
        let route: Route = "/payment/failed?reservation_id=R123&error=Card+declined+%26+blocked"
            .parse()
            .expect("route should parse");

        assert_eq!(
            route,
            Route::PaymentFailed {
                params: PaymentFailedParams::default()
                    .with_reservation_id("R123")
                    .with_error("Card declined & blocked"),
            }
        );
    }
}
