//! Navigation parameters of the payment-failed screen.

use std::fmt;

use dioxus::router::FromQuery;

use crate::Route;

const RESERVATION_ID: &str = "reservation_id";
const SERVICE_NAME: &str = "service_name";
const DENTIST_NAME: &str = "dentist_name";
const ERROR: &str = "error";

/// Optional context passed to the payment-failed screen.
///
/// Values are shown verbatim. The empty string counts as absent, every other
/// string (whitespace included) counts as present.
///
/// Travels as the query string of the payment-failed route, form-urlencoded
/// so that `&`, `=`, `+` and `%` inside values survive the round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentFailedParams {
    reservation_id: Option<String>,
    service_name: Option<String>,
    dentist_name: Option<String>,
    error: Option<String>,
}

fn present(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl PaymentFailedParams {
    pub fn with_reservation_id(mut self, reservation_id: impl Into<String>) -> Self {
        self.reservation_id = present(reservation_id.into());
        self
    }

    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = present(service_name.into());
        self
    }

    pub fn with_dentist_name(mut self, dentist_name: impl Into<String>) -> Self {
        self.dentist_name = present(dentist_name.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = present(error.into());
        self
    }

    pub fn reservation_id(&self) -> Option<&str> {
        non_empty(&self.reservation_id)
    }

    pub fn service_name(&self) -> Option<&str> {
        non_empty(&self.service_name)
    }

    pub fn dentist_name(&self) -> Option<&str> {
        non_empty(&self.dentist_name)
    }

    pub fn error(&self) -> Option<&str> {
        non_empty(&self.error)
    }

    fn pairs(&self) -> [(&'static str, Option<&str>); 4] {
        [
            (RESERVATION_ID, self.reservation_id()),
            (SERVICE_NAME, self.service_name()),
            (DENTIST_NAME, self.dentist_name()),
            (ERROR, self.error()),
        ]
    }
}

/// The display impl writes the query in a form `from_query` parses back.
/// Absent values are left out.
impl fmt::Display for PaymentFailedParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.pairs() {
            if let Some(value) = value {
                serializer.append_pair(key, value);
            }
        }
        f.write_str(&serializer.finish())
    }
}

/// Unknown keys are ignored; a repeated key keeps its last value.
impl FromQuery for PaymentFailedParams {
    fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = present(value.into_owned());
            match key.as_ref() {
                RESERVATION_ID => params.reservation_id = value,
                SERVICE_NAME => params.service_name = value,
                DENTIST_NAME => params.dentist_name = value,
                ERROR => params.error = value,
                _ => {}
            }
        }
        params
    }
}

/// Route to the payment-failed screen carrying these params, for payment
/// flows that need to hand off a failure.
impl From<PaymentFailedParams> for Route {
    fn from(params: PaymentFailedParams) -> Self {
        Route::PaymentFailed { params }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tricky() -> PaymentFailedParams {
        PaymentFailedParams::default()
            .with_reservation_id("R&D=42")
            .with_service_name("Tẩy trắng 50% + cạo vôi")
            .with_dentist_name("BS. Nguyễn Văn A & cộng sự")
            .with_error("Card declined & blocked (code=05, a+b, 100%)")
    }

    #[test]
    fn empty_query_is_all_absent() {
        let params = PaymentFailedParams::from_query("");

        assert_eq!(params, PaymentFailedParams::default());
        assert_eq!(params.reservation_id(), None);
        assert_eq!(params.service_name(), None);
        assert_eq!(params.dentist_name(), None);
        assert_eq!(params.error(), None);
    }

    #[test]
    fn empty_query_values_are_absent() {
        let params = PaymentFailedParams::from_query("reservation_id=&error=");
        assert_eq!(params, PaymentFailedParams::default());
    }

    #[test]
    fn query_values_are_decoded_verbatim() {
        let params = PaymentFailedParams::from_query(
            "reservation_id=+R123+&service_name=C%E1%BA%A1o+v%C3%B4i&dentist_name=Dr.+A&error=x%26y%3Dz",
        );

        assert_eq!(params.reservation_id(), Some(" R123 "));
        assert_eq!(params.service_name(), Some("Cạo vôi"));
        assert_eq!(params.dentist_name(), Some("Dr. A"));
        assert_eq!(params.error(), Some("x&y=z"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let params = PaymentFailedParams::from_query("amount=500000&error=timeout");
        assert_eq!(params, PaymentFailedParams::default().with_error("timeout"));
    }

    #[test]
    fn query_round_trips_reserved_characters() {
        let params = tricky();
        let query = params.to_string();

        assert!(!query.contains(" & "));
        assert_eq!(PaymentFailedParams::from_query(&query), params);
    }

    #[test]
    fn absent_values_are_left_out_of_the_query() {
        let params = PaymentFailedParams::default().with_error("timeout");
        assert_eq!(params.to_string(), "error=timeout");
        assert_eq!(PaymentFailedParams::default().to_string(), "");
    }

    #[test]
    fn whitespace_counts_as_present() {
        let params = PaymentFailedParams::default().with_error(" ");
        assert_eq!(params.error(), Some(" "));
    }

    #[test]
    fn builder_ignores_empty_values() {
        let params = PaymentFailedParams::default()
            .with_reservation_id("R1")
            .with_reservation_id("");
        assert_eq!(params.reservation_id(), None);
    }

    #[test]
    fn route_round_trips_reserved_characters() {
        let route = Route::from(tricky());
        let parsed: Route = route.to_string().parse().expect("route should parse");

        assert_eq!(parsed, route);
    }
}
