use crate::components::detail_row::DetailRow;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Container;
use crate::copy;
use crate::copy::FailureReason;
use crate::navigation::PaymentFailedAction;
use crate::params::PaymentFailedParams;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdCircleX;
use dioxus_free_icons::icons::ld_icons::LdPhone;
use dioxus_free_icons::icons::ld_icons::LdTriangleAlert;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::warn;
use strum::IntoEnumIterator;

/// Route component.
#[component]
pub fn PaymentFailed(params: PaymentFailedParams) -> Element {
    rsx! {
        PaymentFailedView { params }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct PaymentFailedViewProps {
    pub params: PaymentFailedParams,
}

/// The failure screen for a given set of params.
///
/// Optional blocks render only for present params; everything else is fixed.
#[component]
pub fn PaymentFailedView(props: PaymentFailedViewProps) -> Element {
    let params = props.params;

    debug!(
        "payment failed screen: error={} reservation={} service={} dentist={}",
        params.error().is_some(),
        params.reservation_id().is_some(),
        params.service_name().is_some(),
        params.dentist_name().is_some(),
    );

    rsx! {
        Container {
            header {
                class: "payment-failed-header",
                div {
                    class: "payment-failed-icon",
                    Icon { width: 72, height: 72, icon: LdCircleX }
                }
                h1 { class: "payment-failed-title", {copy::PAYMENT_FAILED_TITLE} }
                p { class: "payment-failed-subtitle", {copy::PAYMENT_FAILED_SUBTITLE} }
            }

            if let Some(message) = params.error() {
                ErrorDetail { message: message.to_string() }
            }

            if let Some(reservation_id) = params.reservation_id() {
                Card {
                    div {
                        class: "reservation-detail-block",
                        DetailRow {
                            label: copy::RESERVATION_LABEL.to_string(),
                            value: reservation_id.to_string(),
                            badge: true,
                        }
                        if let Some(service_name) = params.service_name() {
                            div {
                                class: "reservation-service",
                                DetailRow {
                                    label: copy::SERVICE_LABEL.to_string(),
                                    value: service_name.to_string(),
                                }
                            }
                        }
                        if let Some(dentist_name) = params.dentist_name() {
                            div {
                                class: "reservation-dentist",
                                DetailRow {
                                    label: copy::DENTIST_LABEL.to_string(),
                                    value: dentist_name.to_string(),
                                }
                            }
                        }
                    }
                }
            }

            FailureReasons {}
            SupportContact {}

            div {
                class: "payment-failed-actions",
                for action in PaymentFailedAction::iter() {
                    Button {
                        key: "{action:?}",
                        button_type: action.button_type(),
                        on_click: move |_| {
                            if let Err(e) = action.dispatch() {
                                warn!("payment failed: could not navigate for {:?}: {}", action, e);
                            }
                        },
                        {action.label()}
                    }
                }
            }
        }
    }
}

#[component]
fn ErrorDetail(message: String) -> Element {
    rsx! {
        div {
            class: "payment-error-block",
            role: "alert",
            Icon { width: 24, height: 24, icon: LdTriangleAlert }
            div {
                p { class: "payment-error-label", {copy::ERROR_DETAIL_LABEL} }
                p { class: "payment-error-message", "{message}" }
            }
        }
    }
}

#[component]
fn FailureReasons() -> Element {
    rsx! {
        Card {
            h3 { {copy::REASONS_HEADING} }
            ul {
                class: "failure-reasons",
                for reason in FailureReason::iter() {
                    li {
                        key: "{reason:?}",
                        class: "failure-reason",
                        {reason.text()}
                    }
                }
            }
        }
    }
}

#[component]
fn SupportContact() -> Element {
    let tel_href = format!("tel:{}", copy::SUPPORT_HOTLINE);

    rsx! {
        Card {
            div {
                class: "support-contact",
                Icon { width: 24, height: 24, icon: LdPhone }
                div {
                    h3 { {copy::SUPPORT_HEADING} }
                    p {
                        {copy::SUPPORT_BODY}
                        " "
                        a {
                            class: "support-hotline",
                            href: "{tel_href}",
                            {copy::SUPPORT_HOTLINE}
                        }
                    }
                }
            }
        }
    }
}
