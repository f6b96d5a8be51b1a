//! Navigation intents of the payment-failed screen and the seam through
//! which they reach the router.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus::router::Navigator;
use dioxus_logger::tracing::info;
use strum::EnumIter;
use thiserror::Error;

use crate::components::pico::ButtonType;
use crate::copy;
use crate::Route;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("router rejected external navigation: {0}")]
    External(String),
}

/// Swaps the current screen for `route` without keeping it as a back target.
pub trait RouteReplacer {
    fn replace_route(&self, route: Route) -> Result<(), NavigationError>;
}

impl RouteReplacer for Navigator {
    fn replace_route(&self, route: Route) -> Result<(), NavigationError> {
        match self.replace(route) {
            Some(failure) => Err(NavigationError::External(format!("{failure:?}"))),
            None => Ok(()),
        }
    }
}

/// Context override for the navigator used by the payment-failed screen.
/// Without it the screen talks to the router directly.
#[derive(Clone)]
pub struct RouteReplacerContext(pub Rc<dyn RouteReplacer>);

/// The two ways out of the payment-failed screen, in button order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum PaymentFailedAction {
    /// Start the booking flow again. Nothing from the failed attempt is
    /// carried over.
    Retry,
    Home,
}

impl PaymentFailedAction {
    pub fn target(&self) -> Route {
        match self {
            PaymentFailedAction::Retry => Route::SelectService {},
            PaymentFailedAction::Home => Route::Home {},
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentFailedAction::Retry => copy::RETRY_LABEL,
            PaymentFailedAction::Home => copy::HOME_LABEL,
        }
    }

    pub(crate) fn button_type(&self) -> ButtonType {
        match self {
            PaymentFailedAction::Retry => ButtonType::Primary,
            PaymentFailedAction::Home => ButtonType::Secondary,
        }
    }

    /// Issues exactly one replace call for this action.
    pub fn perform<R>(&self, navigator: &R) -> Result<(), NavigationError>
    where
        R: RouteReplacer + ?Sized,
    {
        let target = self.target();
        info!("payment failed: {:?} -> {}", self, target);
        navigator.replace_route(target)
    }

    /// Performs the action against the [`RouteReplacerContext`] in scope,
    /// falling back to the router's navigator.
    pub fn dispatch(&self) -> Result<(), NavigationError> {
        match try_consume_context::<RouteReplacerContext>() {
            Some(RouteReplacerContext(replacer)) => self.perform(replacer.as_ref()),
            None => self.perform(&navigator()),
        }
    }
}
