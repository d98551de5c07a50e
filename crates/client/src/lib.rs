//! Bistro reservation form client.
//!
//! Models the interactive part of the website without a UI toolkit:
//!
//! - [`ReservationForm`]: the six editable fields and the submit flow.
//! - [`HttpReservationClient`]: the one network call, via [`reqwest`].
//! - [`Notification`] / [`Notifier`]: transient success and error toasts.
//! - [`View`] / [`Navigator`]: page transitions.
//! - [`ConfirmationView`]: the success page with its redirect countdown.

pub mod api;
pub mod config;
pub mod confirmation;
pub mod error;
pub mod form;
pub mod notify;
pub mod view;

pub use api::{ApiReply, HttpReservationClient, ReservationApi};
pub use config::ClientConfig;
pub use confirmation::{ConfirmationState, ConfirmationView};
pub use error::ClientError;
pub use form::{ReservationForm, SubmitOutcome};
pub use notify::{Notification, NotificationKind, NotificationQueue, Notifier};
pub use view::{Navigator, View, ViewRouter};
