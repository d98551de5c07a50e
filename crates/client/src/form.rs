//! The reservation form: six editable fields and the submit flow.

use bistro_core::reservation::{ReservationField, ReservationFields};

use crate::api::ReservationApi;
use crate::notify::{Notification, Notifier};
use crate::view::{Navigator, View};

/// What a submission attempt ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server stored the reservation.
    Sent,
    /// The server (or the network) refused it; the fields are untouched.
    Rejected { message: String },
}

/// Local form state.
///
/// Values are taken as typed; format rules are left to the server.
#[derive(Debug, Clone, Default)]
pub struct ReservationForm {
    values: ReservationFields,
}

impl ReservationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one field's value.
    pub fn set(&mut self, field: ReservationField, value: impl Into<String>) {
        *self.values.get_mut(field) = value.into();
    }

    pub fn get(&self, field: ReservationField) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &ReservationFields {
        &self.values
    }

    /// Empty all six fields.
    pub fn clear(&mut self) {
        self.values = ReservationFields::default();
    }

    /// Submit the current values once.
    ///
    /// Nothing navigates until the reply is known. On success the fields are
    /// cleared and the confirmation view is shown; on failure the fields are
    /// kept and an error toast is raised so the visitor can retry.
    pub async fn submit(
        &mut self,
        api: &dyn ReservationApi,
        notifier: &dyn Notifier,
        navigator: &dyn Navigator,
    ) -> SubmitOutcome {
        let reply = api.send_reservation(&self.values).await;

        match reply {
            Ok(reply) if reply.success => {
                notifier.notify(Notification::sent(reply.message));
                self.clear();
                navigator.navigate(View::Success);
                SubmitOutcome::Sent
            }
            Ok(reply) => self.reject(notifier, reply.message),
            Err(e) => {
                tracing::warn!(error = %e, "Reservation request failed");
                self.reject(notifier, None)
            }
        }
    }

    fn reject(&self, notifier: &dyn Notifier, message: Option<String>) -> SubmitOutcome {
        let notification = Notification::error(message);
        let message = notification.message.clone();
        notifier.notify(notification);
        SubmitOutcome::Rejected { message }
    }
}
