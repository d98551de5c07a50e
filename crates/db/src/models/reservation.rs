//! Reservation entity model and the validated insert DTO.

use bistro_core::reservation::{ReservationField, ReservationFields};
use bistro_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationErrors};

/// A row from the `reservations` table.
///
/// The id never leaves the persistence layer; callers only learn that the
/// write succeeded.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reservation {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a reservation.
///
/// Length and email rules are checked here, independently of the presence
/// check the API performs first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct NewReservation {
    #[validate(length(min = 3, max = 30))]
    pub first_name: String,
    #[validate(length(min = 3, max = 30))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(equal = 10))]
    pub phone: String,
    pub date: String,
    pub time: String,
}

impl From<ReservationFields> for NewReservation {
    fn from(fields: ReservationFields) -> Self {
        Self {
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            phone: fields.phone,
            date: fields.date,
            time: fields.time,
        }
    }
}

impl Reservation {
    /// Whether this row holds exactly the submitted values.
    pub fn matches(&self, input: &NewReservation) -> bool {
        self.first_name == input.first_name
            && self.last_name == input.last_name
            && self.email == input.email
            && self.phone == input.phone
            && self.date == input.date
            && self.time == input.time
    }
}

/// Join the rule messages of every failing field, in form order.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let failing = errors.field_errors();
    ReservationField::ALL
        .into_iter()
        .filter(|f| failing.contains_key(f.column()))
        .filter_map(ReservationField::rule_message)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewReservation {
        NewReservation {
            first_name: "John".into(),
            last_name: "Smith".into(),
            email: "john@example.com".into(),
            phone: "1234567890".into(),
            date: "2025-01-01".into(),
            time: "19:00".into(),
        }
    }

    #[test]
    fn well_formed_reservation_validates() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn name_lengths_are_bounded() {
        let mut input = valid();
        input.first_name = "Jo".into();
        assert!(input.validate().is_err());

        input.first_name = "J".repeat(31);
        assert!(input.validate().is_err());

        input.first_name = "J".repeat(30);
        assert!(input.validate().is_ok());

        input.last_name = "Li".into();
        assert!(input.validate().is_err());
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let mut input = valid();
        input.first_name = "Zoë".into();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn invalid_email_is_rejected() {
        let mut input = valid();
        input.email = "john-at-example".into();
        let errors = input.validate().unwrap_err();
        assert_eq!(validation_message(&errors), "Provide a valid email!");
    }

    #[test]
    fn phone_must_be_exactly_ten_characters() {
        let mut input = valid();
        input.phone = "123456789".into();
        assert!(input.validate().is_err());

        input.phone = "12345678901".into();
        assert!(input.validate().is_err());
    }

    #[test]
    fn non_digit_phone_of_right_length_is_accepted() {
        let mut input = valid();
        input.phone = "555-123-45".into();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn messages_are_joined_in_form_order() {
        let mut input = valid();
        input.phone = "1".into();
        input.first_name = "Al".into();
        input.email = "nope".into();

        let errors = input.validate().unwrap_err();
        assert_eq!(
            validation_message(&errors),
            "First name must contain between 3 and 30 characters! \
             Provide a valid email! \
             Phone number must contain exactly 10 characters!"
        );
    }

    #[test]
    fn row_matches_its_input() {
        let input = valid();
        let row = Reservation {
            id: 1,
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            date: input.date.clone(),
            time: input.time.clone(),
            created_at: chrono::Utc::now(),
        };
        assert!(row.matches(&input));
    }
}
