//! Reservation field definitions, messages and the presence check.
//!
//! A reservation is six free-text fields. The intake service first checks
//! that every field is present and non-empty ([`ReservationSubmission::into_fields`]);
//! length and email rules are enforced separately by the persistence layer,
//! which reports violations using [`ReservationField::rule_message`].

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Returned when any of the six fields is absent or empty.
pub const INCOMPLETE_SUBMISSION_MESSAGE: &str = "Please fill out the full reservation form!";

/// Returned after a reservation has been stored.
pub const RESERVATION_SENT_MESSAGE: &str = "Reservation sent successfully!";

// ---------------------------------------------------------------------------
// ReservationField
// ---------------------------------------------------------------------------

/// One of the six reservation form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservationField {
    FirstName,
    LastName,
    Email,
    Phone,
    Date,
    Time,
}

impl ReservationField {
    /// All fields, in form order.
    pub const ALL: [Self; 6] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Date,
        Self::Time,
    ];

    /// JSON key used on the wire.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Date => "date",
            Self::Time => "time",
        }
    }

    /// Column (and Rust struct field) name.
    pub const fn column(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Date => "date",
            Self::Time => "time",
        }
    }

    /// Message reported when the field breaks its format rule.
    ///
    /// `date` and `time` carry no rule beyond presence.
    pub const fn rule_message(self) -> Option<&'static str> {
        match self {
            Self::FirstName => Some("First name must contain between 3 and 30 characters!"),
            Self::LastName => Some("Last name must contain between 3 and 30 characters!"),
            Self::Email => Some("Provide a valid email!"),
            Self::Phone => Some("Phone number must contain exactly 10 characters!"),
            Self::Date | Self::Time => None,
        }
    }

    /// Look a field up by its column name.
    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.column() == column)
    }
}

impl std::fmt::Display for ReservationField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// A reservation request as received, before the presence check.
///
/// Every field is optional so that a partially filled form deserializes and
/// can be rejected with the fixed incomplete-submission message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationSubmission {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

impl ReservationSubmission {
    fn slot(&self, field: ReservationField) -> Option<&str> {
        let value = match field {
            ReservationField::FirstName => &self.first_name,
            ReservationField::LastName => &self.last_name,
            ReservationField::Email => &self.email,
            ReservationField::Phone => &self.phone,
            ReservationField::Date => &self.date,
            ReservationField::Time => &self.time,
        };
        value.as_deref()
    }

    /// Fields that are absent or empty, in form order.
    pub fn missing_fields(&self) -> Vec<ReservationField> {
        ReservationField::ALL
            .into_iter()
            .filter(|f| self.slot(*f).map_or(true, str::is_empty))
            .collect()
    }

    /// Run the presence check, yielding the complete field set.
    pub fn into_fields(self) -> Result<ReservationFields, CoreError> {
        match self {
            Self {
                first_name: Some(first_name),
                last_name: Some(last_name),
                email: Some(email),
                phone: Some(phone),
                date: Some(date),
                time: Some(time),
            } if [&first_name, &last_name, &email, &phone, &date, &time]
                .iter()
                .all(|v| !v.is_empty()) =>
            {
                Ok(ReservationFields {
                    first_name,
                    last_name,
                    email,
                    phone,
                    date,
                    time,
                })
            }
            _ => Err(CoreError::IncompleteSubmission),
        }
    }
}

/// The six reservation values, all present.
///
/// This is also the request body the form client sends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
}

impl ReservationFields {
    /// Borrow the value of a single field.
    pub fn get(&self, field: ReservationField) -> &str {
        match field {
            ReservationField::FirstName => &self.first_name,
            ReservationField::LastName => &self.last_name,
            ReservationField::Email => &self.email,
            ReservationField::Phone => &self.phone,
            ReservationField::Date => &self.date,
            ReservationField::Time => &self.time,
        }
    }

    /// Mutable access to a single field.
    pub fn get_mut(&mut self, field: ReservationField) -> &mut String {
        match field {
            ReservationField::FirstName => &mut self.first_name,
            ReservationField::LastName => &mut self.last_name,
            ReservationField::Email => &mut self.email,
            ReservationField::Phone => &mut self.phone,
            ReservationField::Date => &mut self.date,
            ReservationField::Time => &mut self.time,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn full_submission() -> ReservationSubmission {
        ReservationSubmission {
            first_name: Some("John".into()),
            last_name: Some("Smith".into()),
            email: Some("john@example.com".into()),
            phone: Some("1234567890".into()),
            date: Some("2025-01-01".into()),
            time: Some("19:00".into()),
        }
    }

    #[test]
    fn complete_submission_passes_presence_check() {
        let fields = full_submission().into_fields().unwrap();
        assert_eq!(fields.first_name, "John");
        assert_eq!(fields.time, "19:00");
    }

    #[test]
    fn each_missing_field_is_rejected() {
        for field in ReservationField::ALL {
            let mut fields = full_submission().into_fields().unwrap();
            fields.get_mut(field).clear();
            let submission = ReservationSubmission {
                first_name: Some(fields.first_name),
                last_name: Some(fields.last_name),
                email: Some(fields.email),
                phone: Some(fields.phone),
                date: Some(fields.date),
                time: Some(fields.time),
            };

            assert_eq!(submission.missing_fields(), vec![field]);
            assert_matches!(submission.into_fields(), Err(CoreError::IncompleteSubmission));
        }
    }

    #[test]
    fn absent_fields_are_reported_in_form_order() {
        let submission: ReservationSubmission =
            serde_json::from_str(r#"{"time":"19:00","firstName":"John"}"#).unwrap();

        assert_eq!(
            submission.missing_fields(),
            vec![
                ReservationField::LastName,
                ReservationField::Email,
                ReservationField::Phone,
                ReservationField::Date,
            ]
        );
    }

    #[test]
    fn whitespace_counts_as_present() {
        let mut submission = full_submission();
        submission.date = Some(" ".into());
        assert!(submission.into_fields().is_ok());
    }

    #[test]
    fn incomplete_error_carries_fixed_message() {
        assert_eq!(
            CoreError::IncompleteSubmission.to_string(),
            INCOMPLETE_SUBMISSION_MESSAGE
        );
    }

    #[test]
    fn fields_serialize_with_camel_case_keys() {
        let fields = full_submission().into_fields().unwrap();
        let json = serde_json::to_value(&fields).unwrap();
        for field in ReservationField::ALL {
            assert_eq!(json[field.wire_name()], fields.get(field));
        }
    }

    #[test]
    fn column_lookup_round_trips() {
        for field in ReservationField::ALL {
            assert_eq!(ReservationField::from_column(field.column()), Some(field));
        }
        assert_eq!(ReservationField::from_column("id"), None);
    }

    #[test]
    fn only_date_and_time_have_no_rule() {
        assert!(ReservationField::Date.rule_message().is_none());
        assert!(ReservationField::Time.rule_message().is_none());
        assert!(ReservationField::Phone.rule_message().is_some());
    }
}
