use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{MediBookError, Result};

/// Textual convention for date + time at the CLI boundary (24-hour clock).
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Textual convention for calendar dates at the CLI boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Patient identity attached to a booked slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,
    pub email: String,
}

/// A doctor's appointment slot.
///
/// A slot is unbooked when `patient` is `None`. Booking attaches a
/// [`Patient`]; cancelling clears it again. `id`, `doctor_name` and
/// `date_time` never change after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u32,
    pub doctor_name: String,
    pub date_time: NaiveDateTime,
    pub patient: Option<Patient>,
}

impl Appointment {
    pub fn new(id: u32, doctor_name: String, date_time: NaiveDateTime) -> Self {
        Self {
            id,
            doctor_name,
            date_time,
            patient: None,
        }
    }

    pub fn is_booked(&self) -> bool {
        self.patient.is_some()
    }

    pub fn patient_name(&self) -> Option<&str> {
        self.patient.as_ref().map(|p| p.name.as_str())
    }

    pub fn patient_email(&self) -> Option<&str> {
        self.patient.as_ref().map(|p| p.email.as_str())
    }

    /// Attach a patient. Validation (already booked, email shape) is the
    /// registry's job; the entity only performs the transition.
    pub(crate) fn book(&mut self, patient: Patient) {
        self.patient = Some(patient);
    }

    /// Clear the booking, returning the slot to availability.
    pub(crate) fn cancel_booking(&mut self) {
        self.patient = None;
    }
}

/// Parse a boundary date-time string (`YYYY-MM-DD HH:MM`).
pub fn parse_date_time(input: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input.trim(), DATE_TIME_FORMAT).map_err(|_| {
        MediBookError::InvalidInput(format!(
            "Invalid date format '{}', expected YYYY-MM-DD HH:MM",
            input.trim()
        ))
    })
}

/// Parse a boundary date string (`YYYY-MM-DD`).
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
        MediBookError::InvalidInput(format!(
            "Invalid date format '{}', expected YYYY-MM-DD",
            input.trim()
        ))
    })
}
