//! The in-memory appointment collection.
//!
//! [`AppointmentRegistry`] owns every [`Appointment`] record for the lifetime
//! of the process: an insertion-ordered `Vec` plus a monotonically increasing
//! id counter. Ids start at 1 and are never reused, even after cancellation —
//! cancelled slots become available again, they are not removed.
//!
//! Every operation either fully succeeds (a single state transition) or fully
//! fails with no partial mutation.

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::error::{MediBookError, Result};
use crate::model::{Appointment, Patient};
use crate::notify::valid_email;

#[derive(Debug, Default)]
pub struct AppointmentRegistry {
    appointments: Vec<Appointment>,
    next_id: u32,
}

impl AppointmentRegistry {
    pub fn new() -> Self {
        Self {
            appointments: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a new unbooked slot for a doctor at the given time.
    ///
    /// Rejects blank doctor names, slots strictly in the past, and duplicates
    /// (same doctor name case-insensitively, exact same time).
    pub fn create_slot(&mut self, doctor_name: &str, date_time: NaiveDateTime) -> Result<Appointment> {
        let doctor_name = doctor_name.trim();
        if doctor_name.is_empty() {
            return Err(MediBookError::InvalidInput(
                "Doctor name cannot be empty".into(),
            ));
        }

        let exists = self.appointments.iter().any(|apt| {
            apt.doctor_name.to_lowercase() == doctor_name.to_lowercase()
                && apt.date_time == date_time
        });
        if exists {
            return Err(MediBookError::DuplicateSlot {
                doctor: doctor_name.to_string(),
                at: date_time,
            });
        }

        if date_time < Local::now().naive_local() {
            return Err(MediBookError::PastDateTime(date_time));
        }

        let appointment = Appointment::new(self.next_id, doctor_name.to_string(), date_time);
        self.next_id += 1;
        self.appointments.push(appointment.clone());
        Ok(appointment)
    }

    /// All unbooked slots, ascending by time. Ties keep insertion order.
    pub fn available(&self) -> Vec<Appointment> {
        self.filtered(|apt| !apt.is_booked())
    }

    /// All booked slots, same ordering rule as [`available`](Self::available).
    pub fn booked(&self) -> Vec<Appointment> {
        self.filtered(Appointment::is_booked)
    }

    pub fn find(&self, id: u32) -> Result<Appointment> {
        self.appointments
            .iter()
            .find(|apt| apt.id == id)
            .cloned()
            .ok_or(MediBookError::NotFound(id))
    }

    /// Book a slot for a patient.
    ///
    /// The caller is responsible for notifying the patient afterwards; a
    /// notifier failure must never roll the booking back.
    pub fn book(&mut self, id: u32, patient_name: &str, patient_email: &str) -> Result<Appointment> {
        let appointment = self.find_mut(id)?;
        if appointment.is_booked() {
            return Err(MediBookError::AlreadyBooked(id));
        }

        let patient_name = patient_name.trim();
        if patient_name.is_empty() {
            return Err(MediBookError::InvalidInput(
                "Patient name cannot be empty".into(),
            ));
        }
        let patient_email = patient_email.trim();
        if !valid_email(patient_email) {
            return Err(MediBookError::InvalidInput(format!(
                "'{}' is not a valid email address",
                patient_email
            )));
        }

        appointment.book(Patient {
            name: patient_name.to_string(),
            email: patient_email.to_string(),
        });
        Ok(appointment.clone())
    }

    /// Cancel a booking, returning the slot to availability.
    ///
    /// The slot keeps its id and time and can be booked again.
    pub fn cancel(&mut self, id: u32) -> Result<Appointment> {
        let appointment = self.find_mut(id)?;
        if !appointment.is_booked() {
            return Err(MediBookError::NotBooked(id));
        }
        appointment.cancel_booking();
        Ok(appointment.clone())
    }

    /// Case-insensitive substring match against the doctor name.
    pub fn search_by_doctor(&self, term: &str) -> Vec<Appointment> {
        let term = term.trim().to_lowercase();
        self.filtered(|apt| apt.doctor_name.to_lowercase().contains(&term))
    }

    /// Exact calendar-date match, ignoring time of day.
    pub fn search_by_date(&self, date: NaiveDate) -> Vec<Appointment> {
        self.filtered(|apt| apt.date_time.date() == date)
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    fn find_mut(&mut self, id: u32) -> Result<&mut Appointment> {
        self.appointments
            .iter_mut()
            .find(|apt| apt.id == id)
            .ok_or(MediBookError::NotFound(id))
    }

    fn filtered<F: Fn(&Appointment) -> bool>(&self, keep: F) -> Vec<Appointment> {
        let mut matches: Vec<Appointment> = self
            .appointments
            .iter()
            .filter(|apt| keep(apt))
            .cloned()
            .collect();
        // Stable sort: equal timestamps keep insertion order.
        matches.sort_by(|a, b| a.date_time.cmp(&b.date_time));
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_date_time;

    fn dt(s: &str) -> NaiveDateTime {
        parse_date_time(s).unwrap()
    }

    #[test]
    fn create_assigns_sequential_ids_starting_at_one() {
        let mut registry = AppointmentRegistry::new();
        let a = registry.create_slot("Smith", dt("2030-01-01 09:00")).unwrap();
        let b = registry.create_slot("Jones", dt("2030-01-01 10:00")).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert!(!a.is_booked());
        assert!(!b.is_booked());
    }

    #[test]
    fn create_rejects_blank_doctor_name() {
        let mut registry = AppointmentRegistry::new();
        let err = registry.create_slot("   ", dt("2030-01-01 09:00")).unwrap_err();
        assert!(matches!(err, MediBookError::InvalidInput(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn create_rejects_past_date_time() {
        let mut registry = AppointmentRegistry::new();
        let err = registry.create_slot("Smith", dt("2000-01-01 09:00")).unwrap_err();
        assert!(matches!(err, MediBookError::PastDateTime(_)));
    }

    #[test]
    fn create_rejects_duplicate_slot_case_insensitively() {
        let mut registry = AppointmentRegistry::new();
        registry.create_slot("Smith", dt("2030-01-01 09:00")).unwrap();
        let err = registry
            .create_slot("SMITH", dt("2030-01-01 09:00"))
            .unwrap_err();
        assert!(matches!(err, MediBookError::DuplicateSlot { .. }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn same_time_is_allowed_for_different_doctors() {
        let mut registry = AppointmentRegistry::new();
        registry.create_slot("Smith", dt("2030-01-01 09:00")).unwrap();
        assert!(registry.create_slot("Jones", dt("2030-01-01 09:00")).is_ok());
    }

    #[test]
    fn listings_sort_by_time_with_stable_ties() {
        let mut registry = AppointmentRegistry::new();
        registry.create_slot("Late", dt("2030-03-01 09:00")).unwrap();
        registry.create_slot("First", dt("2030-01-01 09:00")).unwrap();
        registry.create_slot("AlsoFirst", dt("2030-01-01 09:00")).unwrap();

        let available = registry.available();
        let names: Vec<&str> = available.iter().map(|a| a.doctor_name.as_str()).collect();
        // Equal timestamps keep the order the slots were created in.
        assert_eq!(names, vec!["First", "AlsoFirst", "Late"]);
    }

    #[test]
    fn book_attaches_patient() {
        let mut registry = AppointmentRegistry::new();
        registry.create_slot("Smith", dt("2030-01-01 09:00")).unwrap();

        let booked = registry.book(1, "Alice", "alice@x.com").unwrap();
        assert!(booked.is_booked());
        assert_eq!(booked.patient_name(), Some("Alice"));
        assert_eq!(booked.patient_email(), Some("alice@x.com"));
    }

    #[test]
    fn book_unknown_id_fails() {
        let mut registry = AppointmentRegistry::new();
        let err = registry.book(42, "Alice", "alice@x.com").unwrap_err();
        assert!(matches!(err, MediBookError::NotFound(42)));
    }

    #[test]
    fn rebooking_fails_and_leaves_the_record_unchanged() {
        let mut registry = AppointmentRegistry::new();
        registry.create_slot("Smith", dt("2030-01-01 09:00")).unwrap();
        registry.book(1, "Alice", "alice@x.com").unwrap();

        let err = registry.book(1, "Bob", "bob@y.com").unwrap_err();
        assert!(matches!(err, MediBookError::AlreadyBooked(1)));

        let unchanged = registry.find(1).unwrap();
        assert_eq!(unchanged.patient_name(), Some("Alice"));
    }

    #[test]
    fn book_rejects_blank_patient_name() {
        let mut registry = AppointmentRegistry::new();
        registry.create_slot("Smith", dt("2030-01-01 09:00")).unwrap();
        let err = registry.book(1, "  ", "alice@x.com").unwrap_err();
        assert!(matches!(err, MediBookError::InvalidInput(_)));
        assert!(!registry.find(1).unwrap().is_booked());
    }

    #[test]
    fn book_rejects_invalid_email() {
        let mut registry = AppointmentRegistry::new();
        registry.create_slot("Smith", dt("2030-01-01 09:00")).unwrap();
        let err = registry.book(1, "Alice", "not-an-email").unwrap_err();
        assert!(matches!(err, MediBookError::InvalidInput(_)));
    }

    #[test]
    fn cancel_clears_patient_and_keeps_slot() {
        let mut registry = AppointmentRegistry::new();
        registry.create_slot("Smith", dt("2030-01-01 09:00")).unwrap();
        registry.book(1, "Alice", "alice@x.com").unwrap();

        let cancelled = registry.cancel(1).unwrap();
        assert!(!cancelled.is_booked());
        assert_eq!(cancelled.id, 1);
        assert_eq!(cancelled.date_time, dt("2030-01-01 09:00"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn cancel_unknown_id_fails() {
        let mut registry = AppointmentRegistry::new();
        assert!(matches!(
            registry.cancel(7).unwrap_err(),
            MediBookError::NotFound(7)
        ));
    }

    #[test]
    fn cancel_unbooked_slot_fails() {
        let mut registry = AppointmentRegistry::new();
        registry.create_slot("Smith", dt("2030-01-01 09:00")).unwrap();
        assert!(matches!(
            registry.cancel(1).unwrap_err(),
            MediBookError::NotBooked(1)
        ));
    }

    #[test]
    fn cancel_then_rebook_takes_new_patient_data() {
        let mut registry = AppointmentRegistry::new();
        registry.create_slot("Smith", dt("2030-01-01 09:00")).unwrap();
        registry.book(1, "Alice", "alice@x.com").unwrap();
        registry.cancel(1).unwrap();

        let rebooked = registry.book(1, "Bob", "bob@y.com").unwrap();
        assert_eq!(rebooked.id, 1);
        assert_eq!(rebooked.date_time, dt("2030-01-01 09:00"));
        assert_eq!(rebooked.patient_name(), Some("Bob"));
    }

    #[test]
    fn ids_are_never_reused_after_cancellation() {
        let mut registry = AppointmentRegistry::new();
        registry.create_slot("Smith", dt("2030-01-01 09:00")).unwrap();
        registry.book(1, "Alice", "alice@x.com").unwrap();
        registry.cancel(1).unwrap();

        let next = registry.create_slot("Jones", dt("2030-02-01 09:00")).unwrap();
        assert_eq!(next.id, 2);
    }

    #[test]
    fn available_and_booked_partition_the_registry() {
        let mut registry = AppointmentRegistry::new();
        registry.create_slot("Smith", dt("2030-01-01 09:00")).unwrap();
        registry.create_slot("Smith", dt("2030-01-01 10:00")).unwrap();
        registry.create_slot("Jones", dt("2030-01-02 09:00")).unwrap();
        registry.book(2, "Alice", "alice@x.com").unwrap();

        let available = registry.available();
        let booked = registry.booked();
        assert_eq!(available.len() + booked.len(), registry.len());
        for apt in &available {
            assert!(booked.iter().all(|b| b.id != apt.id));
        }
    }

    #[test]
    fn search_by_doctor_is_case_insensitive_substring() {
        let mut registry = AppointmentRegistry::new();
        registry.create_slot("Smithson", dt("2030-01-01 09:00")).unwrap();
        registry.create_slot("Jones", dt("2030-01-01 10:00")).unwrap();

        let matches = registry.search_by_doctor("smith");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].doctor_name, "Smithson");
        assert!(registry.search_by_doctor("SON").len() == 1);
        assert!(registry.search_by_doctor("nobody").is_empty());
    }

    #[test]
    fn search_by_date_ignores_time_of_day() {
        let mut registry = AppointmentRegistry::new();
        registry.create_slot("Smith", dt("2030-01-01 09:00")).unwrap();
        registry.create_slot("Smith", dt("2030-01-01 16:30")).unwrap();
        registry.create_slot("Smith", dt("2030-01-02 09:00")).unwrap();

        let date = dt("2030-01-01 00:00").date();
        let matches = registry.search_by_date(date);
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|apt| apt.date_time.date() == date));
    }

    // Front-desk happy path plus the double-book and cancel edges.
    #[test]
    fn create_book_rebook_cancel_scenario() {
        let mut registry = AppointmentRegistry::new();

        let slot = registry.create_slot("Smith", dt("2030-01-01 09:00")).unwrap();
        assert_eq!(slot.id, 1);
        assert!(!slot.is_booked());

        let booked = registry.book(1, "Alice", "alice@x.com").unwrap();
        assert!(booked.is_booked());

        assert!(matches!(
            registry.book(1, "Bob", "bob@y.com").unwrap_err(),
            MediBookError::AlreadyBooked(1)
        ));

        let cancelled = registry.cancel(1).unwrap();
        assert!(!cancelled.is_booked());
        assert_eq!(cancelled.patient_name(), None);

        assert!(registry.available().iter().any(|apt| apt.id == 1));
    }
}
