//! # API Facade
//!
//! The single entry point for all MediBook operations, regardless of the UI
//! driving them. The facade dispatches to the command layer and returns
//! structured `Result<CmdResult>` values; it performs no business logic and
//! no I/O of its own.
//!
//! `MediBookApi<N: Notifier>` is generic over the notification backend:
//! the CLI wires in `ConsoleNotifier`, tests use the fixtures in
//! [`crate::notify`].

use crate::commands;
use crate::error::Result;
use crate::model::Appointment;
use crate::notify::Notifier;
use crate::registry::AppointmentRegistry;

pub struct MediBookApi<N: Notifier> {
    registry: AppointmentRegistry,
    notifier: N,
}

impl<N: Notifier> MediBookApi<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            registry: AppointmentRegistry::new(),
            notifier,
        }
    }

    pub fn create_slot(&mut self, doctor_name: &str, date_time: &str) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.registry, doctor_name, date_time)
    }

    pub fn available(&self) -> Result<commands::CmdResult> {
        commands::list::available(&self.registry)
    }

    pub fn booked(&self) -> Result<commands::CmdResult> {
        commands::list::booked(&self.registry)
    }

    pub fn find(&self, id: u32) -> Result<Appointment> {
        self.registry.find(id)
    }

    pub fn book(&mut self, id: u32, patient_name: &str, patient_email: &str) -> Result<commands::CmdResult> {
        commands::book::run(
            &mut self.registry,
            &self.notifier,
            id,
            patient_name,
            patient_email,
        )
    }

    pub fn cancel(&mut self, id: u32) -> Result<commands::CmdResult> {
        commands::cancel::run(&mut self.registry, id)
    }

    pub fn search_by_doctor(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::by_doctor(&self.registry, term)
    }

    pub fn search_by_date(&self, raw_date: &str) -> Result<commands::CmdResult> {
        commands::search::by_date(&self.registry, raw_date)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
