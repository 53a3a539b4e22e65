use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediBookError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Slot already exists for Dr. {doctor} at {at}")]
    DuplicateSlot { doctor: String, at: NaiveDateTime },

    #[error("Cannot create an appointment in the past ({0})")]
    PastDateTime(NaiveDateTime),

    #[error("Appointment not found: {0}")]
    NotFound(u32),

    #[error("Appointment {0} is already booked")]
    AlreadyBooked(u32),

    #[error("Appointment {0} is not booked")]
    NotBooked(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MediBookError>;
