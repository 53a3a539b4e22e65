use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::notify::Notifier;
use crate::registry::AppointmentRegistry;

/// Book a slot, then notify the patient.
///
/// The notification is a follow-up step, not part of the booking
/// transaction: a notifier failure is reported as a warning and the booking
/// stands.
pub fn run<N: Notifier>(
    registry: &mut AppointmentRegistry,
    notifier: &N,
    id: u32,
    patient_name: &str,
    patient_email: &str,
) -> Result<CmdResult> {
    let appointment = registry.book(id, patient_name, patient_email)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Appointment {} booked for {} with Dr. {}",
        appointment.id,
        patient_name.trim(),
        appointment.doctor_name
    )));

    if !notifier.notify(&appointment) {
        result.add_message(CmdMessage::warning(format!(
            "Could not send the confirmation to {}; the booking is unaffected",
            patient_email.trim()
        )));
    }

    result.affected.push(appointment);
    Ok(result)
}
