use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::DATE_TIME_FORMAT;
use crate::registry::AppointmentRegistry;

pub fn run(registry: &mut AppointmentRegistry, id: u32) -> Result<CmdResult> {
    let appointment = registry.cancel(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Appointment {} cancelled; the {} slot with Dr. {} is available again",
        appointment.id,
        appointment.date_time.format(DATE_TIME_FORMAT),
        appointment.doctor_name
    )));
    result.affected.push(appointment);
    Ok(result)
}
