use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{parse_date_time, DATE_TIME_FORMAT};
use crate::registry::AppointmentRegistry;

pub fn run(registry: &mut AppointmentRegistry, doctor_name: &str, date_time: &str) -> Result<CmdResult> {
    let at = parse_date_time(date_time)?;
    let appointment = registry.create_slot(doctor_name, at)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added slot {} for Dr. {} at {}",
        appointment.id,
        appointment.doctor_name,
        appointment.date_time.format(DATE_TIME_FORMAT)
    )));
    result.affected.push(appointment);
    Ok(result)
}
