use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::registry::AppointmentRegistry;

pub fn available(registry: &AppointmentRegistry) -> Result<CmdResult> {
    let slots = registry.available();
    let mut result = CmdResult::default();
    if slots.is_empty() {
        result.add_message(CmdMessage::info(
            "No available appointment slots. Add some slots first.",
        ));
    }
    Ok(result.with_listed(slots))
}

pub fn booked(registry: &AppointmentRegistry) -> Result<CmdResult> {
    let slots = registry.booked();
    let mut result = CmdResult::default();
    if slots.is_empty() {
        result.add_message(CmdMessage::info("No booked appointments."));
    }
    Ok(result.with_listed(slots))
}
