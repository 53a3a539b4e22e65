use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::parse_date;
use crate::registry::AppointmentRegistry;

pub fn by_doctor(registry: &AppointmentRegistry, term: &str) -> Result<CmdResult> {
    let matches = registry.search_by_doctor(term);
    Ok(describe(term, matches))
}

pub fn by_date(registry: &AppointmentRegistry, raw_date: &str) -> Result<CmdResult> {
    let date = parse_date(raw_date)?;
    let matches = registry.search_by_date(date);
    Ok(describe(raw_date.trim(), matches))
}

fn describe(criteria: &str, matches: Vec<crate::model::Appointment>) -> CmdResult {
    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No appointments found for '{}'",
            criteria
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Found {} appointment(s) for '{}'",
            matches.len(),
            criteria
        )));
    }
    result.with_listed(matches)
}
