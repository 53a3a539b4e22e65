use super::Notifier;
use crate::model::Appointment;

/// Friendly long form used in confirmation messages.
const CONFIRMATION_TIME_FORMAT: &str = "%A, %B %d, %Y at %H:%M";

/// Simulates email delivery by printing the confirmation to stdout.
pub struct ConsoleNotifier {
    sender: String,
    clinic_name: String,
}

impl ConsoleNotifier {
    pub fn new(sender: impl Into<String>, clinic_name: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            clinic_name: clinic_name.into(),
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, appointment: &Appointment) -> bool {
        // An unbooked appointment has nowhere to deliver to. The booking
        // command only calls notify after a successful book, so this is a
        // contract violation by the caller, not a delivery failure.
        let patient = match &appointment.patient {
            Some(patient) => patient,
            None => return false,
        };

        let divider = "=".repeat(60);
        println!("\n{}", divider);
        println!("                EMAIL CONFIRMATION SENT");
        println!("{}", divider);
        println!("From: {}", self.sender);
        println!("To: {}", patient.email);
        println!(
            "Subject: Appointment Confirmation - Dr. {}",
            appointment.doctor_name
        );
        println!();
        println!("Dear {},", patient.name);
        println!();
        println!("Your appointment has been confirmed!");
        println!();
        println!("APPOINTMENT DETAILS:");
        println!("- ID: {}", appointment.id);
        println!("- Doctor: Dr. {}", appointment.doctor_name);
        println!(
            "- Date & Time: {}",
            appointment.date_time.format(CONFIRMATION_TIME_FORMAT)
        );
        println!("- Patient: {}", patient.name);
        println!();
        println!("Please arrive 15 minutes before your scheduled time.");
        println!("To reschedule or cancel, contact us 24 hours in advance.");
        println!();
        println!("Best regards,");
        println!("{} Appointment System", self.clinic_name);
        println!("{}\n", divider);
        true
    }
}
