use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use medibook::api::{CmdMessage, MediBookApi, MessageLevel};
use medibook::config::MediBookConfig;
use medibook::error::Result;
use medibook::model::{Appointment, DATE_TIME_FORMAT};
use medibook::notify::console::ConsoleNotifier;
use std::io::{self, Write};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: MediBookApi<ConsoleNotifier>,
    clinic_name: String,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli);

    if !cli.no_banner {
        print_banner(&ctx.clinic_name);
    }
    run_menu(&mut ctx)
}

fn init_context(cli: &Cli) -> AppContext {
    let config = resolve_config_dir(cli)
        .and_then(|dir| MediBookConfig::load(dir).ok())
        .unwrap_or_default();

    let notifier = ConsoleNotifier::new(config.sender_email.clone(), config.clinic_name.clone());
    AppContext {
        api: MediBookApi::new(notifier),
        clinic_name: config.clinic_name,
    }
}

fn resolve_config_dir(cli: &Cli) -> Option<PathBuf> {
    if let Some(dir) = &cli.config_dir {
        return Some(dir.clone());
    }
    if let Ok(dir) = std::env::var("MEDIBOOK_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "medibook", "medibook").map(|dirs| dirs.config_dir().to_path_buf())
}

fn run_menu(ctx: &mut AppContext) -> Result<()> {
    loop {
        print_menu();
        let choice = match prompt("Enter your choice: ")? {
            Some(choice) => choice,
            None => return Ok(()),
        };

        match choice.as_str() {
            "1" => handle_add_slots(ctx)?,
            "2" => handle_available(ctx)?,
            "3" => handle_book(ctx)?,
            "4" => handle_booked(ctx)?,
            "5" => handle_cancel(ctx)?,
            "6" => handle_search(ctx)?,
            "7" => {
                println!("Thank you for using {}. Goodbye!", ctx.clinic_name);
                return Ok(());
            }
            other => println!(
                "{}",
                format!("Invalid choice '{}': please pick 1-7.", other).red()
            ),
        }
    }
}

fn handle_add_slots(ctx: &mut AppContext) -> Result<()> {
    print_section("ADD APPOINTMENT SLOTS");

    let doctor = match prompt("Enter doctor's name: ")? {
        Some(doctor) if !doctor.is_empty() => doctor,
        Some(_) => {
            println!("{}", "Doctor name cannot be empty.".red());
            return Ok(());
        }
        None => return Ok(()),
    };

    println!("\nEnter appointment slots (format: YYYY-MM-DD HH:MM)");
    println!("Example: 2030-01-15 09:00");
    println!("Enter 'done' when finished adding slots");

    let mut added = 0;
    loop {
        let input = match prompt("Enter appointment date and time: ")? {
            Some(input) => input,
            None => break,
        };
        if input.eq_ignore_ascii_case("done") {
            break;
        }

        match ctx.api.create_slot(&doctor, &input) {
            Ok(result) => {
                print_messages(&result.messages);
                added += 1;
            }
            // Per-slot problems are warnings; keep collecting the rest.
            Err(e) => println!("{}", e.to_string().yellow()),
        }
    }

    println!(
        "{}",
        format!("Added {} appointment slot(s) for Dr. {}", added, doctor).green()
    );
    Ok(())
}

fn handle_available(ctx: &mut AppContext) -> Result<()> {
    print_section("AVAILABLE APPOINTMENT SLOTS");
    let result = ctx.api.available()?;
    print_appointments(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_booked(ctx: &mut AppContext) -> Result<()> {
    print_section("BOOKED APPOINTMENTS");
    let result = ctx.api.booked()?;
    print_appointments(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_book(ctx: &mut AppContext) -> Result<()> {
    print_section("BOOK APPOINTMENT");

    let available = ctx.api.available()?;
    if available.listed.is_empty() {
        print_messages(&available.messages);
        return Ok(());
    }
    print_appointments(&available.listed);

    let id = match prompt_id("\nEnter appointment ID to book: ")? {
        Some(id) => id,
        None => return Ok(()),
    };
    let appointment = match ctx.api.find(id) {
        Ok(appointment) => appointment,
        Err(e) => {
            println!("{}", e.to_string().red());
            return Ok(());
        }
    };

    let name = match prompt("Enter patient name: ")? {
        Some(name) => name,
        None => return Ok(()),
    };
    let email = match prompt("Enter patient email: ")? {
        Some(email) => email,
        None => return Ok(()),
    };

    println!("\nAppointment details:");
    println!("- ID: {}", appointment.id);
    println!("- Doctor: Dr. {}", appointment.doctor_name);
    println!(
        "- Date & Time: {}",
        appointment.date_time.format(DATE_TIME_FORMAT)
    );
    println!("- Patient: {}", name);
    println!("- Email: {}", email);

    if !confirm("\nConfirm booking? (y/n): ")? {
        println!("Booking cancelled.");
        return Ok(());
    }

    match ctx.api.book(id, &name, &email) {
        Ok(result) => print_messages(&result.messages),
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}

fn handle_cancel(ctx: &mut AppContext) -> Result<()> {
    print_section("CANCEL APPOINTMENT");

    let booked = ctx.api.booked()?;
    if booked.listed.is_empty() {
        print_messages(&booked.messages);
        return Ok(());
    }
    print_appointments(&booked.listed);

    let id = match prompt_id("\nEnter appointment ID to cancel: ")? {
        Some(id) => id,
        None => return Ok(()),
    };

    if !confirm("Are you sure you want to cancel this appointment? (y/n): ")? {
        println!("Cancellation aborted.");
        return Ok(());
    }

    match ctx.api.cancel(id) {
        Ok(result) => print_messages(&result.messages),
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}

fn handle_search(ctx: &mut AppContext) -> Result<()> {
    print_section("SEARCH APPOINTMENTS");
    println!("1. Search by doctor name");
    println!("2. Search by date (YYYY-MM-DD)");

    let choice = match prompt("Enter choice: ")? {
        Some(choice) => choice,
        None => return Ok(()),
    };

    let result = match choice.as_str() {
        "1" => {
            let term = match prompt("Enter doctor name (partial match allowed): ")? {
                Some(term) => term,
                None => return Ok(()),
            };
            ctx.api.search_by_doctor(&term)
        }
        "2" => {
            let date = match prompt("Enter date (YYYY-MM-DD): ")? {
                Some(date) => date,
                None => return Ok(()),
            };
            ctx.api.search_by_date(&date)
        }
        other => {
            println!("{}", format!("Invalid choice '{}'.", other).red());
            return Ok(());
        }
    };

    match result {
        Ok(result) => {
            print_appointments(&result.listed);
            print_messages(&result.messages);
        }
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}

// --- Prompting ---

/// Print a prompt and read one trimmed line. `None` means stdin hit EOF.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Keep prompting until the input parses as an id.
fn prompt_id(label: &str) -> Result<Option<u32>> {
    loop {
        let input = match prompt(label)? {
            Some(input) => input,
            None => return Ok(None),
        };
        match input.parse() {
            Ok(id) => return Ok(Some(id)),
            Err(_) => println!("{}", "Please enter a valid number.".red()),
        }
    }
}

fn confirm(label: &str) -> Result<bool> {
    let answer = prompt(label)?.unwrap_or_default().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

// --- Rendering ---

fn print_banner(clinic_name: &str) {
    let line = "═".repeat(60);
    println!("╔{}╗", line);
    println!("║{:^60}║", "DOCTOR'S APPOINTMENT BOOKING SYSTEM");
    println!("║{:^60}║", format!("Welcome to {}", clinic_name));
    println!("╚{}╝", line);
}

fn print_menu() {
    let line = "=".repeat(60);
    println!("\n{}", line);
    println!("{:^60}", "MAIN MENU");
    println!("{}", line);
    println!("1. Add doctor's appointment slots");
    println!("2. View available appointment slots");
    println!("3. Book an appointment");
    println!("4. View booked appointments");
    println!("5. Cancel an appointment");
    println!("6. Search appointments");
    println!("7. Exit");
    println!("{}", line);
}

fn print_section(title: &str) {
    let line = "=".repeat(60);
    println!("\n{}", line);
    println!("{:^60}", title);
    println!("{}", line);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const ID_WIDTH: usize = 5;
const DOCTOR_WIDTH: usize = 22;
const TIME_WIDTH: usize = 18;
const STATUS_WIDTH: usize = 11;
const PATIENT_WIDTH: usize = 18;

fn print_appointments(appointments: &[Appointment]) {
    if appointments.is_empty() {
        return;
    }

    println!(
        "{}{}{}{}{}",
        pad("ID", ID_WIDTH),
        pad("Doctor", DOCTOR_WIDTH),
        pad("Date & Time", TIME_WIDTH),
        pad("Status", STATUS_WIDTH),
        pad("Patient", PATIENT_WIDTH),
    );
    println!("{}", "-".repeat(ID_WIDTH + DOCTOR_WIDTH + TIME_WIDTH + STATUS_WIDTH + PATIENT_WIDTH));

    for appointment in appointments {
        let status = pad(
            if appointment.is_booked() {
                "BOOKED"
            } else {
                "AVAILABLE"
            },
            STATUS_WIDTH,
        );
        let status = if appointment.is_booked() {
            status.yellow()
        } else {
            status.green()
        };

        let patient = match (&appointment.patient_name(), &appointment.patient_email()) {
            (Some(name), Some(email)) => format!("{} <{}>", name, email),
            _ => String::new(),
        };

        println!(
            "{}{}{}{}{}",
            pad(&appointment.id.to_string(), ID_WIDTH),
            pad(&format!("Dr. {}", appointment.doctor_name), DOCTOR_WIDTH),
            pad(
                &appointment.date_time.format(DATE_TIME_FORMAT).to_string(),
                TIME_WIDTH
            ),
            status,
            patient,
        );
    }
    println!("\nTotal: {} appointment(s)", appointments.len());
}

/// Pad (or truncate with an ellipsis) to a fixed display width.
fn pad(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width.saturating_sub(1));
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
