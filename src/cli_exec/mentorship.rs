use std::time::Instant;

use empedia::booking::{BookingFlow, available_slots};
use empedia::model::{MentorshipProgram, Ref};

use crate::cli_commands::mentorship::BookArgs;

use super::*;

fn print_program(program: &MentorshipProgram, only_open: bool) {
    println!(
        "{} {} ({} min, {} {})",
        program.id, program.title, program.duration, program.price, program.currency
    );
    for slot in &program.available_slots {
        if only_open && slot.is_booked {
            continue;
        }
        let state = if slot.is_booked { "booked" } else { "open" };
        println!(
            "   {} {} {}-{} {}",
            slot.id, slot.date, slot.start_time, slot.end_time, state
        );
    }
}

pub(super) fn handle_programs_command(
    client: &RemoteClient,
    mentor_id: &str,
    available: bool,
    json: bool,
) -> Result<()> {
    let mut programs = client.programs_by_mentor(mentor_id)?;
    if available {
        for p in &mut programs {
            p.available_slots.retain(|s| !s.is_booked);
        }
    }
    if json {
        return print_json(&programs, "programs");
    }
    if programs.is_empty() {
        println!("(no programs)");
    }
    for p in &programs {
        print_program(p, available);
    }
    Ok(())
}

pub(super) fn handle_book_command(client: &RemoteClient, args: BookArgs) -> Result<()> {
    let program = client.program(&args.program)?;
    let mut flow = BookingFlow::new();
    flow.select(&program, &args.slot)?;
    flow.set_note(args.note);
    let refreshed = flow.confirm(client, &args.mentor, Instant::now())?;

    if args.json {
        return print_json(&refreshed, "programs");
    }
    println!("Booked slot {} of {}", args.slot, program.title);
    if let Some(p) = refreshed.iter().find(|p| p.id == program.id) {
        println!("{} open slot(s) left", available_slots(p).len());
    }
    Ok(())
}

pub(super) fn handle_bookings_command(client: &RemoteClient, json: bool) -> Result<()> {
    let bookings = client.my_bookings()?;
    if json {
        return print_json(&bookings, "bookings");
    }
    if bookings.is_empty() {
        println!("(no bookings)");
    }
    for b in &bookings {
        let mentor = match &b.mentor {
            Some(Ref::Embedded(m)) => m.full_name.clone(),
            Some(Ref::Id(id)) => id.clone(),
            None => "-".to_string(),
        };
        println!(
            "{} {} {} with {} [{}]",
            b.id, b.slot_date, b.slot_time, mentor, b.status
        );
    }
    Ok(())
}
