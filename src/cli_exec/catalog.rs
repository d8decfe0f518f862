use empedia::model::{Ref, Section};

use super::*;

fn print_sections(sections: &[Section]) {
    if sections.is_empty() {
        println!("(no sections)");
    }
    for (i, section) in sections.iter().enumerate() {
        println!(
            "{}. {} [{}]",
            i + 1,
            section.title,
            section.id.as_deref().unwrap_or("-")
        );
        for lesson in &section.lessons {
            let free = if lesson.is_preview_free { " (free preview)" } else { "" };
            println!(
                "   - {} ({}, {} min){}",
                lesson.title,
                lesson.kind.as_deref().unwrap_or("Video"),
                lesson.duration.as_deref().unwrap_or("0"),
                free
            );
        }
    }
}

pub(super) fn handle_curriculum_command(
    client: &RemoteClient,
    course_id: &str,
    json: bool,
) -> Result<()> {
    let sections = client.curriculum(course_id)?;
    if json {
        print_json(&sections, "curriculum")?;
    } else {
        print_sections(&sections);
    }
    Ok(())
}

pub(super) fn handle_add_section_command(
    client: &RemoteClient,
    course_id: &str,
    title: &str,
    json: bool,
) -> Result<()> {
    let section = client.add_section(course_id, title)?;
    if json {
        print_json(&section, "section")?;
    } else {
        println!(
            "Added section {} ({})",
            section.title,
            section.id.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

pub(super) fn handle_enrollments_command(
    client: &RemoteClient,
    user: Option<&str>,
    json: bool,
) -> Result<()> {
    let enrollments = match user {
        Some(user_id) => client.enrollments_for_user(user_id)?,
        None => client.all_enrollments()?,
    };
    if json {
        return print_json(&enrollments, "enrollments");
    }
    if enrollments.is_empty() {
        println!("(none)");
    }
    for e in enrollments {
        let course = match &e.course_id {
            Ref::Embedded(c) => c.title.clone().unwrap_or_default(),
            Ref::Id(id) => id.clone(),
        };
        println!(
            "{} user={} course={} progress={}% {}",
            e.id,
            e.user_id,
            course,
            e.progress_percent.unwrap_or(0.0),
            e.completion_status.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

pub(super) fn handle_metrics_command(client: &RemoteClient, json: bool) -> Result<()> {
    let m = client.dashboard_metrics()?;
    if json {
        return print_json(&m, "metrics");
    }
    println!("active jobs: {}", m.active_jobs);
    println!("active internships: {}", m.active_internships);
    println!("applications: {}", m.total_applications);
    println!("course enrollments: {}", m.course_enrollments);
    println!("mentor bookings: {}", m.mentor_bookings);
    println!("pending payouts: {}", m.pending_payouts);
    println!("users: {}", m.total_users);
    println!("mentors: {}", m.total_mentors);
    println!("companies: {}", m.total_companies);
    Ok(())
}
