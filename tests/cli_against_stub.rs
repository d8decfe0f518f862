mod common;

use anyhow::{Context, Result};

use common::{empedia_ok, run_empedia};

#[test]
fn cli_help_surface_is_stable() -> Result<()> {
    let dir = tempfile::tempdir().context("profile tempdir")?;
    let help = empedia_ok(dir.path(), &["--help"])?;
    assert!(help.contains("Usage: empedia"));
    for cmd in ["wizard", "jobs", "applications", "programs", "book", "metrics", "tui"] {
        assert!(help.contains(cmd), "missing {} in:\n{}", cmd, help);
    }

    let wizard_help = empedia_ok(dir.path(), &["wizard", "--help"])?;
    assert!(wizard_help.contains("--set"));
    assert!(wizard_help.contains("--lesson"));
    Ok(())
}

#[test]
fn cli_login_list_create_and_book() -> Result<()> {
    let guard = common::spawn_seeded_server()?;
    let dir = tempfile::tempdir().context("profile tempdir")?;
    let profile = dir.path();

    empedia_ok(profile, &["config", "set", "--url", &guard.base_url])?;

    // Without a session the stub rejects API calls.
    let out = run_empedia(profile, &["jobs", "list"])?;
    assert!(!out.success);

    let login = empedia_ok(profile, &["login", "--token", &guard.token, "--user-id", "u1"])?;
    assert!(login.contains("Logged in"));

    let jobs = empedia_ok(profile, &["jobs", "list"])?;
    assert!(jobs.contains("j1 Data Analyst @ Acme Analytics"), "{}", jobs);

    let created = empedia_ok(
        profile,
        &[
            "wizard",
            "company",
            "--set",
            "company_name=Globex",
            "--set",
            "industry=Logistics",
        ],
    )?;
    assert!(created.starts_with("Created company "), "{}", created);
    let companies = empedia_ok(profile, &["companies", "list"])?;
    assert!(companies.contains("Globex [Logistics]"), "{}", companies);

    // An incomplete wizard names the failing step and field.
    let out = run_empedia(profile, &["wizard", "job", "--set", "title=Analyst"])?;
    assert!(!out.success);
    assert!(out.stderr.contains("company"), "{}", out.stderr);

    let booked = empedia_ok(
        profile,
        &["book", "--mentor", "m1", "--program", "p1", "--slot", "slot-a", "--note", "hi"],
    )?;
    assert!(booked.contains("Booked slot slot-a of Resume review"), "{}", booked);
    assert!(booked.contains("1 open slot(s) left"), "{}", booked);

    let again = run_empedia(
        profile,
        &["book", "--mentor", "m1", "--program", "p1", "--slot", "slot-a"],
    )?;
    assert!(!again.success);

    let status = empedia_ok(profile, &["applications", "status", "a1", "Interview"])?;
    assert!(status.contains("a1 is now Interview"), "{}", status);
    Ok(())
}
