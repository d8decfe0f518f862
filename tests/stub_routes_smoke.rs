mod common;

use anyhow::{Context, Result};

use empedia::remote::{EntityService, ListQuery};

#[test]
fn stub_route_registration_smoke() -> Result<()> {
    let guard = common::spawn_seeded_server()?;
    let client = reqwest::blocking::Client::new();

    // Public route should be reachable.
    let health = client
        .get(format!("{}/healthz", guard.base_url))
        .send()
        .context("GET /healthz")?;
    assert!(health.status().is_success());

    // API routes reject missing or wrong tokens.
    let unauth = client
        .get(format!("{}/jobs", guard.base_url))
        .send()
        .context("GET /jobs without auth")?;
    assert_eq!(unauth.status(), reqwest::StatusCode::UNAUTHORIZED);

    let wrong = client
        .get(format!("{}/jobs", guard.base_url))
        .header(reqwest::header::AUTHORIZATION, common::auth_header("nope"))
        .send()
        .context("GET /jobs with wrong token")?;
    assert_eq!(wrong.status(), reqwest::StatusCode::UNAUTHORIZED);

    for path in [
        "/jobs",
        "/internships",
        "/companies",
        "/courses",
        "/mentors",
        "/users",
        "/admin/applications",
        "/enrollments/admin/all",
        "/dashboard/metrics",
        "/mentorships?mentor_id=m1",
    ] {
        let resp = client
            .get(format!("{}{}", guard.base_url, path))
            .header(
                reqwest::header::AUTHORIZATION,
                common::auth_header(&guard.token),
            )
            .send()
            .with_context(|| format!("GET {}", path))?;
        assert!(resp.status().is_success(), "GET {} -> {}", path, resp.status());
    }

    // Unknown routes still 404 through the composed router.
    let missing = client
        .get(format!("{}/definitely-not-a-route", guard.base_url))
        .header(
            reqwest::header::AUTHORIZATION,
            common::auth_header(&guard.token),
        )
        .send()
        .context("GET unknown route")?;
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);

    Ok(())
}

#[test]
fn list_shapes_match_each_collection() -> Result<()> {
    let guard = common::spawn_seeded_server()?;
    let client = reqwest::blocking::Client::new();
    let get = |path: &str| -> Result<serde_json::Value> {
        client
            .get(format!("{}{}", guard.base_url, path))
            .header(
                reqwest::header::AUTHORIZATION,
                common::auth_header(&guard.token),
            )
            .send()
            .with_context(|| format!("GET {}", path))?
            .json()
            .with_context(|| format!("parse {}", path))
    };

    let jobs = get("/jobs?page=1&limit=10")?;
    assert!(jobs["jobs"].is_array());
    assert_eq!(jobs["totalPages"], 1);
    // The job's company comes back populated.
    assert_eq!(jobs["jobs"][0]["company"]["company_name"], "Acme Analytics");

    let internships = get("/internships")?;
    assert!(internships["internships"].is_array());
    let users = get("/users")?;
    assert!(users["users"].is_array());

    assert!(get("/companies")?.is_array());
    assert!(get("/courses")?.is_array());
    assert!(get("/mentors")?.is_array());
    Ok(())
}

#[test]
fn client_normalizes_both_list_shapes() -> Result<()> {
    let guard = common::spawn_seeded_server()?;
    let client = guard.client()?;

    let jobs = client.jobs().list(ListQuery::default())?;
    assert_eq!(jobs.items.len(), 1);
    assert_eq!(jobs.total_pages, 1);
    assert_eq!(jobs.items[0].title, "Data Analyst");

    let companies = client.companies().list(ListQuery::default())?;
    assert_eq!(companies.total_pages, 1);
    let names: Vec<&str> = companies
        .items
        .iter()
        .map(|c| c.company_name.as_str())
        .collect();
    assert_eq!(names, ["Acme Analytics", "Finlytics"]);

    let users = client.users().list(ListQuery { page: 1, limit: 1 })?;
    assert_eq!(users.items.len(), 1);
    assert_eq!(users.total_pages, 2);
    Ok(())
}

#[test]
fn client_reports_unauthorized_and_missing_records() -> Result<()> {
    let guard = common::spawn_seeded_server()?;

    let anonymous = guard.client_with_token("wrong")?;
    let err = anonymous
        .jobs()
        .list(ListQuery::default())
        .expect_err("wrong token must be rejected");
    assert!(format!("{:#}", err).contains("unauthorized"), "{:#}", err);

    let client = guard.client()?;
    let err = client.jobs().get("nope").expect_err("missing job");
    assert!(format!("{:#}", err).contains("job nope not found"), "{:#}", err);

    client.jobs().delete("j1")?;
    let page = client.jobs().list(ListQuery::default())?;
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 1);
    Ok(())
}

#[test]
fn dashboard_metrics_count_seeded_records() -> Result<()> {
    let guard = common::spawn_seeded_server()?;
    let metrics = guard.client()?.dashboard_metrics()?;
    assert_eq!(metrics.active_jobs, 1);
    assert_eq!(metrics.active_internships, 1);
    assert_eq!(metrics.total_applications, 1);
    assert_eq!(metrics.course_enrollments, 1);
    assert_eq!(metrics.mentor_bookings, 0);
    assert_eq!(metrics.total_users, 2);
    assert_eq!(metrics.total_mentors, 1);
    assert_eq!(metrics.total_companies, 2);
    Ok(())
}
