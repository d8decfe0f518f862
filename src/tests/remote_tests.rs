use serde_json::json;

use super::*;
use crate::model::{Application, Company, Job, Page};
use crate::profile::ClientConfig;
use crate::session::Session;

#[test]
fn paginated_list_reads_items_and_total() {
    let body = json!({
        "jobs": [{ "_id": "j1", "title": "QA" }, { "_id": "j2", "title": "Dev" }],
        "totalPages": 3,
    });
    let page: Page<Job> = normalize_page(body, ListShape::Paginated { key: "jobs" }).unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[1].title, "Dev");
    assert_eq!(page.total_pages, 3);
}

#[test]
fn bare_array_is_a_single_page() {
    let body = json!([{ "_id": "c1", "company_name": "Acme" }]);
    let page: Page<Company> = normalize_page(body.clone(), ListShape::Bare).unwrap();
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.items[0].company_name, "Acme");

    // a paginated endpoint answering with a bare array is accepted too
    let page: Page<Company> =
        normalize_page(body, ListShape::Paginated { key: "companies" }).unwrap();
    assert_eq!(page.items.len(), 1);
}

#[test]
fn mismatched_list_shapes_are_errors() {
    let err = normalize_page::<Job>(json!({ "items": [] }), ListShape::Paginated { key: "jobs" })
        .unwrap_err();
    assert!(err.to_string().contains("no 'jobs' array"));

    let err = normalize_page::<Company>(json!({ "companies": [] }), ListShape::Bare).unwrap_err();
    assert_eq!(err.to_string(), "expected a JSON array, got an object");
}

#[test]
fn missing_total_pages_means_one() {
    let page: Page<Job> =
        normalize_page(json!({ "jobs": [] }), ListShape::Paginated { key: "jobs" }).unwrap();
    assert_eq!(page.total_pages, 1);
    assert!(page.items.is_empty());
}

#[test]
fn records_unwrap_from_named_wrappers() {
    let job: Job = unwrap_record(json!({ "job": { "_id": "j1", "title": "QA" } }), "job").unwrap();
    assert_eq!(job.id.as_deref(), Some("j1"));

    let job: Job = unwrap_record(json!({ "_id": "j2", "title": "Dev" }), "job").unwrap();
    assert_eq!(job.title, "Dev");

    // a scalar under the entity name is a field, not a wrapper
    let app: Application = unwrap_record(
        json!({ "_id": "a1", "job": "j1", "status": "Applied" }),
        "job",
    )
    .unwrap();
    assert_eq!(app.job.id(), Some("j1"));
}

#[test]
fn media_urls_are_prefixed_and_normalized() {
    let base = "https://api.example.test/";
    assert_eq!(
        media_url(base, "uploads\\logo.png"),
        "https://api.example.test/uploads/logo.png"
    );
    assert_eq!(
        media_url(base, "/uploads/cv.pdf"),
        "https://api.example.test/uploads/cv.pdf"
    );
    assert_eq!(media_url(base, "https://cdn.test/a.png"), "https://cdn.test/a.png");
    assert_eq!(media_url(base, "HTTP://cdn.test/a.png"), "HTTP://cdn.test/a.png");
    assert_eq!(media_url(base, "  "), "");
}

#[test]
fn client_joins_paths_onto_the_base_url() {
    let client = RemoteClient::new(
        ClientConfig::for_url("http://127.0.0.1:4000/"),
        Session::with_token("t"),
    )
    .unwrap();
    assert_eq!(client.url("/jobs"), "http://127.0.0.1:4000/jobs");
    assert_eq!(client.url("jobs/j1"), "http://127.0.0.1:4000/jobs/j1");
    assert_eq!(client.media_url("uploads/x.png"), "http://127.0.0.1:4000/uploads/x.png");
    assert_eq!(client.session().token(), Some("t"));
}

#[test]
fn collection_paths_and_shapes() {
    assert_eq!(<Job as Entity>::PATH, "/jobs");
    assert_eq!(<Job as Entity>::LIST, ListShape::Paginated { key: "jobs" });
    assert_eq!(<Company as Entity>::LIST, ListShape::Bare);
    assert_eq!(<Company as Entity>::NAME, "company");
}
