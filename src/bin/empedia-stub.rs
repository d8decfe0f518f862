use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Multipart, Path, Query, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use clap::Parser;
use serde_json::{Map, Value, json};
use tokio::sync::RwLock;
use tracing::info;

#[path = "empedia_stub/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "empedia_stub/db.rs"]
mod db;
use self::db::*;
#[path = "empedia_stub/form_fields.rs"]
mod form_fields;
use self::form_fields::*;
#[path = "empedia_stub/handlers_records.rs"]
mod handlers_records;
use self::handlers_records::*;
#[path = "empedia_stub/handlers_courses.rs"]
mod handlers_courses;
use self::handlers_courses::*;
#[path = "empedia_stub/handlers_applications.rs"]
mod handlers_applications;
use self::handlers_applications::*;
#[path = "empedia_stub/handlers_mentorships.rs"]
mod handlers_mentorships;
use self::handlers_mentorships::*;
#[path = "empedia_stub/handlers_admin.rs"]
mod handlers_admin;
use self::handlers_admin::*;
#[path = "empedia_stub/seed.rs"]
mod seed;
#[path = "empedia_stub/routes.rs"]
mod routes;

struct AppState {
    dev_token: String,

    // Identity behind the dev token; owns "my" applications and bookings.
    dev_user_id: String,

    db: RwLock<Db>,
}

#[derive(Parser)]
#[command(name = "empedia-stub")]
#[command(about = "In-memory Empedia API for local development and tests", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8090")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// Bearer token every API route expects
    #[arg(long, default_value = "dev")]
    dev_token: String,

    /// Start with the demo companies, postings, course, mentor and users
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();
    empedia::logging::init("info");

    let mut db = Db::default();
    if args.seed {
        seed::seed(&mut db);
    }
    let state = Arc::new(AppState {
        dev_token: args.dev_token.clone(),
        dev_user_id: seed::DEV_USER_ID.to_string(),
        db: RwLock::new(db),
    });

    let app = routes::build_router(state);
    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;
    let local_addr = listener.local_addr().context("read listener local addr")?;
    info!(addr = %local_addr, seeded = args.seed, "empedia-stub listening");
    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

async fn require_bearer(
    State(state): State<Arc<AppState>>,
    req: axum::extract::Request,
    next: Next,
) -> Response {
    let Some(value) = req.headers().get(header::AUTHORIZATION) else {
        return unauthorized();
    };
    let Ok(value) = value.to_str() else {
        return unauthorized();
    };
    let Some(token) = value.strip_prefix("Bearer ") else {
        return unauthorized();
    };
    if token != state.dev_token {
        return unauthorized();
    }
    next.run(req).await
}

async fn healthz() -> Json<Value> {
    Json(json!({"status": "ok"}))
}
