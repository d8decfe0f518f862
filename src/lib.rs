//! Admin client for the Empedia marketplace API: wizard engine, service
//! adapters, edit-mode hydration and the mentor booking flow.

pub mod autotag;
pub mod blueprints;
pub mod booking;
pub mod form;
pub mod hydrate;
pub mod logging;
pub mod model;
pub mod profile;
pub mod remote;
pub mod session;
pub mod task;
pub mod tui;

mod tui_shell;
