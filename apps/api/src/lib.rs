//! JD API: job description composition and candidate fitment scoring.
//!
//! The `jd-api` binary serves the composer over HTTP; `fitment-rank` runs the
//! batch scorer against the hosted Postgres database.

pub mod composer;
pub mod config;
pub mod db;
pub mod errors;
pub mod llm_client;
pub mod logging;
pub mod models;
pub mod routes;
pub mod scoring;
pub mod state;
