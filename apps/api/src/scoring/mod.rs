// Candidate fitment scoring.
// The score itself comes from an external service; this module feeds it
// job/candidate payloads, persists results, and ranks applications.

pub mod batch;
pub mod client;
pub mod ranking;
pub mod store;
