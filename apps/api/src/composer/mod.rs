// Job description composer.
// Deterministic extraction/reformatting of a raw JD, with a best-effort
// external generation attempt in front of it. External calls go through llm_client.

pub mod extract;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod sections;
pub mod text;

pub use generator::JdComposer;
