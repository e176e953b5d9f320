//! Resume/JD analysis: prompts, the three-call pipeline, and the HTTP
//! handler that fronts it.

pub mod handlers;
pub mod pipeline;
pub mod prompts;
