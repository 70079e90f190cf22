//! Agent configurations for the Zootour concierge.
//!
//! These are pure configs — prompt strings, tool lists, and sub-agent
//! wiring — interpreted by an external LLM orchestration runtime. The
//! routing logic of the whole assistant lives in the instructions
//! defined here; the data tools they call are served by the
//! `zootour-animals` and `zootour-shows` MCP deployments.

pub use {
    booking::reserve_show,
    concierge::{concierge, researcher, response_formatter, zoo_concierge},
    show::show_agent,
};

mod booking;
mod concierge;
mod show;
