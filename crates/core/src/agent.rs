//! Agent configuration.
//!
//! An [`Agent`] is pure config — name, instruction, and tool names.
//! It is interpreted by an external LLM orchestration runtime; nothing
//! in this workspace dispatches model calls.

use serde::{Deserialize, Serialize};

/// An agent configuration.
///
/// Agents describe *what* an agent does but not *how* tool calls are
/// dispatched. Routing is expressed through `sub_agents`: a parent
/// agent's instruction names its children, and sequential pipelines
/// pass data forward through each child's `output_key`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Agent {
    /// Agent identifier.
    pub name: String,

    /// Human-readable description (shown to the router as a summary).
    pub description: String,

    /// System instruction sent before each model request.
    pub instruction: String,

    /// Names of tools this agent may call.
    pub tools: Vec<String>,

    /// Child agents this agent can delegate to.
    pub sub_agents: Vec<Agent>,

    /// State key this agent's output is stored under, when part of a
    /// sequential pipeline.
    pub output_key: Option<String>,
}

impl Agent {
    /// Create a new agent with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Set the system instruction.
    pub fn instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    /// Add a tool by name.
    pub fn tool(mut self, name: impl Into<String>) -> Self {
        self.tools.push(name.into());
        self
    }

    /// Add a child agent.
    pub fn sub_agent(mut self, agent: Agent) -> Self {
        self.sub_agents.push(agent);
        self
    }

    /// Set the output state key.
    pub fn output_key(mut self, key: impl Into<String>) -> Self {
        self.output_key = Some(key.into());
        self
    }

    /// Find a direct child agent by name.
    pub fn sub_agent_named(&self, name: &str) -> Option<&Agent> {
        self.sub_agents.iter().find(|a| a.name == name)
    }
}
