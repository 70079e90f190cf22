//! Tests for Agent configuration.

use zootour_core::Agent;

#[test]
fn agent_defaults_are_empty() {
    let agent = Agent::new("test");
    assert_eq!(agent.name, "test");
    assert!(agent.tools.is_empty());
    assert!(agent.sub_agents.is_empty());
    assert!(agent.output_key.is_none());
}

#[test]
fn agent_builder() {
    let agent = Agent::new("researcher")
        .description("Looks things up")
        .instruction("Answer the PROMPT.")
        .tool("get_animal_details")
        .tool("web_search")
        .output_key("research_data");

    assert_eq!(agent.tools, ["get_animal_details", "web_search"]);
    assert_eq!(agent.output_key.as_deref(), Some("research_data"));
}

#[test]
fn sub_agent_lookup() {
    let root = Agent::new("root")
        .sub_agent(Agent::new("left"))
        .sub_agent(Agent::new("right"));

    assert_eq!(root.sub_agents.len(), 2);
    assert!(root.sub_agent_named("left").is_some());
    assert!(root.sub_agent_named("middle").is_none());
}
