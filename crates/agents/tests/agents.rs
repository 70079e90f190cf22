//! Tests for the concierge agent tree and booking tool.

use zootour_agents::{concierge, researcher, reserve_show, show_agent, zoo_concierge};

#[test]
fn concierge_routes_to_both_experts() {
    let root = concierge();
    assert_eq!(root.name, "greeter");
    assert!(root.sub_agent_named("zoo_concierge").is_some());
    assert!(root.sub_agent_named("show_agent").is_some());
    // The routing instruction names both experts.
    assert!(root.instruction.contains("zoo_concierge"));
    assert!(root.instruction.contains("show_agent"));
}

#[test]
fn knowledge_pipeline_is_research_then_format() {
    let pipeline = zoo_concierge();
    let steps: Vec<_> = pipeline.sub_agents.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(steps, ["comprehensive_researcher", "response_formatter"]);

    // The formatter consumes what the researcher stores.
    let key = pipeline.sub_agents[0].output_key.as_deref().unwrap();
    assert_eq!(key, "research_data");
    assert!(pipeline.sub_agents[1].instruction.contains("research_data"));
}

#[test]
fn researcher_carries_catalog_and_search_tools() {
    let agent = researcher();
    assert!(agent.tools.contains(&"get_animal_details".to_string()));
    assert!(agent.tools.contains(&"get_animals_by_species".to_string()));
    assert!(agent.tools.contains(&"web_search".to_string()));
}

#[test]
fn show_agent_can_look_up_and_book() {
    let agent = show_agent();
    assert!(agent.tools.contains(&"get_shows_by_animal".to_string()));
    assert!(agent.tools.contains(&"get_show_details".to_string()));
    assert!(agent.tools.contains(&"reserve_show".to_string()));
    assert!(agent.sub_agents.is_empty());
}

#[test]
fn reserve_show_confirms() {
    let confirmation = reserve_show("Penguin Parade", 3);
    assert_eq!(
        confirmation,
        "Reservation confirmed: 3 tickets for 'Penguin Parade'."
    );
}
