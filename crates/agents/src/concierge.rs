//! The concierge agent tree: greeting, routing, and animal research.
//!
//! The root concierge routes each request to either the animal
//! knowledge pipeline or the show agent. The knowledge pipeline is a
//! two-step sequence: a researcher gathers data from the zoo catalog
//! and web search, then a formatter turns the findings into a
//! friendly answer.

use zcore::Agent;

/// Researcher instruction: zoo data first, then web search.
const RESEARCHER_INSTRUCTION: &str = "\
You are a helpful research assistant. Your goal is to fully answer the user's PROMPT.
You have access to two tools:
1. A tool for getting specific data about animals AT OUR ZOO (names, ages, locations).
2. A web search tool for general knowledge (facts, lifespan, diet, habitat).

First, analyze the user's PROMPT.
- If the prompt can be answered by only one tool, use that tool.
- If the prompt is complex and needs both the zoo's database AND web search,
  use them sequentially: query the zoo's database first, THEN search the web.
  Do NOT call both tools at the same time.
- Synthesize the results from the tool(s) you use into preliminary data outputs.";

/// Formatter instruction: present research data conversationally.
const FORMATTER_INSTRUCTION: &str = "\
You are the friendly voice of the Zoo Tour Guide. Take the RESEARCH_DATA
and present it to the user in a complete and helpful answer.

- First, present the specific information from the zoo (names, ages, locations).
- Then, add the interesting general facts from the research.
- If some information is missing, just present the information you have.
- Be conversational and engaging.

RESEARCH_DATA:
{{ research_data }}";

/// Root routing instruction.
const CONCIERGE_INSTRUCTION: &str = "\
You are the zoo concierge. Analyze the user's input and forward it to the
appropriate agent among the following:

1. If the user asks for 'knowledge' such as animal ecology, information,
   or location, call 'zoo_concierge'.
2. If the user asks about animal shows or show reservations, call 'show_agent'.
3. If the user simply greets or is ambiguous, greet them kindly and ask how
   you can help.";

/// The researcher: zoo catalog tools plus web search.
pub fn researcher() -> Agent {
    Agent::new("comprehensive_researcher")
        .description("Gathers animal data from the zoo catalog and general knowledge from web search.")
        .instruction(RESEARCHER_INSTRUCTION)
        .tool("get_animal_details")
        .tool("get_animals_by_species")
        .tool("get_all_unique_animals")
        .tool("get_all_species")
        .tool("web_search")
        .output_key("research_data")
}

/// The formatter: no tools, rewrites `research_data` for the user.
pub fn response_formatter() -> Agent {
    Agent::new("response_formatter")
        .description("Synthesizes all information into a friendly, readable response.")
        .instruction(FORMATTER_INSTRUCTION)
}

/// The animal knowledge pipeline: research, then format.
pub fn zoo_concierge() -> Agent {
    Agent::new("zoo_concierge")
        .description("Handles questions about animal information and knowledge.")
        .sub_agent(researcher())
        .sub_agent(response_formatter())
}

/// The root concierge: greets and routes to the expert agents.
pub fn concierge() -> Agent {
    Agent::new("greeter")
        .description("The main guide for the zoo. Calls the appropriate expert based on the user's intent.")
        .instruction(CONCIERGE_INSTRUCTION)
        .tool("add_prompt_to_state")
        .sub_agent(zoo_concierge())
        .sub_agent(crate::show_agent())
}
