//! Show schedule MCP service.
//!
//! Deployment #2 of the indexed catalog: show records, substring-match
//! animal lookup. Unlike the animal service, `get_shows_by_animal`
//! scans every show's title, description, and featured animal for the
//! query term instead of hitting the secondary index; a query for
//! "penguin" should find "Penguin Parade" even when no `animal` field
//! says so.

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use zcore::{Catalog, Show};

/// Parameters for [`ShowService::get_show_details`].
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetShowDetails {
    /// The show title (case-insensitive).
    pub name: String,
}

/// Parameters for [`ShowService::get_shows_by_animal`].
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetShowsByAnimal {
    /// Animal to look for in show titles, descriptions, and casts.
    pub animal_name: String,
}

/// MCP service over the show catalog.
#[derive(Clone)]
pub struct ShowService {
    catalog: Arc<Catalog<Show>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ShowService {
    /// Create a service over a loaded catalog.
    pub fn new(catalog: Arc<Catalog<Show>>) -> Self {
        Self {
            catalog,
            tool_router: Self::tool_router(),
        }
    }

    /// Point lookup; answers JSON `null` when the title is unknown.
    #[tool(description = "Retrieve details of a specific show by name.")]
    pub async fn get_show_details(
        &self,
        Parameters(GetShowDetails { name }): Parameters<GetShowDetails>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("tool 'get_show_details' called for '{name}'");
        Ok(CallToolResult::success(vec![Content::json(
            self.catalog.get(&name),
        )?]))
    }

    /// Substring scan over titles, descriptions, and featured animals.
    #[tool(description = "Filter shows featuring or mentioning a given animal.")]
    pub async fn get_shows_by_animal(
        &self,
        Parameters(GetShowsByAnimal { animal_name }): Parameters<GetShowsByAnimal>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("tool 'get_shows_by_animal' called for '{animal_name}'");
        Ok(CallToolResult::success(vec![Content::json(
            self.catalog.search(&animal_name),
        )?]))
    }

    /// Sorted unique show titles.
    #[tool(description = "Retrieve a unique list of all show names.")]
    pub async fn get_all_show_names(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("tool 'get_all_show_names' called");
        Ok(CallToolResult::success(vec![Content::json(
            self.catalog.names(),
        )?]))
    }

    /// Sorted unique featured-animal labels.
    #[tool(description = "Retrieve a unique list of animals featured in shows.")]
    pub async fn get_featured_animals(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("tool 'get_featured_animals' called");
        Ok(CallToolResult::success(vec![Content::json(
            self.catalog.categories(),
        )?]))
    }
}

#[tool_handler]
impl ServerHandler for ShowService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Zoo show data server. Look up shows by title, find shows \
                 featuring an animal, or list the full schedule."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
