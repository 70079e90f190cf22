//! Animal catalog MCP service.
//!
//! Deployment #1 of the indexed catalog: animal records, exact-match
//! species lookup through the secondary index (covering both the
//! English and Korean labels).

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use zcore::{Animal, Catalog};

/// Parameters for [`AnimalService::get_animal_details`].
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetAnimalDetails {
    /// The animal's given name (case-insensitive).
    pub name: String,
}

/// Parameters for [`AnimalService::get_animals_by_species`].
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetAnimalsBySpecies {
    /// Species label, English or Korean (case-insensitive).
    pub species: String,
}

/// MCP service over the animal catalog.
///
/// The catalog is read-only after startup, so one `Arc` is shared
/// across all sessions without locking.
#[derive(Clone)]
pub struct AnimalService {
    catalog: Arc<Catalog<Animal>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl AnimalService {
    /// Create a service over a loaded catalog.
    pub fn new(catalog: Arc<Catalog<Animal>>) -> Self {
        Self {
            catalog,
            tool_router: Self::tool_router(),
        }
    }

    /// Point lookup; answers JSON `null` when the name is unknown.
    #[tool(description = "Retrieve details of a specific animal by name.")]
    pub async fn get_animal_details(
        &self,
        Parameters(GetAnimalDetails { name }): Parameters<GetAnimalDetails>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("tool 'get_animal_details' called for '{name}'");
        Ok(CallToolResult::success(vec![Content::json(
            self.catalog.get(&name),
        )?]))
    }

    /// Exact species match via the secondary index; either label works.
    #[tool(description = "Retrieve all animals of a specific species.")]
    pub async fn get_animals_by_species(
        &self,
        Parameters(GetAnimalsBySpecies { species }): Parameters<GetAnimalsBySpecies>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("tool 'get_animals_by_species' called for '{species}'");
        Ok(CallToolResult::success(vec![Content::json(
            self.catalog.by_category(&species),
        )?]))
    }

    /// Sorted unique animal names.
    #[tool(description = "Retrieve a unique list of all animal names in the zoo.")]
    pub async fn get_all_unique_animals(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("tool 'get_all_unique_animals' called");
        Ok(CallToolResult::success(vec![Content::json(
            self.catalog.names(),
        )?]))
    }

    /// Sorted unique species labels, both languages.
    #[tool(description = "Retrieve a unique list of all species labels in the zoo.")]
    pub async fn get_all_species(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("tool 'get_all_species' called");
        Ok(CallToolResult::success(vec![Content::json(
            self.catalog.categories(),
        )?]))
    }
}

#[tool_handler]
impl ServerHandler for AnimalService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Zoo animal data server. Look up animals by name or species, \
                 or list every animal and species at the zoo."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
