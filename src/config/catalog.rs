//! The tool catalog lookup tables.

use std::collections::HashMap;

use crate::error::{ConfigError, EngineResult};
use crate::models::{Tool, ToolType};

/// Read-only lookup tables for tools and tool types.
///
/// Constructed once from configuration and never mutated. Construction
/// verifies that every tool references a defined tool type, so a dangling
/// reference is caught at load time instead of at checkout.
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    tools: HashMap<String, Tool>,
    tool_types: HashMap<String, ToolType>,
}

impl ToolCatalog {
    /// Builds a catalog, validating tool-type references.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownToolType`] for the first tool whose
    /// type name has no definition.
    pub fn new(tools: Vec<Tool>, tool_types: Vec<ToolType>) -> EngineResult<Self> {
        let tool_types: HashMap<String, ToolType> = tool_types
            .into_iter()
            .map(|t| (t.name.clone(), t))
            .collect();

        let mut tool_map = HashMap::new();
        for tool in tools {
            if !tool_types.contains_key(&tool.type_name) {
                return Err(ConfigError::UnknownToolType {
                    tool_code: tool.code,
                    type_name: tool.type_name,
                }
                .into());
            }
            tool_map.insert(tool.code.clone(), tool);
        }

        Ok(Self {
            tools: tool_map,
            tool_types,
        })
    }

    /// Builds a catalog without reference validation, for tests that need
    /// deliberately broken data.
    #[cfg(test)]
    pub(crate) fn from_parts(tools: Vec<Tool>, tool_types: Vec<ToolType>) -> Self {
        Self {
            tools: tools.into_iter().map(|t| (t.code.clone(), t)).collect(),
            tool_types: tool_types
                .into_iter()
                .map(|t| (t.name.clone(), t))
                .collect(),
        }
    }

    /// Looks up a tool by its code.
    pub fn tool(&self, code: &str) -> Option<&Tool> {
        self.tools.get(code)
    }

    /// Looks up a tool type by its name.
    pub fn tool_type(&self, name: &str) -> Option<&ToolType> {
        self.tool_types.get(name)
    }

    /// Returns the number of tools in the catalog.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }
}
