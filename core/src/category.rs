//! Component category tags

use crate::errors::CoreError;
use serde::{Deserialize, Serialize};

/// What kind of component a base belongs to.
///
/// Used only to label diagnostics. `Llm` is the designated default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum Category {
    Agent,
    Bundler,
    Deployer,
    Embeddings,
    #[default]
    Llm,
    #[serde(rename = "MCP_SERVER")]
    Mcp,
    Memory,
    Storage,
    Tts,
    Vector,
    Voice,
    Workflow,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 12] = [
        Category::Agent,
        Category::Bundler,
        Category::Deployer,
        Category::Embeddings,
        Category::Llm,
        Category::Mcp,
        Category::Memory,
        Category::Storage,
        Category::Tts,
        Category::Vector,
        Category::Voice,
        Category::Workflow,
    ];

    /// Upper-case label used in log lines and configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Agent => "AGENT",
            Category::Bundler => "BUNDLER",
            Category::Deployer => "DEPLOYER",
            Category::Embeddings => "EMBEDDINGS",
            Category::Llm => "LLM",
            Category::Mcp => "MCP_SERVER",
            Category::Memory => "MEMORY",
            Category::Storage => "STORAGE",
            Category::Tts => "TTS",
            Category::Vector => "VECTOR",
            Category::Voice => "VOICE",
            Category::Workflow => "WORKFLOW",
        }
    }

    /// Whether this is the default (`Llm`) category
    pub fn is_default(&self) -> bool {
        *self == Category::default()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        if upper == "MCP" {
            return Ok(Category::Mcp);
        }
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == upper)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
