//! Application platforms the scaffolder knows how to containerise.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Application platform of a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Node,
    Python,
    Go,
    Dotnet,
    Java,
    Ruby,
    Other,
}

impl Platform {
    /// All platforms, in the order they are offered to the user.
    pub const ALL: [Platform; 7] = [
        Platform::Node,
        Platform::Python,
        Platform::Go,
        Platform::Dotnet,
        Platform::Java,
        Platform::Ruby,
        Platform::Other,
    ];

    /// Identifier used in config files and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Platform::Node => "node",
            Platform::Python => "python",
            Platform::Go => "go",
            Platform::Dotnet => "dotnet",
            Platform::Java => "java",
            Platform::Ruby => "ruby",
            Platform::Other => "other",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Node => "Node.js",
            Platform::Python => "Python",
            Platform::Go => "Go",
            Platform::Dotnet => ".NET",
            Platform::Java => "Java",
            Platform::Ruby => "Ruby",
            Platform::Other => "Other",
        }
    }

    /// Port the application usually listens on, if it serves anything.
    pub fn default_port(&self) -> Option<u16> {
        match self {
            Platform::Node => Some(3000),
            Platform::Python => Some(5000),
            Platform::Go => Some(8080),
            Platform::Dotnet => Some(5000),
            Platform::Java => Some(8080),
            Platform::Ruby => Some(3000),
            Platform::Other => None,
        }
    }

    /// Whether the port prompt applies to this platform.
    pub fn exposes_port(&self) -> bool {
        self.default_port().is_some()
    }

    /// Name of the embedded Dockerfile template.
    pub fn dockerfile_template(&self) -> String {
        format!("dockerfile/{}.Dockerfile", self.id())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "node" | "nodejs" | "node.js" => Ok(Platform::Node),
            "python" => Ok(Platform::Python),
            "go" | "golang" => Ok(Platform::Go),
            "dotnet" | ".net" | "csharp" => Ok(Platform::Dotnet),
            "java" => Ok(Platform::Java),
            "ruby" => Ok(Platform::Ruby),
            "other" => Ok(Platform::Other),
            other => Err(format!(
                "Unknown platform '{}'. Expected one of: node, python, go, dotnet, java, ruby, other",
                other
            )),
        }
    }
}
