//! Scripted layout sessions: a TOML list of pointer, key and window steps
//! replayed against a headless workspace.

mod report;
mod runner;
mod types;


use std::path::Path;

use typoly_common::TypolyError;

pub use report::StepReport;
pub use runner::Runner;
pub use types::{Handle, Release, Scenario, Step};

impl Scenario {
    pub fn from_toml(content: &str) -> Result<Self, TypolyError> {
        toml::from_str(content).map_err(|e| TypolyError::Scenario(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, TypolyError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}
