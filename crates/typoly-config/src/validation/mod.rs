//! Full configuration validation.
//!
//! Validates numeric ranges and keybind uniqueness. Each domain has its
//! own submodule; this orchestrator calls them all and collects errors
//! into a single `ConfigError`.

mod ghost;
mod helpers;
mod layout;


use crate::keybinds;
use crate::schema::TypolyConfig;
use typoly_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TypolyConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }

    layout::validate_layout(&mut errors, config);
    ghost::validate_ghost(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
