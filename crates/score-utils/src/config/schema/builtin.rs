use super::{ConfigSchemaError, Validate};
use crate::{builtin::BuiltinScores, hex::is_lowercase_hex_string};
use std::collections::BTreeMap;

pub const SCORE_ADDRESS_PREFIX: &str = "cx";
pub const SCORE_ADDRESS_BODY_LEN: usize = 40;

fn validate_score_address(name: &str, address: &str) -> Result<(), ConfigSchemaError> {
    let body = address.strip_prefix(SCORE_ADDRESS_PREFIX).ok_or_else(|| {
        ConfigSchemaError::ValidationError(format!(
            "builtin_scores.{name}: '{address}' must start with '{SCORE_ADDRESS_PREFIX}'"
        ))
    })?;

    if body.len() != SCORE_ADDRESS_BODY_LEN || !is_lowercase_hex_string(body) {
        return Err(ConfigSchemaError::ValidationError(format!(
            "builtin_scores.{name}: '{address}' must be followed by {SCORE_ADDRESS_BODY_LEN} lowercase hex characters"
        )));
    }

    Ok(())
}

impl Validate for BuiltinScores {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        if self.is_empty() {
            return Err(ConfigSchemaError::ValidationError(
                "builtin_scores must not be empty".to_string(),
            ));
        }

        let mut seen: BTreeMap<&str, &str> = BTreeMap::new();
        for (name, address) in self.iter() {
            if name.is_empty() {
                return Err(ConfigSchemaError::ValidationError(
                    "builtin_scores: names must not be empty".to_string(),
                ));
            }

            validate_score_address(name, address)?;

            if let Some(other) = seen.insert(address.as_str(), name.as_str()) {
                return Err(ConfigSchemaError::ValidationError(format!(
                    "builtin_scores: '{address}' is registered as both '{other}' and '{name}'"
                )));
            }
        }

        Ok(())
    }
}

///
/// TESTS
///
