//! Textual domain parameters.
//!
//! Parameters are whitespace-separated `key value` pairs, the same shape as
//! PBC parameter files:
//!
//! ```text
//! type bls12_381
//! q 4002409555...
//! r 5243587517...
//! ```

use crate::error::{PairingError, PairingResult};
use std::collections::BTreeMap;

/// Parsed domain parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingParams {
    pairing_type: String,
    values: BTreeMap<String, String>,
}

impl PairingParams {
    /// Parses a parameter description.
    ///
    /// # Errors
    ///
    /// Fails on an odd number of tokens, a repeated key, or a missing `type`.
    pub fn parse(text: &str) -> PairingResult<Self> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(PairingError::MalformedParams("empty description".to_string()));
        }
        if tokens.len() % 2 != 0 {
            return Err(PairingError::MalformedParams(format!(
                "key {:?} has no value",
                tokens[tokens.len() - 1]
            )));
        }

        let mut values = BTreeMap::new();
        for pair in tokens.chunks_exact(2) {
            let (key, value) = (pair[0], pair[1]);
            if values.insert(key.to_string(), value.to_string()).is_some() {
                return Err(PairingError::MalformedParams(format!(
                    "duplicate key {key:?}"
                )));
            }
        }

        let pairing_type = values
            .remove("type")
            .ok_or(PairingError::MissingParam("type"))?;

        Ok(Self {
            pairing_type,
            values,
        })
    }

    /// The `type` parameter.
    pub fn pairing_type(&self) -> &str {
        &self.pairing_type
    }

    /// Looks up any other parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}
