//!
//! Builtin score address table.
//!
//! The table maps logical names (`system`, `governance`, ...) to canonical
//! address strings. It is built once, from configuration or defaults, and
//! handed to whoever needs it; nothing here is global.
//!

use derive_more::Deref;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SYSTEM_SCORE_NAME: &str = "system";
pub const SYSTEM_SCORE_ADDRESS: &str = "cx0000000000000000000000000000000000000000";

pub const GOVERNANCE_SCORE_NAME: &str = "governance";
pub const GOVERNANCE_SCORE_ADDRESS: &str = "cx0000000000000000000000000000000000000001";

///
/// BuiltinScores
/// Read-only name -> address lookup for builtin scores.
///

#[derive(Clone, Debug, Deref, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BuiltinScores(BTreeMap<String, String>);

impl BuiltinScores {
    #[must_use]
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// True if `address` is one of the builtin addresses.
    #[must_use]
    pub fn contains_address(&self, address: &str) -> bool {
        self.0.values().any(|a| a == address)
    }

    /// Look up the address registered under a logical name.
    #[must_use]
    pub fn address_of(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl Default for BuiltinScores {
    fn default() -> Self {
        Self::new([
            (SYSTEM_SCORE_NAME, SYSTEM_SCORE_ADDRESS),
            (GOVERNANCE_SCORE_NAME, GOVERNANCE_SCORE_ADDRESS),
        ])
    }
}

/// True if `address` is one of the addresses in `scores`.
#[must_use]
pub fn is_builtin_score(scores: &BuiltinScores, address: &str) -> bool {
    scores.contains_address(address)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_contains_system_and_governance() {
        let scores = BuiltinScores::default();

        assert!(is_builtin_score(&scores, SYSTEM_SCORE_ADDRESS));
        assert!(is_builtin_score(&scores, GOVERNANCE_SCORE_ADDRESS));
        assert_eq!(scores.len(), 2);
    }

    #[test]
    fn unrelated_addresses_are_not_builtin() {
        let scores = BuiltinScores::default();

        assert!(!is_builtin_score(
            &scores,
            "cx0000000000000000000000000000000000000002"
        ));
        assert!(!is_builtin_score(
            &scores,
            "hx0000000000000000000000000000000000000001"
        ));
        assert!(!is_builtin_score(&scores, ""));
    }

    #[test]
    fn names_are_not_addresses() {
        let scores = BuiltinScores::default();

        assert!(!is_builtin_score(&scores, "governance"));
        assert_eq!(
            scores.address_of(GOVERNANCE_SCORE_NAME),
            Some(GOVERNANCE_SCORE_ADDRESS)
        );
        assert_eq!(scores.address_of("treasury"), None);
    }

    #[test]
    fn injected_table_replaces_defaults() {
        let scores = BuiltinScores::new([("treasury", "cx00000000000000000000000000000000000000aa")]);

        assert!(is_builtin_score(
            &scores,
            "cx00000000000000000000000000000000000000aa"
        ));
        assert!(!is_builtin_score(&scores, SYSTEM_SCORE_ADDRESS));
        assert_eq!(scores.names().collect::<Vec<_>>(), vec!["treasury"]);
    }
}
