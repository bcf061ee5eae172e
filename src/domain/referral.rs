//! Per-agent referral codes supplied by the caller.

use std::collections::HashMap;

use super::Agent;

/// Mapping from agent to affiliate code.
///
/// Consulted at encode time only when no explicit code is passed. Empty codes
/// are never stored, so a lookup hit always yields a usable value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Referrals {
    codes: HashMap<Agent, String>,
}

impl Referrals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the trimmed code for `agent`. An empty or blank code removes the
    /// entry.
    pub fn set(&mut self, agent: Agent, code: impl Into<String>) {
        let code = code.into();
        let code = code.trim();
        if code.is_empty() {
            self.codes.remove(&agent);
        } else {
            self.codes.insert(agent, code.to_string());
        }
    }

    pub fn with(mut self, agent: Agent, code: impl Into<String>) -> Self {
        self.set(agent, code);
        self
    }

    pub fn get(&self, agent: Agent) -> Option<&str> {
        self.codes.get(&agent).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates entries ordered by agent tag.
    pub fn iter(&self) -> impl Iterator<Item = (Agent, &str)> {
        let mut entries: Vec<_> = self
            .codes
            .iter()
            .map(|(agent, code)| (*agent, code.as_str()))
            .collect();
        entries.sort_by_key(|(agent, _)| *agent);
        entries.into_iter()
    }
}
