//! Static registries of marketplaces and agents.
//!
//! Both tables are immutable for the process lifetime and safe to read from
//! any number of threads.

pub mod agents;
pub mod marketplaces;

pub use agents::{AGENTS, AgentSpec, agent_spec};
pub use marketplaces::{MARKETPLACES, MarketplaceSpec, marketplace_spec};
