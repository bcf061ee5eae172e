//! Agent tags.
//!
//! An agent is a third-party buying service that wraps a marketplace listing
//! in its own URL. Host patterns, parameter names and encoding rules live in
//! [`crate::registry::agents`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Agent {
    Acbuy,
    Allchinabuy,
    Basetao,
    Cnfans,
    Cssbuy,
    Eastmallbuy,
    Ezbuycn,
    Hagobuy,
    Hipobuy,
    Hoobuy,
    Hubbuycn,
    Itaobuy,
    Joyabuy,
    Kakobuy,
    Kameymall,
    Loongbuy,
    Lovegobuy,
    Mulebuy,
    Oopbuy,
    Orientdig,
    Pandabuy,
    Sugargoo,
    Superbuy,
    Wegobuy,
}

impl Agent {
    pub const ALL: [Agent; 24] = [
        Agent::Acbuy,
        Agent::Allchinabuy,
        Agent::Basetao,
        Agent::Cnfans,
        Agent::Cssbuy,
        Agent::Eastmallbuy,
        Agent::Ezbuycn,
        Agent::Hagobuy,
        Agent::Hipobuy,
        Agent::Hoobuy,
        Agent::Hubbuycn,
        Agent::Itaobuy,
        Agent::Joyabuy,
        Agent::Kakobuy,
        Agent::Kameymall,
        Agent::Loongbuy,
        Agent::Lovegobuy,
        Agent::Mulebuy,
        Agent::Oopbuy,
        Agent::Orientdig,
        Agent::Pandabuy,
        Agent::Sugargoo,
        Agent::Superbuy,
        Agent::Wegobuy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Acbuy => "acbuy",
            Self::Allchinabuy => "allchinabuy",
            Self::Basetao => "basetao",
            Self::Cnfans => "cnfans",
            Self::Cssbuy => "cssbuy",
            Self::Eastmallbuy => "eastmallbuy",
            Self::Ezbuycn => "ezbuycn",
            Self::Hagobuy => "hagobuy",
            Self::Hipobuy => "hipobuy",
            Self::Hoobuy => "hoobuy",
            Self::Hubbuycn => "hubbuycn",
            Self::Itaobuy => "itaobuy",
            Self::Joyabuy => "joyabuy",
            Self::Kakobuy => "kakobuy",
            Self::Kameymall => "kameymall",
            Self::Loongbuy => "loongbuy",
            Self::Lovegobuy => "lovegobuy",
            Self::Mulebuy => "mulebuy",
            Self::Oopbuy => "oopbuy",
            Self::Orientdig => "orientdig",
            Self::Pandabuy => "pandabuy",
            Self::Sugargoo => "sugargoo",
            Self::Superbuy => "superbuy",
            Self::Wegobuy => "wegobuy",
        }
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown agent '{0}'")]
pub struct UnknownAgent(pub String);

impl FromStr for Agent {
    type Err = UnknownAgent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|agent| agent.as_str() == tag)
            .ok_or_else(|| UnknownAgent(s.to_string()))
    }
}
