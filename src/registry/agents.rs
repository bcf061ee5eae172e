//! Static agent table.
//!
//! One [`AgentSpec`] per [`Agent`]: where its links live, which marketplaces
//! it can wrap, how its parameters are named, and the functions that encode
//! and decode its links. This table is the contract third-party links depend
//! on; changing a host or a parameter name breaks real links.

use crate::codec::decode::{DecodeFn, agents as decoders};
use crate::codec::encode::{EncodeFn, agents as encoders};
use crate::domain::Marketplace::{Ali1688, Taobao, Tmall, Weidian};
use crate::domain::{Agent, Marketplace};

const ALL_MARKETPLACES: &[Marketplace] = &[Taobao, Tmall, Weidian, Ali1688];
const NO_TMALL: &[Marketplace] = &[Taobao, Weidian, Ali1688];
/// Tmall listings are wrapped as Taobao listings by agents whose
/// structured links have no Tmall code. Decoding yields Taobao.
const TMALL_AS_TAOBAO: &[(Marketplace, Marketplace)] = &[(Tmall, Taobao)];

/// Static description of an agent.
#[derive(Debug)]
pub struct AgentSpec {
    pub agent: Agent,
    /// Origin every encoded link starts with.
    pub base: &'static str,
    /// Registrable hosts recognized as this agent; subdomains match too.
    pub hosts: &'static [&'static str],
    pub marketplaces: &'static [Marketplace],
    /// Lossy marketplace substitutions applied before encoding.
    pub aliases: &'static [(Marketplace, Marketplace)],
    pub referral_param: Option<&'static str>,
    pub tracking_param: Option<&'static str>,
    pub encode: EncodeFn,
    /// Bespoke decoder; agents without one rely on the generic fallback.
    pub decode: Option<DecodeFn>,
}

impl AgentSpec {
    pub fn supports(&self, marketplace: Marketplace) -> bool {
        self.marketplaces.contains(&marketplace)
    }

    /// Marketplace actually encoded for `marketplace` after aliasing.
    pub fn resolve(&self, marketplace: Marketplace) -> Marketplace {
        self.aliases
            .iter()
            .find(|(from, _)| *from == marketplace)
            .map(|(_, to)| *to)
            .unwrap_or(marketplace)
    }
}

pub static AGENTS: &[AgentSpec] = &[
    AgentSpec {
        agent: Agent::Acbuy,
        base: "https://www.acbuy.com",
        hosts: &["acbuy.com"],
        marketplaces: NO_TMALL,
        aliases: &[],
        referral_param: Some("u"),
        tracking_param: None,
        encode: encoders::acbuy,
        decode: Some(decoders::acbuy),
    },
    AgentSpec {
        agent: Agent::Allchinabuy,
        base: "https://www.allchinabuy.com",
        hosts: &["allchinabuy.com"],
        marketplaces: ALL_MARKETPLACES,
        aliases: &[],
        referral_param: Some("partnercode"),
        tracking_param: None,
        encode: encoders::superbuy_family,
        decode: Some(decoders::superbuy_family),
    },
    AgentSpec {
        agent: Agent::Basetao,
        base: "https://www.basetao.com",
        hosts: &["basetao.com"],
        marketplaces: ALL_MARKETPLACES,
        aliases: TMALL_AS_TAOBAO,
        referral_param: None,
        tracking_param: None,
        encode: encoders::basetao,
        decode: Some(decoders::basetao),
    },
    AgentSpec {
        agent: Agent::Cnfans,
        base: "https://cnfans.com",
        hosts: &["cnfans.com"],
        marketplaces: ALL_MARKETPLACES,
        aliases: TMALL_AS_TAOBAO,
        referral_param: Some("ref"),
        tracking_param: None,
        encode: encoders::cnfans_family,
        decode: Some(decoders::cnfans_family),
    },
    AgentSpec {
        agent: Agent::Cssbuy,
        base: "https://www.cssbuy.com",
        hosts: &["cssbuy.com"],
        marketplaces: NO_TMALL,
        aliases: &[],
        referral_param: Some("promotionCode"),
        tracking_param: None,
        encode: encoders::cssbuy,
        decode: Some(decoders::cssbuy),
    },
    AgentSpec {
        agent: Agent::Eastmallbuy,
        base: "https://eastmallbuy.com",
        hosts: &["eastmallbuy.com"],
        marketplaces: ALL_MARKETPLACES,
        aliases: &[],
        referral_param: Some("inviteCode"),
        tracking_param: None,
        encode: encoders::eastmallbuy,
        decode: Some(decoders::url_param),
    },
    AgentSpec {
        agent: Agent::Ezbuycn,
        base: "https://ezbuycn.com",
        hosts: &["ezbuycn.com"],
        marketplaces: ALL_MARKETPLACES,
        aliases: &[],
        referral_param: Some("ref"),
        tracking_param: None,
        encode: encoders::ezbuycn,
        decode: Some(decoders::ezbuycn),
    },
    AgentSpec {
        agent: Agent::Hagobuy,
        base: "https://www.hagobuy.com",
        hosts: &["hagobuy.com"],
        marketplaces: ALL_MARKETPLACES,
        aliases: &[],
        referral_param: Some("affcode"),
        tracking_param: None,
        encode: encoders::item_details,
        decode: Some(decoders::url_param),
    },
    AgentSpec {
        agent: Agent::Hipobuy,
        base: "https://www.hipobuy.com",
        hosts: &["hipobuy.com"],
        marketplaces: NO_TMALL,
        aliases: &[],
        referral_param: Some("inviteCode"),
        tracking_param: Some("ra"),
        encode: encoders::hipobuy,
        decode: Some(decoders::hipobuy),
    },
    AgentSpec {
        agent: Agent::Hoobuy,
        base: "https://hoobuy.com",
        hosts: &["hoobuy.com"],
        marketplaces: NO_TMALL,
        aliases: &[],
        referral_param: Some("inviteCode"),
        tracking_param: None,
        encode: encoders::hoobuy,
        decode: Some(decoders::hoobuy),
    },
    AgentSpec {
        agent: Agent::Hubbuycn,
        base: "https://www.hubbuycn.com",
        hosts: &["hubbuycn.com"],
        marketplaces: ALL_MARKETPLACES,
        aliases: &[],
        referral_param: Some("invitation_code"),
        tracking_param: None,
        encode: encoders::hubbuycn,
        decode: Some(decoders::url_param),
    },
    AgentSpec {
        agent: Agent::Itaobuy,
        base: "https://www.itaobuy.com",
        hosts: &["itaobuy.com"],
        marketplaces: ALL_MARKETPLACES,
        aliases: &[],
        referral_param: Some("inviteCode"),
        tracking_param: None,
        encode: encoders::itaobuy,
        decode: None,
    },
    AgentSpec {
        agent: Agent::Joyabuy,
        base: "https://joyabuy.com",
        hosts: &["joyabuy.com"],
        marketplaces: ALL_MARKETPLACES,
        aliases: TMALL_AS_TAOBAO,
        referral_param: Some("ref"),
        tracking_param: None,
        encode: encoders::cnfans_family,
        decode: Some(decoders::cnfans_family),
    },
    AgentSpec {
        agent: Agent::Kakobuy,
        base: "https://www.kakobuy.com",
        hosts: &["kakobuy.com"],
        marketplaces: ALL_MARKETPLACES,
        aliases: &[],
        referral_param: Some("affcode"),
        tracking_param: None,
        encode: encoders::item_details,
        decode: Some(decoders::url_param),
    },
    AgentSpec {
        agent: Agent::Kameymall,
        base: "https://www.kameymall.com",
        hosts: &["kameymall.com"],
        marketplaces: ALL_MARKETPLACES,
        aliases: &[],
        referral_param: Some("code"),
        tracking_param: None,
        encode: encoders::kameymall,
        decode: Some(decoders::kameymall),
    },
    AgentSpec {
        agent: Agent::Loongbuy,
        base: "https://www.loongbuy.com",
        hosts: &["loongbuy.com"],
        marketplaces: ALL_MARKETPLACES,
        aliases: &[],
        referral_param: Some("invite_code"),
        tracking_param: None,
        encode: encoders::loongbuy,
        decode: Some(decoders::url_param),
    },
    AgentSpec {
        agent: Agent::Lovegobuy,
        base: "https://www.lovegobuy.com",
        hosts: &["lovegobuy.com"],
        marketplaces: ALL_MARKETPLACES,
        aliases: TMALL_AS_TAOBAO,
        referral_param: Some("invite_code"),
        tracking_param: None,
        encode: encoders::lovegobuy,
        decode: Some(decoders::cnfans_family),
    },
    AgentSpec {
        agent: Agent::Mulebuy,
        base: "https://mulebuy.com",
        hosts: &["mulebuy.com"],
        marketplaces: ALL_MARKETPLACES,
        aliases: TMALL_AS_TAOBAO,
        referral_param: Some("ref"),
        tracking_param: None,
        encode: encoders::cnfans_family,
        decode: Some(decoders::cnfans_family),
    },
    AgentSpec {
        agent: Agent::Oopbuy,
        base: "https://oopbuy.com",
        hosts: &["oopbuy.com"],
        marketplaces: NO_TMALL,
        aliases: &[],
        referral_param: Some("inviteCode"),
        tracking_param: None,
        encode: encoders::oopbuy,
        decode: Some(decoders::oopbuy),
    },
    AgentSpec {
        agent: Agent::Orientdig,
        base: "https://orientdig.com",
        hosts: &["orientdig.com"],
        marketplaces: ALL_MARKETPLACES,
        aliases: TMALL_AS_TAOBAO,
        referral_param: Some("ref"),
        tracking_param: None,
        encode: encoders::cnfans_family,
        decode: Some(decoders::cnfans_family),
    },
    AgentSpec {
        agent: Agent::Pandabuy,
        base: "https://www.pandabuy.com",
        hosts: &["pandabuy.com"],
        marketplaces: ALL_MARKETPLACES,
        aliases: &[],
        referral_param: Some("inviteCode"),
        tracking_param: Some("ra"),
        encode: encoders::pandabuy,
        decode: Some(decoders::pandabuy),
    },
    AgentSpec {
        agent: Agent::Sugargoo,
        base: "https://www.sugargoo.com",
        hosts: &["sugargoo.com"],
        marketplaces: ALL_MARKETPLACES,
        aliases: &[],
        referral_param: Some("memberId"),
        tracking_param: None,
        encode: encoders::sugargoo,
        decode: Some(decoders::sugargoo),
    },
    AgentSpec {
        agent: Agent::Superbuy,
        base: "https://www.superbuy.com",
        hosts: &["superbuy.com"],
        marketplaces: ALL_MARKETPLACES,
        aliases: &[],
        referral_param: Some("partnercode"),
        tracking_param: None,
        encode: encoders::superbuy_family,
        decode: Some(decoders::superbuy_family),
    },
    AgentSpec {
        agent: Agent::Wegobuy,
        base: "https://www.wegobuy.com",
        hosts: &["wegobuy.com"],
        marketplaces: ALL_MARKETPLACES,
        aliases: &[],
        referral_param: Some("partnercode"),
        tracking_param: None,
        encode: encoders::superbuy_family,
        decode: Some(decoders::superbuy_family),
    },
];

/// Returns the registry entry for `agent`.
pub fn agent_spec(agent: Agent) -> &'static AgentSpec {
    AGENTS
        .iter()
        .find(|spec| spec.agent == agent)
        .unwrap_or_else(|| unreachable!("agent {agent} missing from registry"))
}
