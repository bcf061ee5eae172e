mod common;

use agent_links::prelude::*;
use agent_links::registry::agent_spec;
use std::sync::Arc;

const HIPOBUY_LINK: &str =
    "https://www.hipobuy.com/shopdetail?ra=1&t=wd&id=1625671124&inviteCode=myC0d3";

#[test]
fn test_hipobuy_weidian_scenario() {
    let transcoder = Transcoder::new();
    let item = ItemRef::new(Marketplace::Weidian, "1625671124");

    let link = transcoder
        .to_agent(LinkSource::Item(&item), Agent::Hipobuy, Some("myC0d3"), None)
        .unwrap();
    assert_eq!(link.as_str(), HIPOBUY_LINK);

    assert_eq!(
        transcoder.to_raw(HIPOBUY_LINK).unwrap().as_str(),
        "https://weidian.com/item.html?itemID=1625671124"
    );
    assert_eq!(transcoder.to_item(HIPOBUY_LINK).unwrap(), item);
}

#[test]
fn test_referral_pass_through_and_absence() {
    let transcoder = Transcoder::new();
    let item = common::sample_item(Marketplace::Taobao);

    for agent in Agent::ALL {
        let Some(param) = agent_spec(agent).referral_param else {
            continue;
        };

        let with = transcoder
            .to_agent(LinkSource::Item(&item), agent, Some("C0DE"), None)
            .unwrap();
        assert_eq!(common::param_value(&with, param).as_deref(), Some("C0DE"), "{with}");
        assert_eq!(common::param_names(&with).last().map(String::as_str), Some(param));

        let without = transcoder
            .to_agent(LinkSource::Item(&item), agent, None, None)
            .unwrap();
        assert!(
            !common::param_names(&without).iter().any(|name| name == param),
            "{without}"
        );
    }
}

#[test]
fn test_configured_referrals_apply_per_agent() {
    let transcoder = Transcoder::new().with_referrals(
        Referrals::new()
            .with(Agent::Pandabuy, "PANDA")
            .with(Agent::Sugargoo, "SUGAR"),
    );
    let item = common::sample_item(Marketplace::Weidian);

    let link = transcoder
        .to_agent(LinkSource::Item(&item), Agent::Sugargoo, None, None)
        .unwrap();
    assert_eq!(common::param_value(&link, "memberId").as_deref(), Some("SUGAR"));

    let link = transcoder
        .to_agent(LinkSource::Item(&item), Agent::Pandabuy, None, None)
        .unwrap();
    assert_eq!(common::param_value(&link, "inviteCode").as_deref(), Some("PANDA"));
}

#[test]
fn test_convert_between_agents() {
    let transcoder = Transcoder::new();

    let link = transcoder
        .to_agent(
            LinkSource::Link("https://cnfans.com/product/?shop_type=weidian&id=1625671124&ref=1"),
            Agent::Hipobuy,
            Some("myC0d3"),
            None,
        )
        .unwrap();
    assert_eq!(link.as_str(), HIPOBUY_LINK);
}

#[test]
fn test_convert_from_marketplace_link() {
    let transcoder = Transcoder::new();

    let link = transcoder
        .to_agent(
            LinkSource::Link("https://world.taobao.com/item/675330231400.htm?id=675330231400&spm=a"),
            Agent::Cnfans,
            None,
            None,
        )
        .unwrap();
    assert_eq!(
        link.as_str(),
        "https://cnfans.com/product/?shop_type=taobao&id=675330231400"
    );
}

#[test]
fn test_itaobuy_uses_fallback() {
    let transcoder = Transcoder::new();
    let raw = "https://detail.1688.com/offer/610947572360.html";
    let link = format!(
        "https://www.itaobuy.com/product-detail?url={}",
        common::encode_param(raw)
    );

    assert_eq!(transcoder.to_raw(&link).unwrap().as_str(), raw);
}

#[test]
fn test_unknown_host_uses_fallback() {
    let transcoder = Transcoder::new();
    let link = format!(
        "https://links.example.net/go?url={}",
        common::encode_param("https://item.taobao.com/item.htm?id=675330231400")
    );

    assert_eq!(
        transcoder.to_item(&link).unwrap(),
        common::sample_item(Marketplace::Taobao)
    );
}

#[test]
fn test_unknown_host_without_embedded_link() {
    let err = Transcoder::new()
        .to_raw("https://links.example.net/go?id=1")
        .unwrap_err();
    assert_eq!(
        err,
        TranscodeError::RawLinkNotFound {
            url: "https://links.example.net/go?id=1".to_string()
        }
    );
}

#[test]
fn test_kameymall_purchase_history_is_undecodable() {
    let err = Transcoder::new()
        .to_raw("https://www.kameymall.com/purchases/9876543210")
        .unwrap_err();
    assert!(matches!(err, TranscodeError::UndecodableLinkShape { .. }));
}

#[test]
fn test_pandabuy_cipher_token_reaches_decryptor() {
    let link = "https://www.pandabuy.com/product?ra=1&url=PJ1a%252Bb%252Fc%253D";

    let err = Transcoder::new().to_raw(link).unwrap_err();
    assert!(matches!(err, TranscodeError::RawLinkNotFound { .. }));

    let transcoder = Transcoder::new().with_decryptor(Arc::new(common::FixedDecryptor(
        "https://weidian.com/item.html?itemID=1625671124".to_string(),
    )));
    assert_eq!(
        transcoder.to_item(link).unwrap(),
        common::sample_item(Marketplace::Weidian)
    );
}

#[test]
fn test_marketplace_link_without_id() {
    let err = Transcoder::new()
        .to_item("https://item.taobao.com/item.htm?spm=a")
        .unwrap_err();
    assert!(matches!(
        err,
        TranscodeError::IdNotFound {
            marketplace: Marketplace::Taobao,
            ..
        }
    ));
}

#[test]
fn test_outcome_preserves_error_message() {
    let transcoder = Transcoder::new();
    let link = "https://www.kameymall.com/purchases/9876543210";

    let expected = transcoder.to_raw(link).unwrap_err().to_string();
    let outcome = transcoder.try_to_raw(link);
    assert!(!outcome.is_success());
    assert_eq!(outcome.message(), Some(expected.as_str()));

    let outcome = transcoder.try_to_raw(HIPOBUY_LINK);
    assert_eq!(
        outcome.value().map(String::as_str),
        Some("https://weidian.com/item.html?itemID=1625671124")
    );
}

#[test]
fn test_gated_conversion_reports_both_tags() {
    let outcome = Transcoder::new().try_to_agent(
        LinkSource::Link("https://detail.tmall.com/item.htm?id=652874751412"),
        Agent::Cssbuy,
        None,
        None,
    );
    assert_eq!(
        outcome,
        Outcome::Failure {
            message: "agent cssbuy does not support tmall links".to_string()
        }
    );
}
