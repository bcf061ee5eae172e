//! Per-agent encoders.
//!
//! Each function receives an [`EncodeContext`] whose marketplace is already
//! supported by the agent and returns the path and parameters of the link.

use super::{AgentUrl, EncodeContext};
use crate::codec::codes::{
    ACBUY_SOURCES, CSSBUY_PREFIXES, HIPOBUY_TYPES, HOOBUY_CODES, PATH_NAMES, SHOP_TYPES,
};
use crate::error::Result;

/// `/product?url=...&id=...&source=TB`
pub fn acbuy(ctx: &EncodeContext<'_>) -> Result<AgentUrl> {
    let source = ctx.code(&ACBUY_SOURCES)?;
    Ok(AgentUrl::query(
        "/product",
        vec![
            ("url", ctx.raw_link()),
            ("id", ctx.item.id.clone()),
            ("source", source.to_string()),
        ],
    ))
}

/// Superbuy, Wegobuy and Allchinabuy share one storefront.
pub fn superbuy_family(ctx: &EncodeContext<'_>) -> Result<AgentUrl> {
    Ok(AgentUrl::query(
        "/en/page/buy/",
        vec![
            ("from", "search-input".to_string()),
            ("url", ctx.raw_link()),
        ],
    ))
}

pub fn basetao(ctx: &EncodeContext<'_>) -> Result<AgentUrl> {
    let name = ctx.code(&PATH_NAMES)?;
    Ok(AgentUrl::query(
        format!(
            "/best-taobao-agent-service/products/agent/{name}/{}.html",
            ctx.item.id
        ),
        Vec::new(),
    ))
}

/// Cnfans, Joyabuy, Mulebuy and Orientdig run the same frontend.
pub fn cnfans_family(ctx: &EncodeContext<'_>) -> Result<AgentUrl> {
    let shop_type = ctx.code(&SHOP_TYPES)?;
    Ok(AgentUrl::query(
        "/product/",
        vec![
            ("shop_type", shop_type.to_string()),
            ("id", ctx.item.id.clone()),
        ],
    ))
}

pub fn cssbuy(ctx: &EncodeContext<'_>) -> Result<AgentUrl> {
    let prefix = ctx.code(&CSSBUY_PREFIXES)?;
    Ok(AgentUrl::query(
        format!("/item-{prefix}{}.html", ctx.item.id),
        Vec::new(),
    ))
}

pub fn eastmallbuy(ctx: &EncodeContext<'_>) -> Result<AgentUrl> {
    Ok(AgentUrl::query(
        "/index/item/index.html",
        vec![
            ("tp", ctx.item.marketplace.to_string()),
            ("searchlang", "en".to_string()),
            ("url", ctx.raw_link()),
        ],
    ))
}

pub fn ezbuycn(ctx: &EncodeContext<'_>) -> Result<AgentUrl> {
    Ok(AgentUrl::query(
        "/api/chaid.aspx",
        vec![("key", ctx.raw_link())],
    ))
}

/// Hagobuy and Kakobuy.
pub fn item_details(ctx: &EncodeContext<'_>) -> Result<AgentUrl> {
    Ok(AgentUrl::query("/item/details", vec![("url", ctx.raw_link())]))
}

pub fn hipobuy(ctx: &EncodeContext<'_>) -> Result<AgentUrl> {
    let kind = ctx.code(&HIPOBUY_TYPES)?;
    let mut params: Vec<_> = ctx.tracking().into_iter().collect();
    params.push(("t", kind.to_string()));
    params.push(("id", ctx.item.id.clone()));
    Ok(AgentUrl::query("/shopdetail", params))
}

pub fn hoobuy(ctx: &EncodeContext<'_>) -> Result<AgentUrl> {
    let code = ctx.code(&HOOBUY_CODES)?;
    Ok(AgentUrl::query(
        format!("/product/{code}/{}", ctx.item.id),
        Vec::new(),
    ))
}

pub fn hubbuycn(ctx: &EncodeContext<'_>) -> Result<AgentUrl> {
    Ok(AgentUrl::query("/product/item", vec![("url", ctx.raw_link())]))
}

pub fn itaobuy(ctx: &EncodeContext<'_>) -> Result<AgentUrl> {
    Ok(AgentUrl::query("/product-detail", vec![("url", ctx.raw_link())]))
}

pub fn kameymall(ctx: &EncodeContext<'_>) -> Result<AgentUrl> {
    Ok(AgentUrl::query(
        "/purchases/search/item",
        vec![("url", ctx.raw_link())],
    ))
}

pub fn loongbuy(ctx: &EncodeContext<'_>) -> Result<AgentUrl> {
    Ok(AgentUrl::query("/product-details", vec![("url", ctx.raw_link())]))
}

pub fn lovegobuy(ctx: &EncodeContext<'_>) -> Result<AgentUrl> {
    let shop_type = ctx.code(&SHOP_TYPES)?;
    Ok(AgentUrl::query(
        "/product",
        vec![
            ("id", ctx.item.id.clone()),
            ("shop_type", shop_type.to_string()),
        ],
    ))
}

pub fn oopbuy(ctx: &EncodeContext<'_>) -> Result<AgentUrl> {
    let name = ctx.code(&PATH_NAMES)?;
    Ok(AgentUrl::query(
        format!("/product/{name}/{}", ctx.item.id),
        Vec::new(),
    ))
}

/// The raw link is percent-encoded here and again by the query serializer.
pub fn pandabuy(ctx: &EncodeContext<'_>) -> Result<AgentUrl> {
    let mut params: Vec<_> = ctx.tracking().into_iter().collect();
    params.push(("url", urlencoding::encode(ctx.raw.as_str()).into_owned()));
    Ok(AgentUrl::query("/product", params))
}

pub fn sugargoo(ctx: &EncodeContext<'_>) -> Result<AgentUrl> {
    Ok(AgentUrl::hash_route(
        "/home/productDetail",
        vec![("productLink", ctx.raw_link())],
    ))
}
