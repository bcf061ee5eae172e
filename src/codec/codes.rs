//! Marketplace codes used inside structured agent links.

use crate::domain::Marketplace::{self, Ali1688, Taobao, Weidian};

/// Two-way mapping between marketplaces and an agent's codes for them.
#[derive(Debug)]
pub struct CodeTable(&'static [(Marketplace, &'static str)]);

impl CodeTable {
    pub fn code_for(&self, marketplace: Marketplace) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(m, _)| *m == marketplace)
            .map(|(_, code)| *code)
    }

    /// Reverse lookup; codes compare case-insensitively.
    pub fn marketplace_for(&self, code: &str) -> Option<Marketplace> {
        self.0
            .iter()
            .find(|(_, c)| c.eq_ignore_ascii_case(code))
            .map(|(m, _)| *m)
    }
}

/// `shop_type` values of the cnfans family and lovegobuy.
pub static SHOP_TYPES: CodeTable =
    CodeTable(&[(Taobao, "taobao"), (Weidian, "weidian"), (Ali1688, "ali_1688")]);

/// Path segments of basetao and oopbuy.
pub static PATH_NAMES: CodeTable =
    CodeTable(&[(Taobao, "taobao"), (Weidian, "weidian"), (Ali1688, "1688")]);

/// `source` values of acbuy.
pub static ACBUY_SOURCES: CodeTable = CodeTable(&[(Taobao, "TB"), (Weidian, "WD"), (Ali1688, "AL")]);

/// `t` values of hipobuy.
pub static HIPOBUY_TYPES: CodeTable = CodeTable(&[(Taobao, "tb"), (Weidian, "wd"), (Ali1688, "1688")]);

/// Positional numeric codes in hoobuy product paths.
pub static HOOBUY_CODES: CodeTable = CodeTable(&[(Ali1688, "0"), (Taobao, "1"), (Weidian, "2")]);

/// Item path prefixes of cssbuy: `item-{id}`, `item-micro-{id}`, `item-1688-{id}`.
pub static CSSBUY_PREFIXES: CodeTable = CodeTable(&[(Taobao, ""), (Weidian, "micro-"), (Ali1688, "1688-")]);
