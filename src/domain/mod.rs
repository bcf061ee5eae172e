//! Core value types shared by the registries and codecs.
//!
//! - [`Marketplace`] and [`Agent`] - closed tag sets
//! - [`ItemRef`] - canonical `(marketplace, id)` reference
//! - [`RawLink`] - marketplace-native listing URL
//! - [`Referrals`] - caller-supplied affiliate codes per agent
//!
//! All types are plain values with no behaviour beyond parsing and display.

pub mod agent;
pub mod item;
pub mod marketplace;
pub mod referral;

pub use agent::{Agent, UnknownAgent};
pub use item::{ItemRef, RawLink};
pub use marketplace::{Marketplace, UnknownMarketplace};
pub use referral::Referrals;
