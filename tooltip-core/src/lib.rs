//! Core library for turning pasted item tooltip text into structured records.

pub mod anchors;
pub mod classify;
pub mod error;
pub mod file_utils;
pub mod flavour;
pub mod header;
pub mod models;
pub mod normalize;
pub mod parsers;
pub mod sections;

pub use error::{Result, TooltipError};
pub use models::{Category, KnownTag, ParsedItem, Rarity};
pub use parsers::{parse_item, parse_optional_item};
