//! Data models for parsed item tooltips.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Item rarity as printed on the `Rarity:` header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rarity {
    Normal,
    Magic,
    Rare,
    Unique,
    Gem,
    Currency,
    Quest,
    #[default]
    Unknown,
}

impl Rarity {
    /// Substring probes in priority order; the first hit wins.
    const PROBES: [(&'static str, Rarity); 7] = [
        ("normal", Rarity::Normal),
        ("magic", Rarity::Magic),
        ("rare", Rarity::Rare),
        ("unique", Rarity::Unique),
        ("gem", Rarity::Gem),
        ("currency", Rarity::Currency),
        ("quest", Rarity::Quest),
    ];

    /// Map the value of a `Rarity:` line, case-insensitively.
    pub fn from_label(label: &str) -> Self {
        let lowered = label.to_lowercase();
        Self::PROBES
            .iter()
            .find(|(probe, _)| lowered.contains(probe))
            .map(|(_, rarity)| *rarity)
            .unwrap_or(Rarity::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Normal => "Normal",
            Rarity::Magic => "Magic",
            Rarity::Rare => "Rare",
            Rarity::Unique => "Unique",
            Rarity::Gem => "Gem",
            Rarity::Currency => "Currency",
            Rarity::Quest => "Quest",
            Rarity::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trailing parenthetical marker on a modifier line, e.g. `(implicit)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnownTag {
    Implicit,
    Enchant,
    Rune,
    Desecrated,
    Mutated,
    None,
}

impl KnownTag {
    /// Map a captured marker word. `augmented` and anything unrecognised
    /// carry no routing and map to `None`.
    pub fn from_marker(marker: &str) -> Self {
        match marker.to_lowercase().as_str() {
            "implicit" => KnownTag::Implicit,
            "enchant" => KnownTag::Enchant,
            "rune" => KnownTag::Rune,
            "desecrated" => KnownTag::Desecrated,
            "mutated" => KnownTag::Mutated,
            _ => KnownTag::None,
        }
    }

    /// Output category a tagged modifier line is routed to.
    pub fn category(&self) -> Category {
        match self {
            KnownTag::Implicit => Category::Implicit,
            KnownTag::Enchant => Category::Enchant,
            KnownTag::Rune => Category::Rune,
            KnownTag::Desecrated => Category::Desecrated,
            KnownTag::Mutated => Category::Mutated,
            KnownTag::None => Category::Mod,
        }
    }
}

/// Semantic category of a classified tooltip line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Property,
    Limit,
    Requirement,
    Socket,
    GrantedSkill,
    Implicit,
    Enchant,
    Rune,
    Desecrated,
    Mutated,
    Mod,
    FooterFlag,
    Flavour,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::Property,
        Category::Limit,
        Category::Requirement,
        Category::Socket,
        Category::GrantedSkill,
        Category::Implicit,
        Category::Enchant,
        Category::Rune,
        Category::Desecrated,
        Category::Mutated,
        Category::Mod,
        Category::FooterFlag,
        Category::Flavour,
    ];
}

/// A separator-delimited run of trimmed, non-empty lines.
pub type Block = Vec<String>;

/// Structured record produced from one pasted tooltip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_level: Option<i32>,
    pub rarity: Rarity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_type: Option<String>,
    pub limits: Vec<String>,
    pub properties: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sockets: Option<String>,
    pub granted_skills: Vec<String>,
    pub implicits: Vec<String>,
    pub enchants: Vec<String>,
    pub runes: Vec<String>,
    pub mods: Vec<String>,
    pub desecrated: Vec<String>,
    pub mutated: Vec<String>,
    pub footer_flags: Vec<String>,
    pub flavour_text: Vec<String>,
    pub raw: String,
}

impl ParsedItem {
    /// Record with every field empty except `raw`.
    pub fn empty(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            ..Self::default()
        }
    }

    /// Store a classified value. Single-valued categories overwrite,
    /// everything else appends in scan order.
    pub fn record(&mut self, category: Category, value: String) {
        match category {
            Category::Requirement => self.requirements = Some(value),
            Category::Socket => self.sockets = Some(value),
            Category::Property => self.properties.push(value),
            Category::Limit => self.limits.push(value),
            Category::GrantedSkill => self.granted_skills.push(value),
            Category::Implicit => self.implicits.push(value),
            Category::Enchant => self.enchants.push(value),
            Category::Rune => self.runes.push(value),
            Category::Desecrated => self.desecrated.push(value),
            Category::Mutated => self.mutated.push(value),
            Category::Mod => self.mods.push(value),
            Category::FooterFlag => self.footer_flags.push(value),
            Category::Flavour => self.flavour_text.push(value),
        }
    }

    /// Values held for a category, in source order.
    pub fn lines(&self, category: Category) -> &[String] {
        match category {
            Category::Requirement => self.requirements.as_slice(),
            Category::Socket => self.sockets.as_slice(),
            Category::Property => &self.properties,
            Category::Limit => &self.limits,
            Category::GrantedSkill => &self.granted_skills,
            Category::Implicit => &self.implicits,
            Category::Enchant => &self.enchants,
            Category::Rune => &self.runes,
            Category::Desecrated => &self.desecrated,
            Category::Mutated => &self.mutated,
            Category::Mod => &self.mods,
            Category::FooterFlag => &self.footer_flags,
            Category::Flavour => &self.flavour_text,
        }
    }

    pub fn is_corrupted(&self) -> bool {
        self.footer_flags.iter().any(|flag| flag == "Corrupted")
    }

    /// True when nothing beyond `raw` was recovered.
    pub fn is_empty(&self) -> bool {
        self.item_class.is_none()
            && self.item_level.is_none()
            && self.rarity == Rarity::Unknown
            && self.name.is_none()
            && self.base_type.is_none()
            && Category::ALL.iter().all(|c| self.lines(*c).is_empty())
    }

    /// Serialize to a single-line JSON document.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
