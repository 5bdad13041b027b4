//! Tooltip parsing pipeline.
//!
//! normalize -> split blocks -> header -> flavour selection -> line rules.
//! Parsing never fails: malformed input degrades to a sparser record.

use crate::anchors::is_instruction_block;
use crate::classify::{Classified, classify_line};
use crate::flavour::find_flavour_block;
use crate::header::parse_header;
use crate::models::{Category, ParsedItem};
use crate::normalize::{normalize, split_blocks};
use tracing::debug;

/// Parse pasted tooltip text into a structured record.
pub fn parse_item(input: &str) -> ParsedItem {
    let raw = normalize(input);
    if raw.is_empty() {
        return ParsedItem::empty(raw);
    }

    let blocks = split_blocks(&raw);
    debug!("Split tooltip into {} blocks", blocks.len());

    let Some((header_block, body)) = blocks.split_first() else {
        return ParsedItem::empty(raw);
    };

    let header = parse_header(header_block);
    debug!(
        "Parsed header: class={:?} rarity={} name={:?}",
        header.item_class, header.rarity, header.name
    );

    let mut item = ParsedItem {
        item_class: header.item_class,
        rarity: header.rarity,
        name: header.name,
        base_type: header.base_type,
        ..ParsedItem::empty(raw.clone())
    };

    let flavour = find_flavour_block(body);
    if let Some(index) = flavour {
        debug!("Treating body block {} as flavour text", index);
    }

    for (index, block) in body.iter().enumerate() {
        if Some(index) == flavour {
            for line in block {
                item.record(Category::Flavour, line.clone());
            }
            continue;
        }
        if is_instruction_block(block) {
            // Only the footer flag survives from an instruction block.
            let footer: Vec<String> = block.iter().filter(|l| *l == "Corrupted").cloned().collect();
            assemble_block(&mut item, &footer);
            continue;
        }
        assemble_block(&mut item, block);
    }

    item
}

/// Same as [`parse_item`] for callers holding optional input.
pub fn parse_optional_item(input: Option<&str>) -> ParsedItem {
    parse_item(input.unwrap_or_default())
}

fn assemble_block(item: &mut ParsedItem, block: &[String]) {
    for line in block {
        match classify_line(line) {
            Classified::Entry(category, value) => item.record(category, value),
            Classified::ItemLevel(level) => item.item_level = Some(level),
            Classified::Dropped => {}
        }
    }
}
