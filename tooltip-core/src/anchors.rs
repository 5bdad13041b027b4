//! Detection of the fixed instruction and footer blocks used as
//! positional anchors.

const JEWEL_PHRASES: [&str; 2] = ["place into an allocated jewel socket", "passive skill tree"];
const FLASK_PHRASES: [&str; 3] = [
    "right click to drink",
    "can only hold charges",
    "refill at wells",
];

/// Anchor kinds in the priority order used for flavour selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Jewel,
    Flask,
    Corrupted,
}

impl Anchor {
    pub const PRIORITY: [Anchor; 3] = [Anchor::Jewel, Anchor::Flask, Anchor::Corrupted];

    pub fn matches(&self, block: &[String]) -> bool {
        match self {
            Anchor::Jewel => is_jewel_instruction_block(block),
            Anchor::Flask => is_flask_instruction_block(block),
            Anchor::Corrupted => is_corrupted_block(block),
        }
    }

    /// Index of the first block of this kind.
    pub fn position(&self, blocks: &[Vec<String>]) -> Option<usize> {
        blocks.iter().position(|block| self.matches(block))
    }
}

fn joined_lowercase(block: &[String]) -> String {
    block.join(" ").to_lowercase()
}

fn contains_all(block: &[String], phrases: &[&str]) -> bool {
    let text = joined_lowercase(block);
    phrases.iter().all(|phrase| text.contains(phrase))
}

pub fn is_jewel_instruction_block(block: &[String]) -> bool {
    contains_all(block, &JEWEL_PHRASES)
}

pub fn is_flask_instruction_block(block: &[String]) -> bool {
    contains_all(block, &FLASK_PHRASES)
}

pub fn is_corrupted_block(block: &[String]) -> bool {
    block.iter().any(|line| line == "Corrupted")
}

/// Instruction blocks carry no item data and are skipped by the line
/// classifier. Corrupted blocks are still classified.
pub fn is_instruction_block(block: &[String]) -> bool {
    is_jewel_instruction_block(block) || is_flask_instruction_block(block)
}
