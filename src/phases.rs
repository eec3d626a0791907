use crate::config::{CodeStyle, Config};
use crate::ir::Block;

/// ASCII whitespace, vertical tab included.
pub(crate) fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

fn is_all_blank(s: &str) -> bool {
    s.chars().all(is_blank)
}

fn strip(s: &str) -> &str {
    s.trim_matches(is_blank)
}

pub fn process_phases(blocks: Vec<Block>, config: &Config) -> Vec<Block> {
    let blocks = remove_empty_blocks(blocks);
    let blocks = merge_blocks(blocks);
    add_code_tags(blocks, config)
}

pub fn remove_empty_blocks(mut blocks: Vec<Block>) -> Vec<Block> {
    blocks.retain(|b| !is_all_blank(b.text()));
    blocks
}

/// Join each run of same-kind neighbours into one block, newline separated.
pub fn merge_blocks(blocks: Vec<Block>) -> Vec<Block> {
    let mut out: Vec<Block> = Vec::with_capacity(blocks.len());
    for block in blocks {
        match out.last_mut() {
            Some(last) if last.same_kind(&block) => {
                let text = last.text_mut();
                text.push('\n');
                text.push_str(block.text());
            }
            _ => out.push(block),
        }
    }
    out
}

pub fn add_code_tags(blocks: Vec<Block>, config: &Config) -> Vec<Block> {
    match &config.code_style {
        CodeStyle::Indented(n) => blocks
            .into_iter()
            .map(|b| match b {
                Block::Code { text } => Block::Code {
                    text: indent(*n, &text),
                },
                narrative => narrative,
            })
            .collect(),
        CodeStyle::Surrounded { start, end } => blocks
            .into_iter()
            .map(|b| match b {
                Block::Narrative { text } => Block::Narrative {
                    text: format!("\n{}\n", strip(&text)),
                },
                Block::Code { text } => Block::Code {
                    text: format!("\n{}\n{}\n{}\n", start, strip(&text), end),
                },
            })
            .collect(),
    }
}

pub fn indent(n: usize, s: &str) -> String {
    let pad = " ".repeat(n);
    s.split('\n')
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n")
}
