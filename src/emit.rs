use crate::ir::Block;
use crate::phases::is_blank;

/// Concatenate block payloads and drop leading whitespace.
pub fn stringify(blocks: Vec<Block>) -> String {
    let mut out = String::new();
    for block in blocks {
        out.push_str(block.text());
    }
    match out.find(|c: char| !is_blank(c)) {
        Some(0) => out,
        Some(i) => out.split_off(i),
        None => String::new(),
    }
}
