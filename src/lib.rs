pub mod config;
pub mod emit;
pub mod error;
pub mod flatten;
pub mod ir;
pub mod parse;
pub mod phases;
pub mod tokenize;

use config::Config;
use error::Result;
use ir::Block;
use std::path::{Path, PathBuf};
use tracing::debug;

const UTF8_BOM: &str = "\u{FEFF}";

/// Tokenize, parse and flatten `source` into raw narrative and code blocks.
pub fn blockize(source: &str, config: &Config) -> Result<Vec<Block>> {
    let tokens = tokenize::tokenize(source, config);
    debug!(tokens = tokens.len(), "tokenized");

    let chunks = parse::parse(tokens)?;
    debug!(chunks = chunks.len(), "parsed");

    let blocks = flatten::flatten(&chunks, config)?;
    debug!(blocks = blocks.len(), "flattened");
    Ok(blocks)
}

/// Translate a literate source file into Markdown.
pub fn translate(config: &Config, source: &str) -> Result<String> {
    config.validate()?;

    // Stages 1-3
    let blocks = blockize(source, config)?;

    // Phases
    let blocks = phases::process_phases(blocks, config);
    debug!(blocks = blocks.len(), "phases applied");

    Ok(emit::stringify(blocks))
}

/// Drop a leading UTF-8 byte order mark, if any.
pub fn skip_utf8_bom(text: &str) -> &str {
    text.strip_prefix(UTF8_BOM).unwrap_or(text)
}

/// The input path with its extension replaced by `.mkd`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("mkd")
}
