use crate::config::Config;
use crate::error::{Result, TranslateError};
use crate::ir::{Block, Chunk, Token};
use tracing::warn;

fn render_narrative(token: &Token<'_>, out: &mut String) -> Result<()> {
    match token {
        Token::Text { text } => out.push_str(text),
        Token::OpenComment { line } | Token::CloseComment { line } => {
            return Err(TranslateError::InternalInvariant {
                line: *line,
                detail: "Cannot nest narrative comments",
            });
        }
    }
    Ok(())
}

fn render_code(token: &Token<'_>, out: &mut String, config: &Config) -> Result<()> {
    match token {
        Token::Text { text } => out.push_str(text),
        Token::CloseComment { line } => {
            warn!(line, "narrative close outside a narrative kept as code");
            out.push_str(&config.end_narrative);
        }
        Token::OpenComment { line } => {
            return Err(TranslateError::InternalInvariant {
                line: *line,
                detail: "Open narrative comment cannot be in code",
            });
        }
    }
    Ok(())
}

/// Collapse each chunk into a single block of the same kind.
pub fn flatten(chunks: &[Chunk<'_>], config: &Config) -> Result<Vec<Block>> {
    let mut blocks: Vec<Block> = Vec::with_capacity(chunks.len());

    for chunk in chunks {
        let mut text = String::new();
        match chunk {
            Chunk::Narrative { tokens } => {
                for token in tokens {
                    render_narrative(token, &mut text)?;
                }
                blocks.push(Block::Narrative { text });
            }
            Chunk::Code { tokens } => {
                for token in tokens {
                    render_code(token, &mut text, config)?;
                }
                blocks.push(Block::Code { text });
            }
        }
    }

    Ok(blocks)
}
