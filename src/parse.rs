use crate::error::{Result, TranslateError};
use crate::ir::{Chunk, Token};
use std::iter::Peekable;
use std::vec::IntoIter;

type Tokens<'a> = Peekable<IntoIter<Token<'a>>>;

/// Group tokens into alternating narrative and code chunks.
///
/// Narratives may not nest and may not be left open. A closer inside code
/// is kept as a code token; a closer before anything else is an error.
pub fn parse(tokens: Vec<Token<'_>>) -> Result<Vec<Chunk<'_>>> {
    let mut chunks: Vec<Chunk<'_>> = Vec::new();
    let mut tokens = tokens.into_iter().peekable();

    while let Some(token) = tokens.next() {
        match token {
            Token::OpenComment { .. } => chunks.push(parse_narrative(&mut tokens)?),
            Token::CloseComment { line } => {
                return Err(TranslateError::StrayNarrativeClose { line });
            }
            Token::Text { .. } => chunks.push(parse_code(token, &mut tokens)),
        }
    }

    Ok(chunks)
}

fn parse_narrative<'a>(tokens: &mut Tokens<'a>) -> Result<Chunk<'a>> {
    let mut acc: Vec<Token<'a>> = Vec::new();
    loop {
        match tokens.next() {
            None => return Err(TranslateError::UnclosedNarrative),
            Some(Token::OpenComment { line }) => {
                return Err(TranslateError::NestedNarrativeOpen { line });
            }
            Some(Token::CloseComment { .. }) => return Ok(Chunk::Narrative { tokens: acc }),
            Some(text @ Token::Text { .. }) => acc.push(text),
        }
    }
}

// Stops in front of the next opener, leaving it for the top level.
fn parse_code<'a>(first: Token<'a>, tokens: &mut Tokens<'a>) -> Chunk<'a> {
    let mut acc = vec![first];
    while let Some(token) = tokens.next_if(|t| !matches!(t, Token::OpenComment { .. })) {
        acc.push(token);
    }
    Chunk::Code { tokens: acc }
}
