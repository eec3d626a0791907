use crate::config::Config;
use crate::ir::Token;

fn starts_with_delimiter(rest: &str, delimiter: &str) -> bool {
    !delimiter.is_empty() && rest.starts_with(delimiter)
}

/// Split `source` into narrative delimiters and the text between them.
///
/// The opener is tested before the closer at every position, so for
/// delimiters that prefix each other the opener wins. Line numbers start
/// at 1 and advance on every `\n` consumed into a text token.
pub fn tokenize<'a>(source: &'a str, config: &Config) -> Vec<Token<'a>> {
    let open = config.start_narrative.as_str();
    let close = config.end_narrative.as_str();

    let mut tokens: Vec<Token<'a>> = Vec::new();
    let mut line = 1;
    let mut pos = 0;

    while pos < source.len() {
        let rest = &source[pos..];

        if starts_with_delimiter(rest, open) {
            tokens.push(Token::OpenComment { line });
            pos += open.len();
            continue;
        }
        if starts_with_delimiter(rest, close) {
            tokens.push(Token::CloseComment { line });
            pos += close.len();
            continue;
        }

        let start = pos;
        while pos < source.len() {
            let rest = &source[pos..];
            if starts_with_delimiter(rest, open) || starts_with_delimiter(rest, close) {
                break;
            }
            let Some(c) = rest.chars().next() else {
                break;
            };
            if c == '\n' {
                line += 1;
            }
            pos += c.len_utf8();
        }
        tokens.push(Token::Text {
            text: &source[start..pos],
        });
    }

    tokens
}
