use litmd::config::{CodeStyle, Config};
use litmd::error::TranslateError;
use litmd::ir::{Block, Chunk, Token};
use litmd::{blockize, parse, tokenize, translate};
use std::fs;
use std::path::Path;

const SOURCES: &[&str] = &[
    "before (** inside **) after",
    "(** aaf  faf **)(** afaf **)",
    "",
    "(****)",
    "fafdaf",
    "afadf afafa (** afaf **)",
];

fn fenced() -> Config {
    Config::new(
        "(**",
        "**)",
        CodeStyle::Surrounded {
            start: "````fsharp".to_string(),
            end: "````".to_string(),
        },
    )
}

fn render_tokens(tokens: &[Token<'_>], config: &Config) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Token::OpenComment { .. } => config.start_narrative.as_str(),
            Token::CloseComment { .. } => config.end_narrative.as_str(),
            Token::Text { text } => *text,
        })
        .collect()
}

fn read_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    let text = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", path.display(), e));
    // Normalize line endings for cross-platform comparison
    text.replace("\r\n", "\n")
}

#[test]
fn test_tokenizer_round_trip() {
    let config = fenced();
    for source in SOURCES {
        let tokens = tokenize::tokenize(source, &config);
        assert_eq!(render_tokens(&tokens, &config), *source);
    }
}

#[test]
fn test_parser_round_trip() {
    let config = fenced();
    for source in SOURCES {
        let chunks = parse::parse(tokenize::tokenize(source, &config)).unwrap();
        let rendered: String = chunks
            .iter()
            .map(|c| match c {
                Chunk::Narrative { tokens } => format!(
                    "{}{}{}",
                    config.start_narrative,
                    render_tokens(tokens, &config),
                    config.end_narrative
                ),
                Chunk::Code { tokens } => render_tokens(tokens, &config),
            })
            .collect();
        assert_eq!(rendered, *source);
    }
}

#[test]
fn test_blockize_round_trip() {
    let config = fenced();
    for source in SOURCES {
        let blocks = blockize(source, &config).unwrap();
        let rendered: String = blocks
            .iter()
            .map(|b| match b {
                Block::Narrative { text } => {
                    format!("{}{}{}", config.start_narrative, text, config.end_narrative)
                }
                Block::Code { text } => text.clone(),
            })
            .collect();
        assert_eq!(rendered, *source);
    }
}

#[test]
fn test_surrounded_scenarios() {
    let config = fenced();
    let cases = [
        (" bb ", "\n````fsharp\nbb\n````\n"),
        ("(** bb **)", "\nbb\n"),
        ("bb (** aa **)", "\n````fsharp\nbb\n````\n\naa\n"),
        ("(**abc**)(**def**)", "\nabc\ndef\n"),
        ("(**  **) aa", "\n````fsharp\naa\n````\n"),
    ];
    for (input, expected) in cases {
        let blocks = litmd::phases::process_phases(blockize(input, &config).unwrap(), &config);
        let joined: String = blocks.iter().map(Block::text).collect();
        assert_eq!(joined, expected, "input: {:?}", input);

        let result = translate(&config, input).unwrap();
        assert_eq!(result, expected.trim_start(), "input: {:?}", input);
    }
}

#[test]
fn test_indented_scenario() {
    let config = Config::new("(**", "**)", CodeStyle::Indented(4));
    let blocks = blockize("code1\n(** note **)\ncode2", &config).unwrap();
    let blocks = litmd::phases::process_phases(blocks, &config);
    assert_eq!(
        blocks,
        vec![
            Block::Code {
                text: "    code1\n    ".to_string()
            },
            Block::Narrative {
                text: " note ".to_string()
            },
            Block::Code {
                text: "    \n    code2".to_string()
            },
        ]
    );

    // Leading whitespace of the whole document is dropped, the rest is kept.
    let result = translate(&config, "code1\n(** note **)\ncode2").unwrap();
    assert_eq!(result, "code1\n     note     \n    code2");
}

#[test]
fn test_error_scenarios() {
    let config = fenced();
    assert_eq!(
        translate(&config, "(** foo"),
        Err(TranslateError::UnclosedNarrative)
    );
    assert_eq!(
        translate(&config, "(** (** x **) **)"),
        Err(TranslateError::NestedNarrativeOpen { line: 1 })
    );
    assert_eq!(
        translate(&config, "**)"),
        Err(TranslateError::StrayNarrativeClose { line: 1 })
    );
}

#[test]
fn test_stray_close_survives_in_code() {
    let config = fenced();
    let result = translate(&config, "let s = \"**)\"").unwrap();
    assert_eq!(result, "````fsharp\nlet s = \"**)\"\n````\n");
}

#[test]
fn test_c_preset() {
    let config = Config::for_language("c", CodeStyle::Indented(2)).unwrap();
    let result = translate(&config, "/** Adds. **/\nint add(int a, int b);\n").unwrap();
    assert_eq!(result, "Adds.   \n  int add(int a, int b);\n  ");
}

#[test]
fn test_fixture_parity() {
    let config = Config::new(
        "(**",
        "**)",
        CodeStyle::Surrounded {
            start: "```fsharp".to_string(),
            end: "```".to_string(),
        },
    );
    let input = read_fixture("sample.fs");
    let expected = read_fixture("sample.mkd");
    assert_eq!(translate(&config, &input).unwrap(), expected);
}
