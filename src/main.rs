use clap::{CommandFactory, FromArgMatches, Parser};
use litmd::config::{language_names, CodeStyle, Config};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "litmd",
    about = "Translate source code with narrative comments to an annotated Markdown file"
)]
struct Cli {
    /// Input file to process
    input: PathBuf,

    /// Output file (default: input file name with .mkd extension, `-` for stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Language preset supplying the narrative delimiters
    #[arg(short, long, conflicts_with_all = ["narrative_open", "narrative_close"])]
    language: Option<String>,

    /// String opening a narrative comment
    #[arg(short = 'p', long, requires = "narrative_close")]
    narrative_open: Option<String>,

    /// String closing a narrative comment
    #[arg(short = 'c', long, requires = "narrative_open")]
    narrative_close: Option<String>,

    /// String opening a code block
    #[arg(short = 'P', long, requires = "code_close")]
    code_open: Option<String>,

    /// String closing a code block
    #[arg(short = 'C', long, requires = "code_open")]
    code_close: Option<String>,

    /// Indent the code by N spaces
    #[arg(short, long, conflicts_with_all = ["code_open", "code_close"])]
    indent: Option<usize>,

    /// Config file path (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn load_config(path: &Path) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| die(&format!("cannot read config: {}", e)));
    serde_json::from_str(&text).unwrap_or_else(|e| die(&format!("invalid config JSON: {}", e)))
}

fn parse_cli() -> Cli {
    let summary = format!("Supported languages: {}", language_names().join(", "));
    let matches = Cli::command().after_help(summary).get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = parse_cli();

    // Load config
    let mut config = if let Some(ref config_path) = cli.config {
        load_config(config_path)
    } else {
        let path = Path::new("litmd.config.json");
        if path.is_file() {
            load_config(path)
        } else {
            Config::default()
        }
    };

    // CLI overrides
    if let Some(ref language) = cli.language {
        config
            .set_language(language)
            .unwrap_or_else(|e| die(&e.to_string()));
    }
    if let (Some(open), Some(close)) = (cli.narrative_open, cli.narrative_close) {
        config.start_narrative = open;
        config.end_narrative = close;
    }
    if let Some(n) = cli.indent {
        config.code_style = CodeStyle::Indented(n);
    }
    if let (Some(start), Some(end)) = (cli.code_open, cli.code_close) {
        config.code_style = CodeStyle::Surrounded { start, end };
    }
    config.validate().unwrap_or_else(|e| die(&e.to_string()));

    let source = fs::read_to_string(&cli.input)
        .unwrap_or_else(|e| die(&format!("cannot read {}: {}", cli.input.display(), e)));
    let source = litmd::skip_utf8_bom(&source);

    let result = litmd::translate(&config, source).unwrap_or_else(|e| die(&e.to_string()));

    let output_path = cli
        .output
        .unwrap_or_else(|| litmd::default_output_path(&cli.input));
    if output_path == Path::new("-") {
        print!("{}", result);
        return;
    }
    fs::write(&output_path, &result)
        .unwrap_or_else(|e| die(&format!("cannot write {}: {}", output_path.display(), e)));
    info!(
        input = %cli.input.display(),
        output = %output_path.display(),
        read = source.len(),
        written = result.len(),
        "translated"
    );
}
