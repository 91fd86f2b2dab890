//! The `smlfront` driver binary (§6): load a file, run the tokenizer and
//! (unless `--mlb`) the parser, and report the outcome. No semantic
//! analysis, no codegen, no linking — those phases are Non-goals of the
//! core this drives and are dropped here rather than stubbed.

mod cli;
mod diagnostics;

use anyhow::{bail, Context, Result};
use clap::Parser as _;
use tracing::info;

use smlfront_lex::{Lexer, MlbLexer};
use smlfront_util::{Source, SourceMap};

pub use cli::Cli;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    diagnostics::init(cli.verbose);

    let content = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let file_name = cli.file.display().to_string();

    let mut map = SourceMap::new();
    let file_id = map.add_file(file_name.clone(), content);
    let source = Source::whole_file(&map, file_id).expect("just-added file has a valid range");
    info!(file = %file_name, "loaded source file");

    if cli.mlb {
        return emit_mlb_tokens(&source, &map, cli.emit_comments);
    }

    let tokens = match Lexer::new(&source).tokens() {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("{}", err.render(&map));
            bail!("lexing failed");
        }
    };
    info!(count = tokens.len(), "tokenized");

    if cli.emit_tokens {
        for token in &tokens {
            println!("{:?}\t{:?}", token.class(), token.text());
        }
        return Ok(());
    }
    if cli.emit_comments {
        for token in tokens.iter().filter(|t| t.is_comment()) {
            println!("{}", token.text());
        }
        return Ok(());
    }

    match smlfront_par::parse_source(&source) {
        Ok(cst) => {
            info!("parsed OK");
            println!("{}: parsed {} tokens OK", file_name, tokens.len());
            if cli.verbose {
                println!("{cst:#?}");
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", err.render(&map));
            bail!("parsing failed");
        }
    }
}

fn emit_mlb_tokens(source: &Source, map: &SourceMap, comments_only: bool) -> Result<()> {
    let tokens = match MlbLexer::new(source).tokens() {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("{}", err.render(map));
            bail!("lexing failed");
        }
    };
    info!(count = tokens.len(), "tokenized .mlb file");

    if comments_only {
        for token in tokens.iter().filter(|t| t.is_comment()) {
            println!("{}", token.text());
        }
    } else {
        for token in &tokens {
            println!("{:?}\t{:?}", token.class(), token.text());
        }
    }
    Ok(())
}
