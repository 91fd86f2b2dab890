//! Command-line surface (§6 "Configuration"): a file path plus the flags
//! that pick which tokenizer runs and what gets printed.

use std::path::PathBuf;

use clap::Parser;

/// Lex and parse an SML-family source file, or its companion `.mlb`
/// build-description format.
#[derive(Parser, Debug)]
#[command(name = "smlfront")]
#[command(author)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexer/parser driver for the SML-family source language")]
pub struct Cli {
    /// Source file to process.
    pub file: PathBuf,

    /// Print the token stream instead of parsing.
    #[arg(long)]
    pub emit_tokens: bool,

    /// Print only the comment tokens instead of parsing.
    #[arg(long)]
    pub emit_comments: bool,

    /// Treat `file` as a `.mlb` build description and use the MLB
    /// tokenizer (§4.3) instead of the main lexer. There is no parser for
    /// this format, so `--mlb` always stops after tokenizing.
    #[arg(long)]
    pub mlb: bool,

    /// Enable debug-level tracing to stderr (also controllable via
    /// `RUST_LOG`).
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_file() {
        let cli = Cli::parse_from(["smlfront", "a.sml"]);
        assert_eq!(cli.file, PathBuf::from("a.sml"));
        assert!(!cli.emit_tokens && !cli.emit_comments && !cli.mlb && !cli.verbose);
    }

    #[test]
    fn parses_emit_tokens() {
        let cli = Cli::parse_from(["smlfront", "--emit-tokens", "a.sml"]);
        assert!(cli.emit_tokens);
    }

    #[test]
    fn parses_mlb_and_verbose() {
        let cli = Cli::parse_from(["smlfront", "--mlb", "-v", "a.mlb"]);
        assert!(cli.mlb);
        assert!(cli.verbose);
    }
}
