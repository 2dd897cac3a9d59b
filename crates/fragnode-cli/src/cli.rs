use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "fragnode", version, about = "Assemble fragnode shader passes")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the final vertex/fragment source for a JSON pass description
    Assemble {
        /// Path to the pass JSON
        config: PathBuf,

        /// Which stage(s) to print
        #[arg(long, value_enum, default_value = "fragment")]
        stage: Stage,

        /// Leave `#include` lines untouched instead of fetching library files
        #[arg(long)]
        no_includes: bool,

        /// Extra define, `NAME=VALUE` or `NAME` (value 1). Applied after the config's defines.
        #[arg(short = 'D', value_parser = parse_define)]
        define: Vec<(String, String)>,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Vertex,
    Fragment,
    Both,
}

pub fn parse_define(s: &str) -> Result<(String, String), String> {
    let (name, value) = match s.split_once('=') {
        Some((n, v)) => (n.trim(), v.trim()),
        None => (s.trim(), "1"),
    };
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(format!("invalid define name in {s:?}"));
    }
    Ok((name.to_string(), value.to_string()))
}
