use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tags offered when none are given on the command line.
pub const DEFAULT_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6", "title", "span", "p", "a"];

#[derive(Parser)]
#[command(name = "harvest")]
#[command(
    about = "A CLI tool for extracting text from HTML tags of a web page into a local database"
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Database file (overrides the config file)
    #[arg(long, global = true, env = "TAG_HARVEST_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Network timeout in seconds (overrides the config file)
    #[arg(
        long,
        global = true,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a page, extract tag text and store it
    Parse(ParseArgs),

    /// Show stored records
    List(ListArgs),

    /// Delete all stored records
    Clear,
}

#[derive(Args)]
pub struct ParseArgs {
    /// Page URL (https:// is assumed when no scheme is given)
    #[arg(value_name = "URL")]
    pub url: String,

    /// HTML tags to extract, in order (repeatable or comma separated)
    #[arg(short, long = "tag", value_name = "TAG", value_delimiter = ',')]
    pub tags: Vec<String>,
}

impl ParseArgs {
    pub fn selected_tags(&self) -> Vec<String> {
        if self.tags.is_empty() {
            DEFAULT_TAGS.iter().map(|t| t.to_string()).collect()
        } else {
            self.tags.clone()
        }
    }
}

#[derive(Args)]
pub struct ListArgs {
    /// Print records as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tags_when_none_given() {
        let cli = Cli::try_parse_from(["harvest", "parse", "example.com"]).unwrap();
        let Commands::Parse(args) = cli.command else {
            panic!("expected parse command");
        };
        assert_eq!(args.selected_tags().len(), DEFAULT_TAGS.len());
        assert_eq!(args.selected_tags()[0], "h1");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(Cli::try_parse_from(["harvest", "--timeout", "0", "clear"]).is_err());

        let cli = Cli::try_parse_from(["harvest", "--timeout", "7", "clear"]).unwrap();
        assert_eq!(cli.timeout, Some(7));
    }

    #[test]
    fn test_comma_and_repeated_tags() {
        let cli = Cli::try_parse_from([
            "harvest", "--db", "x.db", "parse", "example.com", "-t", "h1,p", "--tag", "a",
        ])
        .unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("x.db")));
        let Commands::Parse(args) = cli.command else {
            panic!("expected parse command");
        };
        assert_eq!(args.selected_tags(), vec!["h1", "p", "a"]);
    }
}
