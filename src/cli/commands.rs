use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::{Category, Section};

#[derive(Parser)]
#[command(name = "folio", about = concat!("folio v", env!("CARGO_PKG_VERSION"), " - a portfolio in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read settings from this TOML file instead of ./folio.toml
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one portfolio section without starting the TUI
    Show(ShowArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    /// Section to print
    #[arg(value_enum)]
    pub section: Section,
    /// Only projects in this category (projects section only)
    #[arg(long, value_enum)]
    pub category: Option<Category>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_show_with_category() {
        let cli = Cli::try_parse_from([
            "folio",
            "show",
            "projects",
            "--category",
            "in-progress",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        let Some(Commands::Show(args)) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.section, Section::Projects);
        assert_eq!(args.category, Some(Category::InProgress));
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["folio", "-c", "my.toml"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
    }

    #[test]
    fn rejects_unknown_section() {
        assert!(Cli::try_parse_from(["folio", "show", "blog"]).is_err());
    }
}
