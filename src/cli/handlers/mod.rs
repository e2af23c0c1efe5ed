use crate::cli::commands::*;
use crate::cli::output::*;
use crate::model::{Portfolio, Section};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    match cli.command {
        None => Err("no subcommand given; run `folio` without arguments for the TUI".into()),
        Some(Commands::Show(args)) => cmd_show(args, json),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_show(args: ShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if args.category.is_some() && args.section != Section::Projects {
        return Err(format!(
            "--category only applies to `show projects`, not `show {}`",
            args.section.label().to_lowercase()
        )
        .into());
    }

    let portfolio = Portfolio::seeded();
    tracing::info!(section = ?args.section, category = ?args.category, json, "show");

    if json {
        let text = match args.section {
            Section::Home => serde_json::to_string_pretty(&home_to_json(&portfolio))?,
            Section::Projects => {
                serde_json::to_string_pretty(&projects_to_json(&portfolio, args.category))?
            }
            Section::Skills => serde_json::to_string_pretty(&skills_to_json(&portfolio))?,
            Section::Contact => serde_json::to_string_pretty(&contacts_to_json(&portfolio))?,
        };
        println!("{}", text);
        return Ok(());
    }

    let lines = match args.section {
        Section::Home => format_home(&portfolio),
        Section::Projects => format_projects(&portfolio, args.category),
        Section::Skills => format_skills(&portfolio),
        Section::Contact => format_contacts(&portfolio),
    };
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
