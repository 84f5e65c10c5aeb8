// src/bin/notion_notes.rs
//! Quick note capture into a Notion database.
//!
//! Driven by a local JSON config file holding the API token, the default
//! database, and default tags. `create` takes an explicit title, `quick`
//! infers one from the first line, `list` shows the most recently edited
//! pages.

use clap::{Parser, Subcommand};
use notion_scribe::constants::DEFAULT_RECENT_LIMIT;
use notion_scribe::error::AppError;
use notion_scribe::{logging, NoteService, NotesConfig, NotionHttpClient, DEFAULT_CONFIG_FILE};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "notion-notes", version, about = "Quick note capture into Notion")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to the JSON config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a page with a title and formatted note content
    Create {
        title: String,
        /// Note text; multiple arguments are joined with spaces
        #[arg(required = true)]
        notes: Vec<String>,
        /// Tags for the page; the configured defaults apply when omitted
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Capture a quick note; the title is inferred from the first line
    Quick {
        /// Note text; multiple arguments are joined with spaces
        #[arg(required = true)]
        notes: Vec<String>,
    },
    /// List the most recently edited pages in the default database
    List {
        #[arg(long, default_value_t = DEFAULT_RECENT_LIMIT)]
        limit: u32,
    },
}

async fn run(service: &NoteService, command: Command) -> Result<(), AppError> {
    match command {
        Command::Create { title, notes, tags } => {
            let tags = (!tags.is_empty()).then_some(tags);
            let created = service.create_note(&title, &notes.join(" "), tags).await?;
            println!("{}", serde_json::to_string_pretty(&created)?);
        }
        Command::Quick { notes } => {
            let created = service.quick_note(&notes.join(" ")).await?;
            println!("{}", serde_json::to_string_pretty(&created)?);
        }
        Command::List { limit } => {
            for page in service.recent_pages(limit).await? {
                let id_prefix: String = page.id.chars().take(8).collect();
                println!("- {} ({}...)", page.title, id_prefix);
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;

    let config = NotesConfig::load(&cli.config)?;
    let client = NotionHttpClient::new(&config.api_key)?;
    let service = NoteService::new(Arc::new(client), config);

    if let Err(err) = run(&service, cli.command).await {
        if let AppError::NotionService { code, .. } = &err {
            if code.is_not_found() {
                eprintln!("Hint: make sure the page or database is shared with your integration.");
            }
        }
        return Err(err.into());
    }

    Ok(())
}
