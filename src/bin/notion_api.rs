// src/bin/notion_api.rs
//! Raw Notion REST API access from the command line.
//!
//! Every subcommand maps one-to-one onto an API call and prints the
//! pretty-printed response JSON. The API token comes from the
//! `NOTION_API_TOKEN` environment variable.

use clap::{Parser, Subcommand, ValueEnum};
use notion_scribe::api::{CreatePageRequest, DatabaseQuery, NotionGateway, ParentRef, SearchRequest};
use notion_scribe::error::AppError;
use notion_scribe::model::{Block, HeadingLevel};
use notion_scribe::types::NotionId;
use notion_scribe::{api_key_from_env, logging, NotionHttpClient};
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(name = "notion-api", version, about = "Raw Notion REST API access")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search pages by title
    Search {
        query: String,
    },
    /// List all databases shared with the integration
    ListDatabases,
    /// Retrieve a page's metadata and properties
    GetPage {
        page_id: String,
    },
    /// Retrieve a database's schema
    GetDatabase {
        database_id: String,
    },
    /// Query a database's rows
    QueryDatabase {
        database_id: String,
        /// Filter object as raw JSON, passed through verbatim
        #[arg(long)]
        filter: Option<String>,
    },
    /// Create a page with a title under a database or page parent
    CreatePage {
        parent_id: String,
        title: String,
        #[arg(long, value_enum, default_value_t = ParentKind::Database)]
        parent: ParentKind,
    },
    /// Append a single rich-text block to a page
    AppendBlock {
        page_id: String,
        content: String,
        #[arg(long, value_enum, default_value_t = BlockKind::Paragraph)]
        block_type: BlockKind,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ParentKind {
    Database,
    Page,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum BlockKind {
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    Bullet,
}

impl BlockKind {
    fn into_block(self, content: String) -> Block {
        match self {
            Self::Paragraph => Block::paragraph(content),
            Self::Heading1 => Block::heading(HeadingLevel::H1, content),
            Self::Heading2 => Block::heading(HeadingLevel::H2, content),
            Self::Heading3 => Block::heading(HeadingLevel::H3, content),
            Self::Bullet => Block::bullet(content),
        }
    }
}

/// Title property the raw CLI writes when creating pages.
const CREATE_PAGE_TITLE_PROPERTY: &str = "Name";

async fn run(client: &NotionHttpClient, command: Command) -> Result<Value, AppError> {
    match command {
        Command::Search { query } => client.search(&SearchRequest::pages(query)).await,
        Command::ListDatabases => client.search(&SearchRequest::databases()).await,
        Command::GetPage { page_id } => {
            let id = NotionId::parse(&page_id)?;
            client.retrieve_page(&id).await
        }
        Command::GetDatabase { database_id } => {
            let id = NotionId::parse(&database_id)?;
            client.retrieve_database(&id).await
        }
        Command::QueryDatabase {
            database_id,
            filter,
        } => {
            let id = NotionId::parse(&database_id)?;
            let query = match filter {
                Some(raw) => DatabaseQuery::filtered(serde_json::from_str(&raw)?),
                None => DatabaseQuery::unfiltered(),
            };
            client.query_database(&id, &query).await
        }
        Command::CreatePage {
            parent_id,
            title,
            parent,
        } => {
            let id = NotionId::parse(&parent_id)?;
            let parent = match parent {
                ParentKind::Database => ParentRef::database(&id),
                ParentKind::Page => ParentRef::page(&id),
            };
            let request =
                CreatePageRequest::titled(parent, CREATE_PAGE_TITLE_PROPERTY, &title);
            client.create_page(&request).await
        }
        Command::AppendBlock {
            page_id,
            content,
            block_type,
        } => {
            let id = NotionId::parse(&page_id)?;
            let blocks = [block_type.into_block(content)];
            client.append_blocks(&id, &blocks).await
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;

    let api_key = api_key_from_env()?;
    let client = NotionHttpClient::new(&api_key)?;

    let response = run(&client, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
