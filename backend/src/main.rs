use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use wiki::application::{PageDocument, PageRepository, PageService};
use wiki::config::WikiConfig;
use wiki::domain::{aggregates::Page, Entity, PageDraft, PageId, Tag};
use wiki::infrastructure::persistence::{InMemoryPageRepository, SqlitePageRepository};

#[derive(Parser)]
#[command(name = "wiki")]
#[command(about = "Tagged wiki pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// SQLite file holding the pages (overrides WIKI_DATABASE_PATH)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Log filter, e.g. "info" or "wiki=debug" (overrides WIKI_LOG)
    #[arg(short, long)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a page
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        /// Tag to attach; repeat for several
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Show one page
    Show { id: String },
    /// List every page
    List,
    /// List pages carrying a tag
    Tagged { tag: String },
    /// List pages sharing a tag with the given page
    Similar { id: String },
    /// Change a page's title
    Retitle { id: String, title: String },
    /// Delete one page
    Delete { id: String },
    /// Delete every page
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = WikiConfig::from_env()?.with_overrides(cli.database, cli.log_level);

    wiki::logging::init(&config.log_filter)?;

    match config.database_path {
        Some(ref path) => {
            let repository = SqlitePageRepository::new_with_path(path)
                .with_context(|| format!("failed to open page store at {}", path.display()))?;
            run(PageService::new(repository), cli.command).await
        }
        None => {
            warn!("No database configured; pages will not outlive this process");
            run(PageService::new(InMemoryPageRepository::new()), cli.command).await
        }
    }
}

async fn run<R>(service: PageService<R>, command: Commands) -> Result<()>
where
    R: PageRepository + Send + 'static,
{
    match command {
        Commands::Create { title, content, tags } => {
            let draft = PageDraft::new(title, content).with_tags(Tag::list(tags)?);
            let page = service.create(draft).await?;
            info!("Created page {} at {}", page.id(), page.route());
            print_page(&page)
        }
        Commands::Show { id } => {
            let page = service.get(&PageId::new(id)?).await?;
            print_page(&page)
        }
        Commands::List => print_pages(&service.find_all().await?),
        Commands::Tagged { tag } => print_pages(&service.find_by_tag(&Tag::new(tag)?).await?),
        Commands::Similar { id } => {
            print_pages(&service.find_similar_by_id(&PageId::new(id)?).await?)
        }
        Commands::Retitle { id, title } => {
            let mut page = service.get(&PageId::new(id)?).await?;
            page.set_title(title);
            service.save(&mut page).await?;
            print_page(&page)
        }
        Commands::Delete { id } => {
            let id = PageId::new(id)?;
            if service.remove(&id).await? {
                info!("Deleted page {}", id);
            } else {
                warn!("No page with id {}", id);
            }
            Ok(())
        }
        Commands::Clear => {
            let removed = service.remove_all().await?;
            info!("Removed {} pages", removed);
            Ok(())
        }
    }
}

fn print_page(page: &Page) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&PageDocument::from(page))?);
    Ok(())
}

fn print_pages(pages: &[Page]) -> Result<()> {
    let documents: Vec<PageDocument> = pages.iter().map(PageDocument::from).collect();
    println!("{}", serde_json::to_string_pretty(&documents)?);
    Ok(())
}
