mod commands;

use clap::{Parser, Subcommand};
use lodge_content::{Catalog, JsonStore};
use lodge_core::config;
use lodge_i18n::{resolve_language, LanguageContext};

/// Environment variable consulted when `--lang` is absent.
const LANG_ENV: &str = "LODGE_LANG";

#[derive(Parser)]
#[command(
    name = "lodge",
    version,
    about = "Localized hotel content from the command line"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Locale hint (e.g. "ru-RU", "fa", "hy-AM"). Falls back to LODGE_LANG,
    /// then to the configured default.
    #[arg(short, long, global = true)]
    lang: Option<String>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how locale hints resolve to supported languages.
    Resolve {
        /// Hints to resolve; empty resolves the active hint.
        hints: Vec<String>,
    },
    /// List supported languages and their fallback chains.
    Languages,
    /// Pick one localized field from every row of a table.
    Pick {
        /// Table name (e.g. "rooms").
        #[arg(short, long)]
        table: String,
        /// Base field name (e.g. "name" for name_en, name_am, ...).
        #[arg(short, long)]
        field: String,
        /// Only the row with this id.
        #[arg(long)]
        id: Option<String>,
    },
    /// Room catalog.
    Rooms,
    /// One room with its comments.
    Room {
        id: String,
    },
    /// Hotel services.
    Services,
    /// Contact details.
    Contact,
    /// About-us text.
    About,
    /// Blog posts, newest first.
    Blog,
    /// Social links.
    Social,
    /// Format a price for the active language.
    Price {
        amount: String,
    },
    /// Show the language context (direction, html lang) for a viewport.
    Direction {
        /// Viewport width in pixels.
        #[arg(short, long, default_value_t = 1280)]
        width: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.lodge.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let hint = cli
        .lang
        .clone()
        .or_else(|| std::env::var(LANG_ENV).ok())
        .unwrap_or_else(|| cfg.locale.default_hint.clone());
    let lang = resolve_language(Some(hint.as_str()));
    tracing::debug!("locale hint '{hint}' resolved to {lang}");

    let out = commands::Output { json: cli.json };

    match cli.command {
        Commands::Resolve { hints } => {
            let hints = if hints.is_empty() { vec![hint] } else { hints };
            out.resolutions(&hints)?;
        }
        Commands::Languages => out.languages()?,
        Commands::Price { amount } => out.price(&amount, lang)?,
        Commands::Direction { width } => {
            let ctx = LanguageContext::new(&hint, width, &cfg.locale.direction_rules());
            out.direction(&ctx)?;
        }
        Commands::Pick { table, field, id } => {
            let catalog = open_catalog(&cfg).await?;
            out.pick(catalog.source(), &table, &field, id.as_deref(), lang)
                .await?;
        }
        Commands::Rooms => {
            let catalog = open_catalog(&cfg).await?;
            out.rooms(&catalog.rooms(lang).await?)?;
        }
        Commands::Room { id } => {
            let catalog = open_catalog(&cfg).await?;
            let room = catalog.room(&id, lang).await?;
            let comments = catalog.comments(&id).await?;
            out.room(&room, &comments)?;
        }
        Commands::Services => {
            let catalog = open_catalog(&cfg).await?;
            out.services(&catalog.services(lang).await?)?;
        }
        Commands::Contact => {
            let catalog = open_catalog(&cfg).await?;
            match catalog.contact(lang).await? {
                Some(contact) => out.contact(&contact)?,
                None => anyhow::bail!("no contact row in the store"),
            }
        }
        Commands::About => {
            let catalog = open_catalog(&cfg).await?;
            match catalog.about(lang).await? {
                Some(about) => out.about(&about)?,
                None => anyhow::bail!("no about_us row in the store"),
            }
        }
        Commands::Blog => {
            let catalog = open_catalog(&cfg).await?;
            out.blog(&catalog.blog(lang).await?)?;
        }
        Commands::Social => {
            let catalog = open_catalog(&cfg).await?;
            out.social(&catalog.social_links().await?)?;
        }
    }

    Ok(())
}

/// Open the configured JSON export.
async fn open_catalog(cfg: &config::Config) -> anyhow::Result<Catalog<JsonStore>> {
    let store = JsonStore::open(&cfg.store.resolved_path()).await?;
    Ok(Catalog::new(store))
}
