// ============================================================================
// pokedex — terminal front end for the catalog viewer
// ============================================================================
// Usage:
//   pokedex list [--favorites]                  Show the catalog or favorites
//   pokedex show <name-or-url>                  Show one entry's detail card
//   pokedex favorite <name-or-url>              Toggle an entry's favorite
//   pokedex favorites                           List stored favorites
//   pokedex export --format json                Export favorites as JSON
//   pokedex clear-favorites [--dry-run]         Remove all favorites
// ============================================================================

mod render;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use pokedex_core::{
    CatalogClient, FavoritesStore, LookupStatus, PokedexConfig, PokedexDb, Session,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Pokedex catalog viewer
#[derive(Parser)]
#[command(name = "pokedex", version, about = "Browse the PokeAPI catalog and keep local favorites")]
struct Cli {
    /// Path to the database file (default: ~/.pokedex/pokedex.redb)
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,

    /// API base URL (default: https://pokeapi.co/api/v2)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Number of catalog entries to fetch (default: 151)
    #[arg(long, global = true)]
    limit: Option<u32>,

    /// Delay before a lookup result is shown, in milliseconds (default: 2000)
    #[arg(long, global = true)]
    pacing_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the full catalog, or only favorites
    List {
        /// Switch to the favorites view (no network needed)
        #[arg(long)]
        favorites: bool,
    },

    /// Look up one entry by name, number or URL
    Show {
        query: String,
    },

    /// Look up an entry and toggle its favorite
    Favorite {
        query: String,

        /// Print the favorites list afterwards
        #[arg(long)]
        favorites_view: bool,
    },

    /// List stored favorites
    Favorites,

    /// Export favorites as JSON
    Export {
        /// Output format (currently only json is supported)
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Remove every stored favorite
    ClearFavorites {
        /// Show what would be removed without deleting
        #[arg(long)]
        dry_run: bool,
    },
}

fn build_config(cli: &Cli) -> Result<PokedexConfig> {
    let mut config = PokedexConfig::from_env()?;
    if let Some(url) = &cli.api_url {
        config.api_base_url = url.clone();
    }
    if let Some(limit) = cli.limit {
        config.catalog_limit = limit;
    }
    if let Some(pacing) = cli.pacing_ms {
        config.pacing_ms = pacing;
    }
    if let Some(path) = &cli.db_path {
        config.db_path = Some(path.clone());
    }
    Ok(config.validate()?)
}

fn build_session(config: &PokedexConfig) -> Result<Session> {
    let db = PokedexDb::open(config.db_path.as_deref())?;
    debug!("Favorites stored in {}", db.path().display());
    let favorites = FavoritesStore::new(Arc::new(db));
    let client = CatalogClient::new(config);
    Ok(Session::new(Arc::new(client), favorites, config.pacing()))
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is normal
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    info!("Using API at {}", config.api_base_url);
    let mut session = build_session(&config)?;

    match cli.command {
        Commands::List { favorites } => cmd_list(&mut session, favorites).await,
        Commands::Show { query } => cmd_show(&mut session, &query).await,
        Commands::Favorite {
            query,
            favorites_view,
        } => cmd_favorite(&mut session, &query, favorites_view).await,
        Commands::Favorites => cmd_favorites(&session),
        Commands::Export { format } => cmd_export(&session, &config, &format),
        Commands::ClearFavorites { dry_run } => cmd_clear(&session, dry_run),
    }
}

async fn cmd_list(session: &mut Session, favorites: bool) -> Result<()> {
    if favorites {
        session.toggle_view();
    } else {
        println!("{}", render::LOADING);
        // Failure is rendered as the unavailable placeholder below
        let _ = session.load_catalog().await;
    }

    print!("{}", render::list(&session.presentation()));
    Ok(())
}

async fn cmd_show(session: &mut Session, query: &str) -> Result<()> {
    eprintln!("Looking up {}...", query.trim());
    session.lookup(query).await;
    print!("{}", render::detail(session.detail().selection()));
    Ok(())
}

async fn cmd_favorite(session: &mut Session, query: &str, favorites_view: bool) -> Result<()> {
    eprintln!("Looking up {}...", query.trim());
    let status = session.lookup(query).await;
    let favorited = session.toggle_favorite()?;

    print!("{}", render::detail(session.detail().selection()));
    match status {
        LookupStatus::Shown if favorited => println!("Added to favorites."),
        LookupStatus::Shown => println!("Removed from favorites."),
        _ => println!("Nothing to favorite."),
    }

    if favorites_view {
        session.toggle_view();
        println!();
        print!("{}", render::list(&session.presentation()));
    }
    Ok(())
}

fn cmd_favorites(session: &Session) -> Result<()> {
    let favorites = session.favorites().list_favorites();

    if favorites.is_empty() {
        println!("{}", render::NO_FAVORITES);
        return Ok(());
    }

    println!("{:<6}  {:<16}  {}", "ID", "NAME", "URL");
    println!("{}", "-".repeat(70));
    for fav in &favorites {
        println!("{:<6}  {:<16}  {}", fav.id, fav.name, fav.detail_reference);
    }

    println!("\nTotal: {} favorites", favorites.len());
    Ok(())
}

fn cmd_export(session: &Session, config: &PokedexConfig, format: &str) -> Result<()> {
    if format != "json" {
        anyhow::bail!("Unsupported format '{}'. Only 'json' is supported.", format);
    }

    let export = serde_json::json!({
        "exported_at": Utc::now().to_rfc3339(),
        "config": config,
        "favorites": session.favorites().list_favorites(),
    });

    println!("{}", serde_json::to_string_pretty(&export)?);
    Ok(())
}

fn cmd_clear(session: &Session, dry_run: bool) -> Result<()> {
    if dry_run {
        println!("=== DRY RUN — no data will be deleted ===\n");
        let favorites = session.favorites().list_favorites();
        println!("Would remove {} favorites", favorites.len());
        for fav in &favorites {
            println!("  - #{} {}", fav.id, fav.name);
        }
        return Ok(());
    }

    let removed = session.favorites().clear()?;
    println!("Removed {} favorites", removed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags_override_config() {
        let cli = Cli::parse_from([
            "pokedex",
            "--api-url",
            "http://localhost:9000/api/v2/",
            "--limit",
            "10",
            "--pacing-ms",
            "0",
            "list",
        ]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:9000/api/v2");
        assert_eq!(config.catalog_limit, 10);
        assert_eq!(config.pacing_ms, 0);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let cli = Cli::parse_from(["pokedex", "--limit", "0", "favorites"]);
        assert!(build_config(&cli).is_err());
    }

    #[test]
    fn test_subcommand_parsing() {
        let cli = Cli::parse_from(["pokedex", "favorite", "Pikachu", "--favorites-view"]);
        match cli.command {
            Commands::Favorite { query, favorites_view } => {
                assert_eq!(query, "Pikachu");
                assert!(favorites_view);
            }
            _ => panic!("expected favorite command"),
        }
    }
}
