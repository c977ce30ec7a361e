//! `slayer-lookup` — command-line lookups and the static page server.

use clap::{Parser, Subcommand};
use slayer_lookup::prelude::*;
use slayer_lookup::server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "slayer-lookup", version, about = "Demon Slayer API lookups")]
struct Cli {
    /// API base URL.
    #[arg(long, env = "SLAYER_API_URL", global = true)]
    api_url: Option<String>,

    /// Query endpoints directly under the base URL instead of per-category paths.
    #[arg(long, global = true)]
    flat_routes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a single character, breathing style or demon.
    Lookup {
        /// character | breathing | demon
        category: Category,
        /// Name as typed; spaces and accents are normalized.
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Initial page load plus optional searches, printed per section.
    Dashboard {
        #[arg(long)]
        character: Option<String>,
        #[arg(long)]
        breathing: Option<String>,
        #[arg(long)]
        demon: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Serve the page's static files.
    Serve {
        #[arg(long, env = "PORT")]
        port: Option<u16>,
        #[arg(long, env = "STATIC_DIR")]
        static_dir: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slayer_lookup=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if cli.flat_routes {
        config.route_layout = RouteLayout::Flat;
    }

    match cli.command {
        Command::Lookup {
            category,
            name,
            json,
        } => {
            let client = LookupClient::from_config(&config)?;
            let result = client.search(&name.join(" "), category).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.name);
                println!("[imagem: {}]", result.image_url);
                for line in result.detail_lines() {
                    println!("  {}", line);
                }
            }
        }
        Command::Dashboard {
            character,
            breathing,
            demon,
            json,
        } => {
            let client = LookupClient::from_config(&config)?;
            let dashboard = Dashboard::for_client(&client);
            dashboard.initial_load(&client).await;

            // Sections never share state, so their searches run side by side.
            let search = |name: Option<String>, category: Category| {
                let dashboard = dashboard.clone();
                let client = client.clone();
                async move {
                    if let Some(name) = name {
                        dashboard.search(&client, &name, category).await;
                    }
                }
            };
            tokio::join!(
                search(character, Category::Character),
                search(breathing, Category::BreathingStyle),
                search(demon, Category::Demon),
            );

            let views = dashboard.snapshot_all().await;
            if json {
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else {
                for view in views {
                    println!("{}", view.render());
                }
            }
        }
        Command::Serve { port, static_dir } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(dir) = static_dir {
                config.static_dir = dir;
            }
            server::serve(&config).await?;
        }
    }

    Ok(())
}
