use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jeopardy::api::{self, AppState};
use jeopardy::config::Config;
use jeopardy::game::GameSession;
use jeopardy::loader::BoardLoader;
use jeopardy::provider::ProviderClient;
use jeopardy::render::render_board;
use jeopardy_core::Coord;

#[derive(Parser)]
#[command(name = "jeopardy")]
#[command(about = "Trivia board game backed by a remote clue provider")]
struct Cli {
    /// Base URL of the trivia provider (overrides config and JEOPARDY_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Categories per board
    #[arg(long, global = true)]
    categories: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the game page and its API
    Serve {
        /// Port for HTTP
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Play in the terminal
    Play {
        /// Seed for a reproducible category selection
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the effective configuration
    Config,
}

/// Initialize tracing with output to stderr (for terminal play) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "jeopardy=debug,jeopardy_core=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // Play mode: keep stdout for the board
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_stderr = matches!(cli.command, Some(Commands::Play { .. }));
    init_tracing(use_stderr);

    let mut config = Config::load()?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(categories) = cli.categories {
        config.categories = categories;
    }

    match cli.command {
        Some(Commands::Serve { port }) => serve(&config, port.unwrap_or(config.port)).await?,
        None => serve(&config, config.port).await?,
        Some(Commands::Play { seed }) => play(&config, seed).await?,
        Some(Commands::Config) => println!("{}", serde_json::to_string_pretty(&config)?),
    }

    Ok(())
}

fn board_loader(config: &Config) -> anyhow::Result<BoardLoader<ProviderClient>> {
    let client = ProviderClient::new(&config.api_url, config.request_timeout())?;
    Ok(BoardLoader::new(client, config.loader_settings()))
}

async fn serve(config: &Config, port: u16) -> anyhow::Result<()> {
    tracing::info!("Starting jeopardy server on port {}", port);

    let app = api::create_router(AppState::new(board_loader(config)?));

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Jeopardy listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn play(config: &Config, seed: Option<u64>) -> anyhow::Result<()> {
    let loader = board_loader(config)?;
    let mut session = GameSession::new();
    let mut round = 0;

    new_round(&loader, &mut session, seed).await;
    println!("Enter a cell id like 0-3 to reveal, r to restart, q to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => continue,
            "q" | "quit" => break,
            "r" | "restart" => {
                round += 1;
                new_round(&loader, &mut session, seed.map(|s| s.wrapping_add(round))).await;
            }
            input => match input.parse::<Coord>() {
                Ok(coord) => match session.reveal(coord) {
                    Ok(reveal) => {
                        println!("\n{}\n", reveal.display_text);
                        if let Some(game) = session.game() {
                            print!("{}", render_board(&game.board));
                            if reveal.mark_revealed && game.board.is_complete() {
                                println!("Board complete! r to restart, q to quit.");
                            }
                        }
                    }
                    Err(e) => println!("{}", e),
                },
                Err(e) => println!("{}", e),
            },
        }
    }

    Ok(())
}

async fn new_round(loader: &BoardLoader<ProviderClient>, session: &mut GameSession, seed: Option<u64>) {
    let ticket = session.begin_load();
    println!("Loading board...");

    let count = loader.settings().categories;
    let loaded = match seed {
        Some(seed) => loader.load_board_seeded(count, seed).await,
        None => loader.load_board(count).await,
    };

    match loaded {
        Ok(board) => match session.commit(ticket, board) {
            Ok(game) => print!("{}", render_board(&game.board)),
            Err(e) => println!("{}", e),
        },
        Err(e) => {
            println!("Failed to load board: {}", e);
            session.fail(ticket, e.to_string());
        }
    }
}
