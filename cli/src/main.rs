mod history;
mod report;
mod stats;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use goalie_core::{
    leagues, parse_game_input, parse_game_update, FileGameStore, GameService, GameStore,
    TimeWindow,
};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "goalie")]
#[command(about = "Track goaltender games and stats", long_about = None)]
struct Cli {
    /// Directory holding games.json (defaults to ~/.goalie)
    #[arg(long, global = true, env = "GOALIE_DATA_DIR", value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Record a game (usage: add team:Hawks league:AAA opp:Bears shots:30 goals:2 result:W)
    Add {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List games, newest first
    List {
        #[arg(short, long, default_value = "all")]
        window: TimeWindow,
        /// Exact league name
        #[arg(short, long)]
        league: Option<String>,
    },
    /// Show one game (full id or unique prefix)
    Show { id: String },
    /// Change fields of a game (usage: edit <id> goals:3 result:OTL)
    Edit {
        id: String,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Delete a game
    Delete { id: String },
    /// Print overall and per-league stats
    Stats {
        #[arg(short, long, default_value = "all")]
        window: TimeWindow,
    },
    /// List known leagues
    Leagues,
    /// Delete every stored game
    Clear {
        #[arg(long)]
        yes: bool,
    },
    /// Open the terminal dashboard
    Dashboard,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let store = FileGameStore::new(cli.data_dir)?;
    debug!(path = %store.path().display(), "using game store");
    let service = GameService::new(store);
    let today = goalie_core::time::today();

    match cli.command {
        Some(Commands::Add { args }) => {
            if args.is_empty() {
                println!("Error: game details are required.");
                return Ok(());
            }
            let input = parse_game_input(&args, today)?;
            let game = service.add_game(input)?;
            println!("Game added: {} vs {} (ID: {})", game.team, game.opponent, game.id);
            history::show_game(&game);
        }
        Some(Commands::List { window, league }) => {
            let games = service.history(window, league.as_deref())?;
            history::show_history(&games);
        }
        Some(Commands::Show { id }) => {
            let game = service.find_by_prefix(&id)?;
            history::show_game(&game);
        }
        Some(Commands::Edit { id, args }) => {
            let game = service.find_by_prefix(&id)?;
            let update = parse_game_update(&args, today)?;
            if update.is_empty() {
                println!("Nothing to change.");
                return Ok(());
            }
            if service.update_game(&game.id, &update)? {
                if let Some(updated) = service.get_game(&game.id)? {
                    history::show_game(&updated);
                }
            } else {
                println!("Game {} no longer exists.", game.id);
            }
        }
        Some(Commands::Delete { id }) => {
            let game = service.find_by_prefix(&id)?;
            if service.delete_game(&game.id)? {
                println!("{}", history::deleted_message(&game));
            }
        }
        Some(Commands::Stats { window }) => {
            let dashboard = service.dashboard(window)?;
            report::show_stats(&dashboard);
        }
        Some(Commands::Leagues) => {
            let games = service.list_games()?;
            let names = leagues(&games);
            if names.is_empty() {
                println!("No leagues yet.");
            }
            for name in names {
                println!("{}", name);
            }
        }
        Some(Commands::Clear { yes }) => {
            let count = service.store().load()?.len();
            if !yes {
                println!("This deletes {} games and cannot be undone. Re-run with --yes.", count);
                return Ok(());
            }
            service.clear_games()?;
            println!("Cleared {} games.", count);
        }
        Some(Commands::Dashboard) | None => {
            stats::run(service.store())?;
        }
    }
    Ok(())
}
