mod command;
mod config;
mod game_loop;
mod render;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tictactoe_engine::config::Validate;
use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{GameMode, TicTacToeSession};
use tictactoe_engine::{log, logger};
use tokio::io::BufReader;

use config::{Config, DEFAULT_CONFIG_FILE, get_config_manager};
use game_loop::run_game_loop;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe in the terminal")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// 2p, easy, medium or hard
    #[arg(long)]
    mode: Option<GameMode>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    bot_delay_ms: Option<u64>,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_to(&self, config: Config) -> Config {
        Config {
            mode: self.mode.unwrap_or(config.mode),
            bot_delay_ms: self.bot_delay_ms.unwrap_or(config.bot_delay_ms),
            seed: self.seed.or(config.seed),
            log_prefix: match (self.use_log_prefix, config.log_prefix) {
                (true, None) => Some("Client".to_string()),
                (_, prefix) => prefix,
            },
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(&args.config);
    let config = args.apply_to(config_manager.get_config()?);
    config.validate()?;

    logger::init_logger(config.log_prefix.clone(), args.verbose);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved settings to {}", args.config.display());
    }

    let rng = config.seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
    let mut session = TicTacToeSession::new(config.mode, rng);

    let mut stdout = std::io::stdout();
    run_game_loop(
        &mut session,
        BufReader::new(tokio::io::stdin()),
        &mut stdout,
        Duration::from_millis(config.bot_delay_ms),
    )
    .await?;

    let scores = session.scores();
    log!("Session finished, final score X {} - O {}", scores.x, scores.o);

    Ok(())
}
