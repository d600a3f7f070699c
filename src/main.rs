use broadside::{
    init_logging,
    ui::{coord_to_string, parse_coord, print_help, render},
    AttackResult, Controller, Intent, Outcome, COMPUTER_REPLY_DELAY_MS,
};

use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::time::{sleep, Duration};

#[derive(Parser)]
#[command(author, version, about = "Battleship against the computer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = COMPUTER_REPLY_DELAY_MS, help = "Pause before the computer fires, in milliseconds")]
        delay_ms: u64,
    },
}

fn describe(result: &AttackResult) -> String {
    match result {
        AttackResult::Miss => "miss".to_string(),
        AttackResult::Hit => "hit!".to_string(),
        AttackResult::Sunk(id) => format!("hit and sunk the {}!", id),
    }
}

async fn prompt(stdout: &mut tokio::io::Stdout) -> anyhow::Result<()> {
    stdout.write_all(b"\n> ").await?;
    stdout.flush().await?;
    Ok(())
}

async fn play(seed: Option<u64>, delay: Duration) -> anyhow::Result<()> {
    let rng = if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let mut controller = Controller::new(rng).map_err(|e| anyhow::anyhow!(e))?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    println!("{}", render(&controller.snapshot()));
    print_help();
    prompt(&mut stdout).await?;

    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        let intent = match input.to_ascii_lowercase().as_str() {
            "" => {
                prompt(&mut stdout).await?;
                continue;
            }
            "q" | "quit" | "exit" => break,
            "h" | "help" => {
                print_help();
                prompt(&mut stdout).await?;
                continue;
            }
            "n" | "new" => Intent::PlayAgain,
            "r" | "random" => Intent::Randomize,
            _ => match parse_coord(input) {
                Ok(pos) => Intent::Attack(pos),
                Err(msg) => {
                    println!("  {}", msg);
                    prompt(&mut stdout).await?;
                    continue;
                }
            },
        };

        match controller.handle(intent).map_err(|e| anyhow::anyhow!(e))? {
            Outcome::Ignored => match intent {
                Intent::Attack(_) if controller.state().is_game_over() => {
                    println!("  The game is over. Type 'new' to play again.")
                }
                Intent::Attack(pos) => println!("  {} was already fired upon.", coord_to_string(pos)),
                Intent::Randomize => println!("  Too late to shuffle; shots have been fired."),
                Intent::PlayAgain => {}
            },
            Outcome::Restarted => println!("{}", render(&controller.snapshot())),
            Outcome::Randomized => println!("{}", render(&controller.snapshot())),
            Outcome::Attacked {
                result,
                computer_reply_due,
            } => {
                println!("{}", render(&controller.snapshot()));
                if let Intent::Attack(pos) = intent {
                    println!("  You fire at {}: {}", coord_to_string(pos), describe(&result));
                }
                if computer_reply_due {
                    println!("  The computer is aiming...");
                    sleep(delay).await;
                    if let Some((target, result)) =
                        controller.computer_reply().map_err(|e| anyhow::anyhow!(e))?
                    {
                        println!("{}", render(&controller.snapshot()));
                        println!(
                            "  Computer fires at {}: {}",
                            coord_to_string(target),
                            describe(&result)
                        );
                    }
                }
            }
        }
        prompt(&mut stdout).await?;
    }

    println!("Goodbye.");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, delay_ms } => play(seed, Duration::from_millis(delay_ms)).await,
    }
}
