use broadside::{init_logging, select_target, GameState};
use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Plays one full game with both sides firing at random and prints a JSON
/// summary.
fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut state = GameState::new_game(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
    let mut user_shots = 0usize;
    let mut computer_shots = 0usize;

    while !state.is_game_over() {
        if state.is_user_turn() {
            let target = select_target(state.computer_board(), &mut rng).map_err(|e| anyhow::anyhow!(e))?;
            state = state.apply_user_attack(target).map_err(|e| anyhow::anyhow!(e))?;
            user_shots += 1;
        } else {
            state = state.apply_computer_attack(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
            computer_shots += 1;
        }
    }

    let result = json!({
        "winner": serde_json::to_value(state.winner())?,
        "user_shots": user_shots,
        "computer_shots": computer_shots,
        "turns": user_shots + computer_shots,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
