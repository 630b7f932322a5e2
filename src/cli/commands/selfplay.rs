//! Selfplay command - pit the engine against a random mover

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

use crate::{
    cli::output,
    engine::{Difficulty, Mark},
    game::{Game, GameOutcome},
};

#[derive(Parser, Debug)]
#[command(about = "Pit the engine against a random mover over many games")]
pub struct SelfplayArgs {
    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Computer strength (easy, normal, hard)
    #[arg(long, short = 'd', default_value = "hard")]
    pub difficulty: String,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: SelfplayArgs) -> Result<()> {
    let difficulty: Difficulty = args.difficulty.parse()?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let pb = output::create_game_progress(args.games as u64);
    let (mut wins, mut draws, mut losses) = (0usize, 0usize, 0usize);

    for _ in 0..args.games {
        let game = play_random_game(&mut rng, difficulty)?;
        match game.outcome() {
            Some(GameOutcome::Win(Mark::Computer)) => wins += 1,
            Some(GameOutcome::Win(Mark::Human)) => losses += 1,
            _ => draws += 1,
        }
        pb.set_message(format!("W:{wins} D:{draws} L:{losses}"));
        pb.inc(1);
    }
    pb.finish_with_message(format!("W:{wins} D:{draws} L:{losses}"));

    output::print_section("Selfplay results");
    output::print_kv("Games", &args.games.to_string());
    output::print_kv("Difficulty", &difficulty.to_string());
    output::print_kv("Computer wins", &wins.to_string());
    output::print_kv("Draws", &draws.to_string());
    output::print_kv("Computer losses", &losses.to_string());
    Ok(())
}

/// Play one game with a uniformly random mover on the human side
fn play_random_game(rng: &mut StdRng, difficulty: Difficulty) -> crate::error::Result<Game> {
    let mut game = Game::new(difficulty);
    loop {
        let empty = game.board().empty_positions();
        let &pos = empty
            .choose(rng)
            .expect("non-terminal board has an empty cell");
        game.play_human(pos / 3, pos % 3)?;
        if game.is_over() {
            return Ok(game);
        }

        game.play_computer()?;
        if game.is_over() {
            return Ok(game);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_replays_the_same_game() {
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);

        let game_a = play_random_game(&mut rng_a, Difficulty::Hard).unwrap();
        let game_b = play_random_game(&mut rng_b, Difficulty::Hard).unwrap();

        assert_eq!(game_a.moves(), game_b.moves());
        assert_eq!(game_a.outcome(), game_b.outcome());
    }

    #[test]
    fn test_full_depth_engine_never_loses_to_random_play() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..25 {
            let game = play_random_game(&mut rng, Difficulty::Hard).unwrap();
            assert_ne!(
                game.outcome(),
                Some(GameOutcome::Win(Mark::Human)),
                "random mover beat the engine: {:?}",
                game.moves()
            );
        }
    }
}
