//! Play command - interactive game against the computer

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output,
    engine::{Difficulty, Mark},
    game::{Game, GameOutcome},
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game against the computer")]
pub struct PlayArgs {
    /// Computer strength (easy, normal, hard)
    #[arg(long, short = 'd', default_value = "hard")]
    pub difficulty: String,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let difficulty: Difficulty = args.difficulty.parse()?;
    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    let mut game = Game::new(difficulty);
    println!("You are X and move first; the computer plays {difficulty}.");
    println!("Rows and columns are numbered 1-3.");

    while !game.is_over() {
        println!("\n{}", output::render_board(game.board()));
        take_human_turn(&mut input, &mut game)?;
        if game.is_over() {
            break;
        }

        let mv = game.play_computer()?;
        println!(
            "\nComputer plays row {}, column {}.",
            mv.row() + 1,
            mv.column() + 1
        );
    }

    println!("\n{}", output::render_board(game.board()));
    let verdict = match game.outcome() {
        Some(GameOutcome::Win(Mark::Human)) => "You win!",
        Some(GameOutcome::Win(Mark::Computer)) => "The computer wins.",
        _ => "Draw.",
    };
    println!("{verdict}");
    Ok(())
}

/// Prompt until the human lands a legal move
fn take_human_turn(
    input: &mut impl Iterator<Item = io::Result<String>>,
    game: &mut Game,
) -> Result<()> {
    loop {
        let row = prompt_number(input, "Row (1-3): ")?;
        let column = prompt_number(input, "Column (1-3): ")?;
        match game.play_human(row - 1, column - 1) {
            Ok(()) => return Ok(()),
            Err(err) => println!("{err}. Choose another cell."),
        }
    }
}

/// Read a number in 1..=3, re-prompting on anything else
fn prompt_number(
    input: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<usize> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let Some(line) = input.next() else {
            anyhow::bail!("input ended before the game finished");
        };

        match line?.trim().parse::<usize>() {
            Ok(n @ 1..=3) => return Ok(n),
            _ => println!("Enter a number from 1 to 3."),
        }
    }
}
