//! Analyze command - score a position and report the engine's move choice

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output,
    engine::{Board, Cell, Difficulty, Mark, computer_move, evaluate, move_search, winning_moves},
};

#[derive(Parser, Debug)]
#[command(about = "Analyze a position and report the engine's move choice")]
pub struct AnalyzeArgs {
    /// Board as 9 cells, row-major: 'X' human, 'O' computer, '.' empty
    /// (e.g. "XO..X....")
    pub board: String,

    /// Computer strength used for the search (easy, normal, hard)
    #[arg(long, short = 'd', default_value = "hard")]
    pub difficulty: String,

    /// Export the report as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
struct MoveScore {
    position: usize,
    row: usize,
    column: usize,
    score: i32,
}

#[derive(Debug, Serialize)]
struct AnalysisReport {
    board: String,
    difficulty: String,
    outcome: Option<String>,
    heuristic: i32,
    computer_threats: Vec<usize>,
    human_threats: Vec<usize>,
    search_depth: usize,
    move_scores: Vec<MoveScore>,
    chosen: Option<MoveScore>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let difficulty: Difficulty = args.difficulty.parse()?;
    let board = Board::from_string(&args.board)?;
    let report = analyze_position(&board, difficulty);

    output::print_section("Position");
    print!("{}", output::render_board(&board));

    if let Some(outcome) = &report.outcome {
        output::print_kv("Outcome", outcome);
    } else {
        output::print_kv("Heuristic", &report.heuristic.to_string());
        output::print_kv("Search depth", &report.search_depth.to_string());
        output::print_kv(
            "Computer threats",
            &format_positions(&report.computer_threats),
        );
        output::print_kv("Human threats", &format_positions(&report.human_threats));

        println!("\nMove scores (computer to move, lower is better):");
        for mv in &report.move_scores {
            println!(
                "  row {}, column {}: {}",
                mv.row + 1,
                mv.column + 1,
                mv.score
            );
        }

        if let Some(chosen) = &report.chosen {
            output::print_kv(
                "Engine choice",
                &format!("row {}, column {}", chosen.row + 1, chosen.column + 1),
            );
        }
    }

    if let Some(path) = args.export {
        let file =
            File::create(&path).with_context(|| format!("create report at {}", path.display()))?;
        serde_json::to_writer_pretty(file, &report)
            .with_context(|| format!("write report to {}", path.display()))?;
        println!("\nReport exported to: {}", path.display());
    }

    Ok(())
}

fn analyze_position(board: &Board, difficulty: Difficulty) -> AnalysisReport {
    let outcome = match board.winner() {
        Some(Mark::Human) => Some("human win".to_string()),
        Some(Mark::Computer) => Some("computer win".to_string()),
        None if board.is_full() => Some("draw".to_string()),
        None => None,
    };

    let depth = difficulty.effective_depth(board.empty_count());
    let mut move_scores = Vec::new();
    let mut chosen = None;

    if outcome.is_none() {
        let mut scratch = *board;
        for pos in scratch.empty_positions() {
            scratch.cells[pos] = Cell::Computer;
            let score = move_search(&mut scratch, depth - 1, Mark::Computer);
            scratch.cells[pos] = Cell::Empty;
            move_scores.push(MoveScore {
                position: pos,
                row: pos / 3,
                column: pos % 3,
                score,
            });
        }

        let pos = computer_move(&mut scratch, depth);
        chosen = move_scores.iter().find(|mv| mv.position == pos).cloned();
    }

    AnalysisReport {
        board: board.encode(),
        difficulty: difficulty.to_string(),
        outcome,
        heuristic: evaluate(board),
        computer_threats: winning_moves(&board.cells, Mark::Computer),
        human_threats: winning_moves(&board.cells, Mark::Human),
        search_depth: depth,
        move_scores,
        chosen,
    }
}

fn format_positions(positions: &[usize]) -> String {
    if positions.is_empty() {
        return "none".to_string();
    }
    positions
        .iter()
        .map(|pos| format!("(row {}, column {})", pos / 3 + 1, pos % 3 + 1))
        .collect::<Vec<_>>()
        .join(", ")
}
