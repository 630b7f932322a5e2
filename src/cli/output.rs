//! Output formatting and progress bars for the CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::engine::Board;

/// Render the board with 1-based row and column guides
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("    1   2   3\n");
    for row in 0..3 {
        if row > 0 {
            out.push_str("   ---+---+---\n");
        }
        let at = |column| board.get(Board::index(row, column)).to_char();
        out.push_str(&format!(
            "{}   {} | {} | {}\n",
            row + 1,
            at(0),
            at(1),
            at(2)
        ));
    }
    out
}

/// Create a progress bar for a multi-game run
pub fn create_game_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}
