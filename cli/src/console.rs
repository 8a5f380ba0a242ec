use std::io::{self, BufRead, Write};

use common::games::tictactoe::{BOARD_CELLS, Board, GameStats};

use crate::mode::GameMode;

pub fn render_board<W: Write>(output: &mut W, board: &Board) -> io::Result<()> {
    writeln!(output)?;
    for (index, mark) in board.cells().iter().enumerate() {
        write!(output, " {} ", mark.symbol())?;
        if (index + 1) % 3 != 0 {
            write!(output, "|")?;
        } else if index != BOARD_CELLS - 1 {
            write!(output, "\n---+---+---\n")?;
        }
    }
    write!(output, "\n\n")
}

/// One line without its terminator, or `None` once input is exhausted.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

pub fn prompt_mode<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<GameMode> {
    writeln!(output, "Select game mode:")?;
    writeln!(output, "1. Player vs Player")?;
    writeln!(output, "2. Player vs AI (Easy)")?;
    writeln!(output, "3. Player vs AI (Hard)")?;
    writeln!(output, "4. AI vs AI")?;
    write!(output, "Enter choice (1-4): ")?;
    output.flush()?;

    let line = read_line(input)?
        .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no game mode selected"))?;
    let choice = line.trim().parse::<u8>().unwrap_or(0);
    Ok(GameMode::from_choice(choice))
}

/// Closed input counts as "no".
pub fn prompt_play_again<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "\nPlay again? (y/n): ")?;
    output.flush()?;
    let answer = read_line(input)?.unwrap_or_default();
    Ok(matches!(answer.trim(), "y" | "Y"))
}

pub fn print_stats<W: Write>(output: &mut W, stats: &GameStats) -> io::Result<()> {
    writeln!(output, "\nGame Statistics:")?;
    writeln!(output, "X Wins: {}", stats.x_wins)?;
    writeln!(output, "O Wins: {}", stats.o_wins)?;
    writeln!(output, "Draws: {}", stats.draws)?;
    writeln!(output, "Total Games: {}", stats.total_games)
}
