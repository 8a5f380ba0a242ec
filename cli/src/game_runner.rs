use std::io::{self, BufRead, Write};

use common::games::SessionRng;
use common::games::tictactoe::{
    GameStats, Outcome, TicTacToeGameState, calculate_move, parse_human_move, winning_line,
};
use common::log;

use crate::config::AiVsAiConfig;
use crate::console::{print_stats, prompt_mode, prompt_play_again, read_line, render_board};
use crate::mode::{GameMode, PlayerKind, Players};

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Menu number; `None` asks before every game.
    pub mode: Option<u8>,
    pub x_override: Option<PlayerKind>,
    pub o_override: Option<PlayerKind>,
    /// Fixed number of games; `None` asks after every game.
    pub games: Option<u32>,
    pub ai_vs_ai: AiVsAiConfig,
}

impl RunOptions {
    pub fn players_for(&self, mode: GameMode) -> Players {
        mode.players(&self.ai_vs_ai)
            .with_overrides(self.x_override, self.o_override)
    }
}

/// Plays games until the player declines or `games` is reached.
pub fn run<R: BufRead, W: Write>(
    options: &RunOptions,
    input: &mut R,
    output: &mut W,
    rng: &mut SessionRng,
) -> io::Result<GameStats> {
    let mut stats = GameStats::new();
    let mut played = 0;

    if options.games == Some(0) {
        return Ok(stats);
    }

    loop {
        let mode = match options.mode {
            Some(choice) => GameMode::from_choice(choice),
            None => prompt_mode(input, output)?,
        };
        let players = options.players_for(mode);
        log!("Starting game {} in {:?} with {:?}", played + 1, mode, players);

        let outcome = play_session(mode, players, input, output, rng)?;
        stats.record(outcome);
        played += 1;
        log!("Game {} finished: {:?}", played, outcome);

        print_stats(output, &stats)?;

        let again = match options.games {
            Some(games) => played < games,
            None => prompt_play_again(input, output)?,
        };
        if !again {
            break;
        }
    }

    Ok(stats)
}

pub fn play_session<R: BufRead, W: Write>(
    mode: GameMode,
    players: Players,
    input: &mut R,
    output: &mut W,
    rng: &mut SessionRng,
) -> io::Result<Outcome> {
    writeln!(output, "Welcome to Tic-Tac-Toe!")?;
    if players == mode.players(&AiVsAiConfig::default()) {
        writeln!(output, "{}", mode.description())?;
    } else {
        writeln!(output, "X is {}, O is {}.", players.x.label(), players.o.label())?;
    }
    if players.has_human() {
        writeln!(output, "Enter numbers 1-9 to make your move.")?;
    }

    let mut state = TicTacToeGameState::new();

    loop {
        render_board(output, &state.board)?;

        if state.is_over() {
            report_outcome(output, &state)?;
            return Ok(state.status);
        }

        let mark = state.current_mark;
        match players.for_mark(mark) {
            PlayerKind::Human => {
                write!(output, "Player {}, enter your move (1-9): ", mark.symbol())?;
                output.flush()?;

                let line = read_line(input)?.ok_or_else(|| {
                    io::Error::new(io::ErrorKind::UnexpectedEof, "input closed mid-game")
                })?;

                match parse_human_move(&line).and_then(|index| state.place_mark(index)) {
                    Ok(()) => log!("{:?} played cell {:?}", mark, state.last_move),
                    Err(e) => {
                        log!("Rejected move {:?} from {:?}: {}", line, mark, e);
                        writeln!(output, "Invalid move. Try again.")?;
                    }
                }
            }
            PlayerKind::Bot(bot_type) => {
                writeln!(output, "AI is thinking...")?;
                let index = calculate_move(bot_type, &state.board, mark, rng).ok_or_else(|| {
                    io::Error::other(format!("{:?} bot found no move on an unfinished board", bot_type))
                })?;
                state.place_mark(index).map_err(io::Error::other)?;
                log!("{:?} bot ({:?}) played cell {}", bot_type, mark, index);
            }
        }
    }
}

fn report_outcome<W: Write>(output: &mut W, state: &TicTacToeGameState) -> io::Result<()> {
    match state.status.winner() {
        Some(mark) => {
            writeln!(output, "{} wins!", mark.symbol())?;
            if let Some([a, b, c]) = winning_line(&state.board) {
                writeln!(output, "Winning line: {}-{}-{}", a + 1, b + 1, c + 1)?;
            }
        }
        None => writeln!(output, "It's a draw!")?,
    }
    Ok(())
}
