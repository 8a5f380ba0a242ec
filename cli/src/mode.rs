use clap::ValueEnum;
use common::games::tictactoe::{BotType, Mark};

use crate::config::AiVsAiConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsAiEasy,
    PlayerVsAiHard,
    AiVsAi,
}

impl GameMode {
    /// Menu numbering. Anything unrecognised plays the easy AI.
    pub fn from_choice(choice: u8) -> Self {
        match choice {
            1 => GameMode::PlayerVsPlayer,
            2 => GameMode::PlayerVsAiEasy,
            3 => GameMode::PlayerVsAiHard,
            4 => GameMode::AiVsAi,
            _ => GameMode::PlayerVsAiEasy,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "Player vs Player mode.",
            GameMode::PlayerVsAiEasy => "You are X, AI is O (easy level).",
            GameMode::PlayerVsAiHard => "You are X, AI is O (hard level).",
            GameMode::AiVsAi => "AI vs AI mode.",
        }
    }

    pub fn players(&self, ai_vs_ai: &AiVsAiConfig) -> Players {
        match self {
            GameMode::PlayerVsPlayer => Players::new(PlayerKind::Human, PlayerKind::Human),
            GameMode::PlayerVsAiEasy => {
                Players::new(PlayerKind::Human, PlayerKind::Bot(BotType::Random))
            }
            GameMode::PlayerVsAiHard => {
                Players::new(PlayerKind::Human, PlayerKind::Bot(BotType::Optimal))
            }
            GameMode::AiVsAi => Players::new(
                PlayerKind::Bot(ai_vs_ai.x),
                PlayerKind::Bot(ai_vs_ai.o),
            ),
        }
    }
}

/// Who supplies the moves for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Bot(BotType),
}

impl PlayerKind {
    pub fn label(&self) -> &'static str {
        match self {
            PlayerKind::Human => "a human player",
            PlayerKind::Bot(BotType::Random) => "the random AI",
            PlayerKind::Bot(BotType::Optimal) => "the optimal AI",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Players {
    pub x: PlayerKind,
    pub o: PlayerKind,
}

impl Players {
    pub fn new(x: PlayerKind, o: PlayerKind) -> Self {
        Self { x, o }
    }

    pub fn for_mark(&self, mark: Mark) -> PlayerKind {
        if mark == Mark::O { self.o } else { self.x }
    }

    pub fn has_human(&self) -> bool {
        self.x == PlayerKind::Human || self.o == PlayerKind::Human
    }

    pub fn with_overrides(self, x: Option<PlayerKind>, o: Option<PlayerKind>) -> Self {
        Self {
            x: x.unwrap_or(self.x),
            o: o.unwrap_or(self.o),
        }
    }
}

/// Command-line spelling of a `PlayerKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerArg {
    Human,
    Random,
    Optimal,
}

impl From<PlayerArg> for PlayerKind {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::Human => PlayerKind::Human,
            PlayerArg::Random => PlayerKind::Bot(BotType::Random),
            PlayerArg::Optimal => PlayerKind::Bot(BotType::Optimal),
        }
    }
}
