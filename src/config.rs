//! Console configuration.
//!
//! Every option can come from a command-line flag; the data directory and
//! the opponent can also be set through the environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Who plays Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Opponent {
    /// Two people share one device.
    #[default]
    Human,
    /// Black replies with a uniformly random move.
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "hotseat_chess", version, about = "Two-player console chess with fog of war")]
pub struct ConsoleConfig {
    /// Directory holding saved games.
    #[arg(long, env = "HOTSEAT_DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,

    /// File extension of saved games.
    #[arg(long, default_value = "json")]
    pub extension: String,

    /// Show the whole board instead of only the squares the player can see.
    #[arg(long)]
    pub reveal: bool,

    #[arg(long, value_enum, env = "HOTSEAT_OPPONENT", default_value_t = Opponent::Human)]
    pub opponent: Opponent,

    /// Seed for the random opponent.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Saved game to resume at start-up.
    #[arg(long)]
    pub load: Option<String>,

    /// Do not blank the screen between turns.
    #[arg(long)]
    pub no_pass_screen: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            extension: "json".to_owned(),
            reveal: false,
            opponent: Opponent::Human,
            seed: None,
            load: None,
            no_pass_screen: false,
        }
    }
}

impl ConsoleConfig {
    /// `<data_dir>/<name>.<extension>`.
    pub fn game_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{name}.{}", self.extension))
    }

    #[inline]
    pub fn fog(&self) -> bool {
        !self.reveal
    }
}
