//! Interactive console front end and command loop.
//!
//! Parses player commands, validates moves against the board before
//! committing them, routes Black's turn to an engine when one is configured,
//! and handles saving, loading and the pass-the-device screen.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use crate::config::{ConsoleConfig, Opponent};
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::ChessResult;
use crate::game_state::board::GameStatus;
use crate::game_state::chess_types::{Board, Colour, Square};
use crate::move_generation::legal_move_generator::valid_destinations;
use crate::moves::move_descriptions::ProposedMove;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::event_log::EventLog;
use crate::utils::move_list_json::{load_game, save_game};
use crate::utils::render_game_state::render_game_state;

const HELP_TEXT: &str = "\
new                | Start a new game.
move <start> <end> | Move a piece, e.g. move e2 e4.
moves <square>     | List where one of your pieces can go.
board              | Show the board again.
history            | List the moves played so far.
save <file-name>   | Save the current game.
load <file-name>   | Load a saved game.
log                | Show the event log.
log clear          | Empty the event log.
help               | See valid commands.
quit               | Quit.";

const PASS_SCREEN_LINES: usize = 50;

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    /// Blank the screen and wait for the next player before showing the board.
    PassDevice,
    Quit,
}

pub fn run_stdio_loop(config: ConsoleConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = ConsoleSession::new(config);

    if let Some(name) = session.config.load.clone() {
        if session.load(&name, &mut stdout)? {
            session.play_engine_turns(&mut stdout)?;
        }
    }
    session.display_board(&mut stdout)?;
    writeln!(stdout, "{HELP_TEXT}")?;
    stdout.flush()?;

    let mut lines = stdin.lock().lines();
    while let Some(line) = lines.next() {
        let line = line?;
        match session.handle_command(&line, &mut stdout)? {
            CommandOutcome::Continue => {}
            CommandOutcome::PassDevice => {
                write!(stdout, "{}", "\n".repeat(PASS_SCREEN_LINES))?;
                writeln!(
                    stdout,
                    "[@] Pass the device to {}, then press ENTER to continue.",
                    session.board.current_player()
                )?;
                stdout.flush()?;
                if lines.next().transpose()?.is_none() {
                    break;
                }
                session.display_board(&mut stdout)?;
            }
            CommandOutcome::Quit => break,
        }
        stdout.flush()?;
    }

    Ok(())
}

pub struct ConsoleSession {
    config: ConsoleConfig,
    board: Board,
    engine: Option<Box<dyn Engine>>,
    event_log: EventLog,
}

impl ConsoleSession {
    pub fn new(config: ConsoleConfig) -> Self {
        let engine: Option<Box<dyn Engine>> = match config.opponent {
            Opponent::Human => None,
            Opponent::Random => Some(Box::new(match config.seed {
                Some(seed) => RandomEngine::seeded(seed),
                None => RandomEngine::new(),
            })),
        };

        let mut event_log = EventLog::new();
        event_log.log_event("New game started.");

        Self {
            config,
            board: Board::new_standard(),
            engine,
            event_log,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<CommandOutcome> {
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            return Ok(CommandOutcome::Continue);
        };
        let args: Vec<&str> = parts.collect();

        match cmd.to_ascii_lowercase().as_str() {
            "move" => return self.handle_move(&args, out),
            "moves" => self.handle_moves(&args, out)?,
            "new" => {
                self.board = Board::new_standard();
                if let Some(engine) = self.engine.as_mut() {
                    engine.new_game();
                }
                self.event_log.log_event("New game started.");
                self.display_board(out)?;
            }
            "board" => self.display_board(out)?,
            "history" => self.display_history(out)?,
            "save" => match args.as_slice() {
                [name] => self.save(name, out)?,
                _ => writeln!(out, "[!] Command did not match: save <file-name>")?,
            },
            "load" => match args.as_slice() {
                [name] => {
                    if self.load(name, out)? {
                        self.play_engine_turns(out)?;
                        self.display_board(out)?;
                    }
                }
                _ => writeln!(out, "[!] Command did not match: load <file-name>")?,
            },
            "log" => match args.as_slice() {
                [] => self.display_log(out)?,
                ["clear"] => {
                    self.event_log.clear();
                    self.display_log(out)?;
                }
                _ => writeln!(out, "[!] Command did not match: log [clear]")?,
            },
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "quit" | "exit" => {
                self.display_log(out)?;
                return Ok(CommandOutcome::Quit);
            }
            _ => writeln!(out, "[!] Input a valid command.")?,
        }

        Ok(CommandOutcome::Continue)
    }

    fn handle_move(&mut self, args: &[&str], out: &mut impl Write) -> io::Result<CommandOutcome> {
        if self.board.is_game_over() {
            writeln!(out, "[!] The game has ended.")?;
            return Ok(CommandOutcome::Continue);
        }

        let [start, end] = args else {
            writeln!(out, "[!] Command did not match: move <start> <end>")?;
            return Ok(CommandOutcome::Continue);
        };

        let mv = match parse_move(start, end) {
            Ok(mv) => mv,
            Err(err) => {
                writeln!(out, "[!] {err}")?;
                return Ok(CommandOutcome::Continue);
            }
        };

        if let Err(err) = self.play(mv) {
            writeln!(out, "[!] {err}")?;
            return Ok(CommandOutcome::Continue);
        }

        if self.board.is_game_over() {
            self.display_board(out)?;
            return Ok(CommandOutcome::Continue);
        }

        if self.engine_to_move() {
            self.play_engine_turns(out)?;
            self.display_board(out)?;
            return Ok(CommandOutcome::Continue);
        }

        if self.config.no_pass_screen {
            self.display_board(out)?;
            Ok(CommandOutcome::Continue)
        } else {
            Ok(CommandOutcome::PassDevice)
        }
    }

    fn play(&mut self, mv: ProposedMove) -> ChessResult<()> {
        let player = self.board.current_player();
        let game_over = self.board.try_commit(mv)?;

        if let Some(last) = self.board.history().last() {
            self.event_log.log_event(format!("{player} played {last}."));
        }
        if game_over {
            self.event_log
                .log_event(format!("King captured. {player} wins."));
        }
        Ok(())
    }

    /// The engine plays Black while the game is live.
    fn engine_to_move(&self) -> bool {
        self.engine.is_some()
            && !self.board.is_game_over()
            && self.board.current_player() == Colour::Black
    }

    /// Let the engine move until it is a human's turn again.
    fn play_engine_turns(&mut self, out: &mut impl Write) -> io::Result<()> {
        while self.engine_to_move() {
            let plies = self.board.history().len();
            self.play_engine_reply(out)?;
            if self.board.history().len() == plies {
                break;
            }
        }
        Ok(())
    }

    fn play_engine_reply(&mut self, out: &mut impl Write) -> io::Result<()> {
        let Some(engine) = self.engine.as_mut() else {
            return Ok(());
        };

        let reply = match engine.choose_move(&self.board) {
            Ok(output) => {
                for line in &output.info_lines {
                    debug!(engine = engine.name(), "{line}");
                }
                output.best_move
            }
            Err(err) => {
                warn!(%err, "engine failed to choose a move");
                None
            }
        };
        let name = engine.name().to_owned();

        let Some(mv) = reply else {
            writeln!(out, "[@] {name} has no move to play.")?;
            return Ok(());
        };

        match self.play(mv) {
            Ok(()) => {
                if let Some(last) = self.board.history().last() {
                    writeln!(out, "[@] {name} plays {last}.")?;
                }
            }
            Err(err) => {
                warn!(%err, %mv, "engine proposed an illegal move");
                writeln!(out, "[!] {name} failed to move: {err}")?;
            }
        }
        Ok(())
    }

    fn handle_moves(&self, args: &[&str], out: &mut impl Write) -> io::Result<()> {
        let [name] = args else {
            writeln!(out, "[!] Command did not match: moves <square>")?;
            return Ok(());
        };

        let square = match algebraic_to_square(name) {
            Ok(square) => square,
            Err(err) => {
                writeln!(out, "[!] {err}")?;
                return Ok(());
            }
        };

        let player = self.board.current_player();
        match self.board.piece_at(square) {
            Some(piece) if piece.colour() == player => {
                let targets: Vec<String> = valid_destinations(piece, &self.board, square)
                    .into_iter()
                    .map(|target| target.to_string())
                    .collect();
                if targets.is_empty() {
                    writeln!(out, "[@] {} {square} cannot move.", piece.kind().prefix())?;
                } else {
                    writeln!(out, "[@] {} {square}: {}", piece.kind().prefix(), targets.join(" "))?;
                }
            }
            _ => writeln!(out, "[!] Not a {player} piece.")?,
        }
        Ok(())
    }

    fn save(&mut self, name: &str, out: &mut impl Write) -> io::Result<()> {
        let path = self.config.game_path(name);
        match save_game(&path, &self.board) {
            Ok(()) => {
                self.event_log.log_event(format!("Game saved to {}.", path.display()));
                writeln!(out, "[@] Saved to {}.", path.display())?;
            }
            Err(err) => {
                warn!(%err, path = %path.display(), "save failed");
                writeln!(out, "[!] Could not save {}: {err}", path.display())?;
            }
        }
        Ok(())
    }

    /// Replace the current game with a saved one. Returns whether it loaded.
    fn load(&mut self, name: &str, out: &mut impl Write) -> io::Result<bool> {
        let path = self.config.game_path(name);
        match load_game(&path) {
            Ok(board) => {
                self.board = board;
                if let Some(engine) = self.engine.as_mut() {
                    engine.new_game();
                }
                self.event_log.log_event(format!("Game loaded from {}.", path.display()));
                info!(path = %path.display(), "resumed saved game");
                writeln!(out, "[@] Loaded {}.", path.display())?;
                Ok(true)
            }
            Err(err) => {
                warn!(%err, path = %path.display(), "load failed");
                writeln!(out, "[!] Could not load {}: {err}", path.display())?;
                Ok(false)
            }
        }
    }

    fn perspective(&self) -> Colour {
        match self.engine {
            Some(_) => Colour::White,
            None => self.board.current_player(),
        }
    }

    pub fn display_board(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "{}",
            render_game_state(&self.board, self.perspective(), self.config.fog())
        )?;
        match self.board.status() {
            GameStatus::GameOver { winner } => writeln!(out, "[@] King captured. {winner} wins."),
            _ => writeln!(out, "[@] {} to play.", self.board.current_player()),
        }
    }

    fn display_history(&self, out: &mut impl Write) -> io::Result<()> {
        if self.board.history().is_empty() {
            return writeln!(out, "[@] No moves yet.");
        }
        for (index, pair) in self.board.history().chunks(2).enumerate() {
            match pair {
                [white, black] => writeln!(out, "{}. {white} {black}", index + 1)?,
                [white] => writeln!(out, "{}. {white}", index + 1)?,
                _ => {}
            }
        }
        Ok(())
    }

    fn display_log(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", self.event_log)
    }
}

fn parse_move(start: &str, end: &str) -> ChessResult<ProposedMove> {
    let start: Square = algebraic_to_square(start)?;
    let end: Square = algebraic_to_square(end)?;
    Ok(ProposedMove::new(start, end))
}
