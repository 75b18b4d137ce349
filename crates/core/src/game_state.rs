//! Game state module - the session state machine
//!
//! A [`GameSession`] owns the field, the current and next piece, the score
//! progression, the drop timer and the high-score store. It advances one
//! stage per [`GameSession::tick`] and reacts to discrete actions through
//! [`GameSession::handle_input`]; it never sleeps and never blocks.
//!
//! ```text
//! StartWait --Start--> Spawn --ok--> Moving --due--> Shifting --moved--> Moving
//!                        |                              |
//!                        |                           blocked
//!                      no room                          v
//!                        v                          Attaching --> Spawn
//!                     GameOver
//! ```

use std::time::{Duration, Instant};

use tracing::debug;

use crate::board::Board;
use crate::highscore::HighScoreStore;
use crate::matrix::Matrix;
use crate::movement::{self, hard_drop, move_down, move_left, move_right};
use crate::pieces::Piece;
use crate::rng::PieceGenerator;
use crate::scoring::Progress;
use crate::snapshot::{write_preview, GameInfo};
use crate::types::{GameStage, GameStatus, PieceKind, UserAction, BLOCK};

/// How [`GameSession::spawn_new_piece`] fills the piece slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnMode {
    /// Only draw the next piece (session start)
    Initial,
    /// Promote next to current, then draw a fresh next piece
    Normal,
}

/// One game, from initialization to shutdown
#[derive(Debug)]
pub struct GameSession<S: HighScoreStore> {
    board: Board,
    current: Option<Piece>,
    next: Piece,
    preview: Matrix,
    generator: PieceGenerator,
    progress: Progress,
    /// High score as read from the store at start
    high_score: u32,
    status: GameStatus,
    stage: GameStage,
    started: bool,
    /// Last gravity step; `None` means the next check is due immediately
    drop_reference: Option<Instant>,
    info: GameInfo,
    store: S,
    persisted: bool,
}

impl<S: HighScoreStore> GameSession<S> {
    /// Create a session seeded from the wall clock
    pub fn new(store: S) -> Self {
        Self::with_generator(PieceGenerator::from_clock(), store)
    }

    /// Create a session with a fixed RNG seed
    pub fn with_seed(seed: u32, store: S) -> Self {
        Self::with_generator(PieceGenerator::new(seed), store)
    }

    fn with_generator(generator: PieceGenerator, store: S) -> Self {
        let high_score = store.read_high_score();
        let mut session = Self {
            board: Board::new(),
            current: None,
            // Placeholder; the initial spawn below makes the first draw
            next: Piece::new(PieceKind::I),
            preview: Matrix::new(BLOCK, BLOCK),
            generator,
            progress: Progress::new(),
            high_score,
            status: GameStatus::Running,
            stage: GameStage::StartWait,
            started: false,
            drop_reference: None,
            info: GameInfo::new(),
            store,
            persisted: false,
        };
        session.spawn_new_piece(SpawnMode::Initial);
        session.refresh_info();
        debug!(
            seed = session.generator.seed(),
            high_score, "session initialized"
        );
        session
    }

    /// Fill the piece slots. Returns false if the promoted piece has no room.
    ///
    /// On failure the next piece is left untouched and no current piece is set.
    pub fn spawn_new_piece(&mut self, mode: SpawnMode) -> bool {
        match mode {
            SpawnMode::Initial => {
                self.next = Piece::new(self.generator.draw());
                write_preview(&mut self.preview, &self.next);
                true
            }
            SpawnMode::Normal => {
                let candidate = Piece::new(self.next.kind);
                if !self.board.can_place(&candidate) {
                    self.current = None;
                    return false;
                }
                self.current = Some(candidate);
                self.next = Piece::new(self.generator.draw());
                write_preview(&mut self.preview, &self.next);
                debug!(current = ?candidate.kind, next = ?self.next.kind, "spawned");
                true
            }
        }
    }

    /// Advance the state machine one stage using the monotonic clock
    pub fn tick(&mut self) -> &GameInfo {
        self.tick_at(Instant::now())
    }

    /// Advance the state machine one stage as if the clock read `now`
    pub fn tick_at(&mut self, now: Instant) -> &GameInfo {
        if self.stage.is_terminal() {
            self.finish();
            self.refresh_info();
            return &self.info;
        }
        if !self.started || self.stage == GameStage::Paused {
            return &self.info;
        }

        match self.stage {
            GameStage::Spawn => {
                if self.spawn_new_piece(SpawnMode::Normal) {
                    self.stage = GameStage::Moving;
                } else {
                    debug!(score = self.progress.score(), "no room to spawn, game over");
                    self.stage = GameStage::GameOver;
                    self.finish();
                }
            }
            GameStage::Moving => {
                if self.drop_due(now) {
                    self.drop_reference = Some(now);
                    self.stage = GameStage::Shifting;
                }
            }
            GameStage::Shifting => {
                let moved = match self.current.as_mut() {
                    Some(piece) => move_down(&self.board, piece),
                    None => false,
                };
                self.stage = if moved {
                    GameStage::Moving
                } else {
                    GameStage::Attaching
                };
            }
            GameStage::Attaching => {
                self.attach();
                self.stage = GameStage::Spawn;
            }
            // Start moves StartWait to Spawn itself; unstarted and paused
            // sessions returned above.
            GameStage::StartWait
            | GameStage::Paused
            | GameStage::Terminated
            | GameStage::GameOver => {}
        }

        self.refresh_info();
        &self.info
    }

    /// Apply one user action. `hold` only matters for [`UserAction::Down`]
    pub fn handle_input(&mut self, action: UserAction, hold: bool) {
        match action {
            UserAction::Start => self.start(),
            UserAction::Pause => self.toggle_pause(),
            UserAction::Terminate => {
                debug!(score = self.progress.score(), "terminate requested");
                self.finish();
                self.stage = GameStage::GameOver;
                self.refresh_info();
            }
            UserAction::Left => {
                self.with_moving_piece(move_left);
            }
            UserAction::Right => {
                self.with_moving_piece(move_right);
            }
            UserAction::Action => {
                self.with_moving_piece(|board, piece| movement::rotate(board, piece).is_success());
            }
            UserAction::Down if hold => {
                self.with_moving_piece(|board, piece| {
                    hard_drop(board, piece);
                    true
                });
            }
            UserAction::Down | UserAction::Up => {}
        }
    }

    /// End the session, handing back the store
    pub fn shutdown(self) -> S {
        debug!(score = self.progress.score(), "session shut down");
        self.store
    }

    fn start(&mut self) {
        match self.stage {
            GameStage::StartWait => {}
            GameStage::GameOver => self.restart(),
            _ => return,
        }
        self.started = true;
        self.stage = GameStage::Spawn;
        debug!("game started");
    }

    fn restart(&mut self) {
        self.board.clear();
        self.progress.reset();
        self.current = None;
        self.high_score = self.store.read_high_score();
        self.status = GameStatus::Running;
        self.drop_reference = None;
        self.persisted = false;
        self.spawn_new_piece(SpawnMode::Initial);
        self.refresh_info();
        debug!(high_score = self.high_score, "game restarted");
    }

    fn toggle_pause(&mut self) {
        match self.stage {
            GameStage::Moving => {
                self.stage = GameStage::Paused;
                self.status = GameStatus::Paused;
            }
            GameStage::Paused => {
                self.stage = GameStage::Moving;
                self.status = GameStatus::Running;
            }
            _ => return,
        }
        self.info.status = self.status;
    }

    fn with_moving_piece<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&Board, &mut Piece) -> bool,
    {
        if self.stage != GameStage::Moving {
            return false;
        }
        match self.current.as_mut() {
            Some(piece) => f(&self.board, piece),
            None => false,
        }
    }

    fn drop_due(&self, now: Instant) -> bool {
        let interval = Duration::from_millis(u64::from(self.progress.speed_ms()));
        match self.drop_reference {
            None => true,
            Some(reference) => now.saturating_duration_since(reference) >= interval,
        }
    }

    fn attach(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };
        self.board.lock_piece(&piece);

        let cleared = self.board.clear_full_rows();
        if cleared.is_empty() {
            return;
        }
        let result = self.progress.apply_lines(cleared.len());
        debug!(
            lines = result.lines,
            points = result.points,
            score = self.progress.score(),
            "rows cleared"
        );
        if result.level_changed {
            debug!(
                level = self.progress.level(),
                speed_ms = self.progress.speed_ms(),
                "level up"
            );
        }
    }

    /// Persist the score if it improved (once per game) and mark the game over
    fn finish(&mut self) {
        self.status = GameStatus::Terminated;
        if self.persisted {
            return;
        }
        self.persisted = true;

        let score = self.progress.score();
        if score > self.store.read_high_score() && self.store.write_high_score(score) {
            debug!(score, "new high score stored");
        }
    }

    fn refresh_info(&mut self) {
        self.info.compose_field(&self.board, self.current.as_ref());
        self.info.next.copy_from(&self.preview);
        self.info.set_progress(&self.progress);
        self.info.high_score = self.high_score;
        self.info.status = self.status;
    }

    /// Last snapshot produced
    pub fn info(&self) -> &GameInfo {
        &self.info
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct field access for setting up positions (tests and tooling)
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current_piece(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    /// Replace the falling piece (tests and tooling)
    pub fn set_current_piece(&mut self, piece: Piece) {
        self.current = Some(piece);
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn stage(&self) -> GameStage {
        self.stage
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.progress.score()
    }

    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    pub fn speed_ms(&self) -> u32 {
        self.progress.speed_ms()
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
