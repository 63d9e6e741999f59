use crate::core::{Board, PlayerId, Position};
use crate::display::DisplayState;
use crate::logic;
use crate::player::{PlayerAction, PlayerController};
use serde::{Deserialize, Serialize};

/// 五目並べの盤サイズ
pub const BOARD_SIZE: usize = 15;

/// 対局結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win(PlayerId),
    Draw,
}

/// 1対局分の状態 (盤面 + 棋譜 + 手番)
///
/// 状態の変更は apply_move / undo_move / reset のみ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    moves: Vec<Position>,
    current_player: PlayerId,
    outcome: Option<Outcome>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        GameSession {
            board: Board::new(BOARD_SIZE),
            moves: Vec::new(),
            current_player: PlayerId::Black,
            outcome: None,
        }
    }

    pub fn reset(&mut self) {
        *self = GameSession::new();
    }

    /// 着手。成功時はtrue、終局済みか着手済みマスならfalse (区別しない)。
    pub fn apply_move(&mut self, pos: Position) -> bool {
        if self.outcome.is_some() || !self.board.is_vacant(pos) {
            return false;
        }

        self.board.place_stone(pos, self.current_player);
        self.board.last_move = Some(pos);
        self.moves.push(pos);

        if logic::check_win(&self.board, pos) {
            self.outcome = Some(Outcome::Win(self.current_player));
        } else if self.moves.len() == self.board.size * self.board.size {
            self.outcome = Some(Outcome::Draw);
        }

        // 終局した手でも手番は交代する
        self.current_player = self.current_player.opponent();
        true
    }

    /// 直前の1手を取り消す。棋譜が空ならfalse。
    ///
    /// 終局フラグは無条件でクリアし、勝敗の再判定はしない。
    pub fn undo_move(&mut self) -> bool {
        let pos = match self.moves.pop() {
            Some(p) => p,
            None => return false,
        };

        self.board.remove_stone(pos);
        self.current_player = self.current_player.opponent();
        self.outcome = None;
        self.board.last_move = self.moves.last().copied();
        true
    }

    /// 仮置き評価。evalの間だけposにplayerの石が置かれ、復帰前に必ず除去される。
    /// 棋譜には一切触れない。
    pub fn speculate<R>(
        &mut self,
        pos: Position,
        player: PlayerId,
        eval: impl FnOnce(&Board) -> R,
    ) -> R {
        logic::with_trial_stone(&mut self.board, pos, player, eval)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, pos: Position) -> Option<PlayerId> {
        self.board.stone_at(pos)
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// 勝敗。終局していなければNone。
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn last_move(&self) -> Option<Position> {
        self.board.last_move
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }
}

pub struct Game {
    pub session: GameSession,
}

impl Game {
    pub fn new() -> Self {
        Game {
            session: GameSession::new(),
        }
    }

    /// 対局ループ。終局後は r で再戦、q で終了。
    pub fn play(&mut self, black: &dyn PlayerController, white: &dyn PlayerController) {
        loop {
            if self.session.is_terminal() {
                if !self.show_result() {
                    break;
                }
                continue;
            }

            let controller = match self.session.current_player() {
                PlayerId::Black => black,
                PlayerId::White => white,
            };

            if controller.is_ai() {
                let mut state = DisplayState::default();
                state.show_cursor = false;
                state.status_msg = Some(format!(
                    "{} ({}) is thinking...",
                    controller.name(),
                    self.session.current_player()
                ));
                crate::display::render_board(&self.session, &state);

                // 思考ウェイト中に終了判定
                let timeout = std::time::Duration::from_millis(600);
                if crossterm::event::poll(timeout).unwrap_or(false) {
                    if let Ok(crossterm::event::Event::Key(key)) = crossterm::event::read() {
                        if key.code == crossterm::event::KeyCode::Char('q') {
                            break;
                        }
                    }
                }
            }

            match controller.choose_action(&mut self.session) {
                PlayerAction::Place(pos) => {
                    // 着手できないマスの指定は無視
                    self.session.apply_move(pos);
                }
                PlayerAction::Undo => {
                    self.session.undo_move();
                }
                PlayerAction::Reset => {
                    self.session.reset();
                }
                PlayerAction::Resign => break,
            }
        }
    }

    /// 結果表示。再戦ならtrue、終了ならfalse。
    fn show_result(&mut self) -> bool {
        use crossterm::event::{self, Event, KeyCode};

        let msg = match self.session.outcome() {
            Some(Outcome::Win(player)) => format!("{} wins!", player),
            Some(Outcome::Draw) => "Draw!".to_string(),
            None => return true,
        };

        let mut state = DisplayState::default();
        state.show_cursor = false;
        state.status_msg = Some(format!("{} [r]: Restart | [u]: Undo | [q]: Quit", msg));
        crate::display::render_board(&self.session, &state);

        loop {
            if let Ok(Event::Key(key)) = event::read() {
                match key.code {
                    KeyCode::Char('r') => {
                        self.session.reset();
                        return true;
                    }
                    KeyCode::Char('u') => {
                        self.session.undo_move();
                        return true;
                    }
                    KeyCode::Char('q') => return false,
                    _ => {}
                }
            }
        }
    }
}
