use crate::core::{PlayerId, Position};
use crate::display::{render_board, DisplayState};
use crate::game::{GameSession, BOARD_SIZE};
use crate::player::{PlayerAction, PlayerController};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;

pub struct TuiController {
    player_id: PlayerId,
    name: String,
}

impl TuiController {
    pub fn new(player_id: PlayerId, name: &str) -> Self {
        Self {
            player_id,
            name: name.to_string(),
        }
    }
}

impl PlayerController for TuiController {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_action(&self, session: &mut GameSession) -> PlayerAction {
        let mut state = DisplayState::default();
        state.status_msg = Some(format!("{}'s turn ({})", self.name, self.player_id));

        // 初期カーソルは直前の着手位置、なければ天元
        state.cursor = session
            .last_move()
            .unwrap_or(Position::new(BOARD_SIZE / 2, BOARD_SIZE / 2));

        loop {
            render_board(session, &state);
            print!("[Arrows]: Move | [Enter]: Place | [u]: Undo | [r]: Restart | [q]: Quit\r\n");

            if event::poll(Duration::from_millis(100)).unwrap_or(false) {
                if let Ok(Event::Key(KeyEvent { code, .. })) = event::read() {
                    match code {
                        KeyCode::Char('q') => return PlayerAction::Resign,
                        KeyCode::Char('u') => {
                            if session.move_count() > 0 {
                                return PlayerAction::Undo;
                            }
                        }
                        KeyCode::Char('r') => return PlayerAction::Reset,
                        KeyCode::Up => {
                            if state.cursor.row > 0 {
                                state.cursor.row -= 1;
                            }
                        }
                        KeyCode::Down => {
                            if state.cursor.row < BOARD_SIZE - 1 {
                                state.cursor.row += 1;
                            }
                        }
                        KeyCode::Left => {
                            if state.cursor.col > 0 {
                                state.cursor.col -= 1;
                            }
                        }
                        KeyCode::Right => {
                            if state.cursor.col < BOARD_SIZE - 1 {
                                state.cursor.col += 1;
                            }
                        }
                        KeyCode::Enter | KeyCode::Char(' ') => {
                            // 着手済みマスは無視してカーソル操作を続ける
                            if session.cell(state.cursor).is_none() {
                                return PlayerAction::Place(state.cursor);
                            }
                        }
                        _ => {}
                    }
                }
            }
        }
    }
}
