use crate::core::{PlayerId, Position};
use crate::game::GameSession;
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::stdout;

/// 碁盤の星の位置
const STAR_POINTS: [(usize, usize); 5] = [(3, 3), (3, 11), (7, 7), (11, 3), (11, 11)];

pub struct DisplayState {
    pub cursor: Position,
    pub status_msg: Option<String>,
    pub show_cursor: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cursor: Position::default(),
            status_msg: None,
            show_cursor: true,
        }
    }
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn render_board(session: &GameSession, state: &DisplayState) {
    let mut out = stdout();
    let board = session.board();

    // 画面クリア（スクロール防止）
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
    .unwrap();

    print!("=== Gomoku ===\r\n");
    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    print!("\r\n");

    // X軸ラベル
    print!("    ");
    for col in 0..board.size {
        print!("{:3}", col + 1);
    }
    print!("\r\n");

    print!("   +{}+\r\n", "---".repeat(board.size));

    for row in 0..board.size {
        print!("{:2} |", row + 1);
        for col in 0..board.size {
            let pos = Position::new(row, col);
            let stone = board.stone_at(pos);

            let is_cursor = state.show_cursor && state.cursor == pos;
            let is_last_move = session.last_move() == Some(pos);

            let char_str = match stone {
                Some(PlayerId::Black) => "X",
                Some(PlayerId::White) => "O",
                None if STAR_POINTS.contains(&(row, col)) => "+",
                None => ".",
            };

            let (prefix, suffix) = if is_cursor {
                ("[", "]")
            } else if is_last_move {
                ("{", "}")
            } else {
                (" ", " ")
            };

            let cell_text = format!("{}{}{}", prefix, char_str, suffix);

            if is_cursor {
                print!("{}", cell_text.yellow());
            } else if is_last_move {
                print!("{}", cell_text.red());
            } else {
                match stone {
                    Some(PlayerId::Black) => print!("{}", cell_text.cyan()),
                    Some(PlayerId::White) => print!("{}", cell_text.magenta()),
                    None => print!("{}", cell_text),
                }
            }
        }
        print!("|\r\n");
    }
    print!("   +{}+\r\n", "---".repeat(board.size));

    print!(
        "Moves: {}  Turn: {}\r\n",
        session.move_count(),
        session.current_player()
    );
}
