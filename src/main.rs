use crossterm::{execute, terminal};
use gomoku_tui::core::PlayerId;
use gomoku_tui::game::Game;
use gomoku_tui::player::{Difficulty, HeuristicAi, PlayerController, TuiController};
use std::io;

fn main() -> anyhow::Result<()> {
    // ターミナル初期化
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;

    let res = run();

    // ターミナル復帰
    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

fn run() -> anyhow::Result<()> {
    use crossterm::event::{self, Event, KeyCode};
    use std::time::Duration;

    print!("=== Gomoku (five in a row) ===\r\n");

    print!("\r\nSelect mode:\r\n");
    print!("1. Human vs Human\r\n");
    print!("2. Human vs AI\r\n");

    let vs_ai = loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('1') => break false,
                    KeyCode::Char('2') => break true,
                    KeyCode::Char('q') => return Ok(()),
                    _ => {}
                }
            }
        }
    };

    let white: Box<dyn PlayerController> = if vs_ai {
        print!("\r\nSelect difficulty:\r\n");
        print!("1. Easy (random)\r\n");
        print!("2. Medium (defensive)\r\n");
        print!("3. Hard (offensive)\r\n");

        let difficulty = loop {
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('1') => break Difficulty::Easy,
                        KeyCode::Char('2') => break Difficulty::Medium,
                        KeyCode::Char('3') => break Difficulty::Hard,
                        KeyCode::Char('q') => return Ok(()),
                        _ => {}
                    }
                }
            }
        };
        Box::new(HeuristicAi::new(difficulty, "AI"))
    } else {
        Box::new(TuiController::new(PlayerId::White, "White"))
    };

    let black = TuiController::new(PlayerId::Black, "Black");

    let mut game = Game::new();
    game.play(&black, white.as_ref());

    Ok(())
}
