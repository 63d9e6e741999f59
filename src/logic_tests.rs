#[cfg(test)]
mod tests {
    use crate::core::{PlayerId, Position};
    use crate::game::{GameSession, Outcome, BOARD_SIZE};
    use crate::logic;
    use crate::player::ai::{select_move, Difficulty};

    fn play(session: &mut GameSession, moves: &[(usize, usize)]) {
        for &(row, col) in moves {
            assert!(
                session.apply_move(Position::new(row, col)),
                "move at ({}, {}) was rejected",
                row,
                col
            );
        }
    }

    /// Checkerboard-like tiling with no monochrome run longer than 2 on any
    /// of the 4 axes. Black cells are those with (col + 2*row) % 4 < 2.
    /// 113 black cells and 112 white cells, so with Black moving first the
    /// whole board can be filled by legal alternating moves.
    fn drawn_fill_order() -> Vec<(usize, usize)> {
        let mut blacks = Vec::new();
        let mut whites = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if (col + 2 * row) % 4 < 2 {
                    blacks.push((row, col));
                } else {
                    whites.push((row, col));
                }
            }
        }
        assert_eq!(blacks.len(), 113);
        assert_eq!(whites.len(), 112);

        let mut order = Vec::new();
        for i in 0..whites.len() {
            order.push(blacks[i]);
            order.push(whites[i]);
        }
        order.push(blacks[112]);
        order
    }

    #[test]
    fn test_move_count_matches_stones() {
        let mut session = GameSession::new();
        play(&mut session, &[(7, 7), (0, 0), (8, 8), (14, 14), (3, 11)]);

        let stones = (0..BOARD_SIZE)
            .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
            .filter(|&(r, c)| session.cell(Position::new(r, c)).is_some())
            .count();

        assert_eq!(session.move_count(), 5);
        assert_eq!(stones, session.move_count());
    }

    #[test]
    fn test_apply_to_occupied_cell_fails() {
        let mut session = GameSession::new();
        play(&mut session, &[(7, 7)]);

        let before = session.clone();
        assert!(!session.apply_move(Position::new(7, 7)));
        assert_eq!(session, before);
    }

    #[test]
    fn test_horizontal_five_wins_exactly_at_five() {
        let mut session = GameSession::new();
        // Black builds (7,3)..(7,6); White answers in a far column.
        play(
            &mut session,
            &[(7, 3), (0, 0), (7, 4), (1, 0), (7, 5), (2, 0), (7, 6)],
        );
        // Four in a row does not end the game.
        assert!(!session.is_terminal());

        play(&mut session, &[(3, 0), (7, 7)]);
        assert!(session.is_terminal());
        assert_eq!(session.outcome(), Some(Outcome::Win(PlayerId::Black)));
        // The turn flips even on the winning move.
        assert_eq!(session.current_player(), PlayerId::White);
    }

    #[test]
    fn test_apply_after_terminal_fails() {
        let mut session = GameSession::new();
        play(
            &mut session,
            &[
                (7, 3),
                (0, 0),
                (7, 4),
                (1, 0),
                (7, 5),
                (2, 0),
                (7, 6),
                (3, 0),
                (7, 7),
            ],
        );
        assert!(session.is_terminal());

        let before = session.clone();
        assert!(!session.apply_move(Position::new(10, 10)));
        assert_eq!(session, before);
    }

    #[test]
    fn test_vertical_five_wins() {
        let mut session = GameSession::new();
        play(
            &mut session,
            &[
                (3, 7),
                (0, 0),
                (4, 7),
                (0, 1),
                (5, 7),
                (0, 3),
                (6, 7),
                (0, 4),
                (7, 7),
            ],
        );
        assert_eq!(session.outcome(), Some(Outcome::Win(PlayerId::Black)));
    }

    #[test]
    fn test_diagonal_five_wins() {
        let mut session = GameSession::new();
        play(
            &mut session,
            &[
                (3, 3),
                (0, 0),
                (4, 4),
                (0, 1),
                (5, 5),
                (0, 3),
                (6, 6),
                (0, 4),
                (7, 7),
            ],
        );
        assert_eq!(session.outcome(), Some(Outcome::Win(PlayerId::Black)));
    }

    #[test]
    fn test_anti_diagonal_five_wins_for_white() {
        let mut session = GameSession::new();
        // Black scatters, White builds (3,11),(4,10),(5,9),(6,8),(7,7).
        play(
            &mut session,
            &[
                (0, 0),
                (3, 11),
                (0, 1),
                (4, 10),
                (0, 3),
                (5, 9),
                (0, 4),
                (6, 8),
                (14, 14),
                (7, 7),
            ],
        );
        assert_eq!(session.outcome(), Some(Outcome::Win(PlayerId::White)));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut session = GameSession::new();
        play(&mut session, &drawn_fill_order());

        assert_eq!(session.move_count(), BOARD_SIZE * BOARD_SIZE);
        assert!(session.is_terminal());
        assert_eq!(session.outcome(), Some(Outcome::Draw));
    }

    #[test]
    fn test_undo_on_empty_history_fails() {
        let mut session = GameSession::new();
        assert!(!session.undo_move());
        assert_eq!(session, GameSession::new());
    }

    #[test]
    fn test_undo_then_reapply_round_trip() {
        let mut session = GameSession::new();
        play(&mut session, &[(7, 7), (8, 8), (6, 6)]);

        let before = session.clone();
        assert!(session.undo_move());
        assert_eq!(session.move_count(), 2);
        assert_eq!(session.last_move(), Some(Position::new(8, 8)));
        assert_eq!(session.current_player(), PlayerId::Black);
        assert!(session.cell(Position::new(6, 6)).is_none());

        assert!(session.apply_move(Position::new(6, 6)));
        assert_eq!(session, before);
    }

    #[test]
    fn test_undo_clears_terminal_unconditionally() {
        let mut session = GameSession::new();
        play(
            &mut session,
            &[
                (7, 3),
                (0, 0),
                (7, 4),
                (1, 0),
                (7, 5),
                (2, 0),
                (7, 6),
                (3, 0),
                (7, 7),
            ],
        );
        assert!(session.is_terminal());

        assert!(session.undo_move());
        assert!(!session.is_terminal());
        assert_eq!(session.outcome(), None);
        assert_eq!(session.current_player(), PlayerId::Black);
        assert_eq!(session.last_move(), Some(Position::new(3, 0)));

        // Play resumes normally after the undo.
        assert!(session.apply_move(Position::new(10, 10)));
    }

    #[test]
    fn test_undo_to_empty_board_clears_last_move() {
        let mut session = GameSession::new();
        play(&mut session, &[(7, 7)]);
        assert!(session.undo_move());
        assert_eq!(session.last_move(), None);
        assert_eq!(session, GameSession::new());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut session = GameSession::new();
        play(&mut session, &[(7, 7), (8, 8), (6, 6)]);
        session.reset();
        assert_eq!(session, GameSession::new());
    }

    #[test]
    fn test_speculate_always_reverts() {
        let mut session = GameSession::new();
        play(&mut session, &[(7, 7), (8, 8)]);

        let before = session.clone();
        let seen = session.speculate(Position::new(0, 0), PlayerId::White, |board| {
            board.stone_at(Position::new(0, 0))
        });
        assert_eq!(seen, Some(PlayerId::White));
        assert_eq!(session, before);
    }

    #[test]
    fn test_check_win_on_vacant_cell_is_false() {
        let session = GameSession::new();
        assert!(!logic::check_win(session.board(), Position::new(7, 7)));
    }

    #[test]
    fn test_defensive_blocks_opponent_open_four() {
        let mut session = GameSession::new();
        // Black threatens at (0,0)..(0,3); the only extension is (0,4).
        play(
            &mut session,
            &[(0, 0), (5, 5), (0, 1), (5, 6), (0, 2), (5, 7), (0, 3)],
        );
        assert_eq!(session.current_player(), PlayerId::White);

        let before = session.clone();
        assert_eq!(
            select_move(Difficulty::Medium, &mut session),
            Some(Position::new(0, 4))
        );
        // Selection must not leave any trial stone behind.
        assert_eq!(session, before);
    }

    #[test]
    fn test_offensive_prefers_own_win_over_blocking() {
        let mut session = GameSession::new();
        // Both sides hold an open four; Black is to move.
        play(
            &mut session,
            &[
                (0, 0),
                (5, 5),
                (0, 1),
                (5, 6),
                (0, 2),
                (5, 7),
                (0, 3),
                (5, 8),
            ],
        );
        assert_eq!(session.current_player(), PlayerId::Black);

        assert_eq!(
            select_move(Difficulty::Hard, &mut session),
            Some(Position::new(0, 4))
        );
        // The defensive strategy from the same position blocks instead,
        // at the first extension in row-major order.
        assert_eq!(
            select_move(Difficulty::Medium, &mut session),
            Some(Position::new(5, 4))
        );
    }

    #[test]
    fn test_defensive_without_threat_picks_some_vacant_cell() {
        let mut session = GameSession::new();
        play(&mut session, &[(7, 7), (8, 8)]);

        let picked = select_move(Difficulty::Medium, &mut session)
            .expect("board is not full");
        assert!(session.cell(picked).is_none());
    }

    #[test]
    fn test_single_vacant_cell_is_always_chosen() {
        let mut session = GameSession::new();
        let order = drawn_fill_order();
        // Stop one ply short of the drawn fill; (14,13) stays vacant.
        play(&mut session, &order[..order.len() - 1]);
        assert!(!session.is_terminal());

        let last = Position::new(14, 13);
        assert_eq!(session.cell(last), None);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(select_move(difficulty, &mut session), Some(last));
        }
    }

    #[test]
    fn test_select_move_on_full_board_returns_none() {
        let mut session = GameSession::new();
        play(&mut session, &drawn_fill_order());

        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(select_move(difficulty, &mut session), None);
        }
    }

    #[test]
    fn test_session_survives_json_round_trip() {
        let mut session = GameSession::new();
        play(&mut session, &[(7, 7), (8, 8), (6, 6)]);

        let json = serde_json::to_string(&session).unwrap();
        let restored: GameSession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }
}
