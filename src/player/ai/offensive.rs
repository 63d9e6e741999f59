use super::{DefensiveStrategy, Strategy};
use crate::core::Position;
use crate::game::GameSession;
use crate::logic;

/// 自分の5連を完成させる手があれば打つ (行優先・先着順)。
/// なければ守備戦略 (さらにランダム) に落ちる。
pub struct OffensiveStrategy;

impl Strategy for OffensiveStrategy {
    fn propose(&self, session: &mut GameSession) -> Option<Position> {
        let player = session.current_player();

        for pos in session.board().vacant_positions() {
            let wins = session.speculate(pos, player, |board| logic::check_win(board, pos));
            if wins {
                return Some(pos);
            }
        }

        DefensiveStrategy.propose(session)
    }
}
