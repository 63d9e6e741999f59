use super::{RandomStrategy, Strategy};
use crate::core::Position;
use crate::game::GameSession;
use crate::logic;

/// 相手の5連を塞ぐ。行優先で走査し最初に見つかったマスを返す (最善手探索はしない)。
/// 塞ぐべきマスがなければランダムに落ちる。
pub struct DefensiveStrategy;

impl Strategy for DefensiveStrategy {
    fn propose(&self, session: &mut GameSession) -> Option<Position> {
        let opponent = session.current_player().opponent();

        for pos in session.board().vacant_positions() {
            // 相手の石を仮置きして5連が成立するか確認
            let blocks = session.speculate(pos, opponent, |board| logic::check_win(board, pos));
            if blocks {
                return Some(pos);
            }
        }

        RandomStrategy.propose(session)
    }
}
