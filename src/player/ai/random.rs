use super::Strategy;
use crate::core::Position;
use crate::game::GameSession;
use rand::seq::SliceRandom;

/// 空きマスから一様ランダムに選ぶ
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn propose(&self, session: &mut GameSession) -> Option<Position> {
        let vacant = session.board().vacant_positions();
        let mut rng = rand::thread_rng();
        vacant.choose(&mut rng).copied()
    }
}
