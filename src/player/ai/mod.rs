pub mod defensive;
pub mod offensive;
pub mod random;

pub use defensive::DefensiveStrategy;
pub use offensive::OffensiveStrategy;
pub use random::RandomStrategy;

use crate::core::Position;
use crate::game::GameSession;
use crate::player::{PlayerAction, PlayerController};

/// AI難易度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,   // ランダム
    Medium, // 守備優先
    Hard,   // 攻撃優先
}

/// 「一手を提案する」戦略のtrait
///
/// 評価のための仮置きは復帰前に必ず取り消す。盤が満杯のときのみNone。
pub trait Strategy {
    fn propose(&self, session: &mut GameSession) -> Option<Position>;
}

/// 難易度に応じた戦略で一手を選ぶ。
///
/// 終局済みセッションでの呼び出しは呼び出し側の責任 (事前にチェックすること)。
pub fn select_move(difficulty: Difficulty, session: &mut GameSession) -> Option<Position> {
    match difficulty {
        Difficulty::Easy => RandomStrategy.propose(session),
        Difficulty::Medium => DefensiveStrategy.propose(session),
        Difficulty::Hard => OffensiveStrategy.propose(session),
    }
}

pub struct HeuristicAi {
    pub difficulty: Difficulty,
    pub name: String,
}

impl HeuristicAi {
    pub fn new(difficulty: Difficulty, name: &str) -> Self {
        HeuristicAi {
            difficulty,
            name: name.to_string(),
        }
    }
}

impl PlayerController for HeuristicAi {
    fn choose_action(&self, session: &mut GameSession) -> PlayerAction {
        match select_move(self.difficulty, session) {
            Some(pos) => PlayerAction::Place(pos),
            // 空きマスなし (引き分け)
            None => PlayerAction::Resign,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_ai(&self) -> bool {
        true
    }
}
