use crate::core::Position;
use crate::game::GameSession;

/// プレイヤーが選んだ操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Place(Position),
    Undo,
    Reset,
    Resign,
}

/// プレイヤー操作のtrait
///
/// AIは候補手の評価でセッションの盤面を一時的に借りるため &mut を受け取る。
pub trait PlayerController {
    fn choose_action(&self, session: &mut GameSession) -> PlayerAction;
    fn name(&self) -> &str;
    fn is_ai(&self) -> bool {
        false
    }
}
