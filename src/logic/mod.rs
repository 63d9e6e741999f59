use crate::core::{Board, PlayerId, Position};

/// 勝利に必要な連続数
pub const WIN_LENGTH: usize = 5;

/// 走査する軸 (横, 縦, 斜め2方向)
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// (row, col) の石を通る5連があるか判定する。盤面は変更しない。
///
/// 対象マスが空の場合は常にfalse。
pub fn check_win(board: &Board, pos: Position) -> bool {
    let player = match board.stone_at(pos) {
        Some(p) => p,
        None => return false,
    };

    AXES.iter().any(|&(dr, dc)| {
        let run = 1
            + count_run(board, pos, player, dr, dc)
            + count_run(board, pos, player, -dr, -dc);
        run >= WIN_LENGTH
    })
}

/// posの隣から(dr, dc)方向へ、同色の石が続く数を数える
fn count_run(board: &Board, pos: Position, player: PlayerId, dr: isize, dc: isize) -> usize {
    let mut run = 0;
    let mut r = pos.row as isize + dr;
    let mut c = pos.col as isize + dc;
    let size = board.size as isize;

    while r >= 0 && r < size && c >= 0 && c < size {
        if board.stone_at(Position::new(r as usize, c as usize)) != Some(player) {
            break;
        }
        run += 1;
        r += dr;
        c += dc;
    }
    run
}

/// 仮置き評価。posに石を置いてevalを呼び、どの経路でも必ず石を取り除く。
pub fn with_trial_stone<R>(
    board: &mut Board,
    pos: Position,
    player: PlayerId,
    eval: impl FnOnce(&Board) -> R,
) -> R {
    debug_assert!(board.is_vacant(pos));
    board.place_stone(pos, player);
    let result = eval(board);
    board.remove_stone(pos);
    result
}
