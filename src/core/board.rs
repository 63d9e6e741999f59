use super::types::{PlayerId, Position};
use serde::{Deserialize, Serialize};

/// 盤面
///
/// 座標が範囲外の場合はインデックスでpanicする (呼び出し側の契約違反)。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub size: usize,
    cells: Vec<Option<PlayerId>>,
    pub last_move: Option<Position>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![None; size * size],
            last_move: None,
        }
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(pos.row < self.size && pos.col < self.size);
        pos.row * self.size + pos.col
    }

    pub fn stone_at(&self, pos: Position) -> Option<PlayerId> {
        self.cells[self.index(pos)]
    }

    pub fn place_stone(&mut self, pos: Position, player: PlayerId) {
        let i = self.index(pos);
        self.cells[i] = Some(player);
    }

    pub fn remove_stone(&mut self, pos: Position) {
        let i = self.index(pos);
        self.cells[i] = None;
    }

    pub fn is_vacant(&self, pos: Position) -> bool {
        self.stone_at(pos).is_none()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// 空きマスを行優先 (row-major) 順で列挙
    pub fn vacant_positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let pos = Position::new(row, col);
                if self.is_vacant(pos) {
                    positions.push(pos);
                }
            }
        }
        positions
    }
}
