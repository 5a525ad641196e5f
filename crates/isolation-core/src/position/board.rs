//! ナイト移動のIsolation盤面
//!
//! - 各プレイヤーは最初の1手で任意の空きマスに駒を置く
//! - 以降はチェスのナイトと同じ動きで空きマスへ移動する
//! - 一度駒が乗ったマスは塞がり、二度と使えない
//! - 手番で合法手がなくなったプレイヤーの負け

use thiserror::Error;

use super::Position;
use crate::types::{Move, MoveList, Player};

/// 既定の盤の幅
pub const DEFAULT_WIDTH: usize = 7;
/// 既定の盤の高さ
pub const DEFAULT_HEIGHT: usize = 7;

/// 座標を `i8` で持つため、一辺の上限を設ける
const MAX_SIDE: usize = i8::MAX as usize;

/// ナイトの移動方向（列挙順は探索の決定性に影響する）
const KNIGHT_DIRECTIONS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// 盤面操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("invalid board size {width}x{height} (each side must be in 1..=127)")]
    InvalidSize { width: usize, height: usize },

    #[error("illegal move {mv} for {player:?}")]
    IllegalMove { mv: Move, player: Player },
}

/// Isolation の盤面
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    /// 塞がったマス（row-major）
    blocked: Vec<bool>,
    locations: [Option<Move>; Player::NUM],
    active: Player,
    move_count: u32,
}

impl Default for Board {
    fn default() -> Self {
        Board {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            blocked: vec![false; DEFAULT_WIDTH * DEFAULT_HEIGHT],
            locations: [None; Player::NUM],
            active: Player::First,
            move_count: 0,
        }
    }
}

impl Board {
    /// 空の盤面を生成する（先手番）
    pub fn new(width: usize, height: usize) -> Result<Board, BoardError> {
        if width == 0 || height == 0 || width > MAX_SIDE || height > MAX_SIDE {
            return Err(BoardError::InvalidSize { width, height });
        }
        Ok(Board {
            width,
            height,
            blocked: vec![false; width * height],
            locations: [None; Player::NUM],
            active: Player::First,
            move_count: 0,
        })
    }

    /// 盤内かどうか
    #[inline]
    pub fn contains(&self, mv: Move) -> bool {
        mv.row() >= 0
            && mv.col() >= 0
            && (mv.row() as usize) < self.height
            && (mv.col() as usize) < self.width
    }

    /// 空きマスかどうか（盤外は `false`）
    #[inline]
    pub fn is_blank(&self, mv: Move) -> bool {
        self.contains(mv) && !self.blocked[self.index(mv)]
    }

    /// 空きマスの数
    pub fn blank_count(&self) -> usize {
        self.blocked.iter().filter(|b| !**b).count()
    }

    /// 合法性を確認してから手を進める
    pub fn apply_move(&mut self, mv: Move) -> Result<(), BoardError> {
        if !self.legal_moves().contains(&mv) {
            return Err(BoardError::IllegalMove {
                mv,
                player: self.active,
            });
        }
        self.play(mv);
        Ok(())
    }

    #[inline]
    fn index(&self, mv: Move) -> usize {
        mv.row() as usize * self.width + mv.col() as usize
    }

    /// 合法性を確認せずに手を進める
    fn play(&mut self, mv: Move) {
        debug_assert!(self.is_blank(mv), "move {mv} onto a blocked square");
        let idx = self.index(mv);
        self.blocked[idx] = true;
        self.locations[self.active.index()] = Some(mv);
        self.active = self.active.opponent();
        self.move_count += 1;
    }

    fn blank_squares(&self) -> MoveList {
        let mut moves = MoveList::new();
        for row in 0..self.height {
            for col in 0..self.width {
                let mv = Move::new(row as i8, col as i8);
                if !self.blocked[self.index(mv)] {
                    moves.push(mv);
                }
            }
        }
        moves
    }
}

impl Position for Board {
    #[inline]
    fn active_player(&self) -> Player {
        self.active
    }

    fn legal_moves_for(&self, player: Player) -> MoveList {
        let Some(from) = self.locations[player.index()] else {
            return self.blank_squares();
        };
        KNIGHT_DIRECTIONS
            .iter()
            .filter_map(|&(dr, dc)| {
                // 一辺 127 の盤では端から 2 マス以内で i8 を越える
                let row = from.row().checked_add(dr)?;
                let col = from.col().checked_add(dc)?;
                Some(Move::new(row, col))
            })
            .filter(|&to| self.is_blank(to))
            .collect()
    }

    fn forecast(&self, mv: Move) -> Board {
        let mut next = self.clone();
        next.play(mv);
        next
    }

    fn is_winner(&self, player: Player) -> bool {
        player != self.active && self.legal_moves().is_empty()
    }

    fn is_loser(&self, player: Player) -> bool {
        player == self.active && self.legal_moves().is_empty()
    }

    #[inline]
    fn player_location(&self, player: Player) -> Option<Move> {
        self.locations[player.index()]
    }

    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn move_count(&self) -> u32 {
        self.move_count
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let mv = Move::new(row as i8, col as i8);
                let mark = if self.locations[Player::First.index()] == Some(mv) {
                    Player::First.mark()
                } else if self.locations[Player::Second.index()] == Some(mv) {
                    Player::Second.mark()
                } else if self.blocked[self.index(mv)] {
                    '-'
                } else {
                    '.'
                };
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{mark}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
