//! テスト用の合成ゲーム木と時計

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::eval::Evaluator;
use crate::position::Position;
use crate::types::{Move, MoveList, Player, Score};

/// 木の形
pub(super) enum Shape {
    Leaf(f64),
    /// 深さを使い切ったときの評価値と子
    Node(f64, Vec<Shape>),
}

pub(super) fn leaf(v: f64) -> Shape {
    Shape::Leaf(v)
}

pub(super) fn node(children: Vec<Shape>) -> Shape {
    Shape::Node(0.0, children)
}

pub(super) fn inner(value: f64, children: Vec<Shape>) -> Shape {
    Shape::Node(value, children)
}

/// 葉の値のリストから1段の節点を作る
pub(super) fn leaves(values: &[f64]) -> Shape {
    node(values.iter().map(|&v| leaf(v)).collect())
}

struct TreeNode {
    value: f64,
    children: Vec<usize>,
}

/// 合成ゲーム木の局面
///
/// 指し手 `Move::new(0, i)` は i 番目の子へ進む。
#[derive(Clone)]
pub(super) struct TreePosition {
    nodes: Rc<Vec<TreeNode>>,
    id: usize,
    active: Player,
    ply: u32,
}

impl TreePosition {
    pub(super) fn new(shape: Shape) -> TreePosition {
        let mut nodes = Vec::new();
        build(&shape, &mut nodes);
        TreePosition {
            nodes: Rc::new(nodes),
            id: 0,
            active: Player::First,
            ply: 0,
        }
    }

    /// 節点の番号（根が0、行きがけ順）
    pub(super) fn id(&self) -> usize {
        self.id
    }

    pub(super) fn value(&self) -> f64 {
        self.nodes[self.id].value
    }
}

fn build(shape: &Shape, nodes: &mut Vec<TreeNode>) -> usize {
    let id = nodes.len();
    match shape {
        Shape::Leaf(v) => nodes.push(TreeNode {
            value: *v,
            children: Vec::new(),
        }),
        Shape::Node(v, children) => {
            nodes.push(TreeNode {
                value: *v,
                children: Vec::new(),
            });
            let ids: Vec<usize> = children.iter().map(|c| build(c, nodes)).collect();
            nodes[id].children = ids;
        }
    }
    id
}

impl Position for TreePosition {
    fn active_player(&self) -> Player {
        self.active
    }

    fn legal_moves_for(&self, _player: Player) -> MoveList {
        (0..self.nodes[self.id].children.len())
            .map(|i| Move::new(0, i as i8))
            .collect()
    }

    fn forecast(&self, mv: Move) -> TreePosition {
        TreePosition {
            nodes: Rc::clone(&self.nodes),
            id: self.nodes[self.id].children[mv.col() as usize],
            active: self.active.opponent(),
            ply: self.ply + 1,
        }
    }

    fn is_winner(&self, _player: Player) -> bool {
        false
    }

    fn is_loser(&self, _player: Player) -> bool {
        false
    }

    fn player_location(&self, _player: Player) -> Option<Move> {
        None
    }

    fn width(&self) -> usize {
        1
    }

    fn height(&self) -> usize {
        1
    }

    fn move_count(&self) -> u32 {
        self.ply
    }
}

/// 節点の値をそのまま返し、評価した節点を記録する評価関数
#[derive(Default)]
pub(super) struct RecordingEval {
    seen: RefCell<Vec<usize>>,
}

impl RecordingEval {
    pub(super) fn seen(&self) -> Vec<usize> {
        self.seen.borrow().clone()
    }
}

impl Evaluator<TreePosition> for RecordingEval {
    fn evaluate(&self, pos: &TreePosition, _player: Player) -> Score {
        self.seen.borrow_mut().push(pos.id());
        Score::new(pos.value())
    }
}

/// 節点の値をそのまま返す評価関数
pub(super) fn tree_value(pos: &TreePosition, _player: Player) -> Score {
    Score::new(pos.value())
}

/// 残り時間の問い合わせ回数を数え、`budget` 回を超えたら 0 を返す時計
pub(super) struct ScriptedClock {
    calls: Cell<u64>,
    budget: u64,
}

impl ScriptedClock {
    pub(super) fn new(budget: u64) -> ScriptedClock {
        ScriptedClock {
            calls: Cell::new(0),
            budget,
        }
    }

    /// 時間切れにならない時計
    pub(super) fn unlimited() -> ScriptedClock {
        ScriptedClock::new(u64::MAX)
    }

    pub(super) fn calls(&self) -> u64 {
        self.calls.get()
    }
}

impl crate::search::Clock for ScriptedClock {
    fn time_left(&self) -> f64 {
        let n = self.calls.get();
        self.calls.set(n + 1);
        if n < self.budget { 1_000.0 } else { 0.0 }
    }
}

/// ランダムな木（分岐 0〜3、値は小さな整数なので同値が頻出する）
pub(super) fn random_shape(rng: &mut Xoshiro256PlusPlus, depth: u32) -> Shape {
    let value = f64::from(rng.random_range(-4i32..=4));
    if depth == 0 {
        return leaf(value);
    }
    let branching = rng.random_range(0..=3);
    if branching == 0 {
        return leaf(value);
    }
    let children = (0..branching).map(|_| random_shape(rng, depth - 1)).collect();
    inner(value, children)
}

pub(super) fn seeded(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}
