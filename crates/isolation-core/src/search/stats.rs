//! 探索統計
//!
//! 1回の着手選択で発生したノード数・評価回数・カット回数を記録する。
//! テストで枝刈りの発生を観測するのにも使う。

/// 探索統計カウンタ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// 値関数（max/min）の呼び出し回数
    pub nodes: u64,
    /// 静的評価の呼び出し回数
    pub evaluations: u64,
    /// beta/alphaカットの回数
    pub cutoffs: u64,
    /// 最後まで探索し終えた深さ（反復深化のみ、未完了なら0）
    pub completed_depth: u32,
}
