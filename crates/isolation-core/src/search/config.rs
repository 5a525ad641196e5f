//! 探索設定
//!
//! エージェントごとに一度だけ作り、以降の全探索で使い回す。
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::eval::EvalPolicy;

/// 固定深さ探索の既定の深さ
pub const DEFAULT_SEARCH_DEPTH: u32 = 3;
/// 既定の打ち切り閾値（ミリ秒）
pub const DEFAULT_TIMEOUT_MS: f64 = 10.0;

/// 設定値の誤り
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("search_depth must be positive")]
    ZeroDepth,

    #[error("timeout_ms must be a non-negative finite number, got {0}")]
    InvalidTimeout(f64),

    #[error("max_depth must be positive when set")]
    ZeroMaxDepth,
}

/// 探索設定
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// 固定深さ探索の深さ（ply）
    pub search_depth: u32,
    /// 残り時間がこの値（ミリ秒）を下回ったら探索を打ち切る
    pub timeout_ms: f64,
    /// 葉の評価ポリシー
    pub eval: EvalPolicy,
    /// 反復深化の深さ上限（`None` は時間切れまで深くする）
    pub max_depth: Option<u32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            eval: EvalPolicy::default(),
            max_depth: None,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: f64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_eval(mut self, eval: EvalPolicy) -> Self {
        self.eval = eval;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<u32>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// 設定値を検証する
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if !self.timeout_ms.is_finite() || self.timeout_ms < 0.0 {
            return Err(ConfigError::InvalidTimeout(self.timeout_ms));
        }
        if self.max_depth == Some(0) {
            return Err(ConfigError::ZeroMaxDepth);
        }
        Ok(())
    }
}
