//! 残り時間の監視
//!
//! 残り時間は呼び出し側が毎回渡す `Clock` から読み取るだけで、探索側は所有しない。
//! 閾値を下回ったら `SearchTimeout` を返し、`?` で最も近い回収点まで巻き戻す。

use std::time::{Duration, Instant};

use thiserror::Error;

/// 残り時間が閾値を下回ったため探索を打ち切った
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("search aborted: remaining time fell below the timeout threshold")]
pub struct SearchTimeout;

/// 残り時間（ミリ秒）を返す問い合わせ
pub trait Clock {
    fn time_left(&self) -> f64;
}

impl<F> Clock for F
where
    F: Fn() -> f64,
{
    #[inline]
    fn time_left(&self) -> f64 {
        self()
    }
}

/// 開始時刻と持ち時間から残り時間を計算する時計
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    start: Instant,
    limit: Duration,
}

impl Countdown {
    /// 現在時刻から `limit` の持ち時間で計時を始める
    pub fn start(limit: Duration) -> Countdown {
        Countdown {
            start: Instant::now(),
            limit,
        }
    }

    /// 経過時間
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// 持ち時間
    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl Clock for Countdown {
    fn time_left(&self) -> f64 {
        let limit_ms = self.limit.as_secs_f64() * 1000.0;
        limit_ms - self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// 1回の探索呼び出しで使う打ち切り判定
#[derive(Clone, Copy)]
pub struct Deadline<'a> {
    clock: &'a dyn Clock,
    threshold_ms: f64,
}

impl<'a> Deadline<'a> {
    pub fn new(clock: &'a dyn Clock, threshold_ms: f64) -> Deadline<'a> {
        Deadline {
            clock,
            threshold_ms,
        }
    }

    /// 残り時間が閾値未満なら `SearchTimeout`
    #[inline]
    pub fn check(&self) -> Result<(), SearchTimeout> {
        if self.clock.time_left() < self.threshold_ms {
            Err(SearchTimeout)
        } else {
            Ok(())
        }
    }
}

impl std::fmt::Debug for Deadline<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deadline")
            .field("time_left", &self.clock.time_left())
            .field("threshold_ms", &self.threshold_ms)
            .finish()
    }
}
