//! 評価値（Score）
//!
//! 実数スケールで、`Score::WIN`（+∞）と `Score::LOSS`（-∞）を勝敗確定のスコアとして予約している。
//! alpha/beta の窓と葉の静的評価を同じスケールで扱う。

/// 評価値
///
/// `f64` をラップし、`f64::total_cmp` による全順序を持つ。
/// `-0.0` は生成時に `0.0` へ正規化するので、比較上の区別は生じない。
#[derive(Debug, Clone, Copy, Default)]
#[repr(transparent)]
pub struct Score(f64);

impl Score {
    /// ゼロ
    pub const ZERO: Score = Score(0.0);
    /// 勝ち確定（+∞）
    pub const WIN: Score = Score(f64::INFINITY);
    /// 負け確定（-∞）
    pub const LOSS: Score = Score(f64::NEG_INFINITY);

    /// 値から生成
    #[inline]
    pub fn new(v: f64) -> Score {
        Score(v + 0.0)
    }

    /// 生の値を取得
    #[inline]
    pub const fn raw(self) -> f64 {
        self.0
    }

    /// 勝ちスコアかどうか
    #[inline]
    pub fn is_win(self) -> bool {
        self.0 == f64::INFINITY
    }

    /// 負けスコアかどうか
    #[inline]
    pub fn is_loss(self) -> bool {
        self.0 == f64::NEG_INFINITY
    }

    /// 有限値かどうか
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl PartialEq for Score {
    #[inline]
    fn eq(&self, other: &Score) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    #[inline]
    fn partial_cmp(&self, other: &Score) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    #[inline]
    fn cmp(&self, other: &Score) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Neg for Score {
    type Output = Score;

    #[inline]
    fn neg(self) -> Score {
        Score::new(-self.0)
    }
}

impl std::ops::Add for Score {
    type Output = Score;

    #[inline]
    fn add(self, rhs: Score) -> Score {
        Score::new(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Score {
    type Output = Score;

    #[inline]
    fn sub(self, rhs: Score) -> Score {
        Score::new(self.0 - rhs.0)
    }
}

impl std::ops::Mul<f64> for Score {
    type Output = Score;

    #[inline]
    fn mul(self, rhs: f64) -> Score {
        Score::new(self.0 * rhs)
    }
}

impl From<f64> for Score {
    fn from(v: f64) -> Score {
        Score::new(v)
    }
}

impl From<Score> for f64 {
    fn from(v: Score) -> f64 {
        v.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_win() {
            f.write_str("win")
        } else if self.is_loss() {
            f.write_str("loss")
        } else {
            write!(f, "{:.3}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_constants() {
        assert_eq!(Score::ZERO.raw(), 0.0);
        assert!(Score::WIN.is_win());
        assert!(Score::LOSS.is_loss());
        assert!(!Score::ZERO.is_win());
        assert!(!Score::ZERO.is_loss());
        assert!(Score::ZERO.is_finite());
        assert!(!Score::WIN.is_finite());
    }

    #[test]
    fn test_score_ordering() {
        assert!(Score::WIN > Score::new(1e300));
        assert!(Score::LOSS < Score::new(-1e300));
        assert!(Score::new(1.5) > Score::new(1.0));
        assert_eq!(Score::new(2.0).max(Score::new(-3.0)), Score::new(2.0));
        assert_eq!(Score::new(2.0).min(Score::new(-3.0)), Score::new(-3.0));
    }

    #[test]
    fn test_score_negative_zero_normalized() {
        assert_eq!(Score::new(-0.0), Score::ZERO);
        assert_eq!(-Score::ZERO, Score::ZERO);
        assert!(Score::new(-0.0) <= Score::ZERO && Score::new(-0.0) >= Score::ZERO);
    }

    #[test]
    fn test_score_arithmetic() {
        let a = Score::new(3.0);
        let b = Score::new(1.5);
        assert_eq!(a + b, Score::new(4.5));
        assert_eq!(a - b, Score::new(1.5));
        assert_eq!(a * 2.0, Score::new(6.0));
        assert_eq!(-a, Score::new(-3.0));
        assert_eq!(-Score::WIN, Score::LOSS);
    }

    #[test]
    fn test_score_display() {
        assert_eq!(Score::WIN.to_string(), "win");
        assert_eq!(Score::LOSS.to_string(), "loss");
        assert_eq!(Score::new(1.25).to_string(), "1.250");
    }
}
