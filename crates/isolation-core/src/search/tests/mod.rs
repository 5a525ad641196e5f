//! 探索のテスト
//!
//! 値を直接指定できる合成ゲーム木と、指定回数で時間切れになる時計を使う。

mod alpha_beta;
mod support;
