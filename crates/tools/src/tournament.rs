//! 総当たりトーナメント
//!
//! 全ての順序付きペア（先後両方）を `games` ラウンドずつ対局する。
//! ラウンドごとに両者の初期配置をランダムに決め、同じラウンドの全カードで共有する。
//! 対局は crossbeam-channel のワーカーで並列に実行する。

use std::thread;

use anyhow::{Context, Result, anyhow, bail};
use crossbeam_channel as chan;
use isolation_core::{Agent, Board, Move, Position};
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::game::{GameResult, play_game};
use crate::roster::{AgentSpec, TournamentConfig};

// ---------------------------------------------------------------------------
// チケットと結果
// ---------------------------------------------------------------------------

/// 1局分の対局指示
#[derive(Debug, Clone, PartialEq)]
pub struct MatchTicket {
    /// グローバル一意 ID
    pub id: u64,
    /// agents[first_idx] が先手
    pub first_idx: usize,
    /// agents[second_idx] が後手
    pub second_idx: usize,
    /// 先手・後手の初期配置
    pub opening: [Move; 2],
    /// エージェントの乱数シード
    pub seed: u64,
}

/// 1局分の結果
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub ticket: MatchTicket,
    pub game: GameResult,
}

impl MatchResult {
    /// 勝ったエージェントのインデックス
    pub fn winner_idx(&self) -> usize {
        match self.game.winner {
            isolation_core::Player::First => self.ticket.first_idx,
            isolation_core::Player::Second => self.ticket.second_idx,
        }
    }

    pub fn loser_idx(&self) -> usize {
        if self.winner_idx() == self.ticket.first_idx {
            self.ticket.second_idx
        } else {
            self.ticket.first_idx
        }
    }
}

// ---------------------------------------------------------------------------
// 組み合わせ
// ---------------------------------------------------------------------------

/// 空の盤面に先手・後手をランダムに置く
fn random_opening<R: Rng>(empty: &Board, rng: &mut R) -> Result<[Move; 2]> {
    let mut board = empty.clone();
    let mut opening = [Move::NONE; 2];
    for slot in &mut opening {
        let moves = board.legal_moves();
        if moves.is_empty() {
            anyhow::bail!("no square left for the opening placement");
        }
        *slot = moves[rng.random_range(0..moves.len())];
        board.apply_move(*slot)?;
    }
    Ok(opening)
}

/// 全対局のチケットを作る
pub fn schedule<R: Rng>(config: &TournamentConfig, rng: &mut R) -> Result<Vec<MatchTicket>> {
    let empty = config.empty_board()?;
    let n = config.agents.len();
    let mut tickets = Vec::with_capacity(config.games as usize * n * n.saturating_sub(1));
    let mut id = 0u64;
    for _ in 0..config.games {
        let opening = random_opening(&empty, rng)?;
        for first_idx in 0..n {
            for second_idx in 0..n {
                if first_idx == second_idx {
                    continue;
                }
                tickets.push(MatchTicket {
                    id,
                    first_idx,
                    second_idx,
                    opening,
                    seed: rng.random(),
                });
                id += 1;
            }
        }
    }
    Ok(tickets)
}

/// チケットの初期配置を適用した盤面
pub fn starting_board(empty: &Board, ticket: &MatchTicket) -> Result<Board> {
    let mut board = empty.clone();
    for mv in ticket.opening {
        board
            .apply_move(mv)
            .with_context(|| format!("invalid opening for game {}", ticket.id))?;
    }
    Ok(board)
}

// ---------------------------------------------------------------------------
// 集計
// ---------------------------------------------------------------------------

/// 勝敗表
#[derive(Debug, Clone, PartialEq)]
pub struct Standings {
    labels: Vec<String>,
    /// wins[i][j]: i が j に勝った数
    wins: Vec<Vec<u32>>,
}

impl Standings {
    pub fn new(labels: Vec<String>) -> Self {
        let n = labels.len();
        Standings {
            labels,
            wins: vec![vec![0; n]; n],
        }
    }

    pub fn record(&mut self, result: &MatchResult) {
        self.wins[result.winner_idx()][result.loser_idx()] += 1;
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// `i` が `j` に勝った数
    pub fn wins_against(&self, i: usize, j: usize) -> u32 {
        self.wins[i][j]
    }

    pub fn total_wins(&self, i: usize) -> u32 {
        self.wins[i].iter().sum()
    }

    pub fn total_games(&self, i: usize) -> u32 {
        (0..self.labels.len())
            .map(|j| self.wins[i][j] + self.wins[j][i])
            .sum()
    }

    /// 全対局に対する勝率（対局なしは 0）
    pub fn win_rate(&self, i: usize) -> f64 {
        let games = self.total_games(i);
        if games == 0 {
            0.0
        } else {
            self.total_wins(i) as f64 / games as f64
        }
    }

    /// 勝率表（行: エージェント、列: 相手ごとの勝-敗）
    pub fn render_table(&self) -> String {
        let width = self.labels.iter().map(String::len).max().unwrap_or(0).max(6);
        let mut out = format!("{:<width$}", "agent");
        for label in &self.labels {
            out.push_str(&format!(" | {label:>width$}"));
        }
        out.push_str(" | win rate\n");
        for (i, label) in self.labels.iter().enumerate() {
            out.push_str(&format!("{label:<width$}"));
            for j in 0..self.labels.len() {
                let cell = if i == j {
                    "-".to_string()
                } else {
                    format!("{}-{}", self.wins[i][j], self.wins[j][i])
                };
                out.push_str(&format!(" | {cell:>width$}"));
            }
            out.push_str(&format!(" | {:>7.1}%\n", self.win_rate(i) * 100.0));
        }
        out
    }
}

// ---------------------------------------------------------------------------
// 実行
// ---------------------------------------------------------------------------

/// 定義からエージェントを作る関数
type AgentFactory = fn(&AgentSpec, u64) -> Box<dyn Agent<Board> + Send>;

fn worker_main(
    build: AgentFactory,
    agents: Vec<AgentSpec>,
    empty: Board,
    time_limit_ms: u64,
    rx: chan::Receiver<MatchTicket>,
    tx: chan::Sender<Result<MatchResult>>,
) {
    for ticket in rx {
        let outcome = starting_board(&empty, &ticket).map(|board| {
            // 対局ごとに作り直し、前局の状態を持ち越さない
            let mut first = build(&agents[ticket.first_idx], ticket.seed);
            let mut second = build(&agents[ticket.second_idx], ticket.seed.wrapping_add(1));
            debug!(
                "game {}: {} vs {}",
                ticket.id, agents[ticket.first_idx].name, agents[ticket.second_idx].name
            );
            let game = play_game(first.as_mut(), second.as_mut(), board, time_limit_ms);
            MatchResult { ticket, game }
        });
        if tx.send(outcome).is_err() {
            break;
        }
    }
}

/// トーナメントを実行し、1局終わるごとに `on_result` を呼ぶ
///
/// ワーカーが異常終了して対局が欠けた場合はエラーを返す。
pub fn run_tournament<F>(config: &TournamentConfig, seed: u64, on_result: F) -> Result<Standings>
where
    F: FnMut(&MatchResult) -> Result<()>,
{
    run_with_factory(config, seed, AgentSpec::build, on_result)
}

fn run_with_factory<F>(
    config: &TournamentConfig,
    seed: u64,
    build: AgentFactory,
    mut on_result: F,
) -> Result<Standings>
where
    F: FnMut(&MatchResult) -> Result<()>,
{
    config.validate()?;
    let empty = config.empty_board()?;
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let tickets = schedule(config, &mut rng)?;
    let total = tickets.len();
    info!(
        "tournament: {} agents, {} games, concurrency={}, seed={seed}",
        config.agents.len(),
        total,
        config.concurrency
    );

    let (ticket_tx, ticket_rx) = chan::unbounded::<MatchTicket>();
    let (result_tx, result_rx) = chan::unbounded::<Result<MatchResult>>();
    for ticket in tickets {
        ticket_tx.send(ticket)?;
    }
    drop(ticket_tx);

    let mut handles = Vec::with_capacity(config.concurrency);
    for _ in 0..config.concurrency {
        let agents = config.agents.clone();
        let empty = empty.clone();
        let time_limit_ms = config.time_limit_ms;
        let rx = ticket_rx.clone();
        let tx = result_tx.clone();
        handles.push(thread::spawn(move || {
            worker_main(build, agents, empty, time_limit_ms, rx, tx);
        }));
    }
    // メインスレッドは result_tx を持たないので drop
    drop(result_tx);

    let mut standings = Standings::new(config.labels());
    let mut completed = 0usize;
    let mut failure = None;
    for outcome in result_rx {
        match outcome.and_then(|result| {
            standings.record(&result);
            on_result(&result)
        }) {
            Ok(()) => {
                completed += 1;
                debug!("completed {completed}/{total}");
            }
            Err(e) => {
                failure = Some(e);
                break;
            }
        }
    }
    // 受信側を閉じるとワーカーは送信に失敗して抜ける
    let mut panicked = 0usize;
    for h in handles {
        if h.join().is_err() {
            panicked += 1;
        }
    }
    if let Some(e) = failure {
        return Err(e);
    }
    if panicked > 0 {
        return Err(anyhow!(
            "{panicked} tournament worker(s) panicked after {completed}/{total} games"
        ));
    }
    if completed != total {
        bail!("tournament ended early: {completed}/{total} games");
    }

    info!("tournament complete: {completed}/{total} games");
    Ok(standings)
}
