//! エージェント定義とトーナメント設定
//!
//! 設定ファイル例:
//! ```toml
//! games = 20
//! time_limit_ms = 150
//!
//! [[agents]]
//! name = "AB_Custom"
//! kind = "alpha-beta"
//! search = { eval = "mobility-centrality" }
//!
//! [[agents]]
//! name = "Random"
//! kind = "random"
//! ```
//! `agents` を省略すると [`default_roster`] を使う。

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use isolation_core::{
    Agent, AlphaBetaPlayer, Board, EvalPolicy, MinimaxPlayer, RandomPlayer, SearchConfig,
};
use serde::{Deserialize, Serialize};

/// 1手あたりの既定の持ち時間（ミリ秒）
pub const DEFAULT_TIME_LIMIT_MS: u64 = 150;
/// ペア・先後ごとの既定の対局数
pub const DEFAULT_GAMES: u32 = 10;

/// エージェントの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentKind {
    /// 合法手から一様ランダム
    Random,
    /// 固定深さ minimax
    Minimax,
    /// 反復深化 alpha-beta
    AlphaBeta,
}

/// 名前付きのエージェント定義
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentSpec {
    pub name: String,
    pub kind: AgentKind,
    #[serde(default)]
    pub search: SearchConfig,
}

impl AgentSpec {
    pub fn new(name: impl Into<String>, kind: AgentKind, search: SearchConfig) -> Self {
        AgentSpec {
            name: name.into(),
            kind,
            search,
        }
    }

    /// 定義からエージェントを作る。乱数を使うものは `seed` で初期化する。
    pub fn build(&self, seed: u64) -> Box<dyn Agent<Board> + Send> {
        match self.kind {
            AgentKind::Random => Box::new(RandomPlayer::with_seed(seed)),
            AgentKind::Minimax => Box::new(MinimaxPlayer::new(self.search)),
            AgentKind::AlphaBeta => Box::new(AlphaBetaPlayer::with_seed(self.search, seed)),
        }
    }
}

/// 設定ファイルなしで使う対戦相手一覧
pub fn default_roster() -> Vec<AgentSpec> {
    let search = SearchConfig::default();
    vec![
        AgentSpec::new("Random", AgentKind::Random, search),
        AgentSpec::new(
            "MM_Mobility",
            AgentKind::Minimax,
            search.with_eval(EvalPolicy::Mobility),
        ),
        AgentSpec::new(
            "AB_Mobility",
            AgentKind::AlphaBeta,
            search.with_eval(EvalPolicy::Mobility),
        ),
        AgentSpec::new(
            "AB_Custom",
            AgentKind::AlphaBeta,
            search.with_eval(EvalPolicy::MobilityCentrality),
        ),
        AgentSpec::new(
            "AB_Custom_2",
            AgentKind::AlphaBeta,
            search.with_eval(EvalPolicy::PhaseWeighted),
        ),
    ]
}

/// トーナメント設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TournamentConfig {
    /// ペア・先後ごとの対局数
    pub games: u32,
    /// 1手あたりの持ち時間（ミリ秒）
    pub time_limit_ms: u64,
    pub width: usize,
    pub height: usize,
    /// 並列に対局するワーカー数
    pub concurrency: usize,
    /// 開始局面とエージェントの乱数シード（`None` ならOS乱数）
    pub seed: Option<u64>,
    pub agents: Vec<AgentSpec>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        TournamentConfig {
            games: DEFAULT_GAMES,
            time_limit_ms: DEFAULT_TIME_LIMIT_MS,
            width: isolation_core::position::DEFAULT_WIDTH,
            height: isolation_core::position::DEFAULT_HEIGHT,
            concurrency: 1,
            seed: None,
            agents: default_roster(),
        }
    }
}

impl TournamentConfig {
    /// TOML ファイルから読み込む
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: TournamentConfig = toml::from_str(text)?;
        Ok(config)
    }

    /// 空の盤面
    pub fn empty_board(&self) -> Result<Board> {
        Board::new(self.width, self.height).context("invalid board size")
    }

    /// 対局を始める前の整合性チェック
    pub fn validate(&self) -> Result<()> {
        if self.agents.len() < 2 {
            bail!("at least 2 agents are required (got {})", self.agents.len());
        }
        if self.games == 0 {
            bail!("games must be at least 1");
        }
        if self.concurrency == 0 {
            bail!("concurrency must be at least 1");
        }
        if self.time_limit_ms == 0 {
            bail!("time_limit_ms must be positive");
        }
        let board = self.empty_board()?;
        if board.blank_count() < 2 {
            bail!("board {}x{} is too small for two players", self.width, self.height);
        }

        let mut seen = HashSet::new();
        for agent in &self.agents {
            if !seen.insert(agent.name.as_str()) {
                bail!("duplicate agent name '{}'", agent.name);
            }
            agent
                .search
                .validate()
                .with_context(|| format!("agent '{}'", agent.name))?;
            if agent.search.timeout_ms >= self.time_limit_ms as f64 {
                bail!(
                    "agent '{}': timeout_ms ({}) must be below time_limit_ms ({})",
                    agent.name,
                    agent.search.timeout_ms,
                    self.time_limit_ms
                );
            }
        }
        Ok(())
    }

    pub fn labels(&self) -> Vec<String> {
        self.agents.iter().map(|a| a.name.clone()).collect()
    }
}
