/// isolation エージェントの総当たりトーナメント。
///
/// crossbeam-channel ワーカーで対局を並列実行し、勝率表を表示する。
/// `--out` を指定すると1行1レコードの JSONL を書き出す。
///
/// # 使用例
///
/// 既定のエージェント一覧で 20 ラウンド:
/// ```shell
/// cargo run -p tools --release --bin tournament -- --games 20 --concurrency 4
/// ```
///
/// 設定ファイルのエージェント一覧を 5x5 盤で:
/// ```shell
/// cargo run -p tools --release --bin tournament -- \
///   --config tournament.toml --width 5 --height 5 \
///   --out "runs/tournament/$(date +%Y%m%d_%H%M%S).jsonl"
/// ```
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser as _;
use rand::Rng;
use serde::Serialize;

use tools::{MatchResult, TournamentConfig, run_tournament};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(clap::Parser, Debug)]
#[command(about = "round-robin tournament for isolation search agents")]
struct Cli {
    /// TOML config (match settings and [[agents]] roster)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of rounds; every ordered pair plays once per round
    #[arg(long)]
    games: Option<u32>,

    /// Time limit per move in milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Board width
    #[arg(long)]
    width: Option<usize>,

    /// Board height
    #[arg(long)]
    height: Option<usize>,

    /// Number of concurrent workers
    #[arg(long)]
    concurrency: Option<usize>,

    /// Seed for openings and agent RNGs
    #[arg(long)]
    seed: Option<u64>,

    /// JSONL output path
    #[arg(long)]
    out: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    /// 設定ファイル（なければ既定値）に CLI の指定を上書きする
    fn resolve_config(&self) -> Result<TournamentConfig> {
        let mut config = match &self.config {
            Some(path) => TournamentConfig::load(path)?,
            None => TournamentConfig::default(),
        };
        if let Some(games) = self.games {
            config.games = games;
        }
        if let Some(ms) = self.time_limit_ms {
            config.time_limit_ms = ms;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(concurrency) = self.concurrency {
            config.concurrency = concurrency;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// JSONL レコード
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct MetaLogEntry<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    timestamp: String,
    seed: u64,
    settings: &'a TournamentConfig,
}

#[derive(Serialize)]
struct MoveLog {
    ply: u32,
    player: isolation_core::Player,
    #[serde(rename = "move")]
    mv: [i8; 2],
    elapsed_ms: f64,
}

#[derive(Serialize)]
struct ResultLogEntry<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    game_id: u64,
    first: &'a str,
    second: &'a str,
    opening: [[i8; 2]; 2],
    winner: &'a str,
    reason: &'static str,
    plies: u32,
    moves: Vec<MoveLog>,
}

fn coords(mv: isolation_core::Move) -> [i8; 2] {
    [mv.row(), mv.col()]
}

struct JsonlWriter {
    writer: BufWriter<File>,
}

impl JsonlWriter {
    fn new(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let file =
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    fn write_json(&mut self, value: &impl Serialize) -> Result<()> {
        serde_json::to_writer(&mut self.writer, value)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn result_entry<'a>(result: &'a MatchResult, labels: &'a [String]) -> ResultLogEntry<'a> {
    let ticket = &result.ticket;
    ResultLogEntry {
        kind: "result",
        game_id: ticket.id,
        first: &labels[ticket.first_idx],
        second: &labels[ticket.second_idx],
        opening: [coords(ticket.opening[0]), coords(ticket.opening[1])],
        winner: &labels[result.winner_idx()],
        reason: result.game.reason.label(),
        plies: result.game.plies,
        moves: result
            .game
            .history
            .iter()
            .map(|r| MoveLog {
                ply: r.ply,
                player: r.player,
                mv: coords(r.mv),
                elapsed_ms: r.elapsed_ms,
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// メイン
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, &cli.log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .write_style(env_logger::WriteStyle::Never)
    .init();

    let config = cli.resolve_config()?;
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let labels = config.labels();

    let mut writer = match &cli.out {
        Some(path) => {
            let mut w = JsonlWriter::new(path)?;
            w.write_json(&MetaLogEntry {
                kind: "meta",
                timestamp: Local::now().to_rfc3339(),
                seed,
                settings: &config,
            })?;
            Some(w)
        }
        None => None,
    };

    let start_time = Instant::now();
    let standings = run_tournament(&config, seed, |result| {
        if let Some(w) = writer.as_mut() {
            w.write_json(&result_entry(result, &labels))?;
        }
        Ok(())
    })?;

    if let Some(w) = writer.as_mut() {
        w.flush()?;
    }

    println!();
    println!("=== Tournament Complete ===");
    println!(
        "{} rounds on {}x{}, {}ms per move, seed {} ({:.1}s)",
        config.games,
        config.width,
        config.height,
        config.time_limit_ms,
        seed,
        start_time.elapsed().as_secs_f64()
    );
    println!();
    print!("{}", standings.render_table());
    if let Some(path) = &cli.out {
        println!("Output: {}", path.display());
    }
    println!("===========================");
    Ok(())
}
