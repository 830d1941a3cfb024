//! 三目並べの自己対戦 CLI。
//!
//! 盤面の描画や入力待ちは持たず、指定した AI 同士で対局して結果を標準出力へ書く。
//! ログは標準エラーへ出力する。

use std::io::{self, Write};

use anyhow::{Context as _, Result, anyhow};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::Level;
use ttt_core::ai::types::Ai as _;
use ttt_core::{ai, engine};

/// minimax で実用的に読み切れる盤の一辺の上限。
const MINIMAX_COMFORT_SIZE: usize = 3;

/// 各手番を担当する AI の種類。
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum ControllerKind {
    /// 終局まで読み切るアルファベータ探索。
    Minimax,
    /// 空きマスからランダムに選ぶ。
    Random,
}

/// ログの出力形式。
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    /// 1行1イベントの JSON。
    Json,
    /// 人間向けのテキスト。
    Pretty,
}

/// 勝敗ルール。
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum RulesArg {
    /// 1列を揃えた側の負け。
    Misere,
    /// 1列を揃えた側の勝ち。
    Standard,
}

impl From<RulesArg> for engine::Rules {
    fn from(value: RulesArg) -> Self {
        match value {
            RulesArg::Misere => Self::Misere,
            RulesArg::Standard => Self::Standard,
        }
    }
}

/// コマンドライン引数。
#[derive(Debug, Parser)]
#[command(name = "ttt", version, about = "Self-play driver for N x N tic-tac-toe")]
struct Cli {
    /// 対局数。
    #[arg(long, default_value_t = 1)]
    games: u32,
    /// ログの出力形式。
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
    /// `O`（後手）を担当する AI。
    #[arg(long = "o", value_enum, default_value_t = ControllerKind::Minimax)]
    o_player: ControllerKind,
    /// 勝敗ルール。
    #[arg(long, value_enum, default_value_t = RulesArg::Standard)]
    rules: RulesArg,
    /// random AI の乱数シード（`O` は `seed + 1` を使う）。
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// 盤の一辺の長さ。
    #[arg(long, default_value_t = 3)]
    size: usize,
    /// ログの詳細度（`-v` で info、`-vv` で debug、`-vvv` で trace）。
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// `X`（先手）を担当する AI。
    #[arg(long = "x", value_enum, default_value_t = ControllerKind::Minimax)]
    x_player: ControllerKind,
}

/// 手番ごとの操作主体。
#[derive(Debug)]
enum Controller {
    /// アルファベータ探索 AI。
    Minimax(ai::minimax::Agent),
    /// ランダム AI。
    Random(ai::random::Agent),
}

impl Controller {
    /// 種類とシードから生成する。
    const fn new(kind: ControllerKind, seed: u64) -> Self {
        match kind {
            ControllerKind::Minimax => Self::Minimax(ai::minimax::Agent::new()),
            ControllerKind::Random => Self::Random(ai::random::Agent::new(seed)),
        }
    }

    /// 手を選択する。
    fn select_move(
        &mut self,
        board: &engine::Board,
        player: engine::Player,
    ) -> Result<engine::Square, ai::SelectMoveError> {
        match self {
            Self::Minimax(agent) => agent.select_move(board, player),
            Self::Random(agent) => agent.select_move(board, player),
        }
    }
}

/// 対局結果の集計。
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct Tally {
    /// 引き分け数。
    draws: u32,
    /// `O` の勝ち数。
    o_wins: u32,
    /// `X` の勝ち数。
    x_wins: u32,
}

impl Tally {
    /// 終局結果を1件加算する（進行中は数えない）。
    const fn record(&mut self, outcome: engine::Outcome) {
        match outcome {
            engine::Outcome::Draw => self.draws = self.draws.saturating_add(1),
            engine::Outcome::Win(engine::Player::O) => {
                self.o_wins = self.o_wins.saturating_add(1);
            }
            engine::Outcome::Win(engine::Player::X) => {
                self.x_wins = self.x_wins.saturating_add(1);
            }
            _ => {}
        }
    }
}

/// ログ出力を初期化する。
fn init_tracing(format: LogFormat, verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr);
    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
    installed.map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

/// 1局を終局まで進め、最終局面を返す。
fn play_one(
    size: usize,
    rules: engine::Rules,
    x_controller: &mut Controller,
    o_controller: &mut Controller,
) -> Result<engine::Game> {
    let mut game =
        engine::Game::new(size, rules).with_context(|| format!("cannot set up a {size}x{size} board"))?;

    while !game.is_over() {
        let side = game.side_to_move();
        let controller = match side {
            engine::Player::O => &mut *o_controller,
            _ => &mut *x_controller,
        };

        let square = controller
            .select_move(game.board(), side)
            .with_context(|| format!("{side:?} could not choose a move"))?;
        let outcome = game
            .play(square)
            .with_context(|| format!("{side:?} chose an unplayable square {square:?}"))?;

        tracing::info!(
            ?side,
            row = square.row(),
            col = square.col(),
            ?outcome,
            "move played"
        );
    }

    Ok(game)
}

/// 結果行の文言を返す。
fn describe(outcome: engine::Outcome) -> &'static str {
    match outcome {
        engine::Outcome::Draw => "It's a tie!",
        engine::Outcome::Win(engine::Player::O) => "O wins!",
        engine::Outcome::Win(engine::Player::X) => "X wins!",
        _ => "In progress",
    }
}

/// 引数に従って対局を繰り返し、結果を `out` へ書く。
fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<Tally> {
    if cli.size > MINIMAX_COMFORT_SIZE
        && (cli.x_player == ControllerKind::Minimax || cli.o_player == ControllerKind::Minimax)
    {
        tracing::warn!(
            size = cli.size,
            "minimax searches the whole game tree; boards above 3x3 can take extremely long"
        );
    }

    let rules = engine::Rules::from(cli.rules);
    let mut x_controller = Controller::new(cli.x_player, cli.seed);
    let mut o_controller = Controller::new(cli.o_player, cli.seed.wrapping_add(1));
    let mut tally = Tally::default();

    for index in 1..=cli.games {
        let game = play_one(cli.size, rules, &mut x_controller, &mut o_controller)
            .with_context(|| format!("game {index} failed"))?;
        let outcome = game.outcome();
        tally.record(outcome);

        writeln!(out, "Game {index}:")?;
        write!(out, "{}", game.board())?;
        writeln!(out, "{}", describe(outcome))?;
        writeln!(out)?;
    }

    writeln!(
        out,
        "X wins: {} | O wins: {} | draws: {}",
        tally.x_wins, tally.o_wins, tally.draws
    )?;
    tracing::info!(?tally, games = cli.games, "self-play finished");
    Ok(tally)
}

/// エントリーポイント。
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format, cli.verbose)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)?;
    out.flush().context("failed to flush stdout")
}
