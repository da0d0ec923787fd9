use clap::{Parser, Subcommand};
use odds_filter_common::{FilterPolicy, TOLERANCE_RANGE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "odds-filter")]
#[command(about = "試合オッズ絞り込み・結果判定ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// オッズで試合を絞り込み、判定列を付けて表示
    Filter {
        /// 試合データのExcelファイル (.xlsx)
        #[arg(required = true)]
        file: PathBuf,

        /// ホーム勝ちオッズ
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        home: f64,

        /// 引き分けオッズ
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        draw: f64,

        /// アウェイ勝ちオッズ
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        away: f64,

        /// 許容幅 (0.1〜0.5、省略時は設定値)
        #[arg(short, long, value_parser = parse_tolerance)]
        tolerance: Option<f64>,

        /// 絞り込みモード (all/two、省略時は設定値)
        #[arg(short, long)]
        mode: Option<FilterPolicy>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 読み込み結果の先頭行を表示
    Preview {
        /// 試合データのExcelファイル (.xlsx)
        #[arg(required = true)]
        file: PathBuf,

        /// 表示行数（省略時は設定値）
        #[arg(short, long)]
        rows: Option<usize>,
    },

    /// 対話的に条件を入力して絞り込み
    Interactive {
        /// 試合データのExcelファイル (.xlsx)
        #[arg(required = true)]
        file: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 列見出しを設定 (例: score=Hesab)
        #[arg(long, value_name = "FIELD=HEADER")]
        set_column: Vec<String>,

        /// デフォルトの許容幅を設定
        #[arg(long, value_parser = parse_tolerance)]
        set_tolerance: Option<f64>,

        /// デフォルトの絞り込みモードを設定 (all/two)
        #[arg(long)]
        set_mode: Option<FilterPolicy>,

        /// 設定を初期値に戻す
        #[arg(long)]
        reset: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 許容幅の入力値チェック
pub fn parse_tolerance(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("数値ではありません: {}", s))?;

    if TOLERANCE_RANGE.contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "許容幅は {}〜{} の範囲で指定してください: {}",
            TOLERANCE_RANGE.start(),
            TOLERANCE_RANGE.end(),
            value
        ))
    }
}
