//! 対話式絞り込みモジュール
//!
//! ファイルは1回だけ読み込み、条件入力 → 絞り込み → 表示 を繰り返す。
//! 読み込んだデータセットは変更しない。

use crate::config::Config;
use crate::error::Result;
use crate::loader;
use crate::render;
use dialoguer::{Confirm, Input, Select};
use odds_filter_common::{pipeline, FilterCriteria, FilterPolicy, OddsTriple, TOLERANCE_RANGE};
use std::path::Path;

/// 前回入力値（次回のデフォルトになる）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellInputs {
    pub targets: OddsTriple,
    pub tolerance: f64,
    pub policy: FilterPolicy,
}

impl ShellInputs {
    pub fn from_config(config: &Config) -> Self {
        Self {
            targets: OddsTriple::default(),
            tolerance: config.default_tolerance,
            policy: config.default_policy,
        }
    }

    pub fn criteria(&self) -> Result<FilterCriteria> {
        Ok(FilterCriteria::new(self.targets, self.tolerance, self.policy)?)
    }
}

/// 許容幅入力のチェック
pub fn check_tolerance(value: &f64) -> std::result::Result<(), String> {
    if TOLERANCE_RANGE.contains(value) {
        Ok(())
    } else {
        Err(format!(
            "{}〜{} の範囲で入力してください",
            TOLERANCE_RANGE.start(),
            TOLERANCE_RANGE.end()
        ))
    }
}

/// 選択肢の位置
pub fn policy_index(policy: FilterPolicy) -> usize {
    FilterPolicy::ALL
        .iter()
        .position(|&p| p == policy)
        .unwrap_or(0)
}

/// 対話式で絞り込み
pub fn run_interactive(file: &Path, config: &Config) -> Result<()> {
    let dataset = loader::load_dataset(file, &config.columns)?;

    println!("✔ Data Loaded Successfully! ({}行)\n", dataset.len());
    print!("{}", render::render_preview(dataset.head(config.preview_rows), &config.columns));
    println!();

    let mut inputs = ShellInputs::from_config(config);

    loop {
        inputs = prompt_inputs(&inputs)?;
        let criteria = inputs.criteria()?;
        log::debug!("条件: {:?}", criteria);

        let outcome = pipeline::run(&dataset, &criteria);
        println!();
        render::print_outcome(&outcome, &config.columns, false)?;
        println!();

        let again = Confirm::new()
            .with_prompt("別の条件で絞り込みますか?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }
    }

    Ok(())
}

/// 条件入力プロンプト
fn prompt_inputs(prev: &ShellInputs) -> Result<ShellInputs> {
    let home: f64 = Input::new()
        .with_prompt("ホーム勝ちオッズ")
        .default(prev.targets.home)
        .interact_text()?;

    let draw: f64 = Input::new()
        .with_prompt("引き分けオッズ")
        .default(prev.targets.draw)
        .interact_text()?;

    let away: f64 = Input::new()
        .with_prompt("アウェイ勝ちオッズ")
        .default(prev.targets.away)
        .interact_text()?;

    let tolerance: f64 = Input::new()
        .with_prompt(format!(
            "許容幅 ({}〜{})",
            TOLERANCE_RANGE.start(),
            TOLERANCE_RANGE.end()
        ))
        .default(prev.tolerance)
        .validate_with(check_tolerance)
        .interact_text()?;

    let labels: Vec<&str> = FilterPolicy::ALL.iter().map(|p| p.description()).collect();
    let selected = Select::new()
        .with_prompt("絞り込みモード")
        .items(&labels)
        .default(policy_index(prev.policy))
        .interact()?;

    Ok(ShellInputs {
        targets: OddsTriple::new(home, draw, away),
        tolerance,
        policy: FilterPolicy::ALL[selected],
    })
}
