//! フィルタ → 判定 → 表示用整形 の一連処理

use crate::filter::{filter_rows, FilterCriteria};
use crate::outcome::annotate;
use crate::table::{assemble, DisplayRow};
use crate::types::Dataset;

/// 1回の実行結果
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub rows: Vec<DisplayRow>,
    /// 入力行数
    pub total_rows: usize,
}

impl FilterOutcome {
    pub fn matched(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// データセットにフィルタを適用し表示行を返す
///
/// データセットは借用のみ。同じデータセットで何度実行しても互いに影響しない。
pub fn run(dataset: &Dataset, criteria: &FilterCriteria) -> FilterOutcome {
    let annotated = filter_rows(dataset.rows(), criteria)
        .into_iter()
        .map(annotate)
        .collect();

    FilterOutcome {
        rows: assemble(annotated),
        total_rows: dataset.len(),
    }
}
