//! 試合データの型定義
//!
//! CLIと対話シェルで共有される型:
//! - MatchRow: アップロードされた表の1行（数値変換済み）
//! - Dataset: 読み込み済みの表全体（不変）
//! - ResultRow: フィルタ通過後に判定列を付与した行

use crate::outcome::Verdict;
use serde::{Deserialize, Serialize};

/// 3種類のオッズ（ホーム勝ち / 引き分け / アウェイ勝ち）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OddsTriple {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

impl OddsTriple {
    pub fn new(home: f64, draw: f64, away: f64) -> Self {
        Self { home, draw, away }
    }
}

/// 試合1行
///
/// オッズは読み込み時に数値変換済み。変換できなかったセルは `None` で、
/// どの許容範囲にも一致しない。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRow {
    /// 対戦カード（自由記述）
    pub label: String,

    #[serde(default)]
    pub home_odds: Option<f64>,

    #[serde(default)]
    pub draw_odds: Option<f64>,

    #[serde(default)]
    pub away_odds: Option<f64>,

    /// 試合結果 "ホーム:アウェイ"（欠損あり）
    #[serde(default)]
    pub score: Option<String>,

    /// 日付（そのまま表示）
    #[serde(default)]
    pub date: String,
}

impl MatchRow {
    pub fn score(&self) -> Option<&str> {
        self.score.as_deref()
    }
}

/// 読み込み済みデータセット
///
/// 1回のアップロードにつき1つ。フィルタ処理は借用のみで変更しない。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<MatchRow>,
}

impl Dataset {
    pub fn new(rows: Vec<MatchRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[MatchRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 先頭n行（プレビュー用）
    pub fn head(&self, n: usize) -> &[MatchRow] {
        &self.rows[..n.min(self.rows.len())]
    }
}

impl From<Vec<MatchRow>> for Dataset {
    fn from(rows: Vec<MatchRow>) -> Self {
        Self::new(rows)
    }
}

/// 判定列付きの行
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    pub row: MatchRow,
    pub both_scored: Verdict,                 // Qol/Qol
    pub over_two_point_five: Verdict,         // Ust
    pub under_two_point_five: Verdict,        // Alt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(label: &str) -> MatchRow {
        MatchRow {
            label: label.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_dataset_head_shorter_than_n() {
        let dataset = Dataset::new(vec![row("A"), row("B")]);
        assert_eq!(dataset.head(5).len(), 2);
        assert_eq!(dataset.head(1)[0].label, "A");
    }

    #[test]
    fn test_dataset_empty() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.head(3).is_empty());
    }

    #[test]
    fn test_match_row_deserialize_defaults() {
        let json = r#"{"label": "Qarabağ - Neftçi", "homeOdds": 1.9}"#;
        let parsed: MatchRow = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.label, "Qarabağ - Neftçi");
        assert_eq!(parsed.home_odds, Some(1.9));
        assert_eq!(parsed.draw_odds, None);
        assert!(parsed.score().is_none());
        assert!(parsed.date.is_empty());
    }
}
