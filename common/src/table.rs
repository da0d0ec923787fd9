//! 表示用テーブルの組み立て
//!
//! フィルタ・判定済みの行に1始まりの連番を振り、列を固定順に並べる。
//! 列の存在確認は読み込み時に済んでいるため、ここでは失敗しない。

use crate::error::Result;
use crate::outcome::Verdict;
use crate::types::ResultRow;
use serde::Serialize;

/// 表示列（この順で出力する）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Index,
    Label,
    Score,
    HomeOdds,
    DrawOdds,
    AwayOdds,
    BothScored,
    Over,
    Under,
    Date,
}

impl Column {
    pub const ORDER: [Column; 10] = [
        Column::Index,
        Column::Label,
        Column::Score,
        Column::HomeOdds,
        Column::DrawOdds,
        Column::AwayOdds,
        Column::BothScored,
        Column::Over,
        Column::Under,
        Column::Date,
    ];

    /// 判定列・連番列の見出し（元データ由来の列は `None`）
    pub fn fixed_title(&self) -> Option<&'static str> {
        match self {
            Column::Index => Some("Index"),
            Column::BothScored => Some("Qol/Qol"),
            Column::Over => Some("Ust"),
            Column::Under => Some("Alt"),
            _ => None,
        }
    }
}

/// 表示用の1行
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    pub index: usize,
    pub label: String,
    pub score: Option<String>,
    pub home_odds: Option<f64>,
    pub draw_odds: Option<f64>,
    pub away_odds: Option<f64>,
    pub both_scored: Verdict,
    pub over_two_point_five: Verdict,
    pub under_two_point_five: Verdict,
    pub date: String,
}

impl DisplayRow {
    /// 列の表示文字列
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::Index => self.index.to_string(),
            Column::Label => self.label.clone(),
            Column::Score => self.score.clone().unwrap_or_default(),
            Column::HomeOdds => format_odds(self.home_odds),
            Column::DrawOdds => format_odds(self.draw_odds),
            Column::AwayOdds => format_odds(self.away_odds),
            Column::BothScored => self.both_scored.to_string(),
            Column::Over => self.over_two_point_five.to_string(),
            Column::Under => self.under_two_point_five.to_string(),
            Column::Date => self.date.clone(),
        }
    }
}

fn format_odds(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// 連番を振り直して表示行に変換
pub fn assemble(rows: Vec<ResultRow>) -> Vec<DisplayRow> {
    rows.into_iter()
        .enumerate()
        .map(|(i, r)| DisplayRow {
            index: i + 1,
            label: r.row.label,
            score: r.row.score,
            home_odds: r.row.home_odds,
            draw_odds: r.row.draw_odds,
            away_odds: r.row.away_odds,
            both_scored: r.both_scored,
            over_two_point_five: r.over_two_point_five,
            under_two_point_five: r.under_two_point_five,
            date: r.row.date,
        })
        .collect()
}

/// 表示行をJSON文字列に変換
pub fn to_json(rows: &[DisplayRow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}
