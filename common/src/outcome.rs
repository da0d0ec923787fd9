//! 試合結果の判定
//!
//! - Qol/Qol: 両チーム得点
//! - Ust / Alt: 合計得点 2.5 超 / 2.5 以下
//!
//! スコアがパースできない行はすべて "No" になる。
//! Alt（2.5以下）もパース失敗時は "Yes" ではなく "No" を返す。

use crate::score::parse_score;
use crate::types::{MatchRow, ResultRow};
use serde::{Deserialize, Serialize};

/// オーバー/アンダーの基準線
pub const GOAL_LINE: f64 = 2.5;

/// Yes/No 判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Yes,
    No,
}

impl Verdict {
    pub fn is_yes(&self) -> bool {
        matches!(self, Verdict::Yes)
    }
}

impl From<bool> for Verdict {
    fn from(value: bool) -> Self {
        if value {
            Verdict::Yes
        } else {
            Verdict::No
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Yes => write!(f, "Yes"),
            Verdict::No => write!(f, "No"),
        }
    }
}

/// 両チームが1点以上取ったか（Qol/Qol）
pub fn both_teams_scored(score: Option<&str>) -> Verdict {
    match parse_score(score) {
        Ok(s) => Verdict::from(s.home > 0 && s.away > 0),
        Err(_) => Verdict::No,
    }
}

/// 合計得点が2.5を超えたか（Ust）
pub fn total_goals_over(score: Option<&str>) -> Verdict {
    match parse_score(score) {
        Ok(s) => Verdict::from((s.total() as f64) > GOAL_LINE),
        Err(_) => Verdict::No,
    }
}

/// 合計得点が2.5以下か（Alt）
///
/// `total_goals_over` の否定ではない。パース失敗時はどちらも "No"。
pub fn total_goals_under(score: Option<&str>) -> Verdict {
    match parse_score(score) {
        Ok(s) => Verdict::from((s.total() as f64) <= GOAL_LINE),
        Err(_) => Verdict::No,
    }
}

/// 判定列を付与した新しい行を作る
pub fn annotate(row: &MatchRow) -> ResultRow {
    let score = row.score();
    ResultRow {
        row: row.clone(),
        both_scored: both_teams_scored(score),
        over_two_point_five: total_goals_over(score),
        under_two_point_five: total_goals_under(score),
    }
}
