//! 試合結果パーサー
//!
//! "ホーム得点:アウェイ得点" 形式の文字列を2つの整数に分解する。

use crate::error::{Error, Result};

/// パース済みスコア
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub home: i64,
    pub away: i64,
}

impl Score {
    /// 合計得点（i64同士の和はi128で溢れない）
    pub fn total(&self) -> i128 {
        i128::from(self.home) + i128::from(self.away)
    }
}

/// スコア文字列をパース
///
/// 最初の `:` で分割し、両側を10進整数として解釈する。
/// 前後の空白は無視する。
///
/// # Arguments
/// * `text` - スコア文字列（欠損の場合は `None`）
///
/// # Returns
/// * `Ok(Score)` - パース成功
/// * `Err(Error::ScoreParse)` - 欠損、`:` なし、数値でない場合
///
/// # Examples
/// ```
/// use odds_filter_common::parse_score;
///
/// let score = parse_score(Some("2:1")).unwrap();
/// assert_eq!(score.total(), 3);
/// assert!(parse_score(Some("2-1")).is_err());
/// ```
pub fn parse_score(text: Option<&str>) -> Result<Score> {
    let text = text.ok_or_else(|| Error::ScoreParse("スコアが空です".into()))?;

    let (home, away) = text
        .split_once(':')
        .ok_or_else(|| Error::ScoreParse(text.to_string()))?;

    let home = home
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::ScoreParse(text.to_string()))?;
    let away = away
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::ScoreParse(text.to_string()))?;

    Ok(Score { home, away })
}
