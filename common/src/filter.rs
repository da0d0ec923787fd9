//! オッズフィルタ
//!
//! 3つのオッズ列が目標値 ± 許容幅に収まる行を抽出する。
//! 入力の並び順は保持する。

use crate::error::{Error, Result};
use crate::types::{MatchRow, OddsTriple};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// デフォルトの許容幅
pub const DEFAULT_TOLERANCE: f64 = 0.15;

/// 対話入力で許可する許容幅の範囲
pub const TOLERANCE_RANGE: RangeInclusive<f64> = 0.1..=0.5;

/// 行を残す条件
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterPolicy {
    /// 3つすべて一致
    #[default]
    #[serde(rename = "all")]
    AllThree,
    /// 3つのうち2つ以上一致
    #[serde(rename = "two")]
    AtLeastTwo,
}

impl FilterPolicy {
    pub const ALL: [FilterPolicy; 2] = [FilterPolicy::AllThree, FilterPolicy::AtLeastTwo];

    /// 一致数から行を残すか判定
    fn accepts(&self, matches: usize) -> bool {
        match self {
            FilterPolicy::AllThree => matches == 3,
            FilterPolicy::AtLeastTwo => matches >= 2,
        }
    }

    /// 対話メニュー用の説明
    pub fn description(&self) -> &'static str {
        match self {
            FilterPolicy::AllThree => "all: 3つすべてのオッズが一致",
            FilterPolicy::AtLeastTwo => "two: 3つのうち2つ以上が一致",
        }
    }
}

impl std::str::FromStr for FilterPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" | "all-three" | "3" => Ok(FilterPolicy::AllThree),
            "two" | "at-least-two" | "2" => Ok(FilterPolicy::AtLeastTwo),
            _ => Err(Error::InvalidPolicy(s.to_string())),
        }
    }
}

impl std::fmt::Display for FilterPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterPolicy::AllThree => write!(f, "all"),
            FilterPolicy::AtLeastTwo => write!(f, "two"),
        }
    }
}

/// 1回のフィルタ実行の条件
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub targets: OddsTriple,
    pub tolerance: f64,
    pub policy: FilterPolicy,
}

impl FilterCriteria {
    /// 条件を作成
    ///
    /// 許容幅は0以上の有限値であればよい（0.1〜0.5の制限は対話入力側で行う）。
    pub fn new(targets: OddsTriple, tolerance: f64, policy: FilterPolicy) -> Result<Self> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(Error::InvalidTolerance(tolerance));
        }
        Ok(Self {
            targets,
            tolerance,
            policy,
        })
    }

    /// デフォルト許容幅（0.15）で作成
    pub fn with_default_tolerance(targets: OddsTriple, policy: FilterPolicy) -> Self {
        Self {
            targets,
            tolerance: DEFAULT_TOLERANCE,
            policy,
        }
    }

    /// 行のうち許容範囲に入ったオッズの数
    pub fn match_count(&self, row: &MatchRow) -> usize {
        [
            (row.home_odds, self.targets.home),
            (row.draw_odds, self.targets.draw),
            (row.away_odds, self.targets.away),
        ]
        .into_iter()
        .filter(|&(value, target)| within_tolerance(value, target, self.tolerance))
        .count()
    }

    pub fn accepts(&self, row: &MatchRow) -> bool {
        self.policy.accepts(self.match_count(row))
    }
}

/// `target - tolerance <= value <= target + tolerance`
///
/// 値が欠損（`None`）またはNaNの場合は常に `false`。
pub fn within_tolerance(value: Option<f64>, target: f64, tolerance: f64) -> bool {
    match value {
        Some(v) if v.is_finite() => target - tolerance <= v && v <= target + tolerance,
        _ => false,
    }
}

/// 条件に合う行を入力順のまま返す
pub fn filter_rows<'a>(rows: &'a [MatchRow], criteria: &FilterCriteria) -> Vec<&'a MatchRow> {
    rows.iter().filter(|row| criteria.accepts(row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn odds_row(label: &str, home: Option<f64>, draw: Option<f64>, away: Option<f64>) -> MatchRow {
        MatchRow {
            label: label.to_string(),
            home_odds: home,
            draw_odds: draw,
            away_odds: away,
            score: Some("2:1".into()),
            ..Default::default()
        }
    }

    fn criteria(home: f64, draw: f64, away: f64, policy: FilterPolicy) -> FilterCriteria {
        FilterCriteria::new(OddsTriple::new(home, draw, away), 0.15, policy).unwrap()
    }

    #[test]
    fn test_within_tolerance_inclusive() {
        assert!(within_tolerance(Some(2.25), 2.0, 0.25));
        assert!(within_tolerance(Some(1.75), 2.0, 0.25));
        assert!(!within_tolerance(Some(2.26), 2.0, 0.25));
        assert!(within_tolerance(Some(2.0), 2.0, 0.0));
    }

    #[test]
    fn test_within_tolerance_missing_never_matches() {
        assert!(!within_tolerance(None, 2.0, 0.5));
        assert!(!within_tolerance(Some(f64::NAN), 2.0, 0.5));
        assert!(!within_tolerance(None, 0.0, 100.0));
    }

    #[test]
    fn test_all_three_scenario() {
        let rows = vec![odds_row("A", Some(1.90), Some(3.40), Some(4.00))];
        let c = criteria(2.00, 3.30, 4.05, FilterPolicy::AllThree);
        assert_eq!(filter_rows(&rows, &c).len(), 1);
    }

    #[test]
    fn test_two_of_three_scenario() {
        let rows = vec![odds_row("A", Some(1.90), Some(3.40), Some(4.00))];

        let all = criteria(2.00, 3.30, 5.00, FilterPolicy::AllThree);
        assert!(filter_rows(&rows, &all).is_empty());

        let two = criteria(2.00, 3.30, 5.00, FilterPolicy::AtLeastTwo);
        assert_eq!(filter_rows(&rows, &two).len(), 1);
    }

    #[test]
    fn test_single_match_rejected_by_two() {
        let rows = vec![odds_row("A", Some(1.90), Some(9.00), Some(9.00))];
        let c = criteria(2.00, 3.30, 4.00, FilterPolicy::AtLeastTwo);
        assert!(filter_rows(&rows, &c).is_empty());
    }

    #[test]
    fn test_missing_odds_count_as_mismatch() {
        let rows = vec![
            odds_row("missing-away", Some(2.0), Some(3.3), None),
            odds_row("missing-two", Some(2.0), None, None),
        ];

        let all = criteria(2.0, 3.3, 4.0, FilterPolicy::AllThree);
        assert!(filter_rows(&rows, &all).is_empty());

        let two = criteria(2.0, 3.3, 4.0, FilterPolicy::AtLeastTwo);
        let kept = filter_rows(&rows, &two);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].label, "missing-away");
    }

    #[test]
    fn test_order_preserved() {
        let rows = vec![
            odds_row("first", Some(2.0), Some(3.3), Some(4.0)),
            odds_row("skip", Some(9.0), Some(9.0), Some(9.0)),
            odds_row("second", Some(2.1), Some(3.2), Some(4.1)),
            odds_row("third", Some(1.9), Some(3.4), Some(3.9)),
        ];
        let c = criteria(2.0, 3.3, 4.0, FilterPolicy::AllThree);
        let labels: Vec<&str> = filter_rows(&rows, &c).iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_all_three_subset_of_at_least_two() {
        let values = [None, Some(1.8), Some(2.0), Some(2.2), Some(3.3), Some(4.0)];
        let mut rows = Vec::new();
        for h in values {
            for d in values {
                for a in values {
                    rows.push(odds_row("r", h, d, a));
                }
            }
        }

        let targets = OddsTriple::new(2.0, 3.3, 4.0);
        for tolerance in [0.0, 0.1, 0.15, 0.3, 1.5] {
            let all = FilterCriteria::new(targets, tolerance, FilterPolicy::AllThree).unwrap();
            let two = FilterCriteria::new(targets, tolerance, FilterPolicy::AtLeastTwo).unwrap();
            for row in &rows {
                if all.accepts(row) {
                    assert!(two.accepts(row), "{:?} tol={}", row, tolerance);
                }
            }
        }
    }

    #[test]
    fn test_empty_input() {
        let c = criteria(2.0, 3.3, 4.0, FilterPolicy::AtLeastTwo);
        assert!(filter_rows(&[], &c).is_empty());
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let targets = OddsTriple::default();
        assert!(matches!(
            FilterCriteria::new(targets, -0.1, FilterPolicy::AllThree),
            Err(Error::InvalidTolerance(_))
        ));
        assert!(FilterCriteria::new(targets, f64::NAN, FilterPolicy::AllThree).is_err());
        // 対話入力の範囲外でも0以上なら受け付ける
        assert!(FilterCriteria::new(targets, 2.0, FilterPolicy::AllThree).is_ok());
        assert!(FilterCriteria::new(targets, 0.0, FilterPolicy::AllThree).is_ok());
    }

    #[test]
    fn test_default_tolerance() {
        let c = FilterCriteria::with_default_tolerance(OddsTriple::default(), FilterPolicy::AllThree);
        assert_eq!(c.tolerance, DEFAULT_TOLERANCE);
        assert!(TOLERANCE_RANGE.contains(&DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("all".parse::<FilterPolicy>().unwrap(), FilterPolicy::AllThree);
        assert_eq!("TWO".parse::<FilterPolicy>().unwrap(), FilterPolicy::AtLeastTwo);
        assert!(matches!("one".parse::<FilterPolicy>(), Err(Error::InvalidPolicy(_))));
        assert_eq!(FilterPolicy::AtLeastTwo.to_string(), "two");
    }

    #[test]
    fn test_policy_serde_names() {
        let json = serde_json::to_string(&FilterPolicy::AtLeastTwo).unwrap();
        assert_eq!(json, "\"two\"");
        let parsed: FilterPolicy = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(parsed, FilterPolicy::AllThree);
    }
}
