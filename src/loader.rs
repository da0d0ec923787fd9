//! Excel読み込みモジュール
//!
//! 先頭シートの1行目を見出しとして、設定された列見出しで各項目を特定する。
//! 列が見つからない場合は読み込み時点でエラーにする。

use crate::config::ColumnMapping;
use crate::error::{OddsFilterError, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use chrono::Timelike;
use odds_filter_common::{Dataset, MatchRow};
use std::path::Path;

const SPREADSHEET_EXTENSION: &str = "xlsx";

/// 見出しから特定した列位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnBinding {
    pub label: usize,
    pub score: usize,
    pub home_odds: usize,
    pub draw_odds: usize,
    pub away_odds: usize,
    pub date: usize,
}

impl ColumnBinding {
    /// 見出し行から列位置を決定
    pub fn resolve(header: &[String], mapping: &ColumnMapping) -> Result<Self> {
        let find = |title: &str| {
            header
                .iter()
                .position(|h| h == title.trim())
                .ok_or_else(|| OddsFilterError::SchemaMismatch {
                    column: title.to_string(),
                    available: header.iter().filter(|h| !h.is_empty()).cloned().collect(),
                })
        };

        Ok(Self {
            label: find(&mapping.label)?,
            score: find(&mapping.score)?,
            home_odds: find(&mapping.home_odds)?,
            draw_odds: find(&mapping.draw_odds)?,
            away_odds: find(&mapping.away_odds)?,
            date: find(&mapping.date)?,
        })
    }

    fn read_row(&self, cells: &[Data]) -> MatchRow {
        let text = |i: usize| cells.get(i).map(cell_text).unwrap_or_default();
        let odds = |i: usize| cells.get(i).and_then(coerce_odds);

        MatchRow {
            label: text(self.label),
            home_odds: odds(self.home_odds),
            draw_odds: odds(self.draw_odds),
            away_odds: odds(self.away_odds),
            score: Some(text(self.score)).filter(|s| !s.trim().is_empty()),
            date: text(self.date),
        }
    }
}

/// Excelファイルを読み込む
pub fn load_dataset(path: &Path, mapping: &ColumnMapping) -> Result<Dataset> {
    if !path.exists() {
        return Err(OddsFilterError::FileNotFound(path.display().to_string()));
    }

    let is_xlsx = path
        .extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case(SPREADSHEET_EXTENSION))
        .unwrap_or(false);
    if !is_xlsx {
        return Err(OddsFilterError::UnsupportedFormat(path.display().to_string()));
    }

    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_name = workbook.sheet_names().first().cloned().unwrap_or_default();
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| OddsFilterError::EmptyWorksheet(path.display().to_string()))??;

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .ok_or_else(|| OddsFilterError::EmptyWorksheet(sheet_name.clone()))?
        .iter()
        .map(cell_text)
        .map(|h| h.trim().to_string())
        .collect();

    let binding = ColumnBinding::resolve(&header, mapping)?;
    log::debug!("シート \"{}\" の列位置: {:?}", sheet_name, binding);

    let match_rows: Vec<MatchRow> = rows
        .filter(|cells| !is_blank_row(cells))
        .map(|cells| binding.read_row(cells))
        .collect();

    log::debug!(
        "{}行を読み込み（オッズ欠損を含む行: {}）",
        match_rows.len(),
        match_rows
            .iter()
            .filter(|r| r.home_odds.is_none() || r.draw_odds.is_none() || r.away_odds.is_none())
            .count()
    );

    Ok(Dataset::new(match_rows))
}

/// オッズセルを数値に変換（失敗は `None`）
pub fn coerce_odds(cell: &Data) -> Option<f64> {
    let value = match cell {
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        Data::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    Some(value).filter(|v| v.is_finite())
}

/// セルを表示用文字列に変換
///
/// 整数値の数値セルは小数点なしで表す（見出し `1` / `2` のため）。
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(d) if d.hour() == 0 && d.minute() == 0 && d.second() == 0 => {
                d.format("%Y-%m-%d").to_string()
            }
            Some(d) => d.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => dt.as_f64().to_string(),
        },
        other => other.to_string(),
    }
}

fn is_blank_row(cells: &[Data]) -> bool {
    cells.iter().all(|c| match c {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    })
}
