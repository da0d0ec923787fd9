//! 結果表示モジュール
//!
//! 表示行を端末向けの桁揃えテーブルまたはJSONに変換する。

use crate::config::ColumnMapping;
use crate::error::Result;
use odds_filter_common::table::to_json;
use odds_filter_common::{Column, DisplayRow, FilterOutcome, MatchRow};
use std::io::Write;

/// 一致なしの場合の表示
pub const NO_MATCHES: &str = "No matches found with the specified odds.";

/// 列見出し（固定順）
pub fn column_titles(mapping: &ColumnMapping) -> Vec<String> {
    Column::ORDER
        .iter()
        .map(|&column| match column.fixed_title() {
            Some(title) => title.to_string(),
            None => source_title(column, mapping).to_string(),
        })
        .collect()
}

fn source_title(column: Column, mapping: &ColumnMapping) -> &str {
    match column {
        Column::Label => &mapping.label,
        Column::Score => &mapping.score,
        Column::HomeOdds => &mapping.home_odds,
        Column::DrawOdds => &mapping.draw_odds,
        Column::AwayOdds => &mapping.away_odds,
        Column::Date => &mapping.date,
        _ => "",
    }
}

/// 表示行をテーブル文字列に変換
pub fn render_table(rows: &[DisplayRow], mapping: &ColumnMapping) -> String {
    let cells = rows
        .iter()
        .map(|row| Column::ORDER.iter().map(|&c| row.cell(c)).collect())
        .collect();
    format_grid(&column_titles(mapping), cells)
}

/// 読み込んだ行のプレビュー
pub fn render_preview(rows: &[MatchRow], mapping: &ColumnMapping) -> String {
    let titles = vec![
        mapping.label.clone(),
        mapping.score.clone(),
        mapping.home_odds.clone(),
        mapping.draw_odds.clone(),
        mapping.away_odds.clone(),
        mapping.date.clone(),
    ];
    let odds = |v: Option<f64>| v.map(|x| x.to_string()).unwrap_or_default();
    let cells = rows
        .iter()
        .map(|r| {
            vec![
                r.label.clone(),
                r.score.clone().unwrap_or_default(),
                odds(r.home_odds),
                odds(r.draw_odds),
                odds(r.away_odds),
                r.date.clone(),
            ]
        })
        .collect();
    format_grid(&titles, cells)
}

/// フィルタ結果を標準出力に表示
pub fn print_outcome(outcome: &FilterOutcome, mapping: &ColumnMapping, json: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    write_outcome(&mut stdout.lock(), &mut stderr.lock(), outcome, mapping, json)
}

/// フィルタ結果を書き出す
///
/// JSON出力時は標準出力をJSONだけにするため、一致なしの通知は `err` に書く。
pub fn write_outcome<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    outcome: &FilterOutcome,
    mapping: &ColumnMapping,
    json: bool,
) -> Result<()> {
    if json {
        writeln!(out, "{}", to_json(&outcome.rows)?)?;
        if outcome.is_empty() {
            writeln!(err, "{}", NO_MATCHES)?;
        }
        return Ok(());
    }

    if outcome.is_empty() {
        writeln!(out, "{}", NO_MATCHES)?;
    } else {
        writeln!(out, "Filtered Results: {}/{}件", outcome.matched(), outcome.total_rows)?;
        write!(out, "{}", render_table(&outcome.rows, mapping))?;
    }
    Ok(())
}

fn format_grid(titles: &[String], rows: Vec<Vec<String>>) -> String {
    let mut widths: Vec<usize> = titles.iter().map(|t| t.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    push_line(&mut out, titles, &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| {
            let pad = w.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
