//! テスト用Excelファイル生成

#![allow(dead_code)]

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::path::{Path, PathBuf};

/// 1行分のテストデータ（None は空セル）
pub struct FixtureRow {
    pub label: &'static str,
    pub score: Option<&'static str>,
    pub home: Option<f64>,
    pub draw: Option<f64>,
    pub away: Option<f64>,
    pub date: (u16, u8, u8),
}

pub fn fixture_row(
    label: &'static str,
    score: Option<&'static str>,
    odds: (f64, f64, f64),
) -> FixtureRow {
    FixtureRow {
        label,
        score,
        home: Some(odds.0),
        draw: Some(odds.1),
        away: Some(odds.2),
        date: (2024, 5, 1),
    }
}

/// 元データと同じ見出し（Oyunlar, Hesab, 1, X, 2, Tarix）でExcelを作成
///
/// `1` / `2` の見出しは数値セルとして書き込む。
pub fn write_matches(dir: &Path, name: &str, rows: &[FixtureRow]) -> PathBuf {
    let path = dir.join(name);
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let sheet = workbook.add_worksheet();

    sheet.write_string(0, 0, "Oyunlar").unwrap();
    sheet.write_string(0, 1, "Hesab").unwrap();
    sheet.write_number(0, 2, 1.0).unwrap();
    sheet.write_string(0, 3, "X").unwrap();
    sheet.write_number(0, 4, 2.0).unwrap();
    sheet.write_string(0, 5, "Tarix").unwrap();

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_string(r, 0, row.label).unwrap();
        if let Some(score) = row.score {
            sheet.write_string(r, 1, score).unwrap();
        }
        for (col, value) in [(2u16, row.home), (3, row.draw), (4, row.away)] {
            match value {
                Some(v) => {
                    sheet.write_number(r, col, v).unwrap();
                }
                None => {
                    sheet.write_string(r, col, "-").unwrap();
                }
            }
        }
        let (y, m, d) = row.date;
        let date = ExcelDateTime::from_ymd(y, m, d).unwrap();
        sheet.write_datetime_with_format(r, 5, &date, &date_format).unwrap();
    }

    workbook.save(&path).unwrap();
    path
}

/// 任意の見出しだけのExcelを作成
pub fn write_header_only(dir: &Path, name: &str, titles: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, title) in titles.iter().enumerate() {
        sheet.write_string(0, col as u16, *title).unwrap();
    }
    workbook.save(&path).unwrap();
    path
}
