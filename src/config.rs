use crate::error::{OddsFilterError, Result};
use odds_filter_common::{FilterPolicy, DEFAULT_TOLERANCE, TOLERANCE_RANGE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 表の列見出しと項目の対応
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnMapping {
    pub label: String,
    pub score: String,
    pub home_odds: String,
    pub draw_odds: String,
    pub away_odds: String,
    pub date: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            label: "Oyunlar".into(),
            score: "Hesab".into(),
            home_odds: "1".into(),
            draw_odds: "X".into(),
            away_odds: "2".into(),
            date: "Tarix".into(),
        }
    }
}

impl ColumnMapping {
    /// `field=見出し` 形式で1項目を変更
    pub fn set(&mut self, assignment: &str) -> Result<()> {
        let (field, header) = assignment
            .split_once('=')
            .ok_or_else(|| OddsFilterError::Config(format!("`項目=見出し` の形式で指定してください: {}", assignment)))?;

        let header = header.trim();
        if header.is_empty() {
            return Err(OddsFilterError::Config(format!("見出しが空です: {}", assignment)));
        }

        let slot = match field.trim() {
            "label" => &mut self.label,
            "score" => &mut self.score,
            "home" | "homeOdds" => &mut self.home_odds,
            "draw" | "drawOdds" => &mut self.draw_odds,
            "away" | "awayOdds" => &mut self.away_odds,
            "date" => &mut self.date,
            other => {
                return Err(OddsFilterError::Config(format!(
                    "不明な項目: {}（label/score/home/draw/away/date）",
                    other
                )))
            }
        };
        *slot = header.to_string();
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub columns: ColumnMapping,
    pub default_tolerance: f64,
    pub default_policy: FilterPolicy,
    pub preview_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: ColumnMapping::default(),
            default_tolerance: DEFAULT_TOLERANCE,
            default_policy: FilterPolicy::AllThree,
            preview_rows: 5,
        }
    }
}

/// `config` サブコマンドの変更内容
#[derive(Debug, Clone, Default)]
pub struct ConfigEdit {
    pub set_column: Vec<String>,
    pub set_tolerance: Option<f64>,
    pub set_mode: Option<FilterPolicy>,
    pub reset: bool,
}

impl ConfigEdit {
    pub fn changes_anything(&self) -> bool {
        self.reset || !self.set_column.is_empty() || self.set_tolerance.is_some() || self.set_mode.is_some()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 読み込んで範囲チェックする
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = Self::read_from(path)?;
        config.validate()?;
        Ok(config)
    }

    /// 範囲チェックなしで読み込む（ファイルがなければ初期値）
    fn read_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            log::debug!("設定を読み込み: {}", path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 変更を適用して保存し、結果の設定を返す
    ///
    /// `reset` のときは既存ファイルを読まないので、壊れた設定からも復旧できる。
    pub fn edit_at(path: &Path, edit: &ConfigEdit) -> Result<Self> {
        let mut config = if edit.reset {
            Self::default()
        } else {
            Self::read_from(path)?
        };

        for assignment in &edit.set_column {
            config.columns.set(assignment)?;
        }
        if let Some(tolerance) = edit.set_tolerance {
            config.default_tolerance = tolerance;
        }
        if let Some(mode) = edit.set_mode {
            config.default_policy = mode;
        }

        if edit.changes_anything() {
            config.save_to(path)?;
        }
        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| OddsFilterError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("odds-filter").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        if !TOLERANCE_RANGE.contains(&self.default_tolerance) {
            return Err(OddsFilterError::Config(format!(
                "default_tolerance は {}〜{} の範囲で指定してください: {}",
                TOLERANCE_RANGE.start(),
                TOLERANCE_RANGE.end(),
                self.default_tolerance
            )));
        }
        Ok(())
    }
}
