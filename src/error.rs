use thiserror::Error;

#[derive(Error, Debug)]
pub enum OddsFilterError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("対応していないファイル形式です: {0}（.xlsx のみ）")]
    UnsupportedFormat(String),

    #[error("ワークシートが空です: {0}")]
    EmptyWorksheet(String),

    #[error("列 \"{column}\" が見つかりません（見つかった列: {}）", .available.join(", "))]
    SchemaMismatch {
        column: String,
        available: Vec<String>,
    },

    #[error("Excel読み込みエラー: {0}")]
    Excel(#[from] calamine::XlsxError),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] odds_filter_common::Error),
}

pub type Result<T> = std::result::Result<T, OddsFilterError>;
