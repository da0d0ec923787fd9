//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Score parse error: {0}")]
    ScoreParse(String),

    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(f64),

    #[error("Unknown filter mode: {0}. Use all or two")]
    InvalidPolicy(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
