//! Odds Filter Common Library
//!
//! CLIと対話シェルで共有される型と判定ロジック

pub mod types;
pub mod error;
pub mod score;
pub mod outcome;
pub mod filter;
pub mod table;
pub mod pipeline;

pub use types::{Dataset, MatchRow, OddsTriple, ResultRow};
pub use error::{Error, Result};
pub use score::{parse_score, Score};
pub use outcome::{annotate, both_teams_scored, total_goals_over, total_goals_under, Verdict, GOAL_LINE};
pub use filter::{filter_rows, within_tolerance, FilterCriteria, FilterPolicy, DEFAULT_TOLERANCE, TOLERANCE_RANGE};
pub use table::{assemble, Column, DisplayRow};
pub use pipeline::{run, FilterOutcome};
