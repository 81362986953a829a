//! Side-by-side attribute scoring for comparable products.
//!
//! Two [`SpecRecord`]s are scored category by category against immutable
//! [`ScoringTables`]: numeric values are normalized into their configured
//! range, booleans score 10 or 0, text and unknown values are shown but not
//! scored, and neutral attributes never move the verdict.

pub mod config;
pub mod error;
pub mod records;
pub mod report;
pub mod scoring;
pub mod types;

pub use error::{Result, VersusError};
pub use scoring::category::{compare_category, CategoryComparison};
pub use scoring::compare;
pub use scoring::gradient::{category_styles, gradient_style, GradientStyle};
pub use scoring::overall::{compare_overall, OverallComparison};
pub use scoring::range::{score_pair, SubScore};
pub use scoring::tables::{AttributeRange, ScoringTables, Thresholds};
pub use types::key::AttributeKey;
pub use types::record::SpecRecord;
pub use types::value::AttributeValue;
