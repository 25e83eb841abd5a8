pub mod advisory;
pub mod classify;
pub mod config;
pub mod dimensions;
pub mod engine;
pub mod normalize;
pub mod validation;

pub use classify::{Classification, InvestorProfile, RiskLevel, SfdrArticle};
pub use config::{BandThresholds, DefaultsMode, EngineConfig, Weights};
pub use dimensions::{Dimension, DimensionScores};
pub use engine::{Band, Engine, Overrides, ProjectInput, ScoringResult};
pub use normalize::{clamp, investment_size_factor};
pub use validation::validate_engine_config;
