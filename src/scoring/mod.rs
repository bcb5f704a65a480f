pub mod bands;
pub mod engine;
pub mod scales;
pub mod validation;

pub use engine::{evaluate, moews, omqsofa, qsofa, sirs, sos, Assessment, RiskTier, ScaleResult};
pub use scales::{Scale, ScaleDef};
pub use validation::validate_snapshot;
