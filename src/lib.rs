//! Obstetric sepsis screening: a pure scoring engine for the SIRS, qSOFA,
//! omqSOFA, MOEWS and SOS scales, plus the input/output plumbing the CLI
//! front end uses. The engine lives in [`scoring`]; everything else is
//! presentation support with no decision logic of its own.

pub mod input;
pub mod output;
pub mod params;
pub mod patient;
pub mod scoring;
