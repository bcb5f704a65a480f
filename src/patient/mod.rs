pub mod types;

pub use types::{ParamId, ParamKind, ParamValue, PatientSnapshot};
