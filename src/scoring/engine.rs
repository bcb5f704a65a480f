use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::bands::{numeric_points, token_points};
use super::scales::Scale;
use crate::patient::PatientSnapshot;

/// Risk bucket derived from a scale's total score via fixed cut points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Display label, e.g. "High risk".
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low risk",
            RiskTier::Medium => "Medium risk",
            RiskTier::High => "High risk",
        }
    }

    /// Class code for presentation layers, e.g. "high-risk".
    pub fn class_code(&self) -> &'static str {
        match self {
            RiskTier::Low => "low-risk",
            RiskTier::Medium => "medium-risk",
            RiskTier::High => "high-risk",
        }
    }
}

/// Outcome of evaluating one scale against a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleResult {
    pub score: u32,
    /// How many of the scale's parameters were actually supplied.
    pub used_params: u32,
    /// How many parameters the scale considers, regardless of input.
    pub total_params: u32,
    pub risk: RiskTier,
    pub interpretation: &'static str,
}

impl Serialize for ScaleResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ScaleResult", 6)?;
        state.serialize_field("score", &self.score)?;
        state.serialize_field("used_params", &self.used_params)?;
        state.serialize_field("total_params", &self.total_params)?;
        state.serialize_field("risk", self.risk.label())?;
        state.serialize_field("risk_class", self.risk.class_code())?;
        state.serialize_field("interpretation", self.interpretation)?;
        state.end()
    }
}

/// Results for all five scales, in fixed presentation order. Serializes as a
/// mapping keyed by scale id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub sirs: ScaleResult,
    pub qsofa: ScaleResult,
    pub omqsofa: ScaleResult,
    pub moews: ScaleResult,
    pub sos: ScaleResult,
}

impl Assessment {
    pub fn get(&self, scale: Scale) -> &ScaleResult {
        match scale {
            Scale::Sirs => &self.sirs,
            Scale::Qsofa => &self.qsofa,
            Scale::Omqsofa => &self.omqsofa,
            Scale::Moews => &self.moews,
            Scale::Sos => &self.sos,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Scale, &ScaleResult)> + '_ {
        Scale::ALL.into_iter().map(move |scale| (scale, self.get(scale)))
    }
}

/// Evaluate every scale against the same snapshot.
///
/// Pure and stateless: the same snapshot always yields the same assessment,
/// and the snapshot is never mutated.
pub fn evaluate(snapshot: &PatientSnapshot) -> Assessment {
    Assessment {
        sirs: sirs(snapshot),
        qsofa: qsofa(snapshot),
        omqsofa: omqsofa(snapshot),
        moews: moews(snapshot),
        sos: sos(snapshot),
    }
}

pub fn sirs(snapshot: &PatientSnapshot) -> ScaleResult {
    evaluate_scale(Scale::Sirs, snapshot)
}

pub fn qsofa(snapshot: &PatientSnapshot) -> ScaleResult {
    evaluate_scale(Scale::Qsofa, snapshot)
}

pub fn omqsofa(snapshot: &PatientSnapshot) -> ScaleResult {
    evaluate_scale(Scale::Omqsofa, snapshot)
}

pub fn moews(snapshot: &PatientSnapshot) -> ScaleResult {
    evaluate_scale(Scale::Moews, snapshot)
}

pub fn sos(snapshot: &PatientSnapshot) -> ScaleResult {
    evaluate_scale(Scale::Sos, snapshot)
}

fn evaluate_scale(scale: Scale, snapshot: &PatientSnapshot) -> ScaleResult {
    let def = scale.def();
    let mut score = 0;
    let mut used_params = 0;

    // Each parameter contributes independently; a missing or non-coercible
    // value contributes nothing and is not counted as used.
    for (id, bands) in def.numeric {
        if let Some(value) = snapshot.number(*id) {
            used_params += 1;
            score += numeric_points(bands, value);
        }
    }

    // A supplied token counts as used even when it matches no scoring row.
    for (id, rows) in def.tokens {
        if let Some(token) = snapshot.token(*id) {
            used_params += 1;
            score += token_points(rows, token);
        }
    }

    let risk = classify(scale, score);
    ScaleResult {
        score,
        used_params,
        total_params: scale.total_params(),
        risk,
        interpretation: interpretation(scale, risk),
    }
}

fn classify(scale: Scale, score: u32) -> RiskTier {
    match scale {
        Scale::Sirs | Scale::Qsofa | Scale::Omqsofa => {
            if score >= 2 {
                RiskTier::High
            } else {
                RiskTier::Low
            }
        }
        Scale::Moews => {
            if score <= 2 {
                RiskTier::Low
            } else if score <= 4 {
                RiskTier::Medium
            } else {
                RiskTier::High
            }
        }
        Scale::Sos => {
            if score >= 6 {
                RiskTier::High
            } else {
                RiskTier::Low
            }
        }
    }
}

fn interpretation(scale: Scale, risk: RiskTier) -> &'static str {
    match (scale, risk) {
        (Scale::Sirs, RiskTier::High) => "Patient meets SIRS criteria",
        (Scale::Sirs, _) => "Patient does not meet SIRS criteria",
        (Scale::Qsofa | Scale::Omqsofa, RiskTier::High) => "ICU admission indicated",
        (Scale::Qsofa | Scale::Omqsofa, _) => "Continued observation required",
        (Scale::Moews, RiskTier::Low) => "Current care plan continues",
        (Scale::Moews, RiskTier::Medium) => "Repeat observations more frequently",
        (Scale::Moews, RiskTier::High) => "ICU admission indicated",
        (Scale::Sos, RiskTier::High) => "ICU admission indicated",
        (Scale::Sos, _) => "Low risk of sepsis",
    }
}
