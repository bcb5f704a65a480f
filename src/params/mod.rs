use crate::patient::ParamId;

/// How a front end should render and constrain one input field.
///
/// Presentation metadata only; the scoring engine never reads these tables.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Numeric entry with documented clinical range and step granularity.
    Number { min: f64, max: f64, step: f64 },
    /// Fixed option set.
    Select { options: &'static [OptionSpec] },
}

/// One choice of a categorical field: the token the engine matches on and
/// its display label.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub id: ParamId,
    pub label: &'static str,
    pub unit: Option<&'static str>,
    pub kind: FieldKind,
}

pub const MENTAL_OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        value: "alert",
        label: "Alert",
    },
    OptionSpec {
        value: "not_alert",
        label: "Altered consciousness",
    },
];

pub const O2_THERAPY_OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        value: "air",
        label: "Room air",
    },
    OptionSpec {
        value: "nasal",
        label: "Nasal cannula",
    },
    OptionSpec {
        value: "mask",
        label: "Face mask/NIV/ventilator",
    },
];

pub const PPH_OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        value: "no",
        label: "No",
    },
    OptionSpec {
        value: "yes",
        label: "Yes",
    },
];

/// The full input form, in entry order.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        id: ParamId::Temp,
        label: "Body temperature",
        unit: Some("°C"),
        kind: FieldKind::Number {
            min: 20.0,
            max: 45.0,
            step: 0.1,
        },
    },
    FieldSpec {
        id: ParamId::Hr,
        label: "Heart rate",
        unit: Some("bpm"),
        kind: FieldKind::Number {
            min: 0.0,
            max: 300.0,
            step: 1.0,
        },
    },
    FieldSpec {
        id: ParamId::Rr,
        label: "Respiratory rate",
        unit: Some("breaths/min"),
        kind: FieldKind::Number {
            min: 0.0,
            max: 100.0,
            step: 1.0,
        },
    },
    FieldSpec {
        id: ParamId::Sbp,
        label: "Systolic blood pressure",
        unit: Some("mmHg"),
        kind: FieldKind::Number {
            min: 0.0,
            max: 300.0,
            step: 1.0,
        },
    },
    FieldSpec {
        id: ParamId::Dbp,
        label: "Diastolic blood pressure",
        unit: Some("mmHg"),
        kind: FieldKind::Number {
            min: 0.0,
            max: 200.0,
            step: 1.0,
        },
    },
    FieldSpec {
        id: ParamId::Spo2,
        label: "SpO₂",
        unit: Some("%"),
        kind: FieldKind::Number {
            min: 0.0,
            max: 100.0,
            step: 1.0,
        },
    },
    FieldSpec {
        id: ParamId::Wbc,
        label: "White cell count",
        unit: Some("×10⁹/L"),
        kind: FieldKind::Number {
            min: 0.0,
            max: 100.0,
            step: 0.1,
        },
    },
    FieldSpec {
        id: ParamId::Bands,
        label: "Band neutrophils",
        unit: Some("%"),
        kind: FieldKind::Number {
            min: 0.0,
            max: 100.0,
            step: 1.0,
        },
    },
    FieldSpec {
        id: ParamId::Lactate,
        label: "Lactate",
        unit: Some("mmol/L"),
        kind: FieldKind::Number {
            min: 0.0,
            max: 20.0,
            step: 0.1,
        },
    },
    FieldSpec {
        id: ParamId::Gcs,
        label: "Glasgow Coma Scale",
        unit: Some("points"),
        kind: FieldKind::Number {
            min: 3.0,
            max: 15.0,
            step: 1.0,
        },
    },
    FieldSpec {
        id: ParamId::Mental,
        label: "Mental status",
        unit: None,
        kind: FieldKind::Select {
            options: MENTAL_OPTIONS,
        },
    },
    FieldSpec {
        id: ParamId::O2Therapy,
        label: "Oxygen therapy",
        unit: None,
        kind: FieldKind::Select {
            options: O2_THERAPY_OPTIONS,
        },
    },
    FieldSpec {
        id: ParamId::Pph,
        label: "Severe hemorrhage/cardiac disease",
        unit: None,
        kind: FieldKind::Select {
            options: PPH_OPTIONS,
        },
    },
];

/// Look up the field metadata for a parameter.
pub fn field(id: ParamId) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.id == id)
}
