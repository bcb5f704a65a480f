use serde::Serialize;

use super::bands::{Band, Range, TokenPoints};
use crate::patient::ParamId;

/// The five screening scales, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Sirs,
    Qsofa,
    Omqsofa,
    Moews,
    Sos,
}

/// Threshold tables for one scale: which parameters it reads and the point
/// bands for each. Fixed clinical constants, never mutated at runtime.
#[derive(Debug, Clone, Copy)]
pub struct ScaleDef {
    pub numeric: &'static [(ParamId, &'static [Band])],
    pub tokens: &'static [(ParamId, &'static [TokenPoints])],
}

impl Scale {
    pub const ALL: [Scale; 5] = [
        Scale::Sirs,
        Scale::Qsofa,
        Scale::Omqsofa,
        Scale::Moews,
        Scale::Sos,
    ];

    /// The stable id string ("sirs", "qsofa", ...).
    pub fn id(&self) -> &'static str {
        match self {
            Scale::Sirs => "sirs",
            Scale::Qsofa => "qsofa",
            Scale::Omqsofa => "omqsofa",
            Scale::Moews => "moews",
            Scale::Sos => "sos",
        }
    }

    /// The display name as printed on score sheets.
    pub fn name(&self) -> &'static str {
        match self {
            Scale::Sirs => "SIRS",
            Scale::Qsofa => "qSOFA",
            Scale::Omqsofa => "omqSOFA",
            Scale::Moews => "MOEWS",
            Scale::Sos => "SOS",
        }
    }

    pub fn def(&self) -> &'static ScaleDef {
        match self {
            Scale::Sirs => &SIRS,
            Scale::Qsofa => &QSOFA,
            Scale::Omqsofa => &OMQSOFA,
            Scale::Moews => &MOEWS,
            Scale::Sos => &SOS,
        }
    }

    /// How many parameters the scale considers, whether or not supplied.
    pub fn total_params(&self) -> u32 {
        let def = self.def();
        (def.numeric.len() + def.tokens.len()) as u32
    }

    /// The highest score the threshold tables can award.
    pub fn max_score(&self) -> u32 {
        let def = self.def();
        let numeric: u32 = def
            .numeric
            .iter()
            .map(|(_, bands)| bands.iter().map(|b| b.points).max().unwrap_or(0))
            .sum();
        let tokens: u32 = def
            .tokens
            .iter()
            .map(|(_, rows)| rows.iter().map(|r| r.points).max().unwrap_or(0))
            .sum();
        numeric + tokens
    }
}

// SIRS: one point per criterion met.
const SIRS_TEMP: &[Band] = &[Band {
    points: 1,
    ranges: &[Range::Above(38.0), Range::Below(36.0)],
}];
const SIRS_HR: &[Band] = &[Band {
    points: 1,
    ranges: &[Range::Above(90.0)],
}];
const SIRS_RR: &[Band] = &[Band {
    points: 1,
    ranges: &[Range::Above(20.0)],
}];
const SIRS_WBC: &[Band] = &[Band {
    points: 1,
    ranges: &[Range::Above(12.0), Range::Below(4.0)],
}];

pub const SIRS: ScaleDef = ScaleDef {
    numeric: &[
        (ParamId::Temp, SIRS_TEMP),
        (ParamId::Hr, SIRS_HR),
        (ParamId::Rr, SIRS_RR),
        (ParamId::Wbc, SIRS_WBC),
    ],
    tokens: &[],
};

// qSOFA: one point per criterion met.
const QSOFA_SBP: &[Band] = &[Band {
    points: 1,
    ranges: &[Range::Below(100.0)],
}];
const QSOFA_RR: &[Band] = &[Band {
    points: 1,
    ranges: &[Range::Above(22.0)],
}];
const QSOFA_GCS: &[Band] = &[Band {
    points: 1,
    ranges: &[Range::Below(13.0)],
}];

pub const QSOFA: ScaleDef = ScaleDef {
    numeric: &[
        (ParamId::Sbp, QSOFA_SBP),
        (ParamId::Rr, QSOFA_RR),
        (ParamId::Gcs, QSOFA_GCS),
    ],
    tokens: &[],
};

// omqSOFA: the obstetrically modified qSOFA cut-offs.
const OMQSOFA_SBP: &[Band] = &[Band {
    points: 1,
    ranges: &[Range::Below(90.0)],
}];
const OMQSOFA_RR: &[Band] = &[Band {
    points: 1,
    ranges: &[Range::Above(25.0)],
}];
const OMQSOFA_MENTAL: &[TokenPoints] = &[TokenPoints {
    token: "not_alert",
    points: 1,
}];

pub const OMQSOFA: ScaleDef = ScaleDef {
    numeric: &[(ParamId::Sbp, OMQSOFA_SBP), (ParamId::Rr, OMQSOFA_RR)],
    tokens: &[(ParamId::Mental, OMQSOFA_MENTAL)],
};

// MOEWS: 0-3 points per parameter.
const MOEWS_TEMP: &[Band] = &[
    Band {
        points: 3,
        ranges: &[Range::AtLeast(39.0), Range::AtMost(35.0)],
    },
    Band {
        points: 2,
        ranges: &[Range::Inside(38.1, 38.9)],
    },
    Band {
        points: 1,
        ranges: &[Range::Inside(35.1, 35.9), Range::Inside(37.5, 38.0)],
    },
];
const MOEWS_RR: &[Band] = &[
    Band {
        points: 3,
        ranges: &[Range::AtLeast(30.0), Range::Below(10.0)],
    },
    Band {
        points: 2,
        ranges: &[Range::Inside(21.0, 29.0)],
    },
    Band {
        points: 1,
        ranges: &[Range::Inside(10.0, 11.0)],
    },
];
const MOEWS_SPO2: &[Band] = &[
    Band {
        points: 3,
        ranges: &[Range::AtMost(90.0)],
    },
    Band {
        points: 2,
        ranges: &[Range::Inside(91.0, 93.0)],
    },
    Band {
        points: 1,
        ranges: &[Range::Inside(94.0, 95.0)],
    },
];
const MOEWS_HR: &[Band] = &[
    Band {
        points: 3,
        ranges: &[Range::Below(50.0), Range::AtLeast(130.0)],
    },
    Band {
        points: 2,
        ranges: &[Range::Inside(50.0, 59.0), Range::Inside(110.0, 129.0)],
    },
    Band {
        points: 1,
        ranges: &[Range::Inside(100.0, 109.0)],
    },
];
const MOEWS_SBP: &[Band] = &[
    Band {
        points: 3,
        ranges: &[Range::Below(90.0), Range::AtLeast(160.0)],
    },
    Band {
        points: 2,
        ranges: &[Range::Inside(150.0, 159.0)],
    },
    Band {
        points: 1,
        ranges: &[Range::Inside(90.0, 99.0), Range::Inside(140.0, 149.0)],
    },
];
const MOEWS_DBP: &[Band] = &[
    Band {
        points: 3,
        ranges: &[Range::AtLeast(110.0)],
    },
    Band {
        points: 2,
        ranges: &[Range::Inside(100.0, 109.0)],
    },
    Band {
        points: 1,
        ranges: &[Range::AtMost(45.0), Range::Inside(90.0, 99.0)],
    },
];
const MOEWS_O2_THERAPY: &[TokenPoints] = &[
    TokenPoints {
        token: "mask",
        points: 3,
    },
    TokenPoints {
        token: "nasal",
        points: 2,
    },
];
const MOEWS_MENTAL: &[TokenPoints] = &[TokenPoints {
    token: "not_alert",
    points: 3,
}];
const MOEWS_PPH: &[TokenPoints] = &[TokenPoints {
    token: "yes",
    points: 3,
}];

pub const MOEWS: ScaleDef = ScaleDef {
    numeric: &[
        (ParamId::Temp, MOEWS_TEMP),
        (ParamId::Rr, MOEWS_RR),
        (ParamId::Spo2, MOEWS_SPO2),
        (ParamId::Hr, MOEWS_HR),
        (ParamId::Sbp, MOEWS_SBP),
        (ParamId::Dbp, MOEWS_DBP),
    ],
    tokens: &[
        (ParamId::O2Therapy, MOEWS_O2_THERAPY),
        (ParamId::Mental, MOEWS_MENTAL),
        (ParamId::Pph, MOEWS_PPH),
    ],
};

// SOS: 0-4 points per parameter.
const SOS_TEMP: &[Band] = &[
    Band {
        points: 4,
        ranges: &[Range::Above(40.9), Range::Below(30.0)],
    },
    Band {
        points: 3,
        ranges: &[Range::Inside(39.0, 40.9), Range::Inside(30.0, 31.9)],
    },
    Band {
        points: 2,
        ranges: &[Range::Inside(32.0, 33.9)],
    },
    Band {
        points: 1,
        ranges: &[Range::Inside(38.5, 38.9), Range::Inside(34.0, 35.9)],
    },
];
const SOS_HR: &[Band] = &[
    Band {
        points: 4,
        ranges: &[Range::Above(179.0)],
    },
    Band {
        points: 3,
        ranges: &[Range::Inside(150.0, 179.0)],
    },
    Band {
        points: 2,
        ranges: &[Range::Inside(130.0, 149.0)],
    },
    Band {
        points: 1,
        ranges: &[Range::Inside(120.0, 129.0)],
    },
];
const SOS_RR: &[Band] = &[
    Band {
        points: 4,
        ranges: &[Range::Above(49.0), Range::AtMost(5.0)],
    },
    Band {
        points: 3,
        ranges: &[Range::Inside(35.0, 49.0)],
    },
    Band {
        points: 2,
        ranges: &[Range::Inside(6.0, 9.0)],
    },
    Band {
        points: 1,
        ranges: &[Range::Inside(25.0, 34.0), Range::Inside(10.0, 11.0)],
    },
];
const SOS_SBP: &[Band] = &[
    Band {
        points: 4,
        ranges: &[Range::Below(70.0)],
    },
    Band {
        points: 2,
        ranges: &[Range::Inside(70.0, 90.0)],
    },
];
const SOS_SPO2: &[Band] = &[
    Band {
        points: 4,
        ranges: &[Range::Below(85.0)],
    },
    Band {
        points: 3,
        ranges: &[Range::Inside(85.0, 89.0)],
    },
    Band {
        points: 1,
        ranges: &[Range::Inside(90.0, 91.0)],
    },
];
const SOS_WBC: &[Band] = &[
    Band {
        points: 4,
        ranges: &[Range::Above(39.9), Range::Below(1.0)],
    },
    Band {
        points: 2,
        ranges: &[Range::Inside(25.0, 39.9), Range::Inside(1.0, 2.9)],
    },
    Band {
        points: 1,
        ranges: &[Range::Inside(17.0, 24.9), Range::Inside(3.0, 5.6)],
    },
];
const SOS_BANDS: &[Band] = &[Band {
    points: 2,
    ranges: &[Range::AtLeast(10.0)],
}];
const SOS_LACTATE: &[Band] = &[Band {
    points: 2,
    ranges: &[Range::AtLeast(4.0)],
}];

pub const SOS: ScaleDef = ScaleDef {
    numeric: &[
        (ParamId::Temp, SOS_TEMP),
        (ParamId::Hr, SOS_HR),
        (ParamId::Rr, SOS_RR),
        (ParamId::Sbp, SOS_SBP),
        (ParamId::Spo2, SOS_SPO2),
        (ParamId::Wbc, SOS_WBC),
        (ParamId::Bands, SOS_BANDS),
        (ParamId::Lactate, SOS_LACTATE),
    ],
    tokens: &[],
};
