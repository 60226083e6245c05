use std::fmt;

use serde::{Deserialize, Serialize};

use super::current::UnitParseError;

/// 전선 단면적 [mm²]. 카탈로그에 있는 표준 규격만 표현한다.
///
/// 직렬화 시에는 mm² 실수값(`2.5`)으로 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum CableSection {
    S1_5,
    S2_5,
    S4,
    S6,
    S10,
}

impl CableSection {
    pub const ALL: [CableSection; 5] = [
        CableSection::S1_5,
        CableSection::S2_5,
        CableSection::S4,
        CableSection::S6,
        CableSection::S10,
    ];

    pub const fn mm2(self) -> f64 {
        match self {
            CableSection::S1_5 => 1.5,
            CableSection::S2_5 => 2.5,
            CableSection::S4 => 4.0,
            CableSection::S6 => 6.0,
            CableSection::S10 => 10.0,
        }
    }

    pub fn from_mm2(value: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| (s.mm2() - value).abs() < 1e-9)
    }
}

impl TryFrom<f64> for CableSection {
    type Error = UnitParseError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_mm2(value).ok_or(UnitParseError::UnknownSection(value))
    }
}

impl From<CableSection> for f64 {
    fn from(value: CableSection) -> Self {
        value.mm2()
    }
}

impl fmt::Display for CableSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}mm²", self.mm2())
    }
}
