use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 단위 문자열/수치를 enum으로 해석할 때 발생하는 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitParseError {
    /// 숫자로 읽을 수 없는 입력
    #[error("숫자가 아닌 값: {0}")]
    NotANumber(String),
    /// 표준 정격표에 없는 전류값
    #[error("지원하지 않는 정격: {0}A")]
    UnknownRating(u32),
    /// 표준 단면적표에 없는 값
    #[error("지원하지 않는 단면적: {0}mm²")]
    UnknownSection(f64),
}

/// 분기 차단기 정격 전류. 표준 정격표(2~63A)에 있는 값만 허용한다.
///
/// 직렬화 시에는 암페어 정수(`16`)로 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum BreakerRating {
    A2,
    A6,
    A10,
    A16,
    A20,
    A25,
    A32,
    A40,
    A63,
}

impl BreakerRating {
    pub const ALL: [BreakerRating; 9] = [
        BreakerRating::A2,
        BreakerRating::A6,
        BreakerRating::A10,
        BreakerRating::A16,
        BreakerRating::A20,
        BreakerRating::A25,
        BreakerRating::A32,
        BreakerRating::A40,
        BreakerRating::A63,
    ];

    /// 정격 전류 [A]
    pub const fn amps(self) -> u32 {
        match self {
            BreakerRating::A2 => 2,
            BreakerRating::A6 => 6,
            BreakerRating::A10 => 10,
            BreakerRating::A16 => 16,
            BreakerRating::A20 => 20,
            BreakerRating::A25 => 25,
            BreakerRating::A32 => 32,
            BreakerRating::A40 => 40,
            BreakerRating::A63 => 63,
        }
    }

    /// 암페어 값으로 정격을 찾는다. 표에 없으면 None.
    pub fn from_amps(amps: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.amps() == amps)
    }

    /// 분전반 레일에서 차지하는 모듈 수. 40A/63A(2P)는 2모듈, 나머지는 1모듈.
    pub const fn module_cost(self) -> u32 {
        match self {
            BreakerRating::A40 | BreakerRating::A63 => 2,
            _ => 1,
        }
    }
}

impl TryFrom<u32> for BreakerRating {
    type Error = UnitParseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_amps(value).ok_or(UnitParseError::UnknownRating(value))
    }
}

impl From<BreakerRating> for u32 {
    fn from(value: BreakerRating) -> Self {
        value.amps()
    }
}

impl fmt::Display for BreakerRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}A", self.amps())
    }
}

/// `16`, `16A`, `40A_2P` 형태의 문자열을 정격으로 해석한다.
impl FromStr for BreakerRating {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let head = trimmed.split('_').next().unwrap_or_default();
        let digits = head.trim_end_matches(['A', 'a']);
        let amps: u32 = digits
            .parse()
            .map_err(|_| UnitParseError::NotANumber(trimmed.to_string()))?;
        Self::try_from(amps)
    }
}

/// 누전차단기(DDR) 정격. 25/40/63A 세 단계만 존재한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum DdrRating {
    A25,
    A40,
    A63,
}

impl DdrRating {
    pub const ALL: [DdrRating; 3] = [DdrRating::A25, DdrRating::A40, DdrRating::A63];

    pub const fn amps(self) -> u32 {
        match self {
            DdrRating::A25 => 25,
            DdrRating::A40 => 40,
            DdrRating::A63 => 63,
        }
    }
}

impl TryFrom<u32> for DdrRating {
    type Error = UnitParseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|r| r.amps() == value)
            .ok_or(UnitParseError::UnknownRating(value))
    }
}

impl From<DdrRating> for u32 {
    fn from(value: DdrRating) -> Self {
        value.amps()
    }
}

impl fmt::Display for DdrRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}A", self.amps())
    }
}
