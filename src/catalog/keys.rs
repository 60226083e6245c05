//! 카탈로그 조회에 쓰이는 닫힌 키 타입들.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 평면 분석에서 넘어오는 설비(기구) 종류.
///
/// 문자열 표기는 분석 서비스가 쓰는 PascalCase 이름을 그대로 사용하며,
/// 목록에 없는 이름은 역직렬화 단계에서 오류가 된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EquipmentType {
    SimpleSocket,
    DoubleSocket,
    WaterproofSocket,
    NetworkSocket,
    TVSocket,
    OvenSocket,
    ExtractorSocket,
    Dedicated20ASocket,
    SimpleSwitch,
    DoubleSwitch,
    DimmerSwitch,
    LightingPoint,
    InertiaRadiator,
    Convector,
    WaterHeater,
    AirConditioning,
    FloorHeating,
    DuctedHeatPump,
}

impl EquipmentType {
    /// 견적에 반영할 때 사용할 종류. 20A 전용 콘센트는 일반 콘센트로 견적한다.
    /// 조명 포인트는 견적 대상이 아니므로 None.
    pub fn quoted_as(self) -> Option<EquipmentType> {
        match self {
            EquipmentType::LightingPoint => None,
            EquipmentType::Dedicated20ASocket => Some(EquipmentType::SimpleSocket),
            other => Some(other),
        }
    }

    /// 마감 플레이트가 필요한 콘센트/스위치류인지 여부.
    pub fn needs_plate(self) -> bool {
        matches!(
            self,
            EquipmentType::SimpleSocket
                | EquipmentType::DoubleSocket
                | EquipmentType::SimpleSwitch
                | EquipmentType::DoubleSwitch
                | EquipmentType::NetworkSocket
                | EquipmentType::TVSocket
                | EquipmentType::OvenSocket
                | EquipmentType::ExtractorSocket
        )
    }

    pub fn plate_size(self) -> PlateSize {
        match self {
            EquipmentType::DoubleSocket | EquipmentType::DoubleSwitch => PlateSize::Double,
            _ => PlateSize::Single,
        }
    }

    /// 분석 서비스가 쓰는 원래 이름.
    pub fn code(self) -> &'static str {
        match self {
            EquipmentType::SimpleSocket => "SimpleSocket",
            EquipmentType::DoubleSocket => "DoubleSocket",
            EquipmentType::WaterproofSocket => "WaterproofSocket",
            EquipmentType::NetworkSocket => "NetworkSocket",
            EquipmentType::TVSocket => "TVSocket",
            EquipmentType::OvenSocket => "OvenSocket",
            EquipmentType::ExtractorSocket => "ExtractorSocket",
            EquipmentType::Dedicated20ASocket => "Dedicated20ASocket",
            EquipmentType::SimpleSwitch => "SimpleSwitch",
            EquipmentType::DoubleSwitch => "DoubleSwitch",
            EquipmentType::DimmerSwitch => "DimmerSwitch",
            EquipmentType::LightingPoint => "LightingPoint",
            EquipmentType::InertiaRadiator => "InertiaRadiator",
            EquipmentType::Convector => "Convector",
            EquipmentType::WaterHeater => "WaterHeater",
            EquipmentType::AirConditioning => "AirConditioning",
            EquipmentType::FloorHeating => "FloorHeating",
            EquipmentType::DuctedHeatPump => "DuctedHeatPump",
        }
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 마감 플레이트 색상. 흰색이 기본이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateColor {
    #[default]
    White,
    Black,
}

impl PlateColor {
    /// 설비 메타데이터의 색상 코드를 해석한다. `#000000`만 검정, 그 외/미지정은 흰색.
    pub fn from_hex(color: Option<&str>) -> Self {
        match color.map(str::trim) {
            Some(c) if c.eq_ignore_ascii_case("#000000") => PlateColor::Black,
            _ => PlateColor::White,
        }
    }

    /// 색상 코드가 명시적으로 흰색/검정 중 하나인지. 플레이트 집계에 사용한다.
    pub fn from_exact_hex(color: &str) -> Option<Self> {
        match color.trim().to_ascii_uppercase().as_str() {
            "#FFFFFF" => Some(PlateColor::White),
            "#000000" => Some(PlateColor::Black),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateSize {
    Single,
    Double,
}

/// 케이블 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CableType {
    #[serde(alias = "r2v")]
    R2V,
    #[serde(alias = "prefile")]
    Prefile,
    #[serde(alias = "rj45")]
    RJ45,
    #[serde(alias = "coaxial")]
    Coaxial,
}

impl CableType {
    /// 자유 형식 케이블 설명에서 종류를 추정한다. 판단할 수 없으면 R2V.
    pub fn infer(description: Option<&str>) -> Self {
        match description {
            Some(d) if d.contains("RJ45") => CableType::RJ45,
            Some(d) if d.contains("Coaxial") => CableType::Coaxial,
            _ => CableType::R2V,
        }
    }
}

impl fmt::Display for CableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CableType::R2V => "R2V",
            CableType::Prefile => "Prefile",
            CableType::RJ45 => "RJ45",
            CableType::Coaxial => "Coaxial",
        };
        f.write_str(name)
    }
}
