//! 전류 정격, 케이블 단면적 등 견적 계산에 쓰이는 단위 정의 모음.

pub mod current;
pub mod section;

pub use current::{BreakerRating, DdrRating, UnitParseError};
pub use section::CableSection;
