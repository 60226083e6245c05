//! 분전반 열 배치와 누전차단기(DDR) 산정 엔진.
//!
//! 입력 차단기 목록만으로 결정되는 순수 계산이며 내부 상태를 갖지 않는다.

pub mod breaker;
pub mod ddr_sizing;
pub mod layout;
pub mod row_packing;

pub use breaker::CircuitBreaker;
pub use ddr_sizing::{ddr_rating_for, derate, size_ddr, DdrSizing, DERATING_PERCENT};
pub use layout::{
    assign_ddr, compute_layout, DifferentialBreaker, PanelLayout, ProtectedRow, RowProtection,
};
pub use row_packing::{pack_rows, PanelRow, ROW_MODULE_BUDGET};
