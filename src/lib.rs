//! 견적 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 견적 서비스에서도 쓸 수 있게 한다.

pub mod app;
pub mod catalog;
pub mod config;
pub mod dimensioning;
pub mod i18n;
pub mod logging;
pub mod panel;
pub mod project;
pub mod quote;
pub mod ui_cli;
pub mod units;
