//! 단열재 카탈로그와 단열층 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 추후 웹 확장도 쉽게 한다.

pub mod app;
pub mod catalog;
pub mod config;
pub mod i18n;
pub mod insulation;
pub mod material;
pub mod ui_cli;
