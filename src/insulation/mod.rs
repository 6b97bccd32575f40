//! 단열 계산 모듈 모음.

pub mod optimizer;
pub mod thickness;

pub use optimizer::{optimize, InsulationLayer, InsulationResult, OptimizationInput};
pub use thickness::{layer_u_value, marginal_cost, required_thickness_mm};

/// 단열 계산 오류를 표현한다.
#[derive(Debug)]
pub enum InsulationCalcError {
    /// 목표 U값이 0 이하인 경우
    InvalidTarget(f64),
    /// 열전도율이 유효하지 않은 자재
    InvalidMaterial(String),
    /// 후보 자재가 하나도 없는 경우
    NoMaterialsAvailable,
    /// 계산 결과가 유한수가 아닌 경우
    NonFiniteResult(&'static str),
}

impl std::fmt::Display for InsulationCalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsulationCalcError::InvalidTarget(u) => {
                write!(f, "목표 U값은 0보다 커야 합니다: {u}")
            }
            InsulationCalcError::InvalidMaterial(what) => {
                write!(f, "열전도율이 유효하지 않은 자재입니다: {what}")
            }
            InsulationCalcError::NoMaterialsAvailable => {
                write!(f, "계산에 사용할 자재가 없습니다.")
            }
            InsulationCalcError::NonFiniteResult(what) => {
                write!(f, "계산 결과가 유한수가 아닙니다: {what}")
            }
        }
    }
}

impl std::error::Error for InsulationCalcError {}
