use serde::Serialize;

use super::thickness::{layer_u_value, marginal_cost, required_thickness_mm};
use super::InsulationCalcError;
use crate::material::Material;

/// 단열 최적화 입력.
#[derive(Debug, Clone)]
pub struct OptimizationInput {
    /// 벽체 유형 구분자. 현재 계산 분기에는 쓰지 않고 결과에 그대로 전달한다.
    pub wall_type: String,
    /// 목표 U값 [W/m²·K]
    pub desired_u_value: f64,
    /// 후보 자재 목록. 모두 λ > 0 이어야 한다.
    pub materials: Vec<Material>,
}

/// 계산된 단열층 한 겹. 최적화기만 만들며 생성 후에는 바뀌지 않는다.
#[derive(Debug, Clone, Serialize)]
pub struct InsulationLayer {
    /// 선택된 자재 사본
    pub material: Material,
    /// 계산된 두께 [mm]
    pub thickness_mm: f64,
    /// 이 층 혼자 기여하는 U값 [W/m²·K]
    pub u_value: f64,
    /// 이 층의 한계 비용
    pub cost: f64,
}

/// 단열 최적화 결과. 층 순서는 선택 순서이다.
#[derive(Debug, Clone, Serialize)]
pub struct InsulationResult {
    pub wall_type: String,
    pub layers: Vec<InsulationLayer>,
    /// 층별 U값의 합
    pub total_u_value: f64,
    /// 층별 한계 비용의 합
    pub total_cost: f64,
}

impl InsulationResult {
    /// 층 목록에서 합계를 계산해 결과를 조립한다.
    ///
    /// 합계는 항상 층별 값의 합으로만 구하므로, 층 단위 수치와 총계가
    /// 어긋날 수 없다.
    pub fn from_layers(wall_type: String, layers: Vec<InsulationLayer>) -> Self {
        let total_u_value = layers.iter().map(|l| l.u_value).sum();
        let total_cost = layers.iter().map(|l| l.cost).sum();
        Self {
            wall_type,
            layers,
            total_u_value,
            total_cost,
        }
    }
}

/// 목표 U값을 만족하는 단열층 구성을 탐욕적으로 선택한다.
///
/// 매 반복에서 남은 갭 전체를 한 겹으로 막는 비용이 가장 싼 자재를 고른다.
/// 각 층이 남은 갭을 통째로 막도록 두께를 잡으므로, 부동소수점 잔차가
/// 남지 않는 한 한 번의 반복으로 끝난다.
pub fn optimize(input: &OptimizationInput) -> Result<InsulationResult, InsulationCalcError> {
    if !(input.desired_u_value > 0.0) || !input.desired_u_value.is_finite() {
        return Err(InsulationCalcError::InvalidTarget(input.desired_u_value));
    }
    if input.materials.is_empty() {
        return Err(InsulationCalcError::NoMaterialsAvailable);
    }
    for material in &input.materials {
        if !(material.lambda > 0.0) || !material.lambda.is_finite() {
            return Err(InsulationCalcError::InvalidMaterial(format!(
                "{} (λ={})",
                material.name, material.lambda
            )));
        }
    }

    // 호출자의 목록을 건드리지 않도록 사본을 λ 오름차순으로 정렬한다.
    // 비용이 같으면 이 순서의 앞쪽 자재가 이긴다.
    let mut candidates = input.materials.clone();
    candidates.sort_by(|a, b| a.lambda.total_cmp(&b.lambda));

    let mut layers: Vec<InsulationLayer> = Vec::new();
    let mut current_u_value = 0.0;

    while current_u_value < input.desired_u_value {
        let remaining = input.desired_u_value - current_u_value;

        let mut best: Option<(&Material, f64, f64)> = None;
        for material in &candidates {
            let thickness_mm = required_thickness_mm(material.lambda, remaining)?;
            let cost = marginal_cost(material.price, thickness_mm);
            let is_better = match best {
                None => true,
                Some((_, _, best_cost)) => cost < best_cost,
            };
            if is_better {
                best = Some((material, thickness_mm, cost));
            }
        }
        let Some((material, thickness_mm, cost)) = best else {
            return Err(InsulationCalcError::NoMaterialsAvailable);
        };
        if !cost.is_finite() {
            return Err(InsulationCalcError::NonFiniteResult("marginal_cost"));
        }

        // 선택된 두께에서 층 U값을 다시 계산해 수치 일관성을 지킨다.
        let u_value = layer_u_value(material.lambda, thickness_mm);
        if !u_value.is_finite() {
            return Err(InsulationCalcError::NonFiniteResult("layer_u_value"));
        }

        current_u_value += u_value;
        layers.push(InsulationLayer {
            material: material.clone(),
            thickness_mm,
            u_value,
            cost,
        });
    }

    Ok(InsulationResult::from_layers(
        input.wall_type.clone(),
        layers,
    ))
}
