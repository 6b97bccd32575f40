use super::InsulationCalcError;

/// 두께 환산 계수 [mm/m].
pub const MM_PER_M: f64 = 1000.0;

/// 가격 모델 환산 상수. 단가는 m³당, 두께는 mm 단위이므로 1000으로 나눈다.
/// 단위 벽면적(1 m²) 가정이 깔려 있으며, 기존 결과와의 수치 호환을 위해 고정한다.
pub const PRICE_VOLUME_SCALE: f64 = 1000.0;

/// 남은 U값 갭을 해당 자재 한 겹으로 전부 막는 데 필요한 두께 [mm].
///
/// 두께 d[m], 열전도율 λ인 층의 열저항은 d/λ이고 기여 U값은 λ/d이므로,
/// 목표 U에 대해 d = λ/U [m] 이다.
pub fn required_thickness_mm(
    lambda: f64,
    remaining_u_value: f64,
) -> Result<f64, InsulationCalcError> {
    if !(remaining_u_value > 0.0) || !remaining_u_value.is_finite() {
        return Err(InsulationCalcError::InvalidTarget(remaining_u_value));
    }
    if !(lambda > 0.0) || !lambda.is_finite() {
        return Err(InsulationCalcError::InvalidMaterial(format!("λ={lambda}")));
    }
    let thickness_mm = lambda / remaining_u_value * MM_PER_M;
    if !thickness_mm.is_finite() {
        return Err(InsulationCalcError::NonFiniteResult("required_thickness_mm"));
    }
    Ok(thickness_mm)
}

/// 해당 두께로 시공할 때의 한계 비용. 두께에 선형 비례한다.
pub fn marginal_cost(price_per_m3: f64, thickness_mm: f64) -> f64 {
    thickness_mm * price_per_m3 / PRICE_VOLUME_SCALE
}

/// 두께 mm 기준으로 층 하나가 기여하는 U값 [W/m²·K].
pub fn layer_u_value(lambda: f64, thickness_mm: f64) -> f64 {
    lambda / (thickness_mm / MM_PER_M)
}
