//! 두께/비용 순수 함수 회귀 테스트.
use insulation_toolbox::insulation::{
    layer_u_value, marginal_cost, required_thickness_mm, InsulationCalcError,
};

#[test]
fn required_thickness_reference_case() {
    // λ=0.04, U=0.5 → 80 mm
    let d = required_thickness_mm(0.04, 0.5).expect("thickness");
    assert!((d - 80.0).abs() < 1e-9, "expected 80 mm, got {d}");
}

#[test]
fn required_thickness_roundtrip() {
    // d * U / 1000 == λ (정의식 왕복)
    let lambdas = [0.022, 0.034, 0.04, 0.12, 0.77, 2.3];
    let targets = [0.1, 0.25, 0.5, 1.0, 3.5];
    for &lambda in &lambdas {
        for &u in &targets {
            let d = required_thickness_mm(lambda, u).expect("thickness");
            let recovered = d * u / 1000.0;
            assert!(
                (recovered - lambda).abs() < 1e-12 * lambda.max(1.0),
                "lambda={lambda} u={u} d={d} recovered={recovered}"
            );
        }
    }
}

#[test]
fn required_thickness_rejects_non_positive_target() {
    assert!(matches!(
        required_thickness_mm(0.04, 0.0),
        Err(InsulationCalcError::InvalidTarget(_))
    ));
    assert!(matches!(
        required_thickness_mm(0.04, -0.5),
        Err(InsulationCalcError::InvalidTarget(_))
    ));
}

#[test]
fn required_thickness_rejects_non_finite_target() {
    assert!(matches!(
        required_thickness_mm(0.04, f64::NAN),
        Err(InsulationCalcError::InvalidTarget(_))
    ));
    assert!(matches!(
        required_thickness_mm(0.04, f64::INFINITY),
        Err(InsulationCalcError::InvalidTarget(_))
    ));
}

#[test]
fn required_thickness_rejects_non_positive_lambda() {
    assert!(matches!(
        required_thickness_mm(0.0, 0.5),
        Err(InsulationCalcError::InvalidMaterial(_))
    ));
    assert!(matches!(
        required_thickness_mm(-0.04, 0.5),
        Err(InsulationCalcError::InvalidMaterial(_))
    ));
    assert!(matches!(
        required_thickness_mm(f64::NAN, 0.5),
        Err(InsulationCalcError::InvalidMaterial(_))
    ));
}

#[test]
fn required_thickness_guards_non_finite_output() {
    // 극단적으로 작은 잔여 갭은 무한대 두께가 되므로 오류로 끊는다.
    assert!(matches!(
        required_thickness_mm(f64::MAX, 1e-300),
        Err(InsulationCalcError::NonFiniteResult(_))
    ));
}

#[test]
fn marginal_cost_reference_case() {
    // 80 mm * 50/m³ / 1000 = 4.0
    let cost = marginal_cost(50.0, 80.0);
    assert!((cost - 4.0).abs() < 1e-12, "expected 4.0, got {cost}");
}

#[test]
fn marginal_cost_monotone_in_thickness_and_price() {
    let thicknesses = [0.0, 10.0, 50.0, 80.0, 200.0];
    for win in thicknesses.windows(2) {
        assert!(marginal_cost(50.0, win[0]) <= marginal_cost(50.0, win[1]));
    }
    let prices = [0.0, 20.0, 50.0, 85.0, 220.0];
    for win in prices.windows(2) {
        assert!(marginal_cost(win[0], 80.0) <= marginal_cost(win[1], 80.0));
    }
}

#[test]
fn layer_u_value_inverts_required_thickness() {
    let d = required_thickness_mm(0.04, 0.5).expect("thickness");
    let u = layer_u_value(0.04, d);
    assert!((u - 0.5).abs() < 1e-12, "expected 0.5, got {u}");
}
