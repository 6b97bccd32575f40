use serde::{Deserialize, Serialize};

/// 카탈로그에 등록되는 자재 한 건을 표현한다.
///
/// `lambda`는 열전도율 [W/m·K]로, 단열 계산에 쓰려면 0보다 커야 한다.
/// `thickness`는 카탈로그 표기용 공칭 두께 [mm]이며 계산에는 사용하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub created_by: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// 열전도율 λ [W/m·K]
    pub lambda: f64,
    /// 단가 [통화 / m³]
    #[serde(default)]
    pub price: f64,
    /// 공칭 두께 [mm]
    #[serde(default)]
    pub thickness: f64,
    /// 분류 태그 (insulation / wall / other)
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// 카탈로그 검색 조건 묶음.
///
/// 빈 문자열 또는 0은 해당 조건을 사용하지 않는다는 뜻이다.
/// `lambda`와 `price`는 미만(<) 비교 상한으로 해석한다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Search {
    pub name: String,
    pub lambda: f64,
    pub price: f64,
}

impl Search {
    /// 자재가 모든 활성 조건을 만족하는지 판정한다.
    pub fn matches(&self, material: &Material) -> bool {
        if !self.name.is_empty() {
            let needle = self.name.to_lowercase();
            if !material.name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if self.lambda != 0.0 && material.lambda >= self.lambda {
            return false;
        }
        if self.price != 0.0 && material.price >= self.price {
            return false;
        }
        true
    }
}
