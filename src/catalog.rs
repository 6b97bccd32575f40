use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::material::{Material, Search};

/// 시드 카탈로그(1337) 소유자 ID. 모든 사용자에게 보이지만 수정/삭제는 불가하다.
pub const SYSTEM_OWNER_ID: u64 = 1337;

/// 카탈로그 조작 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum CatalogError {
    /// 시드 파일 입출력 오류
    Io(std::io::Error),
    /// 시드 파일 파싱 오류
    Toml(toml::de::Error),
    /// 해당 ID의 자재가 없음
    NotFound(u64),
    /// 시스템 정의 자재는 수정/삭제할 수 없음
    SystemMaterial(u64),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "시드 파일 입출력 오류: {e}"),
            CatalogError::Toml(e) => write!(f, "시드 파일 파싱 오류: {e}"),
            CatalogError::NotFound(id) => write!(f, "자재를 찾을 수 없습니다: id={id}"),
            CatalogError::SystemMaterial(id) => {
                write!(f, "시스템 정의 자재는 변경할 수 없습니다: id={id}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        CatalogError::Io(value)
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(value: toml::de::Error) -> Self {
        CatalogError::Toml(value)
    }
}

/// 시드 카탈로그 TOML 파일의 구조.
///
/// insulation / other / wall 세 배열로 나뉘며, 로드 시 이 순서대로 합쳐진다.
#[derive(Debug, Default, Deserialize)]
struct SeedFile {
    #[serde(default)]
    insulation: Vec<Material>,
    #[serde(default)]
    other: Vec<Material>,
    #[serde(default)]
    wall: Vec<Material>,
}

/// 시드 카탈로그 TOML 파일을 읽어 자재 목록 하나로 합친다.
pub fn load_materials_from_toml(path: impl AsRef<Path>) -> Result<Vec<Material>, CatalogError> {
    let content = fs::read_to_string(path)?;
    let seed: SeedFile = toml::from_str(&content)?;

    let mut materials = Vec::new();
    materials.extend(seed.insulation);
    materials.extend(seed.other);
    materials.extend(seed.wall);
    Ok(materials)
}

/// ID 기준으로 자재를 보관하는 인메모리 카탈로그 저장소.
///
/// 소유자별 가시성 규칙: 각 소유자는 자신의 자재와 시스템 자재(1337)를 본다.
/// 계산기는 이 저장소를 직접 건드리지 않고, 호출자가 꺼낸 슬라이스만 받는다.
#[derive(Debug, Default)]
pub struct MaterialStore {
    materials: BTreeMap<u64, Material>,
    next_id: u64,
}

impl MaterialStore {
    pub fn new() -> Self {
        Self {
            materials: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// 시드 목록으로 저장소를 만든다. ID를 새로 부여하고 소유자를 1337로 찍는다.
    pub fn from_seed(seed: Vec<Material>) -> Self {
        let mut store = Self::new();
        for mut material in seed {
            material.created_by = SYSTEM_OWNER_ID;
            store.insert(material);
        }
        store
    }

    fn insert(&mut self, mut material: Material) -> Material {
        material.id = self.next_id;
        self.next_id += 1;
        self.materials.insert(material.id, material.clone());
        material
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// 새 자재를 등록하고 ID가 부여된 사본을 돌려준다.
    pub fn create(&mut self, owner_id: u64, mut material: Material) -> Material {
        material.created_by = owner_id;
        self.insert(material)
    }

    /// ID로 자재를 조회한다. 소유자 본인 또는 시스템 자재만 보인다.
    pub fn get(&self, owner_id: u64, id: u64) -> Result<&Material, CatalogError> {
        self.materials
            .get(&id)
            .filter(|m| m.created_by == owner_id || m.created_by == SYSTEM_OWNER_ID)
            .ok_or(CatalogError::NotFound(id))
    }

    /// 자재를 갱신한다. 시스템 정의 자재는 거부한다.
    pub fn update(&mut self, owner_id: u64, material: Material) -> Result<Material, CatalogError> {
        let existing = self
            .materials
            .get(&material.id)
            .ok_or(CatalogError::NotFound(material.id))?;
        if existing.created_by == SYSTEM_OWNER_ID {
            return Err(CatalogError::SystemMaterial(material.id));
        }
        if existing.created_by != owner_id {
            return Err(CatalogError::NotFound(material.id));
        }

        let mut updated = material;
        updated.created_by = owner_id;
        self.materials.insert(updated.id, updated.clone());
        Ok(updated)
    }

    /// 자재를 삭제한다. 시스템 정의 자재는 거부한다.
    pub fn delete(&mut self, owner_id: u64, id: u64) -> Result<(), CatalogError> {
        let existing = self.materials.get(&id).ok_or(CatalogError::NotFound(id))?;
        if existing.created_by == SYSTEM_OWNER_ID {
            return Err(CatalogError::SystemMaterial(id));
        }
        if existing.created_by != owner_id {
            return Err(CatalogError::NotFound(id));
        }
        self.materials.remove(&id);
        Ok(())
    }

    /// 소유자에게 보이는 전체 자재 목록. 이름 내림차순으로 정렬한다.
    pub fn all_for_owner(&self, owner_id: u64) -> Vec<Material> {
        let mut result: Vec<Material> = self
            .materials
            .values()
            .filter(|m| m.created_by == owner_id || m.created_by == SYSTEM_OWNER_ID)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.name.cmp(&a.name));
        result
    }

    /// ID 목록으로 자재를 꺼낸다. 하나라도 없으면 NotFound를 돌려준다.
    pub fn fetch_by_ids(&self, ids: &[u64]) -> Result<Vec<Material>, CatalogError> {
        ids.iter()
            .map(|id| {
                self.materials
                    .get(id)
                    .cloned()
                    .ok_or(CatalogError::NotFound(*id))
            })
            .collect()
    }

    /// 검색 조건에 맞는 자재 목록. 가시성 규칙은 all_for_owner와 같다.
    pub fn search(&self, owner_id: u64, criteria: &Search) -> Vec<Material> {
        let mut result: Vec<Material> = self
            .materials
            .values()
            .filter(|m| m.created_by == owner_id || m.created_by == SYSTEM_OWNER_ID)
            .filter(|m| criteria.matches(m))
            .cloned()
            .collect();
        result.sort_by(|a, b| b.name.cmp(&a.name));
        result
    }
}
