//! 시드 카탈로그 로드와 인메모리 저장소 회귀 테스트.
use std::fs;

use insulation_toolbox::catalog::{
    load_materials_from_toml, CatalogError, MaterialStore, SYSTEM_OWNER_ID,
};
use insulation_toolbox::material::{Material, Search};

const SEED_TOML: &str = r#"
[[insulation]]
name = "Mineral wool"
lambda = 0.040
price = 85.0
thickness = 100.0
type = "insulation"

[[insulation]]
name = "PIR"
lambda = 0.025
price = 220.0
type = "insulation"

[[other]]
name = "Gypsum board"
lambda = 0.25
price = 45.0
type = "other"

[[wall]]
name = "Solid brick"
lambda = 0.77
price = 120.0
type = "wall"
"#;

fn material(name: &str, lambda: f64, price: f64) -> Material {
    Material {
        id: 0,
        created_by: 0,
        name: name.to_string(),
        description: String::new(),
        lambda,
        price,
        thickness: 0.0,
        kind: "insulation".to_string(),
    }
}

fn seed_store() -> MaterialStore {
    MaterialStore::from_seed(vec![
        material("Mineral wool", 0.040, 85.0),
        material("PIR", 0.025, 220.0),
    ])
}

#[test]
fn loads_seed_sections_in_order() {
    let path = std::env::temp_dir().join("insulation_toolbox_seed_test.toml");
    fs::write(&path, SEED_TOML).expect("write seed");
    let materials = load_materials_from_toml(&path).expect("load");
    fs::remove_file(&path).ok();

    // insulation → other → wall 순서로 합쳐진다.
    let names: Vec<&str> = materials.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        ["Mineral wool", "PIR", "Gypsum board", "Solid brick"]
    );
    assert_eq!(materials[0].kind, "insulation");
    assert!((materials[3].lambda - 0.77).abs() < 1e-12);
}

#[test]
fn missing_seed_file_is_an_io_error() {
    let result = load_materials_from_toml("does_not_exist_materials.toml");
    assert!(matches!(result, Err(CatalogError::Io(_))));
}

#[test]
fn from_seed_stamps_system_owner_and_ids() {
    let store = seed_store();
    let all = store.all_for_owner(1);
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|m| m.created_by == SYSTEM_OWNER_ID));
    assert!(all.iter().all(|m| m.id != 0));
}

#[test]
fn create_and_get_roundtrip() {
    let mut store = MaterialStore::new();
    let saved = store.create(7, material("EPS", 0.038, 65.0));
    assert_eq!(saved.created_by, 7);

    let fetched = store.get(7, saved.id).expect("get");
    assert_eq!(fetched.name, "EPS");

    // 다른 소유자에게는 보이지 않는다.
    assert!(matches!(
        store.get(8, saved.id),
        Err(CatalogError::NotFound(_))
    ));
}

#[test]
fn system_materials_are_visible_but_protected() {
    let mut store = seed_store();
    let system_id = store.all_for_owner(1)[0].id;

    // 조회는 아무 소유자나 가능하다.
    assert!(store.get(42, system_id).is_ok());

    let mut edited = store.get(42, system_id).expect("get").clone();
    edited.price = 1.0;
    assert!(matches!(
        store.update(42, edited),
        Err(CatalogError::SystemMaterial(_))
    ));
    assert!(matches!(
        store.delete(42, system_id),
        Err(CatalogError::SystemMaterial(_))
    ));
}

#[test]
fn update_and_delete_own_material() {
    let mut store = MaterialStore::new();
    let saved = store.create(7, material("EPS", 0.038, 65.0));

    let mut edited = saved.clone();
    edited.price = 70.0;
    let updated = store.update(7, edited).expect("update");
    assert!((updated.price - 70.0).abs() < 1e-12);

    // 남의 자재는 갱신/삭제할 수 없다.
    assert!(matches!(
        store.update(8, updated.clone()),
        Err(CatalogError::NotFound(_))
    ));
    assert!(matches!(
        store.delete(8, updated.id),
        Err(CatalogError::NotFound(_))
    ));

    store.delete(7, updated.id).expect("delete");
    assert!(store.is_empty());
}

#[test]
fn all_for_owner_sorts_name_descending() {
    let mut store = seed_store();
    store.create(1, material("Aerogel", 0.015, 900.0));
    let names: Vec<String> = store
        .all_for_owner(1)
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, ["PIR", "Mineral wool", "Aerogel"]);
}

#[test]
fn fetch_by_ids_reports_missing_id() {
    let store = seed_store();
    let ids: Vec<u64> = store.all_for_owner(1).iter().map(|m| m.id).collect();

    let fetched = store.fetch_by_ids(&ids).expect("fetch");
    assert_eq!(fetched.len(), ids.len());

    assert!(matches!(
        store.fetch_by_ids(&[9999]),
        Err(CatalogError::NotFound(9999))
    ));
}

#[test]
fn search_applies_criteria_as_strict_upper_bounds() {
    let mut store = seed_store();
    store.create(1, material("Wood fiber", 0.045, 180.0));

    // λ < 0.041 → Mineral wool(0.040)과 PIR(0.025)
    let by_lambda = store.search(
        1,
        &Search {
            name: String::new(),
            lambda: 0.041,
            price: 0.0,
        },
    );
    assert_eq!(by_lambda.len(), 2);

    // λ < 0.041 AND price < 100 → Mineral wool만
    let combined = store.search(
        1,
        &Search {
            name: String::new(),
            lambda: 0.041,
            price: 100.0,
        },
    );
    assert_eq!(combined.len(), 1);
    assert_eq!(combined[0].name, "Mineral wool");

    // 이름 부분 일치는 대소문자를 가리지 않는다.
    let by_name = store.search(
        1,
        &Search {
            name: "wool".to_string(),
            lambda: 0.0,
            price: 0.0,
        },
    );
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Mineral wool");

    // 0은 조건 미사용을 뜻하므로 전체가 나온다.
    let unfiltered = store.search(1, &Search::default());
    assert_eq!(unfiltered.len(), 3);
}
