use std::io::{self, Write};

use crate::app::AppError;
use crate::catalog::MaterialStore;
use crate::i18n::{keys, Translator};
use crate::insulation::{optimize, InsulationResult, OptimizationInput};
use crate::material::{Material, Search};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListMaterials,
    SearchMaterials,
    AddMaterial,
    Optimize,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_LIST));
    println!("{}", tr.t(keys::MAIN_MENU_SEARCH));
    println!("{}", tr.t(keys::MAIN_MENU_ADD));
    println!("{}", tr.t(keys::MAIN_MENU_OPTIMIZE));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::ListMaterials),
            "2" => return Ok(MenuChoice::SearchMaterials),
            "3" => return Ok(MenuChoice::AddMaterial),
            "4" => return Ok(MenuChoice::Optimize),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 자재 목록 메뉴를 처리한다.
pub fn handle_list(tr: &Translator, store: &MaterialStore, owner_id: u64) -> Result<(), AppError> {
    println!("{}", tr.t(keys::LIST_HEADING));
    print_materials(tr, &store.all_for_owner(owner_id));
    Ok(())
}

/// 자재 검색 메뉴를 처리한다.
pub fn handle_search(
    tr: &Translator,
    store: &MaterialStore,
    owner_id: u64,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SEARCH_HEADING));
    let criteria = Search {
        name: read_line(tr.t(keys::PROMPT_SEARCH_NAME))?.trim().to_string(),
        lambda: read_f64(tr, tr.t(keys::PROMPT_SEARCH_LAMBDA))?,
        price: read_f64(tr, tr.t(keys::PROMPT_SEARCH_PRICE))?,
    };
    print_materials(tr, &store.search(owner_id, &criteria));
    Ok(())
}

/// 자재 등록 메뉴를 처리한다.
pub fn handle_add(
    tr: &Translator,
    store: &mut MaterialStore,
    owner_id: u64,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ADD_HEADING));
    let material = Material {
        id: 0,
        created_by: owner_id,
        name: read_line(tr.t(keys::PROMPT_NAME))?.trim().to_string(),
        description: read_line(tr.t(keys::PROMPT_DESCRIPTION))?.trim().to_string(),
        lambda: read_f64(tr, tr.t(keys::PROMPT_LAMBDA))?,
        price: read_f64(tr, tr.t(keys::PROMPT_PRICE))?,
        thickness: read_f64(tr, tr.t(keys::PROMPT_THICKNESS))?,
        kind: read_line(tr.t(keys::PROMPT_KIND))?.trim().to_string(),
    };
    let saved = store.create(owner_id, material);
    println!("{} id={}", tr.t(keys::ADD_SAVED), saved.id);
    Ok(())
}

/// 단열 계산 메뉴를 처리한다.
pub fn handle_optimize(
    tr: &Translator,
    store: &MaterialStore,
    owner_id: u64,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::OPTIMIZE_HEADING));
    let wall_type = read_line(tr.t(keys::PROMPT_WALL_TYPE))?.trim().to_string();
    let desired_u_value = read_f64(tr, tr.t(keys::PROMPT_TARGET_U))?;

    let ids_line = read_line(tr.t(keys::PROMPT_MATERIAL_IDS))?;
    let materials = if ids_line.trim().is_empty() {
        store.all_for_owner(owner_id)
    } else {
        let ids = parse_id_list(tr, &ids_line);
        store.fetch_by_ids(&ids)?
    };

    let input = OptimizationInput {
        wall_type,
        desired_u_value,
        materials,
    };
    let result = optimize(&input)?;
    print_result(tr, &result);
    Ok(())
}

/// 쉼표로 구분된 ID 목록을 파싱한다. 숫자가 아닌 조각은 알리고 건너뛴다.
fn parse_id_list(tr: &Translator, line: &str) -> Vec<u64> {
    let mut ids = Vec::new();
    for piece in line.split(',') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        match piece.parse::<u64>() {
            Ok(id) => ids.push(id),
            Err(_) => println!("{} ({piece})", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
    ids
}

fn print_materials(tr: &Translator, materials: &[Material]) {
    if materials.is_empty() {
        println!("{}", tr.t(keys::LIST_EMPTY));
        return;
    }
    println!("{}", tr.t(keys::LIST_COLUMNS));
    for m in materials {
        println!(
            "{:<5} {:<24} {:<10.4} {:<11.2} {}",
            m.id, m.name, m.lambda, m.price, m.kind
        );
    }
}

fn print_result(tr: &Translator, result: &InsulationResult) {
    println!("{}", tr.t(keys::RESULT_HEADING));
    for layer in &result.layers {
        println!(
            "- {}: {:.1} mm, U={:.4} W/m²·K, {:.2}",
            layer.material.name, layer.thickness_mm, layer.u_value, layer.cost
        );
    }
    println!(
        "{}: {:.4} W/m²·K",
        tr.t(keys::RESULT_TOTAL_U),
        result.total_u_value
    );
    println!(
        "{}: {:.2}",
        tr.t(keys::RESULT_TOTAL_COST),
        result.total_cost
    );
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        if s.trim().is_empty() {
            return Ok(0.0);
        }
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
