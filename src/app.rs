use crate::catalog::{CatalogError, MaterialStore};
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::insulation::InsulationCalcError;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 카탈로그 조작 오류
    Catalog(CatalogError),
    /// 단열 계산 오류
    Insulation(InsulationCalcError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Catalog(e) => write!(f, "카탈로그 오류: {e}"),
            AppError::Insulation(e) => write!(f, "단열 계산 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        AppError::Catalog(value)
    }
}

impl From<InsulationCalcError> for AppError {
    fn from(value: InsulationCalcError) -> Self {
        AppError::Insulation(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 검색/계산 같은 개별 작업의 오류는 메시지만 출력하고 루프를 이어 간다.
pub fn run(config: &mut Config, tr: &Translator, store: &mut MaterialStore) -> Result<(), AppError> {
    let owner_id = config.owner_id;
    loop {
        let outcome = match ui_cli::main_menu(tr)? {
            MenuChoice::ListMaterials => ui_cli::handle_list(tr, store, owner_id),
            MenuChoice::SearchMaterials => ui_cli::handle_search(tr, store, owner_id),
            MenuChoice::AddMaterial => ui_cli::handle_add(tr, store, owner_id),
            MenuChoice::Optimize => ui_cli::handle_optimize(tr, store, owner_id),
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        };
        if let Err(err) = outcome {
            match err {
                AppError::Catalog(_) | AppError::Insulation(_) => {
                    println!("{}: {err}", tr.t(keys::ERROR_PREFIX));
                }
                other => return Err(other),
            }
        }
    }
    Ok(())
}
