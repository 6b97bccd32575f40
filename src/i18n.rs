use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_LIST: &str = "main_menu.list";
    pub const MAIN_MENU_SEARCH: &str = "main_menu.search";
    pub const MAIN_MENU_ADD: &str = "main_menu.add";
    pub const MAIN_MENU_OPTIMIZE: &str = "main_menu.optimize";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const LIST_HEADING: &str = "list.heading";
    pub const LIST_EMPTY: &str = "list.empty";
    pub const LIST_COLUMNS: &str = "list.columns";

    pub const SEARCH_HEADING: &str = "search.heading";
    pub const PROMPT_SEARCH_NAME: &str = "search.prompt_name";
    pub const PROMPT_SEARCH_LAMBDA: &str = "search.prompt_lambda";
    pub const PROMPT_SEARCH_PRICE: &str = "search.prompt_price";

    pub const ADD_HEADING: &str = "add.heading";
    pub const PROMPT_NAME: &str = "add.prompt_name";
    pub const PROMPT_DESCRIPTION: &str = "add.prompt_description";
    pub const PROMPT_LAMBDA: &str = "add.prompt_lambda";
    pub const PROMPT_PRICE: &str = "add.prompt_price";
    pub const PROMPT_THICKNESS: &str = "add.prompt_thickness";
    pub const PROMPT_KIND: &str = "add.prompt_kind";
    pub const ADD_SAVED: &str = "add.saved";

    pub const OPTIMIZE_HEADING: &str = "optimize.heading";
    pub const PROMPT_WALL_TYPE: &str = "optimize.prompt_wall_type";
    pub const PROMPT_TARGET_U: &str = "optimize.prompt_target_u";
    pub const PROMPT_MATERIAL_IDS: &str = "optimize.prompt_material_ids";
    pub const RESULT_HEADING: &str = "optimize.result_heading";
    pub const RESULT_TOTAL_U: &str = "optimize.result_total_u";
    pub const RESULT_TOTAL_COST: &str = "optimize.result_total_cost";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Insulation Toolbox ===",
        MAIN_MENU_LIST => "1) 자재 목록",
        MAIN_MENU_SEARCH => "2) 자재 검색",
        MAIN_MENU_ADD => "3) 자재 등록",
        MAIN_MENU_OPTIMIZE => "4) 단열 계산",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        LIST_HEADING => "\n-- 자재 목록 --",
        LIST_EMPTY => "등록된 자재가 없습니다.",
        LIST_COLUMNS => "ID    이름                     λ[W/m·K]   단가[/m³]   분류",
        SEARCH_HEADING => "\n-- 자재 검색 --",
        PROMPT_SEARCH_NAME => "이름 포함 문자열(없으면 엔터): ",
        PROMPT_SEARCH_LAMBDA => "λ 상한 [W/m·K] (0이면 조건 없음): ",
        PROMPT_SEARCH_PRICE => "단가 상한 [/m³] (0이면 조건 없음): ",
        ADD_HEADING => "\n-- 자재 등록 --",
        PROMPT_NAME => "이름: ",
        PROMPT_DESCRIPTION => "설명(선택): ",
        PROMPT_LAMBDA => "열전도율 λ [W/m·K]: ",
        PROMPT_PRICE => "단가 [/m³]: ",
        PROMPT_THICKNESS => "공칭 두께 [mm] (없으면 0): ",
        PROMPT_KIND => "분류 (insulation/wall/other): ",
        ADD_SAVED => "자재가 등록되었습니다:",
        OPTIMIZE_HEADING => "\n-- 단열 계산 --",
        PROMPT_WALL_TYPE => "벽체 유형: ",
        PROMPT_TARGET_U => "목표 U값 [W/m²·K]: ",
        PROMPT_MATERIAL_IDS => "자재 ID 목록(쉼표 구분, 엔터=전체): ",
        RESULT_HEADING => "계산 결과:",
        RESULT_TOTAL_U => "총 U값",
        RESULT_TOTAL_COST => "총 비용",
        _ => "",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== Insulation Toolbox ===",
        MAIN_MENU_LIST => "1) List materials",
        MAIN_MENU_SEARCH => "2) Search materials",
        MAIN_MENU_ADD => "3) Add material",
        MAIN_MENU_OPTIMIZE => "4) Insulation calculator",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input; choose again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        LIST_HEADING => "\n-- Materials --",
        LIST_EMPTY => "No materials registered.",
        LIST_COLUMNS => "ID    Name                     λ[W/m·K]   Price[/m³]  Kind",
        SEARCH_HEADING => "\n-- Search materials --",
        PROMPT_SEARCH_NAME => "Name contains (enter to skip): ",
        PROMPT_SEARCH_LAMBDA => "λ upper bound [W/m·K] (0 = unused): ",
        PROMPT_SEARCH_PRICE => "Price upper bound [/m³] (0 = unused): ",
        ADD_HEADING => "\n-- Add material --",
        PROMPT_NAME => "Name: ",
        PROMPT_DESCRIPTION => "Description (optional): ",
        PROMPT_LAMBDA => "Thermal conductivity λ [W/m·K]: ",
        PROMPT_PRICE => "Price [/m³]: ",
        PROMPT_THICKNESS => "Nominal thickness [mm] (0 if none): ",
        PROMPT_KIND => "Kind (insulation/wall/other): ",
        ADD_SAVED => "Material saved:",
        OPTIMIZE_HEADING => "\n-- Insulation calculator --",
        PROMPT_WALL_TYPE => "Wall type: ",
        PROMPT_TARGET_U => "Target U-value [W/m²·K]: ",
        PROMPT_MATERIAL_IDS => "Material IDs (comma separated, enter = all): ",
        RESULT_HEADING => "Result:",
        RESULT_TOTAL_U => "Total U-value",
        RESULT_TOTAL_COST => "Total cost",
        _ => return None,
    })
}
