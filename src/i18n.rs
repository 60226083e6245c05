use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ROWS: &str = "main_menu.rows";
    pub const MAIN_MENU_QUOTE: &str = "main_menu.quote";
    pub const MAIN_MENU_CATALOG: &str = "main_menu.catalog";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const ROWS_HEADING: &str = "rows.heading";
    pub const ROWS_PROMPT_BREAKERS: &str = "rows.prompt_breakers";
    pub const ROWS_EMPTY: &str = "rows.empty";
    pub const ROWS_ROW: &str = "rows.row";
    pub const ROWS_MODULES: &str = "rows.modules";
    pub const ROWS_TOTAL_RATING: &str = "rows.total_rating";
    pub const ROWS_ADJUSTED_RATING: &str = "rows.adjusted_rating";
    pub const ROWS_UNCONFIGURED: &str = "rows.unconfigured";
    pub const ROWS_SUMMARY: &str = "rows.summary";

    pub const QUOTE_HEADING: &str = "quote.heading";
    pub const QUOTE_PROMPT_FILE: &str = "quote.prompt_file";
    pub const QUOTE_PROMPT_CSV: &str = "quote.prompt_csv";
    pub const QUOTE_EQUIPMENT_TOTAL: &str = "quote.equipment_total";
    pub const QUOTE_DIMENSIONING_TOTAL: &str = "quote.dimensioning_total";
    pub const QUOTE_TOTAL: &str = "quote.total";
    pub const QUOTE_PLATES: &str = "quote.plates";
    pub const QUOTE_PLATE_WHITE: &str = "quote.plate_white";
    pub const QUOTE_PLATE_BLACK: &str = "quote.plate_black";
    pub const QUOTE_NOTES: &str = "quote.notes";
    pub const QUOTE_CSV_WRITTEN: &str = "quote.csv_written";

    pub const CATALOG_HEADING: &str = "catalog.heading";
    pub const CATALOG_VERSION: &str = "catalog.version";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_ROW_DETAILS: &str = "settings.row_details";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_INVALID_BREAKER: &str = "error.invalid_breaker";

    pub const HELP_ROWS: &str = "help.rows";
    pub const HELP_QUOTE: &str = "help.quote";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Fr,
    En,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::Fr
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
            Language::Ko => "ko",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(fr/en/ko)에 따라 번역기를 생성한다. 알 수 없는 코드는 fr로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 프랑스어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| fr(key)),
            Language::Ko => ko(key).unwrap_or_else(|| fr(key)),
            Language::Fr => fr(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: &str) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| normalize_lang(config_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "fr".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("fr") => Some("fr".into()),
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("ko") => Some("ko".into()),
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
        "fr" | "en" | "ko" => Some(lang),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 테이블.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = dir.join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    let (base, _) = lang.split_once(['-', '_'])?;
    try_load(base)
}

pub(crate) fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn fr(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Erreur",
        APP_EXIT => "Fin du programme.",
        MAIN_MENU_TITLE => "\n=== Devis électrique ===",
        MAIN_MENU_ROWS => "1) Rangées et DDR",
        MAIN_MENU_QUOTE => "2) Devis depuis un fichier projet",
        MAIN_MENU_CATALOG => "3) Catalogue",
        MAIN_MENU_SETTINGS => "4) Paramètres",
        MAIN_MENU_EXIT => "0) Quitter",
        PROMPT_MENU_SELECT => "Choix : ",
        INVALID_SELECTION_RETRY => "Saisie invalide. Réessayez.",
        ROWS_HEADING => "\n-- Rangées et interrupteurs différentiels --",
        ROWS_PROMPT_BREAKERS => "Calibres des disjoncteurs (ex: 16 16 20 40x2) : ",
        ROWS_EMPTY => "Aucun disjoncteur, aucune rangée.",
        ROWS_ROW => "Rangée",
        ROWS_MODULES => "modules",
        ROWS_TOTAL_RATING => "Calibre total :",
        ROWS_ADJUSTED_RATING => "Ajusté :",
        ROWS_UNCONFIGURED => "DDR non configuré (absent du catalogue)",
        ROWS_SUMMARY => "Total :",
        QUOTE_HEADING => "\n-- Devis --",
        QUOTE_PROMPT_FILE => "Fichier projet (JSON) : ",
        QUOTE_PROMPT_CSV => "Fichier CSV (entrée pour ignorer) : ",
        QUOTE_EQUIPMENT_TOTAL => "Total équipements :",
        QUOTE_DIMENSIONING_TOTAL => "Total dimensionnement :",
        QUOTE_TOTAL => "Total HT :",
        QUOTE_PLATES => "Plaques par pièce :",
        QUOTE_PLATE_WHITE => "blanc",
        QUOTE_PLATE_BLACK => "noir",
        QUOTE_NOTES => "Notes d'installation :",
        QUOTE_CSV_WRITTEN => "CSV écrit :",
        CATALOG_HEADING => "\n-- Catalogue --",
        CATALOG_VERSION => "Version :",
        SETTINGS_HEADING => "\n-- Paramètres --",
        SETTINGS_CURRENT_LANGUAGE => "Langue actuelle :",
        SETTINGS_LANGUAGE_OPTIONS => "1) auto  2) fr  3) en  4) ko  5) détail des rangées oui/non",
        SETTINGS_PROMPT_CHANGE => "Numéro à changer (entrée pour annuler) : ",
        SETTINGS_ROW_DETAILS => "Détail des rangées :",
        SETTINGS_INVALID => "Saisie invalide, paramètres inchangés.",
        SETTINGS_SAVED => "Paramètres enregistrés.",
        ERROR_INVALID_BREAKER => "Calibre invalide :",
        HELP_ROWS => "Aide : calibres séparés par des espaces, `x` pour la quantité (40x2). Calibres : 2 6 10 16 20 25 32 40 63.",
        HELP_QUOTE => "Aide : fichier JSON avec rooms, equipments et dimensioning.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Electrical Quote Toolbox ===",
        MAIN_MENU_ROWS => "1) Rows and RCDs",
        MAIN_MENU_QUOTE => "2) Quote from project file",
        MAIN_MENU_CATALOG => "3) Catalog",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ROWS_HEADING => "\n-- Rows and residual-current devices --",
        ROWS_PROMPT_BREAKERS => "Breaker ratings (ex: 16 16 20 40x2): ",
        ROWS_EMPTY => "No breakers, no rows.",
        ROWS_ROW => "Row",
        ROWS_MODULES => "modules",
        ROWS_TOTAL_RATING => "Total rating:",
        ROWS_ADJUSTED_RATING => "Adjusted:",
        ROWS_UNCONFIGURED => "RCD not configured (missing from catalog)",
        ROWS_SUMMARY => "Total:",
        QUOTE_HEADING => "\n-- Quote --",
        QUOTE_PROMPT_FILE => "Project file (JSON): ",
        QUOTE_PROMPT_CSV => "CSV file (enter to skip): ",
        QUOTE_EQUIPMENT_TOTAL => "Equipment total:",
        QUOTE_DIMENSIONING_TOTAL => "Dimensioning total:",
        QUOTE_TOTAL => "Total (excl. VAT):",
        QUOTE_PLATES => "Plates per room:",
        QUOTE_PLATE_WHITE => "white",
        QUOTE_PLATE_BLACK => "black",
        QUOTE_NOTES => "Installation notes:",
        QUOTE_CSV_WRITTEN => "CSV written:",
        CATALOG_HEADING => "\n-- Catalog --",
        CATALOG_VERSION => "Version:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_LANGUAGE_OPTIONS => "1) auto  2) fr  3) en  4) ko  5) toggle row details",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_ROW_DETAILS => "Row details:",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        ERROR_INVALID_BREAKER => "Invalid rating:",
        HELP_ROWS => "Help: ratings separated by spaces, `x` for quantity (40x2). Ratings: 2 6 10 16 20 25 32 40 63.",
        HELP_QUOTE => "Help: JSON file with rooms, equipments and dimensioning.",
        _ => return None,
    })
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 전기 견적 도구 ===",
        MAIN_MENU_ROWS => "1) 열 배치 / 누전차단기",
        MAIN_MENU_QUOTE => "2) 프로젝트 파일 견적",
        MAIN_MENU_CATALOG => "3) 카탈로그",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ROWS_HEADING => "\n-- 열 배치 / 누전차단기 --",
        ROWS_PROMPT_BREAKERS => "차단기 정격 (예: 16 16 20 40x2): ",
        ROWS_EMPTY => "차단기가 없어 열도 없습니다.",
        ROWS_ROW => "열",
        ROWS_MODULES => "모듈",
        ROWS_TOTAL_RATING => "정격 합계:",
        ROWS_ADJUSTED_RATING => "보정값:",
        ROWS_UNCONFIGURED => "DDR 미구성 (카탈로그에 없음)",
        ROWS_SUMMARY => "합계:",
        QUOTE_HEADING => "\n-- 견적 --",
        QUOTE_PROMPT_FILE => "프로젝트 파일 (JSON): ",
        QUOTE_PROMPT_CSV => "CSV 파일 (엔터: 건너뜀): ",
        QUOTE_EQUIPMENT_TOTAL => "설비 합계:",
        QUOTE_DIMENSIONING_TOTAL => "치수 계산 합계:",
        QUOTE_TOTAL => "총액(부가세 별도):",
        QUOTE_PLATES => "방별 플레이트:",
        QUOTE_PLATE_WHITE => "흰색",
        QUOTE_PLATE_BLACK => "검정",
        QUOTE_NOTES => "시공 메모:",
        QUOTE_CSV_WRITTEN => "CSV 저장:",
        CATALOG_HEADING => "\n-- 카탈로그 --",
        CATALOG_VERSION => "버전:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_LANGUAGE_OPTIONS => "1) auto  2) fr  3) en  4) ko  5) 열 상세 표시 전환",
        SETTINGS_PROMPT_CHANGE => "변경할 번호 입력 (엔터: 취소): ",
        SETTINGS_ROW_DETAILS => "열 상세 표시:",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        ERROR_INVALID_BREAKER => "잘못된 정격:",
        HELP_ROWS => "도움말: 정격을 공백으로 구분, 수량은 `x` (40x2). 정격: 2 6 10 16 20 25 32 40 63.",
        HELP_QUOTE => "도움말: rooms, equipments, dimensioning 을 담은 JSON 파일.",
        _ => return None,
    })
}
