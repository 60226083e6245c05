use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::app::AppError;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::dimensioning::{generate_breakers, BreakerInput};
use crate::i18n::{keys, Translator};
use crate::panel::{compute_layout, PanelLayout, RowProtection};
use crate::project::Project;
use crate::quote::{self, total::round_for_display, Quote};
use crate::units::{BreakerRating, UnitParseError};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Rows,
    Quote,
    Catalog,
    Settings,
    Exit,
}

/// `16`, `16A`, `40x2` 형태의 차단기 입력 한 개.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakerSpec {
    pub rating: BreakerRating,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BreakerSpecError {
    #[error(transparent)]
    Rating(#[from] UnitParseError),
    #[error("수량이 올바르지 않습니다: {0}")]
    Quantity(String),
}

impl FromStr for BreakerSpec {
    type Err = BreakerSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let (rating, quantity) = match lower.split_once(['x', '*']) {
            Some((r, q)) => {
                let q = q.trim();
                let quantity = q
                    .parse::<u32>()
                    .ok()
                    .filter(|&n| n > 0)
                    .ok_or_else(|| BreakerSpecError::Quantity(q.to_string()))?;
                (r, quantity)
            }
            None => (lower.as_str(), 1),
        };
        Ok(BreakerSpec {
            rating: rating.parse()?,
            quantity,
        })
    }
}

impl From<BreakerSpec> for BreakerInput {
    fn from(entry: BreakerSpec) -> Self {
        BreakerInput {
            rating: entry.rating.amps(),
            quantity: entry.quantity,
            description: None,
        }
    }
}

/// clap 값 파서.
pub fn parse_breaker_spec(s: &str) -> Result<BreakerSpec, BreakerSpecError> {
    s.parse()
}

/// 공백/쉼표로 구분된 차단기 목록을 해석한다.
pub fn parse_breaker_specs(line: &str) -> Result<Vec<BreakerSpec>, BreakerSpecError> {
    line.split([' ', ',', ';'])
        .filter(|tok| !tok.trim().is_empty())
        .map(parse_breaker_spec)
        .collect()
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_ROWS));
    println!("{}", tr.t(keys::MAIN_MENU_QUOTE));
    println!("{}", tr.t(keys::MAIN_MENU_CATALOG));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Rows),
            "2" => return Ok(MenuChoice::Quote),
            "3" => return Ok(MenuChoice::Catalog),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 열 배치 메뉴를 처리한다.
pub fn handle_rows(tr: &Translator, cfg: &Config, catalog: &Catalog) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ROWS_HEADING));
    println!("{}", tr.t(keys::HELP_ROWS));
    let specs = loop {
        let line = read_line(tr.t(keys::ROWS_PROMPT_BREAKERS))?;
        match parse_breaker_specs(&line) {
            Ok(specs) => break specs,
            Err(e) => println!("{} {e}", tr.t(keys::ERROR_INVALID_BREAKER)),
        }
    };
    let inputs: Vec<BreakerInput> = specs.into_iter().map(BreakerInput::from).collect();
    let breakers = generate_breakers(&inputs, catalog)?;
    let layout = compute_layout(&breakers, catalog);
    print_layout(tr, &layout, cfg.show_row_details);
    Ok(())
}

/// 프로젝트 파일 견적 메뉴를 처리한다.
pub fn handle_quote(tr: &Translator, catalog: &Catalog) -> Result<(), AppError> {
    println!("{}", tr.t(keys::QUOTE_HEADING));
    println!("{}", tr.t(keys::HELP_QUOTE));
    let path = read_line(tr.t(keys::QUOTE_PROMPT_FILE))?;
    let project = Project::load(path.trim())?;
    let quote = quote::build_quote(&project, catalog)?;
    print_quote(tr, &quote);

    let csv_path = read_line(tr.t(keys::QUOTE_PROMPT_CSV))?;
    let csv_path = csv_path.trim();
    if !csv_path.is_empty() {
        write_quote_csv(tr, &quote, Path::new(csv_path))?;
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 변경 여부를 돌려준다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{} {}", tr.t(keys::SETTINGS_ROW_DETAILS), cfg.show_row_details);
    println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(false),
        "1" => cfg.language = "auto".to_string(),
        "2" => cfg.language = "fr".to_string(),
        "3" => cfg.language = "en".to_string(),
        "4" => cfg.language = "ko".to_string(),
        "5" => cfg.show_row_details = !cfg.show_row_details,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(false);
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(true)
}

/// 열마다 모듈 수, 정격 합계/보정값, DDR을 출력한다.
pub fn print_layout(tr: &Translator, layout: &PanelLayout, show_details: bool) {
    if layout.rows.is_empty() {
        println!("{}", tr.t(keys::ROWS_EMPTY));
        return;
    }
    for protected in &layout.rows {
        let row = &protected.row;
        println!(
            "{} {}: {}/{} {}",
            tr.t(keys::ROWS_ROW),
            row.number,
            row.modules(),
            crate::panel::ROW_MODULE_BUDGET,
            tr.t(keys::ROWS_MODULES)
        );
        if show_details {
            for b in &row.breakers {
                println!("    {} x{}  {}  {}", b.rating, b.quantity, b.reference, b.label);
            }
        }
        match &protected.protection {
            RowProtection::Ddr(ddr) => {
                println!(
                    "  {} {}A  {} {}A  -> {} ({}, {})",
                    tr.t(keys::ROWS_TOTAL_RATING),
                    ddr.total_rating,
                    tr.t(keys::ROWS_ADJUSTED_RATING),
                    ddr.adjusted_rating,
                    ddr.label,
                    ddr.reference,
                    round_for_display(ddr.price)
                );
            }
            RowProtection::Unconfigured(sizing) => {
                println!(
                    "  {} {}A  {} {}A  -> {} [{}]",
                    tr.t(keys::ROWS_TOTAL_RATING),
                    sizing.total_rating,
                    tr.t(keys::ROWS_ADJUSTED_RATING),
                    sizing.adjusted_rating,
                    sizing.rating,
                    tr.t(keys::ROWS_UNCONFIGURED)
                );
            }
        }
    }
    println!(
        "{} {} x {}, {} {}, {} DDR",
        tr.t(keys::ROWS_SUMMARY),
        layout.rows.len(),
        tr.t(keys::ROWS_ROW),
        layout.total_modules(),
        tr.t(keys::ROWS_MODULES),
        layout.ddrs().count()
    );
}

pub fn print_quote(tr: &Translator, quote: &Quote) {
    for line in quote.line_items() {
        println!(
            "{:<14} {:>4} x {:>9}  = {:>10}  {}",
            line.reference,
            line.quantity,
            round_for_display(line.unit_price),
            round_for_display(line.line_total()),
            line.label
        );
    }

    if let Some(layout) = quote.dimensioning.as_ref().and_then(|d| d.layout()) {
        for row in layout.unconfigured_rows() {
            println!("{} {row}: {}", tr.t(keys::ROWS_ROW), tr.t(keys::ROWS_UNCONFIGURED));
        }
    }

    if !quote.plates.is_empty() {
        println!("{}", tr.t(keys::QUOTE_PLATES));
        for room in &quote.plates {
            println!(
                "  {}: {} {} / {} {}",
                room.room_name,
                tr.t(keys::QUOTE_PLATE_WHITE),
                room.white,
                tr.t(keys::QUOTE_PLATE_BLACK),
                room.black
            );
        }
    }

    if let Some(dim) = &quote.dimensioning {
        if !dim.installation_notes.is_empty() {
            println!("{}", tr.t(keys::QUOTE_NOTES));
            for note in &dim.installation_notes {
                println!("  - {note}");
            }
        }
    }

    let totals = quote.totals().rounded();
    println!("{} {}", tr.t(keys::QUOTE_EQUIPMENT_TOTAL), totals.equipment);
    println!("{} {}", tr.t(keys::QUOTE_DIMENSIONING_TOTAL), totals.dimensioning);
    println!("{} {}", tr.t(keys::QUOTE_TOTAL), totals.total);
}

pub fn write_quote_csv(tr: &Translator, quote: &Quote, path: &Path) -> Result<(), AppError> {
    quote::export_csv(path, &quote.line_items())?;
    println!("{} {}", tr.t(keys::QUOTE_CSV_WRITTEN), path.display());
    Ok(())
}

pub fn print_catalog(tr: &Translator, catalog: &Catalog) {
    println!("{}", tr.t(keys::CATALOG_HEADING));
    println!("{} {}", tr.t(keys::CATALOG_VERSION), catalog.version);
    for part in catalog.all_parts() {
        println!(
            "{:<16} {:>9}  {}",
            part.reference,
            round_for_display(part.price),
            part.label
        );
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}
