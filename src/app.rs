use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};
use crate::config::{self, Config, ConfigError};
use crate::dimensioning::{generate_breakers, validate_breakers, BreakerInput, InputError};
use crate::i18n::{self, Translator};
use crate::logging;
use crate::panel::compute_layout;
use crate::project::{Project, ProjectError};
use crate::quote::{self, QuoteError};
use crate::ui_cli::{self, BreakerSpec, MenuChoice};

/// 명령행 인자.
#[derive(Parser, Debug)]
#[command(name = "electrical_quote_toolbox")]
#[command(version, about = "분전반 열 배치, 누전차단기 산정, 전기 견적", long_about = None)]
pub struct Cli {
    /// 표시 언어 (auto/fr/en/ko)
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// 기본 카탈로그 대신 사용할 TOML 파일
    #[arg(long, global = true, value_name = "CATALOG_TOML")]
    pub catalog: Option<PathBuf>,

    /// 설정 파일 경로
    #[arg(long, global = true, value_name = "CONFIG_TOML")]
    pub config: Option<PathBuf>,

    /// 없으면 대화형 메뉴
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 차단기 목록으로 열 배치와 DDR을 계산한다
    Rows {
        /// 정격, `40x2`처럼 수량 지정 가능. 여러 번 사용
        #[arg(long = "rating", value_parser = ui_cli::parse_breaker_spec, conflicts_with = "input")]
        ratings: Vec<BreakerSpec>,

        /// 차단기 목록 JSON (rating/quantity/description 배열)
        #[arg(long, value_name = "BREAKERS_JSON")]
        input: Option<PathBuf>,

        /// 결과를 JSON으로 출력
        #[arg(long)]
        json: bool,
    },

    /// 프로젝트 파일로 견적을 만든다
    Quote {
        #[arg(long, value_name = "PROJECT_JSON")]
        input: PathBuf,

        /// 품번/수량 CSV 출력 경로
        #[arg(long, value_name = "CSV")]
        csv: Option<PathBuf>,

        /// 견적을 JSON으로 출력
        #[arg(long)]
        json: bool,
    },

    /// 카탈로그 부품을 나열한다
    Catalog {
        /// TOML 형식으로 출력 (사용자 카탈로그 작성용)
        #[arg(long)]
        toml: bool,
    },
}

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Project(#[from] ProjectError),
    #[error(transparent)]
    Quote(#[from] QuoteError),
    #[error("JSON 오류: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV 출력 오류: {0}")]
    Csv(#[from] csv::Error),
}

/// 설정과 카탈로그를 준비하고 하위 명령 또는 대화형 메뉴를 실행한다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_PATH));
    let mut cfg = config::load_or_default_at(&config_path)?;
    logging::init(&cfg.log_level);

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)?,
        None => cfg.load_catalog()?,
    };
    let tr = translator_for(cli.lang.as_deref(), &cfg);

    match cli.command {
        Some(Command::Rows {
            ratings,
            input,
            json,
        }) => {
            let inputs: Vec<BreakerInput> = match input {
                Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
                None => ratings.into_iter().map(BreakerInput::from).collect(),
            };
            validate_breakers(&inputs)?;
            let breakers = generate_breakers(&inputs, &catalog)?;
            let layout = compute_layout(&breakers, &catalog);
            if json {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                ui_cli::print_layout(&tr, &layout, cfg.show_row_details);
            }
        }
        Some(Command::Quote { input, csv, json }) => {
            let project = Project::load(&input)?;
            let quote = quote::build_quote(&project, &catalog)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                ui_cli::print_quote(&tr, &quote);
            }
            if let Some(path) = csv {
                ui_cli::write_quote_csv(&tr, &quote, &path)?;
            }
        }
        Some(Command::Catalog { toml }) => {
            if toml {
                print!("{}", catalog.to_toml_string()?);
            } else {
                ui_cli::print_catalog(&tr, &catalog);
            }
        }
        None => run_interactive(&mut cfg, &config_path, &catalog, tr, cli.lang.as_deref())?,
    }
    Ok(())
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
fn run_interactive(
    cfg: &mut Config,
    config_path: &Path,
    catalog: &Catalog,
    mut tr: Translator,
    cli_lang: Option<&str>,
) -> Result<(), AppError> {
    loop {
        // 메뉴 안에서 난 오류는 표시만 하고 메뉴로 돌아간다
        let result = match ui_cli::main_menu(&tr)? {
            MenuChoice::Rows => ui_cli::handle_rows(&tr, cfg, catalog),
            MenuChoice::Quote => ui_cli::handle_quote(&tr, catalog),
            MenuChoice::Catalog => {
                ui_cli::print_catalog(&tr, catalog);
                Ok(())
            }
            MenuChoice::Settings => {
                if ui_cli::handle_settings(&tr, cfg)? {
                    cfg.save_to(config_path)?;
                    tr = translator_for(cli_lang, cfg);
                }
                Ok(())
            }
            MenuChoice::Exit => {
                cfg.save_to(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        if let Err(err) = result {
            println!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
        }
    }
    Ok(())
}

/// CLI 플래그, 설정 순으로 언어를 정해 번역기를 만든다.
pub fn translator_for(cli_lang: Option<&str>, cfg: &Config) -> Translator {
    let lang = i18n::resolve_language(cli_lang, &cfg.language);
    Translator::new_with_pack(&lang, None)
}

/// 오류 출력용 번역기. 설정 파일을 다시 읽되 실패하면 기본 설정을 쓴다.
pub fn error_translator(cli_lang: Option<&str>, config_path: Option<&Path>) -> Translator {
    let path = config_path.unwrap_or_else(|| Path::new(config::DEFAULT_CONFIG_PATH));
    let cfg = config::load_existing(path)
        .ok()
        .flatten()
        .unwrap_or_default();
    translator_for(cli_lang, &cfg)
}
