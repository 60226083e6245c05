use std::process::ExitCode;

use clap::Parser;
use electrical_quote_toolbox::app::{self, Cli};
use electrical_quote_toolbox::i18n::keys;

/// 프로그램의 엔트리 포인트. 인자를 해석한 뒤 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    let lang = cli.lang.clone();
    let config_path = cli.config.clone();
    match app::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let tr = app::error_translator(lang.as_deref(), config_path.as_deref());
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}
