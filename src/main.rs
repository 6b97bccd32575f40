use std::path::Path;

use clap::Parser;

use insulation_toolbox::{app, catalog, config, i18n};

/// 단열재 카탈로그 및 단열층 계산 CLI.
#[derive(Debug, Parser)]
#[command(name = "insulation_toolbox", version)]
struct Cli {
    /// 시드 카탈로그 TOML 경로 (설정값보다 우선)
    #[arg(long)]
    materials: Option<String>,
    /// UI 언어 코드 (ko/en/auto)
    #[arg(long, default_value = "auto")]
    lang: String,
}

/// 프로그램의 엔트리 포인트. 설정과 시드 카탈로그를 로드한 뒤 CLI를 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    if let Some(path) = cli.materials {
        cfg.materials_path = path;
    }

    let lang = i18n::resolve_language(&cli.lang, Some(&cfg.language));
    let tr = i18n::Translator::new(&lang);

    // 시드 파일이 없으면 빈 카탈로그로 시작한다.
    let mut store = if Path::new(&cfg.materials_path).exists() {
        let seed = catalog::load_materials_from_toml(&cfg.materials_path)?;
        catalog::MaterialStore::from_seed(seed)
    } else {
        catalog::MaterialStore::new()
    };

    app::run(&mut cfg, &tr, &mut store)?;
    Ok(())
}
