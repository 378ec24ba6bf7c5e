use anyhow::Context;
use clap::Parser;
use heritage_recon::{cli, config, export, loader, logging};
use heritage_recon_common::{report, Reconciler};
use cli::{Cli, Commands};
use config::AppConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    match cli.command {
        Commands::Compare { file_a, file_b, output, format, no_strict_charset, quiet } => {
            println!("📜 heritage-recon - 대장 대조\n");

            let mut config = AppConfig::load(cli.config.as_deref())?;

            if no_strict_charset {
                config.reconciliation.normalization.strict_charset = false;
            }

            // 1. 파일 읽기
            println!("[1/3] 파일 읽는 중...");
            let (registry_a, registry_b) = loader::load_registries(
                &file_a,
                &file_b,
                Some(config.reconciliation.registry_a.name.as_str()),
            )?;
            println!(
                "✔ A: {}행, B: 시트 {}개 ({})\n",
                registry_a.len(),
                registry_b.len(),
                registry_b.names().join(", ")
            );

            // 2. 대조
            println!("[2/3] 대조 중...");
            let reconciler = Reconciler::new(config.reconciliation.clone())?;
            let result = reconciler.reconcile(&registry_a, &registry_b);
            println!(
                "✔ 대조 완료 (분류 {}/{}, 경고 {}건)\n",
                result.checked_count(),
                result.mapping_count,
                result.warnings.len()
            );

            if !quiet {
                println!("{}", report::format(&result));
            }

            // 3. 저장
            println!("[3/3] 결과 저장 중...");
            let output = output.unwrap_or_else(|| config.default_output.clone());
            let sources = export::ReportSources { file_a, file_b };
            let written = export::export_report(&result, &format, &output, &sources)
                .with_context(|| format!("결과 저장 실패: {}", output.display()))?;
            for path in written {
                println!("✔ 저장: {}", path.display());
            }

            println!("\n✅ 완료");
        }

        Commands::Inspect { file_a, file_b, rows } => {
            // 미리보기는 컬럼 확인용이므로 이름 컬럼을 요구하지 않는다
            let (registry_a, registry_b) = loader::load_registries(&file_a, &file_b, None)?;
            print!("{}", loader::preview::preview_registries(&registry_a, &registry_b, rows));
        }

        Commands::Config { show, init } => {
            let path = match &cli.config {
                Some(path) => path.clone(),
                None => AppConfig::config_path()?,
            };

            if init {
                if path.exists() {
                    println!("설정 파일이 이미 있습니다: {}", path.display());
                } else {
                    AppConfig::default()
                        .save(&path)
                        .with_context(|| format!("설정 저장 실패: {}", path.display()))?;
                    println!("✔ 기본 설정을 저장했습니다: {}", path.display());
                }
            }

            if show || !init {
                let config = AppConfig::load(cli.config.as_deref())?;
                println!("설정 파일: {}", path.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}
