use clap::Parser;
use str_repeat::config::job_from_config;
use str_repeat::core::ConfigProvider;
use str_repeat::utils::error::RepeatError;
use str_repeat::utils::{logger, validation::Validate};
use str_repeat::{CliConfig, LocalStorage, RepeatEngine, StdoutStorage, TomlConfig};

#[tokio::main]
async fn main() {
    let mut config = CliConfig::parse();

    // 載入 TOML 配置 (若有指定)
    let file_error = match config.config.clone() {
        Some(path) => match TomlConfig::from_file(&path) {
            Ok(file) => {
                config.merge_file(file);
                None
            }
            Err(e) => Some((path, e)),
        },
        None => None,
    };

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if let Some((path, e)) = file_error {
        tracing::error!("Failed to load config file '{}': {}", path, e);
        fail(&e);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        fail(&e);
    }

    let job = match job_from_config(&config) {
        Ok(job) => job,
        Err(e) => fail(&e),
    };

    let result = match config.output_path() {
        Some(path) => {
            let engine = RepeatEngine::new(LocalStorage::new(path), config.limits(), config.format())
                .with_trailing_newline(config.trailing_newline());
            engine.run(&job).await
        }
        None => {
            let engine = RepeatEngine::new(StdoutStorage, config.limits(), config.format())
                .with_trailing_newline(config.trailing_newline());
            engine.run(&job).await
        }
    };

    if let Err(e) = result {
        tracing::error!(
            "Repeat failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        fail(&e);
    }
}

fn fail(e: &RepeatError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
