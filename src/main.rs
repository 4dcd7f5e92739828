// autocar-env: autocar build environment initializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Settings --> Command Dispatch
//!   Run (default) | Settings | Options | Configs | Version
//! ```

use std::io::Write;
use std::process::ExitCode;

use autocar_env::cli::global::GlobalOptions;
use autocar_env::cli::{self, Command, RunArgs};
use autocar_env::cmd::config::{run_configs_command, run_options_command, run_settings_command};
use autocar_env::cmd::run::run_command;
use autocar_env::config::Config;
use autocar_env::config::discovery::{CONFIG_FILE_NAME, find_config_file};
use autocar_env::config::loader::ConfigLoader;
use autocar_env::error::{AutocarError, ConfigError};
use autocar_env::logging::{LogConfig, init_logging};
use autocar_env::settings::EnvironmentSettings;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let loader = match build_config_loader(&cli.global) {
        Ok(loader) => loader,
        Err(e) => return report(&e),
    };
    let config_files = loader.format_loaded_files();
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => return report(&e),
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    for file in &config_files {
        tracing::debug!(file = %file, "config source");
    }

    let settings = match resolve_settings(&cli.global, &config) {
        Ok(settings) => settings,
        Err(e) => return report(&e),
    };

    match dispatch_command(&cli, &config, &config_files, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn report(e: &anyhow::Error) -> ExitCode {
    eprintln!("Error: {e:#}");
    ExitCode::FAILURE
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

fn build_config_loader(global: &GlobalOptions) -> autocar_env::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();

    if !global.no_config {
        let cwd = std::env::current_dir()?;
        if let Some(found) = find_config_file(&cwd, CONFIG_FILE_NAME) {
            loader = loader.add_toml_file(found);
        }
    }
    for path in &global.configs {
        if !path.is_file() {
            let missing = ConfigError::NotFound(path.display().to_string());
            return Err(AutocarError::from(missing).into());
        }
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix("AUTOCAR");

    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value)?;
    }
    Ok(loader)
}

fn resolve_settings(
    global: &GlobalOptions,
    config: &Config,
) -> autocar_env::error::Result<EnvironmentSettings> {
    let mut settings = config.environment_settings();
    for edit in global.setting_edits()? {
        settings.apply(&edit);
    }
    Ok(settings)
}

fn dispatch_command(
    cli: &cli::Cli,
    config: &Config,
    config_files: &[String],
    settings: &EnvironmentSettings,
) -> autocar_env::error::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        None => run_command(&RunArgs::default(), settings, &mut out),
        Some(Command::Run(args)) => run_command(args, settings, &mut out),
        Some(Command::Settings(args)) => run_settings_command(args, settings, &mut out),
        Some(Command::Options) => run_options_command(config, &mut out),
        Some(Command::Configs) => run_configs_command(config_files, &mut out),
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
    };

    out.flush()?;
    result
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}
