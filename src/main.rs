use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use create_ic_app::config::{PACKAGE_MANAGER_ENV, TEMPLATE_ENV};
use create_ic_app::{create_project, output, resolve_project_name, ScaffoldConfig, ScaffoldError};

/// Create IC App
///
/// 一条命令创建可直接部署的 Internet Computer 项目
#[derive(Parser)]
#[command(name = "create-ic-app")]
#[command(author, version = env!("APP_VERSION"), about)]
#[command(
    long_about = "Create Internet Computer applications with zero configuration.\n\
                  The project template (Motoko backend, React + TypeScript frontend, dfx configuration\n\
                  and deployment scripts) is embedded in the binary."
)]
struct Cli {
    /// name of the project to create
    #[arg(value_name = "project-name")]
    project_name: Option<String>,

    /// 使用本地模板目录代替内嵌模板
    #[arg(long, value_name = "DIR", env = TEMPLATE_ENV)]
    template: Option<PathBuf>,

    /// 安装依赖使用的包管理器
    #[arg(long, value_name = "BIN", env = PACKAGE_MANAGER_ENV)]
    package_manager: Option<String>,

    /// 输出调试日志（-v debug，-vv trace）
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ═══════════════════════════════════════════════════════════════════
// 日志
// ═══════════════════════════════════════════════════════════════════

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ═══════════════════════════════════════════════════════════════════
// 创建项目
// ═══════════════════════════════════════════════════════════════════

fn run(cli: Cli) -> Result<()> {
    output::banner();

    let name = resolve_project_name(cli.project_name.as_deref())?;
    let config = ScaffoldConfig::new(cli.template, cli.package_manager);
    let cwd = env::current_dir().context("Failed to determine the current directory")?;

    let outcome = create_project(&name, &cwd, &config, &config.installer())?;
    tracing::debug!(
        "created {} (dependencies installed: {})",
        outcome.target.display(),
        outcome.dependencies_installed()
    );

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════
// Main
// ═══════════════════════════════════════════════════════════════════

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        match err.downcast_ref::<ScaffoldError>() {
            Some(e) if e.is_cancelled() => output::cancelled(),
            Some(ScaffoldError::AlreadyExists { path }) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                output::already_exists(&name);
            }
            Some(e) => output::failed(&e.to_string()),
            None => output::failed(&format!("{:#}", err)),
        }
        process::exit(1);
    }
}
