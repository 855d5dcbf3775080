//! 终端输出
//!
//! 只负责展示，不影响流程结果

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

use crate::error::InstallWarning;

/// 单个步骤的进度提示（非终端环境下 spinner 自动隐藏）
pub struct Step {
    spinner: ProgressBar,
}

impl Step {
    pub fn start(msg: &str) -> Self {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            spinner.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
        }
        spinner.set_message(msg.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        Self { spinner }
    }

    pub fn succeed(self, msg: &str) {
        self.spinner.finish_and_clear();
        println!("{} {}", "✔".green(), msg);
    }

    pub fn fail(self, msg: &str) {
        self.spinner.finish_and_clear();
        println!("{} {}", "✖".red(), msg);
    }
}

pub fn banner() {
    println!("{}", "🚀 Welcome to Create IC App!".cyan());
    println!(
        "{}",
        "Making IC development as easy as React development\n".bright_black()
    );
}

pub fn creating(target: &Path) {
    println!(
        "{}",
        format!(
            "\n📁 Creating IC app in {}",
            target.display().to_string().bold()
        )
        .blue()
    );
}

/// 依赖安装失败时输出原因并提示手动安装
pub fn manual_install_hint(project_name: &str, command_line: &str, warning: &InstallWarning) {
    tracing::debug!("{}", warning);
    for (i, line) in warning.reason.lines().enumerate() {
        let prefix = if i == 0 { "   Reason: " } else { "           " };
        println!("{}", format!("{}{}", prefix, line).bright_black());
    }
    println!(
        "{}",
        "\n⚠️  You can install dependencies manually by running:".yellow()
    );
    println!(
        "{}",
        format!("   cd {} && {}", shell_quote(project_name), command_line).bright_black()
    );
}

/// 名称含空白或 shell 特殊字符时加单引号
pub fn shell_quote(arg: &str) -> String {
    let plain = arg
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/'));
    if plain && !arg.is_empty() {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', "'\\''"))
    }
}

pub fn success_summary(project_name: &str, package_manager: &str) {
    let gray = |s: &str| println!("{}", s.bright_black());

    println!(
        "{}",
        format!(
            "\n🎉 Successfully created IC app: {}",
            project_name.bold()
        )
        .green()
    );
    println!("{}", "\n📋 Get started with these commands:\n".cyan());
    println!("{} {}", "   cd".bright_black(), shell_quote(project_name).as_str().blue());
    gray("   ./deploy.sh");
    println!();

    println!("{}", "📚 What you get:".white());
    gray("   ✓ Internet Computer backend (Motoko)");
    gray("   ✓ React frontend with TypeScript");
    gray("   ✓ DFX configuration ready");
    gray("   ✓ Deployment scripts included");
    gray("   ✓ Environment variables configured (.env)");
    gray("   ✓ Everything ready to deploy");
    println!();

    println!("{}", "🚀 Quick commands:".white());
    gray("   ./deploy.sh          - Deploy to local IC replica");
    gray("   ./deploy-ic.sh       - Deploy to IC mainnet");
    gray(&format!(
        "   {:<21}- Start development server",
        format!("{} run dev", package_manager)
    ));
    gray("   cat README.md        - Full documentation");
    println!();

    println!("{}", "Happy coding! 🎯".green());
    gray("Made with ❤️  for the IC community");
}

pub fn already_exists(project_name: &str) {
    println!(
        "{}",
        format!("\n❌ Directory \"{}\" already exists!", project_name).red()
    );
    println!(
        "{}",
        "Please choose a different name or remove the existing directory.\n".bright_black()
    );
}

pub fn cancelled() {
    println!("{}", "\n❌ Operation cancelled".red());
}

pub fn failed(reason: &str) {
    eprintln!("{} {}", "\n❌ Failed to create IC app:".red(), reason);
}
