//! 项目创建流程
//!
//! 复制模板 → 修改配置 → 安装依赖 → 输出说明
//!
//! 复制与配置失败会中止并清理目标目录；依赖安装失败只给出警告

use std::path::{Path, PathBuf};

use super::customizer::ENV_FILE;
use super::{customize_project, NamePolicy, Pipeline, ProjectName, Stage, TargetDir};
use crate::config::ScaffoldConfig;
use crate::error::{InstallWarning, ScaffoldResult};
use crate::installer::DependencyInstaller;
use crate::output::{self, Step};
use crate::prompt::prompt_project_name;

/// 创建结果
#[derive(Debug)]
pub struct CreateOutcome {
    pub target: PathBuf,
    pub install_warning: Option<InstallWarning>,
}

impl CreateOutcome {
    pub fn dependencies_installed(&self) -> bool {
        self.install_warning.is_none()
    }
}

/// 命令行参数直接使用（仅拒绝空值），未提供时交互式询问
pub fn resolve_project_name(arg: Option<&str>) -> ScaffoldResult<ProjectName> {
    match arg {
        Some(name) => ProjectName::parse(name, NamePolicy::Relaxed),
        None => prompt_project_name(),
    }
}

/// 在 `cwd/<name>` 创建新项目
pub fn create_project(
    name: &ProjectName,
    cwd: &Path,
    config: &ScaffoldConfig,
    installer: &dyn DependencyInstaller,
) -> ScaffoldResult<CreateOutcome> {
    let mut pipeline = Pipeline::new();
    pipeline.advance(Stage::NameResolved);

    let result = run_stages(&mut pipeline, name, cwd, config, installer);
    if result.is_err() {
        pipeline.abort();
    }
    result
}

fn run_stages(
    pipeline: &mut Pipeline,
    name: &ProjectName,
    cwd: &Path,
    config: &ScaffoldConfig,
    installer: &dyn DependencyInstaller,
) -> ScaffoldResult<CreateOutcome> {
    let target = TargetDir::create(&cwd.join(name.as_str()))?;

    output::creating(target.path());

    // Step 1: 复制模板
    let step = Step::start("Copying template files...");
    match config.template.materialize(target.path()) {
        Ok(count) => {
            tracing::debug!("copied {} files from {}", count, config.template);
            step.succeed("Template files copied");
        }
        Err(e) => {
            step.fail("Failed to copy template files");
            return Err(e);
        }
    }
    pipeline.advance(Stage::Materialized);

    // Step 2: 修改 package.json，生成 .env
    let step = Step::start("Updating project configuration...");
    match customize_project(target.path(), name) {
        Ok(customization) => {
            tracing::debug!(
                "description updated: {}, {} created: {}",
                customization.description_updated,
                ENV_FILE,
                customization.env_created
            );
            step.succeed("Project configuration updated");
        }
        Err(e) => {
            step.fail("Failed to update project configuration");
            return Err(e);
        }
    }
    pipeline.advance(Stage::Customized);

    let target = target.commit();

    // Step 3: 安装依赖（失败不影响结果）
    let step = Step::start("Installing dependencies...");
    let install_warning = match installer.install(&target) {
        Ok(()) => {
            step.succeed("Dependencies installed");
            pipeline.advance(Stage::Installed);
            None
        }
        Err(warning) => {
            step.fail("Failed to install dependencies");
            output::manual_install_hint(name.as_str(), &installer.command_line(), &warning);
            pipeline.advance(Stage::InstallFailed);
            Some(warning)
        }
    };

    // Step 4: 使用说明
    output::success_summary(name.as_str(), installer.program());
    pipeline.advance(Stage::Reported);
    pipeline.advance(Stage::Done);

    Ok(CreateOutcome {
        target,
        install_warning,
    })
}
