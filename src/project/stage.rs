//! 创建流程的阶段定义与转换规则

use std::fmt;

/// 流程阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    NameResolved,
    Materialized,
    Customized,
    Installed,
    /// 依赖安装失败，不是终止状态
    InstallFailed,
    Reported,
    Done,
    Aborted,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Start => "start",
            Stage::NameResolved => "name-resolved",
            Stage::Materialized => "materialized",
            Stage::Customized => "customized",
            Stage::Installed => "installed",
            Stage::InstallFailed => "install-failed",
            Stage::Reported => "reported",
            Stage::Done => "done",
            Stage::Aborted => "aborted",
        }
    }

    /// 验证状态转换是否合法
    pub fn can_transition(from: Stage, to: Stage) -> bool {
        matches!(
            (from, to),
            (Stage::Start, Stage::NameResolved)
                | (Stage::Start, Stage::Aborted)
                | (Stage::NameResolved, Stage::Materialized)
                | (Stage::NameResolved, Stage::Aborted)
                | (Stage::Materialized, Stage::Customized)
                | (Stage::Materialized, Stage::Aborted)
                | (Stage::Customized, Stage::Installed)
                | (Stage::Customized, Stage::InstallFailed)
                | (Stage::Installed, Stage::Reported)
                | (Stage::InstallFailed, Stage::Reported)
                | (Stage::Reported, Stage::Done)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Done | Stage::Aborted)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 记录当前阶段，按转换表推进
#[derive(Debug)]
pub struct Pipeline {
    stage: Stage,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            stage: Stage::Start,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn advance(&mut self, to: Stage) {
        debug_assert!(
            Stage::can_transition(self.stage, to),
            "invalid stage transition: {} → {}",
            self.stage,
            to
        );
        tracing::debug!("stage {} → {}", self.stage, to);
        self.stage = to;
    }

    /// 从任一非终止阶段中止（已中止或已完成时不变）
    pub fn abort(&mut self) {
        if !self.stage.is_terminal() {
            tracing::debug!("stage {} → {}", self.stage, Stage::Aborted);
            self.stage = Stage::Aborted;
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
