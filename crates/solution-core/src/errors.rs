//! 错误类型定义

use thiserror::Error;

/// 解析错误类型
///
/// 三种错误都会使构造立即失败，不存在重试或恢复；
/// 调用方需要修正容器形态后重新构造解析器。
#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("未发现解答入口方法: {container}")]
    EntryPointNotFound { container: String },

    #[error("发现多个候选解答方法: {candidates:?}")]
    AmbiguousMatch { candidates: Vec<String> },

    #[error("解答方法签名无效: {method}, 原因: {reason}")]
    InvalidFormat { method: String, reason: String },
}

impl ResolutionError {
    /// 创建入口未找到错误
    pub fn entry_point_not_found(container: impl Into<String>) -> Self {
        Self::EntryPointNotFound {
            container: container.into(),
        }
    }

    /// 创建多重匹配错误
    pub fn ambiguous_match(candidates: Vec<String>) -> Self {
        Self::AmbiguousMatch { candidates }
    }

    /// 创建签名无效错误
    pub fn invalid_format(method: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            method: method.into(),
            reason: reason.into(),
        }
    }
}

/// 结果类型别名
pub type ResolutionResult<T> = Result<T, ResolutionError>;
