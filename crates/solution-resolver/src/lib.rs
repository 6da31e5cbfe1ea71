//! # Solution Resolver
//!
//! 解答方法解析器：在构造时对容器的候选方法完成一次性的
//! 发现、形态分类与签名验证。
//!
//! ## 核心类型
//!
//! - [`SolutionResolver`] - 解析器，唯一的验证入口
//! - [`ResolvedEntry`] - 成功解析的唯一产物
//! - [`SolutionShape`] - 输出型 / 输入型两种解答形态

pub mod entry;
pub mod resolver;

pub use entry::*;
pub use resolver::*;

pub use solution_core::{ResolutionError, ResolutionResult};
