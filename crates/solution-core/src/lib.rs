//! # Solution Core
//!
//! 这个 crate 提供了解答方法发现引擎的公共词汇。
//!
//! ## 核心组件
//!
//! - [`TypeInfo`] - 类型元数据
//! - [`MethodDescriptor`] - 候选方法描述符
//! - [`SolutionContainer`] - 解答容器元数据接口
//! - [`ResolutionError`] - 解析错误分类
//!
//! ## 设计原则
//!
//! - 以显式的描述符表取代宿主运行时的反射枚举
//! - 基于 Rust 类型系统的编译时安全
//! - 构造时一次性验证，之后不可变

pub mod container;
pub mod descriptor;
pub mod errors;
pub mod metadata;

pub use container::*;
pub use descriptor::*;
pub use errors::*;
pub use metadata::*;
