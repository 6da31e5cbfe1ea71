//! 解答容器元数据接口定义
//!
//! 容器类型通过此接口公布其候选方法的元数据

use crate::descriptor::MethodDescriptor;

/// 解答容器 trait
///
/// 显式的元数据查询接口，取代宿主运行时的反射能力。
/// 业务代码通常通过 `#[solution_container]` 宏获得实现，
/// 测试代码也可以在桩类型上手工实现。
pub trait SolutionContainer: Send + Sync + 'static {
    /// 容器内声明的全部候选方法描述符
    ///
    /// 描述符表由容器的静态形态决定，对同一实例的多次调用必须返回
    /// 相同内容。
    fn solution_methods(&self) -> Vec<MethodDescriptor>;

    /// 容器名称，用于诊断信息
    fn container_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
