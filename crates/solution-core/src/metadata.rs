//! 类型元数据定义
//!
//! 提供描述方法签名所需的类型信息

use std::any::TypeId;

/// 类型信息
///
/// 可赋值性在 Rust 中退化为 `TypeId` 相等，具体类型之间不存在子类型关系。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 类型名称
    pub name: String,
    /// 类型ID
    pub id: TypeId,
    /// 完整类型路径
    pub type_path: String,
}

impl TypeInfo {
    /// 从类型获取类型信息
    pub fn of<T: 'static>() -> Self {
        let type_path = std::any::type_name::<T>();
        Self {
            name: type_path
                .split("::")
                .last()
                .unwrap_or(type_path)
                .to_string(),
            id: TypeId::of::<T>(),
            type_path: type_path.to_string(),
        }
    }

    /// 检查是否与指定类型一致
    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// 检查与另一类型信息是否兼容
    pub fn is_compatible_with(&self, other: &TypeInfo) -> bool {
        self.id == other.id
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &str {
        self.name.split("::").last().unwrap_or(&self.name)
    }
}
