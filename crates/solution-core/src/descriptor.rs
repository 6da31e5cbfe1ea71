//! 候选方法描述符定义
//!
//! 容器类型通过描述符表公布其方法的可见性、签名与角色标记，
//! 取代宿主运行时的反射枚举。描述符在构造后不再变化。

use crate::metadata::TypeInfo;
use std::any::Any;

/// 方法可见性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodVisibility {
    /// `pub`
    Public,
    /// `pub(crate)`
    Crate,
    /// `pub(super)` 或 `pub(in ...)`
    Module,
    /// 未标注可见性
    Private,
}

impl MethodVisibility {
    /// 是否对发现过程可见
    ///
    /// 非公开方法在形态分类之前即被排除，等同于未携带任何标记。
    pub fn is_discoverable(&self) -> bool {
        matches!(self, MethodVisibility::Public)
    }
}

/// 参数描述符
#[derive(Debug, Clone)]
pub struct ParameterDescriptor {
    /// 参数位置（从 0 开始）
    pub position: usize,
    /// 参数类型
    pub type_info: TypeInfo,
    /// 是否携带结果参数标记
    pub result_marker: bool,
}

/// 类型擦除的方法调用函数
///
/// 由 `#[solution_container]` 宏为每个标记方法生成，供下游执行器使用；
/// 解析器本身从不调用。第一个参数为容器实例，第二个参数为按声明顺序
/// 装箱的实参列表；无返回值的方法产生 `Ok(None)`。
pub type SolutionMethodFn = fn(
    &dyn Any,
    Vec<Box<dyn Any>>,
) -> Result<Option<Box<dyn Any>>, Box<dyn std::error::Error + Send + Sync>>;

/// 未绑定调用函数的占位实现
///
/// 用于手工构建的描述符以及未携带标记的方法。
pub fn unbound_invoker(
    _instance: &dyn Any,
    _args: Vec<Box<dyn Any>>,
) -> Result<Option<Box<dyn Any>>, Box<dyn std::error::Error + Send + Sync>> {
    Err(Box::from("方法未绑定调用函数".to_string()))
}

/// 候选方法描述符
#[derive(Debug, Clone)]
pub struct MethodDescriptor {
    /// 方法名称
    pub name: String,
    /// 方法可见性
    pub visibility: MethodVisibility,
    /// 返回类型，`None` 表示无返回值
    pub return_type: Option<TypeInfo>,
    /// 参数列表（按声明顺序）
    pub parameters: Vec<ParameterDescriptor>,
    /// 是否携带方法级解答标记
    pub solution_marker: bool,
    /// 类型擦除的调用入口
    pub invoke: SolutionMethodFn,
}

impl MethodDescriptor {
    /// 创建描述符构建器
    pub fn builder(name: impl Into<String>) -> MethodDescriptorBuilder {
        MethodDescriptorBuilder::new(name)
    }

    /// 携带结果标记的参数位置列表
    pub fn result_marked_positions(&self) -> Vec<usize> {
        self.parameters
            .iter()
            .filter(|parameter| parameter.result_marker)
            .map(|parameter| parameter.position)
            .collect()
    }

    /// 返回值是否为空
    pub fn returns_void(&self) -> bool {
        self.return_type.is_none()
    }

    /// 查找指定位置的参数
    pub fn parameter_at(&self, position: usize) -> Option<&ParameterDescriptor> {
        self.parameters
            .iter()
            .find(|parameter| parameter.position == position)
    }
}

/// 方法描述符构建器
///
/// 默认产生公开可见、无任何标记、无参数且无返回值的描述符。
#[derive(Debug)]
pub struct MethodDescriptorBuilder {
    name: String,
    visibility: MethodVisibility,
    return_type: Option<TypeInfo>,
    parameters: Vec<ParameterDescriptor>,
    solution_marker: bool,
    invoke: SolutionMethodFn,
}

impl MethodDescriptorBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: MethodVisibility::Public,
            return_type: None,
            parameters: Vec::new(),
            solution_marker: false,
            invoke: unbound_invoker,
        }
    }

    /// 设置可见性
    pub fn with_visibility(mut self, visibility: MethodVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// 附加方法级解答标记
    pub fn with_solution_marker(mut self) -> Self {
        self.solution_marker = true;
        self
    }

    /// 追加一个参数
    pub fn accepting(mut self, type_info: TypeInfo) -> Self {
        let position = self.parameters.len();
        self.parameters.push(ParameterDescriptor {
            position,
            type_info,
            result_marker: false,
        });
        self
    }

    /// 在指定位置的参数上附加结果标记
    ///
    /// 位置越界时忽略。
    pub fn with_result_marker_on(mut self, position: usize) -> Self {
        if let Some(parameter) = self.parameters.get_mut(position) {
            parameter.result_marker = true;
        }
        self
    }

    /// 设置返回类型
    pub fn returning(mut self, type_info: TypeInfo) -> Self {
        self.return_type = Some(type_info);
        self
    }

    /// 设置为无返回值
    pub fn returning_void(mut self) -> Self {
        self.return_type = None;
        self
    }

    /// 绑定调用函数
    pub fn with_invoker(mut self, invoke: SolutionMethodFn) -> Self {
        self.invoke = invoke;
        self
    }

    /// 构建描述符
    pub fn build(self) -> MethodDescriptor {
        MethodDescriptor {
            name: self.name,
            visibility: self.visibility,
            return_type: self.return_type,
            parameters: self.parameters,
            solution_marker: self.solution_marker,
            invoke: self.invoke,
        }
    }
}
