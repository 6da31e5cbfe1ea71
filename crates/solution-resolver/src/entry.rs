//! 解析产物定义

use solution_core::MethodDescriptor;

/// 解答形态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolutionShape {
    /// 输出型：方法返回结果值
    Output,
    /// 输入型：方法通过标记参数接收外部结果值，无返回值
    Input,
}

/// 已解析的入口
///
/// 成功解析的唯一产物：方法描述符、解答形态，以及输入型解答的
/// 结果参数位置。构造后不可变，与解析器同生命周期。
#[derive(Debug, Clone)]
pub struct ResolvedEntry {
    /// 方法描述符
    pub method: MethodDescriptor,
    /// 解答形态
    pub shape: SolutionShape,
    /// 输入型解答的结果参数位置
    pub result_parameter: Option<usize>,
}

impl ResolvedEntry {
    /// 方法名称
    pub fn method_name(&self) -> &str {
        &self.method.name
    }
}
