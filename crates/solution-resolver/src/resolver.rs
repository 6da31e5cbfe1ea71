//! 解答方法解析器
//!
//! 解析是对容器描述符表的单次同步遍历：筛选公开方法、收集形态匹配、
//! 校验基数与签名，最终产出唯一的 [`ResolvedEntry`]。解析过程从不调用
//! 候选方法。

use crate::entry::{ResolvedEntry, SolutionShape};
use solution_core::{
    MethodDescriptor, ResolutionError, ResolutionResult, SolutionContainer, TypeInfo,
};
use std::marker::PhantomData;
use tracing::{debug, info};

/// 单个形态匹配
///
/// 一个方法级标记产生一个输出型匹配；每个被标记的参数产生一个
/// 输入型匹配。双重标记或多重参数标记因此直接推高匹配总数。
#[derive(Debug)]
enum ShapeMatch {
    Output {
        method: MethodDescriptor,
    },
    Input {
        method: MethodDescriptor,
        position: usize,
    },
}

impl ShapeMatch {
    fn method_name(&self) -> &str {
        match self {
            ShapeMatch::Output { method } => &method.name,
            ShapeMatch::Input { method, .. } => &method.name,
        }
    }
}

/// 解答方法解析器
///
/// 每个容器实例与结果类型构造一次。构造即完成全部验证，
/// 之后解析器持有容器实例与不可变的解析产物。
pub struct SolutionResolver<C, R>
where
    C: SolutionContainer,
    R: 'static,
{
    container: C,
    entry: ResolvedEntry,
    _result: PhantomData<fn() -> R>,
}

impl<C, R> std::fmt::Debug for SolutionResolver<C, R>
where
    C: SolutionContainer,
    R: 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolutionResolver")
            .field("container", &self.container.container_name())
            .field("entry", &self.entry)
            .finish()
    }
}

impl<C, R> SolutionResolver<C, R>
where
    C: SolutionContainer,
    R: 'static,
{
    /// 构造解析器并立即完成发现与验证
    ///
    /// 失败时返回三种错误之一，不产生部分结果：
    /// - [`ResolutionError::EntryPointNotFound`] - 没有任何符合条件的方法
    /// - [`ResolutionError::AmbiguousMatch`] - 形态匹配总数超过一个
    /// - [`ResolutionError::InvalidFormat`] - 唯一匹配的签名与其角色矛盾
    pub fn new(container: C) -> ResolutionResult<Self> {
        let descriptors = container.solution_methods();
        debug!(
            "开始解析容器 {}, 候选方法 {} 个",
            container.container_name(),
            descriptors.len()
        );

        let matches = collect_matches(descriptors);
        let entry = resolve_single::<R>(container.container_name(), matches)?;

        info!(
            "解析成功: {}::{} ({:?})",
            container.container_name(),
            entry.method.name,
            entry.shape
        );

        Ok(Self {
            container,
            entry,
            _result: PhantomData,
        })
    }

    /// 已解析的入口
    pub fn entry(&self) -> &ResolvedEntry {
        &self.entry
    }

    /// 绑定的容器实例
    pub fn container(&self) -> &C {
        &self.container
    }

    /// 解答形态
    pub fn shape(&self) -> SolutionShape {
        self.entry.shape
    }
}

/// 收集所有形态匹配
///
/// 仅公开方法参与分类，非公开方法等同于未携带标记。
fn collect_matches(descriptors: Vec<MethodDescriptor>) -> Vec<ShapeMatch> {
    let mut matches = Vec::new();

    for descriptor in descriptors {
        if !descriptor.visibility.is_discoverable() {
            debug!("跳过非公开方法: {}", descriptor.name);
            continue;
        }

        let marked_positions = descriptor.result_marked_positions();

        if descriptor.solution_marker {
            debug!("发现输出型候选: {}", descriptor.name);
            matches.push(ShapeMatch::Output {
                method: descriptor.clone(),
            });
        }

        for position in marked_positions {
            debug!("发现输入型候选: {} (参数 {})", descriptor.name, position);
            matches.push(ShapeMatch::Input {
                method: descriptor.clone(),
                position,
            });
        }
    }

    matches
}

/// 基数检查与签名验证
fn resolve_single<R: 'static>(
    container: &str,
    mut matches: Vec<ShapeMatch>,
) -> ResolutionResult<ResolvedEntry> {
    match matches.len() {
        0 => Err(ResolutionError::entry_point_not_found(container)),
        1 => validate_signature::<R>(matches.remove(0)),
        _ => Err(ResolutionError::ambiguous_match(
            matches
                .iter()
                .map(|candidate| candidate.method_name().to_string())
                .collect(),
        )),
    }
}

/// 校验唯一匹配的签名与其角色是否一致
fn validate_signature<R: 'static>(candidate: ShapeMatch) -> ResolutionResult<ResolvedEntry> {
    let expected = TypeInfo::of::<R>();

    match candidate {
        ShapeMatch::Output { method } => {
            let Some(return_type) = method.return_type.as_ref() else {
                return Err(ResolutionError::invalid_format(
                    &method.name,
                    "输出型解答必须返回结果值",
                ));
            };
            if !return_type.is_compatible_with(&expected) {
                return Err(ResolutionError::invalid_format(
                    &method.name,
                    format!(
                        "返回类型 {} 与请求的结果类型 {} 不一致",
                        return_type.short_name(),
                        expected.short_name()
                    ),
                ));
            }

            Ok(ResolvedEntry {
                method,
                shape: SolutionShape::Output,
                result_parameter: None,
            })
        }
        ShapeMatch::Input { method, position } => {
            if !method.returns_void() {
                return Err(ResolutionError::invalid_format(
                    &method.name,
                    "输入型解答不得有返回值",
                ));
            }

            match method.parameter_at(position) {
                Some(parameter) if !parameter.type_info.is_compatible_with(&expected) => {
                    return Err(ResolutionError::invalid_format(
                        &method.name,
                        format!(
                            "结果参数类型 {} 与请求的结果类型 {} 不一致",
                            parameter.type_info.short_name(),
                            expected.short_name()
                        ),
                    ));
                }
                Some(_) => {}
                None => {
                    return Err(ResolutionError::invalid_format(
                        &method.name,
                        format!("结果参数位置 {} 不存在", position),
                    ));
                }
            }

            Ok(ResolvedEntry {
                method,
                shape: SolutionShape::Input,
                result_parameter: Some(position),
            })
        }
    }
}
