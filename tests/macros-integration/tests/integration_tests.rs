//! 宏集成测试
//!
//! 验证 `#[solution_container]` 展开出的描述符表与调用函数
//! 同解析器协同工作。

use solution_core::{MethodVisibility, SolutionContainer};
use solution_resolver::{ResolutionError, SolutionResolver, SolutionShape};
use std::any::Any;
use std::sync::Mutex;

use solution_macros::solution_container;

pub struct Fibonacci;

#[solution_container]
impl Fibonacci {
    #[solution]
    pub fn solve(&self, n: u64) -> u64 {
        (1..=n).fold((0u64, 1u64), |(a, b), _| (b, a + b)).0
    }

    pub fn helper(&self) -> u64 {
        0
    }
}

#[derive(Default)]
pub struct Checker {
    observed: Mutex<Option<i32>>,
}

#[solution_container]
impl Checker {
    pub fn verify(&self, #[result] expected: i32) {
        *self.observed.lock().unwrap() = Some(expected);
    }
}

pub struct Hidden;

#[solution_container]
impl Hidden {
    #[solution]
    fn solve(&self) -> i32 {
        7
    }
}

pub struct Conflicted;

#[solution_container]
impl Conflicted {
    #[solution]
    pub fn solve(&self, #[result] expected: i32) -> i32 {
        expected
    }
}

#[test]
fn test_macro_generates_descriptor_table() {
    let table = Fibonacci.solution_methods();

    assert_eq!(table.len(), 2);

    let solve = &table[0];
    assert_eq!(solve.name, "solve");
    assert_eq!(solve.visibility, MethodVisibility::Public);
    assert!(solve.solution_marker);
    assert_eq!(solve.parameters.len(), 1);
    assert!(solve.parameters[0].type_info.is::<u64>());
    assert!(solve.return_type.as_ref().is_some_and(|ty| ty.is::<u64>()));

    let helper = &table[1];
    assert_eq!(helper.name, "helper");
    assert!(!helper.solution_marker);
}

#[test]
fn test_result_marker_is_recorded_per_parameter() {
    let table = Checker::default().solution_methods();

    assert_eq!(table.len(), 1);
    assert!(table[0].returns_void());
    assert!(table[0].parameters[0].result_marker);
}

#[test]
fn test_output_container_resolves() {
    let resolver = SolutionResolver::<_, u64>::new(Fibonacci).unwrap();

    assert_eq!(resolver.shape(), SolutionShape::Output);
    assert_eq!(resolver.entry().method_name(), "solve");
}

#[test]
fn test_input_container_resolves() {
    let resolver = SolutionResolver::<_, i32>::new(Checker::default()).unwrap();

    assert_eq!(resolver.shape(), SolutionShape::Input);
    assert_eq!(resolver.entry().result_parameter, Some(0));
}

#[test]
fn test_private_marked_method_is_not_discovered() {
    let error = SolutionResolver::<_, i32>::new(Hidden).unwrap_err();

    assert!(matches!(error, ResolutionError::EntryPointNotFound { .. }));
}

#[test]
fn test_double_marked_method_is_ambiguous() {
    let error = SolutionResolver::<_, i32>::new(Conflicted).unwrap_err();

    assert!(matches!(error, ResolutionError::AmbiguousMatch { .. }));
}

#[test]
fn test_result_type_mismatch_is_invalid_format() {
    let error = SolutionResolver::<_, String>::new(Fibonacci).unwrap_err();

    assert!(matches!(error, ResolutionError::InvalidFormat { .. }));
}

#[test]
fn test_output_invoker_round_trip() {
    let resolver = SolutionResolver::<_, u64>::new(Fibonacci).unwrap();
    let entry = resolver.entry();
    let instance: &dyn Any = resolver.container();

    let result = (entry.method.invoke)(instance, vec![Box::new(10u64)]).unwrap();
    let boxed = result.expect("输出型解答应产生返回值");

    assert_eq!(*boxed.downcast::<u64>().unwrap(), 55);
}

#[test]
fn test_input_invoker_records_value() {
    let resolver = SolutionResolver::<_, i32>::new(Checker::default()).unwrap();
    let entry = resolver.entry();
    let instance: &dyn Any = resolver.container();

    let result = (entry.method.invoke)(instance, vec![Box::new(42i32)]).unwrap();

    assert!(result.is_none());
    assert_eq!(*resolver.container().observed.lock().unwrap(), Some(42));
}

#[test]
fn test_invoker_rejects_wrong_argument_type() {
    let resolver = SolutionResolver::<_, u64>::new(Fibonacci).unwrap();
    let instance: &dyn Any = resolver.container();

    let result = (resolver.entry().method.invoke)(instance, vec![Box::new("oops")]);

    assert!(result.is_err());
}

#[test]
fn test_invoker_rejects_wrong_arity() {
    let resolver = SolutionResolver::<_, u64>::new(Fibonacci).unwrap();
    let instance: &dyn Any = resolver.container();

    let result = (resolver.entry().method.invoke)(instance, Vec::new());

    assert!(result.is_err());
}
