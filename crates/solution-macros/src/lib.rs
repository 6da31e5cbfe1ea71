//! # Solution Macros
//!
//! 这个 crate 提供了用于解答容器注册的过程宏。
//!
//! 宏在编译期把带角色标记的 impl 块转换为静态描述符表，
//! 取代宿主运行时的反射枚举。
//!
//! ## 使用示例
//!
//! ```rust
//! use solution_core::SolutionContainer;
//! use solution_macros::solution_container;
//!
//! pub struct Fibonacci;
//!
//! #[solution_container]
//! impl Fibonacci {
//!     #[solution]
//!     pub fn solve(&self, n: u64) -> u64 {
//!         (1..=n).fold((0u64, 1u64), |(a, b), _| (b, a + b)).0
//!     }
//! }
//!
//! let table = Fibonacci.solution_methods();
//! assert_eq!(table.len(), 1);
//! assert!(table[0].solution_marker);
//! ```

use proc_macro::TokenStream;

mod container;
mod utils;

/// 解答容器注册宏
///
/// 应用于固有 impl 块，为容器类型生成 `SolutionContainer` 实现。
///
/// # 角色标记
///
/// - `#[solution]` - 方法级标记，声明该方法为入口且其返回值即为结果
/// - `#[result]` - 参数级标记，声明该参数接收外部提供的结果值
///
/// 两种标记都会在展开时被移除。携带标记的方法必须以 `&self` 为接收者，
/// 且参数类型必须为自有类型。未携带任何标记的方法仅记录名称与可见性。
///
/// # 示例
///
/// ```rust
/// use solution_core::SolutionContainer;
/// use solution_macros::solution_container;
///
/// pub struct Checker;
///
/// #[solution_container]
/// impl Checker {
///     pub fn verify(&self, #[result] expected: i32) {
///         let _ = expected;
///     }
/// }
///
/// let table = Checker.solution_methods();
/// assert!(table[0].parameters[0].result_marker);
/// ```
#[proc_macro_attribute]
pub fn solution_container(args: TokenStream, input: TokenStream) -> TokenStream {
    container::solution_container_impl(args, input)
}
