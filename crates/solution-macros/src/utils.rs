//! 宏工具函数

use proc_macro2::Span;
use syn::{Attribute, Ident, ReturnType, Type, Visibility};

/// 将 syn 可见性映射为 `MethodVisibility` 变体路径
pub fn map_visibility(visibility: &Visibility) -> proc_macro2::TokenStream {
    match visibility {
        Visibility::Public(_) => quote::quote! { solution_core::MethodVisibility::Public },
        Visibility::Restricted(restricted) => {
            if restricted.path.is_ident("crate") {
                quote::quote! { solution_core::MethodVisibility::Crate }
            } else if restricted.path.is_ident("self") {
                quote::quote! { solution_core::MethodVisibility::Private }
            } else {
                quote::quote! { solution_core::MethodVisibility::Module }
            }
        }
        Visibility::Inherited => quote::quote! { solution_core::MethodVisibility::Private },
    }
}

/// 检查返回类型是否为空
pub fn is_unit_return(return_type: &ReturnType) -> bool {
    match return_type {
        ReturnType::Default => true,
        ReturnType::Type(_, ty) => matches!(&**ty, Type::Tuple(tuple) if tuple.elems.is_empty()),
    }
}

/// 检查类型是否为引用类型
pub fn is_reference_type(ty: &Type) -> bool {
    matches!(ty, Type::Reference(_))
}

/// 移除指定名称的标记属性，返回是否存在
pub fn strip_marker_attr(attrs: &mut Vec<Attribute>, name: &str) -> bool {
    let before = attrs.len();
    attrs.retain(|attr| {
        !attr
            .path()
            .get_ident()
            .map(|ident| ident == name)
            .unwrap_or(false)
    });
    attrs.len() != before
}

/// 生成调用函数的唯一标识符
pub fn invoker_ident(container_name: &str, method_name: &str) -> Ident {
    let unique_name = format!(
        "__solution_invoke_{}_{}",
        to_snake_case(container_name),
        method_name
    );
    Ident::new(&unique_name, Span::call_site())
}

/// 将驼峰命名转换为蛇形命名
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() && i > 0 {
            let prev_is_lower = chars.get(i - 1).map_or(false, |c| c.is_lowercase());
            let next_is_lower = chars.get(i + 1).map_or(false, |c| c.is_lowercase());

            if prev_is_lower || next_is_lower {
                result.push('_');
            }
        }
        result.push(ch.to_lowercase().next().unwrap_or(ch));
    }

    result
}
