//! 解答容器宏实现
//!
//! 把带角色标记的固有 impl 块展开为描述符表与类型擦除的调用函数。

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, FnArg, ImplItem, ImplItemFn, ItemImpl, ReturnType, Type};

use crate::utils;

/// 单个方法的展开产物
struct MethodExpansion {
    /// 描述符构造表达式
    descriptor: proc_macro2::TokenStream,
    /// 调用函数定义，未标记的方法没有
    invoker: Option<proc_macro2::TokenStream>,
}

/// 实现 `#[solution_container]` 宏
pub fn solution_container_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    if !args.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[solution_container] 不接受参数",
        )
        .to_compile_error()
        .into();
    }

    let mut item_impl = parse_macro_input!(input as ItemImpl);

    if let Some((_, trait_path, _)) = &item_impl.trait_ {
        return syn::Error::new_spanned(
            trait_path,
            "#[solution_container] 只能应用于固有 impl 块",
        )
        .to_compile_error()
        .into();
    }
    if !item_impl.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &item_impl.generics,
            "#[solution_container] 不支持泛型容器",
        )
        .to_compile_error()
        .into();
    }

    let self_ty = (*item_impl.self_ty).clone();
    let container_name = match &self_ty {
        Type::Path(type_path) => match type_path.path.segments.last() {
            Some(segment) => segment.ident.to_string(),
            None => {
                return syn::Error::new_spanned(&self_ty, "容器类型必须为具名类型")
                    .to_compile_error()
                    .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(&self_ty, "容器类型必须为具名类型")
                .to_compile_error()
                .into();
        }
    };

    let mut descriptors = Vec::new();
    let mut invokers = Vec::new();

    for item in &mut item_impl.items {
        if let ImplItem::Fn(method) = item {
            match expand_method(&self_ty, &container_name, method) {
                Ok(expansion) => {
                    descriptors.push(expansion.descriptor);
                    if let Some(invoker) = expansion.invoker {
                        invokers.push(invoker);
                    }
                }
                Err(error) => return error.to_compile_error().into(),
            }
        }
    }

    let expanded = quote! {
        #item_impl

        #(#invokers)*

        impl solution_core::SolutionContainer for #self_ty {
            fn solution_methods(&self) -> ::std::vec::Vec<solution_core::MethodDescriptor> {
                ::std::vec![ #(#descriptors),* ]
            }
        }
    };

    TokenStream::from(expanded)
}

/// 展开单个方法
///
/// 扫描并移除角色标记；携带标记的方法产生完整签名描述与调用函数，
/// 未标记的方法仅记录名称与可见性。
fn expand_method(
    self_ty: &Type,
    container_name: &str,
    method: &mut ImplItemFn,
) -> syn::Result<MethodExpansion> {
    let has_solution_marker = utils::strip_marker_attr(&mut method.attrs, "solution");

    let mut parameters: Vec<(Type, bool)> = Vec::new();
    let mut has_shared_ref_receiver = false;

    for input in method.sig.inputs.iter_mut() {
        match input {
            FnArg::Receiver(receiver) => {
                has_shared_ref_receiver =
                    receiver.reference.is_some() && receiver.mutability.is_none();
            }
            FnArg::Typed(pat_type) => {
                let marked = utils::strip_marker_attr(&mut pat_type.attrs, "result");
                parameters.push(((*pat_type.ty).clone(), marked));
            }
        }
    }

    let method_name = method.sig.ident.to_string();
    let visibility = utils::map_visibility(&method.vis);
    let has_result_marker = parameters.iter().any(|(_, marked)| *marked);

    if !has_solution_marker && !has_result_marker {
        let descriptor = quote! {
            solution_core::MethodDescriptor {
                name: #method_name.to_string(),
                visibility: #visibility,
                return_type: ::std::option::Option::None,
                parameters: ::std::vec::Vec::new(),
                solution_marker: false,
                invoke: solution_core::unbound_invoker,
            }
        };
        return Ok(MethodExpansion {
            descriptor,
            invoker: None,
        });
    }

    if !has_shared_ref_receiver {
        return Err(syn::Error::new_spanned(
            &method.sig,
            "携带标记的方法必须以 &self 为接收者",
        ));
    }
    for (ty, _) in &parameters {
        if utils::is_reference_type(ty) {
            return Err(syn::Error::new_spanned(
                ty,
                "携带标记的方法参数必须为自有类型",
            ));
        }
    }

    let returns_void = utils::is_unit_return(&method.sig.output);
    let return_type = match &method.sig.output {
        ReturnType::Type(_, ty) if !returns_void => {
            quote! { ::std::option::Option::Some(solution_core::TypeInfo::of::<#ty>()) }
        }
        _ => quote! { ::std::option::Option::None },
    };

    let parameter_descriptors = parameters.iter().enumerate().map(|(position, (ty, marked))| {
        quote! {
            solution_core::ParameterDescriptor {
                position: #position,
                type_info: solution_core::TypeInfo::of::<#ty>(),
                result_marker: #marked,
            }
        }
    });

    let invoker_name = utils::invoker_ident(container_name, &method_name);
    let invoker = generate_invoker(self_ty, method, &invoker_name, &parameters, returns_void);

    let descriptor = quote! {
        solution_core::MethodDescriptor {
            name: #method_name.to_string(),
            visibility: #visibility,
            return_type: #return_type,
            parameters: ::std::vec![ #(#parameter_descriptors),* ],
            solution_marker: #has_solution_marker,
            invoke: #invoker_name,
        }
    };

    Ok(MethodExpansion {
        descriptor,
        invoker: Some(invoker),
    })
}

/// 生成类型擦除的调用函数
///
/// 函数把容器实例与装箱实参还原为具体类型后转调原方法；
/// 无返回值的方法产生 `Ok(None)`。
fn generate_invoker(
    self_ty: &Type,
    method: &ImplItemFn,
    invoker_name: &syn::Ident,
    parameters: &[(Type, bool)],
    returns_void: bool,
) -> proc_macro2::TokenStream {
    let method_ident = &method.sig.ident;
    let arity = parameters.len();

    let bindings = parameters.iter().enumerate().map(|(index, (ty, _))| {
        let binding = format_ident!("arg_{}", index);
        quote! {
            let #binding = match args.next() {
                ::std::option::Option::Some(value) => match value.downcast::<#ty>() {
                    ::std::result::Result::Ok(value) => value,
                    ::std::result::Result::Err(_) => {
                        return ::std::result::Result::Err(::std::convert::From::from(
                            ::std::format!("参数 {} 类型不匹配", #index),
                        ));
                    }
                },
                ::std::option::Option::None => {
                    return ::std::result::Result::Err(::std::convert::From::from(
                        ::std::format!("参数 {} 缺失", #index),
                    ));
                }
            };
        }
    });

    let binding_names: Vec<_> = (0..arity).map(|index| format_ident!("arg_{}", index)).collect();

    let call = if returns_void {
        quote! {
            instance.#method_ident(#(*#binding_names),*);
            ::std::result::Result::Ok(::std::option::Option::None)
        }
    } else {
        quote! {
            let result = instance.#method_ident(#(*#binding_names),*);
            ::std::result::Result::Ok(::std::option::Option::Some(
                ::std::boxed::Box::new(result),
            ))
        }
    };

    quote! {
        #[doc(hidden)]
        #[allow(unused_mut, unused_variables)]
        fn #invoker_name(
            instance: &dyn ::std::any::Any,
            args: ::std::vec::Vec<::std::boxed::Box<dyn ::std::any::Any>>,
        ) -> ::std::result::Result<
            ::std::option::Option<::std::boxed::Box<dyn ::std::any::Any>>,
            ::std::boxed::Box<dyn ::std::error::Error + ::core::marker::Send + ::core::marker::Sync>,
        > {
            let instance = match instance.downcast_ref::<#self_ty>() {
                ::std::option::Option::Some(instance) => instance,
                ::std::option::Option::None => {
                    return ::std::result::Result::Err(::std::convert::From::from(
                        "容器实例类型不匹配",
                    ));
                }
            };
            if args.len() != #arity {
                return ::std::result::Result::Err(::std::convert::From::from(
                    ::std::format!("参数数量不匹配: 期望 {}, 实际 {}", #arity, args.len()),
                ));
            }
            let mut args = args.into_iter();
            #(#bindings)*
            #call
        }
    }
}
