//! Procedural macros used by and exported from the `nuple` crate.
//!
//! The interesting one is [`Tuple!`](Tuple), the layout selector: it maps a written
//! element-type sequence onto exactly one of `nuple`'s storage representations. The other
//! two are bulk code generators invoked once from within `nuple` itself to produce the
//! per-arity trait implementations that Rust cannot express generically.

extern crate proc_macro;

use {
    proc_macro::TokenStream,
    proc_macro2::TokenStream as TokenStream2,
    quote::{format_ident, quote, ToTokens},
    syn::{
        parse_macro_input, punctuated::Punctuated, Ident, Index, LitInt, Token, Type,
    },
};

/// The maximum arity handled by the explicit-small layouts (`Flat1` through `Flat6`).
const FLAT_MAX: usize = 6;

/// The maximum arity with generated packed-storage impls; must match the argument of the
/// `impl_tuples!` invocation in `nuple::list`.
const PACKED_MAX: usize = 32;

struct TypeList(Punctuated<Type, Token![,]>);

impl syn::parse::Parse for TypeList {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        Ok(TypeList(Punctuated::parse_terminated(input)?))
    }
}

/// Select the storage layout for a sequence of element types, producing the corresponding
/// concrete `nuple::Tuple<_>` type.
///
/// Selection is deterministic, decided entirely by the written type sequence, in this
/// order of precedence:
///
/// 1. **Zero types** select the empty storage.
/// 2. **Two or more identically-written, non-reference types** select the packed
///    homogeneous storage (one array field). This rule deliberately outranks rule 3, so
///    that small homogeneous sequences also get the layout with the smallest generated
///    type footprint.
/// 3. **One to six non-reference types** select an explicit flat storage with one named
///    field per element.
/// 4. **Anything else** (any reference type, or more than six heterogeneous types)
///    selects the generic recursive storage, which handles every element sequence.
///
/// Whichever layout is selected, the resulting tuple behaves identically under every
/// operation; the layout only affects generated symbols and debug shape.
///
/// # Examples
///
/// ```
/// use nuple::prelude::*;
/// use nuple::storage::{Cons, Empty, Flat2, Packed};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Tuple![], nuple::Tuple<Empty>);
/// assert_type_eq_all!(Tuple![i32, i32, i32], nuple::Tuple<Packed<i32, 3>>);
/// assert_type_eq_all!(Tuple![i32, f64], nuple::Tuple<Flat2<i32, f64>>);
/// assert_type_eq_all!(
///     Tuple![i32, &'static str],
///     nuple::Tuple<Cons<i32, Cons<&'static str, Empty>>>,
/// );
/// ```
#[allow(non_snake_case)]
#[proc_macro]
pub fn Tuple(input: TokenStream) -> TokenStream {
    let TypeList(types) = parse_macro_input!(input as TypeList);
    let types: Vec<Type> = types.into_iter().collect();
    let storage = select_storage(&types);
    quote!(::nuple::Tuple<#storage>).into()
}

fn select_storage(types: &[Type]) -> TokenStream2 {
    let arity = types.len();
    let any_reference = types.iter().any(|t| matches!(t, Type::Reference(_)));
    let homogeneous = arity >= 2 && {
        let first = types[0].to_token_stream().to_string();
        types[1..]
            .iter()
            .all(|t| t.to_token_stream().to_string() == first)
    };

    if arity == 0 {
        quote!(::nuple::storage::Empty)
    } else if homogeneous && !any_reference && arity <= PACKED_MAX {
        let elem = &types[0];
        quote!(::nuple::storage::Packed<#elem, #arity>)
    } else if arity <= FLAT_MAX && !any_reference {
        let name = format_ident!("Flat{}", arity);
        quote!(::nuple::storage::#name<#(#types),*>)
    } else {
        types.iter().rev().fold(
            quote!(::nuple::storage::Empty),
            |tail, head| quote!(::nuple::storage::Cons<#head, #tail>),
        )
    }
}

/// Generate the per-arity trait implementations backing `nuple`'s flat-tuple surface, up
/// to and including the given arity: conversions between flat tuples and inductive
/// element lists, packed-storage access, callable unpacking, and comparisons against
/// native tuples. Invoked exactly once, from `nuple::list`.
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    let max: usize = match max.base10_parse() {
        Ok(max) => max,
        Err(e) => return e.to_compile_error().into(),
    };

    let mut out = TokenStream2::new();
    for arity in 0..=max {
        out.extend(impl_flat_conversions(arity));
        out.extend(impl_flat_call(arity));
        out.extend(impl_native_comparisons(arity));
        if arity >= 2 {
            out.extend(impl_packed(arity));
        }
    }
    out.into()
}

/// Generate the conversions between `Number<N>` constants and unary type-level numbers,
/// for every `N` up to and including the given one. Invoked exactly once, from
/// `nuple::unary`.
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    let max: usize = match max.base10_parse() {
        Ok(max) => max,
        Err(e) => return e.to_compile_error().into(),
    };

    let mut out = TokenStream2::new();
    for n in 0..=max {
        let unary = unary_type(n);
        out.extend(quote! {
            impl ::nuple::unary::ToUnary for ::nuple::unary::Number<#n> {
                type AsUnary = #unary;
            }

            impl ::nuple::unary::ToConstant for #unary {
                type AsConstant = ::nuple::unary::Number<#n>;
            }
        });
    }
    out.into()
}

fn unary_type(n: usize) -> TokenStream2 {
    let mut ty = quote!(::nuple::unary::Z);
    for _ in 0..n {
        ty = quote!(::nuple::unary::S<#ty>);
    }
    ty
}

fn type_params(arity: usize) -> Vec<Ident> {
    (0..arity).map(|i| format_ident!("T{}", i)).collect()
}

fn element_bindings(arity: usize) -> Vec<Ident> {
    (0..arity).map(|i| format_ident!("e{}", i)).collect()
}

fn cons_type(elements: &[TokenStream2]) -> TokenStream2 {
    elements.iter().rev().fold(
        quote!(::nuple::storage::Empty),
        |tail, head| quote!(::nuple::storage::Cons<#head, #tail>),
    )
}

fn cons_expr(elements: &[TokenStream2]) -> TokenStream2 {
    elements.iter().rev().fold(
        quote!(::nuple::storage::Empty),
        |tail, head| quote!(::nuple::storage::Cons { head: #head, tail: #tail }),
    )
}

/// Statements destructuring an inductive list bound to `list` into `e0 .. e{arity-1}`.
fn uncons_stmts(arity: usize) -> TokenStream2 {
    let elements = element_bindings(arity);
    quote! {
        #(let ::nuple::storage::Cons { head: #elements, tail: list } = list;)*
        let ::nuple::storage::Empty = list;
    }
}

fn impl_flat_conversions(arity: usize) -> TokenStream2 {
    let params = type_params(arity);
    let elements = element_bindings(arity);
    let param_tokens: Vec<TokenStream2> =
        params.iter().map(|p| p.to_token_stream()).collect();
    let element_tokens: Vec<TokenStream2> =
        elements.iter().map(|e| e.to_token_stream()).collect();
    let list = cons_type(&param_tokens);
    let build = cons_expr(&element_tokens);
    let uncons = uncons_stmts(arity);

    quote! {
        impl<#(#params),*> ::nuple::list::IntoList for (#(#params,)*) {
            type AsList = #list;

            fn into_list(self) -> Self::AsList {
                let (#(#elements,)*) = self;
                #build
            }
        }

        impl<#(#params),*> ::nuple::list::ListToTuple for #list {
            type AsTuple = (#(#params,)*);

            fn into_tuple(self) -> Self::AsTuple {
                let list = self;
                #uncons
                (#(#elements,)*)
            }
        }

        impl<#(#params),*> ::core::convert::From<(#(#params,)*)> for ::nuple::Tuple<#list> {
            fn from(elements: (#(#params,)*)) -> Self {
                ::nuple::make_tuple(elements)
            }
        }
    }
}

fn impl_flat_call(arity: usize) -> TokenStream2 {
    let params = type_params(arity);
    let elements = element_bindings(arity);

    quote! {
        impl<F, R, #(#params),*> ::nuple::traverse::FlatCall<(#(#params,)*)> for F
        where
            F: FnOnce(#(#params),*) -> R,
        {
            type Output = R;

            fn call_flat(self, args: (#(#params,)*)) -> R {
                let (#(#elements,)*) = args;
                self(#(#elements),*)
            }
        }
    }
}

fn impl_packed(arity: usize) -> TokenStream2 {
    let elements = element_bindings(arity);
    let element_tokens: Vec<TokenStream2> =
        elements.iter().map(|e| e.to_token_stream()).collect();
    let length = unary_type(arity);
    let list = cons_type(&vec![quote!(T); arity]);
    let ref_list = cons_type(&vec![quote!(&'a T); arity]);
    let mut_list = cons_type(&vec![quote!(&'a mut T); arity]);
    let build = cons_expr(&element_tokens);
    let uncons = uncons_stmts(arity);

    let mut out = quote! {
        impl<T> ::nuple::storage::Storage for ::nuple::storage::Packed<T, #arity> {
            type Length = #length;
            type List = #list;

            fn from_list(list: Self::List) -> Self {
                #uncons
                ::nuple::storage::Packed { elements: [#(#elements),*] }
            }

            fn into_list(self) -> Self::List {
                let [#(#elements),*] = self.elements;
                #build
            }
        }

        impl<'a, T: 'a> ::nuple::storage::IntoRefList for &'a ::nuple::storage::Packed<T, #arity> {
            type RefList = #ref_list;

            fn ref_list(self) -> Self::RefList {
                let [#(#elements),*] = &self.elements;
                #build
            }
        }

        impl<'a, T: 'a> ::nuple::storage::IntoMutList for &'a mut ::nuple::storage::Packed<T, #arity> {
            type MutList = #mut_list;

            fn mut_list(self) -> Self::MutList {
                let [#(#elements),*] = &mut self.elements;
                #build
            }
        }
    };

    // Direct slot selection: every index gets its own impl, so access at any position is
    // a single array offset with no recursion.
    for index in 0..arity {
        let unary = unary_type(index);
        let before = vec![quote!(_); index];
        let after = vec![quote!(_); arity - index - 1];
        out.extend(quote! {
            impl<T> ::nuple::access::At<#unary> for ::nuple::storage::Packed<T, #arity> {
                type Element = T;

                fn at(&self) -> &T {
                    &self.elements[#index]
                }

                fn at_mut(&mut self) -> &mut T {
                    &mut self.elements[#index]
                }

                fn into_at(self) -> T {
                    let [#(#before,)* element, #(#after),*] = self.elements;
                    element
                }
            }
        });
    }

    out
}

// Comparisons against native tuples require the storage's arity to match the native
// tuple's exactly, then compare positionally through `At`. The lexicographic fold is
// unrolled, with each per-position comparison done by that pair's own `<`.
fn impl_native_comparisons(arity: usize) -> TokenStream2 {
    let params = type_params(arity);
    let indices: Vec<Index> = (0..arity).map(Index::from).collect();
    let unaries: Vec<TokenStream2> = (0..arity).map(unary_type).collect();
    let length = unary_type(arity);

    // Unused in the zero-arity impls, where every comparison is constant.
    let other = if arity == 0 {
        quote!(_other)
    } else {
        quote!(other)
    };

    let at_bounds: Vec<TokenStream2> = unaries
        .iter()
        .map(|u| quote!(S: ::nuple::access::At<#u>))
        .collect();
    let eq_bounds: Vec<TokenStream2> = unaries
        .iter()
        .zip(&params)
        .map(|(u, p)| {
            quote!(<S as ::nuple::access::At<#u>>::Element: ::core::cmp::PartialEq<#p>)
        })
        .collect();
    let ord_bounds: Vec<TokenStream2> = unaries
        .iter()
        .zip(&params)
        .flat_map(|(u, p)| {
            vec![
                quote!(<S as ::nuple::access::At<#u>>::Element: ::core::cmp::PartialOrd<#p>),
                quote!(#p: ::core::cmp::PartialOrd<<S as ::nuple::access::At<#u>>::Element>),
            ]
        })
        .collect();

    let eq_body = unaries.iter().zip(&indices).fold(quote!(true), |acc, (u, i)| {
        quote!(#acc && <S as ::nuple::access::At<#u>>::at(self.storage()) == &#other.#i)
    });

    // res(0) = e0 < f0; res(i) = res(i-1) || (e_i < f_i && !(f_{i-1} < e_{i-1})).
    // `tuple_first` picks which side plays e.
    let fold = |tuple_first: bool| -> TokenStream2 {
        if arity == 0 {
            return quote!(false);
        }
        let mut stmts = TokenStream2::new();
        for k in 0..arity {
            let u = &unaries[k];
            let i = &indices[k];
            let e = quote!(*<S as ::nuple::access::At<#u>>::at(self.storage()));
            let f = quote!(#other.#i);
            let (lt_expr, gt_expr) = if tuple_first {
                (quote!(#e < #f), quote!(#f < #e))
            } else {
                (quote!(#f < #e), quote!(#e < #f))
            };
            let lt_k = format_ident!("lt{}", k);
            stmts.extend(quote!(let #lt_k = #lt_expr;));
            if k + 1 < arity {
                let gt_k = format_ident!("gt{}", k);
                stmts.extend(quote!(let #gt_k = #gt_expr;));
            }
        }
        let first = format_ident!("lt{}", 0usize);
        let mut res = quote!(#first);
        for k in 1..arity {
            let lt_k = format_ident!("lt{}", k);
            let gt_prev = format_ident!("gt{}", k - 1);
            res = quote!(#res || (#lt_k && !#gt_prev));
        }
        quote!({ #stmts #res })
    };
    let lt_fold = fold(true);
    let gt_fold = fold(false);

    quote! {
        impl<S, #(#params),*> ::core::cmp::PartialEq<(#(#params,)*)> for ::nuple::Tuple<S>
        where
            S: ::nuple::storage::Storage<Length = #length>,
            #(#at_bounds,)*
            #(#eq_bounds,)*
        {
            fn eq(&self, #other: &(#(#params,)*)) -> bool {
                #eq_body
            }
        }

        impl<S, #(#params),*> ::core::cmp::PartialOrd<(#(#params,)*)> for ::nuple::Tuple<S>
        where
            S: ::nuple::storage::Storage<Length = #length>,
            #(#at_bounds,)*
            #(#eq_bounds,)*
            #(#ord_bounds,)*
        {
            fn partial_cmp(&self, #other: &(#(#params,)*)) -> Option<::core::cmp::Ordering> {
                let lt = #lt_fold;
                let gt = #gt_fold;
                if lt {
                    Some(::core::cmp::Ordering::Less)
                } else if gt {
                    Some(::core::cmp::Ordering::Greater)
                } else if #eq_body {
                    Some(::core::cmp::Ordering::Equal)
                } else {
                    None
                }
            }

            fn lt(&self, #other: &(#(#params,)*)) -> bool {
                #lt_fold
            }

            fn le(&self, #other: &(#(#params,)*)) -> bool {
                !(#gt_fold)
            }

            fn gt(&self, #other: &(#(#params,)*)) -> bool {
                #gt_fold
            }

            fn ge(&self, #other: &(#(#params,)*)) -> bool {
                !(#lt_fold)
            }
        }
    }
}
