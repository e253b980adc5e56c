extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Turns an `Axes` storage type into a full vector.
///
/// Emits the `Vector` contract impl along with `Display`, exact
/// `PartialEq` against any other `Axes`, the operator-assign traits and
/// `Neg`. `Axes` and `Vector` must be in scope at the derive site.
#[proc_macro_derive(VectorType)]
pub fn vector_type_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    let name = &ast.ident;

    if !ast.generics.params.is_empty() {
        return syn::Error::new_spanned(&ast.generics, "VectorType cannot be derived for generic types")
            .to_compile_error()
            .into();
    }

    let expanded = quote! {
        impl Vector for #name {}

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::write!(f, "({}, {})", Axes::x(self), Axes::y(self))
            }
        }

        impl<V: Axes> ::core::cmp::PartialEq<V> for #name {
            fn eq(&self, other: &V) -> bool {
                Vector::equals(self, other)
            }
        }

        impl<'a, V: Axes> ::core::ops::AddAssign<&'a V> for #name {
            fn add_assign(&mut self, rhs: &'a V) {
                Vector::add(self, rhs);
            }
        }

        impl<'a, V: Axes> ::core::ops::SubAssign<&'a V> for #name {
            fn sub_assign(&mut self, rhs: &'a V) {
                Vector::subtract(self, rhs);
            }
        }

        impl ::core::ops::MulAssign<f64> for #name {
            fn mul_assign(&mut self, rhs: f64) {
                Vector::multiply_by_scalar(self, rhs);
            }
        }

        impl ::core::ops::DivAssign<f64> for #name {
            fn div_assign(&mut self, rhs: f64) {
                Vector::divide_by_scalar(self, rhs);
            }
        }

        impl ::core::ops::Neg for #name {
            type Output = Self;

            fn neg(mut self) -> Self::Output {
                Vector::reverse(&mut self);
                self
            }
        }
    };

    expanded.into()
}
