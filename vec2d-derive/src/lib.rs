use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use syn::{
    parse_macro_input, parse_quote, spanned::Spanned, Data, DeriveInput, Error, Fields, Generics,
    Result, Type,
};

/// Implements `vec2d::Vector2` for a struct with named numeric fields `x` and `y`, and bridges it
/// to `vec2d::Vec2<N>` for every scalar `N`:
///
/// - `From<Self> for Vec2<N>` and `From<Vec2<N>> for Self`,
/// - `PartialEq<Vec2<N>> for Self` (the right-hand side is coerced to the field type).
///
/// Any fields besides `x` and `y` are filled with `Default::default()` when the struct is built
/// from components.
#[proc_macro_derive(Vector2)]
pub fn derive_vector2(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_vector2(&input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

struct Components {
    scalar: Type,
    others: Vec<Ident>,
}

fn find_components(input: &DeriveInput) -> Result<Components> {
    let Data::Struct(data_struct) = &input.data else {
        return Err(Error::new(
            input.span(),
            "#[derive(Vector2)] is only supported on structs",
        ));
    };
    let Fields::Named(fields_named) = &data_struct.fields else {
        return Err(Error::new(
            input.span(),
            "#[derive(Vector2)] needs named fields `x` and `y`",
        ));
    };

    let mut x_ty = None;
    let mut y_ty = None;
    let mut others = Vec::new();
    for field in &fields_named.named {
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        match ident.to_string().as_str() {
            "x" => x_ty = Some(field.ty.clone()),
            "y" => y_ty = Some(field.ty.clone()),
            _ => others.push(ident),
        }
    }
    let (Some(x_ty), Some(y_ty)) = (x_ty, y_ty) else {
        return Err(Error::new(
            input.ident.span(),
            "#[derive(Vector2)] needs named fields `x` and `y`",
        ));
    };
    if quote!(#x_ty).to_string() != quote!(#y_ty).to_string() {
        return Err(Error::new(
            y_ty.span(),
            "fields `x` and `y` must have the same type",
        ));
    }
    Ok(Components {
        scalar: x_ty,
        others,
    })
}

fn with_scalar_param(generics: &Generics, param: &Ident, scalar: &Type) -> Generics {
    let mut generics = generics.clone();
    generics
        .params
        .push(parse_quote!(#param: ::vec2d::Scalar));
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(#scalar: ::vec2d::num_traits::AsPrimitive<#param>));
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(#param: ::vec2d::num_traits::AsPrimitive<#scalar>));
    generics
}

fn expand_vector2(input: &DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let Components { scalar, others } = find_components(input)?;

    let mut generics = input.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(#scalar: ::vec2d::Scalar));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let param = Ident::new("__Vec2dScalar", Span::call_site());
    let bridge_generics = with_scalar_param(&generics, &param, &scalar);
    let (bridge_impl_generics, _, bridge_where_clause) = bridge_generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::vec2d::Vector2 for #name #ty_generics #where_clause {
            type Scalar = #scalar;

            fn x(&self) -> #scalar {
                self.x
            }
            fn y(&self) -> #scalar {
                self.y
            }
            fn from_xy(x: #scalar, y: #scalar) -> Self {
                Self {
                    x,
                    y,
                    #(#others: ::core::default::Default::default(),)*
                }
            }
        }

        impl #bridge_impl_generics ::core::convert::From<#name #ty_generics>
            for ::vec2d::Vec2<#param> #bridge_where_clause
        {
            fn from(value: #name #ty_generics) -> Self {
                ::vec2d::Vec2::from_vector(value)
            }
        }

        impl #bridge_impl_generics ::core::convert::From<::vec2d::Vec2<#param>>
            for #name #ty_generics #bridge_where_clause
        {
            fn from(value: ::vec2d::Vec2<#param>) -> Self {
                value.into_vector()
            }
        }

        impl #bridge_impl_generics ::core::cmp::PartialEq<::vec2d::Vec2<#param>>
            for #name #ty_generics #bridge_where_clause
        {
            fn eq(&self, other: &::vec2d::Vec2<#param>) -> bool {
                let other: #name #ty_generics = other.into_vector();
                self.x == other.x && self.y == other.y
            }
        }
    })
}
