use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Error, Fields, LitStr, Path};

// derive_entity_fields
pub fn derive_entity_fields(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = if let Data::Struct(data) = &input.data {
        if let Fields::Named(named) = &data.fields {
            &named.named
        } else {
            let err = Error::new_spanned(
                &data.fields,
                "EntityFields can only be derived for structs with named fields",
            );
            return err.to_compile_error();
        }
    } else {
        let err = Error::new_spanned(
            &input.ident,
            "EntityFields can only be derived for structs with named fields",
        );
        return err.to_compile_error();
    };

    let mut entity_name = ident.to_string();
    let mut capabilities: Vec<Path> = Vec::new();

    for attr in &input.attrs {
        if !attr.path().is_ident("entity") {
            continue;
        }

        let parsed = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                entity_name = lit.value();
                Ok(())
            } else if meta.path.is_ident("capabilities") {
                meta.parse_nested_meta(|cap| {
                    capabilities.push(cap.path.clone());
                    Ok(())
                })
            } else {
                Err(meta.error("unsupported entity attribute"))
            }
        });

        if let Err(err) = parsed {
            return err.to_compile_error();
        }
    }

    let mut descriptor_exprs = Vec::new();
    let mut accessor_exprs = Vec::new();

    for field in fields {
        let field_ident = field.ident.as_ref().expect("named field");
        let field_name = field_ident.to_string();

        let mut unmapped = false;
        for attr in &field.attrs {
            if !attr.path().is_ident("field") {
                continue;
            }

            let parsed = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("unmapped") {
                    unmapped = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported field attribute"))
                }
            });

            if let Err(err) = parsed {
                return err.to_compile_error();
            }
        }

        if unmapped {
            descriptor_exprs.push(quote! {
                ::tutti::model::FieldDescriptor::internal(#field_name)
            });
            continue;
        }

        descriptor_exprs.push(quote! {
            ::tutti::model::FieldDescriptor::column(#field_name)
        });

        let getter = field_ident.clone();
        let setter = format_ident!("set_{}", field_ident);

        accessor_exprs.push(quote! {
            ::tutti::model::FieldAccessor::new(
                #field_name,
                |entity: &Self| ::tutti::traits::FieldValue::to_value(&entity.#getter()),
                |entity: &mut Self, value: ::tutti::value::Value| {
                    match ::tutti::traits::FieldValue::from_value(&value) {
                        Some(converted) => {
                            entity.#setter(converted);
                            Ok(())
                        }
                        None => Err(::tutti::model::ShapeMismatch::new(value.variant_name())),
                    }
                },
            )
        });
    }

    let capability_impl = if capabilities.is_empty() {
        quote! {}
    } else {
        quote! {
            fn capability_fields() -> Vec<::tutti::model::FieldGroup<Self>> {
                vec![ #( #capabilities::<Self>() ),* ]
            }
        }
    };

    quote! {
        impl #impl_generics ::tutti::traits::EntityFields for #ident #ty_generics #where_clause {
            const ENTITY_NAME: &'static str = #entity_name;

            fn field_descriptors() -> Vec<::tutti::model::FieldDescriptor> {
                vec![ #( #descriptor_exprs ),* ]
            }

            fn mapped_fields() -> Vec<::tutti::model::FieldAccessor<Self>> {
                vec![ #( #accessor_exprs ),* ]
            }

            #capability_impl
        }
    }
}
