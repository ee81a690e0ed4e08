extern crate proc_macro;
use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, parse_macro_input};

/// Derives `FromJson` for a named-field struct: the value must be an object,
/// and each field is looked up by name and decoded with its own `FromJson`
/// impl. When a key appears more than once the first occurrence wins. The
/// expansion refers to `FromJson`, `DecodeErr`, and `Value` unqualified, so
/// those need to be in scope at the derive site.
#[proc_macro_derive(FromJson)]
pub fn derive_from_json(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    // TODO: support enums
    let schema = if let Data::Struct(data) = &input.data {
        data
    } else {
        return Error::new_spanned(&input, "FromJson can only be derived for structs")
            .to_compile_error()
            .into();
    };

    let fields = if let Fields::Named(data) = &schema.fields {
        data
    } else {
        return Error::new_spanned(
            &input,
            "FromJson can only be derived for named field structs",
        )
        .to_compile_error()
        .into();
    };

    let struct_name = input.ident;

    let field_inits = fields.named.iter().map(|f| {
        let field_name = f.ident.as_ref().unwrap();
        let field_type = &f.ty;

        quote! {
            #field_name: match props.iter().find(|prop| prop.key == stringify!(#field_name)) {
                Some(prop) => <#field_type as FromJson>::from_json(&prop.val)?,
                None => <#field_type as FromJson>::from_missing(stringify!(#field_name))?,
            }
        }
    });

    let expanded = quote! {
        impl FromJson for #struct_name {
            fn from_json(value: &Value) -> Result<Self, DecodeErr> {
                let props = match value {
                    Value::Object(props) => props,
                    _ => {
                        return Err(DecodeErr::UnexpectedKind {
                            expected: "object",
                            found: value.kind_name(),
                        });
                    }
                };

                Ok(Self {
                    #( #field_inits, )*
                })
            }
        }
    };

    expanded.into()
}
