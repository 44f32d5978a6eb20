use proc_macro::TokenStream;

mod entity;

///
/// Derive `EntityFields` for a named-field entity struct.
///
/// Every field becomes a mapped column unless marked `#[field(unmapped)]`.
/// The map key is the field identifier verbatim; dispatch goes through the
/// struct's own accessor pair, named by a fixed transform (getter = the
/// identifier, setter = `set_` + the identifier), so a declared field
/// without its accessor pair fails to compile.
///
/// Struct-level options:
/// - `#[entity(name = "...")]` overrides the registered entity name.
/// - `#[entity(capabilities(f, g))]` lists contribution functions (e.g.
///   `tutti::capability::timestamps`) joined into the field table.
///
#[proc_macro_derive(EntityFields, attributes(entity, field))]
pub fn derive_entity_fields(input: TokenStream) -> TokenStream {
    entity::derive_entity_fields(input.into()).into()
}
