//! A small beer-catalog API declared code-first and bound into a schema.
//!
//! Run with `cargo run --example beer_catalog`; prints the bound schema as
//! JSON.

use appsync_code_first::{
    schema::{AppsyncFunction, Code, DataSource},
    BindOptions, Declare, DeclarationRef, DirectiveDescriptor, FieldDescriptor, FieldValue, ResolverDescriptor,
    ResolverRef, Scalar, SchemaBinder, TypeDescriptor, TypeRef,
};

struct Color;

impl Declare for Color {
    fn declare() -> TypeDescriptor {
        TypeDescriptor::r#enum::<Color>()
            .value("PALE")
            .value("AMBER")
            .value("BROWN")
            .value("DARK")
    }
}

struct Origin;

impl Declare for Origin {
    fn declare() -> TypeDescriptor {
        TypeDescriptor::object::<Origin>()
            .field(FieldDescriptor::new("country", Scalar::String).required())
            .field(FieldDescriptor::new("region", Scalar::String))
    }
}

struct Measures;

impl Declare for Measures {
    fn declare() -> TypeDescriptor {
        TypeDescriptor::object::<Measures>()
            .field(FieldDescriptor::new("abv", Scalar::Float))
            .field(FieldDescriptor::new("ibu", Scalar::Int))
    }
}

struct Beer;

impl Declare for Beer {
    fn declare() -> TypeDescriptor {
        TypeDescriptor::object::<Beer>()
            .directive(DirectiveDescriptor::api_key())
            .field(FieldDescriptor::new("sku", Scalar::Id).required())
            .field(FieldDescriptor::new("name", Scalar::String).required())
            .field(FieldDescriptor::new("description", Scalar::String))
            .field(FieldDescriptor::new("active", Scalar::Boolean))
            .field(FieldDescriptor::new("rating", Scalar::Int))
            .field(FieldDescriptor::new("color", TypeRef::of::<Color>()))
            .field(FieldDescriptor::new("origin", TypeRef::of::<Origin>()))
            .field(FieldDescriptor::new("measures", TypeRef::of::<Measures>()))
            .field(FieldDescriptor::new("features", FieldValue::list_of(Scalar::String)))
            .field(FieldDescriptor::new("notes", FieldValue::list_of(Scalar::String)).required_list())
    }
}

struct BeerFilters;

impl Declare for BeerFilters {
    fn declare() -> TypeDescriptor {
        TypeDescriptor::input::<BeerFilters>()
            .field(FieldDescriptor::new("country", Scalar::String))
            .field(FieldDescriptor::new("minRating", Scalar::Int))
    }
}

fn beer_resolver() -> ResolverDescriptor {
    ResolverDescriptor::js(
        "BeerResolver",
        Code::from_inline(
            r#"
export function request(ctx) {
    return { operation: 'GetItem', key: { sku: ctx.args.sku } };
}
export function response(ctx) {
    return ctx.result;
}
"#,
        ),
    )
    .data_source("BeerTable")
}

fn beers_resolver() -> ResolverDescriptor {
    ResolverDescriptor::js("BeersResolver", Code::from_inline("export function request(ctx) { return {}; }"))
        .data_source("BeerTable")
        .max_batch_size(25)
}

struct Query;

impl Declare for Query {
    fn declare() -> TypeDescriptor {
        TypeDescriptor::object::<Query>()
            .field(
                FieldDescriptor::new("beer", TypeRef::of::<Beer>())
                    .resolve_with(ResolverRef::of(beer_resolver))
                    .cache(60, ["sku"]),
            )
            .field(
                FieldDescriptor::new("beers", TypeRef::of::<Beer>())
                    .required_list()
                    .args::<BeerFilters>()
                    .resolve_with(ResolverRef::of(beers_resolver)),
            )
    }
}

struct Mutation;

impl Declare for Mutation {
    fn declare() -> TypeDescriptor {
        TypeDescriptor::object::<Mutation>().field(
            FieldDescriptor::new("addBeer", TypeRef::of::<Beer>())
                .directive(DirectiveDescriptor::cognito(["brewers"]))
                .resolve_through(ResolverRef::of(beer_resolver), ["ValidateBeer", "StoreBeer"]),
        )
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = BindOptions::new()
        .with_data_source("BeerTable", DataSource::new("BeerTable"))
        .with_function("ValidateBeer", AppsyncFunction::new("ValidateBeer"))
        .with_function("StoreBeer", AppsyncFunction::new("StoreBeer"));

    let mut binder = SchemaBinder::new();
    binder.add_query(DeclarationRef::of::<Query>());
    binder.add_mutation(DeclarationRef::of::<Mutation>());
    binder.bind_schema(&options)?;

    println!("{}", serde_json::to_string_pretty(binder.schema())?);

    Ok(())
}
