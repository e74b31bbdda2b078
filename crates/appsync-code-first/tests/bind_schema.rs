//! End-to-end binding tests over a small beer-catalog schema.

use appsync_code_first::{
    schema::{AppsyncFunction, Code, DataSource, Directive, MappingTemplate, Type},
    BindError, BindOptions, Declare, DeclarationRef, DirectiveDescriptor, DirectiveId, FieldDescriptor, FieldValue,
    ResolverDescriptor, ResolverRef, Scalar, SchemaBinder, TypeDescriptor, TypeRef,
};
use pretty_assertions::assert_eq;
use std::time::Duration;

struct Color;

impl Declare for Color {
    fn declare() -> TypeDescriptor {
        TypeDescriptor::r#enum::<Color>()
            .value("PALE")
            .value("AMBER")
            .value("DARK")
    }
}

struct Drink;

impl Declare for Drink {
    fn declare() -> TypeDescriptor {
        TypeDescriptor::interface::<Drink>()
            .field(FieldDescriptor::new("name", Scalar::String).required())
            .field(FieldDescriptor::new("abv", Scalar::Float))
    }
}

struct BeerFilter;

impl Declare for BeerFilter {
    fn declare() -> TypeDescriptor {
        TypeDescriptor::input::<BeerFilter>()
            .field(FieldDescriptor::new("brewery", Scalar::String))
            .field(FieldDescriptor::new("minRating", Scalar::Int))
    }
}

struct Suggestion;

impl Declare for Suggestion {
    fn declare() -> TypeDescriptor {
        TypeDescriptor::object::<Suggestion>()
            .field(FieldDescriptor::new("sku", Scalar::Id).required())
            .field(FieldDescriptor::new("reason", Scalar::String))
    }
}

struct Beer;

impl Declare for Beer {
    fn declare() -> TypeDescriptor {
        TypeDescriptor::object::<Beer>()
            .implements::<Drink>()
            .field(FieldDescriptor::new("name", Scalar::String).required())
            .field(FieldDescriptor::new("abv", Scalar::Float))
            .field(FieldDescriptor::new("notes", FieldValue::list_of(Scalar::String)).required_list())
            .field(
                FieldDescriptor::new("suggestions", TypeRef::of::<Suggestion>())
                    .list()
                    .args::<BeerFilter>(),
            )
    }
}

struct Cider;

impl Declare for Cider {
    fn declare() -> TypeDescriptor {
        TypeDescriptor::object::<Cider>()
            .field(FieldDescriptor::new("name", Scalar::String).required())
            .field(FieldDescriptor::new("dry", Scalar::Boolean))
    }
}

struct SearchResult;

impl Declare for SearchResult {
    fn declare() -> TypeDescriptor {
        TypeDescriptor::union::<SearchResult>().member::<Beer>().member::<Cider>()
    }
}

fn beer_resolver() -> ResolverDescriptor {
    ResolverDescriptor::js("BeerResolver", Code::from_inline("export function request() {}"))
        .data_source("BeerTable")
        .max_batch_size(10)
}

fn search_resolver() -> ResolverDescriptor {
    ResolverDescriptor::vtl(
        "SearchResolver",
        MappingTemplate::from_string("#set($req = {})"),
        MappingTemplate::from_string("$util.toJson($ctx.result)"),
    )
}

fn bind_options() -> BindOptions {
    BindOptions::new()
        .with_data_source("BeerTable", DataSource::new("BeerTable"))
        .with_function("F1", AppsyncFunction::new("F1"))
        .with_function("F2", AppsyncFunction::new("F2"))
}

#[test]
fn round_trip_registers_each_intermediate_type_once() {
    struct Query;
    impl Declare for Query {
        fn declare() -> TypeDescriptor {
            TypeDescriptor::object::<Query>()
                .field(FieldDescriptor::new("version", Scalar::String))
                .field(FieldDescriptor::new("color", TypeRef::of::<Color>()))
                .field(FieldDescriptor::new("beer", TypeRef::of::<Beer>()))
        }
    }

    let mut binder = SchemaBinder::new();
    binder.add_query(DeclarationRef::of::<Query>());
    binder.bind_schema(&bind_options()).unwrap();

    let schema = binder.schema();

    // Scalar field binds directly; enum, interface and object each register
    // exactly once (plus the input argument bag reached through Beer).
    assert_eq!(schema.query_fields().len(), 3);

    let type_names: Vec<&str> = schema.types().iter().map(|ty| ty.name()).collect();
    assert_eq!(type_names, ["Color", "Suggestion", "BeerFilter", "Drink", "Beer"]);

    let version = schema.query_fields()["version"].field();
    assert_eq!(version.return_type.base, Type::String);

    let color = schema.get_type("Color").unwrap().as_enum().unwrap();
    assert_eq!(color.definition, ["PALE", "AMBER", "DARK"]);

    let beer = schema.get_type("Beer").unwrap().as_object().unwrap();
    let interfaces = beer.interface_types.as_ref().unwrap();
    assert_eq!(interfaces.len(), 1);
    assert_eq!(interfaces[0].name(), "Drink");

    // Required-list string property.
    let notes = beer.definition["notes"].field();
    assert!(notes.return_type.is_list);
    assert!(notes.return_type.is_required_list);
    assert_eq!(notes.return_type.base, Type::String);

    // Argument-typed sub-field.
    let suggestions = beer.definition["suggestions"].field();
    let args = suggestions.args.as_ref().unwrap();
    assert_eq!(args["brewery"].base, Type::String);
    assert_eq!(suggestions.return_type.type_name(), "Suggestion");
}

#[test]
fn types_shared_across_roots_are_deduplicated_by_name() {
    struct Query;
    impl Declare for Query {
        fn declare() -> TypeDescriptor {
            TypeDescriptor::object::<Query>().field(FieldDescriptor::new("drink", TypeRef::of::<Drink>()))
        }
    }

    struct Mutation;
    impl Declare for Mutation {
        fn declare() -> TypeDescriptor {
            TypeDescriptor::object::<Mutation>().field(FieldDescriptor::new("favorite", TypeRef::of::<Drink>()))
        }
    }

    let mut binder = SchemaBinder::new();
    binder.add_query(DeclarationRef::of::<Query>());
    binder.add_mutation(DeclarationRef::of::<Mutation>());
    binder.bind_schema(&BindOptions::default()).unwrap();

    let registrations: Vec<&str> = binder.schema().types().iter().map(|ty| ty.name()).collect();
    assert_eq!(registrations, ["Drink"]);
    assert_eq!(binder.schema().mutation_fields().len(), 1);
}

#[test]
fn union_members_resolve_in_declared_order() {
    struct Query;
    impl Declare for Query {
        fn declare() -> TypeDescriptor {
            TypeDescriptor::object::<Query>().field(FieldDescriptor::new("search", TypeRef::of::<SearchResult>()).list())
        }
    }

    let mut binder = SchemaBinder::new();
    binder.add_query(DeclarationRef::of::<Query>());
    binder.bind_schema(&BindOptions::default()).unwrap();

    let union = binder.schema().get_type("SearchResult").unwrap().as_union().unwrap();
    let members: Vec<&str> = union.definition.iter().map(|member| member.name()).collect();
    assert_eq!(members, ["Beer", "Cider"]);
}

#[test]
fn directive_order_is_preserved_end_to_end() {
    struct Query;
    impl Declare for Query {
        fn declare() -> TypeDescriptor {
            TypeDescriptor::object::<Query>().field(
                FieldDescriptor::new("restricted", Scalar::String)
                    .directive(DirectiveDescriptor::iam())
                    .directive(DirectiveDescriptor::cognito(["admins"]))
                    .directive(DirectiveDescriptor::lambda()),
            )
        }
    }

    let mut binder = SchemaBinder::new();
    binder.add_query(DeclarationRef::of::<Query>());
    binder.bind_schema(&BindOptions::default()).unwrap();

    let directives = &binder.schema().query_fields()["restricted"].field().directives;
    assert_eq!(
        directives,
        &[
            Directive::iam(),
            Directive::cognito(["admins"]),
            Directive::custom("@aws_lambda"),
        ]
    );
}

#[test]
fn unit_resolver_attaches_its_data_source() {
    struct Query;
    impl Declare for Query {
        fn declare() -> TypeDescriptor {
            TypeDescriptor::object::<Query>().field(
                FieldDescriptor::new("beer", TypeRef::of::<Beer>())
                    .resolve_with(ResolverRef::of(beer_resolver))
                    .cache(60, ["sku"]),
            )
        }
    }

    let mut binder = SchemaBinder::new();
    binder.add_query(DeclarationRef::of::<Query>());
    binder.bind_schema(&bind_options()).unwrap();

    let resolvable = binder.schema().query_fields()["beer"].as_resolvable().unwrap();

    assert_eq!(resolvable.data_source.as_ref().unwrap().name(), "BeerTable");
    assert!(resolvable.pipeline_config.is_none());
    assert_eq!(resolvable.max_batch_size, Some(10));
    assert_eq!(resolvable.code, Some(Code::from_inline("export function request() {}")));
    assert_eq!(resolvable.runtime.unwrap().name, "APPSYNC_JS");

    let caching = resolvable.caching_config.as_ref().unwrap();
    assert_eq!(caching.ttl, Duration::from_secs(60));
    assert_eq!(caching.caching_keys, ["sku"]);
}

#[test]
fn pipeline_resolver_never_attaches_a_data_source() {
    struct Mutation;
    impl Declare for Mutation {
        fn declare() -> TypeDescriptor {
            TypeDescriptor::object::<Mutation>().field(
                FieldDescriptor::new("addBeer", TypeRef::of::<Beer>())
                    .resolve_through(ResolverRef::of(beer_resolver), ["F1", "F2"]),
            )
        }
    }

    let mut binder = SchemaBinder::new();
    binder.add_mutation(DeclarationRef::of::<Mutation>());
    binder.bind_schema(&bind_options()).unwrap();

    let resolvable = binder.schema().mutation_fields()["addBeer"].as_resolvable().unwrap();

    assert!(resolvable.data_source.is_none());
    let pipeline: Vec<&str> = resolvable
        .pipeline_config
        .as_ref()
        .unwrap()
        .iter()
        .map(|function| function.name())
        .collect();
    assert_eq!(pipeline, ["F1", "F2"]);
}

#[test]
fn vtl_resolver_attaches_mapping_templates() {
    struct Query;
    impl Declare for Query {
        fn declare() -> TypeDescriptor {
            TypeDescriptor::object::<Query>().field(
                FieldDescriptor::new("search", TypeRef::of::<SearchResult>())
                    .resolve_through(ResolverRef::of(search_resolver), ["F1"]),
            )
        }
    }

    let mut binder = SchemaBinder::new();
    binder.add_query(DeclarationRef::of::<Query>());
    binder.bind_schema(&bind_options()).unwrap();

    let resolvable = binder.schema().query_fields()["search"].as_resolvable().unwrap();

    assert!(resolvable.code.is_none());
    assert!(resolvable.runtime.is_none());
    assert_eq!(
        resolvable.request_mapping_template,
        Some(MappingTemplate::from_string("#set($req = {})"))
    );
    assert_eq!(
        resolvable.response_mapping_template,
        Some(MappingTemplate::from_string("$util.toJson($ctx.result)"))
    );
}

#[test]
fn missing_pipeline_function_is_named_in_the_error() {
    struct Query;
    impl Declare for Query {
        fn declare() -> TypeDescriptor {
            TypeDescriptor::object::<Query>().field(
                FieldDescriptor::new("beer", TypeRef::of::<Beer>())
                    .resolve_through(ResolverRef::of(beer_resolver), ["F1"]),
            )
        }
    }

    let mut binder = SchemaBinder::new();
    binder.add_query(DeclarationRef::of::<Query>());

    let err = binder.bind_schema(&BindOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "unable to find function 'F1'");
}

#[test]
fn unit_resolver_without_data_source_name_fails() {
    fn bare_resolver() -> ResolverDescriptor {
        ResolverDescriptor::js("BareResolver", Code::from_inline("export function request() {}"))
    }

    struct Query;
    impl Declare for Query {
        fn declare() -> TypeDescriptor {
            TypeDescriptor::object::<Query>()
                .field(FieldDescriptor::new("beer", TypeRef::of::<Beer>()).resolve_with(ResolverRef::of(bare_resolver)))
        }
    }

    let mut binder = SchemaBinder::new();
    binder.add_query(DeclarationRef::of::<Query>());

    let err = binder.bind_schema(&bind_options()).unwrap_err();
    assert_eq!(err.to_string(), "a data source is required for resolver 'BareResolver'");
}

#[test]
fn unresolvable_data_source_name_fails() {
    struct Query;
    impl Declare for Query {
        fn declare() -> TypeDescriptor {
            TypeDescriptor::object::<Query>()
                .field(FieldDescriptor::new("beer", TypeRef::of::<Beer>()).resolve_with(ResolverRef::of(beer_resolver)))
        }
    }

    let mut binder = SchemaBinder::new();
    binder.add_query(DeclarationRef::of::<Query>());

    let err = binder.bind_schema(&BindOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "unable to find data source 'BeerTable'");
}

#[test]
fn unregistered_directive_id_fails_until_a_factory_is_added() {
    const AUDIT: DirectiveId = DirectiveId::new("audit");

    struct Query;
    impl Declare for Query {
        fn declare() -> TypeDescriptor {
            TypeDescriptor::object::<Query>().field(
                FieldDescriptor::new("flagged", Scalar::String).directive(DirectiveDescriptor::new(AUDIT, None)),
            )
        }
    }

    let mut binder = SchemaBinder::new();
    binder.add_query(DeclarationRef::of::<Query>());

    let err = binder.bind_schema(&BindOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "unable to create directive of type 'audit'");

    let mut binder = SchemaBinder::new();
    binder.add_query(DeclarationRef::of::<Query>());
    binder.register_directive_factory(AUDIT, |_| Ok(Directive::custom("@audit")));
    binder.bind_schema(&BindOptions::default()).unwrap();

    let directives = &binder.schema().query_fields()["flagged"].field().directives;
    assert_eq!(directives, &[Directive::custom("@audit")]);
}

#[test]
fn subscription_root_binds_with_subscribe_directive() {
    struct Subscription;
    impl Declare for Subscription {
        fn declare() -> TypeDescriptor {
            TypeDescriptor::object::<Subscription>().field(
                FieldDescriptor::new("onBeerAdded", TypeRef::of::<Beer>())
                    .directive(DirectiveDescriptor::subscribe(["addBeer"])),
            )
        }
    }

    let mut binder = SchemaBinder::new();
    binder.add_subscription(DeclarationRef::of::<Subscription>());
    binder.bind_schema(&bind_options()).unwrap();

    assert!(binder.schema().query_fields().is_empty());
    assert!(binder.schema().mutation_fields().is_empty());

    let field = binder.schema().subscription_fields()["onBeerAdded"].field();
    assert_eq!(field.return_type.type_name(), "Beer");
    assert_eq!(field.directives, [Directive::subscribe(["addBeer"])]);
}

#[test]
fn custom_directive_renders_its_statement() {
    struct Query;
    impl Declare for Query {
        fn declare() -> TypeDescriptor {
            TypeDescriptor::object::<Query>()
                .field(FieldDescriptor::new("preview", Scalar::String).directive(DirectiveDescriptor::custom("@beta")))
        }
    }

    let mut binder = SchemaBinder::new();
    binder.add_query(DeclarationRef::of::<Query>());
    binder.bind_schema(&BindOptions::default()).unwrap();

    let directives = &binder.schema().query_fields()["preview"].field().directives;
    assert_eq!(directives, &[Directive::custom("@beta")]);
}

#[test]
fn custom_directive_without_statement_context_fails() {
    struct Query;
    impl Declare for Query {
        fn declare() -> TypeDescriptor {
            TypeDescriptor::object::<Query>().field(
                FieldDescriptor::new("flagged", Scalar::String)
                    .directive(DirectiveDescriptor::new(DirectiveId::CUSTOM, None)),
            )
        }
    }

    let mut binder = SchemaBinder::new();
    binder.add_query(DeclarationRef::of::<Query>());

    let err = binder.bind_schema(&BindOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "invalid context for directive of type 'custom'");
}

#[test]
fn duplicate_field_names_collapse_last_write_wins() {
    struct Query;
    impl Declare for Query {
        fn declare() -> TypeDescriptor {
            TypeDescriptor::object::<Query>()
                .field(FieldDescriptor::new("beer", Scalar::String))
                .field(FieldDescriptor::new("beer", Scalar::Int))
        }
    }

    let mut binder = SchemaBinder::new();
    binder.add_query(DeclarationRef::of::<Query>());
    binder.bind_schema(&BindOptions::default()).unwrap();

    assert_eq!(binder.schema().query_fields().len(), 1);
    assert_eq!(binder.schema().query_fields()["beer"].field().return_type.base, Type::Int);
}

#[test]
fn duplicate_field_attachments_follow_the_last_declaration() {
    struct Query;
    impl Declare for Query {
        fn declare() -> TypeDescriptor {
            TypeDescriptor::object::<Query>()
                .field(FieldDescriptor::new("beer", Scalar::String).directive(DirectiveDescriptor::iam()))
                .field(FieldDescriptor::new("beer", Scalar::Int).directive(DirectiveDescriptor::api_key()))
        }
    }

    let mut binder = SchemaBinder::new();
    binder.add_query(DeclarationRef::of::<Query>());
    binder.bind_schema(&BindOptions::default()).unwrap();

    // The winning type and the winning attachments come from the same (last)
    // declaration.
    let field = binder.schema().query_fields()["beer"].field();
    assert_eq!(field.return_type.base, Type::Int);
    assert_eq!(field.directives, [Directive::api_key()]);
}

#[test]
fn injected_cache_entries_short_circuit_building() {
    use appsync_code_first::schema::{EnumType, IntermediateType};
    use std::sync::Arc;

    struct Query;
    impl Declare for Query {
        fn declare() -> TypeDescriptor {
            TypeDescriptor::object::<Query>().field(FieldDescriptor::new("color", TypeRef::of::<Color>()))
        }
    }

    let injected = Arc::new(IntermediateType::Enum(EnumType {
        name: "Color".to_owned(),
        definition: vec!["PREBUILT".to_owned()],
    }));

    let mut cache = indexmap::IndexMap::new();
    cache.insert("Color".to_owned(), injected.clone());

    let mut binder = SchemaBinder::with_type_cache(cache);
    binder.add_query(DeclarationRef::of::<Query>());
    binder.bind_schema(&BindOptions::default()).unwrap();

    // The injected entry satisfied the lookup, so nothing was registered.
    assert!(binder.schema().types().is_empty());

    let color = binder.schema().query_fields()["color"].field();
    assert_eq!(color.return_type.intermediate_type.as_ref().unwrap().name(), "Color");
    assert_eq!(
        color.return_type.intermediate_type.as_ref().unwrap().as_enum().unwrap().definition,
        ["PREBUILT"]
    );
}

#[test]
fn named_override_renames_the_registered_type() {
    struct Renamed;
    impl Declare for Renamed {
        fn declare() -> TypeDescriptor {
            TypeDescriptor::object::<Renamed>()
                .named("Stout")
                .field(FieldDescriptor::new("name", Scalar::String))
        }
    }

    struct Query;
    impl Declare for Query {
        fn declare() -> TypeDescriptor {
            TypeDescriptor::object::<Query>().field(FieldDescriptor::new("stout", TypeRef::of::<Renamed>()))
        }
    }

    let mut binder = SchemaBinder::new();
    binder.add_query(DeclarationRef::of::<Query>());
    binder.bind_schema(&BindOptions::default()).unwrap();

    assert!(binder.schema().get_type("Stout").is_some());
    assert!(binder.schema().get_type("Renamed").is_none());
}

#[test]
fn intermediate_marker_as_field_type_aborts_the_pass() {
    struct Query;
    impl Declare for Query {
        fn declare() -> TypeDescriptor {
            TypeDescriptor::object::<Query>().field(FieldDescriptor::new("broken", Scalar::Intermediate))
        }
    }

    let mut binder = SchemaBinder::new();
    binder.add_query(DeclarationRef::of::<Query>());

    let err = binder.bind_schema(&BindOptions::default()).unwrap_err();
    assert!(matches!(err, BindError::InvalidType { .. }));
}
