//! Directive resolution: the per-id factory registry and the built-in
//! factories covering the AppSync authorization modes.

use appsync_schema::Directive;
use indexmap::IndexMap;

use crate::{
    error::BindError,
    ids::DirectiveId,
    infos::{DirectiveInfo, PropertyInfo, TypeInfo},
    reflect,
};

use super::SchemaBinder;

/// Maps one [`DirectiveInfo`] to the schema-library directive it stands for.
pub type DirectiveFactory = fn(&DirectiveInfo) -> Result<Directive, BindError>;

/// The lambda authorization mode has no dedicated constructor in the schema
/// library; it is spelled as a custom statement.
const LAMBDA_DIRECTIVE_STATEMENT: &str = "@aws_lambda";

pub(crate) fn default_factories() -> IndexMap<DirectiveId, DirectiveFactory> {
    IndexMap::from([
        (DirectiveId::API_KEY, create_api_key as DirectiveFactory),
        (DirectiveId::COGNITO, create_cognito),
        (DirectiveId::CUSTOM, create_custom),
        (DirectiveId::IAM, create_iam),
        (DirectiveId::LAMBDA, create_lambda),
        (DirectiveId::OIDC, create_oidc),
        (DirectiveId::SUBSCRIBE, create_subscribe),
    ])
}

impl SchemaBinder {
    /// Resolve the directives attached to a type, or to one of its properties.
    /// Order of application is preserved; an id with no registered factory is
    /// a hard error.
    pub(crate) fn create_directives(
        &self,
        type_info: &TypeInfo,
        property_info: Option<&PropertyInfo>,
    ) -> Result<Vec<Directive>, BindError> {
        reflect::directive_infos(type_info, property_info)
            .iter()
            .map(|directive_info| {
                let factory = self
                    .directive_factories
                    .get(&directive_info.directive_id)
                    .ok_or(BindError::UnknownDirective {
                        directive_id: directive_info.directive_id,
                    })?;

                factory(directive_info)
            })
            .collect()
    }
}

fn create_api_key(_: &DirectiveInfo) -> Result<Directive, BindError> {
    Ok(Directive::api_key())
}

fn create_cognito(directive_info: &DirectiveInfo) -> Result<Directive, BindError> {
    Ok(Directive::cognito(context_strings(directive_info, "groups")))
}

fn create_custom(directive_info: &DirectiveInfo) -> Result<Directive, BindError> {
    // An absent or non-string statement would otherwise render as an empty
    // directive.
    let statement = directive_info
        .context
        .as_ref()
        .and_then(|context| context.get("statement"))
        .and_then(|statement| statement.as_str())
        .ok_or(BindError::InvalidDirectiveContext {
            directive_id: directive_info.directive_id,
        })?;

    Ok(Directive::custom(statement))
}

fn create_iam(_: &DirectiveInfo) -> Result<Directive, BindError> {
    Ok(Directive::iam())
}

fn create_lambda(_: &DirectiveInfo) -> Result<Directive, BindError> {
    Ok(Directive::custom(LAMBDA_DIRECTIVE_STATEMENT))
}

fn create_oidc(_: &DirectiveInfo) -> Result<Directive, BindError> {
    Ok(Directive::oidc())
}

fn create_subscribe(directive_info: &DirectiveInfo) -> Result<Directive, BindError> {
    Ok(Directive::subscribe(context_strings(directive_info, "mutations")))
}

/// Read a list of strings out of the open context bag.
fn context_strings(directive_info: &DirectiveInfo, key: &str) -> Vec<String> {
    directive_info
        .context
        .as_ref()
        .and_then(|context| context.get(key))
        .and_then(|value| value.as_array())
        .map(|values| {
            values
                .iter()
                .filter_map(|value| value.as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}
