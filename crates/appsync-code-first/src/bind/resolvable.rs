//! Resolver wiring: turning a resolver binding plus the caller-supplied
//! handle maps into a fully-populated resolvable field.

use std::time::Duration;

use appsync_schema::{CachingConfig, Field, FunctionRuntime, ResolvableField};

use crate::{
    descriptors::{ResolverDescriptor, ResolverRuntime},
    error::BindError,
    infos::{PropertyInfo, ResolverInfo, TypeInfo},
    reflect,
};

use super::{BindOptions, SchemaBinder};

impl SchemaBinder {
    pub(crate) fn create_resolvable_field(
        &mut self,
        type_info: &TypeInfo,
        property_info: &PropertyInfo,
        field: Field,
        resolver_info: &ResolverInfo,
        options: &BindOptions,
    ) -> Result<ResolvableField, BindError> {
        let ResolverDescriptor {
            name: resolver_name,
            data_source: data_source_name,
            max_batch_size,
            runtime,
        } = resolver_info.resolver.descriptor();

        let mut resolvable = ResolvableField {
            field,
            data_source: None,
            pipeline_config: None,
            max_batch_size,
            caching_config: None,
            code: None,
            runtime: None,
            request_mapping_template: None,
            response_mapping_template: None,
        };

        if let Some(cache_info) = reflect::cache_info(type_info, property_info) {
            resolvable.caching_config = Some(CachingConfig {
                ttl: Duration::from_secs(cache_info.ttl_seconds),
                caching_keys: cache_info.keys,
            });
        }

        match runtime {
            ResolverRuntime::Js { code } => {
                resolvable.code = Some(code);
                resolvable.runtime = Some(FunctionRuntime::JS_1_0_0);
            }
            ResolverRuntime::Vtl {
                request_mapping_template,
                response_mapping_template,
            } => {
                resolvable.request_mapping_template = Some(request_mapping_template);
                resolvable.response_mapping_template = Some(response_mapping_template);
            }
        }

        if !resolver_info.functions.is_empty() {
            // Pipeline resolvers delegate data source selection to their
            // functions; no data source is attached here.
            let mut pipeline_config = Vec::with_capacity(resolver_info.functions.len());

            for function_name in &resolver_info.functions {
                let function = options
                    .functions
                    .get(function_name)
                    .ok_or_else(|| BindError::UnknownFunction {
                        function_name: function_name.clone(),
                    })?;

                pipeline_config.push(function.clone());
            }

            resolvable.pipeline_config = Some(pipeline_config);
        } else {
            let data_source_name = data_source_name.ok_or(BindError::MissingDataSource {
                resolver_name,
            })?;

            let data_source =
                options
                    .data_sources
                    .get(&data_source_name)
                    .ok_or_else(|| BindError::UnknownDataSource {
                        data_source_name: data_source_name.clone(),
                    })?;

            resolvable.data_source = Some(data_source.clone());
        }

        Ok(resolvable)
    }
}
