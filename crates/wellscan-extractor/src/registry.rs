//! Resolver registry
//!
//! Maps each field to its resolver and runs them in an order that respects
//! their declared dependencies. The order is computed once, at construction,
//! and construction fails on cycles or on dependencies nobody produces.

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::resolvers::{
    CountyResolver, FieldResolver, IdentifierResolver, LastMatchResolver, OperatorResolver,
    ResolvedFields, StateResolver, WellNameResolver,
};
use std::collections::HashSet;
use tracing::debug;
use wellscan_domain::Field;

/// Registered field resolvers and their resolution order
pub struct ResolverRegistry {
    resolvers: Vec<Box<dyn FieldResolver>>,
    order: Vec<usize>,
}

impl ResolverRegistry {
    /// Register resolvers and compute their resolution order
    ///
    /// Resolvers without a mutual dependency keep their registration order.
    pub fn new(resolvers: Vec<Box<dyn FieldResolver>>) -> Result<Self, ExtractorError> {
        let mut seen = HashSet::new();
        for resolver in &resolvers {
            if !seen.insert(resolver.field()) {
                return Err(ExtractorError::DuplicateResolver(resolver.field().to_string()));
            }
        }

        for resolver in &resolvers {
            if let Some(missing) = resolver.depends_on().iter().find(|d| !seen.contains(*d)) {
                return Err(ExtractorError::UnknownDependency {
                    field: resolver.field().to_string(),
                    dependency: missing.to_string(),
                });
            }
        }

        let order = topological_order(&resolvers)?;
        Ok(Self { resolvers, order })
    }

    /// The standard resolvers: identifier, well name, operator, county,
    /// state, longitude and latitude
    pub fn with_defaults(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        let resolvers: Vec<Box<dyn FieldResolver>> = vec![
            Box::new(IdentifierResolver::new()?),
            Box::new(WellNameResolver::new(config)?),
            Box::new(OperatorResolver::new(config)?),
            Box::new(CountyResolver::new(config)?),
            Box::new(StateResolver::new(config)?),
            Box::new(LastMatchResolver::longitude()?),
            Box::new(LastMatchResolver::latitude()?),
        ];
        Self::new(resolvers)
    }

    /// Fields in the order they are resolved
    pub fn order(&self) -> Vec<Field> {
        self.order.iter().map(|&i| self.resolvers[i].field()).collect()
    }

    /// Run every resolver against `text`
    pub fn resolve_all(&self, text: &str) -> ResolvedFields {
        let mut resolved = ResolvedFields::default();
        for &idx in &self.order {
            let resolver = &self.resolvers[idx];
            let candidates = resolver.candidates(text);
            let value = resolver.resolve(&candidates, &resolved);
            debug!(
                "{}: {} candidate(s) -> {:?}",
                resolver.field(),
                candidates.len(),
                value
            );
            resolved.insert(resolver.field(), value);
        }
        resolved
    }
}

/// Kahn's algorithm, always taking the earliest-registered ready resolver
fn topological_order(resolvers: &[Box<dyn FieldResolver>]) -> Result<Vec<usize>, ExtractorError> {
    let mut placed: HashSet<Field> = HashSet::new();
    let mut order = Vec::with_capacity(resolvers.len());

    while order.len() < resolvers.len() {
        let ready = resolvers.iter().enumerate().find(|(_, r)| {
            !placed.contains(&r.field()) && r.depends_on().iter().all(|d| placed.contains(d))
        });

        match ready {
            Some((idx, resolver)) => {
                placed.insert(resolver.field());
                order.push(idx);
            }
            None => {
                let stuck: Vec<String> = resolvers
                    .iter()
                    .map(|r| r.field())
                    .filter(|f| !placed.contains(f))
                    .map(|f| f.to_string())
                    .collect();
                return Err(ExtractorError::DependencyCycle(stuck.join(", ")));
            }
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::Candidate;

    /// Resolver that echoes its declared dependencies
    struct Stub {
        field: Field,
        deps: Vec<Field>,
    }

    impl FieldResolver for Stub {
        fn field(&self) -> Field {
            self.field
        }

        fn depends_on(&self) -> &[Field] {
            &self.deps
        }

        fn candidates(&self, _text: &str) -> Vec<Candidate> {
            Vec::new()
        }

        fn resolve(&self, _candidates: &[Candidate], resolved: &ResolvedFields) -> Option<String> {
            let seen: Vec<&str> = self.deps.iter().filter_map(|d| resolved.get(*d)).collect();
            Some(format!("{}[{}]", self.field, seen.join(",")))
        }
    }

    fn stub(field: Field, deps: &[Field]) -> Box<dyn FieldResolver> {
        Box::new(Stub {
            field,
            deps: deps.to_vec(),
        })
    }

    #[test]
    fn test_default_order() {
        let registry = ResolverRegistry::with_defaults(&ExtractorConfig::default()).unwrap();
        assert_eq!(
            registry.order(),
            vec![
                Field::Identifier,
                Field::WellName,
                Field::Operator,
                Field::County,
                Field::State,
                Field::Longitude,
                Field::Latitude,
            ]
        );
    }

    #[test]
    fn test_dependencies_resolve_first_regardless_of_registration() {
        let registry = ResolverRegistry::new(vec![
            stub(Field::State, &[Field::County]),
            stub(Field::County, &[Field::WellName]),
            stub(Field::WellName, &[]),
        ])
        .unwrap();

        assert_eq!(
            registry.order(),
            vec![Field::WellName, Field::County, Field::State]
        );

        let resolved = registry.resolve_all("");
        assert_eq!(
            resolved.get(Field::State),
            Some("state[county[well_name[]]]")
        );
    }

    #[test]
    fn test_cycle_rejected() {
        let result = ResolverRegistry::new(vec![
            stub(Field::Operator, &[]),
            stub(Field::County, &[Field::State]),
            stub(Field::State, &[Field::County]),
        ]);
        match result {
            Err(ExtractorError::DependencyCycle(fields)) => {
                assert_eq!(fields, "county, state");
            }
            _ => panic!("Expected DependencyCycle"),
        }
    }

    #[test]
    fn test_unknown_dependency_rejected() {
        let result = ResolverRegistry::new(vec![stub(Field::State, &[Field::County])]);
        assert!(matches!(
            result,
            Err(ExtractorError::UnknownDependency { .. })
        ));
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = ResolverRegistry::new(vec![
            stub(Field::County, &[]),
            stub(Field::County, &[]),
        ]);
        assert!(matches!(result, Err(ExtractorError::DuplicateResolver(_))));
    }

    #[test]
    fn test_defaults_resolve_every_header_field() {
        let registry = ResolverRegistry::with_defaults(&ExtractorConfig::default()).unwrap();
        let resolved = registry.resolve_all("API Number: 12-345-67890");
        assert_eq!(resolved.get(Field::Identifier), Some("12-345-67890"));
        assert_eq!(resolved.iter().count(), 7);
        assert_eq!(resolved.get(Field::Details), None);
    }
}
