use alloc::borrow::Cow;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use pm_utils::TypeIdMap;

use crate::info::{ParentOptions, TypeRef};
use crate::inherit::{RegisterError, Registration, RegistryConfig, ResolveError};
use crate::registry::TypeMetadata;
use crate::value::{self, Map, Number, Value};

// -----------------------------------------------------------------------------
// Registry

/// The append-only list of [`Registration`]s and the resolution algorithm.
///
/// Registrations are never merged physically. Merging and overriding are
/// the result of scanning them in insertion order at resolution time,
/// through a per-parent index of positions.
///
/// Metadata is not owned: every call takes the [`TypeMetadata`] to consult.
///
/// # Example
///
/// ```
/// use pm_reflect::info::{ParentOptions, TypeRef};
/// use pm_reflect::inherit::{Registration, Registry};
/// use pm_reflect::registry::{TypeMeta, TypeRegistry};
/// use pm_reflect::Value;
///
/// struct Vehicle;
/// struct Car;
///
/// let mut types = TypeRegistry::new();
/// types.try_insert_type_meta(TypeMeta::of::<Vehicle>().with_parent_options(ParentOptions::new("type")));
/// types.try_insert_type_meta(TypeMeta::of::<Car>().with_extends::<Vehicle>());
///
/// let mut registry = Registry::new();
/// registry
///     .add(&types, [Registration::of::<Vehicle>().with_child::<Car>("car")])
///     .unwrap();
///
/// let data = Value::from_iter([("type", "car")]);
/// let ty = registry
///     .resolve(&types, TypeRef::of::<Vehicle>(), data.as_object().unwrap())
///     .unwrap();
///
/// assert!(ty.is::<Car>());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    registrations: Vec<Registration>,
    by_parent: TypeIdMap<Vec<usize>>,
    config: RegistryConfig,
}

impl Registry {
    /// Creates an empty registry with the default [`RegistryConfig`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with the given configuration.
    #[inline]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            registrations: Vec::new(),
            by_parent: TypeIdMap::new(),
            config,
        }
    }

    #[inline]
    pub const fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns the number of registrations added so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Iterates over every registration, in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Registration> {
        self.registrations.iter()
    }

    fn registrations_of(&self, parent: TypeRef) -> impl DoubleEndedIterator<Item = &Registration> {
        self.by_parent
            .get(&parent.id())
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|index| &self.registrations[*index])
    }

    // -------------------------------------------------------------------------
    // add

    /// Validates and appends registrations.
    ///
    /// Each registration is checked against `types`:
    /// - its parent must have [`ParentOptions`];
    /// - a child equal to the parent requires [`ParentOptions::allow_self`];
    /// - any other child must inherit from the parent.
    ///
    /// Nothing is appended unless every registration is valid.
    pub fn add<M: TypeMetadata + ?Sized>(
        &mut self,
        types: &M,
        registrations: impl IntoIterator<Item = Registration>,
    ) -> Result<(), RegisterError> {
        let registrations: Vec<Registration> = registrations.into_iter().collect();

        for registration in &registrations {
            Self::validate(types, registration)?;
        }

        for registration in registrations {
            let parent = registration.parent();

            for (value, child) in registration.children() {
                if let Some(previous) = self.find_child(parent, value)
                    && previous != child
                {
                    log::warn!(
                        "discriminator value `{value}` of `{parent}` now selects `{child}` instead of `{previous}`"
                    );
                }
            }

            log::debug!(
                "registered {} children for `{parent}`",
                registration.len()
            );

            let index = self.registrations.len();
            self.registrations.push(registration);
            self.by_parent
                .get_or_insert(parent.id(), Vec::new)
                .push(index);
        }

        Ok(())
    }

    fn validate<M: TypeMetadata + ?Sized>(
        types: &M,
        registration: &Registration,
    ) -> Result<(), RegisterError> {
        let parent = registration.parent();
        let Some(options) = types.parent_options(parent) else {
            return Err(RegisterError::MissingDiscriminatorConfig { parent });
        };

        for (_, child) in registration.children() {
            if child == parent {
                if !options.allow_self() {
                    return Err(RegisterError::SelfRegistrationNotAllowed { parent });
                }
            } else if !types.inherits_from(child, parent) {
                return Err(RegisterError::InvalidChild { child, parent });
            }
        }

        Ok(())
    }

    // -------------------------------------------------------------------------
    // query

    /// Returns the child selected by a discriminator value for `parent`,
    /// the latest registration winning.
    pub fn find_child(&self, parent: TypeRef, value: &str) -> Option<TypeRef> {
        self.registrations_of(parent)
            .rev()
            .find_map(|registration| registration.get(value))
    }

    /// Returns the merged children of `parent`.
    ///
    /// Values keep the position of their first registration and the child of
    /// their latest one.
    pub fn children(&self, parent: TypeRef) -> Vec<(&str, TypeRef)> {
        let mut merged: Vec<(&str, TypeRef)> = Vec::new();
        for registration in self.registrations_of(parent) {
            for (value, child) in registration.children() {
                match merged.iter_mut().find(|(key, _)| *key == value) {
                    Some(entry) => entry.1 = child,
                    None => merged.push((value, child)),
                }
            }
        }
        merged
    }

    /// Returns `true` if `parent` was ever registered among its own children,
    /// i.e. it has an explicit discriminator value for itself.
    pub fn has_explicit_self(&self, parent: TypeRef) -> bool {
        self.registrations_of(parent).any(Registration::has_self)
    }

    // -------------------------------------------------------------------------
    // resolve

    /// Resolves the concrete type to instantiate for `base` and `data`.
    ///
    /// Returns `base` itself if it is not polymorphic. Otherwise reads the
    /// discriminator field at each inheritance level; see the
    /// [module documentation](crate::inherit) for the rules.
    ///
    /// Fields other than the discriminators are never inspected.
    pub fn resolve<M: TypeMetadata + ?Sized>(
        &self,
        types: &M,
        base: TypeRef,
        data: &Map,
    ) -> Result<TypeRef, ResolveError> {
        match types.parent_options(base) {
            Some(options) => self.resolve_level(types, base, options, data, 0),
            None => Ok(base),
        }
    }

    fn resolve_level<M: TypeMetadata + ?Sized>(
        &self,
        types: &M,
        parent: TypeRef,
        options: &ParentOptions,
        data: &Map,
        depth: usize,
    ) -> Result<TypeRef, ResolveError> {
        if depth >= self.config.max_depth {
            return Err(ResolveError::DepthExceeded {
                parent,
                max_depth: self.config.max_depth,
            });
        }

        let field = options.discriminator_field();

        let value = match data.get(field) {
            None | Some(Value::Null) => {
                if options.allow_self() && !self.has_explicit_self(parent) {
                    log::trace!("`{parent}` has no `{field}`, resolved to itself");
                    return Ok(parent);
                }
                return Err(ResolveError::MissingDiscriminator {
                    parent,
                    field: field.into(),
                });
            }
            Some(value) => self.discriminator_key(parent, field, value)?,
        };

        let Some(child) = self.find_child(parent, &value) else {
            if options.allow_self() {
                log::trace!("`{parent}` has no child for `{value}`, resolved to itself");
                return Ok(parent);
            }
            return Err(ResolveError::NoMatchingSubclass {
                parent,
                value: value.into_owned(),
            });
        };

        if child == parent {
            return Ok(parent);
        }

        log::trace!("`{parent}` resolved `{field}` = `{value}` to `{child}`");

        match types.parent_options(child) {
            Some(child_options) if child_options.discriminator_field() != field => {
                self.resolve_level(types, child, child_options, data, depth + 1)
            }
            _ => Ok(child),
        }
    }

    fn discriminator_key<'a>(
        &self,
        parent: TypeRef,
        field: &str,
        value: &'a Value,
    ) -> Result<Cow<'a, str>, ResolveError> {
        match value {
            Value::String(s) => Ok(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Ok(Cow::Owned(number_key(n))),
            Value::Bool(b) if !self.config.strict_discriminator => {
                Ok(Cow::Borrowed(if *b { "true" } else { "false" }))
            }
            other => Err(ResolveError::InvalidDiscriminatorType {
                parent,
                field: String::from(field),
                found: value::kind(other),
            }),
        }
    }
}

// -----------------------------------------------------------------------------
// Number keys

/// Stringifies a numeric discriminator the way ECMAScript does, so `1.0`
/// selects the key `"1"` and `1e21` the key `"1e+21"`.
fn number_key(n: &Number) -> String {
    match n.as_f64() {
        Some(v) if n.is_f64() => float_key(v),
        _ => n.to_string(),
    }
}

fn float_key(v: f64) -> String {
    if v == 0.0 {
        return String::from("0");
    }
    let (sign, v) = if v < 0.0 { ("-", -v) } else { ("", v) };

    // Shortest round-trip digits, e.g. `1.5e-7`.
    let scientific = format!("{v:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat(-n as usize))
    } else {
        let exponent_sign = if n > 0 { '+' } else { '-' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{exponent_sign}{}", (n - 1).abs())
        } else {
            format!("{first}.{rest}e{exponent_sign}{}", (n - 1).abs())
        }
    };
    format!("{sign}{body}")
}

// -----------------------------------------------------------------------------
// Tests
