//! Conversion boundary between the core vector types and host engine types.
//!
//! The preferred route is the compile-time one: the [`glam`] and
//! [`nalgebra`] submodules provide plain `From` impls in both directions,
//! selected statically per host integration. The [`Adapters`] registry
//! exists for hosts where several integrations must coexist at runtime: an
//! explicit dispatch table keyed by [`TypeId`], built once during host
//! initialization and read-only afterwards.
//!
//! There is deliberately no global registry. Each host integration exposes a
//! `register` function that populates a registry handle owned by the caller,
//! which keeps test isolation trivial. Lookup is by exact type; Rust types
//! have no runtime subtype relation to fall back on.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;

use crate::Error;

pub mod glam;
pub mod nalgebra;

type AdaptFn<V> = Box<dyn Fn(&dyn Any) -> Option<V> + Send + Sync>;
type ConvertFn<V, T> = Box<dyn Fn(&V) -> T + Send + Sync>;

/// Registry mapping foreign host types to bidirectional converters for one
/// core vector variant `V`.
///
/// Registration takes `&mut self` and happens once at startup; lookups take
/// `&self`, so a registry shared behind a reference is safe to read from any
/// number of threads.
pub struct Adapters<V> {
    adapters: HashMap<TypeId, AdaptFn<V>>,
    converters: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl<V: 'static> Adapters<V> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            adapters: HashMap::new(),
            converters: HashMap::new(),
        }
    }

    /// Register a construction function building a core vector from a
    /// foreign `T`.
    pub fn register_adapter<T, F>(&mut self, adapter: F)
    where
        T: Any,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        self.adapters.insert(
            TypeId::of::<T>(),
            Box::new(move |any: &dyn Any| any.downcast_ref::<T>().map(&adapter)),
        );
    }

    /// Register a conversion function building a foreign `T` from a core
    /// vector.
    pub fn register_converter<T, F>(&mut self, converter: F)
    where
        T: Any,
        F: Fn(&V) -> T + Send + Sync + 'static,
    {
        let boxed: ConvertFn<V, T> = Box::new(converter);
        self.converters.insert(TypeId::of::<T>(), Box::new(boxed));
    }

    /// Register both directions for `T` at once.
    pub fn register<T, F, G>(&mut self, adapter: F, converter: G)
    where
        T: Any,
        F: Fn(&T) -> V + Send + Sync + 'static,
        G: Fn(&V) -> T + Send + Sync + 'static,
    {
        self.register_adapter(adapter);
        self.register_converter(converter);
    }

    /// Build a core vector from a foreign value.
    ///
    /// Fails with [`Error::UnregisteredType`] when no adapter was registered
    /// for `T`.
    pub fn adapt<T: Any>(&self, value: &T) -> Result<V, Error> {
        self.adapters
            .get(&TypeId::of::<T>())
            .and_then(|adapter| adapter(value as &dyn Any))
            .ok_or(Error::UnregisteredType {
                type_name: type_name::<T>(),
            })
    }

    /// Build a foreign `T` from a core vector.
    ///
    /// Fails with [`Error::UnregisteredType`] when no converter was
    /// registered for `T`.
    pub fn convert<T: Any>(&self, value: &V) -> Result<T, Error> {
        self.converters
            .get(&TypeId::of::<T>())
            .and_then(|converter| converter.downcast_ref::<ConvertFn<V, T>>())
            .map(|converter| converter(value))
            .ok_or(Error::UnregisteredType {
                type_name: type_name::<T>(),
            })
    }
}

impl<V: 'static> Default for Adapters<V> {
    fn default() -> Self {
        Self::new()
    }
}
