//! Fixed-capacity command table.

use core::fmt;

use heapless::Vec;

use super::binding::{Binding, Handler};
use super::error::Error;
use super::integrity::{Seal, same_handler};

/// Name to binding table holding at most `M` entries.
///
/// Entries are kept contiguous in registration order; removing one shifts
/// the later entries down. Positions are therefore not stable and callers
/// look bindings up by name.
#[derive(Clone)]
pub struct Registry<'a, const M: usize> {
    bindings: Vec<Binding<'a>, M>,
    // Handler of each binding as registered, checked by `verify`.
    handlers: Vec<&'a dyn Handler, M>,
    seal: Seal,
}

impl<const M: usize> Default for Registry<'_, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const M: usize> Registry<'a, M> {
    /// Create an empty registry.
    pub fn new() -> Self {
        let bindings: Vec<Binding<'a>, M> = Vec::new();
        let seal = Seal::compute(bindings.iter());
        Self {
            bindings,
            handlers: Vec::new(),
            seal,
        }
    }

    /// Add a binding.
    ///
    /// # Errors
    ///
    /// * [`Error::DuplicateName`] - a binding with the same name exists
    /// * [`Error::RegistryFull`] - all `M` slots are taken
    ///
    /// The registry is unchanged on error.
    pub fn register(&mut self, binding: Binding<'a>) -> Result<(), Error> {
        if self.contains(binding.name()) {
            return Err(Error::DuplicateName);
        }
        self.bindings
            .push(binding)
            .map_err(|_| Error::RegistryFull)?;
        self.reseal();
        Ok(())
    }

    /// Remove the binding called `name` and return it.
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyName`] - `name` is empty
    /// * [`Error::NotFound`] - no binding is called `name`
    pub fn unregister(&mut self, name: &str) -> Result<Binding<'a>, Error> {
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        let index = self
            .bindings
            .iter()
            .position(|b| b.name() == name)
            .ok_or(Error::NotFound)?;
        let removed = self.bindings.remove(index);
        self.reseal();
        Ok(removed)
    }

    /// Look up a binding by exact name.
    pub fn find(&self, name: &str) -> Option<&Binding<'a>> {
        self.bindings.iter().find(|b| b.name() == name)
    }

    /// Whether a binding called `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Bindings in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &Binding<'a>> {
        self.bindings.iter()
    }

    /// Bindings in storage order, as a slice.
    pub fn as_slice(&self) -> &[Binding<'a>] {
        &self.bindings
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Maximum number of bindings.
    pub const fn capacity(&self) -> usize {
        M
    }

    /// Remove every binding.
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.reseal();
    }

    /// Check the contents against the seal taken at the last mutation.
    ///
    /// Names and help texts are checked against the CRC-32 seal, handlers
    /// against the references recorded when each binding was registered.
    ///
    /// # Errors
    ///
    /// * [`Error::IntegrityViolation`] - the contents changed behind the registry's back
    pub fn verify(&self) -> Result<(), Error> {
        let handlers_intact = self.handlers.len() == self.bindings.len()
            && self
                .bindings
                .iter()
                .zip(self.handlers.iter())
                .all(|(binding, &handler)| same_handler(binding.handler(), handler));

        if handlers_intact && Seal::compute(self.bindings.iter()) == self.seal {
            Ok(())
        } else {
            Err(Error::IntegrityViolation)
        }
    }

    fn reseal(&mut self) {
        self.handlers.clear();
        for binding in self.bindings.iter() {
            // Both vectors hold at most M entries.
            let _ = self.handlers.push(binding.handler());
        }
        self.seal = Seal::compute(self.bindings.iter());
    }

    #[cfg(test)]
    pub(crate) fn bindings_mut(&mut self) -> &mut Vec<Binding<'a>, M> {
        &mut self.bindings
    }
}

impl<const M: usize> fmt::Debug for Registry<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("bindings", &self.bindings)
            .field("seal", &format_args!("{:#010x}", self.seal.value()))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Console, Status};

    fn noop(_argc: usize, _argv: &[&str], _console: &mut Console<'_>) -> Status {
        Status::Ok
    }

    fn binding(name: &str) -> Binding<'static> {
        Binding::new(name, &noop, "test binding").unwrap()
    }

    fn names<const M: usize>(registry: &Registry<'_, M>) -> std::vec::Vec<std::string::String> {
        registry.iter().map(|b| b.name().into()).collect()
    }

    #[test]
    fn test_register_and_find() {
        let mut registry = Registry::<4>::new();
        registry.register(binding("status")).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("status"));
        assert_eq!(registry.find("status").unwrap().help(), "test binding");
        assert!(registry.find("stat").is_none());
        assert!(registry.find("status2").is_none());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = Registry::<4>::new();
        registry.register(binding("dup")).unwrap();
        assert_eq!(registry.register(binding("dup")), Err(Error::DuplicateName));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_full_rejected() {
        let mut registry = Registry::<2>::new();
        registry.register(binding("a")).unwrap();
        registry.register(binding("b")).unwrap();
        assert_eq!(registry.register(binding("c")), Err(Error::RegistryFull));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.capacity(), 2);
    }

    #[test]
    fn test_unregister_shifts_entries() {
        let mut registry = Registry::<4>::new();
        for name in ["a", "b", "c"] {
            registry.register(binding(name)).unwrap();
        }
        let removed = registry.unregister("b").unwrap();
        assert_eq!(removed.name(), "b");
        assert_eq!(names(&registry), ["a", "c"]);
        assert!(registry.find("b").is_none());
    }

    #[test]
    fn test_unregister_errors() {
        let mut registry = Registry::<4>::new();
        registry.register(binding("a")).unwrap();
        assert_eq!(registry.unregister("").unwrap_err(), Error::EmptyName);
        assert_eq!(registry.unregister("zzz").unwrap_err(), Error::NotFound);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_slot_reused_after_unregister() {
        let mut registry = Registry::<2>::new();
        registry.register(binding("a")).unwrap();
        registry.register(binding("b")).unwrap();
        registry.unregister("a").unwrap();
        registry.register(binding("a")).unwrap();
        assert_eq!(names(&registry), ["b", "a"]);
    }

    fn other(_argc: usize, _argv: &[&str], _console: &mut Console<'_>) -> Status {
        Status::Fail
    }

    #[test]
    fn test_renamed_binding_detected() {
        let mut registry = Registry::<4>::new();
        registry.register(binding("a")).unwrap();
        registry.bindings[0] = binding("b");
        assert_eq!(registry.verify(), Err(Error::IntegrityViolation));
    }

    #[test]
    fn test_swapped_handler_detected() {
        let mut registry = Registry::<4>::new();
        registry.register(binding("a")).unwrap();
        registry.bindings[0] = Binding::new("a", &other, "test binding").unwrap();
        assert_eq!(registry.verify(), Err(Error::IntegrityViolation));
    }

    #[test]
    fn test_stale_seal_detected() {
        let mut registry = Registry::<4>::new();
        registry.register(binding("a")).unwrap();
        registry.seal = Seal::compute(core::iter::empty::<&Binding<'_>>());
        assert_eq!(registry.verify(), Err(Error::IntegrityViolation));
    }

    #[test]
    fn test_dropped_binding_detected() {
        let mut registry = Registry::<4>::new();
        registry.register(binding("a")).unwrap();
        registry.register(binding("b")).unwrap();
        registry.bindings.pop();
        assert_eq!(registry.verify(), Err(Error::IntegrityViolation));
    }

    #[test]
    fn test_debug_shows_seal() {
        let registry = Registry::<4>::new();
        let debug = format!("{:?}", registry);
        assert!(debug.contains(&format!("{:#010x}", registry.seal.value())));
    }

    #[test]
    fn test_seal_follows_mutations() {
        let mut registry = Registry::<4>::new();
        assert!(registry.verify().is_ok());
        registry.register(binding("a")).unwrap();
        assert!(registry.verify().is_ok());
        registry.unregister("a").unwrap();
        assert!(registry.verify().is_ok());
        registry.register(binding("b")).unwrap();
        registry.clear();
        assert!(registry.verify().is_ok());
        assert!(registry.is_empty());
    }
}
