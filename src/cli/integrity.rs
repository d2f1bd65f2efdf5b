//! CRC-32 seal over the command registry.
//!
//! The registry is recomputed into a seal after every mutation and checked
//! on every public entry point in debug builds. A mismatch means memory was
//! corrupted from outside safe code (DMA overrun, a second core scribbling
//! over shared RAM); there is no way to recover from that.
//!
//! The seal covers the text of each binding. Handlers are zero-sized for
//! plain functions, so their data addresses are not distinct; the registry
//! tracks handler identity separately with [`same_handler`].

use crc32fast::Hasher;

use super::binding::{Binding, Handler};

/// Checksum of a sequence of bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seal(u32);

impl Seal {
    /// Compute the seal of `bindings`, in order.
    ///
    /// Covers each name and help text, plus the count.
    pub fn compute<'b, 'a: 'b>(bindings: impl IntoIterator<Item = &'b Binding<'a>>) -> Self {
        let mut hasher = Hasher::new();
        let mut count: u32 = 0;
        for binding in bindings {
            hasher.update(binding.name().as_bytes());
            hasher.update(&[0]);
            hasher.update(binding.help().as_bytes());
            hasher.update(&[0]);
            count += 1;
        }
        hasher.update(&count.to_le_bytes());
        Seal(hasher.finalize())
    }

    /// The raw CRC-32 value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Whether two handler references point at the same handler.
///
/// Compares the vtable as well as the data address, which tells apart
/// zero-sized handlers such as two different plain functions.
pub(crate) fn same_handler(a: &dyn Handler, b: &dyn Handler) -> bool {
    core::ptr::eq(a, b)
}
