//! Argument and return-value descriptors.
//!
//! An [`ArgDesc`] describes one argument or the return value of an
//! operation: how many bytes it occupies in its wire representation,
//! and whether that byte count is a fixed size or an upper bound for a
//! variable-length payload.

/// Describes the in-memory/wire shape of one argument or a return
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArgDesc {
    /// Byte count of the argument's representation. Zero for
    /// [`ARG_END`].
    pub size: u32,
    /// Whether the argument has variable length in the wire payload.
    /// When `true`, `size` is the maximum (or per-element) size rather
    /// than an exact length.
    pub variable: bool,
}

/// Sentinel terminating an argument list, and also used as the
/// `retval` of an [`crate::OpDesc`] that returns nothing.
pub const ARG_END: ArgDesc = ArgDesc {
    size: 0,
    variable: false,
};

impl ArgDesc {
    /// Construct a fixed-size argument descriptor.
    #[must_use]
    pub const fn fixed(size: u32) -> Self {
        Self {
            size,
            variable: false,
        }
    }

    /// Construct a variable-size argument descriptor. `max_size` is
    /// the element size or upper bound, per the wire contract.
    #[must_use]
    pub const fn variable(max_size: u32) -> Self {
        Self {
            size: max_size,
            variable: true,
        }
    }

    /// Byte count of this argument's representation. Zero for
    /// [`ARG_END`].
    #[inline]
    #[must_use]
    pub const fn size_of(self) -> u32 {
        self.size
    }

    /// Whether this descriptor is the [`ARG_END`] sentinel.
    #[inline]
    #[must_use]
    pub const fn is_end(self) -> bool {
        self.size == 0 && !self.variable
    }
}
