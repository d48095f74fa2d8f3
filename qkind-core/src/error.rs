//! Errors raised at the boundary where untyped, tagged data becomes a typed quantity.
//!
//! Arithmetic never fails at runtime; every precondition there is a trait bound. The only runtime check left is
//! whether an external unit or kind tag agrees with the static type it is being read into.

/// A unit or kind tag that disagrees with the target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TagError<'a> {
    /// The unit tag is not the target unit's symbol.
    #[error("unit mismatch: expected '{expected}', found '{found}'")]
    UnitMismatch {
        /// Symbol of the target unit.
        expected: &'static str,
        /// Tag that was supplied.
        found: &'a str,
    },
    /// The kind tag is not the target kind's name.
    #[error("kind mismatch: expected '{expected}', found '{found}'")]
    KindMismatch {
        /// Name of the target kind.
        expected: &'static str,
        /// Tag that was supplied.
        found: &'a str,
    },
}

/// Result alias for tag validation.
pub type TagResult<'a, T> = Result<T, TagError<'a>>;
