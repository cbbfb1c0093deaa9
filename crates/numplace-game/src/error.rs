//! Game session errors.

/// Error returned by game session mutations.
///
/// Everything here is local and recoverable; a typical caller ignores the
/// rejected write and leaves the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Attempted to write into a given (immutable) cell.
    #[display("cannot modify a given cell")]
    CannotModifyGivenCell,
}
