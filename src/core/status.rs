//! Termination status of the adaptive driver

/// How the refinement loop ended.
///
/// Neither variant is a failure of the run: an exhausted solve still carries
/// the finest trajectory computed and the error it achieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The error estimate met the tolerance.
    Converged,
    /// The refinement ceiling was reached first.
    Exhausted,
}
