use thiserror::Error;

/// Failure modes of the layout boundary. Layout either succeeds with a
/// fully-valid sequence or fails here; it never returns partial output.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    /// The placement radius must be a positive finite number.
    #[error("invalid sphere radius {0}: must be positive and finite")]
    InvalidRadius(f32),
}
