//! Core numeric traits.
//!
//! All models are generic over [`Float`] so that they run on `f64` for
//! simulation and on `f32` where memory matters.

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use pathlab_core::traits::Float;
///
/// fn compute_discount<T: Float>(rate: T, time: T) -> T {
///     (-rate * time).exp()
/// }
///
/// let discount_f64: f64 = compute_discount(0.05, 1.0);
/// assert!((discount_f64 - 0.951229).abs() < 1e-5);
/// ```
pub use num_traits::Float;

/// Converts an `f64` literal into `T`, falling back to zero.
///
/// Every `Float` used in this workspace can represent the literals we need,
/// so the fallback only guards exotic implementations.
#[inline]
pub fn lit<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::zero)
}
