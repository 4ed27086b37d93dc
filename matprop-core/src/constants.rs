//! Constants shared across all substances and constitutive relations.

/// Universal gas constant in J/(mol K).
pub const IDEAL_GAS_CONSTANT: f64 = 8.314472;

/// Wetting phase saturation below which the Brooks-Corey capillary
/// pressure curve is replaced by a regularized extension.
///
/// The value is shared by every parametrization of the regularized
/// Brooks-Corey family and is independent of the entry pressure and
/// the shape exponent. External curve evaluators construct the smooth
/// extension by matching value and slope of the base curve at this
/// saturation; some problems are very sensitive to it and a smaller
/// value can result in negative pressures.
///
/// Do not change this value. Consumers that need a different threshold
/// have to provide their own parameter type implementing
/// `RegularizationThreshold`.
pub const REGULARIZATION_THRESHOLD_SW: f64 = 1e-2;
