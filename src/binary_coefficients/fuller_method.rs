use num_dual::DualNum;

/// Harmonic mean of two values.
pub fn harmonic_mean(x: f64, y: f64) -> f64 {
    (2.0 * x * y) / (x + y)
}

/// Estimate the binary diffusion coefficient in m²/s of two gases
/// using the method of Fuller.
///
/// `molar_masses` are the molar masses of both substances in g/mol and
/// `diffusion_volumes` their atomic diffusion volumes. `temperature`
/// is given in K and `pressure` in Pa.
///
/// See: R. Reid et al.: "The Properties of Gases and Liquids",
/// 4th edition, pp. 587-588, McGraw-Hill, 1987
pub fn fuller_method<D: DualNum<f64> + Copy>(
    molar_masses: [f64; 2],
    diffusion_volumes: [f64; 2],
    temperature: D,
    pressure: D,
) -> D {
    // "effective" molar mass in [g/mol]
    let m_ab = harmonic_mean(molar_masses[0], molar_masses[1]);

    let tmp = diffusion_volumes[0].powf(1.0 / 3.0) + diffusion_volumes[1].powf(1.0 / 3.0);
    temperature.powf(1.75) * 143.0 * 1e-4 / (pressure * m_ab.sqrt() * tmp * tmp)
}
