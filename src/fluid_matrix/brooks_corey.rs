use super::BrooksCoreyParameters;
use num_dual::DualNum;

/// The unregularized Brooks-Corey capillary pressure and relative
/// permeability relations.
///
/// Saturations refer to the effective wetting phase saturation. The
/// capillary pressure relations are not defined for saturations at or
/// below zero, where they become singular; this is what the
/// regularized variant is used for.
///
/// See: R. H. Brooks, A. T. Corey: "Hydraulic Properties of Porous
/// Media", Hydrology Papers, Colorado State University, 1964
pub struct BrooksCorey;

impl BrooksCorey {
    /// Capillary pressure in Pa at the wetting phase saturation `sw`.
    pub fn pc<D, A, P>(params: &P, sw: D) -> D
    where
        D: DualNum<f64> + Copy + From<A>,
        P: BrooksCoreyParameters<A>,
    {
        let (pe, alpha) = shape::<D, A, P>(params);
        pe * sw.powd(-alpha.recip())
    }

    /// Wetting phase saturation at the capillary pressure `pc` in Pa.
    ///
    /// Below the entry pressure the medium is fully saturated.
    pub fn sw<D, A, P>(params: &P, pc: D) -> D
    where
        D: DualNum<f64> + Copy + From<A>,
        P: BrooksCoreyParameters<A>,
    {
        let (pe, alpha) = shape::<D, A, P>(params);
        clamp_unit((pc / pe).powd(-alpha))
    }

    /// Derivative of the capillary pressure with respect to the
    /// wetting phase saturation.
    pub fn dpc_dsw<D, A, P>(params: &P, sw: D) -> D
    where
        D: DualNum<f64> + Copy + From<A>,
        P: BrooksCoreyParameters<A>,
    {
        let (pe, alpha) = shape::<D, A, P>(params);
        -pe / alpha * sw.powd(-alpha.recip() - 1.0)
    }

    /// Derivative of the wetting phase saturation with respect to the
    /// capillary pressure.
    pub fn dsw_dpc<D, A, P>(params: &P, pc: D) -> D
    where
        D: DualNum<f64> + Copy + From<A>,
        P: BrooksCoreyParameters<A>,
    {
        let (pe, alpha) = shape::<D, A, P>(params);
        -alpha / pe * (pc / pe).powd(-alpha - 1.0)
    }

    /// Relative permeability of the wetting phase.
    pub fn krw<D, A, P>(params: &P, sw: D) -> D
    where
        D: DualNum<f64> + Copy + From<A>,
        P: BrooksCoreyParameters<A>,
    {
        if sw.re() <= 0.0 {
            D::zero()
        } else if sw.re() >= 1.0 {
            D::one()
        } else {
            let (_, alpha) = shape::<D, A, P>(params);
            sw.powd(alpha.recip() * 2.0 + 3.0)
        }
    }

    /// Relative permeability of the non-wetting phase.
    pub fn krn<D, A, P>(params: &P, sw: D) -> D
    where
        D: DualNum<f64> + Copy + From<A>,
        P: BrooksCoreyParameters<A>,
    {
        if sw.re() >= 1.0 {
            D::zero()
        } else if sw.re() <= 0.0 {
            D::one()
        } else {
            let (_, alpha) = shape::<D, A, P>(params);
            let exponent = alpha.recip() * 2.0 + 1.0;
            let sn = D::one() - sw;
            sn * sn * (D::one() - sw.powd(exponent))
        }
    }
}

/// Entry pressure and shape exponent in the scalar type of the state.
///
/// Parameters given as `f64` are promoted to the dual number type of the
/// saturation; parameters given as dual numbers carry their derivatives.
fn shape<D, A, P>(params: &P) -> (D, D)
where
    D: From<A>,
    P: BrooksCoreyParameters<A>,
{
    (D::from(params.pe()), D::from(params.alpha()))
}

fn clamp_unit<D: DualNum<f64> + Copy>(x: D) -> D {
    if x.re() < 0.0 {
        D::zero()
    } else if x.re() > 1.0 {
        D::one()
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::super::{BrooksCoreyParams, RegularizedBrooksCoreyParams};
    use super::*;
    use approx::assert_relative_eq;
    use num_dual::{first_derivative, second_derivative, Dual64};

    fn params() -> BrooksCoreyParams {
        BrooksCoreyParams::new(5e3, 2.0)
    }

    #[test]
    fn entry_pressure_at_full_saturation() {
        assert_relative_eq!(BrooksCorey::pc(&params(), 1.0), 5e3);
        assert_eq!(BrooksCorey::sw(&params(), 1e3), 1.0);
        assert_eq!(BrooksCorey::sw(&params(), 5e3), 1.0);
    }

    #[test]
    fn inverse_relations() {
        let params = params();
        for sw in [0.05, 0.2, 0.5, 0.9] {
            let pc = BrooksCorey::pc(&params, sw);
            assert_relative_eq!(BrooksCorey::sw(&params, pc), sw, max_relative = 1e-12);
            assert_relative_eq!(
                BrooksCorey::dpc_dsw(&params, sw) * BrooksCorey::dsw_dpc(&params, pc),
                1.0,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn analytic_derivatives() {
        let params = params();
        let sw = 0.3;
        let (_, dpc_dsw) = first_derivative(|sw| BrooksCorey::pc(&params, sw), sw);
        assert_relative_eq!(dpc_dsw, BrooksCorey::dpc_dsw(&params, sw), max_relative = 1e-12);

        let pc = 2e4;
        let (_, dsw_dpc) = first_derivative(|pc| BrooksCorey::sw(&params, pc), pc);
        assert_relative_eq!(dsw_dpc, BrooksCorey::dsw_dpc(&params, pc), max_relative = 1e-12);
    }

    #[test]
    fn calibrated_params_with_dual_state() {
        // f64 parameters evaluated with dual number saturations
        let params = params();
        let sw = 0.5;
        let (_, dkrw) = first_derivative(|sw| BrooksCorey::krw(&params, sw), sw);
        assert_relative_eq!(dkrw, 4.0 * 0.125, max_relative = 1e-12);

        let (_, dkrn) = first_derivative(|sw| BrooksCorey::krn(&params, sw), sw);
        // d/dsw (1 - sw)^2 (1 - sw^2) at 0.5
        assert_relative_eq!(dkrn, -2.0 * 0.5 * 0.75 - 0.25 * 1.0, max_relative = 1e-12);

        let (_, dpc, d2pc) = second_derivative(|sw| BrooksCorey::pc(&params, sw), sw);
        assert_relative_eq!(dpc, BrooksCorey::dpc_dsw(&params, sw), max_relative = 1e-12);
        let (_, d2pc_h) = first_derivative(|sw| BrooksCorey::dpc_dsw(&params, sw), sw);
        assert_relative_eq!(d2pc, d2pc_h, max_relative = 1e-12);
    }

    #[test]
    fn parameter_derivatives() {
        // d pc / d pe = pc / pe
        let sw = Dual64::from(0.4);
        let (pc, dpc_dpe) = first_derivative(
            |pe| BrooksCorey::pc(&BrooksCoreyParams::new(pe, Dual64::from(2.0)), sw),
            5e3,
        );
        assert_relative_eq!(dpc_dpe, pc / 5e3, max_relative = 1e-12);
    }

    #[test]
    fn relative_permeabilities() {
        let params = params();
        assert_eq!(BrooksCorey::krw(&params, 0.0), 0.0);
        assert_eq!(BrooksCorey::krw(&params, 1.0), 1.0);
        assert_eq!(BrooksCorey::krn(&params, 0.0), 1.0);
        assert_eq!(BrooksCorey::krn(&params, 1.0), 0.0);
        assert_eq!(BrooksCorey::krw(&params, -0.1), 0.0);
        assert_eq!(BrooksCorey::krn(&params, 1.1), 0.0);

        // exponents 2/alpha + 3 = 4 and 2/alpha + 1 = 2
        assert_relative_eq!(BrooksCorey::krw(&params, 0.5), 0.0625, max_relative = 1e-14);
        assert_relative_eq!(BrooksCorey::krn(&params, 0.5), 0.1875, max_relative = 1e-14);

        let saturations: Vec<f64> = (0..=20).map(|i| i as f64 * 0.05).collect();
        for sw in saturations.windows(2) {
            assert!(BrooksCorey::krw(&params, sw[1]) > BrooksCorey::krw(&params, sw[0]));
            assert!(BrooksCorey::krn(&params, sw[1]) < BrooksCorey::krn(&params, sw[0]));
        }
    }

    #[test]
    fn regularized_params_share_base_relation() {
        let regularized: RegularizedBrooksCoreyParams = RegularizedBrooksCoreyParams::new(5e3, 2.0);
        let sw = 0.25;
        assert_eq!(
            BrooksCorey::pc(&regularized, sw),
            BrooksCorey::pc(&params(), sw)
        );
    }
}
