/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::cie1976::euclidean_distance;
use crate::err::DeltaEError;
use crate::luo2006::delta_e_ucs;
use crate::{
    Cie1994Options, Cie2000Options, CmcOptions, DeltaEMethod, DeltaEOptions, Jab, Lab, UcsSpace,
    delta_e_cie1994, delta_e_cie2000, delta_e_cmc,
};
use ndarray::{ArrayBase, ArrayD, Axis, Data, Dimension, IxDyn, Zip};
use num_traits::AsPrimitive;

/// Colour difference formula with its options resolved
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DeltaEFormula {
    Cie1976,
    Cie1994(Cie1994Options),
    Cie2000(Cie2000Options),
    Cmc(CmcOptions),
    /// Luo et al. (2006) distance in the given uniform colour space
    Luo2006(UcsSpace),
}

impl DeltaEMethod {
    /// Builds the formula, taking from `options` only the fields this method
    /// accepts. Other set fields are dropped.
    pub fn configure(self, options: &DeltaEOptions) -> DeltaEFormula {
        let accepted = self.accepted_options();
        let ignored = options
            .set_fields()
            .into_iter()
            .filter(|field| !accepted.contains(field))
            .collect::<Vec<_>>();
        if !ignored.is_empty() {
            tracing::debug!(
                method = self.name(),
                ?ignored,
                "dropping options the method does not accept"
            );
        }

        match self {
            DeltaEMethod::Cie1976 => DeltaEFormula::Cie1976,
            DeltaEMethod::Cie1994 => DeltaEFormula::Cie1994(options.cie1994()),
            DeltaEMethod::Cie2000 => DeltaEFormula::Cie2000(options.cie2000()),
            DeltaEMethod::Cmc => DeltaEFormula::Cmc(options.cmc()),
            DeltaEMethod::Cam02Lcd => DeltaEFormula::Luo2006(UcsSpace::Cam02Lcd),
            DeltaEMethod::Cam02Scd => DeltaEFormula::Luo2006(UcsSpace::Cam02Scd),
            DeltaEMethod::Cam02Ucs => DeltaEFormula::Luo2006(UcsSpace::Cam02Ucs),
            DeltaEMethod::Cam16Lcd => DeltaEFormula::Luo2006(UcsSpace::Cam16Lcd),
            DeltaEMethod::Cam16Scd => DeltaEFormula::Luo2006(UcsSpace::Cam16Scd),
            DeltaEMethod::Cam16Ucs => DeltaEFormula::Luo2006(UcsSpace::Cam16Ucs),
        }
    }
}

impl DeltaEFormula {
    /// Difference of a single pair of triplets
    #[inline]
    pub fn compute(&self, a: [f64; 3], b: [f64; 3]) -> f64 {
        match *self {
            DeltaEFormula::Cie1976 => euclidean_distance(a, b),
            DeltaEFormula::Cie1994(options) => {
                delta_e_cie1994(Lab::from(a), Lab::from(b), options)
            }
            DeltaEFormula::Cie2000(options) => {
                delta_e_cie2000(Lab::from(a), Lab::from(b), options)
            }
            DeltaEFormula::Cmc(options) => delta_e_cmc(Lab::from(a), Lab::from(b), options),
            DeltaEFormula::Luo2006(space) => delta_e_ucs(Jab::from(a), Jab::from(b), space),
        }
    }

    /// Differences of interleaved triplets.
    ///
    /// `a` and `b` must have the same length, multiple of 3,
    /// `dst` receives one value per triplet.
    pub fn compute_slice<T>(&self, a: &[T], b: &[T], dst: &mut [T]) -> Result<(), DeltaEError>
    where
        T: Copy + 'static + AsPrimitive<f64>,
        f64: AsPrimitive<T>,
    {
        if a.len() != b.len() {
            return Err(DeltaEError::LaneSizeMismatch);
        }
        if a.len() % 3 != 0 {
            return Err(DeltaEError::LaneMultipleOfChannels);
        }
        if dst.len() != a.len() / 3 {
            return Err(DeltaEError::LaneSizeMismatch);
        }

        for ((a, b), dst) in a
            .chunks_exact(3)
            .zip(b.chunks_exact(3))
            .zip(dst.iter_mut())
        {
            let a = [a[0].as_(), a[1].as_(), a[2].as_()];
            let b = [b[0].as_(), b[1].as_(), b[2].as_()];
            *dst = self.compute(a, b).as_();
        }
        Ok(())
    }

    /// Differences of n-dimensional arrays holding triplets on the last axis.
    ///
    /// Leading axes broadcast against each other, the result has the
    /// broadcast shape without the last axis. A pair of single triplets
    /// yields a 0-dimensional array.
    pub fn compute_nd<T, S1, S2, D1, D2>(
        &self,
        a: &ArrayBase<S1, D1>,
        b: &ArrayBase<S2, D2>,
    ) -> Result<ArrayD<T>, DeltaEError>
    where
        T: Copy + 'static + AsPrimitive<f64>,
        f64: AsPrimitive<T>,
        S1: Data<Elem = T>,
        S2: Data<Elem = T>,
        D1: Dimension,
        D2: Dimension,
    {
        let a_dyn = a.view().into_dyn();
        let b_dyn = b.view().into_dyn();
        check_triplet_axis(a_dyn.shape())?;
        check_triplet_axis(b_dyn.shape())?;

        let incompatible =
            || DeltaEError::IncompatibleShapes(a_dyn.shape().to_vec(), b_dyn.shape().to_vec());
        let shape = broadcast_shape(a_dyn.shape(), b_dyn.shape()).ok_or_else(incompatible)?;
        let a_view = a_dyn
            .broadcast(IxDyn(&shape))
            .ok_or_else(incompatible)?;
        let b_view = b_dyn
            .broadcast(IxDyn(&shape))
            .ok_or_else(incompatible)?;

        let triplets = Axis(shape.len() - 1);
        Ok(Zip::from(a_view.lanes(triplets))
            .and(b_view.lanes(triplets))
            .map_collect(|a, b| {
                let a = [a[0].as_(), a[1].as_(), a[2].as_()];
                let b = [b[0].as_(), b[1].as_(), b[2].as_()];
                self.compute(a, b).as_()
            }))
    }
}

#[inline]
fn check_triplet_axis(shape: &[usize]) -> Result<(), DeltaEError> {
    match shape.last() {
        Some(3) => Ok(()),
        Some(&len) => Err(DeltaEError::InvalidTripletAxis(len)),
        None => Err(DeltaEError::InvalidTripletAxis(0)),
    }
}

/// Common shape of two arrays, aligned on trailing axes, size 1 axes stretch
fn broadcast_shape(a: &[usize], b: &[usize]) -> Option<Vec<usize>> {
    let ndim = a.len().max(b.len());
    let mut shape = vec![0usize; ndim];
    for (i, dst) in shape.iter_mut().enumerate() {
        let da = (i + a.len()).checked_sub(ndim).map_or(1, |k| a[k]);
        let db = (i + b.len()).checked_sub(ndim).map_or(1, |k| b[k]);
        *dst = if da == db || db == 1 {
            da
        } else if da == 1 {
            db
        } else {
            return None;
        };
    }
    Some(shape)
}

/// Colour difference between two triplets using the method named `method`.
///
/// Names are matched ignoring case, see [DeltaEMethod] for the registry.
/// Options the method does not accept are ignored.
///
/// # Example
/// ```
/// use moxdelta::{DeltaEOptions, delta_e};
///
/// let a = [100.00000000, 21.57210357, 272.22819350];
/// let b = [100.00000000, 426.67945353, 72.39590835];
/// let d = delta_e(a, b, "CIE 2000", &DeltaEOptions::default()).unwrap();
/// assert!((d - 94.0356490).abs() < 1e-6);
/// ```
pub fn delta_e(
    a: impl Into<[f64; 3]>,
    b: impl Into<[f64; 3]>,
    method: &str,
    options: &DeltaEOptions,
) -> Result<f64, DeltaEError> {
    let formula = DeltaEMethod::from_name(method)?.configure(options);
    Ok(formula.compute(a.into(), b.into()))
}

/// Colour differences of interleaved triplets using the method named `method`
pub fn delta_e_slice<T>(
    a: &[T],
    b: &[T],
    dst: &mut [T],
    method: &str,
    options: &DeltaEOptions,
) -> Result<(), DeltaEError>
where
    T: Copy + 'static + AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    DeltaEMethod::from_name(method)?
        .configure(options)
        .compute_slice(a, b, dst)
}

/// Colour differences of n-dimensional arrays using the method named `method`
pub fn delta_e_nd<T, S1, S2, D1, D2>(
    a: &ArrayBase<S1, D1>,
    b: &ArrayBase<S2, D2>,
    method: &str,
    options: &DeltaEOptions,
) -> Result<ArrayD<T>, DeltaEError>
where
    T: Copy + 'static + AsPrimitive<f64>,
    f64: AsPrimitive<T>,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
    D1: Dimension,
    D2: Dimension,
{
    DeltaEMethod::from_name(method)?
        .configure(options)
        .compute_nd(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{delta_e_cam02_ucs, delta_e_cie1976};
    use ndarray::{Array1, Array2, Ix0, arr1, arr2};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const LAB_1: [f64; 3] = [100.00000000, 21.57210357, 272.22819350];
    const LAB_2: [f64; 3] = [100.00000000, 426.67945353, 72.39590835];
    const JAB_1: [f64; 3] = [54.90433134, -0.08450395, -0.06854831];
    const JAB_2: [f64; 3] = [54.90433134, -0.08442362, -0.06848314];

    fn de(a: [f64; 3], b: [f64; 3], method: &str) -> f64 {
        delta_e(a, b, method, &DeltaEOptions::default()).unwrap()
    }

    #[test]
    fn test_delta_e_worked_examples() {
        assert!((de(LAB_1, LAB_2, "CIE 2000") - 94.0356490).abs() < 1e-6);
        assert!((de(LAB_1, LAB_2, "CIE 1976") - 451.7133019).abs() < 1e-6);
        assert!((de(LAB_1, LAB_2, "CIE 1994") - 83.7792255).abs() < 1e-6);
        assert!((de(LAB_1, LAB_2, "CMC") - 172.7047713).abs() < 1e-6);
        let textiles = delta_e(LAB_1, LAB_2, "CIE 1994", &DeltaEOptions::textiles(false));
        assert!((textiles.unwrap() - 83.7792255).abs() < 1e-6);
        let textiles = delta_e(LAB_1, LAB_2, "CIE 1994", &DeltaEOptions::textiles(true));
        assert!((textiles.unwrap() - 88.3355531).abs() < 1e-6);

        let ucs = de(JAB_1, JAB_2, "CAM02-UCS");
        let lcd = de(JAB_1, JAB_2, "CAM16-LCD");
        assert!((ucs - 0.0001034).abs() < 1e-7);
        assert!((lcd - 0.0001034).abs() < 1e-7);
        assert!((ucs - lcd).abs() < 1e-12);
    }

    #[test]
    fn test_default_method_is_cie2000() {
        let formula = DeltaEMethod::default().configure(&DeltaEOptions::default());
        assert_eq!(formula, DeltaEFormula::Cie2000(Cie2000Options::default()));
        assert_eq!(formula.compute(LAB_1, LAB_2), de(LAB_1, LAB_2, "CIE 2000"));
    }

    #[test]
    fn test_dispatch_equivalence() {
        assert_eq!(de(LAB_1, LAB_2, "cie2000"), de(LAB_1, LAB_2, "CIE 2000"));
        assert_eq!(de(LAB_1, LAB_2, "cie1994"), de(LAB_1, LAB_2, "CIE 1994"));
        assert_eq!(de(LAB_1, LAB_2, "CIE1976"), de(LAB_1, LAB_2, "CIE 1976"));
        assert_eq!(
            de(JAB_1, JAB_2, "CAM02-UCS"),
            delta_e_cam02_ucs(Jab::from(JAB_1), Jab::from(JAB_2))
        );
        assert_eq!(
            de(LAB_1, LAB_2, "cie 1976"),
            delta_e_cie1976(Lab::from(LAB_1), Lab::from(LAB_2))
        );
        let typed = delta_e(
            Lab::from(LAB_1),
            Lab::from(LAB_2),
            "CMC",
            &DeltaEOptions::default(),
        );
        assert_eq!(typed, Ok(de(LAB_1, LAB_2, "cmc")));
    }

    #[test]
    fn test_unknown_method() {
        assert_eq!(
            delta_e(LAB_1, LAB_2, "CIE 2001", &DeltaEOptions::default()),
            Err(DeltaEError::UnknownMethod("CIE 2001".to_string()))
        );
        let mut dst = [0f64; 1];
        assert!(delta_e_slice(&LAB_1, &LAB_2, &mut dst, "Lab", &DeltaEOptions::default()).is_err());
    }

    #[test]
    fn test_unaccepted_options_are_ignored() {
        let options = DeltaEOptions {
            textiles: Some(true),
            l: Some(7.),
            c: Some(3.),
        };
        assert_eq!(DeltaEMethod::Cie1976.configure(&options), DeltaEFormula::Cie1976);
        assert_eq!(
            DeltaEMethod::Cie1994.configure(&options),
            DeltaEFormula::Cie1994(Cie1994Options { textiles: true })
        );
        assert_eq!(
            DeltaEMethod::Cmc.configure(&options),
            DeltaEFormula::Cmc(CmcOptions { l: 7., c: 3. })
        );
        assert_eq!(
            DeltaEMethod::Cam16Scd.configure(&options),
            DeltaEFormula::Luo2006(UcsSpace::Cam16Scd)
        );
        assert_eq!(
            delta_e(JAB_1, JAB_2, "CAM02-SCD", &options),
            Ok(de(JAB_1, JAB_2, "CAM02-SCD"))
        );
        assert_eq!(
            delta_e(LAB_1, LAB_2, "CIE 1976", &options),
            Ok(de(LAB_1, LAB_2, "CIE 1976"))
        );
    }

    #[test]
    fn test_l_and_c_reach_cie2000_and_cmc() {
        let options = DeltaEOptions::weights(2., 1.5);
        let cie2000 = delta_e(LAB_1, LAB_2, "CIE 2000", &options).unwrap();
        assert!((cie2000 - 93.7709416).abs() < 1e-6);
        let lab1 = [50., 20., 10.];
        let lab2 = [55., 18., 12.];
        let cmc = delta_e(lab1, lab2, "CMC", &DeltaEOptions::weights(1., 1.)).unwrap();
        assert!((cmc - 5.4187032).abs() < 1e-6);
    }

    #[test]
    fn test_identity_for_every_method() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let a = [
                rng.random_range(0f64..100f64),
                rng.random_range(-128f64..128f64),
                rng.random_range(-128f64..128f64),
            ];
            for method in DeltaEMethod::ALL {
                let d = de(a, a, method.name());
                assert_eq!(d, 0., "{method} {a:?}");
            }
        }
    }

    #[test]
    fn test_non_finite_inputs_do_not_panic() {
        let cases = [-1., 0., 1., f64::NEG_INFINITY, f64::INFINITY, f64::NAN];
        let options = DeltaEOptions::default();
        for method in DeltaEMethod::ALL {
            let formula = method.configure(&options);
            for x in cases {
                for y in cases {
                    for z in cases {
                        let a = [x, y, z];
                        _ = formula.compute(a, a);
                        _ = formula.compute(a, [z, x, y]);
                    }
                }
            }
        }
    }

    #[test]
    fn test_nan_propagates() {
        for method in DeltaEMethod::ALL {
            let d = de([f64::NAN, 0., 0.], [50., 0., 0.], method.name());
            assert!(d.is_nan(), "{method}");
        }
    }

    #[test]
    fn test_slice() {
        let a = [LAB_1, LAB_1, LAB_2].concat();
        let b = [LAB_2, LAB_1, LAB_1].concat();
        let mut dst = vec![0f64; 3];
        delta_e_slice(&a, &b, &mut dst, "CIE 1976", &DeltaEOptions::default()).unwrap();
        assert!((dst[0] - 451.7133019).abs() < 1e-6);
        assert_eq!(dst[1], 0.);
        assert_eq!(dst[0], dst[2]);
    }

    #[test]
    fn test_slice_f32() {
        let a = JAB_1.map(|v| v as f32);
        let b = [54.90433134f32, -0.08442362, -0.06848314];
        let mut dst = [0f32; 1];
        delta_e_slice(&a, &b, &mut dst, "CAM02-UCS", &DeltaEOptions::default()).unwrap();
        assert!((dst[0] - 0.0001034).abs() < 1e-5);
    }

    #[test]
    fn test_slice_lane_checks() {
        let formula = DeltaEMethod::Cie2000.configure(&DeltaEOptions::default());
        let mut dst = [0f64; 2];
        assert_eq!(
            formula.compute_slice(&[0f64; 6], &[0f64; 3], &mut dst),
            Err(DeltaEError::LaneSizeMismatch)
        );
        assert_eq!(
            formula.compute_slice(&[0f64; 5], &[0f64; 5], &mut dst),
            Err(DeltaEError::LaneMultipleOfChannels)
        );
        assert_eq!(
            formula.compute_slice(&[0f64; 9], &[0f64; 9], &mut dst),
            Err(DeltaEError::LaneSizeMismatch)
        );
        assert_eq!(formula.compute_slice(&[0f64; 6], &[0f64; 6], &mut dst), Ok(()));
    }

    #[test]
    fn test_nd_single_triplet() {
        let a = arr1(&LAB_1);
        let b = arr1(&LAB_2);
        let d = delta_e_nd(&a, &b, "CIE 2000", &DeltaEOptions::default()).unwrap();
        assert_eq!(d.ndim(), 0);
        let d = d.into_dimensionality::<Ix0>().unwrap().into_scalar();
        assert!((d - 94.0356490).abs() < 1e-6);
    }

    #[test]
    fn test_nd_shapes() {
        let a = Array2::from_shape_fn((6, 3), |(_, k)| JAB_1[k]);
        let b = Array2::from_shape_fn((6, 3), |(_, k)| JAB_2[k]);
        let d = delta_e_nd(&a, &b, "CAM02-LCD", &DeltaEOptions::default()).unwrap();
        assert_eq!(d.shape(), &[6]);
        for v in d.iter() {
            assert!((v - 0.00010344).abs() < 1e-7);
        }

        let a = a.into_shape_with_order((2, 3, 3)).unwrap();
        let b = b.into_shape_with_order((2, 3, 3)).unwrap();
        let d = delta_e_nd(&a, &b, "CAM02-LCD", &DeltaEOptions::default()).unwrap();
        assert_eq!(d.shape(), &[2, 3]);
        for v in d.iter() {
            assert!((v - 0.00010344).abs() < 1e-7);
        }
    }

    #[test]
    fn test_nd_matches_slice() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = Array1::from_shape_fn(12 * 3, |i| match i % 3 {
            0 => rng.random_range(0f64..100f64),
            _ => rng.random_range(-100f64..100f64),
        });
        let b = a.map(|v| v * 0.9 + 1.);
        for method in DeltaEMethod::ALL {
            let formula = method.configure(&DeltaEOptions::default());
            let mut flat = vec![0f64; 12];
            formula
                .compute_slice(a.as_slice().unwrap(), b.as_slice().unwrap(), &mut flat)
                .unwrap();
            let a3 = a.view().into_shape_with_order((4, 3, 3)).unwrap();
            let b3 = b.view().into_shape_with_order((4, 3, 3)).unwrap();
            let nd = formula.compute_nd(&a3, &b3).unwrap();
            assert_eq!(nd.shape(), &[4, 3]);
            for (x, y) in nd.iter().zip(flat.iter()) {
                assert_eq!(x, y, "{method}");
            }
        }
    }

    #[test]
    fn test_nd_broadcasting() {
        let reference = arr1(&LAB_1);
        let samples = arr2(&[LAB_1, LAB_2, [50., 0., 0.], [50., 10., -10.]]);
        let d = delta_e_nd(&reference, &samples, "CIE 1976", &DeltaEOptions::default()).unwrap();
        assert_eq!(d.shape(), &[4]);
        assert_eq!(d[[0]], 0.);
        assert!((d[[1]] - 451.7133019).abs() < 1e-6);

        let column = Array2::from_shape_fn((2, 3), |(i, k)| [LAB_1, LAB_2][i][k])
            .into_shape_with_order((2, 1, 3))
            .unwrap();
        let d = delta_e_nd(&column, &samples, "CIE 1976", &DeltaEOptions::default()).unwrap();
        assert_eq!(d.shape(), &[2, 4]);
        assert_eq!(d[[0, 0]], 0.);
        assert_eq!(d[[1, 1]], 0.);
        assert_eq!(d[[0, 1]], d[[1, 0]]);
    }

    #[test]
    fn test_nd_shape_errors() {
        let options = DeltaEOptions::default();
        let a = Array2::<f64>::zeros((2, 3));
        let b = Array2::<f64>::zeros((4, 3));
        assert_eq!(
            delta_e_nd(&a, &b, "CIE 2000", &options),
            Err(DeltaEError::IncompatibleShapes(vec![2, 3], vec![4, 3]))
        );
        let c = Array2::<f64>::zeros((2, 4));
        assert_eq!(
            delta_e_nd(&a, &c, "CIE 2000", &options),
            Err(DeltaEError::InvalidTripletAxis(4))
        );
        let scalar = ndarray::arr0(1f64);
        assert_eq!(
            delta_e_nd(&scalar, &a, "CIE 2000", &options),
            Err(DeltaEError::InvalidTripletAxis(0))
        );
    }

    #[test]
    fn test_broadcast_shape() {
        assert_eq!(broadcast_shape(&[3], &[4, 3]), Some(vec![4, 3]));
        assert_eq!(broadcast_shape(&[2, 1, 3], &[4, 3]), Some(vec![2, 4, 3]));
        assert_eq!(broadcast_shape(&[1, 3], &[5, 1, 3]), Some(vec![5, 1, 3]));
        assert_eq!(broadcast_shape(&[2, 3], &[4, 3]), None);
        assert_eq!(broadcast_shape(&[0, 3], &[1, 3]), Some(vec![0, 3]));
    }
}
