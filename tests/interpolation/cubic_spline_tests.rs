use estuary::interpolation::errors::InterpolationError;
use estuary::interpolation::spline::cubic::{interpolate, CubicSpline, SplineCfg};
use estuary::interpolation::Interpolator;
use approx::assert_abs_diff_eq;
use rstest::rstest;

type EstuaryResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-12;
const RTOL: f64 = 0.0;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL + RTOL * b.abs()
}

#[inline]
fn assert_vec_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (i, (ai, bi)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            approx_eq(*ai, *bi),
            "mismatch at {}: left={}, right={}, ATOL={}, RTOL={}",
            i, ai, bi, ATOL, RTOL
        );
    }
}

fn grid(a: f64, b: f64, n: usize) -> Vec<f64> {
    let h = (b - a) / n as f64;
    (0..=n).map(|i| a + i as f64 * h).collect()
}

#[test]
fn two_intervals_closed_form() -> EstuaryResult {
    super::init_logging();
    let y = [0.0, 1.0, 0.0];

    let mut s = CubicSpline::new();
    s.init(0.0, 2.0, 2, &y)?;

    // yprime[1] = (3/h (y2 - y0 - h/3 yprime0) - yprime2) / 4
    assert_vec_close(s.derivatives(), &[0.0, 0.0, 0.0]);
    assert!(approx_eq(s.eval(1.0)?, 1.0));
    Ok(())
}

#[test]
fn two_intervals_with_boundary_slopes() -> EstuaryResult {
    let y = [1.0, 2.0, 5.0];

    let mut s = CubicSpline::new();
    s.init(0.0, 1.0, 2, &y)?;
    s.set_boundary_conditions(1.0, 3.0)?;

    let h = 0.5;
    let expected = (3.0 / h * (y[2] - y[0] - h / 3.0 * 1.0) - 3.0) / 4.0;
    assert!(approx_eq(s.derivatives()[1], expected));
    Ok(())
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(5)]
#[case(16)]
fn exact_hits(#[case] n: usize) -> EstuaryResult {
    let x = grid(-1.0, 2.0, n);
    let y: Vec<f64> = x.iter().map(|&t| (1.3 * t).sin() + 0.2 * t).collect();

    let mut s = CubicSpline::new();
    s.init(-1.0, 2.0, n, &y)?;

    assert_vec_close(&s.eval_many(&x)?, &y);
    Ok(())
}

#[test]
fn boundary_derivatives_default_to_zero() -> EstuaryResult {
    let y = [0.3, -1.2, 2.5, 0.0, 4.1, 1.7];

    let mut s = CubicSpline::new();
    s.init(0.0, 5.0, 5, &y)?;

    let d = s.derivatives();
    assert_eq!(d.len(), 6);
    assert_eq!(d[0], 0.0);
    assert_eq!(d[5], 0.0);
    Ok(())
}

#[test]
fn set_boundary_conditions_resolves_interior() -> EstuaryResult {
    let y = [0.3, -1.2, 2.5, 0.0, 4.1, 1.7];

    let mut s = CubicSpline::new();
    s.init(0.0, 5.0, 5, &y)?;
    let before = s.derivatives().to_vec();

    s.set_boundary_conditions(1.5, -2.0)?;
    let after = s.derivatives();

    assert_eq!(after[0], 1.5);
    assert_eq!(after[5], -2.0);
    assert!((after[1] - before[1]).abs() > 1e-6);
    assert!((after[4] - before[4]).abs() > 1e-6);

    // interior rows of the tridiagonal system, h = 1
    for i in 1..5 {
        let r = after[i - 1] + 4.0 * after[i] + after[i + 1] - 3.0 * (y[i + 1] - y[i - 1]);
        assert_abs_diff_eq!(r, 0.0, epsilon = 1e-10);
    }
    Ok(())
}

#[test]
fn flat_outside_domain() -> EstuaryResult {
    let y = [2.0, -1.0, 4.0, 3.0];

    let mut s = CubicSpline::new();
    s.init(1.0, 4.0, 3, &y)?;

    assert_eq!(s.eval(0.999)?, 2.0);
    assert_eq!(s.eval(-100.0)?, 2.0);
    assert_eq!(s.eval(f64::NEG_INFINITY)?, 2.0);
    assert_eq!(s.eval(4.001)?, 3.0);
    assert_eq!(s.eval(1e9)?, 3.0);
    Ok(())
}

#[test]
fn linear_function_with_matching_slopes() -> EstuaryResult {
    // y  = 3x - 1
    // y' = 3
    let x = grid(-2.0, 4.0, 6);
    let y: Vec<f64> = x.iter().map(|&t| 3.0 * t - 1.0).collect();

    let mut s = CubicSpline::new();
    s.init(-2.0, 4.0, 6, &y)?;
    s.set_boundary_conditions(3.0, 3.0)?;

    let x_eval = [-2.0, -1.3, 0.0, 0.25, 1.7, 3.99, 4.0];
    let y_expected: Vec<f64> = x_eval.iter().map(|&t| 3.0 * t - 1.0).collect();
    assert_vec_close(&s.eval_many(&x_eval)?, &y_expected);
    Ok(())
}

#[test]
fn reproduces_cubic_with_exact_slopes() -> EstuaryResult {
    // y  = x^3 - 2x + 1
    // y' = 3x^2 - 2
    let f = |t: f64| t * t * t - 2.0 * t + 1.0;
    let x = grid(0.0, 3.0, 6);
    let y: Vec<f64> = x.iter().map(|&t| f(t)).collect();

    let mut s = CubicSpline::new();
    s.init(0.0, 3.0, 6, &y)?;
    s.set_boundary_conditions(-2.0, 25.0)?;

    for &t in &[0.1, 0.3, 1.25, 1.7, 2.2, 2.9] {
        assert_abs_diff_eq!(s.eval(t)?, f(t), epsilon = 1e-10);
    }
    for (i, &t) in x.iter().enumerate() {
        assert_abs_diff_eq!(s.derivatives()[i], 3.0 * t * t - 2.0, epsilon = 1e-10);
    }
    Ok(())
}

#[test]
fn single_interval_is_hermite() -> EstuaryResult {
    let mut s = CubicSpline::new();
    s.init(0.0, 1.0, 1, &[2.0, 5.0])?;

    assert_vec_close(s.derivatives(), &[0.0, 0.0]);
    assert!(approx_eq(s.eval(0.5)?, 3.5));

    s.set_boundary_conditions(3.0, 3.0)?;
    assert!(approx_eq(s.eval(0.25)?, 2.75));
    Ok(())
}

#[test]
fn reinit_resets_boundary_slopes() -> EstuaryResult {
    let y = [0.0, 1.0, 0.0, 1.0];

    let mut s = CubicSpline::new();
    s.init(0.0, 3.0, 3, &y)?;
    s.set_boundary_conditions(5.0, 5.0)?;
    s.init(0.0, 3.0, 3, &y)?;

    assert_eq!(s.derivatives()[0], 0.0);
    assert_eq!(s.derivatives()[3], 0.0);
    Ok(())
}

#[test]
fn eval_before_init() {
    let s = CubicSpline::new();
    assert!(matches!(s.eval(0.0), Err(InterpolationError::NotInitialized)));
}

#[test]
fn boundary_conditions_before_init() {
    let mut s = CubicSpline::new();
    let err = s.set_boundary_conditions(1.0, 1.0).unwrap_err();
    assert!(matches!(err, InterpolationError::NotInitialized));
}

#[test]
fn eval_nan() -> EstuaryResult {
    let mut s = CubicSpline::new();
    s.init(0.0, 1.0, 1, &[0.0, 1.0])?;
    assert!(matches!(s.eval(f64::NAN), Err(InterpolationError::NonFiniteValue { .. })));
    Ok(())
}

#[test]
fn init_rejects_bad_input() {
    let mut s = CubicSpline::new();

    let err = s.init(0.0, 1.0, 3, &[0.0, 1.0, 2.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { x_len: 4, y_len: 3 }));

    let err = s.init(0.0, 1.0, 0, &[0.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidIntervalCount { got: 0 }));

    let err = s.init(1.0, 1.0, 1, &[0.0, 1.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidDomain { .. }));

    let err = s.init(0.0, 1.0, 1, &[0.0, f64::NAN]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 1 }));

    // failed init leaves the spline empty
    assert!(s.grid().is_none());
}

#[test]
fn report_metadata() -> EstuaryResult {
    let y = [0.0, 1.0, 4.0];
    let x_eval = [0.5, 1.5, 3.0];

    let cfg = SplineCfg::new()
        .set_grid(0.0, 2.0, 2)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    assert_eq!(rep.algorithm_name, "cubic spline");
    assert_eq!(rep.n_provided, 3);
    assert_eq!(rep.n_evaluated, 3);
    assert_eq!(rep.evaluated[2], 4.0);
    Ok(())
}

#[test]
fn cfg_applies_boundary_slopes() -> EstuaryResult {
    let x = grid(-2.0, 4.0, 6);
    let y: Vec<f64> = x.iter().map(|&t| 3.0 * t - 1.0).collect();
    let x_eval = [-1.5, 0.5, 2.75];

    let cfg = SplineCfg::new()
        .with_boundary_slopes(3.0, 3.0)
        .set_grid(-2.0, 4.0, 6)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    let y_expected: Vec<f64> = x_eval.iter().map(|&t| 3.0 * t - 1.0).collect();
    assert_vec_close(&rep.evaluated, &y_expected);
    Ok(())
}

#[test]
fn cfg_unequal_length() {
    let y = [0.0, 1.0];
    let err = SplineCfg::new()
        .set_grid(0.0, 1.0, 2).unwrap()
        .set_y(&y)
        .unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { x_len: 3, y_len: 2 }));
}

#[test]
fn cfg_without_grid() {
    let y = [0.0, 1.0];
    let cfg = SplineCfg::new().set_y(&y).unwrap();
    let err = interpolate(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::MissingKnots));
}

#[test]
fn narrow_grid_is_accepted() -> EstuaryResult {
    let y = [0.0, 1.0, 2.0];
    let cfg = SplineCfg::new()
        .set_grid(0.0, 1e-12, 2)?
        .set_y(&y)?;

    let spline = CubicSpline::from_cfg(cfg)?;
    let g = *spline.grid().ok_or(InterpolationError::NotInitialized)?;
    for (i, &yi) in y.iter().enumerate() {
        assert!(approx_eq(spline.eval(g.knot(i))?, yi));
    }

    let mut direct = CubicSpline::new();
    direct.init(0.0, 1e-12, 2, &y)?;
    assert_vec_close(direct.derivatives(), spline.derivatives());
    Ok(())
}
