//! Nutation in longitude and obliquity.
//!
//! The 30 largest lunisolar terms of IAU 2000B (IERS Conventions 2010,
//! Table 5.3b). The dropped terms are each below 0.0015″, well inside
//! what a sidereal-time correction for chart work can resolve.

use std::f64::consts::TAU;

const AS2RAD: f64 = TAU / 1_296_000.0;

/// Delaunay argument polynomials in arcseconds, constant term first.
/// Rows: l, l′, F, D, Ω (IERS Conventions 2010, Table 5.2e).
const DELAUNAY_ARCSEC: [[f64; 5]; 5] = [
    [485868.249036, 1717915923.2178, 31.8792, 0.051635, -0.00024470],
    [1287104.79305, 129596581.0481, -0.5532, 0.000136, -0.00001149],
    [335779.526232, 1739527262.8478, -12.7512, -0.001037, 0.00000417],
    [1072260.70369, 1602961601.2090, -6.3706, 0.006593, -0.00003169],
    [450160.398036, -6962890.5431, 7.4722, 0.007702, -0.00005939],
];

/// The five Delaunay arguments `[l, l′, F, D, Ω]` in radians.
///
/// `t` is Julian centuries since J2000.0.
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    DELAUNAY_ARCSEC.map(|c| c.iter().rev().fold(0.0, |acc, k| acc * t + k) * AS2RAD)
}

/// `[nl, nl′, nF, nD, nΩ, S, S′, C, C′]`, amplitudes in 0.1 μas.
#[rustfmt::skip]
static TERMS: [[i64; 9]; 30] = [
    [ 0,  0,  0,  0,  1, -172064161, -174666, 92052331,  9086],
    [ 0,  0,  2, -2,  2,  -13170906,   -1675,  5730336, -3015],
    [ 0,  0,  2,  0,  2,   -2276413,    -234,   978459,  -485],
    [ 0,  0,  0,  0,  2,    2074554,     207,  -897492,   470],
    [ 0,  1,  0,  0,  0,    1475877,   -3633,    73871,  -184],
    [ 0,  1,  2, -2,  2,    -516821,    1226,   224386,  -677],
    [ 1,  0,  0,  0,  0,     711159,      73,    -6750,     0],
    [ 0,  0,  2,  0,  1,    -387298,    -367,   200728,    18],
    [ 1,  0,  2,  0,  2,    -301461,     -36,   129025,   -63],
    [ 0, -1,  2, -2,  2,     215829,    -494,   -95929,   299],
    [ 0,  0,  2, -2,  1,     128227,     137,   -68982,    -9],
    [-1,  0,  2,  0,  2,     123457,      11,   -53311,    32],
    [-1,  0,  0,  2,  0,     156994,      10,    -1235,     0],
    [ 1,  0,  0,  0,  1,      63110,      63,   -33228,     0],
    [-1,  0,  0,  0,  1,     -57976,     -63,    31429,     0],
    [-1,  0,  2,  2,  2,     -59641,     -11,    25543,   -11],
    [ 1,  0,  2,  0,  1,     -51613,     -42,    26366,     0],
    [-2,  0,  2,  0,  1,      45893,      50,   -24236,   -10],
    [ 0,  0,  0,  2,  0,      63384,      11,    -1220,     0],
    [ 0,  0,  2,  2,  2,     -38571,      -1,    16452,   -11],
    [ 0, -2,  2, -2,  2,      32481,       0,   -13870,     0],
    [-2,  0,  0,  2,  0,     -47722,       0,      477,     0],
    [ 2,  0,  2,  0,  2,     -31046,      -1,    13238,   -11],
    [ 1,  0,  2, -2,  2,      28593,       0,   -12338,    10],
    [-1,  0,  2,  0,  1,      20441,      21,   -10758,     0],
    [ 2,  0,  0,  0,  0,      29243,       0,     -609,     0],
    [ 0,  0,  2,  0,  0,      25887,       0,     -550,     0],
    [ 0,  1,  0,  0,  1,     -14053,     -25,     8551,    -2],
    [-1,  0,  0,  2,  1,      15164,      10,    -8001,     0],
    [ 0,  2,  2, -2,  2,     -15794,      72,     6850,   -42],
];

/// Nutation angles in arcseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Δψ, nutation in longitude.
    pub longitude_arcsec: f64,
    /// Δε, nutation in obliquity.
    pub obliquity_arcsec: f64,
}

impl Nutation {
    /// Equation of the equinoxes Δψ·cos ε in radians.
    pub fn equation_of_equinoxes_rad(&self, obliquity_rad: f64) -> f64 {
        self.longitude_arcsec * AS2RAD * obliquity_rad.cos()
    }
}

/// Nutation at `t` Julian centuries since J2000.0.
pub fn nutation(t: f64) -> Nutation {
    let args = fundamental_arguments(t);
    let (dpsi, deps) = TERMS.iter().fold((0.0, 0.0), |(dpsi, deps), row| {
        let arg: f64 = row[..5]
            .iter()
            .zip(args.iter())
            .map(|(&n, a)| n as f64 * a)
            .sum();
        (
            dpsi + (row[5] as f64 + row[6] as f64 * t) * arg.sin(),
            deps + (row[7] as f64 + row[8] as f64 * t) * arg.cos(),
        )
    });
    // 0.1 μas → arcsec, plus the fixed IAU 2000B offsets.
    Nutation {
        longitude_arcsec: dpsi * 1e-7 - 0.000_135,
        obliquity_arcsec: deps * 1e-7 - 0.000_388,
    }
}
