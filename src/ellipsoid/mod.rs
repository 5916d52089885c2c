//! Biaxial ellipsoid of revolution, and the handful of well-known instances
//! the built-in operator methods need.

use crate::Error;
use log::warn;
use std::f64::consts::FRAC_PI_2;

/// A biaxial ellipsoid of revolution, defined by its semimajor axis and
/// flattening.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    f: f64,
}

/// GRS80 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        Ellipsoid::named("GRS80").expect("GRS80 is always resolvable")
    }
}

impl Ellipsoid {
    /// User defined ellipsoid, given its semimajor axis and flattening directly.
    #[must_use]
    pub fn new(semimajor_axis: f64, flattening: f64) -> Ellipsoid {
        Ellipsoid {
            a: semimajor_axis,
            f: flattening,
        }
    }

    /// User defined ellipsoid, given its semimajor axis and *reciprocal*
    /// flattening, `rf = 1/f`, as used in most geodetic catalogues.
    #[must_use]
    pub fn from_a_rf(semimajor_axis: f64, reciprocal_flattening: f64) -> Ellipsoid {
        Ellipsoid::new(semimajor_axis, 1.0 / reciprocal_flattening)
    }

    /// One of the well-known ellipsoids (`"GRS80"`, `"WGS84"`, `"intl"`), or
    /// a literal `"a, rf"` pair, optionally parenthesized.
    pub fn named(name: &str) -> Result<Ellipsoid, Error> {
        match name {
            "GRS80" => return Ok(Ellipsoid::from_a_rf(6_378_137.0, 298.257_222_100_882_7)),
            "WGS84" => return Ok(Ellipsoid::from_a_rf(6_378_137.0, 298.257_223_563)),
            "intl" => return Ok(Ellipsoid::from_a_rf(6_378_388.0, 297.0)),
            _ => {}
        }

        let mut literal = name.trim();
        if literal.starts_with('(') && literal.ends_with(')') {
            literal = &literal[1..literal.len() - 1];
        }

        let parts: Vec<&str> = literal.split(',').collect();
        if parts.len() == 2 {
            if let (Ok(a), Ok(rf)) = (parts[0].trim().parse::<f64>(), parts[1].trim().parse::<f64>())
            {
                return Ok(Ellipsoid::from_a_rf(a, rf));
            }
        }

        warn!("Unrecognized ellipsoid name: '{name}'");
        Err(Error::UnknownName(name.to_string()))
    }

    // ----- Eccentricities --------------------------------------------------

    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.f * (2.0 - self.f)
    }

    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_squared().sqrt()
    }

    #[must_use]
    pub fn second_eccentricity_squared(&self) -> f64 {
        let es = self.eccentricity_squared();
        es / (1.0 - es)
    }

    #[must_use]
    pub fn second_eccentricity(&self) -> f64 {
        self.second_eccentricity_squared().sqrt()
    }

    // ----- Axes and flattenings ---------------------------------------------

    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    #[must_use]
    pub fn flattening(&self) -> f64 {
        self.f
    }

    #[must_use]
    pub fn second_flattening(&self) -> f64 {
        let b = self.semiminor_axis();
        (self.a - b) / b
    }

    /// The third flattening, *n = (a - b) / (a + b) = f / (2 - f)*
    #[must_use]
    pub fn third_flattening(&self) -> f64 {
        self.f / (2.0 - self.f)
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        1.0 - self.f
    }

    // ----- Curvatures --------------------------------------------------------

    #[must_use]
    pub fn prime_vertical_radius_of_curvature(&self, latitude: f64) -> f64 {
        self.a / (1.0 - latitude.sin().powi(2) * self.eccentricity_squared()).sqrt()
    }

    #[must_use]
    pub fn meridian_radius_of_curvature(&self, latitude: f64) -> f64 {
        let num = self.a * (1.0 - self.eccentricity_squared());
        let denom = (1.0 - latitude.sin().powi(2) * self.eccentricity_squared()).powf(1.5);
        num / denom
    }

    /// The rectifying radius, *A*, following [Bowring (1983)](crate::bibliography::Bibliography::Bow83):
    /// the radius of a sphere with the same meridian circumference as this
    /// ellipsoid, truncated after the *n⁴* term.
    #[must_use]
    pub fn rectifying_radius_bowring(&self) -> f64 {
        let n = self.third_flattening();
        let m = 1.0 + n * n / 8.0;
        self.a * m * m / (1.0 + n)
    }

    /// The distance, *M*, along a meridian from the equator to `latitude`,
    /// following the [Bowring (1983)](crate::bibliography::Bibliography::Bow83) series.
    #[must_use]
    #[allow(non_snake_case)]
    pub fn meridian_latitude_to_distance(&self, latitude: f64) -> f64 {
        let n = self.third_flattening();
        let A = self.rectifying_radius_bowring();

        let B = 9.0 * (1.0 - 3.0 * n * n / 8.0);
        let (s, c) = (2.0 * latitude).sin_cos();
        let x = 1.0 + 13.0 / 12.0 * n * c;
        let y = 13.0 / 12.0 * n * s;
        let r = y.hypot(x);
        let v = y.atan2(x);
        let theta = latitude - B * r.powf(-2.0 / 13.0) * (2.0 * v / 13.0).sin();
        A * theta
    }

    /// Inverse of [`Ellipsoid::meridian_latitude_to_distance`]: the latitude
    /// whose meridian distance from the equator is `distance_from_equator`.
    #[must_use]
    #[allow(non_snake_case)]
    pub fn meridian_distance_to_latitude(&self, distance_from_equator: f64) -> f64 {
        let n = self.third_flattening();
        let A = self.rectifying_radius_bowring();

        let theta = distance_from_equator / A;
        let (s, c) = (2.0 * theta).sin_cos();
        let x = 1.0 - 155.0 / 84.0 * n * c;
        let y = 155.0 / 84.0 * n * s;
        let r = y.hypot(x);
        let v = y.atan2(x);

        let C = 1.0 - 9.0 * n * n / 16.0;
        theta + 63.0 / 4.0 * C * r.powf(8.0 / 155.0) * (8.0 / 155.0 * v).sin()
    }

    /// Geographic (λ, φ, h) to cartesian (X, Y, Z), following the derivation
    /// given by Bowring ([1976](crate::bibliography::Bibliography::Bow76),
    /// [1985](crate::bibliography::Bibliography::Bow85)).
    #[must_use]
    #[allow(non_snake_case)]
    pub fn cartesian(&self, longitude: f64, latitude: f64, height: f64) -> (f64, f64, f64) {
        let N = self.prime_vertical_radius_of_curvature(latitude);
        let (sinphi, cosphi) = latitude.sin_cos();
        let (sinlam, coslam) = longitude.sin_cos();

        let X = (N + height) * cosphi * coslam;
        let Y = (N + height) * cosphi * sinlam;
        let Z = (N * (1.0 - self.eccentricity_squared()) + height) * sinphi;
        (X, Y, Z)
    }

    /// Cartesian (X, Y, Z) to geographic (λ, φ, h), via
    /// [Fukushima (1999)](crate::bibliography::Bibliography::Fuk99).
    #[must_use]
    #[allow(non_snake_case)]
    pub fn geographic(&self, X: f64, Y: f64, Z: f64) -> (f64, f64, f64) {
        let b = self.semiminor_axis();
        let eps = self.second_eccentricity_squared();
        let es = self.eccentricity_squared();

        let lam = Y.atan2(X);
        let p = X.hypot(Y);

        if p < 1.0e-12 {
            let phi = FRAC_PI_2.copysign(Z);
            let h = Z.abs() - b;
            return (lam, phi, h);
        }

        let a = self.semimajor_axis();
        let T = (Z * a) / (p * b);
        let c = 1.0 / (1.0 + T * T).sqrt();
        let s = c * T;

        let phi_num = Z + eps * b * s.powi(3);
        let phi_denom = p - es * a * c.powi(3);
        let phi = phi_num.atan2(phi_denom);

        let lenphi = phi_num.hypot(phi_denom);
        let sinphi = phi_num / lenphi;
        let cosphi = phi_denom / lenphi;

        let N = a / (1.0 - sinphi.powi(2) * es).sqrt();
        // Bowring (1985): more accurate than the commonly used h = p/cosphi - N
        let h = p * cosphi + Z * sinphi - a * a / N;

        (lam, phi, h)
    }
}

// ----- Tests -----------------------------------------------------------------
