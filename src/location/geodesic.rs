//! Ellipsoidal and loxodromic distance/bearing formulas.
//!
//! Geodesics use Vincenty's inverse method on the WGS-84 ellipsoid.
//! Rhumb lines use the Mercator-projection formulas on a sphere.
//!
//! Reference: T. Vincenty (1975), "Direct and Inverse Solutions of Geodesics
//! on the Ellipsoid with application of nested equations", Survey Review 23(176).

#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

use crate::math::{
    PI, atan, atan2, cos, degrees_to_radians, ln, normalize_degrees_0_to_360, radians_to_degrees,
    sin, sqrt, tan,
};

/// WGS-84 semi-major axis in meters
const WGS84_SEMI_MAJOR_AXIS: f64 = 6_378_137.0;

/// WGS-84 semi-minor axis in meters
const WGS84_SEMI_MINOR_AXIS: f64 = 6_356_752.3142;

/// WGS-84 flattening
const WGS84_FLATTENING: f64 = 1.0 / 298.257_223_563;

/// Iteration cap for the longitude-on-the-auxiliary-sphere refinement.
pub const VINCENTY_MAX_ITERATIONS: usize = 20;

/// Convergence threshold for λ in radians (about 0.006 mm on the ground).
pub const VINCENTY_CONVERGENCE: f64 = 1e-12;

/// Sphere radius for rhumb-line distances (WGS-84 equatorial radius).
const RHUMB_EARTH_RADIUS: f64 = 6_378_137.0;

/// Solution of the inverse geodesic problem between two points.
///
/// Bearings are true-north azimuths in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodesicInverse {
    distance: f64,
    initial_bearing: f64,
    final_bearing: f64,
}

impl GeodesicInverse {
    const COINCIDENT: Self = Self {
        distance: 0.0,
        initial_bearing: 0.0,
        final_bearing: 0.0,
    };

    /// Gets the ellipsoidal distance in meters.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Gets the forward azimuth at the starting point in degrees.
    #[must_use]
    pub const fn initial_bearing(&self) -> f64 {
        self.initial_bearing
    }

    /// Gets the forward azimuth on arrival at the destination in degrees.
    #[must_use]
    pub const fn final_bearing(&self) -> f64 {
        self.final_bearing
    }
}

/// Quantities from the last λ iteration, needed to finish the solution.
struct AuxiliarySphere {
    sin_lambda: f64,
    cos_lambda: f64,
    sin_sigma: f64,
    cos_sigma: f64,
    sigma: f64,
    cos_sq_alpha: f64,
    cos_2sigma_m: f64,
}

/// Solves the inverse problem with Vincenty's method.
///
/// Returns `None` when λ fails to converge within
/// [`VINCENTY_MAX_ITERATIONS`], which happens for nearly antipodal points.
pub(crate) fn vincenty_inverse(
    latitude1: f64,
    longitude1: f64,
    latitude2: f64,
    longitude2: f64,
) -> Option<GeodesicInverse> {
    if latitude1 == latitude2 && longitude1 == longitude2 {
        return Some(GeodesicInverse::COINCIDENT);
    }

    let a = WGS84_SEMI_MAJOR_AXIS;
    let b = WGS84_SEMI_MINOR_AXIS;
    let f = WGS84_FLATTENING;

    let l = degrees_to_radians(longitude2 - longitude1);
    // reduced latitudes
    let u1 = atan((1.0 - f) * tan(degrees_to_radians(latitude1)));
    let u2 = atan((1.0 - f) * tan(degrees_to_radians(latitude2)));
    let (sin_u1, cos_u1) = (sin(u1), cos(u1));
    let (sin_u2, cos_u2) = (sin(u2), cos(u2));

    let mut lambda = l;
    let mut solution = None;
    for _ in 0..VINCENTY_MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = (sin(lambda), cos(lambda));
        let cross = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
        let sin_sigma = sqrt((cos_u2 * sin_lambda) * (cos_u2 * sin_lambda) + cross * cross);
        if sin_sigma == 0.0 {
            return Some(GeodesicInverse::COINCIDENT);
        }
        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = atan2(sin_sigma, cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // equatorial line: cos²α = 0
        let cos_2sigma_m = if cos_sq_alpha == 0.0 {
            0.0
        } else {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        };
        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));

        let previous = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m
                            + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        if (lambda - previous).abs() <= VINCENTY_CONVERGENCE {
            solution = Some(AuxiliarySphere {
                sin_lambda,
                cos_lambda,
                sin_sigma,
                cos_sigma,
                sigma,
                cos_sq_alpha,
                cos_2sigma_m,
            });
            break;
        }
    }
    let s = solution?;

    let u_sq = s.cos_sq_alpha * (a * a - b * b) / (b * b);
    let big_a =
        1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let c2sm = s.cos_2sigma_m;
    let delta_sigma = big_b
        * s.sin_sigma
        * (c2sm
            + big_b / 4.0
                * (s.cos_sigma * (-1.0 + 2.0 * c2sm * c2sm)
                    - big_b / 6.0
                        * c2sm
                        * (-3.0 + 4.0 * s.sin_sigma * s.sin_sigma)
                        * (-3.0 + 4.0 * c2sm * c2sm)));
    let distance = b * big_a * (s.sigma - delta_sigma);

    let initial = atan2(
        cos_u2 * s.sin_lambda,
        cos_u1 * sin_u2 - sin_u1 * cos_u2 * s.cos_lambda,
    );
    let final_ = atan2(
        cos_u1 * s.sin_lambda,
        -sin_u1 * cos_u2 + cos_u1 * sin_u2 * s.cos_lambda,
    );

    Some(GeodesicInverse {
        distance,
        initial_bearing: normalize_degrees_0_to_360(radians_to_degrees(initial)),
        final_bearing: normalize_degrees_0_to_360(radians_to_degrees(final_)),
    })
}

/// Difference of isometric latitudes (the Mercator-projected latitude span).
fn projected_latitude_delta(phi1: f64, phi2: f64) -> f64 {
    ln(tan(phi2 / 2.0 + PI / 4.0) / tan(phi1 / 2.0 + PI / 4.0))
}

/// Rhumb-line (constant bearing) distance in meters.
pub(crate) fn rhumb_line_distance(
    latitude1: f64,
    longitude1: f64,
    latitude2: f64,
    longitude2: f64,
) -> f64 {
    let phi1 = degrees_to_radians(latitude1);
    let phi2 = degrees_to_radians(latitude2);
    let delta_phi = phi2 - phi1;
    let delta_psi = projected_latitude_delta(phi1, phi2);

    // east-west lines have no latitude span to divide by
    let q = delta_phi / delta_psi;
    let q = if q.is_finite() { q } else { cos(phi1) };

    let mut delta_lambda = (degrees_to_radians(longitude2) - degrees_to_radians(longitude1)).abs();
    if delta_lambda > PI {
        delta_lambda = 2.0 * PI - delta_lambda;
    }

    sqrt(delta_phi * delta_phi + q * q * delta_lambda * delta_lambda) * RHUMB_EARTH_RADIUS
}

/// Rhumb-line bearing in degrees [0, 360), crossing the antimeridian when shorter.
pub(crate) fn rhumb_line_bearing(
    latitude1: f64,
    longitude1: f64,
    latitude2: f64,
    longitude2: f64,
) -> f64 {
    let phi1 = degrees_to_radians(latitude1);
    let phi2 = degrees_to_radians(latitude2);
    let delta_psi = projected_latitude_delta(phi1, phi2);

    let mut delta_lambda = degrees_to_radians(longitude2 - longitude1);
    if delta_lambda.abs() > PI {
        delta_lambda = if delta_lambda > 0.0 {
            -(2.0 * PI - delta_lambda)
        } else {
            2.0 * PI + delta_lambda
        };
    }

    normalize_degrees_0_to_360(radians_to_degrees(atan2(delta_lambda, delta_psi)))
}
