//! Short Weierstrass curves `y² = x³ + ax + b` over a small prime field

use log::{debug, trace};

use super::arith::{add_mod, inverse, mod_sqrt, mul_mod, sub_mod};
use super::point::CurvePoint;
use crate::error::{validate, Error, Result};

/// An elliptic curve `y² ≡ x³ + ax + b (mod q)`.
///
/// The parameters are fixed at construction and the curve is read-only
/// afterwards, so a single instance can be shared between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EllipticCurve {
    a: u64,
    b: u64,
    q: u64,
}

impl EllipticCurve {
    /// Create a curve from its coefficients and field prime.
    ///
    /// Requires `q > 2`, `0 < a < q` and `0 < b < q`. Primality of `q` and
    /// non-singularity are not checked here; see [`arith::is_prime`] and
    /// [`EllipticCurve::ensure_non_singular`].
    ///
    /// [`arith::is_prime`]: super::arith::is_prime
    pub fn new(a: u64, b: u64, q: u64) -> Result<Self> {
        validate::parameter(q > 2, "q", "field prime must be greater than 2")?;
        validate::parameter(0 < a && a < q, "a", "coefficient must satisfy 0 < a < q")?;
        validate::parameter(0 < b && b < q, "b", "coefficient must satisfy 0 < b < q")?;
        Ok(EllipticCurve { a, b, q })
    }

    /// The `a` coefficient
    pub fn a(&self) -> u64 {
        self.a
    }

    /// The `b` coefficient
    pub fn b(&self) -> u64 {
        self.b
    }

    /// The field prime
    pub fn q(&self) -> u64 {
        self.q
    }

    /// `4a³ + 27b² mod q`
    pub fn discriminant(&self) -> u64 {
        let q = self.q;
        let a3 = mul_mod(mul_mod(self.a, self.a, q), self.a, q);
        let b2 = mul_mod(self.b, self.b, q);
        add_mod(mul_mod(4, a3, q), mul_mod(27, b2, q), q)
    }

    /// A curve with zero discriminant has a cusp or node and its points do
    /// not form a group.
    pub fn is_singular(&self) -> bool {
        self.discriminant() == 0
    }

    /// Fails with a parameter error when the curve is singular.
    pub fn ensure_non_singular(&self) -> Result<()> {
        validate::parameter(
            !self.is_singular(),
            "discriminant",
            "4a^3 + 27b^2 is zero modulo q, the curve is singular",
        )
    }

    /// Right-hand side of the curve equation, `x³ + ax + b mod q`.
    fn rhs(&self, x: u64) -> u64 {
        let q = self.q;
        let x3 = mul_mod(mul_mod(x, x, q), x, q);
        add_mod(add_mod(x3, mul_mod(self.a, x, q), q), self.b, q)
    }

    /// Whether `p` is the identity or a reduced pair satisfying the curve
    /// equation.
    pub fn is_valid(&self, p: &CurvePoint) -> bool {
        match *p {
            CurvePoint::Identity => true,
            CurvePoint::Affine { x, y } => {
                x < self.q && y < self.q && mul_mod(y, y, self.q) == self.rhs(x)
            }
        }
    }

    /// Find the points with x-coordinate `x`.
    ///
    /// Returns `((x, y), (x, q - y))` where `y` is the smaller square root.
    /// Fails with `NotFound` when `x³ + ax + b` is not a non-zero quadratic
    /// residue.
    pub fn point_at(&self, x: u64) -> Result<(CurvePoint, CurvePoint)> {
        validate::parameter(x < self.q, "x", "must be less than q")?;
        let ysq = self.rhs(x);
        let (y, my) = mod_sqrt(ysq, self.q).map_err(|_| {
            Error::not_found("point_at", format!("no point with x = {} (y² = {})", x, ysq))
        })?;
        Ok((CurvePoint::new(x, y), CurvePoint::new(x, my)))
    }

    /// Negate a point: `(x, y) ↦ (x, -y mod q)`.
    pub fn negate(&self, p: &CurvePoint) -> CurvePoint {
        match *p {
            CurvePoint::Identity => CurvePoint::Identity,
            CurvePoint::Affine { x, y } => CurvePoint::new(x, sub_mod(0, y, self.q)),
        }
    }

    /// Add two points using the chord-and-tangent group law.
    ///
    /// Only fails when a slope denominator is not invertible, which cannot
    /// happen for reduced points on a curve over a prime field.
    pub fn add(&self, p1: &CurvePoint, p2: &CurvePoint) -> Result<CurvePoint> {
        let q = self.q;
        let ((x1, y1), (x2, y2)) = match (p1.coordinates(), p2.coordinates()) {
            (None, _) => return Ok(*p2),
            (_, None) => return Ok(*p1),
            (Some(c1), Some(c2)) => (c1, c2),
        };

        if x1 == x2 && (y1 != y2 || y1 == 0) {
            // p + (-p), or the tangent at a 2-torsion point
            return Ok(CurvePoint::Identity);
        }

        let slope = if x1 == x2 {
            // tangent: (3x² + a) / 2y
            let num = add_mod(mul_mod(3, mul_mod(x1, x1, q), q), self.a, q);
            mul_mod(num, inverse(mul_mod(2, y1, q), q)?, q)
        } else {
            // chord: (y2 - y1) / (x2 - x1)
            mul_mod(sub_mod(y2, y1, q), inverse(sub_mod(x2, x1, q), q)?, q)
        };

        let x3 = sub_mod(sub_mod(mul_mod(slope, slope, q), x1, q), x2, q);
        let y3 = sub_mod(mul_mod(slope, sub_mod(x1, x3, q), q), y1, q);
        Ok(CurvePoint::new(x3, y3))
    }

    /// Scalar multiplication `k·p` by double-and-add over the bits of `k`,
    /// least significant first. `mul(p, 0)` is the identity.
    pub fn mul(&self, p: &CurvePoint, k: u64) -> Result<CurvePoint> {
        let mut result = CurvePoint::Identity;
        let mut addend = *p;
        let mut k = k;
        let mut steps = 0u32;
        while k > 0 {
            if k & 1 == 1 {
                result = self.add(&result, &addend)?;
            }
            k >>= 1;
            addend = self.add(&addend, &addend)?;
            steps += 1;
        }
        trace!("scalar multiplication of {} took {} doublings", p, steps);
        Ok(result)
    }

    /// Signed scalar multiplication: for negative `k` this is
    /// `mul(negate(p), |k|)`.
    pub fn mul_signed(&self, p: &CurvePoint, k: i64) -> Result<CurvePoint> {
        if k < 0 {
            self.mul(&self.negate(p), k.unsigned_abs())
        } else {
            self.mul(p, k as u64)
        }
    }

    /// Order of `g`: the smallest `k ≥ 1` with `k·g = O`.
    ///
    /// Scans `k = 1..=q` by repeated addition. An order above `q` (possible
    /// by Hasse's bound) is reported as `NotFound`.
    pub fn order(&self, g: &CurvePoint) -> Result<u64> {
        validate::point(self.is_valid(g), "order: point is not on the curve")?;
        validate::parameter(!g.is_identity(), "g", "order of the identity is not searched")?;

        let mut acc = *g;
        for k in 1..=self.q {
            if acc.is_identity() {
                debug!("order of {} is {}", g, k);
                return Ok(k);
            }
            acc = self.add(&acc, g)?;
        }
        Err(Error::not_found(
            "order",
            format!("order of {} exceeds q = {}", g, self.q),
        ))
    }

    /// Discover a base point: scan `x = 0..q-1`, take the first point at each
    /// `x` that exists, and accept it when its order passes `policy`.
    pub fn find_base_point(&self, policy: &GeneratorPolicy) -> Result<BasePoint> {
        for x in 0..self.q {
            let point = match self.point_at(x) {
                Ok((p, _)) => p,
                Err(e) if e.is_not_found() => continue,
                Err(e) => return Err(e),
            };
            let order = match self.order(&point) {
                Ok(n) => n,
                Err(e) if e.is_not_found() => continue,
                Err(e) => return Err(e),
            };
            if policy.accepts(order) {
                debug!("base point {} with order {} found at x = {}", point, order, x);
                return Ok(BasePoint { point, order });
            }
            trace!("rejected candidate {} of order {}", point, order);
        }
        Err(Error::not_found(
            "find_base_point",
            format!("no point of acceptable order on {}", self),
        ))
    }
}

impl core::fmt::Display for EllipticCurve {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "y^2 = x^3 + {}x + {} mod {}", self.a, self.b, self.q)
    }
}

/// Acceptance rule for a candidate base point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorPolicy {
    /// Smallest acceptable order
    pub min_order: u64,
    /// Accept only points whose order is prime, so every non-identity
    /// element of the generated subgroup is itself a generator
    pub require_prime_order: bool,
}

impl GeneratorPolicy {
    /// Whether a point of order `order` is an acceptable generator.
    pub fn accepts(&self, order: u64) -> bool {
        order >= self.min_order && (!self.require_prime_order || super::arith::is_prime(order))
    }
}

impl Default for GeneratorPolicy {
    fn default() -> Self {
        GeneratorPolicy {
            min_order: 2,
            require_prime_order: false,
        }
    }
}

/// A base point together with its order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasePoint {
    /// The generator
    pub point: CurvePoint,
    /// Its order `n`
    pub order: u64,
}
