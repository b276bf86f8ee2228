//! ElGamal encryption over elliptic curve points.
//!
//! The multiplicative ElGamal scheme with `(mulmod, powmod)` replaced by the
//! curve's `(add, mul)`: with base point `g` of order `n` and private key `d`,
//! the public key is `d·g`, and a point `m` encrypts under nonce `r` to
//! `(r·g, m + r·(d·g))`.
//!
//! The nonce must be fresh for every message for the scheme to hide anything;
//! this module takes it from the caller and does not check that.

mod ciphertext;
mod keys;

pub use ciphertext::{format_ciphertexts, parse_ciphertexts, Ciphertext};
pub use keys::{PrivateKey, PublicKey};

use eccrypt_algorithms::{validate, CurvePoint, EllipticCurve, GeneratorPolicy};
use eccrypt_api::{PointCipher, ResultExt};
use log::debug;
use rand::{CryptoRng, Rng, RngCore};

use crate::error::{Error, Result};

/// ElGamal over a fixed curve and base point.
///
/// Building one computes the order of the base point by exhaustive scan,
/// which costs O(q) group operations. After that every operation is a pure
/// function of its arguments and the instance can be shared read-only.
#[derive(Clone, Debug)]
pub struct ElGamal {
    curve: EllipticCurve,
    generator: CurvePoint,
    order: u64,
}

impl ElGamal {
    /// Create a cipher from a curve and a base point on it.
    ///
    /// The caller is responsible for having checked the curve with
    /// [`EllipticCurve::ensure_non_singular`]; see [`ElGamal::from_curve`]
    /// for a constructor that does.
    pub fn new(curve: EllipticCurve, generator: CurvePoint) -> Result<Self> {
        validate::point(curve.is_valid(&generator), "ElGamal base point")?;
        if generator.is_identity() {
            return Err(Error::InvalidParameters("base point must not be the identity"));
        }
        let order = curve.order(&generator)?;
        debug!("ElGamal on {} with g = {} of order {}", curve, generator, order);
        Ok(ElGamal {
            curve,
            generator,
            order,
        })
    }

    /// Check the curve is non-singular, discover a base point accepted by
    /// `policy` and build the cipher around it.
    pub fn from_curve(curve: EllipticCurve, policy: &GeneratorPolicy) -> Result<Self> {
        curve.ensure_non_singular()?;
        let base = curve.find_base_point(policy)?;
        debug!("ElGamal on {} with discovered g = {} of order {}", curve, base.point, base.order);
        Ok(ElGamal {
            curve,
            generator: base.point,
            order: base.order,
        })
    }

    /// The curve this cipher works on.
    pub fn curve(&self) -> &EllipticCurve {
        &self.curve
    }

    /// Base point `g`.
    pub fn generator(&self) -> &CurvePoint {
        &self.generator
    }

    /// Order `n` of the base point.
    pub fn order(&self) -> u64 {
        self.order
    }

    /// Derive the key pair for a caller-chosen private scalar.
    ///
    /// The scalar is reduced modulo `n`. A scalar that reduces to zero would
    /// give the identity as public key, which masks nothing, and is rejected.
    pub fn generate_keypair(&self, private: u64) -> Result<(PublicKey, PrivateKey)> {
        let reduced = private % self.order;
        if reduced == 0 {
            return Err(Error::InvalidParameters("private key must not be a multiple of the base point order"));
        }
        let sk = PrivateKey::new(reduced);
        let pk = self.public_key(&sk)?;
        Ok((pk, sk))
    }

    /// The public key `priv·g` belonging to `sk`.
    pub fn public_key(&self, sk: &PrivateKey) -> Result<PublicKey> {
        let point = self.curve.mul(&self.generator, sk.value())?;
        Ok(PublicKey::from_point(point))
    }

    /// The nonce point `r·g`, the first ciphertext component.
    pub fn nonce_point(&self, r: u64) -> Result<CurvePoint> {
        Ok(self.curve.mul(&self.generator, r)?)
    }

    /// Masking-only encryption: returns `plain + r·pub`, leaving the nonce
    /// point to be sent out of band.
    pub fn mask(&self, plain: &CurvePoint, pk: &PublicKey, r: u64) -> Result<CurvePoint> {
        validate::point(self.curve.is_valid(plain), "ElGamal plaintext")?;
        validate::point(self.curve.is_valid(pk.point()), "ElGamal public key")?;
        let shared = self.curve.mul(pk.point(), r)?;
        Ok(self.curve.add(plain, &shared)?)
    }

    /// Encrypt a single point: `(r·g, plain + r·pub)`.
    pub fn encrypt(&self, plain: &CurvePoint, pk: &PublicKey, r: u64) -> Result<Ciphertext> {
        let c2 = self.mask(plain, pk, r)?;
        let c1 = self.nonce_point(r)?;
        Ok(Ciphertext::from_parts(c1, c2))
    }

    /// Decrypt a single ciphertext: `c2 - priv·c1`.
    ///
    /// Recovers the plaintext only when `sk` is the private key whose public
    /// key was used to encrypt.
    pub fn decrypt(&self, ciphertext: &Ciphertext, sk: &PrivateKey) -> Result<CurvePoint> {
        validate::point(self.curve.is_valid(ciphertext.c1()), "ElGamal nonce point")?;
        validate::point(self.curve.is_valid(ciphertext.c2()), "ElGamal masked point")?;
        let shared = self.curve.mul(ciphertext.c1(), sk.value())?;
        Ok(self.curve.add(ciphertext.c2(), &self.curve.negate(&shared))?)
    }

    /// Encrypt each point independently under one shared nonce.
    pub fn encrypt_points(&self, points: &[CurvePoint], pk: &PublicKey, r: u64) -> Result<Vec<Ciphertext>> {
        points.iter().map(|p| self.encrypt(p, pk, r)).collect()
    }

    /// Decrypt each ciphertext independently.
    pub fn decrypt_points(&self, ciphertexts: &[Ciphertext], sk: &PrivateKey) -> Result<Vec<CurvePoint>> {
        ciphertexts.iter().map(|ct| self.decrypt(ct, sk)).collect()
    }

    /// A uniformly random scalar in `[1, n)`, suitable as a nonce or private
    /// key.
    pub fn random_scalar<R: RngCore + CryptoRng>(&self, rng: &mut R) -> u64 {
        rng.gen_range(1..self.order)
    }
}

impl PointCipher for ElGamal {
    type Point = CurvePoint;
    type PublicKey = PublicKey;
    type SecretKey = PrivateKey;
    type Ciphertext = Ciphertext;

    fn name(&self) -> &'static str {
        "EC-ElGamal"
    }

    fn keypair(&self, secret: u64) -> eccrypt_api::Result<(Self::PublicKey, Self::SecretKey)> {
        self.generate_keypair(secret).with_context("EC-ElGamal key generation")
    }

    fn encrypt(
        &self,
        pk_recipient: &Self::PublicKey,
        plaintext: &Self::Point,
        nonce: u64,
    ) -> eccrypt_api::Result<Self::Ciphertext> {
        ElGamal::encrypt(self, plaintext, pk_recipient, nonce).with_context("EC-ElGamal encryption")
    }

    fn decrypt(
        &self,
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> eccrypt_api::Result<Self::Point> {
        ElGamal::decrypt(self, ciphertext, sk_recipient).with_context("EC-ElGamal decryption")
    }
}
