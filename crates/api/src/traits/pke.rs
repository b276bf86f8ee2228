//! Trait definition for point-level public key encryption schemes.

use crate::error::Result;
use zeroize::Zeroize;

/// Trait for public key encryption schemes whose plaintexts are group elements.
///
/// Unlike byte-oriented schemes, instances carry their domain parameters (the
/// curve and base point are chosen at runtime), so every operation takes
/// `&self`. All randomness is supplied by the caller.
pub trait PointCipher {
    /// Plaintext type, an element of the group.
    type Point: Clone + PartialEq;

    /// Public key type for the scheme.
    type PublicKey: Clone;

    /// Secret key type for the scheme.
    type SecretKey: Zeroize;

    /// Ciphertext type produced by the scheme.
    type Ciphertext: Clone;

    /// Returns the scheme name.
    fn name(&self) -> &'static str;

    /// Derives the key pair belonging to a caller-chosen secret scalar.
    fn keypair(&self, secret: u64) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypts a plaintext point under the recipient's public key.
    ///
    /// # Arguments
    /// * `pk_recipient` - The recipient's public key.
    /// * `plaintext` - The point to encrypt.
    /// * `nonce` - The per-message random scalar; must be fresh per message.
    fn encrypt(
        &self,
        pk_recipient: &Self::PublicKey,
        plaintext: &Self::Point,
        nonce: u64,
    ) -> Result<Self::Ciphertext>;

    /// Decrypts a ciphertext using the recipient's secret key.
    fn decrypt(&self, sk_recipient: &Self::SecretKey, ciphertext: &Self::Ciphertext) -> Result<Self::Point>;
}
