use crate::error::AppError;

/// One-way password hashing. Implementations never store or log the
/// plaintext; `verify` delegates comparison to the primitive.
pub trait PasswordHasher {
    fn hash(&self, raw: &str) -> Result<String, AppError>;
    fn verify(&self, raw: &str, hashed: &str) -> Result<bool, AppError>;
}

#[derive(Clone, Copy, Debug)]
pub struct BcryptHasher {
    pub cost: u32,
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self { cost: 10 }
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, raw: &str) -> Result<String, AppError> {
        Ok(bcrypt::hash(raw, self.cost)?)
    }

    fn verify(&self, raw: &str, hashed: &str) -> Result<bool, AppError> {
        Ok(bcrypt::verify(raw, hashed)?)
    }
}
