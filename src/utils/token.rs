use rand::{distributions::Alphanumeric, Rng};

pub const TOKEN_LENGTH: usize = 48;

/// Opaque single-use token for email verification and password resets.
pub fn generate_token<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..TOKEN_LENGTH)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}
