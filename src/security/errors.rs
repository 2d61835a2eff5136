#[derive(Debug, PartialEq)]
pub enum AuthError {
    HashingError,
    VerificationError,
    InvalidCredentials,
    AccountInactive,
    DatabaseError,
}

impl std::error::Error for AuthError {}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::HashingError => write!(f, "Password hashing failed"),
            AuthError::VerificationError => write!(f, "Password verification failed"),
            AuthError::InvalidCredentials => write!(f, "Invalid credentials"),
            AuthError::AccountInactive => write!(f, "Account is inactive"),
            AuthError::DatabaseError => write!(f, "Database error"),
        }
    }
}
