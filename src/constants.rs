//! Application-wide constants.

// ============================================================================
// Token Generation Constants
// ============================================================================

/// Characters used for generating link tokens and user IDs (URL-safe alphanumeric)
pub const TOKEN_ALPHABET: [char; 62] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B',
    'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U',
    'V', 'W', 'X', 'Y', 'Z',
];

/// Default length of generated link tokens and user IDs
pub const DEFAULT_TOKEN_LENGTH: usize = 6;

/// Maximum retry attempts when a generated token collides with an existing entry
pub const MAX_TOKEN_GENERATION_RETRIES: u32 = 10;

// ============================================================================
// Credential Constants
// ============================================================================

/// bcrypt work factor for password hashing
pub const BCRYPT_COST: u32 = 10;

// ============================================================================
// Session Constants
// ============================================================================

/// Session entry under which the logged-in user's ID is stored
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Cookie name used by the session middleware
pub const SESSION_COOKIE_NAME: &str = "session";

/// Session lifetime in hours
pub const SESSION_TTL_HOURS: i64 = 24;
