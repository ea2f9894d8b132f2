/// Counted in graphemes, not bytes.
pub const MAX_USERNAME_LENGTH: usize = 64;
