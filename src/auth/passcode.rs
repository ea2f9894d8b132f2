use crate::auth::JWT_SIGNING_KEY;
use jwt::VerifyWithKey;
use serde::Deserialize;

/// Claims the platform puts into the passcode it hands the embedded view:
/// who the player is and what their avatar looks like.
#[derive(Debug, Deserialize)]
pub struct JwtPayload {
    pub username: String,
    pub avatar_url: String,
}

pub fn decode(passcode: &str) -> Result<JwtPayload, ()> {
    passcode
        .verify_with_key(
            JWT_SIGNING_KEY
                .get()
                .expect("`JWT_SIGNING_KEY` was not initialized."),
        )
        .map_err(|_err| ())
}
