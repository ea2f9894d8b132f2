use crate::auth::passcode;
use crate::auth::responses::{PasscodeExtractionError, PasscodeExtractionReason};
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::Json;

/// The player behind the request, resolved from the `Passcode` header.
pub struct Player {
    pub username: String,
    pub avatar_url: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for Player
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<PasscodeExtractionError>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(passcode) = parts.headers.get("Passcode") else {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(PasscodeExtractionError {
                    error: true,
                    reason: PasscodeExtractionReason::NoPasscodeHeaderProvided,
                }),
            ));
        };
        let claims = passcode
            .to_str()
            .map_err(|_err| ())
            .and_then(passcode::decode);
        match claims {
            Ok(jwt_payload) => Ok(Player {
                username: jwt_payload.username,
                avatar_url: jwt_payload.avatar_url,
            }),
            Err(()) => Err((
                StatusCode::UNAUTHORIZED,
                Json(PasscodeExtractionError {
                    error: true,
                    reason: PasscodeExtractionReason::InvalidPasscode,
                }),
            )),
        }
    }
}
