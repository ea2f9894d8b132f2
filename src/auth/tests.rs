use crate::auth::responses::{
    DecodePasscodeResponse, PasscodeExtractionError, PasscodeExtractionReason,
};
use crate::http::tests::test_server;

/// Signed with the fake args' `testKey`; claims carry the `testPlayer`
/// username and an example avatar URL.
pub static PASSCODE: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJ1c2VybmFtZSI6InRlc3RQbGF5ZXIiLC\
    JhdmF0YXJfdXJsIjoiaHR0cHM6Ly9leGFtcGxlLmNvbS9hdmF0YXJzL3Rlc3QtcGxheWVyLnBuZyJ9.OFmgpwWILBnBfBN1\
    H-Og7F_Ep0HOGTT0swxlCGYO-RQ";

/// Same key, but the username claim is 72 `x`-s.
pub static PASSCODE_WITH_OVERLONG_USERNAME: &str =
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJ1c2VybmFtZSI6Inh4eHh4eHh4eHh4eHh4eHh4eHh4eHh4eHh4eHh4e\
    Hh4eHh4eHh4eHh4eHh4eHh4eHh4eHh4eHh4eHh4eHh4eHh4eHh4eHh4eCIsImF2YXRhcl91cmwiOiJodHRwczovL2V4YW1w\
    bGUuY29tL2F2YXRhcnMvbG9uZy5wbmcifQ.-j7T4xMxcYWuqCIpRehNVRP7jl2qfZ1fK3eh1vMa6y4";

#[tokio::test]
async fn test_decode_good_passcode() {
    let server = test_server();

    let response = server
        .get("/auth/passcode/decode")
        .add_header("Passcode", PASSCODE)
        .await;

    response.assert_status_ok();
    response.assert_json(&DecodePasscodeResponse {
        error: false,
        username: String::from("testPlayer"),
    });
}

#[tokio::test]
async fn test_decode_bad_passcode() {
    let server = test_server();

    let response = server
        .get("/auth/passcode/decode")
        .add_header("Passcode", "notReallyAPasscode")
        .await;

    response.assert_status_unauthorized();
    response.assert_json(&PasscodeExtractionError {
        error: true,
        reason: PasscodeExtractionReason::InvalidPasscode,
    });
}

#[tokio::test]
async fn test_decode_missing_passcode() {
    let server = test_server();

    let response = server.get("/auth/passcode/decode").await;

    response.assert_status_unauthorized();
    response.assert_json(&PasscodeExtractionError {
        error: true,
        reason: PasscodeExtractionReason::NoPasscodeHeaderProvided,
    });
}
