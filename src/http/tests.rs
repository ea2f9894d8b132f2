use crate::app_context::{self, AppContext};
use crate::auth;
use crate::cli::tests::fake_args;
use crate::http::router;
use crate::storage::games::HashMapGameStorage;
use axum_test::TestServer;

pub fn test_server() -> TestServer {
    test_server_with_context(app_context::init(&fake_args()))
}

/// Builds a test server over a caller-prepared context, so tests can seed
/// storage before issuing requests.
pub fn test_server_with_context(app_context: AppContext<HashMapGameStorage>) -> TestServer {
    let args = fake_args();
    auth::init(&args);
    let router = router::new(&args, app_context);
    TestServer::new(router).expect("Failed to run test server.")
}
