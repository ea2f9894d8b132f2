use crate::auth::tests::PASSCODE;
use crate::http::tests::test_server;
use crate::scheduler::responses::{
    DailyPostsError, StartDailyPostsResponse, StopDailyPostsResponse,
};

#[tokio::test]
async fn test_daily_posts_start_and_stop() {
    let server = test_server();

    let response = server
        .post("/communities/community1/daily-posts")
        .add_header("Passcode", PASSCODE)
        .await;
    response.assert_status_ok();
    response.assert_json(&StartDailyPostsResponse {
        error: false,
        error_code: None,
    });

    let response = server
        .delete("/communities/community1/daily-posts")
        .add_header("Passcode", PASSCODE)
        .await;
    response.assert_status_ok();
    response.assert_json(&StopDailyPostsResponse {
        error: false,
        error_code: None,
    });
}

#[tokio::test]
async fn test_starting_daily_posts_twice_is_reported() {
    let server = test_server();

    server
        .post("/communities/community1/daily-posts")
        .add_header("Passcode", PASSCODE)
        .await
        .assert_status_ok();

    let response = server
        .post("/communities/community1/daily-posts")
        .add_header("Passcode", PASSCODE)
        .await;
    response.assert_json(&StartDailyPostsResponse {
        error: true,
        error_code: Some(DailyPostsError::AlreadyRunning),
    });
}

#[tokio::test]
async fn test_stopping_daily_posts_that_never_ran_is_reported() {
    let server = test_server();

    let response = server
        .delete("/communities/community1/daily-posts")
        .add_header("Passcode", PASSCODE)
        .await;
    response.assert_json(&StopDailyPostsResponse {
        error: true,
        error_code: Some(DailyPostsError::NotRunning),
    });
}

#[tokio::test]
async fn test_jobs_are_tracked_per_community() {
    let server = test_server();

    server
        .post("/communities/community1/daily-posts")
        .add_header("Passcode", PASSCODE)
        .await
        .assert_status_ok();

    let response = server
        .post("/communities/community2/daily-posts")
        .add_header("Passcode", PASSCODE)
        .await;
    response.assert_json(&StartDailyPostsResponse {
        error: false,
        error_code: None,
    });
}
