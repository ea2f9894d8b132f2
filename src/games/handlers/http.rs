use crate::app_context::{AppContext, RequestContext};
use crate::games::consts::MAX_USERNAME_LENGTH;
use crate::games::handlers::responses::{
    CreateGameError, CreateGameResponse, GameResponse, GameResponseError, LeaderboardResponse,
    LeaderboardRow, PostInfo, WebViewExchangeError, WebViewExchangeResponse,
};
use crate::games::message_types::{
    HostSentMessage, InitialDataPayload, ShowResultsPayload, WebViewSentMessage,
};
use crate::games::models::{Game, Guess};
use crate::map::models::LatLng;
use crate::scoring;
use crate::storage::consts::LEADERBOARD_SIZE;
use crate::storage::interface::IGameStorage;
use unicode_segmentation::UnicodeSegmentation;
use uuid::Uuid;

pub struct GameHttpHandler<'a, GS: IGameStorage> {
    app_context: AppContext<GS>,
    request_context: &'a RequestContext,
}

impl<'a, GS> GameHttpHandler<'a, GS>
where
    GS: IGameStorage,
{
    pub fn new(app_context: AppContext<GS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    pub async fn game(&self) -> GameResponse {
        let Some(game) = self
            .app_context
            .games
            .game(&self.request_context.post_id)
            .await
        else {
            return GameResponse {
                error: true,
                error_code: Some(GameResponseError::GameNotFound),
                post: None,
            };
        };
        GameResponse {
            error: false,
            error_code: None,
            post: Some(PostInfo {
                post_id: game.post_id,
                game_number: game.game_number,
                media_url: game.media_url,
                image_width: game.image_width,
                image_height: game.image_height,
            }),
        }
    }

    /// One round trip of the host / embedded map view protocol.
    pub async fn exchange(&self, message: WebViewSentMessage) -> WebViewExchangeResponse {
        let Some(game) = self
            .app_context
            .games
            .game(&self.request_context.post_id)
            .await
        else {
            return WebViewExchangeResponse {
                error: true,
                error_code: Some(WebViewExchangeError::GameNotFound),
                message: None,
            };
        };
        match message {
            WebViewSentMessage::InitialData => self.initial_data(game).await,
            WebViewSentMessage::SubmitGuess(pin) => self.submit_guess(game, pin).await,
        }
    }

    async fn initial_data(&self, game: Game) -> WebViewExchangeResponse {
        let guess = self
            .app_context
            .games
            .guess(&game.post_id, &self.request_context.username)
            .await;
        let all_guesses = self.app_context.games.all_guesses(&game.post_id).await;
        let actual = guess.is_some().then_some(game.location);
        WebViewExchangeResponse {
            error: false,
            error_code: None,
            message: Some(HostSentMessage::InitialData(InitialDataPayload {
                username: self.request_context.username.clone(),
                avatar_url: self.request_context.avatar_url.clone(),
                guess,
                actual,
                all_guesses,
            })),
        }
    }

    async fn submit_guess(&self, game: Game, pin: LatLng) -> WebViewExchangeResponse {
        let username = &self.request_context.username;
        if username.graphemes(true).count() > MAX_USERNAME_LENGTH {
            return WebViewExchangeResponse {
                error: true,
                error_code: Some(WebViewExchangeError::UsernameTooLong),
                message: None,
            };
        }
        if let Some(existing) = self.app_context.games.guess(&game.post_id, username).await {
            // The first answer stands. Nothing is recomputed and the
            // leaderboard is not touched again.
            return self.show_results(existing, game.location);
        }

        let meters = scoring::distance(game.location, pin);
        let distance_string = scoring::format_distance(meters);
        let points = scoring::distance_to_points(meters);
        let guess = Guess {
            lat: pin.lat,
            lng: pin.lng,
            username: username.clone(),
            avatar_url: self.request_context.avatar_url.clone(),
            points,
            distance_string,
        };

        let inserted = self
            .app_context
            .games
            .insert_guess(&game.post_id, guess.clone())
            .await;
        if !inserted {
            // Lost a race against another submission from the same player;
            // the stored record wins.
            let stored = self
                .app_context
                .games
                .guess(&game.post_id, username)
                .await
                .unwrap_or(guess);
            return self.show_results(stored, game.location);
        }

        self.app_context
            .games
            .set_avatar_url(username, &self.request_context.avatar_url)
            .await;
        let total_score = self
            .app_context
            .games
            .increment_score(&game.community_id, username, points)
            .await;
        tracing::info!(
            task = "guess_submitted",
            post_id = %game.post_id,
            username = %username,
            points,
            total_score,
        );

        self.show_results(guess, game.location)
    }

    fn show_results(&self, guess: Guess, actual: LatLng) -> WebViewExchangeResponse {
        WebViewExchangeResponse {
            error: false,
            error_code: None,
            message: Some(HostSentMessage::ShowResults(ShowResultsPayload {
                guess,
                actual,
            })),
        }
    }
}

pub struct CreateGameHttpHandler<GS: IGameStorage> {
    app_context: AppContext<GS>,
}

impl<GS> CreateGameHttpHandler<GS>
where
    GS: IGameStorage,
{
    pub fn new(app_context: AppContext<GS>) -> Self {
        Self { app_context }
    }

    /// Authors one game post: samples a street view image, stores its
    /// media, looks up the true location and persists the game.
    pub async fn create(&self, community_id: &str) -> CreateGameResponse {
        let image = match self.app_context.imagery.random_street_view_image().await {
            Ok(image) => image,
            Err(err) => {
                tracing::error!(
                    task = "game_post_creation",
                    community_id = %community_id,
                    error = %err,
                    "Failed to pick a street view image."
                );
                return Self::failure(CreateGameError::ImageSourceUnavailable);
            }
        };
        let location = match self.app_context.imagery.image_location(&image.id).await {
            Ok(location) => location,
            Err(err) => {
                tracing::error!(
                    task = "game_post_creation",
                    community_id = %community_id,
                    image_id = %image.id,
                    error = %err,
                    "Failed to resolve the image location."
                );
                return Self::failure(CreateGameError::ImageSourceUnavailable);
            }
        };
        let image_bytes = match self.app_context.imagery.download(&image.thumb_1024_url).await {
            Ok(image_bytes) => image_bytes,
            Err(err) => {
                tracing::error!(
                    task = "game_post_creation",
                    community_id = %community_id,
                    image_id = %image.id,
                    error = %err,
                    "Failed to download the image."
                );
                return Self::failure(CreateGameError::ImageSourceUnavailable);
            }
        };
        let media_url = match self.app_context.media.store_post_image(image_bytes).await {
            Ok(media_url) => media_url,
            Err(err) => {
                tracing::error!(
                    task = "game_post_creation",
                    community_id = %community_id,
                    image_id = %image.id,
                    error = %err,
                    "Failed to store the post image."
                );
                return Self::failure(CreateGameError::MediaStoreUnavailable);
            }
        };

        let game_number = self
            .app_context
            .games
            .increment_game_count(community_id)
            .await;
        let post_id = Uuid::new_v4().to_string();
        let game = Game {
            post_id: post_id.clone(),
            community_id: community_id.to_string(),
            game_number,
            media_url: media_url.clone(),
            image_width: image.width,
            image_height: image.height,
            location,
        };
        self.app_context.games.insert(game).await;
        tracing::info!(
            task = "game_post_creation",
            post_id = %post_id,
            community_id = %community_id,
            game_number,
            "Created a game post."
        );

        CreateGameResponse {
            error: false,
            error_code: None,
            post_id: Some(post_id),
            game_number: Some(game_number),
            media_url: Some(media_url),
        }
    }

    fn failure(error_code: CreateGameError) -> CreateGameResponse {
        CreateGameResponse {
            error: true,
            error_code: Some(error_code),
            post_id: None,
            game_number: None,
            media_url: None,
        }
    }
}

pub struct LeaderboardHttpHandler<GS: IGameStorage> {
    app_context: AppContext<GS>,
}

impl<GS> LeaderboardHttpHandler<GS>
where
    GS: IGameStorage,
{
    pub fn new(app_context: AppContext<GS>) -> Self {
        Self { app_context }
    }

    pub async fn top(&self, community_id: &str) -> LeaderboardResponse {
        let entries = self
            .app_context
            .games
            .top_scores(community_id, LEADERBOARD_SIZE)
            .await;
        let usernames: Vec<String> = entries
            .iter()
            .map(|entry| entry.username.clone())
            .collect();
        let mut avatars = self.app_context.games.avatar_urls(&usernames).await;
        let rows = entries
            .into_iter()
            .map(|entry| LeaderboardRow {
                avatar_url: avatars.remove(&entry.username).flatten(),
                username: entry.username,
                score: entry.score,
            })
            .collect();
        LeaderboardResponse {
            error: false,
            entries: rows,
        }
    }
}
