use crate::cli::Args;
use crate::imagery::media::{MediaStore, MediaStoreConfig};
use crate::imagery::{ImageryClient, ImageryConfig};
use crate::scheduler::models::DailyPostJobs;
use crate::storage::games::HashMapGameStorage;
use crate::storage::interface::IGameStorage;

#[derive(Clone)]
pub struct AppContext<GS: IGameStorage> {
    pub games: GS,
    pub imagery: ImageryClient,
    pub media: MediaStore,
    pub daily_posts: DailyPostJobs,
}

/// Identity of the caller plus the post the request addresses.
pub struct RequestContext {
    pub username: String,
    pub avatar_url: String,
    pub post_id: String,
}

pub fn init(args: &Args) -> AppContext<HashMapGameStorage> {
    AppContext {
        games: HashMapGameStorage::default(),
        imagery: ImageryClient::new(ImageryConfig {
            base_url: args.imagery_base_url.clone(),
            access_token: args.imagery_access_token.clone(),
        }),
        media: MediaStore::new(MediaStoreConfig::from_env(), args.media_bucket.clone()),
        daily_posts: DailyPostJobs::default(),
    }
}
