use crate::admin::MessageManager;
use crate::api::ApiClient;
use crate::gallery::GalleryUnlock;
use crate::storage::SharedStore;

/// Services shared by every page. The admin session lives in its own
/// context (`crate::auth`).
#[derive(Clone)]
pub struct AppState {
    pub api_client: ApiClient,
    pub gallery: GalleryUnlock,
    pub messages: MessageManager,
}

impl AppState {
    pub fn new(api_client: ApiClient) -> Self {
        Self {
            gallery: GalleryUnlock::new(api_client.clone()),
            messages: MessageManager::new(api_client.clone()),
            api_client,
        }
    }

    pub fn from_env(store: SharedStore) -> Self {
        Self::new(ApiClient::from_env(store))
    }

    pub fn store(&self) -> &SharedStore {
        self.api_client.store()
    }
}

#[derive(Clone)]
pub struct AppContext(pub AppState);
