//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    dnd5e_api::Dnd5eApiClient,
    ports::{RandomPort, ReferenceFetcher},
    random::SystemRandom,
    settings::AppSettings,
};
use crate::use_cases::{BuildCharacter, ResolveCharacter};

/// Main application state.
///
/// Holds settings, the injected ports and the use cases built on them.
pub struct App {
    pub settings: AppSettings,
    pub fetcher: Arc<dyn ReferenceFetcher>,
    pub random: Arc<dyn RandomPort>,
    pub use_cases: UseCases,
}

/// Container for use cases.
pub struct UseCases {
    pub resolve: ResolveCharacter,
    pub build_character: BuildCharacter,
}

impl App {
    /// Wire the real HTTP client and system randomness.
    pub fn new(settings: AppSettings) -> Self {
        let fetcher: Arc<dyn ReferenceFetcher> = Arc::new(Dnd5eApiClient::with_timeout(
            &settings.api_base_url,
            settings.http_timeout_secs,
        ));
        let random: Arc<dyn RandomPort> = Arc::new(SystemRandom::new());
        Self::with_ports(settings, fetcher, random)
    }

    pub fn with_ports(
        settings: AppSettings,
        fetcher: Arc<dyn ReferenceFetcher>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let resolve = ResolveCharacter::new(fetcher.clone());
        let build_character =
            BuildCharacter::new(resolve.clone(), random.clone(), settings.unknown_ability);

        Self {
            settings,
            fetcher,
            random,
            use_cases: UseCases {
                resolve,
                build_character,
            },
        }
    }
}
