//! Shared state handed to every request handler.

use std::sync::Arc;
use std::time::Duration;

use crate::api::ApiClient;
use crate::domain::entity::Mutation;
use crate::domain::group::Group;
use crate::domain::study_activity::StudyActivity;
use crate::domain::study_session::StudySession;
use crate::domain::word::Word;
use crate::fetch::cache::{MemoryPageCache, PageCache};

/// Page caches for every list entity, shared across requests.
#[derive(Clone)]
pub struct PortalCaches {
    /// Pages of `/words` and of every `/groups/{id}`.
    pub words: Arc<MemoryPageCache<Word>>,
    pub groups: Arc<MemoryPageCache<Group>>,
    pub study_activities: Arc<MemoryPageCache<StudyActivity>>,
    pub study_sessions: Arc<MemoryPageCache<StudySession>>,
}

impl PortalCaches {
    /// `ttl` of `None` keeps pages until a mutation invalidates them.
    pub fn new(ttl: Option<Duration>) -> Self {
        fn cache<R>(ttl: Option<Duration>) -> Arc<MemoryPageCache<R>> {
            Arc::new(match ttl {
                Some(ttl) => MemoryPageCache::with_ttl(ttl),
                None => MemoryPageCache::new(),
            })
        }

        Self {
            words: cache(ttl),
            groups: cache(ttl),
            study_activities: cache(ttl),
            study_sessions: cache(ttl),
        }
    }

    /// Drops every cached page made outdated by `mutation`.
    pub fn invalidate(&self, mutation: Mutation) -> usize {
        let removed = self.words.invalidate(mutation)
            + self.groups.invalidate(mutation)
            + self.study_activities.invalidate(mutation)
            + self.study_sessions.invalidate(mutation);
        log::debug!("{mutation:?} invalidated {removed} cached pages");
        removed
    }
}

/// Backend client plus caches.
#[derive(Clone)]
pub struct PortalState {
    pub api: ApiClient,
    pub caches: PortalCaches,
}

impl PortalState {
    pub fn new(api: ApiClient, cache_ttl: Option<Duration>) -> Self {
        Self {
            api,
            caches: PortalCaches::new(cache_ttl),
        }
    }

    /// Page size used both by the backend and by locally sliced lists.
    pub fn page_size(&self) -> usize {
        self.api.page_size()
    }
}
