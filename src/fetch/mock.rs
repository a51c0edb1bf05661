//! Mock caches for isolating fetchers in tests.

use mockall::mock;

use crate::domain::entity::Mutation;
use crate::domain::word::Word;
use crate::dto::page::PageResponse;
use crate::fetch::cache::{PageCache, PageKey};

mock! {
    pub WordCache {}

    impl PageCache for WordCache {
        type Record = Word;

        fn get(&self, key: &PageKey) -> Option<PageResponse<Word>>;
        fn put(&self, key: PageKey, page: PageResponse<Word>);
        fn invalidate(&self, mutation: Mutation) -> usize;
    }
}
