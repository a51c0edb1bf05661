//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use lang_portal::domain::word::Word;
use lang_portal::dto::page::{PageRequest, PageResponse};
use lang_portal::fetch::PageFetcher;
use lang_portal::fetch::errors::FetchError;
use serde_json::json;
use tokio::sync::oneshot;

pub type PageResult = Result<PageResponse<Word>, FetchError>;

pub fn word(id: i32, german: &str, english: &str) -> Word {
    serde_json::from_value(json!({
        "id": id,
        "german": german,
        "english": english,
    }))
    .expect("valid word")
}

/// `count` words named `Wort{n}` / `word{n}`.
pub fn numbered_words(count: i32) -> Vec<Word> {
    (1..=count)
        .map(|n| word(n, &format!("Wort{n}"), &format!("word{n}")))
        .collect()
}

pub fn words_page(page: usize, pages: usize, total: usize, data: Vec<Word>) -> PageResponse<Word> {
    PageResponse {
        data,
        total,
        page,
        pages,
    }
}

/// Answers each page from a channel the test resolves by hand, so the order
/// in which responses arrive is under the test's control.
pub struct ScriptedFetcher {
    pending: Mutex<HashMap<usize, oneshot::Receiver<PageResult>>>,
}

impl ScriptedFetcher {
    pub fn new(pending: impl IntoIterator<Item = (usize, oneshot::Receiver<PageResult>)>) -> Self {
        Self {
            pending: Mutex::new(pending.into_iter().collect()),
        }
    }

    /// Queues the answer for the next request of `page`.
    pub fn script(&self, page: usize, receiver: oneshot::Receiver<PageResult>) {
        self.pending.lock().unwrap().insert(page, receiver);
    }
}

impl PageFetcher for ScriptedFetcher {
    type Record = Word;

    async fn fetch_page(&self, request: PageRequest) -> PageResult {
        let receiver = self
            .pending
            .lock()
            .unwrap()
            .remove(&request.page)
            .expect("page was scripted");
        receiver
            .await
            .unwrap_or_else(|_| Err(FetchError::Network("response dropped".to_string())))
    }
}

/// Serves fixed responses per page and counts the calls.
pub struct FixedFetcher {
    pages: HashMap<usize, PageResult>,
    calls: AtomicUsize,
}

impl FixedFetcher {
    pub fn new(pages: impl IntoIterator<Item = (usize, PageResult)>) -> Self {
        Self {
            pages: pages.into_iter().collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PageFetcher for FixedFetcher {
    type Record = Word;

    async fn fetch_page(&self, request: PageRequest) -> PageResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pages
            .get(&request.page)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::Network(format!("no page {}", request.page))))
    }
}
