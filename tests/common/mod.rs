//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use list_navigation::{
    ConversationId, ListNavError, ListProvider, ListReference, MemorySessionStore,
    NavigatorOptions, Page, PageNavigator, PageToken, ProviderRegistry, Result, SessionStore,
};

pub const PAGES: &str = "pages";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn size(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap()
}

pub fn pages_ref() -> ListReference {
    ListReference::new(PAGES, size(10))
}

pub fn token(raw: &str) -> PageToken {
    PageToken::new(raw)
}

/// Three fixed pages: A(next=B), B(prev=A, next=C), C(prev=B)
pub struct ScriptedProvider {
    pages: HashMap<&'static str, Page<String>>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn abc() -> Self {
        let page = |name: &str, prev: Option<&str>, next: Option<&str>| Page {
            items: (1..=10).map(|i| format!("{name}{i}")).collect(),
            prev_page_token: prev.map(PageToken::new),
            page_token: Some(PageToken::new(name)),
            next_page_token: next.map(PageToken::new),
        };

        let mut pages = HashMap::new();
        pages.insert("A", page("A", None, Some("B")));
        pages.insert("B", page("B", Some("A"), Some("C")));
        pages.insert("C", page("C", Some("B"), None));

        Self {
            pages,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListProvider for ScriptedProvider {
    type Item = String;

    async fn get_page(
        &self,
        token: Option<&PageToken>,
        _page_size: NonZeroU32,
    ) -> Result<Page<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let key = token.map_or("A", PageToken::as_str);
        self.pages
            .get(key)
            .cloned()
            .ok_or_else(|| ListNavError::invalid_token(key))
    }
}

/// Session store that counts every call it receives
#[derive(Default)]
pub struct CountingStore {
    inner: MemorySessionStore,
    loads: AtomicUsize,
    saves: AtomicUsize,
}

impl CountingStore {
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionStore for CountingStore {
    async fn load_blob(&self, conversation: &ConversationId) -> Result<Option<Vec<u8>>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.inner.load_blob(conversation).await
    }

    async fn save_blob(&self, conversation: &ConversationId, blob: Vec<u8>) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save_blob(conversation, blob).await
    }

    async fn delete_blob(&self, conversation: &ConversationId) -> Result<()> {
        self.inner.delete_blob(conversation).await
    }
}

pub struct Harness {
    pub navigator: Arc<PageNavigator>,
    pub provider: Arc<ScriptedProvider>,
    pub store: Arc<CountingStore>,
    pub conversation: ConversationId,
}

pub fn harness(use_session: bool) -> Harness {
    init_logging();

    let provider = Arc::new(ScriptedProvider::abc());
    let store = Arc::new(CountingStore::default());
    let registry = ProviderRegistry::builder()
        .shared_provider(PAGES, provider.clone())
        .build();
    let options = NavigatorOptions::builder()
        .use_session(use_session)
        .max_page_size(50)
        .build()
        .unwrap();

    Harness {
        navigator: Arc::new(PageNavigator::new(registry, store.clone(), options)),
        provider,
        store,
        conversation: ConversationId::new("conversation-1"),
    }
}
