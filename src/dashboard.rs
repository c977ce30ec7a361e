//! `Dashboard` — the single owner of every section's view state.
//!
//! Sections are independent: a lookup only ever touches its own slot. Within
//! one section, each search takes a generation number and its response is
//! dropped if a newer search on that section started in the meantime.

use crate::client::LookupClient;
use crate::domain::view::{SectionState, SectionView};
use crate::error::LookupError;
use crate::network::DEFAULT_CHARACTER;
use crate::shared::{normalize_name, Category};

use async_lock::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

struct Section {
    view: RwLock<SectionView>,
    generation: AtomicU64,
}

impl Section {
    fn new(category: Category, placeholder: &str) -> Self {
        Self {
            view: RwLock::new(SectionView::with_placeholder(category, placeholder)),
            generation: AtomicU64::new(0),
        }
    }

    /// Start a new search on this section and return its generation.
    fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Run `update` only if `generation` is still the newest search.
    /// The check happens under the write guard.
    async fn update_if_current<F>(&self, generation: u64, update: F) -> bool
    where
        F: FnOnce(&mut SectionView),
    {
        let mut view = self.view.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            return false;
        }
        update(&mut view);
        true
    }
}

/// Per-section view state for the three lookup sections.
#[derive(Clone)]
pub struct Dashboard {
    sections: Arc<[Section; 3]>,
}

fn index(category: Category) -> usize {
    match category {
        Category::Character => 0,
        Category::BreathingStyle => 1,
        Category::Demon => 2,
    }
}

impl Dashboard {
    pub fn new(placeholder: &str) -> Self {
        Self {
            sections: Arc::new(Category::ALL.map(|c| Section::new(c, placeholder))),
        }
    }

    /// Dashboard using the client's placeholder image.
    pub fn for_client(client: &LookupClient) -> Self {
        Self::new(client.placeholder_image())
    }

    fn section(&self, category: Category) -> &Section {
        &self.sections[index(category)]
    }

    /// The one mutation path for a section's state.
    pub async fn set_state(&self, category: Category, state: SectionState) {
        self.section(category).view.write().await.set(state);
    }

    /// Run a search for `raw_name` and reflect it in the `category` section.
    ///
    /// Blank input switches the section to `EmptyInput` without a request.
    /// Returns the section's state once this search has been applied or dropped.
    pub async fn search(
        &self,
        client: &LookupClient,
        raw_name: &str,
        category: Category,
    ) -> SectionView {
        let section = self.section(category);
        let generation = section.begin();

        let endpoint = normalize_name(raw_name);
        if endpoint.is_empty() {
            section
                .update_if_current(generation, |view| {
                    view.apply(Err(LookupError::EmptyInput { category }))
                })
                .await;
            return self.snapshot(category).await;
        }

        if !section
            .update_if_current(generation, |view| view.set(SectionState::Loading))
            .await
        {
            return self.snapshot(category).await;
        }

        let outcome = client.fetch_and_display(&endpoint, category).await;
        if let Err(e) = &outcome {
            tracing::error!(%category, %endpoint, "Lookup failed: {}", e);
        }

        if !section
            .update_if_current(generation, |view| view.apply(outcome))
            .await
        {
            tracing::debug!(%category, %endpoint, "Dropping stale lookup response");
        }

        self.snapshot(category).await
    }

    /// Initial page state: the default character is looked up, the other
    /// sections wait for a search without issuing requests.
    pub async fn initial_load(&self, client: &LookupClient) -> SectionView {
        self.set_state(Category::BreathingStyle, SectionState::Awaiting)
            .await;
        self.set_state(Category::Demon, SectionState::Awaiting).await;
        self.search(client, DEFAULT_CHARACTER, Category::Character)
            .await
    }

    pub async fn snapshot(&self, category: Category) -> SectionView {
        self.section(category).view.read().await.clone()
    }

    /// All sections in page order.
    pub async fn snapshot_all(&self) -> Vec<SectionView> {
        let mut views = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            views.push(self.snapshot(category).await);
        }
        views
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_superseded_search_cannot_mark_loading() {
        let dashboard = Dashboard::new("./imgs/placeholder.jpg");
        let section = dashboard.section(Category::Demon);

        let older = section.begin();
        let newer = section.begin();
        assert!(
            section
                .update_if_current(newer, |view| view.set(SectionState::EmptyInput))
                .await
        );

        let written = section
            .update_if_current(older, |view| view.set(SectionState::Loading))
            .await;
        assert!(!written);
        assert_eq!(
            dashboard.snapshot(Category::Demon).await.state,
            SectionState::EmptyInput
        );
    }

    #[tokio::test]
    async fn test_blank_search_supersedes_pending_state() {
        let client = LookupClient::builder()
            .base_url("http://127.0.0.1:1")
            .build()
            .unwrap();
        let dashboard = Dashboard::for_client(&client);
        let section = dashboard.section(Category::Character);
        let stale = section.begin();

        let view = dashboard.search(&client, "   ", Category::Character).await;
        assert_eq!(view.state, SectionState::EmptyInput);
        assert!(
            !section
                .update_if_current(stale, |view| view.set(SectionState::Loading))
                .await
        );
        assert!(!dashboard.snapshot(Category::Character).await.is_loading());
    }
}
