//! Per-client form-state slots. Each client gets independent string-keyed
//! slots with distinct consume/clear rules:
//!
//! - `savedFormData`: written when the user navigates from the roadmap view
//!   back to the form; consumed on restore, cleared only when flagged
//!   `fromRoadmap`.
//! - `tempFormData`: written right before the login dialog opens; consumed
//!   and cleared once a session exists.
//! - `roadmapFormData`: the validated selection handed to the roadmap page.
//! - `roadmapCareerOptions`: the catalog snapshot the roadmap page reads.
//! - `timelineState`: expanded step and selected specialization.
//!
//! None of the slots expire; they persist until consumed or overwritten.

use serde::{Serialize, de::DeserializeOwned};

use crate::cache::redis as cache;
use crate::db::models::form_state::{SavedFormData, Selection, TempFormData};
use crate::error::AppResult;

pub mod slots {
    pub const SAVED: &str = "savedFormData";
    pub const TEMP: &str = "tempFormData";
    pub const HANDOFF: &str = "roadmapFormData";
    pub const CATALOG: &str = "roadmapCareerOptions";
    pub const TIMELINE: &str = "timelineState";
}

#[derive(Clone)]
pub struct FormStateStore {
    client: redis::Client,
}

impl FormStateStore {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }

    fn key(client_id: &str, slot: &str) -> String {
        format!("form_state:{}:{}", client_id, slot)
    }

    pub async fn get_slot<T: DeserializeOwned>(
        &self,
        client_id: &str,
        slot: &str,
    ) -> AppResult<Option<T>> {
        cache::get_json(&self.client, &Self::key(client_id, slot)).await
    }

    pub async fn set_slot<T: Serialize>(
        &self,
        client_id: &str,
        slot: &str,
        value: &T,
    ) -> AppResult<()> {
        cache::set_json(&self.client, &Self::key(client_id, slot), value).await
    }

    pub async fn remove_slot(&self, client_id: &str, slot: &str) -> AppResult<()> {
        cache::delete(&self.client, &Self::key(client_id, slot)).await
    }

    /// Roadmap -> form back navigation. The flag marks the payload one-shot.
    pub async fn save_navigation(&self, client_id: &str, selection: Selection) -> AppResult<()> {
        let payload = SavedFormData {
            selection,
            from_roadmap: true,
        };
        self.set_slot(client_id, slots::SAVED, &payload).await
    }

    /// Restores slot A. A payload flagged `from_roadmap` is cleared after
    /// this one read; an unflagged payload stays put.
    pub async fn restore_saved(&self, client_id: &str) -> AppResult<Option<SavedFormData>> {
        let saved: Option<SavedFormData> = self.get_slot(client_id, slots::SAVED).await?;
        if let Some(ref payload) = saved {
            if payload.from_roadmap {
                self.remove_slot(client_id, slots::SAVED).await?;
            }
        }
        Ok(saved)
    }

    /// Stashes the full selection (with custom-role toggle state) before the
    /// login flow interrupts the form.
    pub async fn stash_temp(&self, client_id: &str, payload: &TempFormData) -> AppResult<()> {
        self.set_slot(client_id, slots::TEMP, payload).await
    }

    /// Drains slot B once a session exists; always cleared on read.
    pub async fn take_temp(&self, client_id: &str) -> AppResult<Option<TempFormData>> {
        let stashed: Option<TempFormData> = self.get_slot(client_id, slots::TEMP).await?;
        if stashed.is_some() {
            self.remove_slot(client_id, slots::TEMP).await?;
        }
        Ok(stashed)
    }

    pub async fn set_handoff(&self, client_id: &str, selection: &Selection) -> AppResult<()> {
        self.set_slot(client_id, slots::HANDOFF, selection).await
    }

    pub async fn handoff(&self, client_id: &str) -> AppResult<Option<Selection>> {
        self.get_slot(client_id, slots::HANDOFF).await
    }

    pub async fn set_catalog(&self, client_id: &str, catalog: &serde_json::Value) -> AppResult<()> {
        self.set_slot(client_id, slots::CATALOG, catalog).await
    }
}
