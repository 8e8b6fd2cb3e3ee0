//! Durable local state: two JSON records in browser local storage, one for
//! the wallet and one for the per-subject progress map. Reads are tolerant
//! (missing or corrupt JSON falls back to defaults); writes are
//! fire-and-forget. The active phase is never part of either record.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

use crate::model::{PlayerWallet, Subject, TrackProgress};

pub const WALLET_KEY: &str = "qq_wallet";
pub const PROGRESS_KEY: &str = "qq_progress";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Malformed JSON is "no saved state", never a crash.
fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("discarding corrupt record {key}: {err}");
            None
        }
    }
}

fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = local_storage()?.get_item(key).ok().flatten()?;
    decode(key, &raw)
}

fn save<T: Serialize>(key: &str, value: &T) {
    if let Some(store) = local_storage() {
        if let Ok(raw) = serde_json::to_string(value) {
            let _ = store.set_item(key, &raw);
        }
    }
}

pub fn load_wallet() -> PlayerWallet {
    load(WALLET_KEY).unwrap_or_default()
}

pub fn load_progress() -> BTreeMap<Subject, TrackProgress> {
    load(PROGRESS_KEY).unwrap_or_default()
}

pub fn save_wallet(wallet: &PlayerWallet) {
    save(WALLET_KEY, wallet);
}

pub fn save_progress(progress: &BTreeMap<Subject, TrackProgress>) {
    save(PROGRESS_KEY, progress);
}

/// Hard reset: both records gone.
pub fn clear() {
    if let Some(store) = local_storage() {
        let _ = store.remove_item(WALLET_KEY);
        let _ = store.remove_item(PROGRESS_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupt_records_fall_back_to_defaults() {
        for raw in ["", "{not json", "[1,2,", "\"half"] {
            assert_eq!(decode::<PlayerWallet>(WALLET_KEY, raw), None);
            assert_eq!(
                decode::<BTreeMap<Subject, TrackProgress>>(PROGRESS_KEY, raw),
                None
            );
        }
        // The callers substitute defaults for a rejected record.
        assert_eq!(
            decode::<PlayerWallet>(WALLET_KEY, "{}").unwrap_or_default(),
            PlayerWallet::default()
        );
    }

    #[test]
    fn wrong_shape_is_rejected_not_misread() {
        // A wallet blob under the progress key must not half-parse.
        let raw = serde_json::to_string(&PlayerWallet { coins: 3, xp: 4 }).unwrap();
        assert_eq!(
            decode::<BTreeMap<Subject, TrackProgress>>(PROGRESS_KEY, &raw),
            None
        );
    }

    #[test]
    fn progress_record_keeps_subject_keys() {
        let mut progress: BTreeMap<Subject, TrackProgress> = BTreeMap::new();
        progress.insert(
            Subject::Biology,
            TrackProgress {
                completed: [1, 2].into_iter().collect(),
                current_level: 3,
            },
        );
        let raw = serde_json::to_string(&progress).unwrap();
        assert!(raw.contains("Biology"));
        let back: BTreeMap<Subject, TrackProgress> = decode(PROGRESS_KEY, &raw).unwrap();
        assert_eq!(back, progress);
    }
}
