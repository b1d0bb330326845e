//! Application data shared with the other units of the charm over the peer relation.
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use thiserror::Error;
use tracing::debug;

/// Name of the peer relation.
pub const PEER_RELATION_NAME: &str = "grafana";

#[derive(Error, Debug)]
pub enum PeerDataError {
    #[error("could not serialize peer data `{key}`: {err}")]
    Serialize { key: String, err: serde_json::Error },

    #[error("could not deserialize peer data `{key}`: {err}")]
    Deserialize { key: String, err: serde_json::Error },
}

/// Key/value bucket of the peer relation. Values are JSON documents.
pub trait PeerStore {
    fn put(&self, key: &str, value: String);
    fn get(&self, key: &str) -> Option<String>;
    /// Number of remote units joined to the relation.
    fn unit_count(&self) -> usize;
}

/// In-memory application bucket of the peer relation.
#[derive(Debug, Default)]
pub struct PeerBucket {
    units: Vec<String>,
    data: RwLock<HashMap<String, String>>,
}

impl PeerBucket {
    pub fn new(units: Vec<String>, data: HashMap<String, String>) -> Self {
        Self {
            units,
            data: RwLock::new(data),
        }
    }
}

impl PeerStore for PeerBucket {
    fn put(&self, key: &str, value: String) {
        self.data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value);
    }

    fn get(&self, key: &str) -> Option<String> {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn unit_count(&self) -> usize {
        self.units.len()
    }
}

/// Typed access to the peer bucket. `None` stands for an absent peer relation: writes are
/// dropped and reads return the empty value.
pub struct PeerData<P: PeerStore> {
    relation: Option<P>,
}

impl<P: PeerStore> PeerData<P> {
    pub fn new(relation: Option<P>) -> Self {
        Self { relation }
    }

    /// Whether any other unit joined the peer relation.
    pub fn has_peers(&self) -> bool {
        self.relation
            .as_ref()
            .is_some_and(|relation| relation.unit_count() > 0)
    }

    pub fn set_peer_data<T: Serialize>(&self, key: &str, data: &T) -> Result<(), PeerDataError> {
        let Some(relation) = &self.relation else {
            debug!(key, relation = PEER_RELATION_NAME, "No peer relation, dropping peer data");
            return Ok(());
        };
        let value = serde_json::to_string(data).map_err(|err| PeerDataError::Serialize {
            key: key.to_string(),
            err,
        })?;
        relation.put(key, value);
        Ok(())
    }

    /// Returns the stored value, or `T::default()` when either the key or the relation is missing.
    pub fn get_peer_data<T>(&self, key: &str) -> Result<T, PeerDataError>
    where
        T: DeserializeOwned + Default,
    {
        let Some(relation) = &self.relation else {
            return Ok(T::default());
        };
        match relation.get(key) {
            Some(value) if !value.is_empty() => {
                serde_json::from_str(&value).map_err(|err| PeerDataError::Deserialize {
                    key: key.to_string(),
                    err,
                })
            }
            _ => Ok(T::default()),
        }
    }
}
