use super::peer::PeerBucket;
use super::{Dashboard, DashboardConsumer, MetricsConsumer, RelationDataError, ScrapeJob};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Snapshot of every relation the charm takes part in.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RelationData {
    pub scrape_jobs: Vec<ScrapeJob>,
    pub dashboards: Vec<Dashboard>,
    pub peers: Option<PeerRelationData>,
}

/// Peer relation section: the remote units and the application bucket.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PeerRelationData {
    pub units: Vec<String>,
    pub app_data: HashMap<String, String>,
}

impl From<PeerRelationData> for PeerBucket {
    fn from(data: PeerRelationData) -> Self {
        PeerBucket::new(data.units, data.app_data)
    }
}

/// YAML (or JSON) file holding the relation data. It is read again on every access so each
/// event observes the relation state at the time it is handled.
#[derive(Debug, Clone)]
pub struct RelationDataFile {
    path: PathBuf,
}

impl RelationDataFile {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// A missing file means no relation has been joined yet.
    pub fn load(&self) -> Result<RelationData, RelationDataError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Relation data file not found");
            return Ok(RelationData::default());
        }
        let file = std::fs::File::open(&self.path)?;
        Ok(serde_yaml::from_reader(file)?)
    }

    /// Peer relation bucket, if any. Unreadable relation data is reported by the event handlers,
    /// here it only means no peer relation.
    pub fn peer_bucket(&self) -> Option<PeerBucket> {
        match self.load() {
            Ok(relation_data) => relation_data.peers.map(PeerBucket::from),
            Err(err) => {
                warn!(%err, "Could not read the peer relation");
                None
            }
        }
    }
}

impl MetricsConsumer for RelationDataFile {
    fn jobs(&self) -> Result<Vec<ScrapeJob>, RelationDataError> {
        Ok(self.load()?.scrape_jobs)
    }
}

impl DashboardConsumer for RelationDataFile {
    fn dashboards(&self) -> Result<Vec<Dashboard>, RelationDataError> {
        Ok(self.load()?.dashboards)
    }
}
