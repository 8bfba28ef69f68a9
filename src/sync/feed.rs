use tokio::sync::broadcast;

use crate::model::course::Course;
use crate::model::types::Player;

pub const FEED_CAPACITY: usize = 64;

/// A change to one mirrored row, as reported by the store's feed. `Unknown`
/// is the catch-all for events that do not carry enough of the row to be
/// applied directly.
#[derive(Debug, Clone)]
pub enum RemoteEvent<T> {
    Inserted(T),
    Updated(T),
    Deleted { id: String },
    Unknown,
}

/// One message on the change feed, tagged with the collection it belongs to
/// and the owning identity the subscription filters on.
#[derive(Debug, Clone)]
pub enum StoreChange {
    Courses {
        owner: String,
        event: RemoteEvent<Course>,
    },
    Players {
        owner: String,
        event: RemoteEvent<Player>,
    },
}

/// In-process stand-in for the hosted realtime feed: the write path
/// publishes row changes, sync sessions subscribe per collection.
#[derive(Clone)]
pub struct ChangeFeed {
    sender: broadcast::Sender<StoreChange>,
}

impl ChangeFeed {
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(FEED_CAPACITY);
        Self { sender }
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.sender.subscribe()
    }

    /// Fire-and-forget: a feed with no listeners drops the change.
    pub fn publish(&self, change: StoreChange) {
        let _ = self.sender.send(change);
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}
