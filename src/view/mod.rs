//! Async-backed views
//!
//! A view pairs a [`ViewHandle`] (request lifecycle, latest request wins)
//! with the state derived from a successful fetch: a [`NetworkExplorer`]
//! for graph views, a [`MapExplorer`] for the map.

pub mod handle;
pub mod map;
pub mod network;
pub mod state;

pub use handle::ViewHandle;
pub use map::MapExplorer;
pub use network::NetworkExplorer;
pub use state::{LoadState, Resolution, Ticket, ViewSlot};

use crate::error::ExplorerError;
use crate::source::DataSource;
use crate::temporal::TimeWindow;

/// Network view keyed by dataset partition
pub type NetworkView = ViewHandle<Option<String>, NetworkExplorer>;

/// Map view keyed by dataset partition
pub type MapView = ViewHandle<Option<String>, MapExplorer>;

/// Fetch the network for `source` into `view`.
///
/// Category toggles and the search query of the last loaded network carry
/// over to the new one.
pub async fn load_network<S: DataSource + ?Sized>(
    view: &NetworkView,
    data: &S,
    source: Option<String>,
) -> Resolution {
    view.load_carrying(
        source,
        |source| async move {
            let payload = data.network(source.as_deref()).await?;
            Ok::<_, ExplorerError>(NetworkExplorer::from_payload(&payload))
        },
        |previous, next| next.keep_view_state(previous),
    )
    .await
}

/// Fetch the map features for `source` into `view`, starting at `window`
pub async fn load_map<S: DataSource + ?Sized>(
    view: &MapView,
    data: &S,
    source: Option<String>,
    window: TimeWindow,
) -> Resolution {
    view.load(source, |source| async move {
        let collection = data.geojson(source.as_deref()).await?;
        Ok::<_, ExplorerError>(MapExplorer::new(collection, window))
    })
    .await
}
