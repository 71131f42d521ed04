//! Map view: a feature collection and the active time window

use crate::map::{features_in_window, Feature, FeatureCollection};
use crate::temporal::{Dated, TemporalResult, TimeWindow};

#[derive(Debug, Clone, Default)]
pub struct MapExplorer {
    collection: FeatureCollection,
    window: TimeWindow,
}

impl MapExplorer {
    pub fn new(collection: FeatureCollection, window: TimeWindow) -> Self {
        MapExplorer { collection, window }
    }

    pub fn collection(&self) -> &FeatureCollection {
        &self.collection
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// Move the window; an invalid window leaves the current one in place
    pub fn set_window(&mut self, min: i32, max: i32) -> TemporalResult<()> {
        self.window = TimeWindow::new(min, max)?;
        Ok(())
    }

    /// Features overlapping the window
    pub fn visible_features(&self) -> Vec<&Feature> {
        features_in_window(&self.collection, &self.window)
    }

    /// Features that no window will ever show
    pub fn undated_count(&self) -> usize {
        self.collection.features.iter().filter(|f| !f.is_dated()).count()
    }
}
