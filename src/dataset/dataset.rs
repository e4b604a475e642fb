use super::*;
use crate::common::*;

/// The dataset with train, query and gallery tracklet splits.
pub trait ImageDataset
where
    Self: Debug,
{
    /// Training split tracklets.
    fn train(&self) -> &[Tracklet];

    /// Query split tracklets.
    fn query(&self) -> &[Tracklet];

    /// Gallery split tracklets.
    fn gallery(&self) -> &[Tracklet];

    /// Compute per-split statistics.
    fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            train: SplitStats::collect(self.train()),
            query: SplitStats::collect(self.query()),
            gallery: SplitStats::collect(self.gallery()),
        }
    }
}
