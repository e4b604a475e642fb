//! Split-level dataset statistics.

use super::*;
use crate::common::*;

/// Counts over the tracklets of one split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitStats {
    pub num_persons: usize,
    pub num_tracklets: usize,
    pub num_images: usize,
    pub num_cameras: usize,
}

impl SplitStats {
    pub fn collect(tracklets: &[Tracklet]) -> Self {
        let persons: HashSet<_> = tracklets.iter().map(|tracklet| tracklet.person_id).collect();
        let cameras: HashSet<_> = tracklets.iter().map(|tracklet| tracklet.camera_id).collect();
        let num_images = tracklets
            .iter()
            .map(|tracklet| tracklet.num_images())
            .sum();

        Self {
            num_persons: persons.len(),
            num_tracklets: tracklets.len(),
            num_images,
            num_cameras: cameras.len(),
        }
    }
}

/// Statistics of all three splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub train: SplitStats,
    pub query: SplitStats,
    pub gallery: SplitStats,
}

impl Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "  --------------------------------------------------------";
        writeln!(f, "Dataset statistics:")?;
        writeln!(f, "{}", rule)?;
        writeln!(
            f,
            "  subset   | # ids | # tracklets | # images | # cameras"
        )?;
        writeln!(f, "{}", rule)?;
        for (name, stats) in [
            ("train", &self.train),
            ("query", &self.query),
            ("gallery", &self.gallery),
        ] {
            writeln!(
                f,
                "  {:<8} | {:>5} | {:>11} | {:>8} | {:>9}",
                name, stats.num_persons, stats.num_tracklets, stats.num_images, stats.num_cameras
            )?;
        }
        write!(f, "{}", rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracklet(person_id: usize, camera_id: usize, num_images: usize) -> Tracklet {
        Tracklet {
            image_paths: (0..num_images)
                .map(|index| PathBuf::from(format!("{:04}_c{}_{:06}.jpg", person_id, camera_id + 1, index)))
                .collect(),
            track_id: 0,
            person_id,
            track_id_in_camera: 0,
            person_id_in_camera: 0,
            camera_id,
        }
    }

    #[test]
    fn collect_counts_distinct_ids_and_total_images() {
        let tracklets = vec![
            tracklet(0, 0, 2),
            tracklet(0, 1, 3),
            tracklet(1, 1, 1),
        ];
        let stats = SplitStats::collect(&tracklets);
        assert_eq!(stats.num_persons, 2);
        assert_eq!(stats.num_tracklets, 3);
        assert_eq!(stats.num_images, 6);
        assert_eq!(stats.num_cameras, 2);
    }

    #[test]
    fn collect_on_empty_split() {
        let stats = SplitStats::collect(&[]);
        assert_eq!(stats.num_persons, 0);
        assert_eq!(stats.num_tracklets, 0);
        assert_eq!(stats.num_images, 0);
        assert_eq!(stats.num_cameras, 0);
    }
}
