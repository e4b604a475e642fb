use crate::common::*;

/// The record with one image path and its identity labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRecord {
    pub path: PathBuf,
    pub track_id: usize,
    /// Global person id, or the dense training label when relabeling was requested.
    pub person_id: usize,
    pub track_id_in_camera: usize,
    pub person_id_in_camera: usize,
    /// Zero-based camera index.
    pub camera_id: usize,
}

/// All images sharing one (person id, camera id) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tracklet {
    pub image_paths: Vec<PathBuf>,
    pub track_id: usize,
    /// Global person id, or the dense training label when relabeling was requested.
    pub person_id: usize,
    pub track_id_in_camera: usize,
    pub person_id_in_camera: usize,
    /// Zero-based camera index.
    pub camera_id: usize,
}

impl Tracklet {
    pub fn num_images(&self) -> usize {
        self.image_paths.len()
    }

    /// Materialize one record per image, carrying the tracklet labels.
    pub fn image_records(&self) -> impl Iterator<Item = ImageRecord> + '_ {
        self.image_paths.iter().map(move |path| ImageRecord {
            path: path.clone(),
            track_id: self.track_id,
            person_id: self.person_id,
            track_id_in_camera: self.track_id_in_camera,
            person_id_in_camera: self.person_id_in_camera,
            camera_id: self.camera_id,
        })
    }
}
