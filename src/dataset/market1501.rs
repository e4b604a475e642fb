use super::*;
use crate::{common::*, config::DatasetConfig};

const TRAIN_DIR: &str = "bounding_box_train";
const QUERY_DIR: &str = "query";
const GALLERY_DIR: &str = "bounding_box_test";

/// The largest person id; id 0 marks background crops.
pub const MAX_PERSON_ID: i64 = 1501;
/// Market1501 was captured by six cameras, numbered from one.
pub const NUM_CAMERAS: i64 = 6;

static FILE_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(-?\d+)_c(\d)").unwrap());

/// The Market1501 person re-identification dataset.
///
/// Reference:
/// Zheng et al. Scalable Person Re-identification: A Benchmark. ICCV 2015.
///
/// Dataset statistics:
/// - identities: 1501 (+1 for background)
/// - images: 12936 (train) + 3368 (query) + 15913 (gallery)
#[derive(Debug, Clone)]
pub struct Market1501 {
    pub train: Vec<Tracklet>,
    pub query: Vec<Tracklet>,
    pub gallery: Vec<Tracklet>,
}

impl ImageDataset for Market1501 {
    fn train(&self) -> &[Tracklet] {
        &self.train
    }

    fn query(&self) -> &[Tracklet] {
        &self.query
    }

    fn gallery(&self) -> &[Tracklet] {
        &self.gallery
    }
}

impl Market1501 {
    pub fn load(config: &DatasetConfig) -> Result<Self> {
        let DatasetConfig {
            dataset_dir,
            relabel,
            verbose,
        } = config;

        let train_dir = dataset_dir.join(TRAIN_DIR);
        let query_dir = dataset_dir.join(QUERY_DIR);
        let gallery_dir = dataset_dir.join(GALLERY_DIR);

        // check if all directories are available before going deeper
        for dir in [
            dataset_dir.as_path(),
            train_dir.as_path(),
            query_dir.as_path(),
            gallery_dir.as_path(),
        ] {
            ensure!(dir.is_dir(), "'{}' is not available", dir.display());
        }

        let train = load_split(&train_dir, *relabel)
            .with_context(|| format!("failed to load split '{}'", train_dir.display()))?;
        let query = load_split(&query_dir, false)
            .with_context(|| format!("failed to load split '{}'", query_dir.display()))?;
        let gallery = load_split(&gallery_dir, false)
            .with_context(|| format!("failed to load split '{}'", gallery_dir.display()))?;

        let dataset = Self {
            train,
            query,
            gallery,
        };

        if *verbose {
            info!("=> Market1501 loaded");
            for line in dataset.summary().to_string().lines() {
                info!("{}", line);
            }
        }

        Ok(dataset)
    }
}

/// Scan one split directory and group its images into per-camera tracklets.
fn load_split(dir: &Path, relabel: bool) -> Result<Vec<Tracklet>> {
    let images = scan_split_dir(dir)?;

    let images: Vec<_> = if relabel {
        // dense labels in first-observation order
        let pid_to_label: IndexMap<usize, usize> = images
            .iter()
            .map(|image| image.person_id)
            .collect::<IndexSet<_>>()
            .into_iter()
            .enumerate()
            .map(|(label, person_id)| (person_id, label))
            .collect();

        images
            .into_iter()
            .map(|image| SplitImage {
                person_id: pid_to_label[&image.person_id],
                ..image
            })
            .collect()
    } else {
        images
    };

    let camera_ids: IndexSet<usize> = images.iter().map(|image| image.camera_id).collect();

    let mut tracklets = vec![];
    let mut track_id = 0;

    for camera_id in camera_ids {
        let person_ids: IndexSet<usize> = images
            .iter()
            .filter(|image| image.camera_id == camera_id)
            .map(|image| image.person_id)
            .collect();

        for (person_label, person_id) in person_ids.into_iter().enumerate() {
            let image_paths: Vec<PathBuf> = images
                .iter()
                .filter(|image| image.camera_id == camera_id && image.person_id == person_id)
                .map(|image| image.path.clone())
                .collect();

            tracklets.push(Tracklet {
                image_paths,
                track_id,
                person_id,
                track_id_in_camera: person_label,
                person_id_in_camera: person_label,
                camera_id,
            });
            track_id += 1;
        }
    }

    Ok(tracklets)
}

/// One non-junk image of a split before tracklet grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SplitImage {
    path: PathBuf,
    person_id: usize,
    camera_id: usize,
}

/// List the `.jpg` files of a split directory and parse their names. Junk
/// images are dropped.
fn scan_split_dir(dir: &Path) -> Result<Vec<SplitImage>> {
    let pattern = dir.join("*.jpg");
    let pattern = pattern
        .to_str()
        .ok_or_else(|| format_err!("non-UTF-8 path '{}'", dir.display()))?;

    glob::glob(pattern)?
        .map(|result| -> Result<_> {
            let path = result?;
            let parsed = parse_file_name(&path)?;
            Ok(parsed.map(|(person_id, camera_id)| SplitImage {
                path,
                person_id,
                camera_id,
            }))
        })
        .filter_map(|result| result.transpose())
        .try_collect()
}

/// Extract (person id, zero-based camera id) from an image file name, or
/// `None` for junk images.
fn parse_file_name(path: &Path) -> Result<Option<(usize, usize)>> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format_err!("non-UTF-8 file name '{}'", path.display()))?;
    let captures = FILE_NAME_PATTERN
        .captures(file_name)
        .ok_or_else(|| format_err!("unexpected file name '{}'", path.display()))?;

    let person_id: i64 = captures[1]
        .parse()
        .with_context(|| format!("invalid person id in '{}'", path.display()))?;
    let camera_id: i64 = captures[2]
        .parse()
        .with_context(|| format!("invalid camera id in '{}'", path.display()))?;

    // junk images are just ignored
    if person_id == -1 {
        return Ok(None);
    }

    // person id 0 means background
    ensure!(
        (0..=MAX_PERSON_ID).contains(&person_id),
        "person id {} out of range in '{}'",
        person_id,
        path.display()
    );
    ensure!(
        (1..=NUM_CAMERAS).contains(&camera_id),
        "camera id {} out of range in '{}'",
        camera_id,
        path.display()
    );

    // camera index starts from 0
    Ok(Some((person_id as usize, (camera_id - 1) as usize)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_regular_file_name() -> Result<()> {
        let parsed = parse_file_name(Path::new("0002_c1s1_000451_03.jpg"))?;
        assert_eq!(parsed, Some((2, 0)));
        Ok(())
    }

    #[test]
    fn parse_background_file_name() -> Result<()> {
        let parsed = parse_file_name(Path::new("0000_c6s3_088442_01.jpg"))?;
        assert_eq!(parsed, Some((0, 5)));
        Ok(())
    }

    #[test]
    fn parse_junk_file_name() -> Result<()> {
        let parsed = parse_file_name(Path::new("-1_c3s1_000001.jpg"))?;
        assert_eq!(parsed, None);
        Ok(())
    }

    #[test]
    fn parse_malformed_file_name() {
        assert!(parse_file_name(Path::new("thumbs.jpg")).is_err());
        assert!(parse_file_name(Path::new("0001-c1s1_000001.jpg")).is_err());
    }

    #[test]
    fn parse_out_of_range_ids() {
        assert!(parse_file_name(Path::new("1502_c1s1_000001.jpg")).is_err());
        assert!(parse_file_name(Path::new("0001_c7s1_000001.jpg")).is_err());
        assert!(parse_file_name(Path::new("0001_c0s1_000001.jpg")).is_err());
        assert!(parse_file_name(Path::new("-2_c1s1_000001.jpg")).is_err());
    }
}
