//! Common imports from external crates.

pub use anyhow::{bail, ensure, format_err, Context, Error, Result};
pub use indexmap::{IndexMap, IndexSet};
pub use itertools::Itertools;
pub use log::{info, warn};
pub use once_cell::sync::Lazy;
pub use regex::Regex;
pub use serde::{Deserialize, Serialize};
pub use std::{
    collections::HashSet,
    fmt::{self, Debug, Display},
    fs,
    path::{Path, PathBuf},
};
