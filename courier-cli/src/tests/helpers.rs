//! Test helpers for writing CLI input files into a temporary workspace.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

use crate::plan::PlanArgs;

pub(super) const MAP_TEXT: &str = "\
Broxton Ave
2
34.0620 -118.4470 34.0625 -118.4470
34.0625 -118.4470 34.0630 -118.4471
Weyburn Ave
1
34.0625 -118.4470 34.0625 -118.4460
";

pub(super) const DELIVERIES_TEXT: &str = "\
34.0620 -118.4470
34.0630 -118.4471:Falafel
34.0625 -118.4460:Boba tea
";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).unwrap_or_else(|err| panic!("write {path}: {err}"));
}

/// A temporary directory holding a street map and a deliveries file.
pub(super) struct Workspace {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) map: Utf8PathBuf,
    pub(super) deliveries: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let map = root.join("streets.txt");
        let deliveries = root.join("deliveries.txt");
        Self {
            _dir: dir,
            root,
            map,
            deliveries,
        }
    }

    /// Workspace with the default map and deliveries written to disk.
    pub(super) fn populated() -> Self {
        let workspace = Self::new();
        workspace.write_map(MAP_TEXT);
        workspace.write_deliveries(DELIVERIES_TEXT);
        workspace
    }

    pub(super) fn write_map(&self, text: &str) {
        write_utf8(&self.map, text.as_bytes());
    }

    pub(super) fn write_deliveries(&self, text: &str) {
        write_utf8(&self.deliveries, text.as_bytes());
    }

    pub(super) fn args(&self) -> PlanArgs {
        PlanArgs {
            map: Some(self.map.clone()),
            deliveries: Some(self.deliveries.clone()),
            seed: Some(7),
            max_iterations: Some(500),
        }
    }
}
