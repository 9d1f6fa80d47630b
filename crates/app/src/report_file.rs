//! Persisting a finished game to disk. A failed save never changes the
//! outcome; the caller only prints a warning.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use labyrinth_core::GameReport;
use serde::{Deserialize, Serialize};

pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    pub format_version: u32,
    pub seed: u64,
    pub saved_at_unix_ms: u64,
    pub report: GameReport,
}

impl ReportFile {
    pub fn new(seed: u64, report: GameReport) -> Self {
        let saved_at_unix_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |duration| duration.as_millis() as u64);
        Self { format_version: FORMAT_VERSION, seed, saved_at_unix_ms, report }
    }

    /// File name in the working directory, stamped with the save time.
    pub fn default_path(&self) -> PathBuf {
        PathBuf::from(format!("labyrinth_game_{}.json", self.saved_at_unix_ms))
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let report: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_core::{Outcome, Pos};
    use tempfile::tempdir;

    fn sample_report() -> GameReport {
        GameReport {
            outcome: Outcome::Victory,
            avatar: Pos { y: 15, x: 7 },
            minotaur: Some(Pos { y: 3, x: 3 }),
            minotaur_slain: false,
            moves_made: 42,
            duration_ms: 9_001,
            duration_micros: 9_001_337,
            grid_rows: vec!["#U#".to_string(), "# #".to_string(), "#I#".to_string()],
        }
    }

    #[test]
    fn json_roundtrip() {
        let file = ReportFile::new(777, sample_report());
        let json = serde_json::to_string(&file).unwrap();
        let decoded: ReportFile = serde_json::from_str(&json).unwrap();
        assert_eq!(file, decoded);
    }

    #[test]
    fn atomic_write_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");

        let file = ReportFile::new(99, sample_report());
        file.write_atomic(&path).unwrap();
        assert!(path.exists());

        let loaded = ReportFile::load(&path).unwrap();
        assert_eq!(file, loaded);

        let tmp_path = path.with_extension("json.tmp");
        assert!(!tmp_path.exists());
    }

    #[test]
    fn default_path_carries_the_timestamp() {
        let file = ReportFile::new(1, sample_report());
        let name = file.default_path().to_string_lossy().into_owned();
        assert!(name.starts_with("labyrinth_game_"), "{name}");
        assert!(name.ends_with(".json"), "{name}");
        assert!(name.contains(&file.saved_at_unix_ms.to_string()), "{name}");
    }

    #[test]
    fn load_rejects_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = ReportFile::load(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
