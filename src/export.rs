//! Batch export of the full icon set.
//!
//! The plan is fixed by the configuration: one primary icon per entry in
//! the size matrix, then the capture, assignments and sync shortcuts.
//! Every file is attempted; a failure is recorded against that file and
//! the batch moves on.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::GeneratorConfig;
use crate::error::{IconError, Result};
use crate::icons::IconKind;
use crate::render::write_png;

/// Filename of the optional web-manifest fragment.
pub const MANIFEST_FILENAME: &str = "manifest-icons.json";

/// One file the batch will produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconJob {
    pub kind: IconKind,
    pub size: i32,
    pub file_name: String,
}

impl IconJob {
    pub fn new(kind: IconKind, size: i32) -> Self {
        Self {
            kind,
            size,
            file_name: kind.file_name(size),
        }
    }
}

/// Result of attempting one file.
#[derive(Debug)]
pub struct FileStatus {
    pub job: IconJob,
    pub path: PathBuf,
    /// `None` when the file was written.
    pub error: Option<IconError>,
}

impl FileStatus {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-file outcome of a whole batch, in plan order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileStatus>,
}

impl BatchReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &FileStatus> {
        self.files.iter().filter(|f| f.is_ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileStatus> {
        self.files.iter().filter(|f| !f.is_ok())
    }

    pub fn is_success(&self) -> bool {
        self.files.iter().all(FileStatus::is_ok)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// List the files a batch will produce, in order.
pub fn plan(config: &GeneratorConfig) -> Vec<IconJob> {
    config
        .primary_sizes
        .iter()
        .map(|&size| IconJob::new(IconKind::Primary, size))
        .chain(
            IconKind::SHORTCUTS
                .iter()
                .map(|&kind| IconJob::new(kind, config.shortcut_size)),
        )
        .collect()
}

/// Render and write every icon into `output_dir`.
///
/// The directory must already exist.
pub fn export_all(output_dir: &Path, config: &GeneratorConfig) -> BatchReport {
    export_each(output_dir, config, |_| {})
}

/// [`export_all`], calling `on_file` as each file finishes.
pub fn export_each(
    output_dir: &Path,
    config: &GeneratorConfig,
    mut on_file: impl FnMut(&FileStatus),
) -> BatchReport {
    let theme = config.theme.resolved();
    let mut report = BatchReport::default();

    for job in plan(config) {
        let path = output_dir.join(&job.file_name);
        let result = job
            .kind
            .render(job.size, &theme, &config.label)
            .and_then(|canvas| write_png(canvas, &path));

        let status = FileStatus {
            job,
            path,
            error: result.err(),
        };
        on_file(&status);
        report.files.push(status);
    }

    report
}

#[derive(Debug, Serialize)]
struct ManifestIcon {
    src: String,
    sizes: String,
    #[serde(rename = "type")]
    mime: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    purpose: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct ManifestShortcut {
    name: &'static str,
    icons: Vec<ManifestIcon>,
}

#[derive(Debug, Serialize)]
struct ManifestIcons {
    icons: Vec<ManifestIcon>,
    shortcuts: Vec<ManifestShortcut>,
}

impl ManifestIcons {
    fn from_report(report: &BatchReport, base_url: &str) -> Self {
        let mut icons = Vec::new();
        let mut shortcuts = Vec::new();

        for status in report.succeeded() {
            let job = &status.job;
            let icon = ManifestIcon {
                src: format!("{}{}", base_url, job.file_name),
                sizes: format!("{0}x{0}", job.size),
                mime: "image/png",
                purpose: None,
            };

            match job.kind {
                IconKind::Primary => icons.push(ManifestIcon {
                    purpose: Some("any maskable"),
                    ..icon
                }),
                kind => shortcuts.push(ManifestShortcut {
                    name: kind.title(),
                    icons: vec![icon],
                }),
            }
        }

        Self { icons, shortcuts }
    }
}

/// Serialize the written icons as the `icons`/`shortcuts` part of a web manifest.
pub fn manifest_json(report: &BatchReport, base_url: &str) -> Result<String> {
    let manifest = ManifestIcons::from_report(report, base_url);
    serde_json::to_string_pretty(&manifest).map_err(|e| IconError::Encoding {
        path: PathBuf::from(MANIFEST_FILENAME),
        message: format!("Failed to serialize manifest: {}", e),
    })
}

/// Write [`manifest_json`] into `output_dir`, returning the file path.
pub fn write_manifest(report: &BatchReport, output_dir: &Path, base_url: &str) -> Result<PathBuf> {
    let path = output_dir.join(MANIFEST_FILENAME);
    let json = manifest_json(report, base_url)?;
    fs::write(&path, json + "\n").map_err(|e| IconError::Io {
        path: path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn file_names(report: &BatchReport) -> Vec<&str> {
        report.files.iter().map(|f| f.job.file_name.as_str()).collect()
    }

    #[test]
    fn test_plan_default() {
        let jobs = plan(&GeneratorConfig::default());
        let names: Vec<&str> = jobs.iter().map(|j| j.file_name.as_str()).collect();

        insta::assert_snapshot!(names.join("\n"), @r###"
        icon-72x72.png
        icon-96x96.png
        icon-128x128.png
        icon-144x144.png
        icon-152x152.png
        icon-192x192.png
        icon-384x384.png
        icon-512x512.png
        shortcut-capture.png
        shortcut-assignments.png
        shortcut-sync.png
        "###);

        assert!(jobs[8..].iter().all(|j| j.size == 96));
    }

    #[test]
    fn test_export_all_writes_every_file() {
        let dir = tempdir().unwrap();
        let config = GeneratorConfig::default();

        let report = export_all(dir.path(), &config);

        assert!(report.is_success());
        assert_eq!(report.len(), 11);

        let mut on_disk: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        on_disk.sort();
        let mut expected: Vec<String> = file_names(&report).iter().map(|s| s.to_string()).collect();
        expected.sort();
        assert_eq!(on_disk, expected);

        for status in &report.files {
            assert!(fs::metadata(&status.path).unwrap().len() > 0);
            let img = image::open(&status.path).unwrap();
            let size = status.job.size as u32;
            assert_eq!((img.width(), img.height()), (size, size), "{}", status.job.file_name);
        }
    }

    #[test]
    fn test_invalid_size_fails_alone() {
        let dir = tempdir().unwrap();
        let config = GeneratorConfig {
            primary_sizes: vec![-5, 96, 128, 144, 152, 192, 384, 512],
            ..GeneratorConfig::default()
        };

        let report = export_all(dir.path(), &config);

        assert!(!report.is_success());
        assert_eq!(report.succeeded().count(), 10);

        let failed: Vec<&FileStatus> = report.failed().collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].job.size, -5);
        assert!(matches!(failed[0].error, Some(IconError::InvalidSize { size: -5 })));
        assert!(!failed[0].path.exists());

        assert!(dir.path().join("shortcut-sync.png").exists());
    }

    #[test]
    fn test_oversized_icon_fails_alone() {
        let dir = tempdir().unwrap();
        let config = GeneratorConfig {
            primary_sizes: vec![i32::MAX, 72],
            ..GeneratorConfig::default()
        };

        let report = export_all(dir.path(), &config);

        assert_eq!(report.len(), 5);
        let failed: Vec<&FileStatus> = report.failed().collect();
        assert_eq!(failed.len(), 1);
        assert!(matches!(
            failed[0].error,
            Some(IconError::InvalidSize { size: i32::MAX })
        ));

        let written: Vec<&str> = report.succeeded().map(|f| f.job.file_name.as_str()).collect();
        assert_eq!(
            written,
            vec![
                "icon-72x72.png",
                "shortcut-capture.png",
                "shortcut-assignments.png",
                "shortcut-sync.png",
            ]
        );
    }

    #[test]
    fn test_missing_directory_reports_every_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");

        let mut seen = 0;
        let report = export_each(&missing, &GeneratorConfig::default(), |_| seen += 1);

        assert_eq!(seen, 11);
        assert_eq!(report.failed().count(), 11);
        assert!(report
            .failed()
            .all(|f| matches!(f.error, Some(IconError::Io { .. }))));
    }

    #[test]
    fn test_manifest_lists_written_icons() {
        let dir = tempdir().unwrap();
        let config = GeneratorConfig {
            primary_sizes: vec![72, 0],
            ..GeneratorConfig::default()
        };

        let report = export_all(dir.path(), &config);
        let json = manifest_json(&report, "/icons/").unwrap();

        insta::assert_snapshot!(json, @r###"
        {
          "icons": [
            {
              "src": "/icons/icon-72x72.png",
              "sizes": "72x72",
              "type": "image/png",
              "purpose": "any maskable"
            }
          ],
          "shortcuts": [
            {
              "name": "Capture",
              "icons": [
                {
                  "src": "/icons/shortcut-capture.png",
                  "sizes": "96x96",
                  "type": "image/png"
                }
              ]
            },
            {
              "name": "Assignments",
              "icons": [
                {
                  "src": "/icons/shortcut-assignments.png",
                  "sizes": "96x96",
                  "type": "image/png"
                }
              ]
            },
            {
              "name": "Sync",
              "icons": [
                {
                  "src": "/icons/shortcut-sync.png",
                  "sizes": "96x96",
                  "type": "image/png"
                }
              ]
            }
          ]
        }
        "###);
    }

    #[test]
    fn test_write_manifest() {
        let dir = tempdir().unwrap();
        let report = export_all(dir.path(), &GeneratorConfig::default());

        let path = write_manifest(&report, dir.path(), "").unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

        assert_eq!(parsed["icons"].as_array().unwrap().len(), 8);
        assert_eq!(parsed["icons"][0]["src"], "icon-72x72.png");
        assert_eq!(parsed["shortcuts"].as_array().unwrap().len(), 3);
    }
}
