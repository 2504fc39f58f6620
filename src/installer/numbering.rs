//! Sequential renumbering of rule files.
//!
//! A stage collects every file with one extension under a source tree,
//! sorts the full paths byte-wise, and writes them flat into the target as
//! `NN-<stem>.<ext>`. The sequence number alone makes each name unique.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::{ExtensionMode, NumberingConfig};
use crate::error::Result;

/// How one copy stage selects and renames files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingPlan {
    /// Extension collected from the source tree, without the dot.
    pub source_extension: String,
    pub mode: ExtensionMode,
    pub width: usize,
}

impl NumberingPlan {
    /// Rule set → project rules.
    pub fn for_rule_set(config: &NumberingConfig) -> Self {
        Self {
            source_extension: config.source_extension.clone(),
            mode: config.extension_mode,
            width: config.width,
        }
    }

    /// Project rules → generated rules. Reads what the first stage wrote,
    /// so `01-a.mdc` becomes `01-01-a.mdc`.
    pub fn for_project_rules(config: &NumberingConfig) -> Self {
        Self {
            source_extension: config.extension_mode.extension().to_string(),
            mode: config.extension_mode,
            width: config.width,
        }
    }

    pub fn file_name(&self, sequence: usize, stem: &str) -> String {
        format!(
            "{:0width$}-{}.{}",
            sequence,
            stem,
            self.mode.extension(),
            width = self.width
        )
    }

    /// Pair each source (already sorted) with its output name.
    pub fn assign_names(&self, sources: &[PathBuf]) -> Vec<(PathBuf, String)> {
        sources
            .iter()
            .enumerate()
            .map(|(i, source)| {
                let stem = source
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                (source.clone(), self.file_name(i + 1, &stem))
            })
            .collect()
    }
}

/// Every file under `dir` whose extension equals `extension` exactly,
/// sorted by full path.
pub fn collect_sources(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|e| e == extension) {
            files.push(path.to_path_buf());
        }
    }
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(files)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberedCopy {
    pub sequence: usize,
    pub source: PathBuf,
    pub file_name: String,
}

/// Copy every matching file from `source_dir` into `target_dir` under its
/// numbered name. A missing source yields an empty result.
pub fn copy_numbered(
    source_dir: &Path,
    target_dir: &Path,
    plan: &NumberingPlan,
) -> Result<Vec<NumberedCopy>> {
    if !source_dir.exists() {
        warn!(path = %source_dir.display(), "Source directory not found, nothing to copy");
        return Ok(Vec::new());
    }

    fs::create_dir_all(target_dir)?;

    let sources = collect_sources(source_dir, &plan.source_extension)?;
    let mut copies = Vec::with_capacity(sources.len());

    for (i, (source, file_name)) in plan.assign_names(&sources).into_iter().enumerate() {
        let content = fs::read_to_string(&source)?;
        fs::write(target_dir.join(&file_name), content)?;
        debug!(source = %source.display(), file = %file_name, "Copied rule");

        copies.push(NumberedCopy {
            sequence: i + 1,
            source,
            file_name,
        });
    }

    Ok(copies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn rule_plan() -> NumberingPlan {
        NumberingPlan::for_rule_set(&NumberingConfig::default())
    }

    fn mirror_plan() -> NumberingPlan {
        NumberingPlan::for_project_rules(&NumberingConfig::default())
    }

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_file_name_padding() {
        let plan = rule_plan();
        assert_eq!(plan.file_name(1, "intro"), "01-intro.mdc");
        assert_eq!(plan.file_name(42, "intro"), "42-intro.mdc");
        assert_eq!(plan.file_name(100, "intro"), "100-intro.mdc");

        let keep = NumberingPlan {
            mode: ExtensionMode::KeepMd,
            ..rule_plan()
        };
        assert_eq!(keep.file_name(7, "style"), "07-style.md");
    }

    #[test]
    fn test_collect_sources_filters_and_sorts() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        write(&root.join("b.md"), "b");
        write(&root.join("a.md"), "a");
        write(&root.join("nested").join("c.md"), "c");
        write(&root.join("upper.MD"), "skip");
        write(&root.join("cursor.mdc"), "skip");
        write(&root.join("notes.txt"), "skip");

        let files = collect_sources(root, "md").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.md", "b.md", "nested/c.md"]);
    }

    #[test]
    fn test_sort_is_bytewise_on_full_path() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        // '-' (0x2d) sorts before '/' (0x2f), so "a-b.md" precedes "a/z.md"
        write(&root.join("a").join("z.md"), "z");
        write(&root.join("a-b.md"), "ab");
        write(&root.join("Zeta.md"), "Z");

        let files = collect_sources(root, "md").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["Zeta.md", "a-b.md", "a/z.md"]);
    }

    #[test]
    fn test_copy_numbered_preserves_content() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("light-spec");
        write(&src.join("a.md"), "# A\r\nwindows line\r\n");
        write(&src.join("b.md"), "# B\n");
        let dest = tmp.path().join("project_rules");

        let copies = copy_numbered(&src, &dest, &rule_plan()).unwrap();

        assert_eq!(copies.len(), 2);
        assert_eq!(copies[0].file_name, "01-a.mdc");
        assert_eq!(copies[1].file_name, "02-b.mdc");
        assert_eq!(copies[1].sequence, 2);
        assert_eq!(
            fs::read(dest.join("01-a.mdc")).unwrap(),
            b"# A\r\nwindows line\r\n"
        );
        assert_eq!(fs::read_to_string(dest.join("02-b.mdc")).unwrap(), "# B\n");
    }

    #[test]
    fn test_copy_numbered_same_stem_in_different_dirs() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("rules");
        write(&src.join("backend").join("style.md"), "backend");
        write(&src.join("frontend").join("style.md"), "frontend");
        let dest = tmp.path().join("out");

        let copies = copy_numbered(&src, &dest, &rule_plan()).unwrap();

        assert_eq!(copies.len(), 2);
        assert_eq!(
            fs::read_to_string(dest.join("01-style.mdc")).unwrap(),
            "backend"
        );
        assert_eq!(
            fs::read_to_string(dest.join("02-style.mdc")).unwrap(),
            "frontend"
        );
    }

    #[test]
    fn test_copy_numbered_missing_source_is_empty() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("out");
        let copies = copy_numbered(&tmp.path().join("absent"), &dest, &rule_plan()).unwrap();
        assert!(copies.is_empty());
        assert!(!dest.exists());
    }

    #[test]
    fn test_mirror_stage_renumbers_project_rules() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("light-spec");
        write(&src.join("core.md"), "core");
        write(&src.join("extra").join("testing.md"), "testing");
        let project_extra = tmp.path().join("project_rules").join("2024-roadmap.mdc");
        let project = tmp.path().join("project_rules");
        let generated = tmp.path().join(".cursor").join("rules");

        let first = copy_numbered(&src, &project, &rule_plan()).unwrap();
        write(&project_extra, "roadmap");
        let second = copy_numbered(&project, &generated, &mirror_plan()).unwrap();

        let first: Vec<_> = first.into_iter().map(|c| c.file_name).collect();
        let second: Vec<_> = second.into_iter().map(|c| c.file_name).collect();
        assert_eq!(first, vec!["01-core.mdc", "02-testing.mdc"]);
        assert_eq!(
            second,
            vec!["01-01-core.mdc", "02-02-testing.mdc", "03-2024-roadmap.mdc"]
        );
        assert_eq!(
            fs::read_to_string(generated.join("02-02-testing.mdc")).unwrap(),
            "testing"
        );
        assert_eq!(
            fs::read_to_string(generated.join("03-2024-roadmap.mdc")).unwrap(),
            "roadmap"
        );
    }

    #[test]
    fn test_names_unique_for_duplicate_stems() {
        let sources: Vec<PathBuf> = (0..120)
            .map(|i| PathBuf::from(format!("/rules/{:03}/same.md", i)))
            .collect();
        let names: HashSet<_> = rule_plan()
            .assign_names(&sources)
            .into_iter()
            .map(|(_, name)| name)
            .collect();
        assert_eq!(names.len(), 120);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn source_strategy() -> impl Strategy<Value = Vec<PathBuf>> {
            prop::collection::vec(
                (
                    prop::option::of("[a-z]{1,4}"),
                    "[a-zA-Z0-9_][a-zA-Z0-9_-]{0,10}",
                ),
                0..60,
            )
            .prop_map(|entries| {
                let mut paths: Vec<PathBuf> = entries
                    .into_iter()
                    .map(|(dir, stem)| match dir {
                        Some(dir) => PathBuf::from(format!("/src/{}/{}.md", dir, stem)),
                        None => PathBuf::from(format!("/src/{}.md", stem)),
                    })
                    .collect();
                paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
                paths.dedup();
                paths
            })
        }

        proptest! {
            #[test]
            fn numbered_names_never_collide(sources in source_strategy()) {
                let names: Vec<String> = rule_plan()
                    .assign_names(&sources)
                    .into_iter()
                    .map(|(_, name)| name)
                    .collect();
                let unique: HashSet<&String> = names.iter().collect();
                prop_assert_eq!(unique.len(), sources.len());
            }

            #[test]
            fn mirror_stage_prefixes_project_names(sources in source_strategy()) {
                let project: Vec<String> = rule_plan()
                    .assign_names(&sources)
                    .into_iter()
                    .map(|(_, name)| name)
                    .collect();

                let mut mirrored_sources: Vec<PathBuf> = project
                    .iter()
                    .map(|name| PathBuf::from("/target/project_rules").join(name))
                    .collect();
                mirrored_sources.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

                let mirrored: Vec<String> = mirror_plan()
                    .assign_names(&mirrored_sources)
                    .into_iter()
                    .map(|(_, name)| name)
                    .collect();
                let expected: Vec<String> = project
                    .iter()
                    .enumerate()
                    .map(|(i, name)| {
                        let stem = name.strip_suffix(".mdc").unwrap_or(name);
                        format!("{:02}-{}.mdc", i + 1, stem)
                    })
                    .collect();
                prop_assert_eq!(&mirrored, &expected);

                let unique: HashSet<&String> = mirrored.iter().collect();
                prop_assert_eq!(unique.len(), sources.len());
            }
        }
    }
}
