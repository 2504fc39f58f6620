//! Temporary installation roots and target projects.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub struct InstallRootFixture {
    pub tmp: TempDir,
}

impl InstallRootFixture {
    /// `light-spec` with two rules, `heavy-spec` with a nested layout, and a
    /// memory starter holding one file and one directory.
    pub fn standard() -> Self {
        InstallRootBuilder::new()
            .rule("light-spec", "a.md", "# Rule A\n")
            .rule("light-spec", "b.md", "# Rule B\n")
            .rule("heavy-spec", "core/01-workflow.md", "workflow\n")
            .rule("heavy-spec", "core/testing.md", "testing\n")
            .rule("heavy-spec", "extras/style.md", "style\n")
            .rule("heavy-spec", "README.txt", "not a rule\n")
            .memory_starter("activeContext.md", "template context\n")
            .memory_starter("decisions/0001-template.md", "template adr\n")
            .build()
    }

    pub fn root(&self) -> PathBuf {
        self.tmp.path().join("install")
    }

    /// An empty target project directory.
    pub fn target(&self, name: &str) -> PathBuf {
        let path = self.tmp.path().join("targets").join(name);
        fs::create_dir_all(&path).expect("create target");
        path
    }
}

#[derive(Default)]
pub struct InstallRootBuilder {
    files: Vec<(PathBuf, String)>,
}

impl InstallRootBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, rule_set: &str, path: &str, content: &str) -> Self {
        self.files.push((
            Path::new("rule_sets").join(rule_set).join(path),
            content.to_string(),
        ));
        self
    }

    pub fn memory_starter(mut self, path: &str, content: &str) -> Self {
        self.files
            .push((Path::new("memory_starters").join(path), content.to_string()));
        self
    }

    pub fn file(mut self, path: &str, content: &str) -> Self {
        self.files.push((PathBuf::from(path), content.to_string()));
        self
    }

    pub fn build(self) -> InstallRootFixture {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("install");
        fs::create_dir_all(&root).expect("create install root");
        for (path, content) in self.files {
            let full = root.join(path);
            fs::create_dir_all(full.parent().expect("parent")).expect("create parent");
            fs::write(full, content).expect("write fixture file");
        }
        InstallRootFixture { tmp }
    }
}

/// Sorted file names directly inside `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
