//! Emitters pair a source template with the location of the file generated from it.
//!
//! The set of emitters is table driven: [`BUILTIN_EMITTERS`] seeds an
//! [`EmitterRegistry`], and configuration files may append or replace entries.
//! A [`TemplateMapping`] binds one emitter to the root directory of a
//! generation run and answers where its template lives and where its output goes.

use crate::constants::{EMITTER_PATH_SEPARATOR, TEMPLATES_DIR, TEMPLATE_SUFFIX};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::{debug, warn};
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A single generated file: where its template comes from and where it is written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Emitter {
    /// Unique logical name of the generated file
    pub name: Cow<'static, str>,
    /// Template path relative to the `Templates` directory, `/`-separated
    pub template: Cow<'static, str>,
    /// Output path relative to the output root, `/`-separated
    pub output: Cow<'static, str>,
    /// Optional expression; the emitter is skipped when it evaluates to false
    #[serde(default)]
    pub when: Option<Cow<'static, str>>,
}

/// Font provider header consumed by the application font manager.
pub const APPLICATION_FONT_PROVIDER_HPP: Emitter = Emitter {
    name: Cow::Borrowed("ApplicationFontProvider.hpp"),
    template: Cow::Borrowed("ApplicationFontProvider.hpp.temp"),
    output: Cow::Borrowed("/include/fonts/ApplicationFontProvider.hpp"),
    when: None,
};

/// Emitters every registry starts with, in generation order.
pub static BUILTIN_EMITTERS: &[Emitter] = &[APPLICATION_FONT_PROVIDER_HPP];

/// Splits an emitter path into its non-empty segments.
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(EMITTER_PATH_SEPARATOR).filter(|s| !s.is_empty() && *s != ".")
}

impl Emitter {
    /// Checks that a declared emitter can be mapped onto the filesystem.
    ///
    /// Names must not be blank, and both paths need at least one segment
    /// and no `..` segments so outputs stay inside the output root.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::ValidationError(
                "emitter name must not be empty".to_string(),
            ));
        }

        for (field, value) in [("template", &self.template), ("output", &self.output)] {
            if segments(value).next().is_none() {
                return Err(Error::ValidationError(format!(
                    "emitter '{}' has an empty {field} path",
                    self.name
                )));
            }
            if segments(value).any(|segment| segment == "..") {
                return Err(Error::ValidationError(format!(
                    "emitter '{}' {field} path '{value}' must not contain '..'",
                    self.name
                )));
            }
        }
        Ok(())
    }
}

/// An emitter bound to the root directory of a generation run.
#[derive(Debug, Clone, Copy)]
pub struct TemplateMapping<'a> {
    root_dir: &'a Path,
    emitter: &'a Emitter,
}

impl<'a> TemplateMapping<'a> {
    pub fn new(root_dir: &'a Path, emitter: &'a Emitter) -> Self {
        Self { root_dir, emitter }
    }

    pub fn name(&self) -> &'a str {
        &self.emitter.name
    }

    pub fn emitter(&self) -> &'a Emitter {
        self.emitter
    }

    /// Location of the template source: `<root>/Templates/<template>`.
    ///
    /// The path is not checked for existence.
    pub fn input_path(&self) -> PathBuf {
        segments(&self.emitter.template)
            .fold(self.root_dir.join(TEMPLATES_DIR), |path, segment| path.join(segment))
    }

    /// The output path exactly as declared, independent of the root directory.
    pub fn output_path(&self) -> &'a str {
        &self.emitter.output
    }

    /// Concrete location of the generated file under `output_root`.
    pub fn output_target(&self, output_root: &Path) -> PathBuf {
        segments(&self.emitter.output)
            .fold(output_root.to_path_buf(), |path, segment| path.join(segment))
    }
}

/// Ordered table of emitters keyed by name.
#[derive(Debug, Clone)]
pub struct EmitterRegistry {
    emitters: IndexMap<String, Emitter>,
}

impl EmitterRegistry {
    /// Creates a registry holding the built-in emitters.
    pub fn new() -> Self {
        let emitters = BUILTIN_EMITTERS
            .iter()
            .map(|emitter| (emitter.name.to_string(), emitter.clone()))
            .collect();
        Self { emitters }
    }

    /// Validates and adds an emitter. An emitter with the same name is replaced in place.
    pub fn register(&mut self, emitter: Emitter) -> Result<()> {
        emitter.validate()?;
        let name = emitter.name.to_string();
        if self.emitters.insert(name.clone(), emitter).is_some() {
            debug!("Emitter '{name}' replaced by configuration");
        } else {
            debug!("Emitter '{name}' registered");
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Emitter> {
        self.emitters.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Emitter> {
        self.emitters.values()
    }

    pub fn len(&self) -> usize {
        self.emitters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emitters.is_empty()
    }

    /// Comma separated emitter names, used in error messages.
    pub fn names(&self) -> String {
        self.emitters.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
    }

    /// Returns the named emitters in registry order, or every emitter when `names` is empty.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&Emitter>> {
        if names.is_empty() {
            return Ok(self.iter().collect());
        }

        if let Some(unknown) =
            names.iter().map(|name| name.as_ref()).find(|name| !self.emitters.contains_key(*name))
        {
            return Err(Error::UnknownEmitter {
                name: unknown.to_string(),
                available: self.names(),
            });
        }

        Ok(self
            .emitters
            .iter()
            .filter(|(key, _)| names.iter().any(|name| name.as_ref() == key.as_str()))
            .map(|(_, emitter)| emitter)
            .collect())
    }

    /// Binds the selected emitters to `root_dir`.
    pub fn mappings<'a, S: AsRef<str>>(
        &'a self,
        root_dir: &'a Path,
        names: &[S],
    ) -> Result<Vec<TemplateMapping<'a>>> {
        Ok(self
            .select(names)?
            .into_iter()
            .map(|emitter| TemplateMapping::new(root_dir, emitter))
            .collect())
    }

    /// Template files under `<root>/Templates` that no emitter reads.
    ///
    /// Symlinks are followed. Entries that cannot be read are logged and skipped.
    pub fn unreferenced_templates(&self, root_dir: &Path) -> Vec<PathBuf> {
        let templates_dir = root_dir.join(TEMPLATES_DIR);
        if !templates_dir.is_dir() {
            return Vec::new();
        }

        let referenced: Vec<PathBuf> = self
            .iter()
            .map(|emitter| TemplateMapping::new(root_dir, emitter).input_path())
            .collect();

        let mut unreferenced = Vec::new();
        for entry in WalkDir::new(&templates_dir).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Failed to scan '{}': {e}", templates_dir.display());
                    continue;
                }
            };
            let path = entry.path();
            let is_template = entry.file_type().is_file()
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.ends_with(TEMPLATE_SUFFIX));
            if is_template && !referenced.iter().any(|r| r == path) {
                unreferenced.push(path.to_path_buf());
            }
        }
        unreferenced
    }
}

impl Default for EmitterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
