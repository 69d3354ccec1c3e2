use std::path::PathBuf;

/// What a generation run does for one emitter.
#[derive(Debug, PartialEq)]
pub enum TemplateOperation {
    /// The rendered content differs from the target (or the target is missing).
    Write { source: PathBuf, target: PathBuf, content: String, target_exists: bool },
    /// The target already holds the rendered content.
    Unchanged { target: PathBuf },
    /// The emitter's condition evaluated to false.
    Skip { emitter: String, condition: String },
}

impl TemplateOperation {
    /// Gets a message describing the operation and its status.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    ///
    /// # Returns
    /// * `String` - A descriptive message about the operation
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            TemplateOperation::Write { source, target, target_exists, .. } => {
                if *target_exists {
                    format!(
                        "{}Rendering '{}' to '{}' (overwriting outdated file)",
                        prefix,
                        source.display(),
                        target.display()
                    )
                } else {
                    format!(
                        "{}Rendering '{}' to '{}'",
                        prefix,
                        source.display(),
                        target.display()
                    )
                }
            }

            TemplateOperation::Unchanged { target } => {
                format!("{}Skipping '{}' (already up to date)", prefix, target.display())
            }

            TemplateOperation::Skip { emitter, condition } => {
                format!("{prefix}Skipping emitter '{emitter}' (condition '{condition}' is false)")
            }
        }
    }
}
