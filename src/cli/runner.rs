use crate::{
    cli::{context::build_context, Args, ListArgs},
    config::Config,
    emitter::{EmitterRegistry, TemplateMapping},
    error::{Error, Result},
    ioutils::write_file,
    renderer::new_renderer,
    template::{operation::TemplateOperation, processor::TemplateProcessor},
};
use std::path::{Path, PathBuf};

/// Outcome of a generation run.
#[derive(Debug, Default, PartialEq)]
pub struct GenerationReport {
    /// Targets written, or that would be written in dry-run and check modes
    pub written: Vec<PathBuf>,
    /// Targets already holding the rendered content
    pub unchanged: Vec<PathBuf>,
    /// Emitters skipped because their condition was false
    pub skipped: Vec<String>,
}

/// Main CLI runner that orchestrates a generation run
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete generation workflow
    pub fn run(self) -> Result<GenerationReport> {
        let engine = new_renderer();
        let root_dir = get_root_dir(&self.args.root_dir)?;

        let config = Config::load_config(root_dir)?;
        let registry = config.registry()?;
        self.warn_unreferenced_templates(&registry);

        let context = build_context(
            &config.context,
            self.args.context_file.as_deref(),
            self.args.context.as_deref(),
        )?;
        log::trace!("Template context: {context}");

        let mappings = registry.mappings(root_dir, &self.args.only)?;
        let processor = TemplateProcessor::new(&engine, &self.args.output_dir, &context);

        let mut report = GenerationReport::default();
        let mut failed = 0;
        for mapping in &mappings {
            if let Err(e) = self.process_mapping(&processor, mapping, &mut report) {
                log::error!("Emitter '{}' failed: {e}", mapping.name());
                failed += 1;
            }
        }

        if failed > 0 {
            return Err(Error::GenerationFailed { failed });
        }

        if self.args.check {
            if !report.written.is_empty() {
                return Err(Error::OutOfDate {
                    targets: report
                        .written
                        .iter()
                        .map(|target| target.display().to_string())
                        .collect(),
                });
            }
            println!("All generated files in {} are up to date.", self.args.output_dir.display());
        } else {
            println!("{}", format_summary(&report, &self.args.output_dir, self.args.dry_run));
        }
        Ok(report)
    }

    /// Plans, applies and records the operation for a single emitter
    fn process_mapping(
        &self,
        processor: &TemplateProcessor<'_>,
        mapping: &TemplateMapping<'_>,
        report: &mut GenerationReport,
    ) -> Result<()> {
        let operation = processor.process(mapping)?;
        log::debug!("Planned operation for '{}': {operation:?}", mapping.name());

        match &operation {
            TemplateOperation::Write { target, content, .. } => {
                if !self.is_dry_run() {
                    write_file(content, target)?;
                }
                report.written.push(target.clone());
            }
            TemplateOperation::Unchanged { target } => report.unchanged.push(target.clone()),
            TemplateOperation::Skip { emitter, .. } => report.skipped.push(emitter.clone()),
        }

        log::info!("{}", operation.get_message(self.is_dry_run()));
        Ok(())
    }

    fn warn_unreferenced_templates(&self, registry: &EmitterRegistry) {
        for template in registry.unreferenced_templates(&self.args.root_dir) {
            log::warn!("Template '{}' is not used by any emitter", template.display());
        }
    }

    /// Check mode never touches the filesystem either
    fn is_dry_run(&self) -> bool {
        self.args.dry_run || self.args.check
    }
}

/// Ensures the root directory of a run exists.
fn get_root_dir(root_dir: &Path) -> Result<&Path> {
    if !root_dir.is_dir() {
        return Err(Error::RootDirectoryNotFound { root_dir: root_dir.display().to_string() });
    }
    Ok(root_dir)
}

/// One-line summary of a finished run.
pub fn format_summary(report: &GenerationReport, output_dir: &Path, dry_run: bool) -> String {
    let (prefix, verb) = if dry_run { ("[DRY RUN] ", "would be written") } else { ("", "written") };
    format!(
        "{prefix}Generation completed in {}: {} {verb}, {} unchanged, {} skipped.",
        output_dir.display(),
        report.written.len(),
        report.unchanged.len(),
        report.skipped.len()
    )
}

/// Main entry point for the generate command
pub fn run(args: Args) -> Result<GenerationReport> {
    Runner::new(args).run()
}

/// One tab separated line per emitter: name, input path, output path.
pub fn format_listing(registry: &EmitterRegistry, root_dir: &Path) -> Vec<String> {
    registry
        .iter()
        .map(|emitter| {
            let mapping = TemplateMapping::new(root_dir, emitter);
            format!(
                "{}\t{}\t{}",
                mapping.name(),
                mapping.input_path().display(),
                mapping.output_path()
            )
        })
        .collect()
}

/// Entry point for the list command
pub fn list(args: ListArgs) -> Result<()> {
    let root_dir = get_root_dir(&args.root_dir)?;
    let config = Config::load_config(root_dir)?;
    let registry = config.registry()?;
    for line in format_listing(&registry, root_dir) {
        println!("{line}");
    }
    Ok(())
}
