use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::emitter::TemplateMapping;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;

use super::operation::TemplateOperation;

/// Plans the file operation for each emitter of a generation run.
pub struct TemplateProcessor<'a> {
    /// Dependencies
    engine: &'a dyn TemplateRenderer,

    /// Other
    output_root: &'a Path,
    context: &'a serde_json::Value,
}

impl<'a> TemplateProcessor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        output_root: &'a Path,
        context: &'a serde_json::Value,
    ) -> Self {
        Self { engine, output_root, context }
    }

    /// Reads the mapping's template, renders it and compares the result with
    /// the current target.
    ///
    /// # Returns
    /// * `TemplateOperation::Skip` - the emitter's `when` condition is false
    /// * `TemplateOperation::Unchanged` - the target already has the rendered content
    /// * `TemplateOperation::Write` - the target is missing or outdated
    pub fn process(&self, mapping: &TemplateMapping<'_>) -> Result<TemplateOperation> {
        let emitter = mapping.emitter();

        if let Some(condition) = emitter.when.as_deref() {
            if !self.engine.execute_expression(condition, self.context)? {
                return Ok(TemplateOperation::Skip {
                    emitter: mapping.name().to_string(),
                    condition: condition.to_string(),
                });
            }
        }

        let source = mapping.input_path();
        let template = fs::read_to_string(&source).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::TemplateNotFound {
                emitter: mapping.name().to_string(),
                path: source.display().to_string(),
            },
            _ => Error::IoError(e),
        })?;

        let content = self.engine.render(&template, self.context, Some(mapping.name()))?;
        let target = mapping.output_target(self.output_root);

        match fs::read(&target) {
            Ok(current) if current == content.as_bytes() => {
                Ok(TemplateOperation::Unchanged { target })
            }
            Ok(_) => {
                Ok(TemplateOperation::Write { source, target, content, target_exists: true })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Ok(TemplateOperation::Write { source, target, content, target_exists: false })
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::{Emitter, APPLICATION_FONT_PROVIDER_HPP, BUILTIN_EMITTERS};
    use crate::renderer::MiniJinjaRenderer;
    use serde_json::json;
    use std::borrow::Cow;

    fn setup_root(template: &str) -> tempfile::TempDir {
        let root = tempfile::tempdir().unwrap();
        let templates = root.path().join("Templates");
        fs::create_dir_all(&templates).unwrap();
        fs::write(templates.join("ApplicationFontProvider.hpp.temp"), template).unwrap();
        root
    }

    #[test]
    fn renders_missing_target_as_write() {
        let root = setup_root("#define FONTS {{ fonts | length }}\n");
        let out = tempfile::tempdir().unwrap();
        let engine = MiniJinjaRenderer::new();
        let context = json!({ "fonts": ["a", "b"] });
        let processor = TemplateProcessor::new(&engine, out.path(), &context);

        let mapping = TemplateMapping::new(root.path(), &BUILTIN_EMITTERS[0]);
        let operation = processor.process(&mapping).unwrap();
        assert_eq!(
            operation,
            TemplateOperation::Write {
                source: mapping.input_path(),
                target: mapping.output_target(out.path()),
                content: "#define FONTS 2\n".to_string(),
                target_exists: false,
            }
        );
    }

    #[test]
    fn identical_target_is_unchanged() {
        let root = setup_root("static\n");
        let out = tempfile::tempdir().unwrap();
        let mapping = TemplateMapping::new(root.path(), &BUILTIN_EMITTERS[0]);
        let target = mapping.output_target(out.path());
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, "static\n").unwrap();

        let engine = MiniJinjaRenderer::new();
        let context = json!({});
        let processor = TemplateProcessor::new(&engine, out.path(), &context);
        assert_eq!(
            processor.process(&mapping).unwrap(),
            TemplateOperation::Unchanged { target }
        );
    }

    #[test]
    fn outdated_target_is_overwritten() {
        let root = setup_root("new\n");
        let out = tempfile::tempdir().unwrap();
        let mapping = TemplateMapping::new(root.path(), &BUILTIN_EMITTERS[0]);
        let target = mapping.output_target(out.path());
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, "old\n").unwrap();

        let engine = MiniJinjaRenderer::new();
        let context = json!({});
        let processor = TemplateProcessor::new(&engine, out.path(), &context);
        match processor.process(&mapping).unwrap() {
            TemplateOperation::Write { content, target_exists, .. } => {
                assert_eq!(content, "new\n");
                assert!(target_exists);
            }
            other => panic!("expected Write, got {other:?}"),
        }
    }

    #[test]
    fn missing_template_is_reported() {
        let root = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let engine = MiniJinjaRenderer::new();
        let context = json!({});
        let processor = TemplateProcessor::new(&engine, out.path(), &context);

        let mapping = TemplateMapping::new(root.path(), &BUILTIN_EMITTERS[0]);
        match processor.process(&mapping) {
            Err(Error::TemplateNotFound { emitter, path }) => {
                assert_eq!(emitter, "ApplicationFontProvider.hpp");
                assert_eq!(path, mapping.input_path().display().to_string());
            }
            other => panic!("expected TemplateNotFound, got {other:?}"),
        }
    }

    #[test]
    fn false_condition_skips_without_reading_template() {
        let root = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let engine = MiniJinjaRenderer::new();
        let context = json!({ "fonts": [] });
        let processor = TemplateProcessor::new(&engine, out.path(), &context);

        let conditional = Emitter {
            when: Some(Cow::Borrowed("fonts | length > 0")),
            ..APPLICATION_FONT_PROVIDER_HPP
        };
        let mapping = TemplateMapping::new(root.path(), &conditional);
        assert_eq!(
            processor.process(&mapping).unwrap(),
            TemplateOperation::Skip {
                emitter: "ApplicationFontProvider.hpp".to_string(),
                condition: "fonts | length > 0".to_string(),
            }
        );
    }

    #[test]
    fn render_errors_propagate() {
        let root = setup_root("{% for %}");
        let out = tempfile::tempdir().unwrap();
        let engine = MiniJinjaRenderer::new();
        let context = json!({});
        let processor = TemplateProcessor::new(&engine, out.path(), &context);

        let mapping = TemplateMapping::new(root.path(), &BUILTIN_EMITTERS[0]);
        assert!(matches!(processor.process(&mapping), Err(Error::MinijinjaError(_))));
    }
}
