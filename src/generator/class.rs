// Mon Oct 19 2026 - Alex

use crate::config::GeneratorConfig;
use crate::generator::{FieldAligner, GeneratorError, RenderedField, Renderer};
use crate::modifier::ModifierRegistry;
use crate::output::CodeWriter;
use crate::source::{DocumentationProvider, LayoutProvider};
use crate::utils::logging::scoped_timer;
use crate::utils::StringUtils;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedClass {
    pub record_id: u32,
    pub class_name: String,
    pub source: String,
    pub accessors: usize,
    pub placeholders: usize,
}

impl GeneratedClass {
    pub fn file_name(&self) -> String {
        format!("{}.java", self.class_name)
    }
}

/// Produces one wrapper class per record by reconciling the reflected layout
/// with the documentation table.
pub struct WrapperGenerator {
    layouts: Arc<dyn LayoutProvider>,
    documentation: Arc<dyn DocumentationProvider>,
    registry: &'static ModifierRegistry,
    config: GeneratorConfig,
}

impl WrapperGenerator {
    pub fn new(
        layouts: Arc<dyn LayoutProvider>,
        documentation: Arc<dyn DocumentationProvider>,
        config: GeneratorConfig,
    ) -> Self {
        Self {
            layouts,
            documentation,
            registry: ModifierRegistry::global(),
            config,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn class_name(&self, record_id: u32, record_name: &str) -> String {
        format!(
            "{}{:02X}{}",
            self.config.class_prefix,
            record_id,
            StringUtils::capitalize_words(record_name)
        )
    }

    pub fn generate(&self, record_id: u32) -> Result<GeneratedClass, GeneratorError> {
        let layout = self.layouts.layout(record_id)?;
        let table = self.documentation.documentation(record_id)?;
        let class_name = self.class_name(record_id, &table.record_name);

        // Alignment runs to completion first so a fatal field yields no text at all.
        let aligner = FieldAligner::new(&layout, self.registry);
        let fields = aligner.align(&table)?;

        let renderer = Renderer::new(self.config.indent_width);
        let mut writer = CodeWriter::new(self.config.indent_width);
        self.write_preamble(&mut writer, record_id, &class_name);

        let mut accessors = 0;
        let mut placeholders = 0;
        for field in &fields {
            match renderer.render(field) {
                RenderedField::Accessors { getter, setter } => {
                    writer.blank_line().block(&getter).blank_line().block(&setter);
                    accessors += 1;
                }
                RenderedField::Placeholder(comment) => {
                    log::warn!(
                        "{}: no reflected field for documented field '{}'",
                        class_name,
                        field.documented().display_name
                    );
                    writer.blank_line().line(&comment);
                    placeholders += 1;
                }
            }
        }

        writer.dedent().line("}");

        log::info!(
            "Generated {} ({} accessor pairs, {} skipped)",
            class_name,
            accessors,
            placeholders
        );

        Ok(GeneratedClass {
            record_id,
            class_name,
            source: writer.finish(),
            accessors,
            placeholders,
        })
    }

    /// Generates every documented record in ascending id order, stopping at
    /// the first failure.
    pub fn generate_all(&self) -> Result<Vec<GeneratedClass>, GeneratorError> {
        let _timer = scoped_timer("generate_all");

        let mut ids = self.documentation.record_ids();
        ids.sort_unstable();
        ids.dedup();

        ids.into_iter().map(|id| self.generate(id)).collect()
    }

    fn write_preamble(&self, writer: &mut CodeWriter, record_id: u32, class_name: &str) {
        if let Some(package) = &self.config.package {
            writer.line(&format!("package {};", package)).blank_line();
        }
        if !self.config.imports.is_empty() {
            for import in &self.config.imports {
                writer.line(&format!("import {};", import));
            }
            writer.blank_line();
        }

        let container = &self.config.container_class;
        writer
            .line(&format!("public class {} extends {} {{", class_name, self.config.base_class))
            .indent()
            .line(&format!("public static final int ID = {};", record_id))
            .blank_line()
            .line(&format!("public {}() {{", class_name))
            .indent()
            .line(&format!("super(new {}(ID), ID);", container))
            .line("handle.getModifier().writeDefaults();")
            .dedent()
            .line("}")
            .blank_line()
            .line(&format!("public {}({} packet) {{", class_name, container))
            .indent()
            .line("super(packet, ID);")
            .dedent()
            .line("}");
    }
}
