// Mon Oct 19 2026 - Alex

use super::args::{Args, Command, GenerateArgs, ListArgs};
use crate::config::GeneratorConfig;
use crate::generator::WrapperGenerator;
use crate::output::OutputManager;
use crate::source::{DocumentationProvider, JsonCatalog};
use crate::ui;
use crate::utils::LoggingUtils;
use anyhow::Context;
use std::sync::Arc;

pub struct CommandHandler {
    quiet: bool,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn execute(&mut self, args: Args) -> anyhow::Result<()> {
        self.quiet = args.quiet;
        self.setup_logging(&args);

        match args.command {
            Command::Generate(gen_args) => self.handle_generate(gen_args),
            Command::List(list_args) => self.handle_list(list_args),
        }
    }

    fn setup_logging(&self, args: &Args) {
        if args.no_color {
            colored::control::set_override(false);
        }
        LoggingUtils::init(LoggingUtils::level_from_str(&args.log_level), !args.no_color);
    }

    fn load_catalog(&self, path: &std::path::Path) -> anyhow::Result<Arc<JsonCatalog>> {
        let catalog = JsonCatalog::load(path).with_context(|| format!("Failed to load catalog {:?}", path))?;
        Ok(Arc::new(catalog))
    }

    fn handle_generate(&self, args: GenerateArgs) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let config = match &args.config {
            Some(path) => GeneratorConfig::load(path).with_context(|| format!("Failed to load config {:?}", path))?,
            None => GeneratorConfig::default(),
        };

        let catalog = self.load_catalog(&args.catalog)?;
        let generator = WrapperGenerator::new(catalog.clone(), catalog, config);

        let classes = match args.record {
            Some(id) => vec![generator.generate(id).with_context(|| format!("Failed to generate record 0x{:02X}", id))?],
            None => generator.generate_all().context("Failed to generate records")?,
        };

        match &args.output {
            Some(dir) => {
                let manager = OutputManager::new(dir.clone()).with_manifest(!args.no_manifest);
                let paths = manager.write_all(&classes)?;
                if !self.quiet {
                    for (class, path) in classes.iter().zip(&paths) {
                        ui::print_success(&format!("{} -> {}", class.class_name, path.display()));
                        if class.placeholders > 0 {
                            ui::print_warning(&format!(
                                "{} has {} field(s) that need manual review",
                                class.class_name, class.placeholders
                            ));
                        }
                    }
                }
            }
            None => {
                let sources: Vec<&str> = classes.iter().map(|c| c.source.as_str()).collect();
                print!("{}", sources.join("\n"));
            }
        }

        Ok(())
    }

    fn handle_list(&self, args: ListArgs) -> anyhow::Result<()> {
        let catalog = self.load_catalog(&args.catalog)?;
        let generator = WrapperGenerator::new(catalog.clone(), catalog.clone(), GeneratorConfig::default());

        let mut ids = catalog.record_ids();
        ids.sort_unstable();

        if !self.quiet {
            ui::print_info(&format!("{} records in {:?}", ids.len(), args.catalog));
        }
        for id in ids {
            let record = catalog.record(id)?;
            println!(
                "0x{:02X}  {:<40} {:>3} documented  {:>3} declared",
                id,
                generator.class_name(id, &record.name),
                record.documentation.len(),
                record.fields.len()
            );
        }

        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::manager::MANIFEST_FILE;
    use std::fs;
    use std::path::PathBuf;

    const CATALOG: &str = r#"{ "records": [{
        "id": 3, "name": "Chat Message",
        "fields": [{ "name": "message", "type": "java.lang.String" }],
        "documentation": [{ "name": "Message", "type": "string", "note": "The chat text" }]
    }] }"#;

    fn args(command: Command) -> Args {
        Args {
            command,
            log_level: "warn".to_string(),
            quiet: true,
            no_color: true,
        }
    }

    #[test]
    fn test_generate_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("catalog.json");
        fs::write(&catalog, CATALOG).unwrap();
        let out = dir.path().join("out");

        let command = Command::Generate(GenerateArgs {
            catalog,
            record: None,
            all: true,
            config: None,
            output: Some(out.clone()),
            no_manifest: false,
        });
        CommandHandler::new().execute(args(command)).unwrap();

        let source = fs::read_to_string(out.join("Packet03ChatMessage.java")).unwrap();
        assert!(source.contains("public String getMessage() {"));
        assert!(out.join(MANIFEST_FILE).exists());
    }

    #[test]
    fn test_generate_unknown_record_fails() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("catalog.json");
        fs::write(&catalog, CATALOG).unwrap();

        let command = Command::Generate(GenerateArgs {
            catalog,
            record: Some(0x40),
            all: false,
            config: None,
            output: Some(dir.path().join("out")),
            no_manifest: true,
        });
        let err = CommandHandler::new().execute(args(command)).unwrap_err();
        assert!(err.to_string().contains("0x40"));
    }

    #[test]
    fn test_list_missing_catalog_fails() {
        let command = Command::List(ListArgs {
            catalog: PathBuf::from("does-not-exist.json"),
        });
        assert!(CommandHandler::new().execute(args(command)).is_err());
    }
}
