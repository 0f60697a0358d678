// Fri Oct 16 2026 - Alex

use crate::generator::aligner::{AlignedField, FieldAlignment};
use crate::generator::naming;
use crate::output::CodeWriter;

/// Source text produced for one documented field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedField {
    Accessors { getter: String, setter: String },
    Placeholder(String),
}

pub struct Renderer {
    indent_width: usize,
}

impl Renderer {
    pub fn new(indent_width: usize) -> Self {
        Self { indent_width }
    }

    pub fn render(&self, field: &FieldAlignment<'_>) -> RenderedField {
        match field {
            FieldAlignment::Resolved(aligned) => RenderedField::Accessors {
                getter: self.getter(aligned),
                setter: self.setter(aligned),
            },
            FieldAlignment::Unresolved { documented, .. } => {
                RenderedField::Placeholder(format!("// Cannot generate field {}", documented.display_name))
            }
        }
    }

    pub fn getter(&self, field: &AlignedField<'_>) -> String {
        let name = naming::method_name(&field.documented.display_name);
        let output_type = naming::accessor_type(&field.documented.documented_type);
        let native = field.modifier.output_type();

        let cast = if native != output_type {
            format!("({}) ", output_type)
        } else {
            String::new()
        };

        let mut writer = CodeWriter::new(self.indent_width);
        writer
            .line("/**")
            .line(&format!(
                " * Retrieve {}.",
                naming::doc_sentence(&field.documented.note, &field.documented.display_name)
            ))
            .line(&format!(" * @return The current {}", field.documented.display_name))
            .line(" */")
            .line(&format!("public {} get{}() {{", output_type, name))
            .indent()
            .line(&format!(
                "return {}handle.{}.read({});",
                cast,
                field.modifier.accessor(),
                field.storage_index
            ))
            .dedent()
            .line("}");
        writer.finish()
    }

    pub fn setter(&self, field: &AlignedField<'_>) -> String {
        let name = naming::method_name(&field.documented.display_name);
        let input_type = naming::accessor_type(&field.documented.documented_type);
        let native = field.modifier.output_type();

        let cast = if native != input_type {
            format!("({}) ", native)
        } else {
            String::new()
        };

        let mut writer = CodeWriter::new(self.indent_width);
        writer
            .line("/**")
            .line(&format!(
                " * Set {}.",
                naming::doc_sentence(&field.documented.note, &field.documented.display_name)
            ))
            .line(" * @param value - new value.")
            .line(" */")
            .line(&format!("public void set{}({} value) {{", name, input_type))
            .indent()
            .line(&format!(
                "handle.{}.write({}, {}value);",
                field.modifier.accessor(),
                field.storage_index,
                cast
            ))
            .dedent()
            .line("}");
        writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documentation::DocumentedField;
    use crate::modifier::Modifier;
    use crate::structure::{DataType, ReflectedField};

    fn aligned<'a>(documented: &'a DocumentedField, reflected: &'a ReflectedField, modifier: Modifier, storage_index: usize) -> AlignedField<'a> {
        AlignedField {
            position: 0,
            documented,
            reflected,
            modifier,
            storage_index,
        }
    }

    #[test]
    fn test_matching_types_have_no_cast() {
        let documented = DocumentedField::new("Entity ID", "int", "The entity's id");
        let reflected = ReflectedField::new("a", Modifier::Integers.input_type());
        let field = aligned(&documented, &reflected, Modifier::Integers, 2);
        let renderer = Renderer::new(4);

        let getter = renderer.getter(&field);
        assert_eq!(
            getter,
            "/**\n * Retrieve the entity's id.\n * @return The current Entity ID\n */\n\
             public int getEntityID() {\n    return handle.getIntegers().read(2);\n}\n"
        );

        let setter = renderer.setter(&field);
        assert_eq!(
            setter,
            "/**\n * Set the entity's id.\n * @param value - new value.\n */\n\
             public void setEntityID(int value) {\n    handle.getIntegers().write(2, value);\n}\n"
        );
    }

    #[test]
    fn test_mismatched_types_are_cast_both_ways() {
        let documented = DocumentedField::new("Direction", "direction", "Facing direction");
        let reflected = ReflectedField::new("dir", DataType::class("a.Direction"));
        let field = aligned(&documented, &reflected, Modifier::Enums, 0);
        let renderer = Renderer::new(4);

        let getter = renderer.getter(&field);
        let setter = renderer.setter(&field);

        assert!(getter.contains("public direction getDirection() {"));
        assert!(getter.contains("return (direction) handle.getSpecificModifier(Enum.class).read(0);"));
        assert!(setter.contains("public void setDirection(direction value) {"));
        assert!(setter.contains("handle.getSpecificModifier(Enum.class).write(0, (Enum<?>) value);"));
    }

    #[test]
    fn test_textual_mismatch_still_casts() {
        let documented = DocumentedField::new("Chunk Data", "array of unsigned byte", "Compressed data");
        let reflected = ReflectedField::new("data", Modifier::ByteArrays.input_type());
        let field = aligned(&documented, &reflected, Modifier::ByteArrays, 0);
        let renderer = Renderer::new(4);

        assert!(renderer.getter(&field).contains("return handle.getByteArrays().read(0);"));

        let documented = DocumentedField::new("Count", "unsigned byte", "Item count");
        let reflected = ReflectedField::new("count", Modifier::Integers.input_type());
        let field = aligned(&documented, &reflected, Modifier::Integers, 1);

        assert!(renderer.getter(&field).contains("return (byte) handle.getIntegers().read(1);"));
        assert!(renderer.setter(&field).contains("handle.getIntegers().write(1, (int) value);"));
    }

    #[test]
    fn test_placeholder() {
        let documented = DocumentedField::new("Padding", "byte", "Unused");
        let field = FieldAlignment::Unresolved { position: 4, documented: &documented };

        assert_eq!(
            Renderer::new(4).render(&field),
            RenderedField::Placeholder("// Cannot generate field Padding".to_string())
        );
    }
}
