//! Landing panel of the PDP server console

use crate::component::{define, ComponentDefinition, ComponentError, Render};

pub const TAG: &str = "show-home";

const TEMPLATE: &str = r#"
<style include="shared-styles">
    :host {
        display: block;
        height: 100%;
    }
</style>
<vaadin-vertical-layout style="width: 100%; height: 100%; padding: var(--lumo-space-m);" theme="spacing">
    <h1>SAPL PDP-Server CE</h1>Community Edition
</vaadin-vertical-layout>
"#;

/// The `show-home` view: static, no properties
pub fn definition() -> Result<ComponentDefinition, ComponentError> {
    define(TAG, Render::markup(TEMPLATE), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Properties;
    use crate::template::{AttrValue, Node};

    #[test]
    fn test_show_home_is_stateless() {
        let def = definition().expect("Should define");
        assert_eq!(def.tag().as_str(), TAG);
        assert!(def.is_stateless());
    }

    #[test]
    fn test_show_home_template_structure() {
        let template = definition().unwrap().render(&Properties::new()).unwrap();
        assert!(template.values().is_empty());
        assert_eq!(template.nodes().len(), 2);

        let layout = match &template.nodes()[1] {
            Node::Element(e) => e,
            other => panic!("Expected element, got {:?}", other),
        };
        assert_eq!(layout.name, "vaadin-vertical-layout");
        assert_eq!(
            layout.attribute("theme"),
            Some(&AttrValue::Literal("spacing".to_string()))
        );
        assert_eq!(template.text_content().matches("SAPL PDP-Server CE").count(), 1);
    }
}
