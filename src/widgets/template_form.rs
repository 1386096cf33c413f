use crate::codec::decode_value;
use crate::dashboard::DashboardContext;
use crate::registry::{Widget, WidgetDescriptor};
use crate::view::{FormControl, FormField, ViewFragment};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").unwrap());

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateFormConfig {
    #[serde(default)]
    pub template_id: String,
}

/// Renders a fill-in form for a content template. Each `{{placeholder}}` in
/// the template body becomes one input field.
pub struct TemplateFormWidget {
    cfg: TemplateFormConfig,
}

impl TemplateFormWidget {
    pub fn new(cfg: TemplateFormConfig) -> Self {
        Self { cfg }
    }

    pub fn descriptor() -> WidgetDescriptor {
        WidgetDescriptor::new(
            "template_form",
            "Template form",
            "Generate content from a template",
            TemplateFormWidget::new,
        )
        .with_config_form(config_form)
    }
}

/// Distinct placeholder names, in order of first appearance.
pub fn template_fields(content: &str) -> Vec<String> {
    let mut fields = Vec::new();
    for cap in PLACEHOLDER_RE.captures_iter(content) {
        let name = cap[1].to_string();
        if !fields.contains(&name) {
            fields.push(name);
        }
    }
    fields
}

impl Widget for TemplateFormWidget {
    fn render(&self, ctx: &DashboardContext<'_>) -> ViewFragment {
        if self.cfg.template_id.is_empty() {
            return ViewFragment::Placeholder("no template selected".into());
        }
        let Some(template) = ctx.data.template(&self.cfg.template_id) else {
            return ViewFragment::Placeholder("template not found".into());
        };

        let mut items = vec![ViewFragment::Heading(template.name.clone())];
        let fields = template_fields(&template.content);
        if fields.is_empty() {
            items.push(ViewFragment::Text("This template has no fields.".into()));
        }
        for field in fields {
            items.push(ViewFragment::Field(FormField::new(
                &field,
                &field,
                FormControl::Text {
                    value: String::new(),
                },
            )));
        }
        ViewFragment::Column(items)
    }
}

fn config_form(config: &Value) -> ViewFragment {
    let cfg: TemplateFormConfig = decode_value(config);
    ViewFragment::Column(vec![ViewFragment::Field(FormField::new(
        "templateId",
        "Template",
        FormControl::Text {
            value: cfg.template_id,
        },
    ))])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_placeholders_in_order_without_duplicates() {
        let content = "Dear {{name}},\n{{body}}\nRegards, {{ name }}";
        assert_eq!(template_fields(content), vec!["name", "body"]);
    }

    #[test]
    fn plain_text_has_no_fields() {
        assert!(template_fields("no placeholders here").is_empty());
    }
}
