use crate::codec::decode_value;
use crate::dashboard::DashboardContext;
use crate::registry::{Widget, WidgetDescriptor};
use crate::view::{FormControl, FormField, ViewFragment};
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_true() -> bool {
    true
}

/// Editor toolbar switches. Everything is on unless the config turns it off.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolbarConfig {
    #[serde(default = "default_true")]
    pub show_bold: bool,
    #[serde(default = "default_true")]
    pub show_italic: bool,
    #[serde(default = "default_true")]
    pub show_heading: bool,
    #[serde(default = "default_true")]
    pub show_bullet_list: bool,
    #[serde(default = "default_true")]
    pub show_ordered_list: bool,
    #[serde(default = "default_true")]
    pub show_blockquote: bool,
    #[serde(default = "default_true")]
    pub show_code_block: bool,
    #[serde(default = "default_true")]
    pub show_link: bool,
    #[serde(default = "default_true")]
    pub show_image: bool,
    #[serde(default = "default_true")]
    pub show_table: bool,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            show_bold: true,
            show_italic: true,
            show_heading: true,
            show_bullet_list: true,
            show_ordered_list: true,
            show_blockquote: true,
            show_code_block: true,
            show_link: true,
            show_image: true,
            show_table: true,
        }
    }
}

impl ToolbarConfig {
    fn enabled_tools(&self) -> Vec<&'static str> {
        let flags = [
            (self.show_bold, "bold"),
            (self.show_italic, "italic"),
            (self.show_heading, "heading"),
            (self.show_bullet_list, "bullet list"),
            (self.show_ordered_list, "ordered list"),
            (self.show_blockquote, "blockquote"),
            (self.show_code_block, "code block"),
            (self.show_link, "link"),
            (self.show_image, "image"),
            (self.show_table, "table"),
        ];
        flags
            .into_iter()
            .filter_map(|(on, name)| on.then_some(name))
            .collect()
    }
}

/// A create-note form pinned to the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteFormConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toolbar: Option<ToolbarConfig>,
}

pub struct NoteFormWidget {
    cfg: NoteFormConfig,
}

impl NoteFormWidget {
    pub fn new(cfg: NoteFormConfig) -> Self {
        Self { cfg }
    }

    pub fn descriptor() -> WidgetDescriptor {
        WidgetDescriptor::new(
            "note_form",
            "Note form",
            "Create a note without leaving the dashboard",
            NoteFormWidget::new,
        )
        .with_config_form(config_form)
    }
}

impl Widget for NoteFormWidget {
    fn render(&self, _ctx: &DashboardContext<'_>) -> ViewFragment {
        let toolbar = self.cfg.toolbar.clone().unwrap_or_default();
        ViewFragment::Column(vec![
            ViewFragment::Field(FormField::new(
                "title",
                "Title",
                FormControl::Text {
                    value: self.cfg.default_title.clone().unwrap_or_default(),
                },
            )),
            ViewFragment::Field(FormField::new(
                "content",
                self.cfg.placeholder.as_deref().unwrap_or("Write a note..."),
                FormControl::Text {
                    value: String::new(),
                },
            )),
            ViewFragment::Text(format!("Toolbar: {}", toolbar.enabled_tools().join(", "))),
        ])
    }
}

fn config_form(config: &Value) -> ViewFragment {
    let cfg: NoteFormConfig = decode_value(config);
    ViewFragment::Column(vec![
        ViewFragment::Field(FormField::new(
            "defaultTitle",
            "Default title",
            FormControl::Text {
                value: cfg.default_title.unwrap_or_default(),
            },
        )),
        ViewFragment::Field(FormField::new(
            "placeholder",
            "Placeholder",
            FormControl::Text {
                value: cfg.placeholder.unwrap_or_default(),
            },
        )),
    ])
}
