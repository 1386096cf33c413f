use crate::codec::decode_value;
use crate::dashboard::DashboardContext;
use crate::registry::{Widget, WidgetDescriptor};
use crate::view::{FormControl, FormField, ViewFragment};
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_max_file_size() -> u32 {
    10
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadConfig {
    /// Upload ceiling in megabytes.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u32,
    /// Allowed extensions; empty accepts everything.
    #[serde(default)]
    pub allowed_extensions: Vec<String>,
    #[serde(default = "default_true")]
    pub show_recent_files: bool,
}

impl Default for FileUploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
            allowed_extensions: Vec::new(),
            show_recent_files: true,
        }
    }
}

pub struct FileUploadWidget {
    cfg: FileUploadConfig,
}

impl FileUploadWidget {
    pub fn new(cfg: FileUploadConfig) -> Self {
        Self { cfg }
    }

    pub fn descriptor() -> WidgetDescriptor {
        WidgetDescriptor::new(
            "file_upload",
            "File upload",
            "Upload files into the workspace",
            FileUploadWidget::new,
        )
        .with_config_form(config_form)
    }
}

impl Widget for FileUploadWidget {
    fn render(&self, ctx: &DashboardContext<'_>) -> ViewFragment {
        let mut items = vec![ViewFragment::Text(format!(
            "Drop files here (max {} MB)",
            self.cfg.max_file_size
        ))];
        if !self.cfg.allowed_extensions.is_empty() {
            items.push(ViewFragment::Text(format!(
                "Accepted: {}",
                self.cfg.allowed_extensions.join(", ")
            )));
        }
        if self.cfg.show_recent_files && !ctx.data.files.is_empty() {
            let mut files: Vec<_> = ctx.data.files.iter().collect();
            files.sort_by_key(|f| std::cmp::Reverse(f.uploaded_at));
            items.push(ViewFragment::Heading("Recent files".into()));
            for file in files.into_iter().take(5) {
                items.push(ViewFragment::Row(vec![
                    ViewFragment::Text(file.name.clone()),
                    ViewFragment::Text(human_size(file.size_bytes)),
                ]));
            }
        }
        ViewFragment::Column(items)
    }
}

fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}

fn config_form(config: &Value) -> ViewFragment {
    let cfg: FileUploadConfig = decode_value(config);
    ViewFragment::Column(vec![
        ViewFragment::Field(FormField::new(
            "maxFileSize",
            "Max file size (MB)",
            FormControl::Number {
                value: cfg.max_file_size as f64,
                min: Some(1.0),
                max: Some(1024.0),
            },
        )),
        ViewFragment::Field(FormField::new(
            "allowedExtensions",
            "Allowed extensions",
            FormControl::Text {
                value: cfg.allowed_extensions.join(", "),
            },
        )),
        ViewFragment::Field(FormField::new(
            "showRecentFiles",
            "Show recent files",
            FormControl::Toggle {
                value: cfg.show_recent_files,
            },
        )),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_size_scales_units() {
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(2048), "2.0 KB");
        assert_eq!(human_size(5 * 1024 * 1024), "5.0 MB");
    }
}
