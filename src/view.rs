use serde::{Deserialize, Serialize};

/// Renderer-agnostic widget output. Widgets describe what to show; front ends
/// decide how to draw it. `render_text` below is the reference front end used
/// by the CLI and the tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewFragment {
    Empty,
    Text(String),
    Heading(String),
    Stat { label: String, value: String },
    Link { label: String, url: String },
    Column(Vec<ViewFragment>),
    Row(Vec<ViewFragment>),
    /// Inert stand-in shown when content cannot be produced (unknown widget
    /// type, dangling note/view reference). Never an error path.
    Placeholder(String),
    Field(FormField),
}

impl ViewFragment {
    pub fn is_empty(&self) -> bool {
        match self {
            ViewFragment::Empty => true,
            ViewFragment::Column(items) | ViewFragment::Row(items) => {
                items.iter().all(ViewFragment::is_empty)
            }
            _ => false,
        }
    }
}

/// One editable entry in a generic config form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    /// Config key the edited value is merged back under.
    pub key: String,
    pub label: String,
    pub control: FormControl,
}

impl FormField {
    pub fn new(key: &str, label: &str, control: FormControl) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            control,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormControl {
    Text { value: String },
    Toggle { value: bool },
    Number { value: f64, min: Option<f64>, max: Option<f64> },
    Select { value: String, options: Vec<String> },
    DateTime { value: String },
}

/// Flatten a fragment into indented plain text, one node per line.
pub fn render_text(fragment: &ViewFragment) -> String {
    let mut out = String::new();
    render_into(fragment, 0, &mut out);
    out
}

fn render_into(fragment: &ViewFragment, indent: usize, out: &mut String) {
    let pad = "  ".repeat(indent);
    match fragment {
        ViewFragment::Empty => {}
        ViewFragment::Text(s) => push_line(out, &pad, s),
        ViewFragment::Heading(s) => push_line(out, &pad, &format!("# {s}")),
        ViewFragment::Stat { label, value } => {
            push_line(out, &pad, &format!("{label}: {value}"))
        }
        ViewFragment::Link { label, url } => push_line(out, &pad, &format!("{label} -> {url}")),
        ViewFragment::Column(items) => {
            for item in items {
                // nested columns read as sub-sections
                let child_indent = match item {
                    ViewFragment::Column(_) => indent + 1,
                    _ => indent,
                };
                render_into(item, child_indent, out);
            }
        }
        ViewFragment::Row(items) => {
            let cells: Vec<String> = items
                .iter()
                .filter(|i| !i.is_empty())
                .map(|i| render_text(i).trim_end().replace('\n', " "))
                .collect();
            if !cells.is_empty() {
                push_line(out, &pad, &cells.join(" | "));
            }
        }
        ViewFragment::Placeholder(s) => push_line(out, &pad, &format!("[{s}]")),
        ViewFragment::Field(field) => {
            let value = match &field.control {
                FormControl::Text { value } => value.clone(),
                FormControl::Toggle { value } => value.to_string(),
                FormControl::Number { value, .. } => value.to_string(),
                FormControl::Select { value, .. } => value.clone(),
                FormControl::DateTime { value } => value.clone(),
            };
            push_line(out, &pad, &format!("{}: [{}]", field.label, value));
        }
    }
}

fn push_line(out: &mut String, pad: &str, line: &str) {
    out.push_str(pad);
    out.push_str(line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_rendering_indents_nested_columns() {
        let fragment = ViewFragment::Column(vec![
            ViewFragment::Heading("Notes".into()),
            ViewFragment::Text("first".into()),
        ]);
        assert_eq!(render_text(&fragment), "# Notes\nfirst\n");
    }

    #[test]
    fn rows_join_cells() {
        let fragment = ViewFragment::Row(vec![
            ViewFragment::Text("3".into()),
            ViewFragment::Text("days".into()),
        ]);
        assert_eq!(render_text(&fragment), "3 | days\n");
    }

    #[test]
    fn empty_columns_report_empty() {
        let fragment = ViewFragment::Column(vec![ViewFragment::Empty, ViewFragment::Empty]);
        assert!(fragment.is_empty());
        assert!(render_text(&fragment).is_empty());
    }
}
