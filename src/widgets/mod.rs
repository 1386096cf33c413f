//! Built-in widget kinds. Adding a widget means adding a module here and
//! registering its descriptor in [`registry_with_defaults`]; nothing else in
//! the crate changes.

use crate::registry::WidgetRegistry;

mod calendar;
mod countdown;
mod file_upload;
mod folder;
mod latest_note;
mod map;
mod note;
mod note_form;
mod note_list;
mod note_shared;
mod stats;
mod template_form;
mod view;

pub use calendar::{CalendarConfig, CalendarWidget};
pub use countdown::{CountdownConfig, CountdownWidget};
pub use file_upload::{FileUploadConfig, FileUploadWidget};
pub use folder::{FolderConfig, FolderWidget};
pub use latest_note::{LatestNoteConfig, LatestNoteWidget};
pub use map::{MapConfig, MapWidget};
pub use note::{NoteConfig, NoteWidget};
pub use note_form::{NoteFormConfig, NoteFormWidget, ToolbarConfig};
pub use note_list::{NoteListConfig, NoteListWidget};
pub use note_shared::{NoteSortKey, SortOrder};
pub use stats::{StatType, StatsConfig, StatsWidget};
pub use template_form::{template_fields, TemplateFormConfig, TemplateFormWidget};
pub use view::{ViewConfig, ViewWidget};

/// The full built-in catalog, registered once at startup.
pub fn registry_with_defaults() -> WidgetRegistry {
    let mut registry = WidgetRegistry::new();
    registry.register(NoteFormWidget::descriptor());
    registry.register(NoteWidget::descriptor());
    registry.register(LatestNoteWidget::descriptor());
    registry.register(CountdownWidget::descriptor());
    registry.register(FileUploadWidget::descriptor());
    registry.register(NoteListWidget::descriptor());
    registry.register(StatsWidget::descriptor());
    registry.register(TemplateFormWidget::descriptor());
    registry.register(ViewWidget::descriptor());
    registry.register(MapWidget::descriptor());
    registry.register(CalendarWidget::descriptor());
    registry.register(FolderWidget::descriptor());
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_contains_every_builtin() {
        let registry = registry_with_defaults();
        for kind in [
            "note_form",
            "note",
            "latest_note",
            "countdown",
            "file_upload",
            "note_list",
            "stats",
            "template_form",
            "view",
            "map",
            "calendar",
            "folder",
        ] {
            assert!(registry.contains(kind), "missing builtin {kind}");
        }
        assert_eq!(registry.len(), 12);
    }

    #[test]
    fn calendar_carries_fixed_size_hints() {
        let registry = registry_with_defaults();
        let size = registry.get("calendar").unwrap().size();
        assert_eq!(size.min_width, Some(2));
        assert_eq!(size.max_height, Some(6));
    }
}
