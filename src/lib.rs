pub mod codec;
pub mod dashboard;
pub mod data;
pub mod instance;
pub mod layout;
pub mod logging;
pub mod registry;
pub mod store;
pub mod view;
pub mod widgets;

pub use dashboard::{Dashboard, DashboardContext, DashboardTile};
pub use instance::{WidgetInstance, WidgetPosition};
pub use registry::{SizeHints, Widget, WidgetDescriptor, WidgetRegistry};
pub use store::{WidgetFilter, WidgetStore, WidgetUpdate};
pub use view::ViewFragment;
