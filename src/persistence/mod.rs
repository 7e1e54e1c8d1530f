pub mod files;
pub mod settings;
pub mod todos;
pub mod widget;

pub use files::{
    atomic_write, default_export_file, ensure_data_dir, get_data_dir, init_local_dir, read_file,
    settings_file, todos_file, widget_file,
};
pub use settings::{load_settings, save_settings, Settings, Theme};
pub use todos::{export_todos, load_todos, read_import, save_todos, ImportError};
pub use widget::{read_widget_snapshot, write_widget_snapshot, WidgetSnapshot};
