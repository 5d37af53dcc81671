pub mod catalog;
pub mod package_manager;
pub mod package_manager_command;
pub mod preset_store_json;
pub mod project_filesystem;
