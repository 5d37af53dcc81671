mod catalog;
mod memory_preset_repository;
mod fake_project;

pub use catalog::{TestCatalog, TestPresets, make_component, make_preset};
pub use fake_package_manager::RecordingPackageManager;
pub use fake_project::FakeProject;
pub use memory_preset_repository::MemoryPresetRepository;
