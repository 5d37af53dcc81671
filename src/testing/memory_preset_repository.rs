use std::cell::{Cell, RefCell};

use crate::domain::{AppError, CustomPresetDocument};
use crate::ports::PresetRepository;

/// Preset repository kept in memory, counting writes.
#[derive(Debug, Default)]
pub struct MemoryPresetRepository {
    document: RefCell<CustomPresetDocument>,
    saves: Cell<usize>,
    fail_saves: Cell<bool>,
}

#[allow(dead_code)]
impl MemoryPresetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: CustomPresetDocument) -> Self {
        Self { document: RefCell::new(document), ..Self::default() }
    }

    pub fn failing_saves(self) -> Self {
        self.fail_saves.set(true);
        self
    }

    pub fn document(&self) -> CustomPresetDocument {
        self.document.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl PresetRepository for MemoryPresetRepository {
    fn load(&self) -> Result<CustomPresetDocument, AppError> {
        Ok(self.document.borrow().clone())
    }

    fn save(&self, document: &CustomPresetDocument) -> Result<(), AppError> {
        if self.fail_saves.get() {
            return Err(AppError::PresetStore {
                path: "memory".to_string(),
                details: "writes disabled".to_string(),
            });
        }
        *self.document.borrow_mut() = document.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
