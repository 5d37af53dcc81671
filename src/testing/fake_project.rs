use std::cell::RefCell;
use std::collections::BTreeSet;

use crate::domain::AppError;
use crate::ports::{ComponentFiles, FileRemovalReport, InstalledComponents, UsageScanner};

/// Project whose installed and used components are fixed up front.
#[derive(Debug, Default)]
pub struct FakeProject {
    installed: RefCell<Vec<String>>,
    used: BTreeSet<String>,
    pub stripped: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl FakeProject {
    pub fn new(installed: &[&str]) -> Self {
        Self {
            installed: RefCell::new(installed.iter().map(|s| s.to_string()).collect()),
            ..Self::default()
        }
    }

    pub fn with_used(mut self, used: &[&str]) -> Self {
        self.used = used.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn installed(&self) -> Vec<String> {
        self.installed.borrow().clone()
    }
}

impl InstalledComponents for FakeProject {
    fn installed_components(&self) -> Result<Vec<String>, AppError> {
        Ok(self.installed.borrow().clone())
    }
}

impl UsageScanner for FakeProject {
    fn used_components(&self, candidates: &[String]) -> Result<BTreeSet<String>, AppError> {
        Ok(candidates.iter().filter(|id| self.used.contains(*id)).cloned().collect())
    }
}

impl ComponentFiles for FakeProject {
    fn remove_component_files(&self, ids: &[String]) -> Result<FileRemovalReport, AppError> {
        let mut report = FileRemovalReport::default();
        let mut installed = self.installed.borrow_mut();
        for id in ids {
            if let Some(position) = installed.iter().position(|existing| existing == id) {
                installed.remove(position);
                report.removed.push(id.clone());
            } else {
                report.warnings.push(format!("Component file not found: {}.tsx", id));
            }
        }
        Ok(report)
    }

    fn strip_imports(&self, ids: &[String]) -> Result<usize, AppError> {
        self.stripped.borrow_mut().extend(ids.iter().cloned());
        Ok(0)
    }
}
