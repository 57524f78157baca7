//! Shared command context.
//!
//! Groups the bridge, the executor and the configured package list so every
//! command and the menu see the same setup.

use debloat_core::{Bridge, Executor, PackageId};
use std::fmt;
use std::sync::Arc;

/// Groups common state used by commands.
#[derive(Clone)]
pub struct Context {
    pub executor: Arc<dyn Executor>,
    pub bridge: Bridge,
    pub packages: Vec<PackageId>,
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("bridge", &self.bridge)
            .field("packages", &self.packages.len())
            .finish_non_exhaustive()
    }
}

impl Context {
    pub fn new(executor: Arc<dyn Executor>, bridge: Bridge, packages: Vec<PackageId>) -> Self {
        Self {
            executor,
            bridge,
            packages,
        }
    }
}
