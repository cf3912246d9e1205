// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shop-level workflow configuration

use crate::category::CategoryRules;
use crate::navigator::Navigator;
use crate::route::RouteTable;

/// Category rules and routes shared by every evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowConfig {
    pub categories: CategoryRules,
    pub routes: RouteTable,
}

impl WorkflowConfig {
    pub fn with_categories(self, categories: CategoryRules) -> Self {
        Self { categories, ..self }
    }

    pub fn with_routes(self, routes: RouteTable) -> Self {
        Self { routes, ..self }
    }

    pub fn navigator(&self) -> Navigator {
        Navigator::new(self.routes.clone())
    }
}
