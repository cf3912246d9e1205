// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Widget definitions

use pitstop_core::Phase;

/// A named view that hides some phases, e.g. an internal summary panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDef {
    /// Widget name
    pub name: String,
    /// Phases hidden on top of role filtering
    pub exclude: Vec<Phase>,
}
