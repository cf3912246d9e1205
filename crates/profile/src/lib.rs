// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Shop profile parsing: inspection categories, route overrides and widgets

mod parser;
mod template;
mod widget;

pub use parser::{
    load_profile, load_profile_or_default, parse_profile, Profile, ProfileError, PROFILE_PATH,
};
pub use template::{expand_env, placeholders, prepare_route, TemplateError};
pub use widget::WidgetDef;
