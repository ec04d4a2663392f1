// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An adapter that does nothing.

use crate::character_counter::CharacterCounterAdapter;
use crate::checkbox::CheckboxAdapter;
use crate::chip::ChipAdapter;
use crate::chip_set::ChipSetAdapter;
use crate::dialog::DialogAdapter;
use crate::drawer::DrawerAdapter;
use crate::helper_text::HelperTextAdapter;
use crate::icon::IconAdapter;
use crate::icon_button::IconButtonAdapter;
use crate::linear_progress::LinearProgressAdapter;
use crate::list::ListAdapter;
use crate::menu::MenuAdapter;
use crate::menu_surface::MenuSurfaceAdapter;
use crate::radio::RadioAdapter;
use crate::select::SelectAdapter;
use crate::switch::SwitchAdapter;
use crate::tab::TabAdapter;
use crate::text_field::TextFieldAdapter;
use crate::tooltip::TooltipAdapter;

/// Implements every adapter trait with its default methods.
///
/// Queries answer "nothing there" (`false`, `0`, `None`, zero geometry) and commands are
/// ignored. It fills the type parameters of optional sub-foundations, and lets a
/// foundation run without a host.
///
/// ```
/// use lintel_widgets::{Foundation, NoopAdapter};
/// use lintel_widgets::dialog::DialogFoundation;
///
/// let mut dialog = DialogFoundation::new(NoopAdapter);
/// dialog.open();
/// dialog.advance(16);
/// assert!(dialog.is_open());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NoopAdapter;

impl ListAdapter for NoopAdapter {}
impl MenuSurfaceAdapter for NoopAdapter {}
impl MenuAdapter for NoopAdapter {}
impl DialogAdapter for NoopAdapter {}
impl DrawerAdapter for NoopAdapter {}
impl SelectAdapter for NoopAdapter {}
impl HelperTextAdapter for NoopAdapter {}
impl IconAdapter for NoopAdapter {}
impl SwitchAdapter for NoopAdapter {}
impl TooltipAdapter for NoopAdapter {}
impl ChipAdapter for NoopAdapter {}
impl ChipSetAdapter for NoopAdapter {}
impl TextFieldAdapter for NoopAdapter {}
impl CharacterCounterAdapter for NoopAdapter {}
impl TabAdapter for NoopAdapter {}
impl CheckboxAdapter for NoopAdapter {}
impl RadioAdapter for NoopAdapter {}
impl IconButtonAdapter for NoopAdapter {}
impl LinearProgressAdapter for NoopAdapter {}
