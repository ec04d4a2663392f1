// Copyright 2025 the Lintel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single chip: selection, keyboard navigation between its actions, and removal.
//!
//! ## Removal
//!
//! Removal runs as a one-way sequence `Active → Exiting → Removed`, driven by the
//! host's transition-end events:
//!
//! 1. [`ChipFoundation::begin_exit`] only adds [`ChipClass::Exit`], which starts a fade.
//! 2. When the fade (`opacity`) ends, the chip's computed width is captured. On the next
//!    frame that width is written back as an explicit pixel value and padding and margin
//!    are zeroed; on the frame after, the width is set to `0`. Width cannot transition
//!    out of `auto`, so this freeze step is required for the collapse to animate.
//! 3. When the collapse (`width`) ends, the chip leaves the tab order and
//!    [`ChipAdapter::notify_removal`] fires with the removal announcement.
//!
//! The removal notification never fires on the `opacity` transition.

use alloc::string::String;

use kurbo::Rect;
use lintel_schedule::{Millis, Scheduler, TaskId};

use crate::attr;
use crate::event::{EventEffects, Interaction, Key, KeyEvent};
use crate::Foundation;

/// Root attribute holding the message announced when the chip is removed.
pub const REMOVED_ANNOUNCEMENT_ATTR: &str = "data-mdc-chip-remove-announcement";

class_names! {
    /// Classes the chip foundation reads or writes.
    pub enum ChipClass {
        /// The chip is fading out before removal.
        Exit => "mdc-chip--exit",
        /// Backspace and Delete remove the chip.
        Deletable => "mdc-chip--deletable",
        /// The chip is selected.
        Selected => "mdc-chip--selected",
        /// The primary action has focus.
        PrimaryActionFocused => "mdc-chip--primary-action-focused",
        /// Applied to the leading icon while the checkmark replaces it.
        HiddenLeadingIcon => "mdc-chip__icon--leading-hidden",
    }
}

/// Where in the chip an event originated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChipPart {
    /// The chip root.
    Root,
    /// The primary action.
    PrimaryAction,
    /// The trailing action, usually a remove icon.
    TrailingAction,
    /// The leading icon.
    LeadingIcon,
    /// The selection checkmark.
    Checkmark,
    /// Any other descendant.
    Other,
}

/// CSS property whose transition ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransitionProperty {
    /// `opacity`.
    Opacity,
    /// `width`.
    Width,
    /// Anything else.
    Other,
}

/// Which action of a chip a navigation key came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChipActionSource {
    /// The primary action.
    Primary,
    /// The trailing action.
    Trailing,
    /// Neither action, or the source no longer matters.
    None,
}

impl From<ChipPart> for ChipActionSource {
    fn from(part: ChipPart) -> Self {
        match part {
            ChipPart::PrimaryAction => Self::Primary,
            ChipPart::TrailingAction => Self::Trailing,
            _ => Self::None,
        }
    }
}

/// Lifecycle of a chip.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChipPhase {
    /// Shown and interactive.
    #[default]
    Active,
    /// Fading out and collapsing.
    Exiting,
    /// The removal notification was sent.
    Removed,
}

/// Payload of [`ChipAdapter::notify_selection`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChipSelectionEvent {
    /// New selection state.
    pub selected: bool,
    /// Set when the chip set forced the change; the chip set ignores these.
    pub should_ignore: bool,
}

/// Payload of [`ChipAdapter::notify_navigation`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChipNavigationEvent {
    /// The navigation key.
    pub key: Key,
    /// The action focus should land on in the next chip.
    pub source: ChipActionSource,
}

/// Payload of [`ChipAdapter::notify_removal`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChipRemovalEvent {
    /// Message to announce to assistive technology.
    pub removed_announcement: Option<String>,
}

/// Environment operations a chip needs.
pub trait ChipAdapter {
    /// Adds a class to the root.
    fn add_class(&mut self, class: ChipClass) {
        let _ = class;
    }

    /// Removes a class from the root.
    fn remove_class(&mut self, class: ChipClass) {
        let _ = class;
    }

    /// Returns `true` if the root has `class`.
    fn has_class(&self, class: ChipClass) -> bool {
        let _ = class;
        false
    }

    /// Adds a class to the leading icon.
    fn add_class_to_leading_icon(&mut self, class: ChipClass) {
        let _ = class;
    }

    /// Removes a class from the leading icon.
    fn remove_class_from_leading_icon(&mut self, class: ChipClass) {
        let _ = class;
    }

    /// Reads an attribute of the root.
    fn attribute(&self, name: &str) -> Option<String> {
        let _ = name;
        None
    }

    /// Sets an attribute on the primary action.
    fn set_primary_action_attr(&mut self, name: &str, value: &str) {
        let _ = (name, value);
    }

    /// Sets an attribute on the trailing action.
    fn set_trailing_action_attr(&mut self, name: &str, value: &str) {
        let _ = (name, value);
    }

    /// Returns `true` if the chip has a trailing action.
    fn has_trailing_action(&self) -> bool {
        false
    }

    /// Returns `true` if the chip has a leading icon.
    fn has_leading_icon(&self) -> bool {
        false
    }

    /// Focuses the primary action.
    fn focus_primary_action(&mut self) {}

    /// Focuses the trailing action.
    fn focus_trailing_action(&mut self) {}

    /// Reads a computed style property of the root, such as `"width"`.
    fn computed_style_value(&self, property: &str) -> String {
        let _ = property;
        String::new()
    }

    /// Sets an inline style property on the root.
    fn set_style_property(&mut self, property: &str, value: &str) {
        let _ = (property, value);
    }

    /// Bounds of the root.
    fn root_rect(&self) -> Rect {
        Rect::ZERO
    }

    /// Bounds of the checkmark, if the chip has one.
    fn checkmark_rect(&self) -> Option<Rect> {
        None
    }

    /// Returns `true` for right-to-left layouts.
    fn is_rtl(&self) -> bool {
        false
    }

    /// The chip was clicked or activated with the keyboard.
    fn notify_interaction(&mut self) {}

    /// The selection state changed.
    fn notify_selection(&mut self, event: ChipSelectionEvent) {
        let _ = event;
    }

    /// The trailing action was activated.
    fn notify_trailing_icon_interaction(&mut self) {}

    /// The exit sequence finished; the host should remove the chip.
    fn notify_removal(&mut self, event: ChipRemovalEvent) {
        let _ = event;
    }

    /// A navigation key should move focus to another chip.
    fn notify_navigation(&mut self, event: ChipNavigationEvent) {
        let _ = event;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum ChipTask {
    FreezeWidth(String),
    CollapseWidth,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Left,
    Right,
}

/// Selection, focus, and removal logic for one chip.
#[derive(Debug)]
pub struct ChipFoundation<A> {
    adapter: A,
    phase: ChipPhase,
    should_remove_on_trailing_icon_click: bool,
    exit_frame: Option<TaskId>,
    scheduler: Scheduler<ChipTask>,
}

impl<A: ChipAdapter> ChipFoundation<A> {
    /// Creates an active chip.
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            phase: ChipPhase::Active,
            should_remove_on_trailing_icon_click: true,
            exit_frame: None,
            scheduler: Scheduler::new(),
        }
    }

    /// Current removal phase.
    #[must_use]
    pub fn phase(&self) -> ChipPhase {
        self.phase
    }

    /// Returns `true` if the chip is selected.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.adapter.has_class(ChipClass::Selected)
    }

    /// Whether activating the trailing action starts removal.
    #[must_use]
    pub fn should_remove_on_trailing_icon_click(&self) -> bool {
        self.should_remove_on_trailing_icon_click
    }

    /// Sets whether activating the trailing action starts removal.
    pub fn set_should_remove_on_trailing_icon_click(&mut self, should_remove: bool) {
        self.should_remove_on_trailing_icon_click = should_remove;
    }

    /// Selects or deselects the chip on behalf of the user.
    pub fn set_selected(&mut self, selected: bool) {
        self.apply_selected(selected);
        self.adapter.notify_selection(ChipSelectionEvent {
            selected,
            should_ignore: false,
        });
    }

    /// Selects or deselects the chip on behalf of its chip set.
    ///
    /// The notification, if any, is marked so the chip set does not react to it again.
    pub fn set_selected_from_chip_set(&mut self, selected: bool, notify: bool) {
        self.apply_selected(selected);
        if notify {
            self.adapter.notify_selection(ChipSelectionEvent {
                selected,
                should_ignore: true,
            });
        }
    }

    /// Bounds of the chip, including the room its checkmark takes once shown.
    ///
    /// A checkmark without a leading icon starts at zero width, so the root is widened
    /// by the checkmark's height, which equals its final width.
    #[must_use]
    pub fn dimensions(&self) -> Rect {
        let root = self.adapter.root_rect();
        if self.adapter.has_leading_icon() {
            return root;
        }
        match self.adapter.checkmark_rect() {
            Some(checkmark) => Rect::new(root.x0, root.y0, root.x1 + checkmark.height(), root.y1),
            None => root,
        }
    }

    /// Starts the exit animation that ends in removal.
    pub fn begin_exit(&mut self) {
        if self.phase == ChipPhase::Active {
            debug_event!(message = "chip.begin_exit");
            self.phase = ChipPhase::Exiting;
        }
        self.adapter.add_class(ChipClass::Exit);
    }

    /// A click on the chip, or a key press on it. Enter and Space activate.
    pub fn handle_interaction(&mut self, interaction: Interaction) {
        if Self::is_activation(interaction) {
            self.adapter.notify_interaction();
            self.focus_primary();
        }
    }

    /// A click or key press on the trailing action.
    pub fn handle_trailing_icon_interaction(&mut self, interaction: Interaction) -> EventEffects {
        if !Self::is_activation(interaction) {
            return EventEffects::empty();
        }
        self.adapter.notify_trailing_icon_interaction();
        self.remove_chip()
    }

    /// A transition on the chip or one of its descendants ended.
    pub fn handle_transition_end(&mut self, target: ChipPart, property: TransitionProperty) {
        let exiting_root = target == ChipPart::Root && self.adapter.has_class(ChipClass::Exit);

        if exiting_root && property == TransitionProperty::Opacity {
            let width = self.adapter.computed_style_value("width");
            self.scheduler.cancel_slot(&mut self.exit_frame);
            self.exit_frame = Some(self.scheduler.request_frame(ChipTask::FreezeWidth(width)));
            return;
        }

        if exiting_root && property == TransitionProperty::Width && self.phase != ChipPhase::Removed {
            self.remove_focus();
            self.phase = ChipPhase::Removed;
            let removed_announcement = self.adapter.attribute(REMOVED_ANNOUNCEMENT_ATTR);
            debug_event!(message = "chip.removed");
            self.adapter.notify_removal(ChipRemovalEvent {
                removed_announcement,
            });
        }

        if property != TransitionProperty::Opacity {
            return;
        }
        let selected = self.adapter.has_class(ChipClass::Selected);
        match target {
            ChipPart::LeadingIcon if selected => {
                self.adapter
                    .add_class_to_leading_icon(ChipClass::HiddenLeadingIcon);
            }
            ChipPart::Checkmark if !selected => {
                self.adapter
                    .remove_class_from_leading_icon(ChipClass::HiddenLeadingIcon);
            }
            _ => {}
        }
    }

    /// The primary action gained focus.
    pub fn handle_focus_in(&mut self, target: ChipPart) {
        if target == ChipPart::PrimaryAction {
            self.adapter.add_class(ChipClass::PrimaryActionFocused);
        }
    }

    /// The primary action lost focus.
    pub fn handle_focus_out(&mut self, target: ChipPart) {
        if target == ChipPart::PrimaryAction {
            self.adapter.remove_class(ChipClass::PrimaryActionFocused);
        }
    }

    /// A key press inside the chip, originating from `target`.
    ///
    /// Backspace and Delete remove a deletable chip. Arrow keys move between the chip's
    /// actions, or out of the chip through [`ChipAdapter::notify_navigation`].
    pub fn handle_keydown(&mut self, event: KeyEvent, target: ChipPart) -> EventEffects {
        let deletable = self.adapter.has_class(ChipClass::Deletable);
        if deletable && matches!(event.key, Key::Backspace | Key::Delete) {
            return self.remove_chip();
        }
        if !is_navigation_key(event.key) {
            return EventEffects::empty();
        }
        self.focus_next_action(event.key, target.into());
        EventEffects::PREVENT_DEFAULT
    }

    /// Takes both actions out of the tab order.
    pub fn remove_focus(&mut self) {
        self.adapter.set_primary_action_attr(attr::TABINDEX, "-1");
        self.adapter.set_trailing_action_attr(attr::TABINDEX, "-1");
    }

    /// Focuses the primary action and makes it the chip's tab stop.
    pub fn focus_primary_action(&mut self) {
        self.focus_primary();
    }

    /// Focuses the trailing action, or the primary action if there is none.
    pub fn focus_trailing_action(&mut self) {
        if self.adapter.has_trailing_action() {
            self.focus_trailing();
        } else {
            self.focus_primary();
        }
    }

    fn is_activation(interaction: Interaction) -> bool {
        match interaction {
            Interaction::Click => true,
            Interaction::Key(event) => matches!(event.key, Key::Enter | Key::Space),
        }
    }

    fn remove_chip(&mut self) -> EventEffects {
        if self.should_remove_on_trailing_icon_click {
            self.begin_exit();
        }
        EventEffects::STOP_PROPAGATION | EventEffects::PREVENT_DEFAULT
    }

    fn focus_next_action(&mut self, key: Key, source: ChipActionSource) {
        if is_jump_key(key) || !self.adapter.has_trailing_action() {
            self.adapter
                .notify_navigation(ChipNavigationEvent { key, source });
            return;
        }
        match (source, direction(key, self.adapter.is_rtl())) {
            (ChipActionSource::Primary, Direction::Right) => self.focus_trailing(),
            (ChipActionSource::Trailing, Direction::Left) => self.focus_primary(),
            _ => self.adapter.notify_navigation(ChipNavigationEvent {
                key,
                source: ChipActionSource::None,
            }),
        }
    }

    fn focus_primary(&mut self) {
        self.adapter.set_primary_action_attr(attr::TABINDEX, "0");
        self.adapter.focus_primary_action();
        self.adapter.set_trailing_action_attr(attr::TABINDEX, "-1");
    }

    fn focus_trailing(&mut self) {
        self.adapter.set_trailing_action_attr(attr::TABINDEX, "0");
        self.adapter.focus_trailing_action();
        self.adapter.set_primary_action_attr(attr::TABINDEX, "-1");
    }

    fn apply_selected(&mut self, selected: bool) {
        if selected {
            self.adapter.add_class(ChipClass::Selected);
        } else {
            self.adapter.remove_class(ChipClass::Selected);
        }
        self.adapter
            .set_primary_action_attr(attr::ARIA_CHECKED, attr::bool_str(selected));
    }

    fn run(&mut self, task: ChipTask) {
        match task {
            ChipTask::FreezeWidth(width) => {
                self.adapter.set_style_property("width", &width);
                self.adapter.set_style_property("padding", "0");
                self.adapter.set_style_property("margin", "0");
                self.exit_frame = Some(self.scheduler.request_frame(ChipTask::CollapseWidth));
            }
            ChipTask::CollapseWidth => {
                self.exit_frame = None;
                self.adapter.set_style_property("width", "0");
            }
        }
    }
}

/// Keys that move focus within or between chips.
pub(crate) fn is_navigation_key(key: Key) -> bool {
    key.is_arrow() || matches!(key, Key::Home | Key::End)
}

/// Navigation keys that always leave the current chip.
pub(crate) fn is_jump_key(key: Key) -> bool {
    matches!(key, Key::ArrowUp | Key::ArrowDown | Key::Home | Key::End)
}

/// Horizontal intent of a key, mirrored for right-to-left layouts.
pub(crate) fn direction(key: Key, rtl: bool) -> Direction {
    let leftward = match key {
        Key::ArrowLeft => !rtl,
        Key::ArrowRight => rtl,
        _ => false,
    };
    if leftward {
        Direction::Left
    } else {
        Direction::Right
    }
}

impl<A: ChipAdapter> Foundation for ChipFoundation<A> {
    type Adapter = A;

    fn adapter(&self) -> &A {
        &self.adapter
    }

    fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    fn destroy(&mut self) {
        self.scheduler.cancel_slot(&mut self.exit_frame);
        self.scheduler.clear();
    }

    fn advance(&mut self, now: Millis) {
        self.scheduler.advance_to(now);
        while let Some((_, task)) = self.scheduler.pop_due() {
            self.run(task);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec::Vec;

    use super::*;
    use crate::event::Modifiers;
    use crate::testing::CallLog;

    #[derive(Debug, Default)]
    struct FakeChip {
        classes: Vec<ChipClass>,
        trailing: bool,
        rtl: bool,
        leading_icon: bool,
        checkmark: Option<Rect>,
        log: CallLog,
    }

    impl ChipAdapter for FakeChip {
        fn add_class(&mut self, class: ChipClass) {
            if !self.classes.contains(&class) {
                self.classes.push(class);
            }
        }

        fn remove_class(&mut self, class: ChipClass) {
            self.classes.retain(|c| *c != class);
        }

        fn has_class(&self, class: ChipClass) -> bool {
            self.classes.contains(&class)
        }

        fn add_class_to_leading_icon(&mut self, class: ChipClass) {
            self.log.push(format!("icon add {class}"));
        }

        fn remove_class_from_leading_icon(&mut self, class: ChipClass) {
            self.log.push(format!("icon remove {class}"));
        }

        fn attribute(&self, name: &str) -> Option<String> {
            (name == REMOVED_ANNOUNCEMENT_ATTR).then(|| String::from("Removed chip"))
        }

        fn set_primary_action_attr(&mut self, name: &str, value: &str) {
            self.log.push(format!("primary {name}={value}"));
        }

        fn set_trailing_action_attr(&mut self, name: &str, value: &str) {
            self.log.push(format!("trailing {name}={value}"));
        }

        fn has_trailing_action(&self) -> bool {
            self.trailing
        }

        fn has_leading_icon(&self) -> bool {
            self.leading_icon
        }

        fn focus_primary_action(&mut self) {
            self.log.push("focus primary");
        }

        fn focus_trailing_action(&mut self) {
            self.log.push("focus trailing");
        }

        fn computed_style_value(&self, property: &str) -> String {
            if property == "width" {
                String::from("87px")
            } else {
                String::new()
            }
        }

        fn set_style_property(&mut self, property: &str, value: &str) {
            self.log.push(format!("style {property}={value}"));
        }

        fn root_rect(&self) -> Rect {
            Rect::new(10.0, 0.0, 90.0, 32.0)
        }

        fn checkmark_rect(&self) -> Option<Rect> {
            self.checkmark
        }

        fn is_rtl(&self) -> bool {
            self.rtl
        }

        fn notify_interaction(&mut self) {
            self.log.push("interaction");
        }

        fn notify_selection(&mut self, event: ChipSelectionEvent) {
            self.log
                .push(format!("selection {} {}", event.selected, event.should_ignore));
        }

        fn notify_trailing_icon_interaction(&mut self) {
            self.log.push("trailing interaction");
        }

        fn notify_removal(&mut self, event: ChipRemovalEvent) {
            self.log
                .push(format!("removal {:?}", event.removed_announcement));
        }

        fn notify_navigation(&mut self, event: ChipNavigationEvent) {
            self.log
                .push(format!("navigate {:?} {:?}", event.key, event.source));
        }
    }

    fn chip(trailing: bool) -> ChipFoundation<FakeChip> {
        ChipFoundation::new(FakeChip {
            trailing,
            ..FakeChip::default()
        })
    }

    #[test]
    fn selection_notifies_with_origin() {
        let mut c = chip(false);
        c.set_selected(true);
        assert!(c.is_selected());
        assert!(c.adapter().log.contains("primary aria-checked=true"));
        assert!(c.adapter().log.contains("selection true false"));

        c.set_selected_from_chip_set(false, true);
        assert!(!c.is_selected());
        assert!(c.adapter().log.contains("selection false true"));

        c.adapter_mut().log.clear();
        c.set_selected_from_chip_set(true, false);
        assert!(c.is_selected());
        assert!(!c.adapter().log.calls().iter().any(|l| l.starts_with("selection")));
    }

    #[test]
    fn exit_sequence_freezes_then_collapses_width() {
        let mut c = chip(true);
        c.begin_exit();
        assert_eq!(c.phase(), ChipPhase::Exiting);
        assert!(c.adapter().has_class(ChipClass::Exit));
        assert!(c.adapter().log.calls().is_empty());

        c.handle_transition_end(ChipPart::Root, TransitionProperty::Opacity);
        assert!(!c.adapter().log.calls().iter().any(|l| l.starts_with("removal")));

        c.advance(16);
        assert!(c.adapter().log.contains("style width=87px"));
        assert!(c.adapter().log.contains("style padding=0"));
        assert!(c.adapter().log.contains("style margin=0"));
        assert!(!c.adapter().log.contains("style width=0"));

        c.advance(32);
        assert!(c.adapter().log.ordered("style width=87px", "style width=0"));

        c.handle_transition_end(ChipPart::Root, TransitionProperty::Width);
        assert_eq!(c.phase(), ChipPhase::Removed);
        assert!(c.adapter().log.contains("primary tabindex=-1"));
        assert!(c.adapter().log.contains("removal Some(\"Removed chip\")"));

        c.handle_transition_end(ChipPart::Root, TransitionProperty::Width);
        assert_eq!(
            c.adapter()
                .log
                .calls()
                .iter()
                .filter(|l| l.starts_with("removal"))
                .count(),
            1
        );
    }

    #[test]
    fn width_transition_without_exit_is_ignored() {
        let mut c = chip(false);
        c.handle_transition_end(ChipPart::Root, TransitionProperty::Width);
        assert_eq!(c.phase(), ChipPhase::Active);
        assert!(c.adapter().log.calls().is_empty());
    }

    #[test]
    fn leading_icon_hides_behind_checkmark() {
        let mut c = chip(false);
        c.set_selected(true);
        c.handle_transition_end(ChipPart::LeadingIcon, TransitionProperty::Opacity);
        assert!(c.adapter().log.contains("icon add mdc-chip__icon--leading-hidden"));

        c.set_selected(false);
        c.handle_transition_end(ChipPart::Checkmark, TransitionProperty::Opacity);
        assert!(c.adapter().log.contains("icon remove mdc-chip__icon--leading-hidden"));
    }

    #[test]
    fn delete_keys_remove_only_deletable_chips() {
        let mut c = chip(true);
        let fx = c.handle_keydown(KeyEvent::new(Key::Backspace), ChipPart::PrimaryAction);
        assert!(fx.is_empty());
        assert_eq!(c.phase(), ChipPhase::Active);

        c.adapter_mut().classes.push(ChipClass::Deletable);
        let fx = c.handle_keydown(KeyEvent::new(Key::Delete), ChipPart::PrimaryAction);
        assert_eq!(fx, EventEffects::STOP_PROPAGATION | EventEffects::PREVENT_DEFAULT);
        assert_eq!(c.phase(), ChipPhase::Exiting);
    }

    #[test]
    fn trailing_icon_click_respects_removal_setting() {
        let mut c = chip(true);
        c.set_should_remove_on_trailing_icon_click(false);
        c.handle_trailing_icon_interaction(Interaction::Click);
        assert!(c.adapter().log.contains("trailing interaction"));
        assert_eq!(c.phase(), ChipPhase::Active);

        c.set_should_remove_on_trailing_icon_click(true);
        let tab = Interaction::Key(KeyEvent::new(Key::Tab));
        assert!(c.handle_trailing_icon_interaction(tab).is_empty());
        c.handle_trailing_icon_interaction(Interaction::Key(KeyEvent::new(Key::Enter)));
        assert_eq!(c.phase(), ChipPhase::Exiting);
    }

    #[test]
    fn arrows_move_between_actions() {
        let mut c = chip(true);
        let fx = c.handle_keydown(KeyEvent::new(Key::ArrowRight), ChipPart::PrimaryAction);
        assert_eq!(fx, EventEffects::PREVENT_DEFAULT);
        assert!(c.adapter().log.contains("focus trailing"));
        assert!(c.adapter().log.ordered("trailing tabindex=0", "primary tabindex=-1"));

        c.handle_keydown(KeyEvent::new(Key::ArrowLeft), ChipPart::TrailingAction);
        assert!(c.adapter().log.contains("focus primary"));

        c.handle_keydown(KeyEvent::new(Key::ArrowRight), ChipPart::TrailingAction);
        assert!(c.adapter().log.contains("navigate ArrowRight None"));
    }

    #[test]
    fn jump_keys_and_single_action_chips_navigate_away() {
        let mut c = chip(true);
        c.handle_keydown(KeyEvent::new(Key::Home), ChipPart::TrailingAction);
        assert!(c.adapter().log.contains("navigate Home Trailing"));

        let mut single = chip(false);
        single.handle_keydown(KeyEvent::new(Key::ArrowRight), ChipPart::PrimaryAction);
        assert!(single.adapter().log.contains("navigate ArrowRight Primary"));

        let fx = single.handle_keydown(
            KeyEvent::with_modifiers(Key::Character('a'), Modifiers::SHIFT),
            ChipPart::PrimaryAction,
        );
        assert!(fx.is_empty());
    }

    #[test]
    fn rtl_mirrors_arrow_direction() {
        let mut c = ChipFoundation::new(FakeChip {
            trailing: true,
            rtl: true,
            ..FakeChip::default()
        });
        c.handle_keydown(KeyEvent::new(Key::ArrowLeft), ChipPart::PrimaryAction);
        assert!(c.adapter().log.contains("focus trailing"));
    }

    #[test]
    fn interaction_focuses_primary_action() {
        let mut c = chip(false);
        c.handle_interaction(Interaction::Key(KeyEvent::new(Key::ArrowDown)));
        assert!(c.adapter().log.calls().is_empty());
        c.handle_interaction(Interaction::Click);
        assert!(c.adapter().log.ordered("interaction", "focus primary"));

        c.handle_focus_in(ChipPart::PrimaryAction);
        assert!(c.adapter().has_class(ChipClass::PrimaryActionFocused));
        c.handle_focus_out(ChipPart::TrailingAction);
        assert!(c.adapter().has_class(ChipClass::PrimaryActionFocused));
        c.handle_focus_out(ChipPart::PrimaryAction);
        assert!(!c.adapter().has_class(ChipClass::PrimaryActionFocused));
    }

    #[test]
    fn dimensions_account_for_checkmark() {
        let c = ChipFoundation::new(FakeChip {
            checkmark: Some(Rect::new(0.0, 0.0, 0.0, 20.0)),
            ..FakeChip::default()
        });
        assert_eq!(c.dimensions(), Rect::new(10.0, 0.0, 110.0, 32.0));

        let with_icon = ChipFoundation::new(FakeChip {
            leading_icon: true,
            checkmark: Some(Rect::new(0.0, 0.0, 0.0, 20.0)),
            ..FakeChip::default()
        });
        assert_eq!(with_icon.dimensions(), Rect::new(10.0, 0.0, 90.0, 32.0));
    }

    #[test]
    fn trailing_focus_falls_back_to_primary() {
        let mut c = chip(false);
        c.focus_trailing_action();
        assert!(c.adapter().log.contains("focus primary"));
        c.remove_focus();
        assert!(c.adapter().log.contains("trailing tabindex=-1"));
    }
}
