// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard gesture translation.
//!
//! Tab and Down move focus forward; Shift+Tab and Up move it back. Enter activates
//! when it is released, so holding it does nothing until the key comes up.

use crate::button::DigitalButton;

/// Keys tracked by [`Keyboard`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Tab.
    Tab,
    /// Either Shift key.
    Shift,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Enter or Return.
    Enter,
}

/// A user intent derived from key edges.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Move focus to the next node.
    FocusNext,
    /// Move focus to the previous node.
    FocusPrev,
    /// Activate the focused node.
    Activate,
}

/// Key state for the focus keys, plus the gestures of the latest update.
#[derive(Clone, Debug)]
pub struct Keyboard {
    tab: DigitalButton,
    shift: DigitalButton,
    up: DigitalButton,
    down: DigitalButton,
    enter: DigitalButton,
    /// At most one focus move and one activation per update.
    gestures: [Gesture; 2],
    len: usize,
}

impl Default for Keyboard {
    fn default() -> Self {
        Self {
            tab: DigitalButton::new(),
            shift: DigitalButton::new(),
            up: DigitalButton::new(),
            down: DigitalButton::new(),
            enter: DigitalButton::new(),
            gestures: [Gesture::Activate; 2],
            len: 0,
        }
    }
}

impl Keyboard {
    /// Create a keyboard with every key up.
    pub fn new() -> Self {
        Self::default()
    }

    /// State of one key.
    pub fn key(&self, key: Key) -> DigitalButton {
        match key {
            Key::Tab => self.tab,
            Key::Shift => self.shift,
            Key::Up => self.up,
            Key::Down => self.down,
            Key::Enter => self.enter,
        }
    }

    /// Sample every key through `is_down` and derive this update's gestures.
    pub fn update(&mut self, is_down: impl Fn(Key) -> bool) {
        self.tab.update(is_down(Key::Tab));
        self.shift.update(is_down(Key::Shift));
        self.up.update(is_down(Key::Up));
        self.down.update(is_down(Key::Down));
        self.enter.update(is_down(Key::Enter));

        let shifted = self.shift.is_down;
        let next = self.down.pressed || (!shifted && self.tab.pressed);
        let prev = self.up.pressed || (shifted && self.tab.pressed);
        let focus = match (next, prev) {
            (true, false) => Some(Gesture::FocusNext),
            (false, true) => Some(Gesture::FocusPrev),
            // Opposite moves in one update cancel out.
            _ => None,
        };
        self.len = 0;
        if let Some(g) = focus {
            self.push(g);
        }
        if self.enter.released {
            self.push(Gesture::Activate);
        }
        if self.len > 0 {
            tracing::trace!(target: "attune_event_state", gestures = ?self.gestures(), "key gestures");
        }
    }

    fn push(&mut self, gesture: Gesture) {
        self.gestures[self.len] = gesture;
        self.len += 1;
    }

    /// Gestures produced by the latest [`Keyboard::update`], focus moves first.
    pub fn gestures(&self) -> &[Gesture] {
        &self.gestures[..self.len]
    }

    /// Returns true if the latest update produced `gesture`.
    pub fn has(&self, gesture: Gesture) -> bool {
        self.gestures().contains(&gesture)
    }

    /// Forget the latest gestures and edges at the end of a cycle.
    pub fn end_cycle(&mut self) {
        for b in [
            &mut self.tab,
            &mut self.shift,
            &mut self.up,
            &mut self.down,
            &mut self.enter,
        ] {
            b.clear_edges();
        }
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(keys: &[Key]) -> impl Fn(Key) -> bool + '_ {
        move |k| keys.contains(&k)
    }

    #[test]
    fn tab_and_arrows_move_focus() {
        let mut kb = Keyboard::new();
        kb.update(held(&[Key::Tab]));
        assert_eq!(kb.gestures(), &[Gesture::FocusNext]);
        kb.update(held(&[]));
        kb.update(held(&[Key::Down]));
        assert_eq!(kb.gestures(), &[Gesture::FocusNext]);
        kb.update(held(&[]));
        kb.update(held(&[Key::Up]));
        assert_eq!(kb.gestures(), &[Gesture::FocusPrev]);
    }

    #[test]
    fn shift_tab_moves_back() {
        let mut kb = Keyboard::new();
        kb.update(held(&[Key::Shift]));
        assert!(kb.gestures().is_empty());
        kb.update(held(&[Key::Shift, Key::Tab]));
        assert_eq!(kb.gestures(), &[Gesture::FocusPrev]);
        assert!(kb.key(Key::Tab).pressed);
    }

    #[test]
    fn enter_activates_on_release() {
        let mut kb = Keyboard::new();
        kb.update(held(&[Key::Enter]));
        assert!(!kb.has(Gesture::Activate));
        kb.update(held(&[Key::Enter]));
        assert!(!kb.has(Gesture::Activate));
        kb.update(held(&[]));
        assert!(kb.has(Gesture::Activate));
        kb.update(held(&[]));
        assert!(kb.gestures().is_empty());
    }

    #[test]
    fn opposite_moves_cancel() {
        let mut kb = Keyboard::new();
        kb.update(held(&[Key::Up, Key::Down]));
        assert!(kb.gestures().is_empty());
    }

    #[test]
    fn end_cycle_forgets_gestures() {
        let mut kb = Keyboard::new();
        kb.update(held(&[Key::Enter]));
        kb.update(held(&[Key::Tab]));
        assert_eq!(kb.gestures(), &[Gesture::FocusNext, Gesture::Activate]);
        kb.end_cycle();
        assert!(kb.gestures().is_empty());
        assert!(kb.key(Key::Tab).is_down);
        assert!(!kb.key(Key::Tab).pressed);
    }
}
