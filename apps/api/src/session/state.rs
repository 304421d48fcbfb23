use bytes::Bytes;

use crate::session::avatar::AvatarState;
use crate::theme::Theme;

/// Per-visitor mutable state: the theme flag and an optional uploaded photo.
///
/// Single writer: one visitor drives one session, and every action completes before
/// the next is handled. Nothing here outlives the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    theme: Theme,
    avatar: Option<AvatarState>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn avatar(&self) -> Option<&AvatarState> {
        self.avatar.as_ref()
    }

    /// Flips the theme and returns the new value.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Replaces any previously confirmed photo.
    pub fn set_avatar(&mut self, bytes: Bytes, mime: impl Into<String>) {
        self.avatar = Some(AvatarState {
            bytes,
            mime: mime.into(),
        });
    }

    /// Returns whether a photo was present.
    pub fn clear_avatar(&mut self) -> bool {
        self.avatar.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::avatar::{resolve, AvatarSlot};

    #[test]
    fn test_initial_state() {
        let state = SessionState::new();
        assert_eq!(state.theme(), Theme::Light);
        assert!(state.avatar().is_none());
    }

    #[test]
    fn test_toggle_twice_restores_theme() {
        let mut state = SessionState::new();
        assert_eq!(state.toggle_theme(), Theme::Dark);
        assert_eq!(state.toggle_theme(), Theme::Light);
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_set_avatar_overwrites() {
        let mut state = SessionState::new();
        state.set_avatar(Bytes::from_static(b"first"), "image/png");
        state.set_avatar(Bytes::from_static(b"second"), "image/jpeg");

        let avatar = state.avatar().unwrap();
        assert_eq!(avatar.bytes, Bytes::from_static(b"second"));
        assert_eq!(avatar.mime, "image/jpeg");
    }

    #[test]
    fn test_set_then_clear_restores_initials() {
        let mut state = SessionState::new();
        let before = resolve(state.avatar(), 110, 3, "2rem");

        state.set_avatar(Bytes::from_static(b"photo"), "image/webp");
        assert!(resolve(state.avatar(), 110, 3, "2rem").is_image());

        assert!(state.clear_avatar());
        assert_eq!(resolve(state.avatar(), 110, 3, "2rem"), before);
        assert!(!state.clear_avatar());
    }

    #[test]
    fn test_avatar_swaps_every_slot() {
        let mut state = SessionState::new();
        state.set_avatar(Bytes::from_static(b"photo"), "image/png");
        for slot in [AvatarSlot::Sidebar, AvatarSlot::About, AvatarSlot::Contact] {
            assert!(slot.resolve(state.avatar()).is_image());
        }
    }

    #[test]
    fn test_theme_toggle_leaves_avatar_alone() {
        let mut state = SessionState::new();
        state.set_avatar(Bytes::from_static(b"photo"), "image/png");
        state.toggle_theme();
        assert!(state.avatar().is_some());
    }
}
