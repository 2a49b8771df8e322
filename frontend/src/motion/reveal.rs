//! Team headline reveal: N avatars share one headline made of N + 1
//! captions, caption 0 being the default.

use crate::config::motion::{
    AVATAR_ACTIVE_PX, AVATAR_REST_PX, AVATAR_SECS, REVEAL_LETTER_SECS, REVEAL_STAGGER_SECS,
};

/// Which avatar currently owns the headline.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ActiveProfile {
    #[default]
    NoneActive,
    ActiveAt(usize),
}

impl ActiveProfile {
    /// Tapping the active avatar again resets; any other avatar takes over.
    pub fn tap(self, index: usize) -> Self {
        match self {
            ActiveProfile::ActiveAt(current) if current == index => ActiveProfile::NoneActive,
            _ => ActiveProfile::ActiveAt(index),
        }
    }

    pub fn tap_outside(self) -> Self {
        ActiveProfile::NoneActive
    }

    pub fn index(self) -> Option<usize> {
        match self {
            ActiveProfile::NoneActive => None,
            ActiveProfile::ActiveAt(index) => Some(index),
        }
    }
}

/// Vertical letter offset of a caption, in percent of its line height.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CaptionSlot {
    Above,
    Shown,
    Below,
}

impl CaptionSlot {
    pub fn percent(self) -> i32 {
        match self {
            CaptionSlot::Above => -100,
            CaptionSlot::Shown => 0,
            CaptionSlot::Below => 100,
        }
    }
}

/// Everything the view needs to draw the widget for one state.
#[derive(Clone, PartialEq, Debug)]
pub struct RevealFrame {
    /// `captions[0]` is the default caption, `captions[i + 1]` belongs to avatar `i`.
    pub captions: Vec<CaptionSlot>,
    pub avatar_px: Vec<f64>,
    pub animated: bool,
}

impl RevealFrame {
    pub fn shown_caption(&self) -> Option<usize> {
        self.captions.iter().position(|slot| *slot == CaptionSlot::Shown)
    }

    pub fn letter_transition(&self) -> String {
        if self.animated {
            format!("transform {}s var(--ease-out)", REVEAL_LETTER_SECS)
        } else {
            "none".to_string()
        }
    }

    pub fn avatar_transition(&self) -> String {
        if self.animated {
            format!("width {0}s var(--ease-out), height {0}s var(--ease-out)", AVATAR_SECS)
        } else {
            "none".to_string()
        }
    }
}

pub fn frame(avatars: usize, active: ActiveProfile, reduced_motion: bool) -> RevealFrame {
    let active = active.index().filter(|i| *i < avatars);
    let mut captions = Vec::with_capacity(avatars + 1);
    captions.push(if active.is_some() { CaptionSlot::Above } else { CaptionSlot::Shown });
    for i in 0..avatars {
        captions.push(if active == Some(i) { CaptionSlot::Shown } else { CaptionSlot::Below });
    }
    let avatar_px = (0..avatars)
        .map(|i| if active == Some(i) { AVATAR_ACTIVE_PX } else { AVATAR_REST_PX })
        .collect();
    RevealFrame {
        captions,
        avatar_px,
        animated: !reduced_motion,
    }
}

/// Per-letter delays, in seconds, for a stagger that starts at the middle
/// letter and spreads outwards.
pub fn stagger_from_center(letters: usize) -> Vec<f64> {
    if letters == 0 {
        return Vec::new();
    }
    let center = (letters - 1) as f64 / 2.0;
    (0..letters)
        .map(|i| (i as f64 - center).abs() * REVEAL_STAGGER_SECS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tap_tap_returns_to_default() {
        let state = ActiveProfile::NoneActive.tap(2);
        assert_eq!(state, ActiveProfile::ActiveAt(2));
        let state = state.tap(2);
        assert_eq!(state, ActiveProfile::NoneActive);
        assert_eq!(frame(4, state, false).shown_caption(), Some(0));
    }

    #[test]
    fn tapping_another_avatar_switches() {
        let state = ActiveProfile::ActiveAt(0).tap(3);
        assert_eq!(state, ActiveProfile::ActiveAt(3));
        assert_eq!(state.tap_outside(), ActiveProfile::NoneActive);
    }

    #[test]
    fn active_avatar_owns_the_headline() {
        let f = frame(4, ActiveProfile::ActiveAt(1), false);
        assert_eq!(f.shown_caption(), Some(2));
        assert_eq!(f.captions[0], CaptionSlot::Above);
        assert_eq!(f.captions[1], CaptionSlot::Below);
        assert_eq!(f.avatar_px, vec![AVATAR_REST_PX, AVATAR_ACTIVE_PX, AVATAR_REST_PX, AVATAR_REST_PX]);
    }

    #[test]
    fn out_of_range_index_falls_back_to_default() {
        let f = frame(2, ActiveProfile::ActiveAt(7), false);
        assert_eq!(f.shown_caption(), Some(0));
        assert!(f.avatar_px.iter().all(|px| *px == AVATAR_REST_PX));
    }

    #[test]
    fn reduced_motion_reaches_the_same_end_state() {
        for active in [ActiveProfile::NoneActive, ActiveProfile::ActiveAt(3)] {
            let animated = frame(4, active, false);
            let still = frame(4, active, true);
            assert_eq!(animated.captions, still.captions);
            assert_eq!(animated.avatar_px, still.avatar_px);
            assert_eq!(still.letter_transition(), "none");
            assert_eq!(still.avatar_transition(), "none");
            assert_ne!(animated.letter_transition(), "none");
        }
    }

    #[test]
    fn stagger_is_symmetric_around_the_center() {
        let delays = stagger_from_center(5);
        assert_eq!(delays[2], 0.0);
        assert_eq!(delays[0], delays[4]);
        assert_eq!(delays[1], delays[3]);
        assert!(delays[0] > delays[1]);

        let even = stagger_from_center(4);
        assert_eq!(even[1], even[2]);
        assert!(stagger_from_center(0).is_empty());
    }

    #[test]
    fn slots_map_to_offsets() {
        assert_eq!(CaptionSlot::Above.percent(), -100);
        assert_eq!(CaptionSlot::Shown.percent(), 0);
        assert_eq!(CaptionSlot::Below.percent(), 100);
    }
}
