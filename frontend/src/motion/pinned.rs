use crate::config::motion::{CARD_ROTATION_DEG, CARD_SCALE_DROP, CARD_SCALE_FLOOR};

/// Where and how one stacked card is drawn for a given scroll position.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CardFrame {
    /// Downward shift that holds the card at the top of the viewport.
    pub pin_offset: f64,
    pub progress: f64,
    pub scale: f64,
    pub rotation_deg: f64,
    pub overlay: f64,
}

impl CardFrame {
    pub const REST: CardFrame = CardFrame {
        pin_offset: 0.0,
        progress: 0.0,
        scale: 1.0,
        rotation_deg: 0.0,
        overlay: 0.0,
    };

    pub fn pinned(&self) -> bool {
        self.pin_offset > 0.0
    }

    pub fn transform(&self) -> String {
        format!(
            "translate3d(0, {:.2}px, 0) scale({:.4}) rotate({:.3}deg)",
            self.pin_offset, self.scale, self.rotation_deg
        )
    }
}

fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Measured geometry of a card stack: each card's document top (untransformed)
/// and the viewport height. Rebuilding it after a resize is idempotent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PinnedStack {
    tops: Vec<f64>,
    viewport_height: f64,
}

impl PinnedStack {
    pub fn new(tops: Vec<f64>, viewport_height: f64) -> Self {
        let viewport_height = if viewport_height.is_finite() { viewport_height.max(0.0) } else { 0.0 };
        Self { tops, viewport_height }
    }

    /// Fraction of the way card `index + 1` has travelled from the viewport
    /// bottom to the viewport top.
    pub fn progress(&self, index: usize, scroll: f64) -> f64 {
        let Some(&next_top) = self.tops.get(index + 1) else {
            return 0.0;
        };
        let end = next_top;
        if self.viewport_height <= 0.0 {
            return if scroll >= end { 1.0 } else { 0.0 };
        }
        let start = next_top - self.viewport_height;
        clamp01((scroll - start) / self.viewport_height)
    }

    pub fn frame(&self, index: usize, scroll: f64) -> CardFrame {
        let n = self.tops.len();
        if n < 2 || index >= n - 1 {
            return CardFrame::REST;
        }
        let top = self.tops[index];
        let last_top = self.tops[n - 1];
        let hold = (last_top - top).max(0.0);
        let pin_offset = (scroll - top).clamp(0.0, hold);

        let progress = self.progress(index, scroll);
        let scale = (1.0 - progress * CARD_SCALE_DROP).max(CARD_SCALE_FLOOR);
        let tilt = if index % 2 == 0 { CARD_ROTATION_DEG } else { -CARD_ROTATION_DEG };

        CardFrame {
            pin_offset,
            progress,
            scale,
            rotation_deg: tilt * progress,
            overlay: progress,
        }
    }

    pub fn frames(&self, scroll: f64) -> Vec<CardFrame> {
        (0..self.tops.len()).map(|i| self.frame(i, scroll)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack() -> PinnedStack {
        PinnedStack::new(vec![0.0, 800.0, 1600.0, 2400.0], 800.0)
    }

    #[test]
    fn progress_is_clamped() {
        let s = stack();
        assert_eq!(s.progress(0, -500.0), 0.0);
        assert_eq!(s.progress(0, 0.0), 0.0);
        assert_eq!(s.progress(0, 400.0), 0.5);
        assert_eq!(s.progress(0, 800.0), 1.0);
        assert_eq!(s.progress(0, 5_000.0), 1.0);
    }

    #[test]
    fn progress_is_monotonic_in_scroll() {
        let s = stack();
        for card in 0..3 {
            let mut last = 0.0;
            for step in 0..=300 {
                let p = s.progress(card, step as f64 * 10.0);
                assert!(p >= last);
                last = p;
            }
        }
    }

    #[test]
    fn reverse_scroll_reproduces_prior_frames() {
        let s = stack();
        let before = s.frames(1_234.0);
        let _ = s.frames(2_300.0);
        let _ = s.frames(3_000.0);
        assert_eq!(s.frames(1_234.0), before);
    }

    #[test]
    fn cards_pin_until_the_last_card_arrives() {
        let s = stack();
        assert!(!s.frame(0, 0.0).pinned());
        assert_eq!(s.frame(0, 1_000.0).pin_offset, 1_000.0);
        assert_eq!(s.frame(1, 1_000.0).pin_offset, 200.0);
        // released together once the last card reaches the top
        assert_eq!(s.frame(0, 3_000.0).pin_offset, 2_400.0);
        assert_eq!(s.frame(2, 3_000.0).pin_offset, 800.0);
    }

    #[test]
    fn transform_shrinks_and_alternates_tilt() {
        let s = stack();
        let even = s.frame(0, 800.0);
        assert_eq!(even.scale, 0.75);
        assert_eq!(even.rotation_deg, 5.0);
        assert_eq!(even.overlay, 1.0);

        let odd = s.frame(1, 1_600.0);
        assert_eq!(odd.rotation_deg, -5.0);
        assert!(odd.scale >= CARD_SCALE_FLOOR);
    }

    #[test]
    fn last_card_never_moves() {
        let s = stack();
        assert_eq!(s.frame(3, 10_000.0), CardFrame::REST);
        assert_eq!(PinnedStack::new(vec![0.0], 800.0).frame(0, 400.0), CardFrame::REST);
        assert!(PinnedStack::default().frames(100.0).is_empty());
    }

    #[test]
    fn zero_height_viewport_snaps() {
        let s = PinnedStack::new(vec![0.0, 500.0], 0.0);
        assert_eq!(s.progress(0, 499.0), 0.0);
        assert_eq!(s.progress(0, 500.0), 1.0);
    }

    #[test]
    fn remeasuring_is_idempotent() {
        let a = PinnedStack::new(vec![0.0, 700.0, 1_400.0], 700.0);
        let b = PinnedStack::new(vec![0.0, 700.0, 1_400.0], 700.0);
        assert_eq!(a.frames(350.0), b.frames(350.0));
    }
}
