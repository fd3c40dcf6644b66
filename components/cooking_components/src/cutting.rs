use bevy::prelude::*;

/// Minimum cosine between swipe and guide direction for a cut to count.
pub const CUT_DIRECTION_MATCH: f32 = 0.7;

/// A dotted line on the board that must be swiped along, start to end.
#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
pub struct CutGuide {
    pub start: Vec2,
    pub end: Vec2,
    pub completed: bool,
}

impl CutGuide {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self {
            start,
            end,
            completed: false,
        }
    }

    /// Horizontal guide of `width` centered on `center`, like the ones drawn on a board.
    pub fn horizontal(center: Vec2, width: f32) -> Self {
        let half = Vec2::new(width / 2.0, 0.0);
        Self::new(center - half, center + half)
    }

    pub fn matches(&self, swipe_start: Vec2, swipe_end: Vec2, accuracy: f32) -> bool {
        let swipe_dir = (swipe_end - swipe_start).normalize_or_zero();
        let guide_dir = (self.end - self.start).normalize_or_zero();

        swipe_start.distance(self.start) < accuracy
            && swipe_end.distance(self.end) < accuracy
            && swipe_dir.dot(guide_dir) > CUT_DIRECTION_MATCH
    }
}

/// Board-local cutting step.
///
/// Coordinates are relative to the board entity. A press inside `half_size`
/// starts a swipe; the release decides which guide, if any, it cut.
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
#[require(Transform)]
pub struct CuttingBoard {
    pub guides: Vec<CutGuide>,
    pub accuracy: f32,
    pub half_size: Vec2,
    pub active: bool,
    pub swipe_start: Option<Vec2>,
}

impl CuttingBoard {
    pub fn new(guides: Vec<CutGuide>, half_size: Vec2) -> Self {
        Self {
            guides,
            accuracy: 50.0,
            half_size,
            active: false,
            swipe_start: None,
        }
    }

    pub fn contains(&self, local: Vec2) -> bool {
        local.x.abs() <= self.half_size.x && local.y.abs() <= self.half_size.y
    }

    /// Marks the first incomplete guide the swipe follows. Returns its index.
    pub fn try_cut(&mut self, start: Vec2, end: Vec2) -> Option<usize> {
        let accuracy = self.accuracy;
        let (index, guide) = self
            .guides
            .iter_mut()
            .enumerate()
            .filter(|(_, guide)| !guide.completed)
            .find(|(_, guide)| guide.matches(start, end, accuracy))?;
        guide.completed = true;
        Some(index)
    }

    pub fn progress(&self) -> f32 {
        if self.guides.is_empty() {
            return 1.0;
        }
        let done = self.guides.iter().filter(|guide| guide.completed).count();
        done as f32 / self.guides.len() as f32
    }

    pub fn is_complete(&self) -> bool {
        self.guides.iter().all(|guide| guide.completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> CuttingBoard {
        CuttingBoard::new(
            vec![
                CutGuide::horizontal(Vec2::new(0.0, 40.0), 200.0),
                CutGuide::horizontal(Vec2::new(0.0, -40.0), 200.0),
            ],
            Vec2::new(150.0, 100.0),
        )
    }

    #[test]
    fn swipe_along_guide_cuts_it() {
        let mut board = board();
        let cut = board.try_cut(Vec2::new(-95.0, 45.0), Vec2::new(110.0, 35.0));
        assert_eq!(cut, Some(0));
        assert_eq!(board.progress(), 0.5);

        // Same swipe again finds nothing left on that line.
        assert_eq!(
            board.try_cut(Vec2::new(-95.0, 45.0), Vec2::new(110.0, 35.0)),
            None
        );
    }

    #[test]
    fn backwards_or_sloppy_swipes_miss() {
        let mut board = board();
        assert_eq!(board.try_cut(Vec2::new(100.0, 40.0), Vec2::new(-100.0, 40.0)), None);
        assert_eq!(board.try_cut(Vec2::new(-100.0, 100.0), Vec2::new(100.0, 100.0)), None);
        assert_eq!(board.progress(), 0.0);
    }

    #[test]
    fn all_guides_complete_the_board() {
        let mut board = board();
        board.try_cut(Vec2::new(-100.0, -40.0), Vec2::new(100.0, -40.0));
        assert!(!board.is_complete());
        board.try_cut(Vec2::new(-100.0, 40.0), Vec2::new(100.0, 40.0));
        assert!(board.is_complete());
        assert_eq!(board.progress(), 1.0);
    }

    #[test]
    fn board_bounds() {
        let board = board();
        assert!(board.contains(Vec2::new(-150.0, 99.0)));
        assert!(!board.contains(Vec2::new(151.0, 0.0)));
    }
}
