//! Recovery from a conflict --- undoing decision levels.
//!
//! Each undo pops one checkpoint from the trail and pushes every atom it frees back onto the activity heap, so freed atoms are immediately available as decision candidates at their accumulated activity.

use crate::{context::Context, db::LevelIndex, misc::log::targets};

impl Context {
    /// Undoes the top `levels` decision levels.
    pub fn backjump(&mut self, levels: LevelIndex) {
        log::trace!(target: targets::BACKJUMP, "Backjump from {} by {levels}", self.trail.level());
        for _ in 0..levels {
            self.undo_one();
        }
    }

    /// Undoes every decision, returning to the root level.
    pub fn undo_to_root(&mut self) {
        while self.trail.level() > 0 {
            self.undo_one();
        }
    }

    fn undo_one(&mut self) {
        for atom in self.trail.undo() {
            self.activity.push(atom);
        }
    }
}
