//! Miscellaneous items related to [logging](log).
//!
//! Calls to the log macros are made throughout the library.
//! Note, no log implementation is provided.
//! For details, see [log].

/// Targets to be used within a [log] macro.
pub mod targets {
    /// Logs related to [unit propagation](crate::procedures::bcp).
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [conflict analysis](crate::procedures::analysis).
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to [clause-database reduction](crate::procedures::reduction).
    pub const REDUCTION: &str = "reduction";

    /// Logs related to [backjumping](crate::procedures::backjump).
    pub const BACKJUMP: &str = "backjump";

    /// Logs related to the restart schedule.
    pub const RESTART: &str = "restart";

    /// Logs related to the [trail](crate::db::trail).
    pub const TRAIL: &str = "trail";

    /// Logs related to the [activity heap](crate::db::activity).
    pub const ACTIVITY: &str = "activity";

    /// Logs related to [building a formula](crate::builder).
    pub const BUILD: &str = "build";
}
