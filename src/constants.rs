//! Shared numerical constants.

/// π to 20 significant decimal digits.
///
/// Both the angle-conversion helpers and any caller-side trigonometry should
/// draw on this single constant so results stay numerically consistent.
pub const PI: f64 = 3.14159265358979323846;
