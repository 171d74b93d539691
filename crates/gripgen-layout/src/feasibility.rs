//! Advisory feasibility check for a box stack.

use crate::LayoutLimits;

/// Largest stack the gripper frame is rated for.
pub const MAX_BOX_COUNT: u32 = 8;

impl LayoutLimits {
    /// Whether a stack of `count` boxes can be gripped at all.
    ///
    /// A stack is feasible when it holds at most [`MAX_BOX_COUNT`] boxes,
    /// each box is wider than `min_distance`, and each box is taller than
    /// `ceil(min_distance * (count + 1) / (count - 1))`. For a single box
    /// the height bound is infinite, so `count = 1` is never feasible.
    ///
    /// This is diagnostic only; [`LayoutLimits::compute_grid`] does not
    /// consult it.
    pub fn is_feasible(&self, count: u32, width: f64, height: f64) -> bool {
        if count > MAX_BOX_COUNT {
            return false;
        }
        let n = f64::from(count);
        let min_height = ((self.min_distance * (n + 1.0)) / (n - 1.0)).ceil();
        width > self.min_distance && height > min_height
    }
}

/// [`LayoutLimits::is_feasible`] with the default limits.
pub fn is_feasible(count: u32, width: f64, height: f64) -> bool {
    LayoutLimits::default().is_feasible(count, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_stack_feasible() {
        // min height for 4 boxes: ceil(35 * 5 / 3) = 59
        assert!(is_feasible(4, 300.0, 100.0));
        assert!(is_feasible(4, 300.0, 59.5));
        assert!(!is_feasible(4, 300.0, 59.0));
    }

    #[test]
    fn test_too_many_boxes() {
        assert!(is_feasible(8, 300.0, 100.0));
        assert!(!is_feasible(9, 300.0, 1000.0));
    }

    #[test]
    fn test_width_must_exceed_minimum() {
        assert!(!is_feasible(4, 35.0, 100.0));
        assert!(is_feasible(4, 35.5, 100.0));
    }

    #[test]
    fn test_single_box_never_feasible() {
        assert!(!is_feasible(1, 300.0, 10_000.0));
    }

    #[test]
    fn test_two_boxes() {
        // ceil(35 * 3 / 1) = 105
        assert!(!is_feasible(2, 300.0, 105.0));
        assert!(is_feasible(2, 300.0, 106.0));
    }
}
