//! Yes/no confirmation seam for the dialog layer.

/// Question asked before a trip is deleted.
pub const DELETE_PROMPT: &str = "Bạn có chắc chắn muốn xóa lượt đăng ký này?";

/// Asks the user to confirm an action.
///
/// Any `FnMut(&str) -> bool` closure is a `Confirm`.
pub trait Confirm {
    /// Shows `message` and returns true when the user accepts.
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}
