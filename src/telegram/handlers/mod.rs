pub mod inline_buttons;
pub mod message;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleStatus {
    Handled,
    Skipped,
}
