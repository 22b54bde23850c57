pub mod commands;
pub mod dispatcher;
pub mod handlers;
pub mod inline_buttons;
pub mod keyboards;
pub mod outbound;
pub mod screens;

pub use dispatcher::MenuDispatcher;
