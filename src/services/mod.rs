pub mod messenger;
pub mod notifier;
