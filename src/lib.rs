// Sukashi - editor watermark overlay settings library

pub mod constants;
pub mod fingerprint;
pub mod folders;
pub mod logging;
pub mod notifier;
pub mod options;
pub mod settings;
pub mod template;
pub mod token;
