pub mod pitch_resolver;
pub mod template;
