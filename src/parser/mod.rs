pub mod primitive_parser;
pub mod tab_entry;
