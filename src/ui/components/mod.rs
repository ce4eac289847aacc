pub mod chat_area;
pub mod connect_prompt;
pub mod input_bar;
pub mod navbar;
pub mod profile;
pub mod sidebar;
pub mod toasts;
