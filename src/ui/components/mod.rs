pub mod audiobooks;
pub mod banner;
pub mod chat_area;
pub mod contact_form;
pub mod image_uploader;
pub mod input_bar;
pub mod knowledge_panel;
pub mod nav_bar;
