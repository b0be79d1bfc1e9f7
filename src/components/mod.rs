pub mod password_field;
pub mod spinner;
pub mod text_field;
