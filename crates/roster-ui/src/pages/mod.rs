pub mod login;
pub mod member_detail;
pub mod member_form;
pub mod members;
pub mod register;
