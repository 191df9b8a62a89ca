pub mod header;
pub mod home;
pub mod student_form;
pub mod student_list;
