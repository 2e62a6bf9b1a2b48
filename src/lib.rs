pub mod counter;
pub mod question;
pub mod scaffold;
