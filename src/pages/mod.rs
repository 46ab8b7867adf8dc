pub mod dashboard;
pub mod login;
pub mod section;
pub mod signup;
