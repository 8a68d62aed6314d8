pub mod login;
pub mod person;

pub use login::LoginInfo;
pub use person::Person;
