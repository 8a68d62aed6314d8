pub mod about;
pub mod accounts;
pub mod app;
pub mod demographics;
pub mod home;
pub mod login;
pub mod workplace;

pub use about::render_about;
pub use accounts::render_accounts;
pub use app::render_app;
pub use demographics::render_demographics;
pub use home::render_home;
pub use login::render_login;
pub use workplace::render_workplace;
