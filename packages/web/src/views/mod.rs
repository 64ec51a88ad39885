mod register;
pub use register::Register;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;
