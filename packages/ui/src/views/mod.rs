mod admin_users;
pub use admin_users::AdminUsersView;

mod celebrant_form;
pub use celebrant_form::CelebrantFormView;

mod celebrants;
pub use celebrants::CelebrantsView;

mod dashboard;
pub use dashboard::DashboardView;

mod event_form;
pub use event_form::EventFormView;

mod event_messages;
pub use event_messages::EventMessagesView;

mod events;
pub use events::EventsView;

mod home;
pub use home::HomeView;

mod login;
pub use login::LoginView;

mod logout;
pub use logout::LogoutView;

mod not_found;
pub use not_found::NotFoundView;

mod profile;
pub use profile::ProfileView;

mod register;
pub use register::RegisterView;
