pub mod about;
pub mod browse;
pub mod detail;
pub mod home;
pub mod login;
pub mod shared;
pub mod signup;
pub mod tutor;
pub mod upload;

pub use about::AboutView;
pub use browse::BrowseView;
pub use detail::ExamDetailModal;
pub use home::HomeView;
pub use login::LoginView;
pub use signup::SignupView;
pub use tutor::TutorView;
pub use upload::UploadView;
