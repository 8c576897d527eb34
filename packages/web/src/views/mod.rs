mod home;
pub use home::Home;

mod auth;
pub use auth::AuthPage;

mod generate;
pub use generate::GenerateVideo;

mod my_videos;
pub use my_videos::MyVideos;

mod video_detail;
pub use video_detail::VideoDetail;

mod edit_video;
pub use edit_video::EditVideo;

mod profile;
pub use profile::Profile;

mod not_found;
pub use not_found::NotFound;
