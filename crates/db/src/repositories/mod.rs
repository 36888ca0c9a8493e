//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod contact_repo;
pub mod gallery_repo;
pub mod hero_image_repo;
pub mod message_repo;
pub mod notice_repo;
pub mod user_repo;
pub mod youtube_video_repo;

pub use contact_repo::ContactRepo;
pub use gallery_repo::GalleryRepo;
pub use hero_image_repo::HeroImageRepo;
pub use message_repo::MessageRepo;
pub use notice_repo::NoticeRepo;
pub use user_repo::UserRepo;
pub use youtube_video_repo::YoutubeVideoRepo;
