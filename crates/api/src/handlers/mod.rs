pub mod auth;
pub mod contact;
pub mod gallery;
pub mod hero_images;
pub mod member_requests;
pub mod messages;
pub mod notice;
pub mod users;
pub mod youtube_videos;
