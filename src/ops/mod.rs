pub mod timecode;
pub mod video_url;
