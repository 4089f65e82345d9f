pub const VIDEO_SUMMARY: &str = include_str!("../data/prompts/video_summary.txt");
pub const IMAGE_CAPTION: &str = include_str!("../data/prompts/image_caption.txt");
