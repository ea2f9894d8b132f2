pub const PREVIEW_IMAGE_WIDTH: u32 = 512;

pub const PREVIEW_IMAGE_HEIGHT: u32 = 512;
