//! Media reading and encoding

pub mod encoder;
pub mod source;

pub use encoder::{
    write_empty_media, EncodedMedia, MediaEncoder, MediaEncoding, IMAGE_DATA_KEY,
    MEDIA_PART_NAME, VIDEO_DATA_KEY,
};
pub use source::{
    MediaBlob, MediaPlatform, MediaSource, NativeMediaSource, PlatformMediaSource,
    WebMediaSource,
};
