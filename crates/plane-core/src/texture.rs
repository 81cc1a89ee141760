use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("texture source is empty")]
    Empty,
    #[error("texture has zero size ({0}x{1})")]
    ZeroSized(u32, u32),
    #[error("failed to decode texture: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decoded RGBA8 image ready for upload, rows top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureImage {
    /// Decode an encoded image (format sniffed from the bytes).
    pub fn decode(bytes: &[u8]) -> Result<Self, TextureError> {
        if bytes.is_empty() {
            return Err(TextureError::Empty);
        }
        let img = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(TextureError::ZeroSized(width, height));
        }
        Ok(Self {
            width,
            height,
            rgba: img.into_raw(),
        })
    }

    /// 1x1 opaque white, bound until the real texture arrives.
    pub fn placeholder() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![255, 255, 255, 255],
        }
    }
}
