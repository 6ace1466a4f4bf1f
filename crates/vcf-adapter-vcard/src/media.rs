//! Media value classification for PHOTO, LOGO and KEY

/// Image format guessed from base64 data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Gif,
}

impl ImageKind {
    /// Guess from the leading base64 characters, defaulting to JPEG
    #[must_use]
    pub fn sniff(data: &str) -> Self {
        if data.starts_with("iVBOR") {
            Self::Png
        } else if data.starts_with("R0lGOD") {
            Self::Gif
        } else {
            Self::Jpeg
        }
    }

    /// vCard 3.0 `TYPE` parameter value
    #[must_use]
    pub const fn type_param(self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::Gif => "GIF",
        }
    }

    /// vCard 4.0 `MEDIATYPE` parameter value
    #[must_use]
    pub const fn media_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
        }
    }
}

/// Whether a media value is a reference rather than inline data
#[must_use]
pub fn is_uri(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
