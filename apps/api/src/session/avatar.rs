//! Avatar resolution — decides whether a slot shows the uploaded photo or the
//! generated initials placeholder.
//!
//! The uploaded photo wins at every size: one upload swaps every avatar in the app.

use base64::{engine::general_purpose, Engine as _};
use bytes::Bytes;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// Text of the placeholder shown when no photo has been uploaded.
pub const PLACEHOLDER_INITIALS: &str = "AND";

/// Extensions the upload form accepts. The MIME type is still derived loosely,
/// see `mime_for_extension`.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

#[derive(Debug, Error, PartialEq)]
pub enum AvatarError {
    #[error("Unsupported image type '.{extension}' (accepted: png, jpg, jpeg, webp)")]
    UnsupportedImage { extension: String },

    #[error("Uploaded image is empty")]
    Empty,

    #[error("Uploaded image is {size} bytes; the limit is {max} bytes")]
    TooLarge { size: usize, max: usize },
}

// ────────────────────────────────────────────────────────────────────────────
// Stored state
// ────────────────────────────────────────────────────────────────────────────

/// A confirmed profile photo, held in memory for the session only.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarState {
    pub bytes: Bytes,
    pub mime: String,
}

impl AvatarState {
    /// Builds avatar state from an uploaded file, inferring the MIME type from the
    /// filename's extension. Nothing about the bytes themselves is inspected.
    pub fn from_upload(
        filename: &str,
        bytes: Bytes,
        max_bytes: usize,
    ) -> Result<Self, AvatarError> {
        let extension = match extension_of(filename) {
            Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) => ext,
            other => {
                return Err(AvatarError::UnsupportedImage {
                    extension: other.unwrap_or_default(),
                })
            }
        };
        if bytes.is_empty() {
            return Err(AvatarError::Empty);
        }
        if bytes.len() > max_bytes {
            return Err(AvatarError::TooLarge {
                size: bytes.len(),
                max: max_bytes,
            });
        }
        Ok(Self {
            mime: mime_for_extension(&extension),
            bytes,
        })
    }
}

/// Lowercased text after the last `.`, or `None` when the name has no dot.
pub fn extension_of(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.trim().to_ascii_lowercase())
}

/// `jpg`/`jpeg` map to `image/jpeg`; any other extension is trusted verbatim as
/// the MIME subtype.
pub fn mime_for_extension(extension: &str) -> String {
    match extension {
        "jpg" | "jpeg" => "image/jpeg".to_string(),
        other => format!("image/{other}"),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resolution
// ────────────────────────────────────────────────────────────────────────────

/// What a renderer should draw in an avatar slot.
#[derive(Debug, Clone, PartialEq)]
pub enum AvatarDescriptor {
    Image {
        bytes: Bytes,
        mime: String,
    },
    Initials {
        text: &'static str,
        size: u32,
        border_width: u32,
        font_size: String,
    },
}

#[cfg(test)]
impl AvatarDescriptor {
    pub fn is_image(&self) -> bool {
        matches!(self, AvatarDescriptor::Image { .. })
    }
}

/// Resolves an avatar slot. A stored photo always wins, whatever the slot size.
pub fn resolve(
    state: Option<&AvatarState>,
    size: u32,
    border_width: u32,
    font_size: &str,
) -> AvatarDescriptor {
    match state {
        Some(avatar) => AvatarDescriptor::Image {
            bytes: avatar.bytes.clone(),
            mime: avatar.mime.clone(),
        },
        None => AvatarDescriptor::Initials {
            text: PLACEHOLDER_INITIALS,
            size,
            border_width,
            font_size: font_size.to_string(),
        },
    }
}

/// The avatar placements used across the pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarSlot {
    Sidebar,
    About,
    Contact,
}

impl AvatarSlot {
    /// `(size px, border px, placeholder font size)`
    pub fn dimensions(self) -> (u32, u32, &'static str) {
        match self {
            AvatarSlot::Sidebar => (90, 3, "1.4rem"),
            AvatarSlot::About => (110, 3, "2rem"),
            AvatarSlot::Contact => (130, 4, "2.2rem"),
        }
    }

    pub fn resolve(self, state: Option<&AvatarState>) -> AvatarDescriptor {
        let (size, border, font_size) = self.dimensions();
        resolve(state, size, border, font_size)
    }
}

/// `data:<mime>;base64,<payload>` for inlining the photo into markup.
pub fn data_uri(bytes: &[u8], mime: &str) -> String {
    format!("data:{mime};base64,{}", general_purpose::STANDARD.encode(bytes))
}

impl Serialize for AvatarDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AvatarDescriptor::Image { bytes, mime } => {
                let mut s = serializer.serialize_struct("AvatarDescriptor", 3)?;
                s.serialize_field("kind", "image")?;
                s.serialize_field("mime", mime)?;
                s.serialize_field("data_uri", &data_uri(bytes, mime))?;
                s.end()
            }
            AvatarDescriptor::Initials {
                text,
                size,
                border_width,
                font_size,
            } => {
                let mut s = serializer.serialize_struct("AvatarDescriptor", 5)?;
                s.serialize_field("kind", "initials")?;
                s.serialize_field("text", text)?;
                s.serialize_field("size", size)?;
                s.serialize_field("border_width", border_width)?;
                s.serialize_field("font_size", font_size)?;
                s.end()
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn photo() -> AvatarState {
        AvatarState {
            bytes: Bytes::from_static(b"\x89PNG fake"),
            mime: "image/png".to_string(),
        }
    }

    #[test]
    fn test_stored_photo_wins_at_every_size() {
        let state = photo();
        let slots = [(90, 3, "1.4rem"), (110, 3, "2rem"), (130, 4, "2.2rem"), (1, 0, "")];
        for (size, border, font) in slots {
            let descriptor = resolve(Some(&state), size, border, font);
            assert_eq!(
                descriptor,
                AvatarDescriptor::Image {
                    bytes: state.bytes.clone(),
                    mime: "image/png".to_string(),
                }
            );
        }
    }

    #[test]
    fn test_absent_photo_yields_initials() {
        let descriptor = resolve(None, 110, 3, "2rem");
        assert_eq!(
            descriptor,
            AvatarDescriptor::Initials {
                text: "AND",
                size: 110,
                border_width: 3,
                font_size: "2rem".to_string(),
            }
        );
    }

    #[test]
    fn test_slot_dimensions() {
        match AvatarSlot::Contact.resolve(None) {
            AvatarDescriptor::Initials {
                size, border_width, ..
            } => {
                assert_eq!(size, 130);
                assert_eq!(border_width, 4);
            }
            other => panic!("expected initials, got {other:?}"),
        }
        assert!(AvatarSlot::Sidebar.resolve(Some(&photo())).is_image());
    }

    #[test]
    fn test_mime_for_extension() {
        assert_eq!(mime_for_extension("jpg"), "image/jpeg");
        assert_eq!(mime_for_extension("jpeg"), "image/jpeg");
        assert_eq!(mime_for_extension("png"), "image/png");
        assert_eq!(mime_for_extension("webp"), "image/webp");
        // unknown subtypes pass through unchanged
        assert_eq!(mime_for_extension("heic"), "image/heic");
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("me.JPG").as_deref(), Some("jpg"));
        assert_eq!(extension_of("archive.tar.webp").as_deref(), Some("webp"));
        assert_eq!(extension_of("noext"), None);
    }

    #[test]
    fn test_from_upload_rejects_name_without_dot() {
        for name in ["png", "webp", "jpeg", ""] {
            let err = AvatarState::from_upload(name, Bytes::from_static(b"x"), 10).unwrap_err();
            assert_eq!(
                err,
                AvatarError::UnsupportedImage {
                    extension: String::new()
                },
                "{name:?} must be rejected"
            );
        }
    }

    #[test]
    fn test_from_upload_accepts_jpeg() {
        let state = AvatarState::from_upload("Me.JPEG", Bytes::from_static(b"abc"), 1024).unwrap();
        assert_eq!(state.mime, "image/jpeg");
        assert_eq!(state.bytes, Bytes::from_static(b"abc"));
    }

    #[test]
    fn test_from_upload_rejects_unsupported_extension() {
        let err =
            AvatarState::from_upload("anim.gif", Bytes::from_static(b"abc"), 1024).unwrap_err();
        assert_eq!(
            err,
            AvatarError::UnsupportedImage {
                extension: "gif".to_string()
            }
        );
    }

    #[test]
    fn test_from_upload_rejects_empty_and_oversized() {
        assert_eq!(
            AvatarState::from_upload("a.png", Bytes::new(), 1024).unwrap_err(),
            AvatarError::Empty
        );
        assert_eq!(
            AvatarState::from_upload("a.png", Bytes::from_static(b"12345"), 4).unwrap_err(),
            AvatarError::TooLarge { size: 5, max: 4 }
        );
    }

    #[test]
    fn test_serialize_image_as_data_uri() {
        let json = serde_json::to_value(resolve(Some(&photo()), 90, 3, "1.4rem")).unwrap();
        assert_eq!(json["kind"], "image");
        assert_eq!(json["mime"], "image/png");
        let uri = json["data_uri"].as_str().unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_serialize_initials() {
        let json = serde_json::to_value(resolve(None, 90, 3, "1.4rem")).unwrap();
        assert_eq!(json["kind"], "initials");
        assert_eq!(json["text"], "AND");
        assert_eq!(json["size"], 90);
        assert_eq!(json["border_width"], 3);
        assert_eq!(json["font_size"], "1.4rem");
    }

    #[test]
    fn test_data_uri_encoding() {
        assert_eq!(data_uri(b"hi", "image/png"), "data:image/png;base64,aGk=");
    }
}
