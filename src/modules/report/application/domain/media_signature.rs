use crate::report::application::domain::entities::MediaType;

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
// EBML header, shared by every WebM/Matroska stream.
const EBML_SIGNATURE: &[u8] = &[0x1A, 0x45, 0xDF, 0xA3];

/// Whether the leading bytes agree with the declared media type.
///
/// Undeclared kinds make no claim about their content and always pass.
pub fn matches_declared_type(media_type: &MediaType, bytes: &[u8]) -> bool {
    match media_type {
        MediaType::Picture => bytes.starts_with(PNG_SIGNATURE),
        MediaType::Audio | MediaType::Video => bytes.starts_with(EBML_SIGNATURE),
        MediaType::Other(_) => true,
    }
}
