//! base64url codec for signed request segments

use base64::{
    alphabet,
    engine::{
        general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE_NO_PAD},
        DecodePaddingMode,
    },
    DecodeError, Engine,
};

/// Standard alphabet decoder that accepts segments with or without padding
/// and ignores non-zero trailing bits in the final symbol.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode a base64url segment.
///
/// `-` and `_` are translated to `+` and `/` before a standard decode, so
/// segments produced by either alphabet are accepted.
pub fn decode_segment(segment: &str) -> Result<Vec<u8>, DecodeError> {
    let translated: String = segment
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    LENIENT_STANDARD.decode(translated)
}

/// Encode bytes as an unpadded base64url segment
#[must_use]
pub fn encode_segment(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}
