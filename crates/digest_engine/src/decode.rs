use chardetng::EncodingDetector;
use digest_logging::engine_warn;
use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHtml {
    pub html: String,
    pub encoding_label: String,
    /// Some input bytes were invalid and came out as U+FFFD.
    pub lossy: bool,
}

/// Decode a page body to UTF-8.
///
/// Encoding is chosen from the byte-order mark, then the `Content-Type`
/// charset parameter, then `chardetng` detection over the bytes. Malformed
/// sequences are replaced rather than rejected; the sanitizer drops the
/// replacement characters later.
pub fn decode_html(bytes: &[u8], content_type: Option<&str>) -> DecodedHtml {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(enc) = content_type
        .and_then(charset_param)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return decode_with(bytes, enc);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    decode_with(bytes, detector.guess(None, true))
}

fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').find_map(|part| {
        let (key, value) = part.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim_matches(&[' ', '"', '\''][..]))
    })
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> DecodedHtml {
    let (text, _, lossy) = enc.decode(bytes);
    if lossy {
        engine_warn!("Replaced malformed {} sequences in page body", enc.name());
    }
    DecodedHtml {
        html: text.into_owned(),
        encoding_label: enc.name().to_string(),
        lossy,
    }
}
