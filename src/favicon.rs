//! Conversion of status favicons into plain png files.

use std::borrow::Cow;
use std::io::Cursor;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, ImageOutputFormat};
use crate::error::FaviconError;

pub const FAVICON_PREFIX: &str = "data:image/png;base64,";

/// Decode the `data:` url of a favicon and re-encode it as png.
///
/// Line breaks inside the base64 payload are ignored, older servers wrap it
/// at 76 columns. Re-encoding validates the image and drops ancillary chunks,
/// so transcoding the output again yields identical bytes.
pub fn transcode(favicon: &str) -> Result<Vec<u8>, FaviconError> {
    if favicon.is_empty() {
        return Err(FaviconError::NoIcon);
    }
    let encoded = favicon.strip_prefix(FAVICON_PREFIX).ok_or(FaviconError::BadFormat)?;
    let png = STANDARD.decode(strip_line_breaks(encoded).as_bytes())?;

    let image = image::load_from_memory_with_format(&png, ImageFormat::Png)
        .map_err(FaviconError::Decode)?;

    let mut output = Cursor::new(Vec::new());
    image.write_to(&mut output, ImageOutputFormat::Png)
        .map_err(FaviconError::Encode)?;
    Ok(output.into_inner())
}

fn strip_line_breaks(encoded: &str) -> Cow<'_, str> {
    if encoded.contains(['\r', '\n']) {
        Cow::Owned(encoded.replace(['\r', '\n'], ""))
    } else {
        Cow::Borrowed(encoded)
    }
}

/// Wrap png bytes into a favicon `data:` url.
pub fn to_data_url(png: &[u8]) -> String {
    format!("{}{}", FAVICON_PREFIX, STANDARD.encode(png))
}
