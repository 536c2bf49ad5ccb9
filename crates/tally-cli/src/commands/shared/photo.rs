use std::path::Path;

use anyhow::Context;
use base64::Engine as _;

/// Read an image file into a `data:` URL so it can ride along as an opaque
/// string on a failed result.
pub fn encode_photo(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read photo {}", path.display()))?;
    if bytes.is_empty() {
        anyhow::bail!("photo {} is empty", path.display());
    }

    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Ok(format!("data:{};base64,{encoded}", mime_for(path)))
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") => "image/heic",
        _ => "application/octet-stream",
    }
}
