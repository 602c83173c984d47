use anyhow::Result;
use aws_sdk_s3::primitives::ByteStream;
use tracing::info;
use uuid::Uuid;

use crate::documents::DocumentKind;

/// Reduces a client-supplied filename to `[A-Za-z0-9._-]`, with whitespace
/// turned into underscores and leading dots/underscores removed.
pub fn secure_filename(filename: &str) -> String {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    cleaned.trim_start_matches(['.', '_']).to_string()
}

/// Stores the raw upload under `resumes/{uuid}/{filename}` and returns the key.
pub async fn archive_resume(
    s3: &aws_sdk_s3::Client,
    bucket: &str,
    filename: &str,
    kind: DocumentKind,
    bytes: Vec<u8>,
) -> Result<String> {
    let mut name = secure_filename(filename);
    if name.is_empty() {
        name = "resume".to_string();
    }
    let key = format!("resumes/{}/{}", Uuid::new_v4(), name);

    s3.put_object()
        .bucket(bucket)
        .key(&key)
        .body(ByteStream::from(bytes))
        .content_type(kind.content_type())
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("S3 upload failed: {e}"))?;

    info!("Archived resume upload to s3://{}/{}", bucket, key);
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_filename_strips_paths_and_symbols() {
        assert_eq!(secure_filename("../../etc/passwd"), "passwd");
        assert_eq!(secure_filename("C:\\Users\\me\\My CV (final).pdf"), "My_CV_final.pdf");
        assert_eq!(secure_filename("  résumé 2024.docx "), "rsum_2024.docx");
    }

    #[test]
    fn test_secure_filename_drops_leading_dots() {
        assert_eq!(secure_filename(".hidden.pdf"), "hidden.pdf");
        assert_eq!(secure_filename("..."), "");
    }
}
