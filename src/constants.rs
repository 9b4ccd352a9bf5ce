/// The analysis service behind this URL is a black box: it accepts a
/// multipart image upload and returns a JSON body with an `answers` string.
pub const UPLOAD_ENDPOINT: &str = "http://localhost:5000/upload";

/// Name of the multipart form field carrying the image bytes.
pub const IMAGE_FIELD: &str = "image";

pub const REQUEST_TIMEOUT_SECS: u64 = 60;
