//! Hand-built `multipart/form-data` bodies for route tests.

pub const BOUNDARY: &str = "----incident-report-test-boundary";

pub const PNG_BYTES: &[u8] = &[
    0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R',
];

#[derive(Debug, Clone)]
pub enum Part<'a> {
    Text(&'a str, &'a str),
    /// name, file name, content type, bytes
    File(&'a str, &'a str, &'a str, &'a [u8]),
}

impl<'a> Part<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Part::Text(name, _) => *name,
            Part::File(name, ..) => *name,
        }
    }
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, file_name, content_type, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// The form the browser client sends: PNG media plus every text key,
/// including `name` even when anonymous.
pub fn report_parts<'a>(media_type: &'a str, anonymous: &'a str, name: &'a str) -> Vec<Part<'a>> {
    vec![
        Part::File("media", "evidence.png", "image/png", PNG_BYTES),
        Part::Text("type", media_type),
        Part::Text("details", "incident"),
        Part::Text("bullyType", "Verbal"),
        Part::Text("dateTime", "2024-01-01T10:00"),
        Part::Text("location", "Hall"),
        Part::Text("anonymous", anonymous),
        Part::Text("name", name),
    ]
}
