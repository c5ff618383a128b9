use crate::domain::codec::{encode_certification_id, to_hex};

/// A certificate page route, with its raw (still encoded) parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificateRoute {
    /// `/certification/sample/{bride}/{groom}/`
    Sample { bride: String, groom: String },
    /// `/certification/{id}/{tx_hash}`
    Live { id: String, tx_hash: String },
}

impl CertificateRoute {
    /// Match a request path (without the query string).
    ///
    /// A single trailing slash is optional. Empty segments never match.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.strip_suffix('/').unwrap_or(path);
        let rest = path.strip_prefix("/certification/")?;
        let segments: Vec<&str> = rest.split('/').collect();

        if segments.iter().any(|s| s.is_empty()) {
            return None;
        }

        match segments.as_slice() {
            ["sample", bride, groom] => Some(Self::Sample {
                bride: bride.to_string(),
                groom: groom.to_string(),
            }),
            [id, tx_hash] => Some(Self::Live {
                id: id.to_string(),
                tx_hash: tx_hash.to_string(),
            }),
            _ => None,
        }
    }

    pub fn is_sample(&self) -> bool {
        matches!(self, Self::Sample { .. })
    }
}

/// Link to the issue step, carrying both names hex-encoded.
pub fn issue_link(bride: &str, groom: &str) -> String {
    format!("/issue/{}/{}", to_hex(bride), to_hex(groom))
}

/// Public link of an issued certificate.
pub fn certificate_link(id: u64, tx_hash: &str) -> String {
    format!("/certification/{}/{}", encode_certification_id(id), tx_hash)
}
