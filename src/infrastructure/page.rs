use crate::domain::route::issue_link;
use crate::domain::DisplayRecord;

const TITLE: &str = "Certificate of Marriage";

// Adapted from belvi_render's html_escape (Smittyvb/belvi, Apache-2.0).
/// Escape text for use as an HTML element value or quoted attribute value.
///
/// Everything but letters, digits and a few harmless punctuation characters
/// is replaced by a numeric character reference.
pub fn html_escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for khar in text.chars() {
        match khar {
            '0'..='9' | 'A'..='Z' | 'a'..='z' => result.push(khar),
            ' ' | '.' | ',' | '-' | '/' | ':' => result.push(khar),
            c => result.push_str(&format!("&#x{:X};", c as u32)),
        }
    }
    result
}

/// What a single certificate page shows.
#[derive(Debug, Clone)]
pub struct CertificatePage<'a> {
    pub record: &'a DisplayRecord,
    /// Rendered from the sample route.
    pub sample: bool,
    /// Message of a failed resolution, shown in a modal dialog.
    pub alert: Option<&'a str>,
}

impl<'a> CertificatePage<'a> {
    pub fn render(&self) -> String {
        let sample_label = if self.sample { "<h3>Sample</h3>" } else { "" };

        // Only a successfully decoded sample can be carried on to issuing.
        let next_link = match (self.sample, self.alert) {
            (true, None) => format!(
                r#"<a class="btn" id="next" href="{}">Next</a>"#,
                issue_link(&self.record.bride_name, &self.record.groom_name)
            ),
            _ => String::new(),
        };

        let dialog = match self.alert {
            Some(message) => format!(
                concat!(
                    r#"<dialog id="alert"><p>{}</p><form method="dialog"><button>OK</button></form></dialog>"#,
                    r#"<script>document.getElementById("alert").showModal();</script>"#
                ),
                html_escape(message)
            ),
            None => String::new(),
        };

        format!(
            include_str!("tmpl/certificate.html"),
            title = TITLE,
            dialog = dialog,
            sample_label = sample_label,
            bride = html_escape(&self.record.bride_name),
            groom = html_escape(&self.record.groom_name),
            issued_date = html_escape(&self.record.issued_date),
            tx_hash = html_escape(&self.record.transaction_hash),
            certificate_id = html_escape(&self.record.certificate_id),
            next_link = next_link,
        )
    }
}
