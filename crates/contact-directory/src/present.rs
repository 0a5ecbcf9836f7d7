//! Presentation text for contact points.
//!
//! Everything here is string formatting over the model: the status line shown
//! under a contact point, shortened links, the address line, download labels,
//! the rendered card and the plain-text copy card. Wording follows the
//! published German page.

use opening_status::{DayLabels, StatusResult};

use crate::model::{present, Address, ContactPoint, Download};

/// Status line for a verdict, or `None` when the status should not be shown.
///
/// # Examples
///
/// ```
/// use contact_directory::present::status_line;
/// use opening_status::{DayKey, DayLabels, StatusResult};
///
/// let closed = StatusResult::Closed {
///     opens_at: "09:00".parse().unwrap(),
///     opens_on: DayKey::Mon,
/// };
/// assert_eq!(
///     status_line(&closed, &DayLabels::default()).as_deref(),
///     Some("Geschlossen · öffnet am Mo um 09:00")
/// );
/// assert_eq!(status_line(&StatusResult::Unknown, &DayLabels::default()), None);
/// ```
pub fn status_line(status: &StatusResult, labels: &DayLabels) -> Option<String> {
    match status {
        StatusResult::Open { closes_at } => Some(format!("Geöffnet · bis {closes_at}")),
        StatusResult::Closed { opens_at, opens_on } => Some(format!(
            "Geschlossen · öffnet am {} um {}",
            labels.label(*opens_on),
            opens_at
        )),
        StatusResult::Appointment => Some("Nach Vereinbarung".to_string()),
        StatusResult::Unknown => None,
    }
}

/// Shorten a web address for display: drop the scheme, then a leading `www.`.
pub fn display_web_link(url: &str) -> String {
    let url = url.trim();
    let without_scheme = ["http://", "https://", "ftp://"]
        .iter()
        .find_map(|scheme| url.strip_prefix(scheme))
        .unwrap_or(url);
    without_scheme
        .strip_prefix("www.")
        .unwrap_or(without_scheme)
        .to_string()
}

/// `@handle` for a social profile link or a bare handle.
///
/// The handle is the last path segment of the profile URL; query strings and
/// fragments are ignored. Links whose last segment is a file (such as
/// `profile.php?id=...`) have no usable handle.
pub fn social_handle(link: &str) -> Option<String> {
    let link = link.trim();
    if let Some(handle) = link.strip_prefix('@') {
        return (!handle.is_empty()).then(|| format!("@{handle}"));
    }

    let without_scheme = display_web_link(link);
    let path = without_scheme.split(['?', '#']).next().unwrap_or_default();
    let mut segments = path.split('/').filter(|s| !s.is_empty());

    let first = segments.next()?;
    if !first.contains('.') {
        // no host, so a bare handle unless something follows it
        return match segments.next() {
            None => Some(format!("@{first}")),
            Some(_) => None,
        };
    }

    let last = segments.last()?;
    if last.contains('.') {
        return None;
    }
    Some(format!("@{last}"))
}

/// `"<street>, <postal code> <city>"`, skipping missing parts.
pub fn address_line(address: &Address) -> Option<String> {
    let locality = format!(
        "{} {}",
        present(&address.postal_code).unwrap_or_default(),
        present(&address.city).unwrap_or_default()
    );
    let parts: Vec<&str> = [present(&address.street), Some(locality.trim())]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();

    (!parts.is_empty()).then(|| parts.join(", "))
}

/// The download's own label, else the file name in its URL, else the URL.
pub fn download_label(download: &Download) -> String {
    if let Some(label) = present(&download.label) {
        return label.to_string();
    }
    let path = download.url.split(['?', '#']).next().unwrap_or_default();
    path.rsplit('/')
        .find(|segment| !segment.is_empty())
        .filter(|segment| !segment.contains(':'))
        .unwrap_or(download.url.as_str())
        .to_string()
}

/// The plain-text summary the page copies to the clipboard.
///
/// One `Label: value` line per present field, in a fixed order.
pub fn copy_text(point: &ContactPoint) -> String {
    let mut lines = vec![format!("Name: {}", point.name)];
    if let Some(carrier) = present(&point.carrier) {
        lines.push(format!("Träger: {carrier}"));
    }
    if let Some(address) = point.address.as_ref().and_then(address_line) {
        lines.push(format!("Adresse: {address}"));
    }
    if let Some(contact) = &point.contact {
        push_field(&mut lines, "Telefon", &contact.phone);
        push_field(&mut lines, "Mobil", &contact.mobile);
        push_field(&mut lines, "E-Mail", &contact.email);
        push_field(&mut lines, "Web", &contact.web);
    }
    if let Some(hours) = &point.opening_hours {
        push_field(&mut lines, "Sprechzeiten", &hours.text);
    }
    if let Some(social) = &point.social {
        push_field(&mut lines, "Facebook", &social.facebook);
        push_field(&mut lines, "Instagram", &social.instagram);
    }
    lines.join("\n")
}

/// The contact point as shown in the list: shortened links, social handles,
/// the hours comment, the status line and downloads.
pub fn card_text(point: &ContactPoint, status: &StatusResult, labels: &DayLabels) -> String {
    let mut lines = vec![point.name.clone()];
    if let Some(carrier) = present(&point.carrier) {
        lines.push(format!("Träger: {carrier}"));
    }
    if let Some(address) = point.address.as_ref().and_then(address_line) {
        lines.push(format!("Adresse: {address}"));
    }
    if let Some(contact) = &point.contact {
        push_field(&mut lines, "Telefon", &contact.phone);
        push_field(&mut lines, "Mobil", &contact.mobile);
        push_field(&mut lines, "E-Mail", &contact.email);
        if let Some(web) = present(&contact.web) {
            lines.push(format!("Web: {}", display_web_link(web)));
        }
    }
    if let Some(social) = &point.social {
        for (label, link) in [("Facebook", &social.facebook), ("Instagram", &social.instagram)] {
            if let Some(link) = present(link) {
                let shown = social_handle(link).unwrap_or_else(|| display_web_link(link));
                lines.push(format!("{label}: {shown}"));
            }
        }
    }
    if let Some(hours) = &point.opening_hours {
        push_field(&mut lines, "Sprechzeiten", &hours.text);
        push_field(&mut lines, "Hinweis", &hours.comment);
    }
    if let Some(line) = status_line(status, labels) {
        lines.push(format!("Status: {line}"));
    }
    for download in &point.downloads {
        lines.push(format!(
            "Download: {} {}",
            download_label(download),
            download.url
        ));
    }
    lines.join("\n")
}

fn push_field(lines: &mut Vec<String>, label: &str, value: &Option<String>) {
    if let Some(value) = present(value) {
        lines.push(format!("{label}: {value}"));
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Contact, OpeningHours, Social};
    use opening_status::{ClockTime, DayKey};

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn point() -> ContactPoint {
        ContactPoint {
            name: "Beratungsstelle Werdau".to_string(),
            carrier: Some("Diakonie".to_string()),
            address: Some(Address {
                street: Some("Markt 1".to_string()),
                postal_code: Some("08412".to_string()),
                city: Some("Werdau".to_string()),
            }),
            contact: Some(Contact {
                phone: Some("03761 1234".to_string()),
                mobile: Some(String::new()),
                email: Some("info@example.org".to_string()),
                web: Some("https://www.example.org/werdau".to_string()),
            }),
            opening_hours: Some(OpeningHours {
                text: Some("Mo 09–17 Uhr".to_string()),
                comment: Some("Feiertags geschlossen".to_string()),
                structured: None,
            }),
            social: Some(Social {
                facebook: None,
                instagram: Some("https://www.instagram.com/beratung_werdau/".to_string()),
            }),
            downloads: vec![Download {
                url: "https://example.org/files/Flyer.pdf".to_string(),
                label: None,
            }],
        }
    }

    // ── status_line tests ───────────────────────────────────────────────

    #[test]
    fn test_status_line_open() {
        let status = StatusResult::Open { closes_at: t("17:00") };
        assert_eq!(
            status_line(&status, &DayLabels::default()).unwrap(),
            "Geöffnet · bis 17:00"
        );
    }

    #[test]
    fn test_status_line_closed_uses_label_table() {
        let status = StatusResult::Closed {
            opens_at: t("08:30"),
            opens_on: DayKey::Thu,
        };
        assert_eq!(
            status_line(&status, &DayLabels::GERMAN_LONG).unwrap(),
            "Geschlossen · öffnet am Donnerstag um 08:30"
        );
    }

    #[test]
    fn test_status_line_appointment_and_unknown() {
        let labels = DayLabels::default();
        assert_eq!(
            status_line(&StatusResult::Appointment, &labels).unwrap(),
            "Nach Vereinbarung"
        );
        assert!(status_line(&StatusResult::Unknown, &labels).is_none());
    }

    // ── link tests ──────────────────────────────────────────────────────

    #[test]
    fn test_display_web_link_strips_scheme_and_www() {
        assert_eq!(display_web_link("https://www.example.org/a"), "example.org/a");
        assert_eq!(display_web_link("http://example.org"), "example.org");
        assert_eq!(display_web_link("ftp://www.files.example.org"), "files.example.org");
        assert_eq!(display_web_link("www.example.org"), "example.org");
        assert_eq!(display_web_link("example.org"), "example.org");
    }

    #[test]
    fn test_display_web_link_keeps_inner_www() {
        assert_eq!(display_web_link("https://shop.www.example.org"), "shop.www.example.org");
    }

    #[test]
    fn test_social_handle_from_profile_url() {
        assert_eq!(
            social_handle("https://www.instagram.com/beratung_werdau/").as_deref(),
            Some("@beratung_werdau")
        );
        assert_eq!(
            social_handle("https://facebook.com/BeratungWerdau?ref=bookmarks").as_deref(),
            Some("@BeratungWerdau")
        );
    }

    #[test]
    fn test_social_handle_bare_handles() {
        assert_eq!(social_handle("@werdau").as_deref(), Some("@werdau"));
        assert_eq!(social_handle("werdau").as_deref(), Some("@werdau"));
        assert_eq!(social_handle("@"), None);
    }

    #[test]
    fn test_social_handle_without_usable_segment() {
        assert_eq!(social_handle("https://www.facebook.com/profile.php?id=1234"), None);
        assert_eq!(social_handle("https://www.instagram.com/"), None);
    }

    // ── address and download tests ──────────────────────────────────────

    #[test]
    fn test_address_line_full() {
        assert_eq!(
            address_line(point().address.as_ref().unwrap()).unwrap(),
            "Markt 1, 08412 Werdau"
        );
    }

    #[test]
    fn test_address_line_partial_and_empty() {
        let city_only = Address {
            city: Some("Plauen".to_string()),
            ..Default::default()
        };
        assert_eq!(address_line(&city_only).unwrap(), "Plauen");
        assert!(address_line(&Address::default()).is_none());
    }

    #[test]
    fn test_download_label_fallbacks() {
        let labelled = Download {
            url: "https://example.org/a.pdf".to_string(),
            label: Some("Flyer".to_string()),
        };
        assert_eq!(download_label(&labelled), "Flyer");

        let unlabelled = Download {
            url: "https://example.org/files/Antrag%20A.pdf?v=2".to_string(),
            label: Some(" ".to_string()),
        };
        assert_eq!(download_label(&unlabelled), "Antrag%20A.pdf");

        let bare = Download {
            url: "https://".to_string(),
            label: None,
        };
        assert_eq!(download_label(&bare), "https://");
    }

    // ── copy and card tests ─────────────────────────────────────────────

    #[test]
    fn test_copy_text_order_and_skips() {
        assert_eq!(
            copy_text(&point()),
            "Name: Beratungsstelle Werdau\n\
             Träger: Diakonie\n\
             Adresse: Markt 1, 08412 Werdau\n\
             Telefon: 03761 1234\n\
             E-Mail: info@example.org\n\
             Web: https://www.example.org/werdau\n\
             Sprechzeiten: Mo 09–17 Uhr\n\
             Instagram: https://www.instagram.com/beratung_werdau/"
        );
    }

    #[test]
    fn test_copy_text_name_only() {
        let bare = ContactPoint {
            name: "Nur Name".to_string(),
            carrier: None,
            address: None,
            contact: None,
            opening_hours: None,
            social: None,
            downloads: Vec::new(),
        };
        assert_eq!(copy_text(&bare), "Name: Nur Name");
    }

    #[test]
    fn test_card_text_shortens_links_and_adds_status() {
        let status = StatusResult::Open { closes_at: t("17:00") };
        let card = card_text(&point(), &status, &DayLabels::default());
        assert!(card.starts_with("Beratungsstelle Werdau\n"), "got: {card}");
        assert!(card.contains("Web: example.org/werdau"), "got: {card}");
        assert!(card.contains("Instagram: @beratung_werdau"), "got: {card}");
        assert!(card.contains("Hinweis: Feiertags geschlossen"), "got: {card}");
        assert!(card.contains("Status: Geöffnet · bis 17:00"), "got: {card}");
        assert!(
            card.ends_with("Download: Flyer.pdf https://example.org/files/Flyer.pdf"),
            "got: {card}"
        );
        assert!(!card.contains("Mobil"), "got: {card}");
    }

    #[test]
    fn test_card_text_hides_unknown_status() {
        let card = card_text(&point(), &StatusResult::Unknown, &DayLabels::default());
        assert!(!card.contains("Status:"), "got: {card}");
    }
}
