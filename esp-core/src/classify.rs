//! HTTP Request Classifier
//!
//! Ordnet einem rohen Request höchstens einen Raum-Toggle zu.

use crate::types::Room;

/// Toggle-Markierungen in Prioritätsreihenfolge
///
/// Der erste Treffer gewinnt. Geprüft wird reines Substring-Containment
/// über die rohen Request-Bytes - absichtlich permissiv: die Markierung
/// darf irgendwo im Request stehen, nicht nur in der Request-Line.
const TOGGLE_MARKERS: [(&[u8], Room); 4] = [
    (b"GET /sala_on", Room::Sala),
    (b"GET /quarto1_on", Room::Quarto1),
    (b"GET /cozinha_on", Room::Cozinha),
    (b"GET /quarto2_on", Room::Quarto2),
];

/// Klassifiziert einen rohen HTTP-Request
///
/// Liefert den zu kippenden Raum oder `None`. Ein Request ohne Treffer
/// ist kein Fehler - der Zustand bleibt einfach unverändert.
///
/// # Beispiele
///
/// ```
/// # use esp_core::{classify_request, Room};
/// let request = b"GET /sala_on HTTP/1.1\r\n\r\n";
/// assert_eq!(classify_request(request), Some(Room::Sala));
/// assert_eq!(classify_request(b"GET / HTTP/1.1\r\n\r\n"), None);
/// ```
pub fn classify_request(request: &[u8]) -> Option<Room> {
    for (marker, room) in TOGGLE_MARKERS {
        if contains(request, marker) {
            return Some(room);
        }
    }
    None
}

/// Byte-Substring-Suche (strstr-Äquivalent)
fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_all_markers() {
        assert_eq!(classify_request(b"GET /sala_on"), Some(Room::Sala));
        assert_eq!(classify_request(b"GET /quarto1_on"), Some(Room::Quarto1));
        assert_eq!(classify_request(b"GET /cozinha_on"), Some(Room::Cozinha));
        assert_eq!(classify_request(b"GET /quarto2_on"), Some(Room::Quarto2));
    }

    #[test]
    fn test_classify_no_match() {
        assert_eq!(classify_request(b"GET / HTTP/1.1\r\n\r\n"), None);
        assert_eq!(classify_request(b"GET /sala HTTP/1.1\r\n\r\n"), None);
        assert_eq!(classify_request(b""), None);
    }

    #[test]
    fn test_contains_needle_longer_than_haystack() {
        assert!(!contains(b"GET", b"GET /sala_on"));
    }
}
