//! LED-Matrix Renderer
//!
//! Berechnet aus dem Raum-Zustand das komplette 5x5-Frame.
//! Pure Functions ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::types::RoomState;

/// Anzahl LEDs der Matrix (5x5)
pub const MATRIX_PIXELS: usize = 25;

/// Ein komplettes Matrix-Frame in fester Index-Reihenfolge 0..24
///
/// Der Index definiert die physische Position in der LED-Kette.
pub type Frame = [RGB8; MATRIX_PIXELS];

/// Matrix-Indizes der Sala (Ecke oben rechts)
pub const SALA_REGION: [usize; 4] = [24, 23, 16, 15];
/// Matrix-Indizes des Quarto 1 (Mitte rechts)
pub const QUARTO1_REGION: [usize; 4] = [18, 19, 20, 21];
/// Matrix-Indizes der Cozinha (Ecke unten links)
pub const COZINHA_REGION: [usize; 4] = [3, 4, 5, 6];
/// Matrix-Indizes des Quarto 2 (Ecke oben links)
pub const QUARTO2_REGION: [usize; 4] = [0, 1, 8, 9];

// Gedimmte Helligkeiten - die Matrix wird aus nächster Nähe betrachtet
const ROOM_LIT: RGB8 = RGB8 { r: 5, g: 5, b: 5 };
const CROSS_RED: RGB8 = RGB8 { r: 10, g: 0, b: 0 };
const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Statisches Kreuz-Muster: mittlere Spalte und mittlere Zeile
///
/// Disjunkt zu allen Raum-Regionen, daher braucht die Farbwahl keinen
/// weiteren Tie-Break über die Auswertungsreihenfolge hinaus.
fn in_cross(index: usize) -> bool {
    index % 5 == 2 || (10..=14).contains(&index)
}

/// Farbe eines einzelnen Matrix-Pixels
///
/// Auswertung in fester Präzedenz, der erste Treffer gewinnt:
/// Sala → Quarto 1 → Cozinha → Quarto 2 → Kreuz → aus.
pub fn pixel_color(state: &RoomState, index: usize) -> RGB8 {
    if state.sala && SALA_REGION.contains(&index) {
        return ROOM_LIT;
    }
    if state.quarto1 && QUARTO1_REGION.contains(&index) {
        return ROOM_LIT;
    }
    if state.cozinha && COZINHA_REGION.contains(&index) {
        return ROOM_LIT;
    }
    if state.quarto2 && QUARTO2_REGION.contains(&index) {
        return ROOM_LIT;
    }
    if in_cross(index) { CROSS_RED } else { OFF }
}

/// Berechnet das komplette Frame für den aktuellen Zustand
///
/// Wird bei jedem Render-Tick neu berechnet - die Matrix selbst hält
/// keinen Zustand.
pub fn render_frame(state: &RoomState) -> Frame {
    core::array::from_fn(|index| pixel_color(state, index))
}

/// Packt eine Farbe in das 24-Bit GRB-Wire-Format der WS2812-Kette
///
/// Die Hardware schiebt das Wort vor der Übertragung um weitere 8 Bit
/// nach links (MSB-first Ausgabe).
pub fn packed_grb(color: RGB8) -> u32 {
    ((color.g as u32) << 16) | ((color.r as u32) << 8) | (color.b as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_pattern_shape() {
        // Mittlere Spalte {2,7,12,17,22} + mittlere Zeile {10..14}, 12 doppelt
        let count = (0..MATRIX_PIXELS).filter(|&i| in_cross(i)).count();
        assert_eq!(count, 9);
        assert!(in_cross(2));
        assert!(in_cross(12));
        assert!(in_cross(14));
        assert!(!in_cross(0));
        assert!(!in_cross(24));
    }

    #[test]
    fn test_regions_disjoint_from_cross() {
        for region in [SALA_REGION, QUARTO1_REGION, COZINHA_REGION, QUARTO2_REGION] {
            for index in region {
                assert!(!in_cross(index));
            }
        }
    }

    #[test]
    fn test_packed_grb_wire_order() {
        let color = RGB8 {
            r: 0x12,
            g: 0x34,
            b: 0x56,
        };
        assert_eq!(packed_grb(color), 0x0034_1256);
        assert_eq!(packed_grb(CROSS_RED), 0x0000_0A00);
    }
}
