//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::matrix::Frame;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    WriteFailed,
}

/// Trait für den Zugriff auf die WS2812-Matrix
///
/// Ein `write_frame` streamt alle 25 Pixel in Index-Reihenfolge 0..24
/// in die LED-Kette - die Reihenfolge definiert die physische Position.
///
/// # Implementierungen
/// - **Production:** RmtMatrixWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockMatrixWriter (in-memory Mock)
pub trait MatrixWriter: Send {
    /// Schreibt ein komplettes Frame auf die Matrix
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write_frame(&mut self, frame: &Frame) -> Result<(), LedError>;
}
