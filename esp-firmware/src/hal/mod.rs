// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter Traits,
// um Testbarkeit und Wartbarkeit zu verbessern.

pub mod matrix_writer;
pub mod status_leds;

pub use matrix_writer::{MATRIX_RMT_BUFFER_SIZE, RmtMatrixWriter};
pub use status_leds::StatusLeds;
