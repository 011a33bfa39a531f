// Matrix Writer - streamt Frames über das RMT Peripheral in die WS2812-Kette

use esp_core::{Frame, LedError, MATRIX_PIXELS, MatrixWriter};
use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use smart_leds_trait::SmartLedsWrite;

// Buffer-Größe für 25 LEDs (25 * 3 Farben * 8 Bits + 1 Reset)
pub const MATRIX_RMT_BUFFER_SIZE: usize = MATRIX_PIXELS * 24 + 1;

/// Real Hardware Matrix Writer
///
/// Nutzt das ESP32 RMT Peripheral um die WS2812-Matrix anzusteuern.
/// Ein `write_frame` schiebt alle 25 Pixel in Index-Reihenfolge raus.
///
/// Hinweis: Der Buffer muss den Task überleben, daher wird er im Task
/// erstellt und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtMatrixWriter<'a> {
    led: SmartLedsAdapter<'a, MATRIX_RMT_BUFFER_SIZE>,
}

impl<'a> RmtMatrixWriter<'a> {
    /// Erstellt einen neuen RmtMatrixWriter
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für die Matrix-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(25))
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [esp_hal::rmt::PulseCode; MATRIX_RMT_BUFFER_SIZE],
    ) -> Self {
        // RMT initialisieren
        let rmt: Rmt<'a, Blocking> =
            Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz)).unwrap();

        // SmartLED Adapter erstellen
        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Self { led }
    }
}

impl<'a> MatrixWriter for RmtMatrixWriter<'a> {
    fn write_frame(&mut self, frame: &Frame) -> Result<(), LedError> {
        self.led
            .write(frame.iter().copied())
            .map_err(|_| LedError::WriteFailed)
    }
}
