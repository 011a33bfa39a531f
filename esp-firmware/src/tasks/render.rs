// Matrix Render Task - zeichnet den Raum-Zustand auf die 5x5-Matrix
use defmt::error;
use embassy_time::{Duration, Ticker};
use esp_hal_smartled::smart_led_buffer;

use crate::config::{RENDER_INTERVAL_MS, RMT_CLOCK_MHZ};
use crate::hal::RmtMatrixWriter;
use crate::{MatrixWriter, SharedRoomState, render_frame, room_snapshot};

/// Render Logic - Testbare Schleife ohne Hardware-Abhängigkeit
///
/// Fester Takt (RENDER_INTERVAL_MS): Zustand lesen, komplettes Frame
/// berechnen, rausstreamen. Gezeichnet wird in jedem Tick, auch ohne
/// Zustandsänderung - das Frame ist eine reine Funktion des Zustands
/// und das erneute Schreiben ist idempotent.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `M: MatrixWriter` ermöglicht:
/// - Real Hardware (RmtMatrixWriter) im Production-Code
/// - Mock Implementation (MockMatrixWriter) in Host-Tests
pub async fn render_logic<M: MatrixWriter>(mut matrix: M, state: &'static SharedRoomState) {
    let mut tick = Ticker::every(Duration::from_millis(RENDER_INTERVAL_MS));

    loop {
        let rooms = room_snapshot(state);
        let frame = render_frame(&rooms);

        // Frame an die Matrix senden (via Trait - Hardware oder Mock)
        if matrix.write_frame(&frame).is_err() {
            error!("Matrix: Failed to write frame");
        }

        tick.next().await;
    }
}

/// Matrix Render Task - Embassy Task für parallele Ausführung
///
/// Übernimmt die Hardware-Initialisierung und ruft dann die testbare
/// `render_logic()` Funktion auf.
#[embassy_executor::task]
pub async fn matrix_render_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    state: &'static SharedRoomState,
) {
    // Buffer für SmartLED Daten erstellen (25 LEDs)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(25);

    // Hardware initialisieren: RmtMatrixWriter kapselt RMT + SmartLED
    let matrix = RmtMatrixWriter::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer);

    render_logic(matrix, state).await;
}
