// Diskrete Status-LEDs des Panels
//
// Drei einzelne GPIOs (blau, grün, rot). Sie werden beim Boot auf Low
// initialisiert und danach nicht mehr angesteuert - das Struct hält die
// Pins nur am Leben, damit sie Ausgänge bleiben.

use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::peripherals::{GPIO4, GPIO5, GPIO6};

/// Hält die drei Status-LED-Ausgänge für die Prozess-Lebensdauer
pub struct StatusLeds<'a> {
    _blue: Output<'a>,
    _green: Output<'a>,
    _red: Output<'a>,
}

impl<'a> StatusLeds<'a> {
    /// Initialisiert alle drei LEDs als Ausgang, Start-Zustand aus
    pub fn new(blue: GPIO4<'a>, green: GPIO5<'a>, red: GPIO6<'a>) -> Self {
        Self {
            _blue: Output::new(blue, Level::Low, OutputConfig::default()),
            _green: Output::new(green, Level::Low, OutputConfig::default()),
            _red: Output::new(red, Level::Low, OutputConfig::default()),
        }
    }
}
