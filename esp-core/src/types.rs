//! Core Types für das Licht-Panel
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Einer der vier schaltbaren Räume
///
/// Jeder Raum kennt seinen Toggle-Pfad auf der HTTP-Oberfläche und
/// seinen Anzeigenamen auf der Bedienseite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Room {
    Sala,
    Quarto1,
    Cozinha,
    Quarto2,
}

impl Room {
    /// Alle Räume in fester Reihenfolge
    ///
    /// Die Reihenfolge ist verbindlich: sie bestimmt die Priorität der
    /// Request-Klassifizierung und die Button-Reihenfolge auf der Seite.
    pub const ALL: [Room; 4] = [Room::Sala, Room::Quarto1, Room::Cozinha, Room::Quarto2];

    /// Kurzname für Logging
    pub fn key(self) -> &'static str {
        match self {
            Room::Sala => "sala",
            Room::Quarto1 => "quarto1",
            Room::Cozinha => "cozinha",
            Room::Quarto2 => "quarto2",
        }
    }

    /// Toggle-Pfad auf der HTTP-Oberfläche
    pub fn toggle_path(self) -> &'static str {
        match self {
            Room::Sala => "/sala_on",
            Room::Quarto1 => "/quarto1_on",
            Room::Cozinha => "/cozinha_on",
            Room::Quarto2 => "/quarto2_on",
        }
    }

    /// Anzeigename auf der Bedienseite
    pub fn display_name(self) -> &'static str {
        match self {
            Room::Sala => "Luz da Sala",
            Room::Quarto1 => "Luz do Quarto 1",
            Room::Cozinha => "Luz da Cozinha",
            Room::Quarto2 => "Luz do Quarto 2",
        }
    }
}

/// Zustand aller vier Raum-Lichter
///
/// Vier unabhängige Booleans. Start-Zustand: alles aus. Die einzige
/// Mutation ist `toggle` - der Zustand lebt für die gesamte Laufzeit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoomState {
    pub sala: bool,
    pub quarto1: bool,
    pub cozinha: bool,
    pub quarto2: bool,
}

impl RoomState {
    /// Erstellt den Start-Zustand (alle Lichter aus)
    pub const fn new() -> Self {
        Self {
            sala: false,
            quarto1: false,
            cozinha: false,
            quarto2: false,
        }
    }

    /// Liest den Zustand eines Raums
    pub fn is_on(&self, room: Room) -> bool {
        match room {
            Room::Sala => self.sala,
            Room::Quarto1 => self.quarto1,
            Room::Cozinha => self.cozinha,
            Room::Quarto2 => self.quarto2,
        }
    }

    /// Kippt den Zustand genau eines Raums, die anderen bleiben unberührt
    pub fn toggle(&mut self, room: Room) {
        match room {
            Room::Sala => self.sala = !self.sala,
            Room::Quarto1 => self.quarto1 = !self.quarto1,
            Room::Cozinha => self.cozinha = !self.cozinha,
            Room::Quarto2 => self.quarto2 = !self.quarto2,
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Room {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.key())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RoomState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "RoomState {{ sala: {}, quarto1: {}, cozinha: {}, quarto2: {} }}",
            self.sala,
            self.quarto1,
            self.cozinha,
            self.quarto2
        )
    }
}
