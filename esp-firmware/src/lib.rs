// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{
    Frame, LedError, MATRIX_PIXELS, MatrixWriter, PageBuffer, Room, RoomState, classify_request,
    render_frame, render_page,
};

use core::cell::Cell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

// ============================================================================
// Geteilter Raum-Zustand
// ============================================================================
//
// Die vier Raum-Flags liegen explizit in einer Zelle hinter einem blocking
// Mutex: der HTTP-Task schreibt, der Render-Task liest. Beide laufen auf
// demselben Executor, der CriticalSection-Mutex macht den Zugriff auch
// gegenüber Interrupts sicher.

/// Geteilter Raum-Zustand (HTTP-Task schreibt, Render-Task liest)
pub type SharedRoomState = Mutex<CriticalSectionRawMutex, Cell<RoomState>>;

/// Erstellt den geteilten Start-Zustand (alle Lichter aus)
pub const fn shared_room_state() -> SharedRoomState {
    Mutex::new(Cell::new(RoomState::new()))
}

/// Kippt genau einen Raum und liefert den neuen Gesamt-Zustand
///
/// Die Mutation ist sofort für den nächsten Seiten- und Matrix-Render
/// sichtbar.
pub fn toggle_room(state: &SharedRoomState, room: Room) -> RoomState {
    state.lock(|cell| {
        let mut rooms = cell.get();
        rooms.toggle(room);
        cell.set(rooms);
        rooms
    })
}

/// Liest einen konsistenten Schnappschuss des Zustands
pub fn room_snapshot(state: &SharedRoomState) -> RoomState {
    state.lock(Cell::get)
}
