//! HTML Response Generator
//!
//! Erzeugt die komplette HTTP-Response (Status-Line, Header, Seite) als
//! reine Funktion des Raum-Zustands. Identischer Zustand ergibt eine
//! byte-identische Response. Es wird keinerlei externer Input in die
//! Seite interpoliert.

use core::fmt::{self, Write};

use crate::types::{Room, RoomState};

/// Obergrenze für die komplette Response in Bytes
///
/// Das feste Template liegt deutlich darunter; die Grenze existiert,
/// damit der Generator niemals über einen Puffer hinausschreiben kann.
pub const PAGE_BUFFER_SIZE: usize = 1024;

/// Gebundener Response-Puffer
pub type PageBuffer = heapless::String<PAGE_BUFFER_SIZE>;

// Status-Line, Header und statischer Seitenkopf in einem Stück
const PAGE_PROLOGUE: &str = "HTTP/1.1 200 OK\r\n\
    Content-Type: text/html\r\n\
    \r\n\
    <!DOCTYPE html><html><head><title>Controle de Iluminacao</title><style>\
    body{background-color:#004f5b;font-family:Arial,sans-serif;text-align:center;margin-top:50px;}\
    h1{font-size:64px;margin-bottom:30px;color:white;}\
    button{background-color:LightGray;font-size:20px;margin:10px;padding:20px 40px;border-radius:10px;width:400px;color:#0b0050;box-shadow:5px 5px 10px black;border:none;}\
    button:hover{background-color:#008CBA;color:white;cursor:pointer;box-shadow:5px 5px 10px white;}.s{background-color:#7affa7;}\
    </style></head><body>\
    <h1>Controle de Iluminacao</h1>";

const PAGE_EPILOGUE: &str = "</body></html>";

/// Schreibt die komplette Response in einen beliebigen Writer
///
/// Läuft der Writer voll, bleibt ein abgeschnittener Präfix stehen und
/// es kommt `fmt::Error` zurück - es wird nie über die Kapazität des
/// Ziels hinausgeschrieben.
pub fn write_page<W: Write>(state: &RoomState, out: &mut W) -> fmt::Result {
    out.write_str(PAGE_PROLOGUE)?;
    for room in Room::ALL {
        let on = state.is_on(room);
        write!(
            out,
            "<form action=\".{path}\"><button class=\"{class}\">{action} {name}</button></form>",
            path = room.toggle_path(),
            class = if on { "s" } else { "n" },
            action = if on { "Desligar" } else { "Ligar" },
            name = room.display_name(),
        )?;
    }
    out.write_str(PAGE_EPILOGUE)
}

/// Rendert die Response in einen gebundenen Puffer
///
/// Schneidet bei vollem Puffer ab (snprintf-Semantik). Das feste
/// Template passt immer, siehe Test in esp-tests.
pub fn render_page(state: &RoomState) -> PageBuffer {
    let mut page = PageBuffer::new();
    let _ = write_page(state, &mut page);
    page
}
