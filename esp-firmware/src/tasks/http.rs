// HTTP Server Task - bedient die Bedienoberfläche auf Port 80
use defmt::{Debug2Format, error, info, warn};
use embassy_net::Stack;
use embassy_net::tcp::TcpSocket;
use embassy_time::{Duration, Timer};
use embedded_io_async::Write;

use crate::config::{
    HTTP_IDLE_TIMEOUT_SECS, HTTP_PORT, HTTP_REQUEST_BUFFER_SIZE, TCP_RX_BUFFER_SIZE,
    TCP_TX_BUFFER_SIZE,
};
use crate::{SharedRoomState, classify_request, render_page, room_snapshot, toggle_room};

/// HTTP Server Task - eine Verbindung zur Zeit
///
/// Bewusst KEIN Task-Pool: das Panel bedient genau einen Client
/// gleichzeitig. Pro Verbindung:
/// - Request-Bytes lesen und klassifizieren (Substring-Match)
/// - bei Treffer genau einen Raum kippen
/// - immer die komplette Seite mit dem aktuellen Zustand antworten
/// - weiterlesen bis der Client die Verbindung schließt (EOF)
///
/// Alle Puffer sind feste Stack-Arrays des Tasks; pro Request wird
/// nichts allokiert.
#[embassy_executor::task]
pub async fn http_server_task(stack: &'static Stack<'static>, state: &'static SharedRoomState) {
    info!("HTTP: Task started, waiting for network...");
    wait_for_network(stack).await;
    info!("HTTP: Listening on port {}", HTTP_PORT);

    let mut rx_buffer = [0u8; TCP_RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TCP_TX_BUFFER_SIZE];
    let mut request_buf = [0u8; HTTP_REQUEST_BUFFER_SIZE];

    loop {
        let mut socket = TcpSocket::new(*stack, &mut rx_buffer, &mut tx_buffer);
        // Ein hängender Client darf den einen Server-Slot nicht dauerhaft belegen
        socket.set_timeout(Some(Duration::from_secs(HTTP_IDLE_TIMEOUT_SECS)));

        if let Err(e) = socket.accept(HTTP_PORT).await {
            warn!("HTTP: Accept failed: {}", Debug2Format(&e));
            Timer::after(Duration::from_millis(500)).await;
            continue;
        }
        info!(
            "HTTP: Client connected: {}",
            Debug2Format(&socket.remote_endpoint())
        );

        match serve_connection(&mut socket, state, &mut request_buf).await {
            Ok(()) => {
                info!("HTTP: Connection closed by client");
                let _ = socket.flush().await;
                socket.close();
            }
            Err(e) => {
                error!("HTTP: {}", e);
                socket.abort();
            }
        }
    }
}

/// Bedient eine angenommene Verbindung bis zum EOF
///
/// Jeder Read wird für sich klassifiziert und beantwortet; liefert der
/// Client 0 Bytes, ist die Gegenseite fertig und die Verbindung wird
/// geschlossen.
async fn serve_connection(
    socket: &mut TcpSocket<'_>,
    state: &'static SharedRoomState,
    request_buf: &mut [u8],
) -> Result<(), HttpError> {
    loop {
        let len = match socket.read(request_buf).await {
            Ok(0) => return Ok(()),
            Ok(len) => len,
            Err(_) => return Err(HttpError::ReadFailed),
        };

        let request = &request_buf[..len];
        info!(
            "HTTP: Request: {}",
            core::str::from_utf8(request).unwrap_or("<non-UTF8>")
        );

        // Liga/desliga genau einen Raum - ein Request ohne Treffer ist
        // kein Fehler, die Seite zeigt dann den unveränderten Zustand
        if let Some(room) = classify_request(request) {
            let rooms = toggle_room(state, room);
            info!("HTTP: Toggled {}, now on={}", room, rooms.is_on(room));
        }

        let page = render_page(&room_snapshot(state));
        socket
            .write_all(page.as_bytes())
            .await
            .map_err(|_| HttpError::WriteFailed)?;
        socket.flush().await.map_err(|_| HttpError::WriteFailed)?;
    }
}

/// Wartet bis Netzwerk-Verbindung verfügbar ist
///
/// Prüft kontinuierlich Link-Status und DHCP-Konfiguration.
async fn wait_for_network(stack: &'static Stack<'static>) {
    loop {
        if stack.is_link_up() && stack.config_v4().is_some() {
            break;
        }
        Timer::after(Duration::from_millis(500)).await;
    }
}

/// HTTP Fehler-Typen
///
/// Jeder Fehler beendet nur die aktuelle Verbindung; der Accept-Loop
/// läuft weiter.
#[derive(Debug)]
enum HttpError {
    ReadFailed,
    WriteFailed,
}

impl defmt::Format for HttpError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            HttpError::ReadFailed => defmt::write!(fmt, "Read failed"),
            HttpError::WriteFailed => defmt::write!(fmt, "Write failed"),
        }
    }
}
