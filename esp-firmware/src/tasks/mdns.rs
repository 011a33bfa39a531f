// mDNS Responder Task - macht das Panel als <MDNS_HOSTNAME>.local erreichbar
//
// A-Record Responder nach RFC 6762 (UDP Multicast auf 224.0.0.251:5353),
// implementiert mit edge-mdns über den edge-nal-embassy Adapter.

use core::net::{Ipv4Addr, SocketAddr};
use core::sync::atomic::{AtomicU32, Ordering};

use defmt::{Debug2Format, error, info, warn};
use edge_mdns::{HostAnswersMdnsHandler, buf::VecBufAccess, domain::base::Ttl, host::Host, io};
use edge_nal::{MulticastV4, UdpBind, UdpSplit};
use edge_nal_embassy::{Udp, UdpBuffers};
use embassy_net::Stack;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Timer};

use crate::config::{
    MDNS_HOSTNAME, MDNS_MULTICAST_ADDR, MDNS_PACKET_BUFFER_SIZE, MDNS_PORT,
    MDNS_RECONNECT_DELAY_SECS, MDNS_TTL_SECS, MDNS_UDP_BUFFER_SIZE,
};

/// Zähler-basierter Pseudo-Zufall für mDNS Transaction-IDs
///
/// Eindeutigkeit genügt, kryptographische Qualität braucht mDNS nicht.
static RNG_COUNTER: AtomicU32 = AtomicU32::new(0);

fn mdns_rng(buf: &mut [u8]) {
    let mut counter = RNG_COUNTER.fetch_add(1, Ordering::Relaxed);
    for chunk in buf.chunks_mut(4) {
        let bytes = counter.to_le_bytes();
        let len = chunk.len().min(4);
        chunk[..len].copy_from_slice(&bytes[..len]);
        counter = counter.wrapping_add(1);
    }
}

/// mDNS Responder Task
///
/// Wartet auf Netzwerk, advertised dann den Hostnamen aus config.rs und
/// startet sich nach jedem Fehler mit Wartezeit neu.
#[embassy_executor::task]
pub async fn mdns_responder_task(stack: &'static Stack<'static>) {
    info!("mDNS: Task started, waiting for network...");
    wait_for_network(stack).await;
    info!("mDNS: Network ready");

    loop {
        match run_mdns_responder(stack).await {
            Ok(_) => warn!("mDNS: Responder stopped normally"),
            Err(e) => error!("mDNS: Error: {}", e),
        }
        info!("mDNS: Reconnecting in {}s...", MDNS_RECONNECT_DELAY_SECS);
        Timer::after(Duration::from_secs(MDNS_RECONNECT_DELAY_SECS)).await;
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

/// Führt den mDNS Responder Loop aus
///
/// Bindet einen UDP-Socket auf 0.0.0.0:5353, joined die Multicast-Gruppe
/// und beantwortet Queries mit einem A-Record (Hostname → IP). Läuft bis
/// ein Fehler auftritt.
async fn run_mdns_responder(stack: &'static Stack<'static>) -> Result<(), MdnsError> {
    // IP-Adresse vom DHCP holen (wait_for_network garantiert config_v4)
    let our_ip = stack.config_v4().unwrap().address.address();
    info!("mDNS: Using IP {}", Debug2Format(&our_ip));

    // UDP Adapter erstellen (edge-nal-embassy → embassy-net)
    // StaticCell wird nur einmal initialisiert; init_with verhindert den
    // Panic bei wiederholter Initialisierung im Reconnect-Loop
    static UDP_BUFFERS: static_cell::StaticCell<
        UdpBuffers<1, MDNS_UDP_BUFFER_SIZE, MDNS_UDP_BUFFER_SIZE>,
    > = static_cell::StaticCell::new();
    let udp_buffers = UDP_BUFFERS.init_with(UdpBuffers::new);
    let udp_stack = Udp::new(*stack, udp_buffers);

    let mut socket = udp_stack
        .bind(SocketAddr::new(Ipv4Addr::UNSPECIFIED.into(), MDNS_PORT))
        .await
        .map_err(|_| MdnsError::SocketBindFailed)?;

    socket
        .join_v4(Ipv4Addr::from(MDNS_MULTICAST_ADDR), Ipv4Addr::UNSPECIFIED)
        .await
        .map_err(|_| MdnsError::MulticastJoinFailed)?;

    // Socket in RX/TX splitten für edge-mdns API
    let (recv, send) = socket.split();

    let host = Host {
        hostname: MDNS_HOSTNAME,
        ipv4: our_ip.into(),
        ipv6: [0u8; 16].into(), // IPv6 nicht unterstützt (kein proto-ipv6 in smoltcp)
        ttl: Ttl::from_secs(MDNS_TTL_SECS),
    };

    // Packet-Buffers auf dem Stack, Standard-MTU
    let recv_buf = VecBufAccess::<NoopRawMutex, MDNS_PACKET_BUFFER_SIZE>::new();
    let send_buf = VecBufAccess::<NoopRawMutex, MDNS_PACKET_BUFFER_SIZE>::new();

    // Signal für Broadcast-Notifications (nicht verwendet, aber von API benötigt)
    let signal = Signal::<NoopRawMutex, ()>::new();

    let mdns = io::Mdns::new(
        Some(our_ip),
        None, // Kein IPv6
        recv,
        send,
        recv_buf,
        send_buf,
        mdns_rng,
        &signal,
    );

    info!(
        "mDNS: Responder running, advertising '{}.local'",
        MDNS_HOSTNAME
    );

    mdns.run(HostAnswersMdnsHandler::new(&host))
        .await
        .map_err(|_| MdnsError::ResponderFailed)?;

    Ok(())
}

/// mDNS Fehler-Typen
///
/// Jeder Fehler führt zu einem Neustart des Responders im Haupt-Loop.
#[derive(Debug)]
enum MdnsError {
    SocketBindFailed,
    MulticastJoinFailed,
    ResponderFailed,
}

impl defmt::Format for MdnsError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            MdnsError::SocketBindFailed => defmt::write!(fmt, "Socket bind failed"),
            MdnsError::MulticastJoinFailed => defmt::write!(fmt, "Multicast join failed"),
            MdnsError::ResponderFailed => defmt::write!(fmt, "Responder failed"),
        }
    }
}
