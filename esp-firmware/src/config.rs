// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// LED-Matrix Konfiguration
// ============================================================================

/// GPIO-Pin für die Datenleitung der WS2812-Matrix (5x5)
pub const MATRIX_GPIO_PIN: u8 = 8;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Render-Periode der Matrix in Millisekunden
///
/// Die Matrix wird in jedem Tick komplett neu gezeichnet, unabhängig
/// davon ob sich der Zustand geändert hat (idempotent).
pub const RENDER_INTERVAL_MS: u64 = 100;

// ============================================================================
// Status-LEDs (diskrete GPIOs)
// ============================================================================
//
// Drei einzelne LEDs auf dem Panel. Sie werden beim Boot auf Low gelegt
// und danach nicht mehr angesteuert.

pub const STATUS_LED_BLUE_PIN: u8 = 4;
pub const STATUS_LED_GREEN_PIN: u8 = 5;
pub const STATUS_LED_RED_PIN: u8 = 6;

// ============================================================================
// WiFi Konfiguration
// ============================================================================

/// WiFi SSID (Netzwerk-Name)
/// Wird zur Build-Zeit aus der Environment Variable WIFI_SSID geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_SSID: &str = env!(
    "WIFI_SSID",
    "WiFi SSID nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// WiFi Passwort
/// Wird zur Build-Zeit aus der Environment Variable WIFI_PASSWORD geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_PASSWORD: &str = env!(
    "WIFI_PASSWORD",
    "WiFi Password nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Heap-Größe für WiFi (Bytes)
/// WiFi benötigt dynamischen Speicher für Pakete
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

// Gesamt-Heap: ~100 KB für WiFi-Stack

// ============================================================================
// HTTP Server Konfiguration
// ============================================================================

/// HTTP Port der Bedienoberfläche
pub const HTTP_PORT: u16 = 80;

/// Scratch-Puffer für eingehende Requests in Bytes
///
/// Fester Stack-Puffer im HTTP-Task; pro Verbindung wird nichts
/// allokiert. Längere Requests werden in mehreren Reads konsumiert,
/// klassifiziert wird jeder Read für sich.
pub const HTTP_REQUEST_BUFFER_SIZE: usize = 1024;

/// TCP RX Buffer-Größe in Bytes
pub const TCP_RX_BUFFER_SIZE: usize = 1024;

/// TCP TX Buffer-Größe in Bytes
/// Muss die komplette Response-Seite aufnehmen können (< 1 KB)
pub const TCP_TX_BUFFER_SIZE: usize = 1024;

/// Idle-Timeout der einen aktiven Verbindung in Sekunden
///
/// Es wird genau eine Verbindung gleichzeitig bedient; ohne Timeout
/// könnte ein hängender Client den Server-Slot dauerhaft belegen.
pub const HTTP_IDLE_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// mDNS-Konfiguration
// ============================================================================

/// mDNS Hostname (ohne .local suffix)
/// Das Panel wird erreichbar sein unter: <MDNS_HOSTNAME>.local
pub const MDNS_HOSTNAME: &str = "raumlicht";

/// mDNS TTL (Time To Live) in Sekunden
pub const MDNS_TTL_SECS: u32 = 120;

/// mDNS Reconnect Delay in Sekunden
pub const MDNS_RECONNECT_DELAY_SECS: u64 = 5;

/// mDNS Port laut RFC 6762
pub const MDNS_PORT: u16 = 5353;

/// mDNS IPv4 Multicast-Adresse (224.0.0.251) laut RFC 6762
pub const MDNS_MULTICAST_ADDR: [u8; 4] = [224, 0, 0, 251];

/// UDP Buffer-Größen für mDNS (TX, RX in Bytes)
pub const MDNS_UDP_BUFFER_SIZE: usize = 512;

/// mDNS Receive/Send Buffer-Größen in Bytes
/// 1500 Bytes = Standard MTU für Ethernet/WiFi
pub const MDNS_PACKET_BUFFER_SIZE: usize = 1500;
