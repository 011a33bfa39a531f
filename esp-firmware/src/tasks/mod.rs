// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig. Der geteilte Raum-Zustand
// (HTTP schreibt, Render liest) ist die einzige Kopplung.

pub mod http;
pub mod mdns;
pub mod render;
pub mod wifi;

// Re-export Tasks für einfachen Import
pub use http::http_server_task;
pub use mdns::mdns_responder_task;
pub use render::matrix_render_task;
pub use wifi::{connection_task, dhcp_task, net_task};
