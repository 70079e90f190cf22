//! Local booking tool for the show agent.

/// Reserve tickets for a show and return a confirmation line.
///
/// Stands in for a real booking backend; the confirmation text is the
/// contract the show agent's instruction relies on.
pub fn reserve_show(show_name: &str, count: u32) -> String {
    tracing::info!("reserving {count} tickets for '{show_name}'");
    format!("Reservation confirmed: {count} tickets for '{show_name}'.")
}
