/// Format remaining seconds as `"MM min SS sec"`.
///
/// Minutes wrap at 60, so a full hour (3600) renders as `"00 min 00 sec"`.
pub fn format_countdown(total_seconds: u32) -> String {
    let seconds = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;
    format!("{:02} min {:02} sec", minutes, seconds)
}

/// Countdown line as shown on a claim card.
pub fn countdown_caption(total_seconds: u32) -> String {
    format!("Next claim in: {}", format_countdown(total_seconds))
}

pub fn points_caption(points: u32) -> String {
    format!("{} Points", points)
}
