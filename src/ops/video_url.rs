//! Mapping between video ids and the URL forms a user pastes in.

/// Canonical watch URL for a video id.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

fn is_video_id(s: &str) -> bool {
    s.len() == 11
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Extract the video id from a pasted URL, or accept a bare id.
///
/// Handles `watch?v=`, `youtu.be/` and `/embed/` forms; anything else
/// returns `None` and the caller keeps the previous video.
pub fn parse_video_id(input: &str) -> Option<String> {
    let input = input.trim();
    if is_video_id(input) {
        return Some(input.to_string());
    }

    let candidate = if let Some(rest) = input.split_once("watch?v=").map(|(_, r)| r) {
        rest
    } else if let Some(rest) = input.split_once("youtu.be/").map(|(_, r)| r) {
        rest
    } else if let Some(rest) = input.split_once("/embed/").map(|(_, r)| r) {
        rest
    } else {
        return None;
    };

    let id: String = candidate
        .chars()
        .take_while(|&c| c != '&' && c != '?' && c != '/')
        .collect();
    if is_video_id(&id) { Some(id) } else { None }
}
