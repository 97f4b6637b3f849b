//! Window title formatting.

use strum_macros::Display;

/// The graphics API backing the display surface, as reported in titles.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum GraphicsApi {
    Vulkan,
    #[strum(serialize = "OpenGL")]
    OpenGl,
    Software,
}

/// Substitutes `<GameName>`, `<API>` and `<FPS>` tokens in a title format
/// string. Unrecognized tokens (and stray `<`) are copied verbatim.
///
/// Single pass over the input, so substituted values are never re-scanned.
pub fn format_title(format: &str, name: &str, api: GraphicsApi, fps: u32) -> String {
    let mut out = String::with_capacity(format.len() + name.len());
    let mut rest = format;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];

        match tail.find('>') {
            Some(close) => {
                let token = &tail[..=close];
                match token {
                    "<GameName>" => out.push_str(name),
                    "<API>" => out.push_str(&api.to_string()),
                    "<FPS>" => out.push_str(&fps.to_string()),
                    unknown => out.push_str(unknown),
                }
                rest = &tail[close + 1..];
            }
            None => {
                // Unterminated token; emit the remainder as-is.
                out.push_str(tail);
                return out;
            }
        }
    }

    out.push_str(rest);
    out
}
