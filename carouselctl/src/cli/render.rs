use std::io::Write;

use carousel_config::AnimationConfig;
use carousel_core::model::SlideSet;
use carousel_core::{SlideRenderer, Snapshot, WindowEntry};
use serde::Serialize;

/// What a renderer would be handed for one snapshot, flattened for printing.
#[derive(Debug, Serialize)]
pub struct Frame<'a> {
    #[serde(flatten)]
    pub snapshot: &'a Snapshot,
    pub keys: Vec<&'a str>,
    pub show_navigation: bool,
    pub animation: AnimationConfig,
}

/// Prints every snapshot to stdout, as text or JSON lines.
#[derive(Debug, Clone, Copy)]
pub struct StdoutRenderer {
    pub json: bool,
    pub show_navigation: bool,
    pub animation: AnimationConfig,
}

impl<T> SlideRenderer<T> for StdoutRenderer {
    fn render(&mut self, slides: &SlideSet<T>, snapshot: &Snapshot) {
        let line = if self.json {
            let frame = Frame {
                snapshot,
                keys: snapshot.keys(slides).into_iter().map(|k| k.as_str()).collect(),
                show_navigation: self.show_navigation,
                animation: self.animation,
            };
            match serde_json::to_string(&frame) {
                Ok(line) => line,
                Err(err) => {
                    tracing::warn!("failed to encode snapshot: {err}");
                    return;
                }
            }
        } else {
            describe(slides, snapshot)
        };

        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{line}");
    }
}

/// `current=2 window=[0 1 (2) 3 4] keys=[a b (c) d e]`, with ` -> 4` appended
/// while a go-to is in flight.
pub fn describe<T>(slides: &SlideSet<T>, snapshot: &Snapshot) -> String {
    let mark = |entry: &WindowEntry, text: String| {
        if entry.display_offset == 0 {
            format!("({text})")
        } else {
            text
        }
    };

    let indices: Vec<String> = snapshot
        .window
        .iter()
        .map(|entry| mark(entry, entry.slide_index.to_string()))
        .collect();
    let keys: Vec<String> = snapshot
        .window
        .iter()
        .map(|entry| {
            let key = slides
                .key(entry.slide_index)
                .map(|key| key.to_string())
                .unwrap_or_default();
            mark(entry, key)
        })
        .collect();

    let mut line = format!(
        "current={} window=[{}] keys=[{}]",
        snapshot.current_index,
        indices.join(" "),
        keys.join(" ")
    );
    if let Some(target) = snapshot.pending_target {
        line.push_str(&format!(" -> {target}"));
    }
    line
}
