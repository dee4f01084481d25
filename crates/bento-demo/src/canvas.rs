#![forbid(unsafe_code)]

//! ASCII rendering of render plans.
//!
//! Opacity maps onto a shade ramp; anything below the first step is not
//! drawn. Vertical offsets are scaled down to rows.

use std::fmt;

use bento_core::geometry::Rect;
use bento_widgets::{ElementKind, HeaderLayout, PanelContent, PanelModel, RowFrame, SectionFrame};

const SHADES: [char; 5] = ['.', ':', '+', '*', '#'];
/// Offset units per rendered row.
const UNITS_PER_ROW: f32 = 15.0;

/// A fixed-size character grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl Canvas {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; usize::from(width) * usize::from(height)],
        }
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Character at `(x, y)`, `None` outside the grid.
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, ch: char) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = ch;
        }
    }

    /// Write `text` from `(x, y)`, clipped to `clip`.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, clip: Rect) {
        if y < clip.y || y >= clip.bottom() {
            return;
        }
        for (i, ch) in text.chars().enumerate() {
            let Ok(offset) = u16::try_from(i) else { break };
            let cx = x.saturating_add(offset);
            if cx >= clip.right() {
                break;
            }
            if cx >= clip.x {
                self.set(cx, y, ch);
            }
        }
    }

    /// Row `y` as a string with trailing spaces trimmed.
    #[must_use]
    pub fn row(&self, y: u16) -> String {
        let start = usize::from(y) * usize::from(self.width);
        let end = start + usize::from(self.width);
        self.cells
            .get(start..end)
            .map(|cells| cells.iter().collect::<String>().trim_end().to_owned())
            .unwrap_or_default()
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            writeln!(f, "{}", self.row(y))?;
        }
        Ok(())
    }
}

/// Shade character for `alpha`, `None` when too faint to draw.
#[must_use]
pub fn shade(alpha: f32) -> Option<char> {
    if alpha.is_nan() || alpha < 0.1 {
        return None;
    }
    let step = ((alpha.min(1.0) - 0.1) / 0.9 * (SHADES.len() - 1) as f32).round() as usize;
    SHADES.get(step).copied()
}

/// Draw a row frame. Panel text comes from `model`.
#[must_use]
pub fn render_row(frame: &RowFrame, model: &PanelModel) -> Canvas {
    let mut canvas = Canvas::new(frame.area.right(), frame.area.bottom());

    for panel in &frame.panels {
        let rect = panel.rect;
        if rect.is_empty() {
            continue;
        }
        // Left border; the active panel gets a heavy one.
        let border = if panel.active { '#' } else { '|' };
        for y in rect.y..rect.bottom() {
            canvas.set(rect.x, y, border);
        }
        let inner = Rect::new(
            rect.x.saturating_add(1),
            rect.y,
            rect.width.saturating_sub(1),
            rect.height,
        );

        match panel.header {
            HeaderLayout::Vertical => {
                canvas.put_str(inner.x, inner.y, &panel.number, inner);
                for (i, ch) in panel.title.chars().enumerate() {
                    let Ok(row) = u16::try_from(i + 1) else { break };
                    let y = inner.y.saturating_add(row);
                    if y >= panel.content.rect.y.max(inner.y + 1) && panel.content.visible {
                        break;
                    }
                    canvas.put_str(inner.x, y, &ch.to_string(), inner);
                }
            }
            HeaderLayout::Stacked => {
                canvas.put_str(inner.x, inner.y, &panel.number, inner);
                canvas.put_str(inner.x, inner.y.saturating_add(1), &panel.title, inner);
            }
        }

        if panel.alpha < 1.0 {
            if let Some(mark) = shade(panel.alpha) {
                canvas.set(inner.right().saturating_sub(1), inner.y, mark);
            }
        }

        let Some(content) = model.panel(panel.rank).map(|p| p.payload()) else {
            continue;
        };
        if panel.content.visible {
            draw_content(&mut canvas, &panel.content, content);
        }
    }
    canvas
}

fn draw_content(
    canvas: &mut Canvas,
    frame: &bento_widgets::ContentFrame,
    content: &PanelContent,
) {
    let area = frame.rect;
    let mut y = area.y;
    for element in &frame.elements {
        let alpha = element.alpha * frame.alpha;
        let Some(mark) = shade(alpha) else {
            y = y.saturating_add(1);
            continue;
        };
        let drop = (element.offset_y / UNITS_PER_ROW).round() as u16;
        let lines = element_lines(element.kind, content, element.scale);
        let shown = ((lines.len() as f32) * element.extent).ceil() as usize;
        for line in lines.iter().take(shown) {
            let text = format!("{mark} {line}");
            canvas.put_str(area.x, y.saturating_add(drop), &text, area);
            y = y.saturating_add(1);
        }
    }
}

fn element_lines(kind: ElementKind, content: &PanelContent, scale: f32) -> Vec<String> {
    match kind {
        ElementKind::Media => {
            let media = content.media.as_deref().unwrap_or_default();
            vec![format!("[{media}] x{scale:.2}")]
        }
        ElementKind::Subheading => content.subheading.clone(),
        ElementKind::List => vec![content.list.join(" ")],
        ElementKind::Description => content.description.iter().cloned().collect(),
    }
}

/// One text line per scroll-revealed section.
#[must_use]
pub fn render_sections(sections: &[SectionFrame]) -> String {
    let mut out = String::new();
    for section in sections {
        let bar_len = (section.progress * 20.0).round() as usize;
        out.push_str(&format!(
            "{:<24} {:<5} [{:<20}] poster x{:+6.1}% a{:.2}  text x{:+5.1}% a{:.2}  ind y{:4.1} a{:.2}\n",
            section.key,
            format!("{:?}", section.side).to_lowercase(),
            "=".repeat(bar_len),
            section.poster.x_percent,
            section.poster.alpha,
            section.text.x_percent,
            section.text.alpha,
            section.indicator.offset_y,
            section.indicator.alpha,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bento_widgets::{InteractionSurface, Panel, SurfaceOptions};
    use std::time::Duration;

    #[test]
    fn put_str_clips() {
        let mut canvas = Canvas::new(10, 2);
        canvas.put_str(7, 0, "hello", Rect::new(0, 0, 10, 2));
        assert_eq!(canvas.row(0), "       hel");
        canvas.put_str(0, 5, "x", Rect::new(0, 0, 10, 2));
        assert_eq!(canvas.get(0, 1), Some(' '));
        assert_eq!(canvas.get(10, 0), None);
    }

    #[test]
    fn shade_ramp() {
        assert_eq!(shade(0.0), None);
        assert_eq!(shade(f32::NAN), None);
        assert_eq!(shade(0.1), Some('.'));
        assert_eq!(shade(1.0), Some('#'));
    }

    #[test]
    fn renders_active_panel_content() {
        let mut surface = InteractionSurface::new(
            [
                Panel::new("01", "WEB").content(PanelContent::description("fast sites")),
                Panel::new("02", "UI"),
            ],
            SurfaceOptions::works(),
        );
        surface.pointer_enter(0);
        for _ in 0..60 {
            surface.tick(Duration::from_millis(16));
        }
        let frame = surface.layout(Rect::from_size(42, 12));
        let canvas = render_row(&frame, surface.model());
        let text = canvas.to_string();
        assert_eq!(canvas.get(0, 0), Some('#'));
        assert!(text.contains("# fast sites"));
        assert!(text.contains("02"));
        assert_eq!(canvas.height(), 12);
    }
}
