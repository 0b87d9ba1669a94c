//! Paints a view tree into a terminal buffer.
//!
//! Block nodes stack top to bottom, each getting exactly the height it
//! measures at the available width. Rows flow their columns over the
//! 12-unit grid and are as tall as their tallest line. Anything that does
//! not fit is clipped.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::grid::{Placement, ResponsiveConfig, place_columns};
use crate::domain::node::{ChecklistEntry, Node, TextAlign};
use crate::presentation::theme::Theme;

const CONTAINER_GUTTER: u16 = 1;
const CARD_BORDER: u16 = 2;

/// Widget painting a [`Node`] tree.
pub struct NodeView<'a> {
    node: &'a Node,
    theme: &'a Theme,
    container_max_width: u16,
}

struct RowLayout<'n> {
    cells: Vec<(Placement, &'n Node)>,
    line_tops: Vec<u16>,
    line_heights: Vec<u16>,
}

impl RowLayout<'_> {
    fn height(&self) -> u16 {
        self.line_heights
            .iter()
            .fold(0u16, |acc, h| acc.saturating_add(*h))
    }
}

impl<'a> NodeView<'a> {
    /// Default cap on container width, in cells.
    pub const DEFAULT_CONTAINER_MAX_WIDTH: u16 = 120;

    /// Creates a view of `node`.
    #[must_use]
    pub const fn new(node: &'a Node, theme: &'a Theme) -> Self {
        Self {
            node,
            theme,
            container_max_width: Self::DEFAULT_CONTAINER_MAX_WIDTH,
        }
    }

    /// Sets the widest a container grows.
    #[must_use]
    pub const fn container_max_width(mut self, width: u16) -> Self {
        self.container_max_width = width;
        self
    }

    /// Rows needed to paint the whole tree at `width` cells.
    #[must_use]
    pub fn height(&self, width: u16) -> u16 {
        self.measure(self.node, width)
    }

    fn measure(&self, node: &Node, width: u16) -> u16 {
        if width == 0 {
            return 0;
        }
        match node {
            Node::Fragment(children) | Node::Column { children, .. } => {
                self.stack_height(children, width)
            }
            Node::Component { body, .. } => self.measure(body, width),
            Node::Container(children) => {
                self.stack_height(children, self.container_inner_width(width))
            }
            Node::Row(children) => self.row_layout(children, width).height(),
            Node::Heading { text, .. } => line_count(text, width),
            Node::Text { content, .. } => line_count(content, width),
            Node::Card { children, .. } => self
                .stack_height(children, width.saturating_sub(CARD_BORDER))
                .saturating_add(CARD_BORDER),
            Node::Checklist(entries) => u16::try_from(entries.len()).unwrap_or(u16::MAX),
        }
    }

    fn stack_height(&self, children: &[Node], width: u16) -> u16 {
        children
            .iter()
            .fold(0u16, |acc, child| acc.saturating_add(self.measure(child, width)))
    }

    fn container_inner_width(&self, width: u16) -> u16 {
        width
            .min(self.container_max_width)
            .saturating_sub(CONTAINER_GUTTER * 2)
    }

    fn container_area(&self, area: Rect) -> Rect {
        let width = area.width.min(self.container_max_width);
        let x = area.x + (area.width - width) / 2;
        let inner_width = width.saturating_sub(CONTAINER_GUTTER * 2);
        let gutter = (width - inner_width) / 2;
        Rect::new(x + gutter, area.y, inner_width, area.height)
    }

    fn row_layout<'n>(&self, children: &'n [Node], width: u16) -> RowLayout<'n> {
        let configs: Vec<ResponsiveConfig> = children
            .iter()
            .map(|child| match child {
                Node::Column {
                    breakpoint, config, ..
                } => config.resolve(*breakpoint, width),
                _ => ResponsiveConfig::FULL,
            })
            .collect();

        let placements = place_columns(&configs, width);
        let lines = placements.last().map_or(0, |p| usize::from(p.line) + 1);

        let mut line_heights = vec![0u16; lines];
        for (placement, child) in placements.iter().zip(children) {
            let height = self.measure(child, placement.width);
            if let Some(slot) = line_heights.get_mut(usize::from(placement.line)) {
                *slot = (*slot).max(height);
            }
        }

        let mut line_tops = Vec::with_capacity(lines);
        let mut top = 0u16;
        for height in &line_heights {
            line_tops.push(top);
            top = top.saturating_add(*height);
        }

        RowLayout {
            cells: placements.into_iter().zip(children).collect(),
            line_tops,
            line_heights,
        }
    }

    fn render_node(&self, node: &Node, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        match node {
            Node::Fragment(children) | Node::Column { children, .. } => {
                self.render_stack(children, area, buf);
            }
            Node::Component { body, .. } => self.render_node(body, area, buf),
            Node::Container(children) => {
                self.render_stack(children, self.container_area(area), buf);
            }
            Node::Row(children) => self.render_row(children, area, buf),
            Node::Heading { level, text, align } => {
                render_wrapped(text, self.theme.heading(*level), *align, area, buf);
            }
            Node::Text {
                content,
                align,
                tone,
            } => render_wrapped(content, self.theme.tone(*tone), *align, area, buf),
            Node::Card { title, children } => {
                let mut block = Block::bordered().border_style(self.theme.card_border);
                if let Some(title) = title {
                    block = block.title(Line::styled(format!(" {title} "), self.theme.card_title));
                }
                let inner = block.inner(area);
                block.render(area, buf);
                self.render_stack(children, inner, buf);
            }
            Node::Checklist(entries) => self.render_checklist(entries, area, buf),
        }
    }

    fn render_stack(&self, children: &[Node], area: Rect, buf: &mut Buffer) {
        let mut y = area.y;
        for child in children {
            let remaining = area.bottom().saturating_sub(y);
            if remaining == 0 {
                break;
            }
            let height = self.measure(child, area.width).min(remaining);
            self.render_node(child, Rect::new(area.x, y, area.width, height), buf);
            y += height;
        }
    }

    fn render_row(&self, children: &[Node], area: Rect, buf: &mut Buffer) {
        let layout = self.row_layout(children, area.width);

        for (placement, child) in &layout.cells {
            let line = usize::from(placement.line);
            let (Some(offset), Some(line_height)) =
                (layout.line_tops.get(line), layout.line_heights.get(line))
            else {
                continue;
            };

            let top = area.y.saturating_add(*offset);
            if top >= area.bottom() {
                continue;
            }
            let height = (*line_height).min(area.bottom() - top);
            let cell = Rect::new(area.x + placement.start, top, placement.width, height);
            self.render_node(child, cell, buf);
        }
    }

    fn render_checklist(&self, entries: &[ChecklistEntry], area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = entries
            .iter()
            .map(|entry| {
                let (marker, style) = if entry.checked {
                    ("[x] ", self.theme.checked)
                } else {
                    ("[ ] ", self.theme.text)
                };
                Line::from(vec![
                    Span::styled(marker, self.theme.card_border),
                    Span::styled(entry.label.as_str(), style),
                ])
            })
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}

impl Widget for &NodeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_node(self.node, area, buf);
    }
}

fn render_wrapped(
    text: &str,
    style: ratatui::style::Style,
    align: TextAlign,
    area: Rect,
    buf: &mut Buffer,
) {
    let lines: Vec<Line> = wrap_lines(text, area.width)
        .into_iter()
        .map(|line| Line::styled(line, style))
        .collect();

    let alignment = match align {
        TextAlign::Left => Alignment::Left,
        TextAlign::Center => Alignment::Center,
    };
    Paragraph::new(lines).alignment(alignment).render(area, buf);
}

fn line_count(text: &str, width: u16) -> u16 {
    u16::try_from(wrap_lines(text, width).len()).unwrap_or(u16::MAX)
}

/// Greedy word wrap; words wider than a line are split by character.
fn wrap_lines(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width);
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width + ch_width > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
