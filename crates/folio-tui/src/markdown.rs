use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::Theme;

/// Render lightweight markdown (bold, emphasis, inline code, fenced code,
/// lists, headings) into styled, wrapped lines. Assistant answers carry
/// this markup; anything fancier degrades to plain styled text.
#[must_use]
pub fn render_markdown(content: &str, base: Style, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut renderer = Renderer {
        theme,
        base,
        width,
        lines: Vec::new(),
        spans: Vec::new(),
        bold: 0,
        emphasis: 0,
        in_code_block: false,
        list_depth: 0,
    };
    let parser = Parser::new_ext(content, Options::empty());
    for event in parser {
        renderer.handle(event);
    }
    renderer.flush_line();
    renderer.lines
}

/// Wrap plain text into lines at word boundaries.
#[must_use]
pub fn wrap_plain(content: &str, style: Style, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for raw_line in content.lines() {
        let spans = vec![Span::styled(raw_line.to_owned(), style)];
        lines.extend(wrap_spans(spans, width));
    }
    if lines.is_empty() {
        lines.push(Line::default());
    }
    lines
}

struct Renderer<'t> {
    theme: &'t Theme,
    base: Style,
    width: usize,
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    bold: u8,
    emphasis: u8,
    in_code_block: bool,
    list_depth: usize,
}

impl Renderer<'_> {
    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Strong) => self.bold += 1,
            Event::End(TagEnd::Strong) => self.bold = self.bold.saturating_sub(1),
            Event::Start(Tag::Emphasis) => self.emphasis += 1,
            Event::End(TagEnd::Emphasis) => self.emphasis = self.emphasis.saturating_sub(1),
            Event::Start(Tag::Heading { .. }) => self.bold += 1,
            Event::End(TagEnd::Heading(_)) => {
                self.bold = self.bold.saturating_sub(1);
                self.flush_line();
            }
            Event::Start(Tag::CodeBlock(_)) => {
                self.flush_line();
                self.in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                self.flush_line();
                self.in_code_block = false;
            }
            Event::Start(Tag::List(_)) => self.list_depth += 1,
            Event::End(TagEnd::List(_)) => self.list_depth = self.list_depth.saturating_sub(1),
            Event::Start(Tag::Item) => {
                self.flush_line();
                let indent = "  ".repeat(self.list_depth.saturating_sub(1));
                self.spans
                    .push(Span::styled(format!("{indent}\u{2022} "), self.base));
            }
            Event::End(TagEnd::Item) | Event::End(TagEnd::Paragraph) => self.flush_line(),
            Event::Start(Tag::Paragraph) => {
                if !self.spans.is_empty() {
                    self.flush_line();
                }
            }
            Event::Text(text) => {
                if self.in_code_block {
                    for code_line in text.lines() {
                        self.lines.push(Line::from(Span::styled(
                            code_line.to_owned(),
                            self.theme.code_block,
                        )));
                    }
                } else {
                    let style = self.current_style();
                    self.spans.push(Span::styled(text.into_string(), style));
                }
            }
            Event::Code(code) => {
                self.spans
                    .push(Span::styled(code.into_string(), self.theme.code_inline));
            }
            Event::SoftBreak | Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.flush_line();
                self.lines.push(Line::from(Span::styled(
                    "\u{2500}".repeat(self.width.max(1).min(40)),
                    self.theme.dim,
                )));
            }
            _ => {}
        }
    }

    fn current_style(&self) -> Style {
        let mut style = self.base;
        if self.bold > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.emphasis > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }

    fn flush_line(&mut self) {
        if self.spans.is_empty() {
            return;
        }
        let spans = std::mem::take(&mut self.spans);
        self.lines.extend(wrap_spans(spans, self.width));
    }
}

/// Greedy word wrap over styled spans. Tokens wider than the width are
/// hard-split so a long unbroken string cannot overflow the panel.
fn wrap_spans(spans: Vec<Span<'static>>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return vec![Line::from(spans)];
    }
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut current_width = 0usize;

    for span in spans {
        let style = span.style;
        for token in split_tokens(&span.content) {
            let token_width = token.width();
            if current_width + token_width > width && current_width > 0 {
                lines.push(Line::from(std::mem::take(&mut current)));
                current_width = 0;
                if token.trim().is_empty() {
                    continue;
                }
            }
            if token_width > width {
                for chunk in split_at_width(&token, width) {
                    if current_width > 0 {
                        lines.push(Line::from(std::mem::take(&mut current)));
                        current_width = 0;
                    }
                    current_width = chunk.width();
                    current.push(Span::styled(chunk, style));
                }
            } else {
                current_width += token_width;
                current.push(Span::styled(token, style));
            }
        }
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

/// Split into words, each keeping its trailing whitespace.
fn split_tokens(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut token = String::new();
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            in_space = true;
        } else if in_space {
            tokens.push(std::mem::take(&mut token));
            in_space = false;
        }
        token.push(c);
    }
    if !token.is_empty() {
        tokens.push(token);
    }
    tokens
}

fn split_at_width(token: &str, width: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut chunk_width = 0usize;
    for c in token.chars() {
        let w = c.width().unwrap_or(0);
        if chunk_width + w > width && !chunk.is_empty() {
            chunks.push(std::mem::take(&mut chunk));
            chunk_width = 0;
        }
        chunk.push(c);
        chunk_width += w;
    }
    if !chunk.is_empty() {
        chunks.push(chunk);
    }
    chunks
}
