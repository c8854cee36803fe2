use log::debug;

use crate::timeline::{Timeline, Timer};

/// Share of the notebook card that must be on screen before typing starts.
pub const VISIBILITY_THRESHOLD: f64 = 0.3;

pub const SPACER_MS: u32 = 500;
pub const LINE_START_MS: u32 = 250;
pub const LINE_END_MS: u32 = 350;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Title,
    Verse,
    Reference,
    Body,
    Emphasis,
    Spacer,
}

impl LineKind {
    /// Unknown tags fall back to plain body text.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "title" => LineKind::Title,
            "verse" => LineKind::Verse,
            "reference" => LineKind::Reference,
            "emphasis" => LineKind::Emphasis,
            "break" | "spacer" => LineKind::Spacer,
            _ => LineKind::Body,
        }
    }

    pub fn char_delay_ms(self) -> u32 {
        match self {
            LineKind::Title => 55,
            LineKind::Verse => 38,
            _ => 30,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            LineKind::Title => "tw-line tw-title",
            LineKind::Verse => "tw-line tw-verse",
            LineKind::Reference => "tw-line tw-reference",
            LineKind::Emphasis => "tw-line tw-emphasis",
            LineKind::Spacer => "tw-line tw-spacer",
            LineKind::Body => "tw-line tw-body",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

impl Line {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        let text = if kind == LineKind::Spacer {
            String::new()
        } else {
            text.into()
        };
        Self { kind, text }
    }

    pub fn tagged(tag: &str, text: &str) -> Self {
        Self::new(LineKind::from_tag(tag), text)
    }
}

const SCRIPT: &[(&str, &str)] = &[
    ("title", "Hoje ainda é tempo"),
    ("break", ""),
    ("verse", "\"O Senhor é compassivo e misericordioso\""),
    ("reference", "– Salmos 103:8"),
    ("break", ""),
    ("text", "Você não precisa ter todas as respostas."),
    ("text", "Não precisa de um momento perfeito."),
    ("text", "Deus não espera perfeição —"),
    ("emphasis", "Ele espera você."),
    ("break", ""),
    ("text", "Hoje, respire fundo."),
    ("text", "Abra o coração."),
    ("emphasis", "E deixe Ele cuidar do resto."),
];

pub fn demo_script() -> Vec<Line> {
    SCRIPT
        .iter()
        .map(|(tag, text)| Line::tagged(tag, text))
        .collect()
}

/// Each event names the line it belongs to, so a late delivery for a line
/// that has already moved on can be told apart and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterEvent {
    SpacerElapsed { line: usize },
    LineStarted { line: usize },
    CharTyped { line: usize },
    LineFinished { line: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine<'a> {
    pub kind: LineKind,
    pub text: &'a str,
    pub cursor: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    lines: Vec<Line>,
    completed: usize,
    partial: String,
    partial_chars: usize,
    typing: bool,
    begun: bool,
}

impl Typewriter {
    pub fn new(lines: Vec<Line>) -> Self {
        Self {
            lines,
            completed: 0,
            partial: String::new(),
            partial_chars: 0,
            typing: false,
            begun: false,
        }
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    #[cfg(test)]
    pub fn partial(&self) -> &str {
        &self.partial
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn has_begun(&self) -> bool {
        self.begun
    }

    pub fn is_finished(&self) -> bool {
        self.completed >= self.lines.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Starts the script. Only the first call has any effect.
    pub fn begin(&mut self) -> Vec<Timer<TypewriterEvent>> {
        if self.begun {
            return Vec::new();
        }
        self.begun = true;
        debug!("typewriter started with {} lines", self.lines.len());
        self.next_step().into_iter().collect()
    }

    /// The single step the script is waiting on, if any.
    fn next_step(&self) -> Option<Timer<TypewriterEvent>> {
        if !self.begun {
            return None;
        }
        let line = self.completed;
        let current = self.lines.get(line)?;

        if current.kind == LineKind::Spacer {
            return Some(Timer::after(
                SPACER_MS,
                TypewriterEvent::SpacerElapsed { line },
            ));
        }
        if !self.typing {
            return Some(Timer::after(
                LINE_START_MS,
                TypewriterEvent::LineStarted { line },
            ));
        }
        if self.partial_chars < current.text.chars().count() {
            Some(Timer::after(
                current.kind.char_delay_ms(),
                TypewriterEvent::CharTyped { line },
            ))
        } else {
            Some(Timer::after(
                LINE_END_MS,
                TypewriterEvent::LineFinished { line },
            ))
        }
    }

    fn apply(&mut self, event: TypewriterEvent) {
        match event {
            TypewriterEvent::SpacerElapsed { .. } => {
                self.completed += 1;
            }
            TypewriterEvent::LineStarted { .. } => {
                self.typing = true;
                self.partial.clear();
                self.partial_chars = 0;
            }
            TypewriterEvent::CharTyped { line } => {
                if let Some(c) = self.lines[line].text.chars().nth(self.partial_chars) {
                    self.partial.push(c);
                    self.partial_chars += 1;
                }
            }
            TypewriterEvent::LineFinished { .. } => {
                self.typing = false;
                self.completed += 1;
                self.partial.clear();
                self.partial_chars = 0;
            }
        }
    }

    /// What is on the page right now: finished lines in full, then the line
    /// being typed with a cursor.
    pub fn rendered(&self) -> Vec<RenderedLine<'_>> {
        let mut out: Vec<RenderedLine<'_>> = self
            .lines
            .iter()
            .take(self.completed)
            .map(|line| RenderedLine {
                kind: line.kind,
                text: &line.text,
                cursor: false,
            })
            .collect();
        if self.typing {
            if let Some(line) = self.lines.get(self.completed) {
                out.push(RenderedLine {
                    kind: line.kind,
                    text: &self.partial,
                    cursor: true,
                });
            }
        }
        out
    }
}

impl Timeline for Typewriter {
    type Event = TypewriterEvent;

    fn fire(&mut self, event: TypewriterEvent) -> Vec<Timer<TypewriterEvent>> {
        match self.next_step() {
            Some(expected) if expected.event == event => {
                self.apply(event);
                self.next_step().into_iter().collect()
            }
            _ => Vec::new(),
        }
    }
}
