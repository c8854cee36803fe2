use crate::timeline::Timer;

pub const FIRST_REVEAL_MS: u32 = 100;
pub const REVEAL_STEP_MS: u32 = 120;
pub const FADE_MS: u32 = 500;
pub const RISE_PX: u32 = 16;

/// Content blocks of a sample day, in the order they appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentField {
    Prayer,
    Verse,
    Reflection,
    Notes,
}

impl ContentField {
    pub const ALL: [ContentField; 4] = [
        ContentField::Prayer,
        ContentField::Verse,
        ContentField::Reflection,
        ContentField::Notes,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldReveal {
    pub visible: bool,
    /// Offset from the start of the stagger at which this field appears.
    pub delay_ms: u32,
}

impl FieldReveal {
    /// Inline style for the field's fade-and-rise.
    pub fn style(&self) -> String {
        if self.visible {
            format!(
                "opacity: 1; transform: translateY(0); transition: opacity {FADE_MS}ms ease-out, transform {FADE_MS}ms ease-out;"
            )
        } else {
            format!("opacity: 0; transform: translateY({RISE_PX}px);")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealEvent {
    pub generation: u32,
    pub field: usize,
}

/// Sequential reveal of the content fields.
///
/// Reveals form a single chain: each one schedules the next, so fields can
/// only appear in `ContentField::ALL` order. Any reset bumps `generation`,
/// which turns every reveal still in flight into a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stagger {
    generation: u32,
    slots: [FieldReveal; 4],
}

impl Default for Stagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Stagger {
    pub fn new() -> Self {
        let mut slots = [FieldReveal {
            visible: false,
            delay_ms: 0,
        }; 4];
        for (i, slot) in slots.iter_mut().enumerate() {
            slot.delay_ms = FIRST_REVEAL_MS + i as u32 * REVEAL_STEP_MS;
        }
        Self {
            generation: 0,
            slots,
        }
    }

    pub fn field(&self, field: ContentField) -> FieldReveal {
        self.slots[field.index()]
    }

    pub fn revealed(&self) -> usize {
        self.slots.iter().take_while(|s| s.visible).count()
    }

    /// Drops pending reveals and leaves whatever is already shown in place.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Drops pending reveals and hides every field.
    pub fn reset(&mut self) {
        self.cancel();
        for slot in self.slots.iter_mut() {
            slot.visible = false;
        }
    }

    /// Starts over from a hidden state and returns the first reveal.
    pub fn restart(&mut self) -> Timer<RevealEvent> {
        self.reset();
        Timer::after(
            self.slots[0].delay_ms,
            RevealEvent {
                generation: self.generation,
                field: 0,
            },
        )
    }

    pub fn reveal(&mut self, event: RevealEvent) -> Option<Timer<RevealEvent>> {
        if event.generation != self.generation || event.field != self.revealed() {
            return None;
        }
        let field = event.field;
        self.slots[field].visible = true;
        let next = self.slots.get(field + 1)?;
        Some(Timer::after(
            next.delay_ms - self.slots[field].delay_ms,
            RevealEvent {
                generation: self.generation,
                field: field + 1,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(stagger: &mut Stagger, mut timer: Option<Timer<RevealEvent>>) -> Vec<u32> {
        let mut at = 0;
        let mut times = Vec::new();
        while let Some(t) = timer {
            at += t.delay_ms;
            times.push(at);
            timer = stagger.reveal(t.event);
        }
        times
    }

    #[test]
    fn reveals_in_order_on_the_published_offsets() {
        let mut stagger = Stagger::new();
        let first = stagger.restart();
        assert_eq!(stagger.revealed(), 0);

        let times = run(&mut stagger, Some(first));
        assert_eq!(times, vec![100, 220, 340, 460]);
        assert_eq!(stagger.revealed(), 4);
        assert!(ContentField::ALL.iter().all(|f| stagger.field(*f).visible));
    }

    #[test]
    fn stale_generation_is_ignored() {
        let mut stagger = Stagger::new();
        let first = stagger.restart();
        let second = stagger.reveal(first.event).unwrap();

        stagger.cancel();
        assert_eq!(stagger.reveal(second.event), None);
        assert_eq!(stagger.revealed(), 1);
        assert!(stagger.field(ContentField::Prayer).visible);
        assert!(!stagger.field(ContentField::Verse).visible);
    }

    #[test]
    fn out_of_order_reveal_is_ignored() {
        let mut stagger = Stagger::new();
        let first = stagger.restart();
        let skip = RevealEvent {
            generation: first.event.generation,
            field: 2,
        };
        assert_eq!(stagger.reveal(skip), None);
        assert_eq!(stagger.revealed(), 0);
    }

    #[test]
    fn reset_hides_everything() {
        let mut stagger = Stagger::new();
        let first = stagger.restart();
        run(&mut stagger, Some(first));
        stagger.reset();
        assert_eq!(stagger.revealed(), 0);
        assert!(stagger.field(ContentField::Notes).style().contains("opacity: 0"));
    }
}
