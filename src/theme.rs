//! Page-wide stylesheet, mounted once through `stylist::yew::Global`.

use stylist::StyleSource;

/// Warm paper palette plus the keyframes the page-turn and typing cursor use.
/// The `.page-turn` durations must stay in step with `carousel::EXIT_MS` and
/// `carousel::ENTER_MS`.
pub const GLOBAL_CSS: &str = r#"
:root {
    --cream: #faf6ef;
    --paper: #fffdf8;
    --ink: #3b3127;
    --ink-soft: #6f6256;
    --sage: #7d9a7e;
    --sage-deep: #56745a;
    --gold: #c9a45c;
    --rose: #d9a3a0;
    --line: #e8dfd2;
    --shadow: 0 12px 40px rgba(59, 49, 39, 0.12);
}

* { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    background: var(--cream);
    color: var(--ink);
    font-family: 'Nunito', 'Segoe UI', sans-serif;
    line-height: 1.6;
}

h1, h2, h3, h4 {
    font-family: 'Lora', Georgia, serif;
    line-height: 1.25;
    margin: 0 0 0.75rem;
}

h1 { font-size: clamp(2.2rem, 5vw, 3.4rem); }
h2 { font-size: clamp(1.7rem, 3.5vw, 2.4rem); }

.hand { font-family: 'Caveat', cursive; font-size: 1.35em; }
.accent { color: var(--sage-deep); }
.highlight-text {
    background: linear-gradient(transparent 60%, rgba(201, 164, 92, 0.35) 60%);
    padding: 0 0.15em;
}

.container { width: 100%; max-width: 1140px; margin: 0 auto; padding: 0 1.5rem; }
.container.wide { max-width: 1240px; }
.container.medium { max-width: 920px; }
.container.narrow { max-width: 760px; }
.container.slim { max-width: 520px; }
.centered { text-align: center; }

.section { padding: 5.5rem 0; position: relative; }
.section.tinted { background: var(--paper); }
.section.soft-gradient { background: linear-gradient(180deg, var(--cream), #f3ede2); }
.section.sage-fade { background: linear-gradient(180deg, var(--cream), rgba(125, 154, 126, 0.12)); }
.section-head { text-align: center; margin-bottom: 3rem; }
.section-sub { color: var(--ink-soft); max-width: 640px; margin: 0 auto; }
.kicker { font-family: 'Caveat', cursive; font-size: 1.4rem; color: var(--sage-deep); margin: 0; }
.eyebrow { text-transform: uppercase; letter-spacing: 0.12em; font-size: 0.8rem; color: var(--sage-deep); }
.eyebrow.warm { color: var(--rose); }
.lead { font-size: 1.15rem; color: var(--ink-soft); }
.display-md { font-family: 'Lora', serif; font-size: 1.4rem; }
.display-lg { font-family: 'Lora', serif; font-size: 1.9rem; }
.display-xl { font-size: clamp(1.9rem, 4vw, 2.8rem); }
.quiet-list p { margin: 0.3rem 0; color: var(--ink-soft); font-style: italic; }
.closing { margin-top: 1.5rem; }
.heart { font-size: 2.4rem; color: var(--rose); margin: 0; }

.badge {
    display: inline-block;
    padding: 0.35rem 0.9rem;
    border-radius: 999px;
    background: rgba(125, 154, 126, 0.15);
    color: var(--sage-deep);
    font-size: 0.85rem;
    margin-bottom: 1.25rem;
}

/* Scroll reveal */
.reveal {
    opacity: 0;
    transform: translateY(24px);
    transition: opacity 0.7s ease, transform 0.7s ease;
}
.reveal.visible { opacity: 1; transform: none; }

/* Hero */
.hero { position: relative; padding: 6rem 0 5rem; overflow: hidden; }
.hero-glow {
    position: absolute;
    inset: -20% 40% auto -10%;
    height: 480px;
    background: radial-gradient(circle, rgba(201, 164, 92, 0.22), transparent 70%);
    pointer-events: none;
}
.hero-grid { display: grid; grid-template-columns: 1.1fr 0.9fr; gap: 3rem; align-items: center; }
.hero-subtitle { font-size: 1.2rem; color: var(--ink-soft); margin-bottom: 2rem; }
.trust-row { display: flex; flex-wrap: wrap; gap: 1.25rem; margin-top: 1.5rem; font-size: 0.9rem; color: var(--ink-soft); }
.trust-row.centered { justify-content: center; }
.hero-mockup { display: flex; justify-content: center; }
.tablet { background: #2f2a25; padding: 14px; border-radius: 26px; box-shadow: var(--shadow); max-width: 380px; }
.tablet-page { position: relative; border-radius: 14px; padding: 1.5rem 1.5rem 1.5rem 2.5rem; }
.mockup-head { display: flex; justify-content: space-between; align-items: flex-start; }
.mockup-date { text-align: right; color: var(--ink-soft); }
.mockup-date p { margin: 0; }
.mockup-day { font-size: 1.8rem; font-family: 'Lora', serif; color: var(--ink); }
.mockup-label { text-transform: uppercase; letter-spacing: 0.1em; font-size: 0.7rem; color: var(--sage-deep); margin: 1rem 0 0.25rem; }
.mockup-prayer, .mockup-verse { font-size: 0.9rem; margin: 0; }
.mockup-verse { font-style: italic; }
.mockup-note { font-family: 'Caveat', cursive; font-size: 1.2rem; margin: 0; color: var(--sage-deep); }
.mockup-note.faded { opacity: 0.6; }
.mockup-page { text-align: center; font-size: 0.8rem; color: var(--ink-soft); margin-top: 1rem; }
.float-animation { animation: float 6s ease-in-out infinite; }
@keyframes float {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-12px); }
}

/* Cards */
.card-grid { display: grid; gap: 1.5rem; }
.card-grid.two { grid-template-columns: repeat(2, 1fr); }
.card-grid.three { grid-template-columns: repeat(3, 1fr); }
.card-grid.four { grid-template-columns: repeat(4, 1fr); }
.benefit-card, .step-card, .review-card, .audience-item, .paper-card, .offer-card, .faq-card {
    background: var(--paper);
    border: 1px solid var(--line);
    border-radius: 18px;
    padding: 1.75rem;
    box-shadow: 0 4px 18px rgba(59, 49, 39, 0.06);
}
.benefit-card p, .step-card p { color: var(--ink-soft); margin: 0; }
.icon-tile {
    width: 52px;
    height: 52px;
    border-radius: 14px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(125, 154, 126, 0.14);
    font-size: 1.4rem;
    margin-bottom: 1rem;
    flex-shrink: 0;
}
.icon-tile.small { width: 40px; height: 40px; font-size: 1.1rem; margin: 0; }
.step-card { text-align: center; position: relative; }
.step-icon { font-size: 2rem; }
.step-number {
    position: absolute;
    top: 1rem;
    right: 1rem;
    width: 28px;
    height: 28px;
    border-radius: 50%;
    background: var(--gold);
    color: #fff;
    font-weight: 700;
    line-height: 28px;
}
.audience-item { display: flex; gap: 1rem; align-items: center; padding: 1.1rem 1.25rem; }
.audience-item p { margin: 0; }

/* Testimonials */
.review-head { display: flex; gap: 0.9rem; align-items: center; margin-bottom: 1rem; }
.review-head img { width: 52px; height: 52px; border-radius: 50%; object-fit: cover; }
.review-name { font-weight: 700; margin: 0; }
.review-quote { font-style: italic; color: var(--ink-soft); margin: 0; }
.stars { display: inline-flex; gap: 2px; font-size: 1.1rem; }
.stars.small { font-size: 0.9rem; }
.star { color: var(--line); }
.star.filled { color: var(--gold); }
.social-proof { display: flex; justify-content: center; align-items: center; gap: 1.25rem; margin-top: 2.5rem; color: var(--ink-soft); }
.social-proof .divider { width: 1px; height: 20px; background: var(--line); }

/* Lists */
.check-list { list-style: none; padding: 0; margin: 1.5rem 0; text-align: left; }
.check-list li { padding-left: 1.8rem; position: relative; margin: 0.6rem 0; }
.check-list li::before { content: '✓'; position: absolute; left: 0; color: var(--sage-deep); font-weight: 700; }
.dot-list li { margin: 0.4rem 0; }
.list-title { font-weight: 700; }
.included { padding: 0.5rem 1.75rem; }
.included-row { display: flex; gap: 1rem; align-items: center; padding: 1.1rem 0; border-bottom: 1px dashed var(--line); }
.included-row:last-child { border-bottom: none; }
.included-row h4 { margin: 0; }
.included-row p { margin: 0; color: var(--ink-soft); }
.included-row .icon-tile { margin: 0; }
.included-row .check { margin-left: auto; color: var(--sage-deep); font-weight: 700; }

/* Offer */
.offer { background: linear-gradient(180deg, #f3ede2, var(--cream)); }
.offer-card { text-align: center; padding: 2.5rem 2rem; border: 2px solid var(--gold); }
.price-lead, .price-note { color: var(--ink-soft); margin: 0; }
.price-value { margin: 0.25rem 0; font-family: 'Lora', serif; color: var(--ink); }
.price-value .currency { font-size: 1.4rem; vertical-align: top; }
.price-value .amount { font-size: 4rem; font-weight: 700; }
.price-value .cents { font-size: 1.6rem; }
.guarantee { margin-top: 1.25rem; color: var(--ink-soft); font-size: 0.9rem; }

/* Call to action */
.cta-button {
    display: inline-flex;
    align-items: center;
    gap: 0.6rem;
    padding: 0.9rem 1.8rem;
    border-radius: 999px;
    background: var(--sage-deep);
    color: #fff;
    font-weight: 700;
    text-decoration: none;
    box-shadow: 0 8px 24px rgba(86, 116, 90, 0.35);
    transition: transform 0.2s ease, box-shadow 0.2s ease;
}
.cta-button:hover { transform: translateY(-2px); box-shadow: 0 12px 28px rgba(86, 116, 90, 0.45); }
.cta-button.large { padding: 1.1rem 2.4rem; font-size: 1.1rem; }
.cta-arrow { transition: transform 0.2s ease; }
.cta-button:hover .cta-arrow { transform: translateX(4px); }
.cta-pulse { animation: pulse 2.8s ease-in-out infinite; }
@keyframes pulse {
    0%, 100% { box-shadow: 0 8px 24px rgba(86, 116, 90, 0.35); }
    50% { box-shadow: 0 8px 36px rgba(86, 116, 90, 0.6); }
}
.floating-cta {
    position: fixed;
    right: 1.5rem;
    bottom: 1.5rem;
    z-index: 50;
    opacity: 0;
    transform: translateY(20px);
    pointer-events: none;
    transition: opacity 0.3s ease, transform 0.3s ease;
}
.floating-cta.shown { opacity: 1; transform: none; pointer-events: auto; }
.floating-cta a {
    display: block;
    padding: 0.8rem 1.4rem;
    border-radius: 999px;
    background: var(--rose);
    color: #fff;
    text-decoration: none;
    font-weight: 700;
    box-shadow: var(--shadow);
}

/* Paper and notebook */
.notebook-bg {
    background-color: var(--paper);
    background-image: repeating-linear-gradient(transparent, transparent 31px, var(--line) 32px);
}
.paper-lines { background-image: repeating-linear-gradient(transparent, transparent 31px, var(--line) 32px); }
.margin-line { position: absolute; top: 0; bottom: 0; left: 1.6rem; width: 1px; background: rgba(217, 163, 160, 0.6); }

/* Typing demo */
.typing-demo { display: flex; justify-content: center; }
.notebook-card {
    position: relative;
    width: 100%;
    max-width: 620px;
    min-height: 520px;
    padding: 2.5rem 2rem 2.5rem 3.5rem;
    background-color: var(--paper);
    border-radius: 8px 18px 18px 8px;
    box-shadow: var(--shadow);
}
.spiral { position: absolute; left: -10px; top: 1.5rem; bottom: 1.5rem; display: flex; flex-direction: column; justify-content: space-between; }
.spiral-hole { width: 20px; height: 20px; border-radius: 50%; background: var(--cream); border: 2px solid #b8ab98; }
.paper-fold {
    position: absolute;
    right: 0;
    bottom: 0;
    width: 40px;
    height: 40px;
    background: linear-gradient(135deg, var(--paper) 50%, var(--line) 50%);
    border-radius: 0 0 18px 0;
}
.tw-lines { position: relative; }
.tw-line { margin: 0; min-height: 32px; line-height: 32px; }
.tw-title { font-family: 'Lora', serif; font-size: 1.4rem; font-weight: 700; }
.tw-verse { font-style: italic; color: var(--sage-deep); }
.tw-reference { text-align: right; font-size: 0.9rem; color: var(--ink-soft); }
.tw-emphasis { font-family: 'Caveat', cursive; font-size: 1.5rem; color: var(--sage-deep); }
.tw-body { color: var(--ink); }
.tw-gap { height: 16px; }
.typing-cursor::after {
    content: '|';
    margin-left: 2px;
    color: var(--sage-deep);
    animation: blink 1s step-end infinite;
}
.notebook-card.finished .typing-cursor::after { animation: none; opacity: 0; }
@keyframes blink {
    0%, 100% { opacity: 1; }
    50% { opacity: 0; }
}

/* Month preview */
.month-preview { display: flex; flex-direction: column; align-items: center; gap: 1.5rem; }
.month-tabs { display: flex; align-items: center; gap: 0.5rem; flex-wrap: wrap; justify-content: center; }
.month-tab, .month-step {
    border: 1px solid var(--line);
    background: var(--paper);
    color: var(--ink);
    padding: 0.5rem 1.1rem;
    border-radius: 999px;
    cursor: pointer;
    font: inherit;
}
.month-tab.active { background: var(--sage-deep); border-color: var(--sage-deep); color: #fff; }
.month-step:disabled { opacity: 0.35; cursor: default; }
.page-stack { position: relative; width: 100%; max-width: 1060px; perspective: 2000px; }
.shadow-page { position: absolute; inset: 0; background: var(--paper); border-radius: 10px; border: 1px solid var(--line); z-index: -1; }
.shadow-page.one { transform: translate(6px, 6px); }
.shadow-page.two { transform: translate(12px, 12px); opacity: 0.6; }
.page-turn { transform-origin: left center; transition: transform 350ms ease, opacity 350ms ease; }
.page-turn.exit-forward { transform: rotateY(-12deg) translateX(-24px); opacity: 0; }
.page-turn.exit-backward { transform: rotateY(12deg) translateX(24px); opacity: 0; }
.page-turn.entering { animation: page-enter 350ms ease; }
@keyframes page-enter {
    from { transform: translateX(16px); opacity: 0.4; }
    to { transform: none; opacity: 1; }
}
.preview-page { position: relative; border-radius: 10px; border: 1px solid var(--line); box-shadow: var(--shadow); padding: 2rem; }
.bookmark { position: absolute; top: -6px; right: 3rem; width: 22px; height: 64px; background: var(--rose); clip-path: polygon(0 0, 100% 0, 100% 100%, 50% 80%, 0 100%); }
.page-header { display: flex; justify-content: space-between; align-items: center; border-bottom: 1px solid var(--line); padding-bottom: 1rem; margin-bottom: 1.5rem; }
.page-brand { font-family: 'Lora', serif; color: var(--gold); letter-spacing: 0.1em; margin: 0; }
.page-header-right { text-align: right; }
.page-label { text-transform: uppercase; font-size: 0.75rem; letter-spacing: 0.1em; color: var(--ink-soft); margin: 0; }
.page-motto { font-family: 'Caveat', cursive; font-size: 1.2rem; color: var(--sage-deep); margin: 0; }
.tape-strip { position: absolute; top: -12px; left: 45%; width: 90px; height: 24px; background: rgba(201, 164, 92, 0.3); transform: rotate(-3deg); }
.page-body { display: grid; grid-template-columns: 0.9fr 1.1fr; gap: 2rem; }
.page-right { position: relative; padding: 0.5rem 1rem; }
.day-indicator { display: flex; gap: 1rem; align-items: center; margin-top: 1.5rem; }
.day-badge { width: 56px; height: 56px; border-radius: 50%; background: var(--sage-deep); color: #fff; display: flex; align-items: center; justify-content: center; font-size: 1.4rem; font-weight: 700; }
.day-of-year, .day-of-month { margin: 0; }
.day-of-month { color: var(--ink-soft); font-size: 0.9rem; }
.preview-hint { font-family: 'Caveat', cursive; color: var(--ink-soft); font-size: 1.1rem; margin-top: 1rem; }
.page-footer { border-top: 1px solid var(--line); margin-top: 1.5rem; padding-top: 0.75rem; text-align: center; }
.page-number { margin: 0; color: var(--ink-soft); font-size: 0.85rem; }
.preview-caption { font-family: 'Caveat', cursive; font-size: 1.2rem; color: var(--ink-soft); }
.content-item { margin-bottom: 1.25rem; }
.field-head { text-transform: uppercase; letter-spacing: 0.1em; font-size: 0.75rem; color: var(--sage-deep); margin: 0 0 0.3rem; }
.prayer { font-style: italic; margin: 0; }
.verse-box { border-left: 3px solid var(--gold); background: rgba(201, 164, 92, 0.08); padding: 0.6rem 0.9rem; border-radius: 0 8px 8px 0; }
.verse { font-family: 'Lora', serif; font-style: italic; margin: 0; }
.verse-ref { text-align: right; font-size: 0.85rem; color: var(--ink-soft); margin: 0.3rem 0 0; }
.reflection { margin: 0; }
.note-lines { display: flex; flex-direction: column; gap: 22px; padding-top: 10px; }
.note-line { height: 1px; background: var(--line); }

/* Calendar */
.calendar { background: var(--paper); border: 1px solid var(--line); border-radius: 12px; padding: 1rem; }
.calendar-head { display: flex; justify-content: space-between; align-items: baseline; margin-bottom: 0.75rem; }
.calendar-month { font-family: 'Lora', serif; font-weight: 700; margin: 0; }
.calendar-year { color: var(--ink-soft); margin: 0; font-size: 0.85rem; }
.cal-grid { display: grid; grid-template-columns: repeat(7, 1fr); gap: 4px; margin-bottom: 4px; }
.cal-weekday { text-align: center; font-size: 0.7rem; text-transform: uppercase; color: var(--ink-soft); }
.cal-cell { aspect-ratio: 1; display: flex; align-items: center; justify-content: center; border-radius: 6px; font-size: 0.8rem; transition: background 0.15s ease; }
.cal-cell.blank { visibility: hidden; }
.cal-cell.past { color: var(--ink-soft); text-decoration: line-through; opacity: 0.55; }
.cal-cell.current { background: var(--sage-deep); color: #fff; font-weight: 700; }
.cal-cell.future { cursor: default; }
.cal-cell.hovered { background: rgba(125, 154, 126, 0.18); }
.cal-legend { display: flex; gap: 1rem; font-size: 0.75rem; color: var(--ink-soft); margin-top: 0.75rem; }
.swatch { display: inline-block; width: 10px; height: 10px; border-radius: 3px; margin-right: 0.35rem; }
.swatch.current { background: var(--sage-deep); }
.swatch.past { background: var(--line); }

/* FAQ */
.faq-card { padding: 0.5rem 1.75rem; }
.faq-item { border-bottom: 1px solid var(--line); }
.faq-item:last-child { border-bottom: none; }
.faq-question {
    width: 100%;
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 1rem;
    padding: 1.2rem 0;
    background: none;
    border: none;
    font: inherit;
    font-weight: 700;
    color: var(--ink);
    text-align: left;
    cursor: pointer;
}
.toggle-icon { transition: transform 0.3s ease; color: var(--sage-deep); }
.faq-answer { max-height: 0; overflow: hidden; transition: max-height 0.35s ease; }
.faq-answer p { margin: 0 0 1.2rem; color: var(--ink-soft); }
.faq-item.open .faq-answer { max-height: 400px; }
.faq-item.open .toggle-icon { transform: rotate(180deg); }

/* Footer */
.site-footer { text-align: center; padding: 3rem 1.5rem; border-top: 1px solid var(--line); background: var(--paper); }
.site-footer .hand { font-size: 1.8rem; margin: 0; color: var(--sage-deep); }
.footer-motto { color: var(--ink-soft); margin: 0 0 1.5rem; }
.footer-legal p { margin: 0.2rem 0; font-size: 0.85rem; color: var(--ink-soft); }

@media (max-width: 900px) {
    .hero-grid, .page-body { grid-template-columns: 1fr; }
    .card-grid.three, .card-grid.four { grid-template-columns: repeat(2, 1fr); }
}

@media (max-width: 600px) {
    .section { padding: 4rem 0; }
    .card-grid.two, .card-grid.three, .card-grid.four { grid-template-columns: 1fr; }
    .notebook-card { padding: 2rem 1.25rem 2rem 2.5rem; }
}

@media (prefers-reduced-motion: reduce) {
    .reveal, .page-turn, .content-item { transition: none; }
    .float-animation, .cta-pulse, .typing-cursor::after { animation: none; }
}
"#;

/// Parses [`GLOBAL_CSS`] into something `Global` can mount.
pub fn global_style() -> Result<StyleSource, stylist::Error> {
    StyleSource::try_from(GLOBAL_CSS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_stylesheet_parses() {
        if let Err(e) = global_style() {
            panic!("stylesheet rejected: {}", e);
        }
    }
}
