use yew::prelude::*;

use crate::components::scheduler::use_timeline;
use crate::devotional::calendar::{calendar_rows, CalendarCell, DayStatus};
use crate::devotional::carousel::{Carousel, Direction, TransitionPhase};
use crate::devotional::months::{page_number, MonthEntry, MONTHS, WEEKDAYS};
use crate::devotional::stagger::{ContentField, Stagger};

fn page_class(phase: TransitionPhase, direction: Direction) -> Classes {
    match (phase, direction) {
        (TransitionPhase::Exiting, Direction::Forward) => classes!("page-turn", "exit-forward"),
        (TransitionPhase::Exiting, Direction::Backward) => classes!("page-turn", "exit-backward"),
        (TransitionPhase::Entering, _) => classes!("page-turn", "entering"),
        (TransitionPhase::Idle, _) => classes!("page-turn"),
    }
}

#[derive(Properties, PartialEq)]
struct CalendarProps {
    month: MonthEntry,
}

#[function_component(Calendar)]
fn calendar(props: &CalendarProps) -> Html {
    let hovered = use_state_eq(|| None::<u32>);
    let month = &props.month;

    let cell = |cell: CalendarCell| -> Html {
        match cell {
            CalendarCell::Blank => html! { <div class="cal-cell blank"></div> },
            CalendarCell::Day { number, status } => {
                let (onmouseenter, onmouseleave) = {
                    let enter = hovered.clone();
                    let leave = hovered.clone();
                    (
                        Callback::from(move |_: MouseEvent| {
                            if status == DayStatus::Future {
                                enter.set(Some(number));
                            }
                        }),
                        Callback::from(move |_: MouseEvent| leave.set(None)),
                    )
                };
                let class = match status {
                    DayStatus::Current => classes!("cal-cell", "current"),
                    DayStatus::Past => classes!("cal-cell", "past"),
                    DayStatus::Future => classes!(
                        "cal-cell",
                        "future",
                        (*hovered == Some(number)).then(|| "hovered")
                    ),
                };
                html! {
                    <div {class} {onmouseenter} {onmouseleave}>{number.to_string()}</div>
                }
            }
        }
    };

    html! {
        <div class="calendar">
            <div class="calendar-head">
                <p class="calendar-month">{month.name}</p>
                <p class="calendar-year">{"2025"}</p>
            </div>
            <div class="cal-grid weekdays">
                { for WEEKDAYS.iter().map(|d| html! { <div key={*d} class="cal-weekday">{*d}</div> }) }
            </div>
            { for calendar_rows(month).into_iter().map(|week| html! {
                <div class="cal-grid">
                    { for week.into_iter().map(&cell) }
                </div>
            }) }
            <div class="cal-legend">
                <span><span class="swatch current"></span>{" Dia atual"}</span>
                <span><span class="swatch past"></span>{" Concluído"}</span>
            </div>
        </div>
    }
}

fn content_field(field: ContentField, month: &MonthEntry, stagger: &Stagger) -> Html {
    let day = &month.sample_day;
    let style = stagger.field(field).style();
    let body = match field {
        ContentField::Prayer => html! {
            <>
                <div class="field-head"><span>{"🙏"}</span><h4>{"Oração do dia"}</h4></div>
                <p class="prayer">{format!("“{}”", day.prayer)}</p>
            </>
        },
        ContentField::Verse => html! {
            <>
                <div class="field-head"><span>{"📖"}</span><h4>{"Versículo"}</h4></div>
                <div class="verse-box">
                    <p class="verse">{format!("“{}”", day.verse)}</p>
                    <p class="verse-ref">{format!("— {}", day.verse_ref)}</p>
                </div>
            </>
        },
        ContentField::Reflection => html! {
            <>
                <div class="field-head"><span>{"💭"}</span><h4>{"Reflexão"}</h4></div>
                <p class="reflection">{day.reflection}</p>
            </>
        },
        ContentField::Notes => html! {
            <>
                <div class="field-head"><span>{"✏️"}</span><h4>{"Suas anotações"}</h4></div>
                <div class="note-lines">
                    { for (0..4).map(|i| html! { <div key={i} class="note-line"></div> }) }
                </div>
            </>
        },
    };
    html! {
        <div key={field.index()} class="content-item" {style}>
            { body }
        </div>
    }
}

/// Browsable sample pages, one per month, with a page-turn between them.
#[function_component(MonthPreview)]
pub fn month_preview() -> Html {
    let timeline = use_timeline(|| Carousel::new(MONTHS.len()));

    {
        let timeline = timeline.clone();
        use_effect_with_deps(
            move |_| {
                timeline.dispatch(|carousel| carousel.mount());
                || ()
            },
            (),
        );
    }

    let carousel = timeline.read(|carousel| carousel.clone());
    let index = carousel.active_index();
    let month = MONTHS[index];

    let on_prev = {
        let timeline = timeline.clone();
        Callback::from(move |_: MouseEvent| timeline.dispatch(|c| c.step_prev()))
    };
    let on_next = {
        let timeline = timeline.clone();
        Callback::from(move |_: MouseEvent| timeline.dispatch(|c| c.step_next()))
    };

    let tabs = MONTHS.iter().enumerate().map(|(i, m)| {
        let timeline = timeline.clone();
        let onclick = Callback::from(move |_: MouseEvent| timeline.dispatch(|c| c.navigate_to(i)));
        html! {
            <button key={m.name} class={classes!("month-tab", (i == index).then(|| "active"))} {onclick}>
                {m.name}
            </button>
        }
    });

    html! {
        <div class="month-preview">
            <div class="month-tabs">
                <button class="month-step" onclick={on_prev} disabled={!carousel.can_step_prev()}>{"‹"}</button>
                { for tabs }
                <button class="month-step" onclick={on_next} disabled={!carousel.can_step_next()}>{"›"}</button>
            </div>

            <div class="page-stack">
                <div class={page_class(carousel.phase(), carousel.direction())}>
                    <div class="preview-page notebook-bg">
                        <div class="bookmark"></div>
                        <div class="page-header">
                            <div>
                                <p class="page-brand">{"🔖 Devocional 365"}</p>
                                <h3>{month.name}</h3>
                            </div>
                            <div class="page-header-right">
                                <p class="page-label">{"Prévia"}</p>
                                <p class="page-motto">{"Um dia de cada vez"}</p>
                            </div>
                            <div class="tape-strip">{"página de exemplo ✦"}</div>
                        </div>

                        <div class="page-body">
                            <div class="page-left">
                                <Calendar {month} />
                                <div class="day-indicator">
                                    <div class="day-badge">{month.sample_day.day_number.to_string()}</div>
                                    <div>
                                        <p class="day-of-year">{format!("Dia {} do ano", month.sample_day.year_day)}</p>
                                        <p class="day-of-month">{format!("{} de {}", month.sample_day.day_number, month.name)}</p>
                                    </div>
                                </div>
                                <p class="preview-hint">{"✎ Clique nos meses para navegar ↑"}</p>
                            </div>

                            <div class="page-right notebook-bg" data-revealed={carousel.stagger().revealed().to_string()}>
                                { for ContentField::ALL.iter().map(|f| content_field(*f, &month, carousel.stagger())) }
                            </div>
                        </div>

                        <div class="page-footer">
                            <p>{"Devocional 365 — Um dia de cada vez com Deus"}</p>
                            <p class="page-number">{format!("Página {}", page_number(index, &month))}</p>
                        </div>
                    </div>
                </div>
                <div class="shadow-page one"></div>
                <div class="shadow-page two"></div>
            </div>

            <p class="preview-caption">{"Clique nos meses acima para navegar entre as páginas"}</p>
        </div>
    }
}
