use yew::prelude::*;

use crate::components::reveal::use_visibility;
use crate::components::scheduler::use_timeline;
use crate::devotional::typewriter::{demo_script, LineKind, Typewriter, VISIBILITY_THRESHOLD};

/// Notebook page that types out the demo devotional once it is in view.
#[function_component(TypingDemo)]
pub fn typing_demo() -> Html {
    let node = use_node_ref();
    let visible = use_visibility(node.clone(), VISIBILITY_THRESHOLD);
    let timeline = use_timeline(|| Typewriter::new(demo_script()));

    {
        let timeline = timeline.clone();
        use_effect_with_deps(
            move |visible| {
                if *visible {
                    timeline.dispatch(|typewriter| typewriter.begin());
                }
                || ()
            },
            visible,
        );
    }

    let (lines, finished, state, progress) = timeline.read(|typewriter| {
        let lines = typewriter
            .rendered()
            .into_iter()
            .map(|line| {
                let class = classes!(line.kind.class(), line.cursor.then(|| "typing-cursor"));
                if line.kind == LineKind::Spacer {
                    html! { <div class={class}><div class="tw-gap"></div></div> }
                } else {
                    html! { <div class={class}>{line.text.to_string()}</div> }
                }
            })
            .collect::<Html>();
        let state = if typewriter.is_finished() {
            "done"
        } else if typewriter.is_typing() {
            "typing"
        } else if typewriter.has_begun() {
            "pausing"
        } else {
            "waiting"
        };
        let progress = format!("{}/{}", typewriter.completed(), typewriter.line_count());
        (lines, typewriter.is_finished(), state, progress)
    });

    html! {
        <div ref={node} class="typing-demo" data-state={state} data-progress={progress}>
            <div class={classes!("notebook-card", "paper-lines", finished.then(|| "finished"))}>
                <div class="margin-line"></div>
                <div class="spiral">
                    { for (0..12).map(|i| html! { <div key={i} class="spiral-hole"></div> }) }
                </div>
                <div class="tw-lines">
                    { lines }
                </div>
                <div class="paper-fold"></div>
            </div>
        </div>
    }
}
