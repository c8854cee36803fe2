use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::visibility::{observer_thresholds, VisibilityLatch, REVEAL_THRESHOLD};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct Watch {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

fn watch(element: &Element, threshold: f64, visible: UseStateHandle<bool>) -> Option<Watch> {
    let mut latch = VisibilityLatch::new(threshold);
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if latch.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                visible.set(true);
                observer.disconnect();
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let thresholds: js_sys::Array = observer_thresholds(threshold)
        .into_iter()
        .map(JsValue::from_f64)
        .collect();
    let options = IntersectionObserverInit::new();
    options.set_threshold(&thresholds);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);
    Some(Watch {
        observer,
        _callback: callback,
    })
}

/// Becomes true, once, when `node` is at least `threshold` visible.
///
/// Without a usable IntersectionObserver the content is shown straight away.
#[hook]
pub fn use_visibility(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let watch = node
                    .cast::<Element>()
                    .and_then(|element| watch(&element, threshold, visible.clone()));
                if watch.is_none() {
                    warn!("visibility observer unavailable, revealing immediately");
                    let mut latch = VisibilityLatch::new(threshold);
                    latch.force();
                    visible.set(latch.is_tripped());
                }
                move || {
                    if let Some(watch) = watch {
                        watch.observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    *visible
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub delay_ms: u32,
}

/// Fades and lifts its children into place the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_visibility(node.clone(), REVEAL_THRESHOLD);

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal", visible.then(|| "visible"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
