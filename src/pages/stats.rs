use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::content::Highlight;
use crate::counter::{format_count, wants_ticker, CounterAnimator, CounterConfig, Subscription};

/// Watches `element` until `on_entry` returns true, then disconnects. The
/// returned subscription disconnects and frees the callback when stopped.
fn observe_visibility(
    element: &Element,
    threshold: f64,
    mut on_entry: impl FnMut(bool, f64) -> bool + 'static,
) -> Option<Subscription> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if on_entry(entry.is_intersecting(), entry.intersection_ratio()) {
                observer.disconnect();
                break;
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(e) => {
            log::error!("Failed to create IntersectionObserver: {:?}", e);
            return None;
        }
    };
    observer.observe(element);

    Some(Subscription::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    pub config: CounterConfig,
    pub highlights: Vec<Highlight>,
}

#[function_component(StatsSection)]
pub fn stats_section(props: &StatsProps) -> Html {
    let section_ref = use_node_ref();
    let counts = use_state(|| vec![0u64; props.config.targets.len()]);
    let started = use_state(|| false);
    let finished = use_state(|| false);
    let animator = {
        let config = props.config.clone();
        use_mut_ref(move || CounterAnimator::new(&config))
    };

    // Start once the section scrolls into view.
    {
        let section_ref = section_ref.clone();
        let animator = animator.clone();
        let started = started.clone();
        let threshold = props.config.threshold;
        use_effect_with_deps(
            move |_| {
                let subscription = section_ref.cast::<Element>().and_then(|element| {
                    observe_visibility(&element, threshold, move |is_intersecting, ratio| {
                        let fired = animator.borrow_mut().observe(is_intersecting, ratio);
                        if fired {
                            log::info!("Stats section visible, starting counters");
                            started.set(true);
                        }
                        fired
                    })
                });
                move || {
                    if let Some(mut subscription) = subscription {
                        subscription.stop();
                    }
                }
            },
            (),
        );
    }

    // One interval per run; cleanup cancels it on completion or unmount.
    {
        let deps = (*started, *finished);
        let animator = animator.clone();
        let counts = counts.clone();
        let finished = finished.clone();
        let interval_ms = props.config.interval_ms();
        use_effect_with_deps(
            move |deps: &(bool, bool)| {
                let subscription = wants_ticker(deps).then(|| {
                    let interval = Interval::new(interval_ms, move || {
                        let mut animator = animator.borrow_mut();
                        if let Some(snapshot) = animator.tick() {
                            counts.set(snapshot);
                        }
                        if animator.is_finished() {
                            finished.set(true);
                        }
                    });
                    Subscription::new(move || {
                        interval.cancel();
                    })
                });
                move || {
                    if let Some(mut subscription) = subscription {
                        subscription.stop();
                    }
                }
            },
            deps,
        );
    }

    html! {
        <section id="stats-section" class="stats-section" ref={section_ref}>
            <style>
                {r#"
                    .stats-section {
                        padding: 5rem 1.5rem;
                        background: linear-gradient(135deg, #2563eb, #9333ea, #db2777);
                        color: #fff;
                        text-align: center;
                    }
                    .stats-section h2 { font-size: 2.5rem; margin-bottom: 1rem; }
                    .stats-section h2 span { display: block; color: #fde047; }
                    .stats-grid, .highlights-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 2rem;
                        max-width: 1200px;
                        margin: 3rem auto 0;
                    }
                    .stat-count { font-size: 3rem; font-weight: 700; }
                    .stat-label { font-size: 1.1rem; color: #dbeafe; }
                    .highlight-title { font-weight: 700; margin-bottom: 0.5rem; }
                    .highlight-description { color: #dbeafe; }
                "#}
            </style>
            <h2>{"Trusted by Families"}<span>{"Worldwide"}</span></h2>
            <p>{"Join thousands of families who have made learning fun and effective with TecaiKids"}</p>
            <div class="stats-grid">
                {
                    props.config.targets.iter().zip(counts.iter()).map(|(target, count)| {
                        html! {
                            <div class="stat-item" key={target.key}>
                                <div class="stat-count">{format!("{}{}", format_count(*count), target.suffix)}</div>
                                <div class="stat-label">{target.label}</div>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
            <div class="highlights-grid">
                {
                    props.highlights.iter().map(|highlight| {
                        html! {
                            <div class="highlight-item" key={highlight.title}>
                                <div class="highlight-title">{"🏆 "}{highlight.title}</div>
                                <div class="highlight-description">{highlight.description}</div>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
