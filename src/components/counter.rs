use yew::prelude::*;
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

/// Number of animation steps between zero and the target value.
const STEPS: u32 = 50;
/// Delay between steps; STEPS * TICK_MS gives the total duration (2s).
const TICK_MS: u32 = 40;

/// Intermediate display value for a given animation step.
pub fn stepped_value(target: u32, step: u32) -> u64 {
    let step = step.min(STEPS);
    u64::from(target) * u64::from(step) / u64::from(STEPS)
}

/// Formats `n` with comma digit grouping: 3200 becomes "3,200".
pub fn format_grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub value: u32,
    #[prop_or_default]
    pub suffix: &'static str,
}

/// Counts from zero up to `value` the first time the element scrolls into
/// view, then stays at the target. The observer disconnects on the first
/// trigger, so the animation never restarts.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node_ref = use_node_ref();
    let started = use_state(|| false);
    let step = use_state(|| 0u32);

    {
        let node_ref = node_ref.clone();
        let started = started.clone();
        use_effect_with_deps(move |_| {
            let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        started.set(true);
                        observer.disconnect();
                    }
                }
            }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

            let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref()).unwrap();
            if let Some(element) = node_ref.cast::<Element>() {
                observer.observe(&element);
            }

            move || {
                observer.disconnect();
                drop(callback);
            }
        }, ());
    }

    // Chain one timeout per step until the target is reached.
    {
        let started = started.clone();
        let step = step.clone();
        use_effect_with_deps(move |(started, step)| {
            if **started && **step < STEPS {
                let next = **step + 1;
                let step = step.clone();
                let timeout = Timeout::new(TICK_MS, move || {
                    step.set(next);
                });
                timeout.forget();
            }
            || ()
        }, (started, step));
    }

    html! {
        <span ref={node_ref} class="animated-counter">
            { format_grouped(stepped_value(props.value, *step)) }
            { props.suffix }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_inserts_commas_every_three_digits() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(98), "98");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(3200), "3,200");
        assert_eq!(format_grouped(1_234_567), "1,234,567");
    }

    #[test]
    fn animation_starts_at_zero_and_ends_at_target() {
        assert_eq!(stepped_value(3200, 0), 0);
        assert_eq!(stepped_value(3200, STEPS), 3200);
    }

    #[test]
    fn intermediate_steps_never_overshoot() {
        let mut previous = 0;
        for step in 0..=STEPS {
            let value = stepped_value(3200, step);
            assert!(value >= previous);
            assert!(value <= 3200);
            previous = value;
        }
    }

    #[test]
    fn steps_past_the_end_clamp_to_target() {
        assert_eq!(stepped_value(25, STEPS + 10), 25);
    }
}
