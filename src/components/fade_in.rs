use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

/// Axis of the pre-reveal offset applied before the content settles in place.
#[derive(Clone, Copy, PartialEq, Default)]
pub enum FadeDirection {
    #[default]
    Up,
    Left,
    Right,
    None,
}

pub fn direction_class(direction: FadeDirection) -> &'static str {
    match direction {
        FadeDirection::Up => "fade-up",
        FadeDirection::Left => "fade-left",
        FadeDirection::Right => "fade-right",
        FadeDirection::None => "fade-none",
    }
}

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    pub children: Children,
    #[prop_or_default]
    pub direction: FadeDirection,
    /// Transition delay in milliseconds, for staggering sibling reveals.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Wraps content and reveals it the first time it enters the viewport.
///
/// The observer disconnects after the first intersecting entry, so scrolling
/// the content out of view and back never replays the transition.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node_ref = use_node_ref();
    let visible = use_state(|| false);

    {
        let node_ref = node_ref.clone();
        let visible = visible.clone();
        use_effect_with_deps(move |_| {
            let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        visible.set(true);
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

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node_ref}
            class={classes!(
                "fade-in",
                direction_class(props.direction),
                (*visible).then(|| "visible"),
                props.class.clone()
            )}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_direction_is_up() {
        assert_eq!(direction_class(FadeDirection::default()), "fade-up");
    }

    #[test]
    fn each_direction_maps_to_its_own_class() {
        let classes = [
            direction_class(FadeDirection::Up),
            direction_class(FadeDirection::Left),
            direction_class(FadeDirection::Right),
            direction_class(FadeDirection::None),
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
