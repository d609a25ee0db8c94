use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod data;
mod components {
    pub mod counter;
    pub mod divider;
    pub mod fade_in;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
    }
}

/// Whether the bar should wear the opaque blurred treatment at this scroll
/// offset. At or below the threshold it stays transparent.
pub fn nav_scrolled(offset: i32) -> bool {
    offset > config::NAV_SCROLL_THRESHOLD
}

/// Mobile menu state after pressing the burger button.
pub fn menu_after_burger(open: bool) -> bool {
    !open
}

/// Mobile menu state after selecting any nav link. Always closed, whatever
/// the menu was doing before.
pub fn menu_after_link_selection(_open: bool) -> bool {
    false
}

/// `(label, anchor)` pairs for the in-page sections, in page order.
pub const NAV_LINKS: [(&str, &str); 6] = [
    ("事務所について", "#about"),
    ("業務内容", "#services"),
    ("弁護士紹介", "#attorneys"),
    ("解決実績", "#results"),
    ("よくある質問", "#faq"),
    ("アクセス", "#access"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = document.document_element().unwrap().scroll_top();
                is_scrolled.set(nav_scrolled(scroll_top));
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(menu_after_burger(*menu_open));
        })
    };

    // No prevent_default here: the anchors must still scroll to their section.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(menu_after_link_selection(*menu_open));
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <span class="nav-logo-en">{config::FIRM_NAME_EN}</span>
                    <span class="nav-logo-jp">{config::FIRM_NAME_JP}</span>
                </a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="メニュー">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        NAV_LINKS.iter().map(|(label, href)| {
                            html! {
                                <a href={*href} class="nav-link" onclick={close_menu.clone()}>
                                    {*label}
                                </a>
                            }
                        }).collect::<Html>()
                    }
                    <a href="#contact" class="nav-cta" onclick={close_menu.clone()}>
                        {"無料相談"}
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::{menu_after_burger, menu_after_link_selection, nav_scrolled};

    #[test]
    fn nav_stays_transparent_up_to_the_threshold() {
        assert!(!nav_scrolled(0));
        assert!(!nav_scrolled(59));
        assert!(!nav_scrolled(60));
    }

    #[test]
    fn nav_switches_treatment_past_the_threshold() {
        assert!(nav_scrolled(61));
        assert!(nav_scrolled(2400));
    }

    #[test]
    fn burger_button_toggles_the_menu() {
        assert!(menu_after_burger(false));
        assert!(!menu_after_burger(true));
    }

    #[test]
    fn link_selection_closes_the_menu_from_any_state() {
        assert!(!menu_after_link_selection(true));
        assert!(!menu_after_link_selection(false));
    }
}
