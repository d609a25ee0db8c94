use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GoldDividerProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Decorative gold rule used under section headings.
#[function_component(GoldDivider)]
pub fn gold_divider(props: &GoldDividerProps) -> Html {
    html! {
        <div class={classes!("gold-divider", props.class.clone())}>
            <span class="gold-divider-line long"></span>
            <span class="gold-divider-dot"></span>
            <span class="gold-divider-line short"></span>
        </div>
    }
}
