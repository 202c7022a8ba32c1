use yew::prelude::*;

use crate::theme::brand_gradient;

#[derive(Properties, PartialEq)]
pub struct PetalButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(true)]
    pub primary: bool,
    /// Render as a link instead of a `<button>`.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or(false)]
    pub external: bool,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

/// Button with the leaf-shaped corners used for every call to action.
#[function_component(PetalButton)]
pub fn petal_button(props: &PetalButtonProps) -> Html {
    let class = classes!(
        "petal-button",
        if props.primary { "petal-primary" } else { "petal-secondary" },
        props.class.clone()
    );
    let onclick = props.onclick.clone();
    let label = html! { <span class="petal-label">{ for props.children.iter() }</span> };

    match &props.href {
        Some(href) if props.external => html! {
            <a class={class} href={href.clone()} target="_blank" rel="noopener noreferrer" {onclick}>
                { label }
            </a>
        },
        Some(href) => html! {
            <a class={class} href={href.clone()} {onclick}>{ label }</a>
        },
        None => html! {
            <button type={props.button_type.clone()} class={class} {onclick}>
                { label }
            </button>
        },
    }
}

pub fn css() -> String {
    format!(
        r#"
        .petal-button {{
            position: relative;
            display: inline-flex;
            align-items: center;
            justify-content: center;
            gap: 0.5rem;
            padding: 0.75rem 2rem;
            font: inherit;
            font-weight: 600;
            color: white;
            border: none;
            cursor: pointer;
            overflow: hidden;
            border-radius: 20px 5px 20px 5px;
            transition: transform 0.3s ease, box-shadow 0.3s ease, background 0.3s ease;
        }}
        .petal-button:hover {{
            transform: scale(1.05);
        }}
        .petal-button:active {{
            transform: scale(0.95);
        }}
        .petal-primary {{
            background: {gradient};
            box-shadow: 0 0 20px rgba(139, 92, 246, 0.4);
        }}
        .petal-primary:hover {{
            box-shadow: 0 0 30px rgba(217, 70, 239, 0.6);
        }}
        .petal-secondary {{
            background: rgba(255, 255, 255, 0.1);
            backdrop-filter: blur(12px);
            border: 1px solid rgba(255, 255, 255, 0.2);
        }}
        .petal-secondary:hover {{
            background: rgba(255, 255, 255, 0.2);
        }}
        .petal-label {{
            position: relative;
            z-index: 1;
        }}
        .petal-button .arrow {{
            display: inline-block;
            transition: transform 0.3s ease;
        }}
        .petal-button:hover .arrow {{
            transform: translateX(4px);
        }}
        "#,
        gradient = brand_gradient("to right")
    )
}
